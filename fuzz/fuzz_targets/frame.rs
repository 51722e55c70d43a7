#![no_main]

use tracker_frame::{Decoder, Profile};

use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|input: (Profile, &[u8])| -> Corpus {
    let (profile, data) = input;
    if data.len() > 255 {
        return Corpus::Reject;
    }

    let decoder = Decoder::new(profile);
    if let Ok((frame, len)) = decoder.decode_with_len(data) {
        assert!(len <= data.len());
        assert_eq!(decoder.decode(&data[..len]), Ok(frame));
    }

    Corpus::Keep
});
