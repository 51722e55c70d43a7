use crate::*;

/// Decode a hex encoded frame and check that every byte was consumed.
#[allow(unused_macros)]
macro_rules! test {
    ($profile:expr, $data:expr) => {{
        let data = hex::decode($data.replace(' ', "")).unwrap();
        let (frame, len) = Decoder::new($profile).decode_with_len(&data).unwrap();
        assert_eq!(len, data.len());
        frame
    }};
}

mod parsing;

#[test]
fn header_only() {
    for profile in [Profile::Rich, Profile::Compact] {
        let frame = test!(profile, "00ab64");
        assert_eq!(frame.header, Header::default());
        assert_eq!(frame.crc, 0xab);
        assert_eq!(frame.battery_level, 0x64);
        assert_eq!(frame.button_click_reason, ButtonClickReason::None);
        assert!(frame.sensors.is_none());
        assert!(frame.gps.is_none());
    }
}

#[test]
fn gps_only() {
    let frame = test!(
        Profile::Rich,
        "08ab64 03 075bcd15 fb3b4c8e 01f4 05 0a 000c 0e10 0f 09"
    );
    assert!(frame.header.contains_gps);
    assert!(frame.sensors.is_none());

    let gps = frame.gps.unwrap();
    assert!((gps.latitude - 12.3456789).abs() < 1e-7);
    assert_eq!(gps.num_svs, 9);
}

#[test]
fn button_click_reasons() {
    let frame = test!(Profile::Rich, "01ab64");
    assert_eq!(frame.button_click_reason, ButtonClickReason::Single);
    assert!(frame.header.uplink_reason_button);

    let frame = test!(Profile::Rich, "10ab64 20");
    assert_eq!(frame.button_click_reason, ButtonClickReason::Long);
    assert!(frame.header.uplink_reason_button);

    let frame = test!(Profile::Compact, "11ab64 20");
    assert_eq!(frame.button_click_reason, ButtonClickReason::Double);
    assert!(frame.header.uplink_reason_button);

    let frame = test!(Profile::Compact, "10ab64 00");
    assert_eq!(frame.button_click_reason, ButtonClickReason::None);
    assert!(!frame.header.uplink_reason_button);
}

#[test]
fn deterministic() {
    let data = hex::decode("18ab64ff3f0929201903e8fc1801f407d00bb821001a2b3c4d5ec464ff380150abcd0001000a13880186a0131194402328ff0203075bcd15fb3b4c8e01f4050a000c0e100f09").unwrap();
    let decoder = Decoder::new(Profile::Rich);
    assert_eq!(decoder.profile(), Profile::Rich);
    assert_eq!(decoder.decode(&data), decoder.decode(&data));
    assert_eq!(decoder.decode(&data), decode(Profile::Rich, &data));
}

#[test]
fn trailing_bytes() {
    let data = [0x00, 0xab, 0x64, 0xff, 0xff];
    let (frame, len) = Decoder::new(Profile::Compact).decode_with_len(&data).unwrap();
    assert_eq!(len, 3);
    assert_eq!(decode(Profile::Compact, &data), Ok(frame));
}

#[cfg(feature = "log")]
#[test]
fn trailing_bytes_are_logged() {
    use std::string::{String, ToString};
    use std::sync::Mutex;
    use std::vec::Vec;

    struct Capture(Mutex<Vec<String>>);

    impl log::Log for Capture {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                self.0.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: Capture = Capture(Mutex::new(Vec::new()));
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(log::LevelFilter::Warn);

    decode(Profile::Rich, &[0x00, 0xab, 0x64, 0xff, 0xff]).unwrap();

    let messages = LOGGER.0.lock().unwrap();
    assert!(messages.iter().any(|m| m == "ignoring 2 trailing bytes"));
}
