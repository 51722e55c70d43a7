use crate::*;

fn decode_hex(profile: Profile, data: &str) -> Result<DecodedFrame> {
    let data = hex::decode(data.replace(' ', "")).unwrap();
    decode(profile, &data)
}

#[test]
fn truncated_header() {
    assert_eq!(
        decode_hex(Profile::Rich, "00ab"),
        Err(Error::UnexpectedEndOfFrame {
            requested: 3,
            remaining: 2
        })
    );
    assert_eq!(
        decode_hex(Profile::Compact, ""),
        Err(Error::UnexpectedEndOfFrame {
            requested: 3,
            remaining: 0
        })
    );
}

#[test]
fn missing_sections() {
    assert_eq!(
        decode_hex(Profile::Rich, "10ab64"),
        Err(Error::UnexpectedEndOfFrame {
            requested: 1,
            remaining: 0
        })
    );
    assert_eq!(
        decode_hex(Profile::Rich, "08ab64 0000"),
        Err(Error::UnexpectedEndOfFrame {
            requested: 19,
            remaining: 2
        })
    );
    // The access point count promises a second MAC address.
    assert_eq!(
        decode_hex(Profile::Compact, "10ab64 10 02 010203040506 0102"),
        Err(Error::UnexpectedEndOfFrame {
            requested: 6,
            remaining: 2
        })
    );
}

#[cfg(not(feature = "panic"))]
#[test]
fn full_beacon_in_truncated_scan() {
    assert_eq!(
        decode_hex(Profile::Rich, "10ab64 80 01 01 03 000000000000"),
        Err(Error::InvalidBeaconType(3))
    );
}

#[cfg(not(feature = "panic"))]
#[test]
fn unknown_slot_info() {
    assert_eq!(
        decode_hex(Profile::Rich, "10ab64 80 01 60"),
        Err(Error::InvalidSlotInfo(3))
    );
    assert_eq!(
        decode_hex(Profile::Compact, "10ab64 80 01 03 00"),
        Err(Error::InvalidSlotInfo(3))
    );
}

#[cfg(not(feature = "panic"))]
#[test]
fn unknown_external_sensor() {
    assert_eq!(
        decode_hex(Profile::Rich, "10ab64 40 ff 0000"),
        Err(Error::InvalidExternalSensorType(0xff))
    );
    // Untyped in the compact profile.
    assert!(decode_hex(Profile::Compact, "10ab64 40 ff 00").is_ok());
}

#[test]
fn error_messages() {
    use std::string::ToString;

    assert_eq!(
        Error::UnexpectedEndOfFrame {
            requested: 19,
            remaining: 2
        }
        .to_string(),
        "unexpected end of frame: 19 bytes requested, 2 remaining"
    );
    assert_eq!(
        Error::InvalidExternalSensorType(0xff).to_string(),
        "invalid external sensor type 0xff"
    );
}
