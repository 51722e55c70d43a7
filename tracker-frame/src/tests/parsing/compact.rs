use crate::*;
use std::string::ToString;

#[test]
fn every_section() {
    let frame = test!(
        Profile::Compact,
        "10ab64 ff3f \
         0929 \
         2019 \
         01 ff 80 \
         05 fb 00 \
         00 \
         1234 \
         01 07 0102030405060708090a0b0c0d0e0f10 0001 0002 \
         65 \
         c350 \
         00 \
         07 \
         09"
    );
    assert_eq!(frame.button_click_reason, ButtonClickReason::Long);

    let sensors = frame.sensors.unwrap();
    assert_eq!(sensors.temperature, Some(23.45));
    assert_eq!(sensors.light, Some(Light::Raw(0x2019)));
    assert_eq!(
        sensors.accelerometer,
        Some(Acceleration::Raw {
            x: 1,
            y: -1,
            z: -128
        })
    );
    assert_eq!(
        sensors.max_acceleration,
        Some(MaxAcceleration::Raw { x: 5, y: -5, z: 0 })
    );

    let wifi = sensors.wifi.unwrap();
    assert_eq!(wifi.status, ScanStatus::Success);
    assert!(wifi.access_points.is_empty());

    assert_eq!(sensors.external_sensor, Some(ExternalSensor::Raw([0x12, 0x34])));

    let bluetooth = sensors.bluetooth.unwrap();
    assert_eq!(bluetooth.status, None);
    assert_eq!(bluetooth.slot_info, SlotInfo::Full);
    assert_eq!(bluetooth.beacons.len(), 1);

    let beacon = &bluetooth.beacons[0];
    assert_eq!(beacon.rssi, 25);
    assert_eq!(beacon.slot, None);
    match beacon.kind {
        BeaconKind::FullBeacon { id1, id2, id3 } => {
            assert_eq!(
                id1.unwrap().to_string(),
                "01020304-0506-0708-090a-0b0c0d0e0f10"
            );
            assert_eq!(id2.to_string(), "0001");
            assert_eq!(id3.to_string(), "0002");
        }
        kind => panic!("unexpected beacon {kind:?}"),
    }

    assert_eq!(sensors.relative_humidity, Some(50.5));
    assert_eq!(sensors.air_pressure, Some(100_000));
    assert_eq!(sensors.man_down, Some(ManDown::Present(false)));
    assert_eq!(sensors.tilt, Some(Tilt::Present(true)));
    assert_eq!(sensors.retransmit_count, Some(9));
    assert!(frame.gps.is_none());
}

#[test]
fn slot_matched_beacon() {
    let frame = test!(Profile::Compact, "10ab64 80 01 02 0f 00 aabb ccdd 0000");
    let bluetooth = frame.sensors.unwrap().bluetooth.unwrap();

    assert_eq!(bluetooth.slot_info, SlotInfo::SlotMatch);
    assert_eq!(
        bluetooth.beacons[0],
        Beacon {
            rssi: 27,
            slot: Some(3),
            kind: BeaconKind::FullBeacon {
                id1: None,
                id2: codec::HexBytes([0xaa, 0xbb]),
                id3: codec::HexBytes([0xcc, 0xdd]),
            },
        }
    );
}

#[test]
fn shared_fields_match_rich() {
    let data = hex::decode("10ab64 11 fc18 10".replace(' ', "")).unwrap();
    let rich = decode(Profile::Rich, &data).unwrap();
    let compact = decode(Profile::Compact, &data).unwrap();

    assert_eq!(rich.sensors, compact.sensors);
    assert_eq!(compact.sensors.unwrap().temperature, Some(-10.0));
}
