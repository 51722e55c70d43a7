use crate::*;
use std::string::ToString;

const FULL_FRAME: &str = "18ab64 ff3f \
    0929 \
    2019 \
    03e8 fc18 01f4 \
    07d0 0bb8 \
    21 001a2b3c4d5e c4 \
    64 ff38 \
    01 50abcd0001000a \
    1388 \
    0186a0 \
    13 \
    1194 40 2328 ff \
    02 \
    03 075bcd15 fb3b4c8e 01f4 05 0a 000c 0e10 0f 09";

#[test]
fn every_section() {
    let frame = test!(Profile::Rich, FULL_FRAME);

    assert!(frame.header.contains_onboard_sensors);
    assert!(frame.header.contains_gps);
    assert_eq!(frame.button_click_reason, ButtonClickReason::Long);
    assert!(frame.header.uplink_reason_button);

    let sensors = frame.sensors.unwrap();
    assert_eq!(sensors.content, SensorContent::all());
    assert_eq!(sensors.temperature, Some(23.45));
    assert_eq!(sensors.light, Some(Light::Lux(1.0)));
    assert_eq!(
        sensors.accelerometer,
        Some(Acceleration::Scaled {
            x: 1.0,
            y: -1.0,
            z: 0.5
        })
    );
    assert_eq!(
        sensors.max_acceleration,
        Some(MaxAcceleration::Scaled {
            new: 2.0,
            history: 3.0
        })
    );

    let wifi = sensors.wifi.unwrap();
    assert_eq!(wifi.status, ScanStatus::Success);
    assert_eq!(wifi.access_points.len(), 1);
    assert_eq!(
        wifi.access_points[0].mac_address.to_string(),
        "00:1a:2b:3c:4d:5e"
    );
    assert_eq!(wifi.access_points[0].signal_strength, Some(-60));

    assert_eq!(sensors.external_sensor, Some(ExternalSensor::Temperature(-2.0)));

    let bluetooth = sensors.bluetooth.unwrap();
    assert_eq!(bluetooth.status, Some(ScanStatus::Success));
    assert_eq!(bluetooth.slot_info, SlotInfo::Truncated);
    assert_eq!(bluetooth.beacons.len(), 1);
    assert_eq!(bluetooth.beacons[0].rssi, -13);
    assert_eq!(
        bluetooth.beacons[0].kind,
        BeaconKind::IBeacon {
            uuid: Some(BeaconId::Short(codec::HexBytes([0xab, 0xcd]))),
            major: codec::HexBytes([0x00, 0x01]),
            minor: codec::HexBytes([0x00, 0x0a]),
        }
    );

    assert_eq!(sensors.relative_humidity, Some(50.0));
    assert_eq!(sensors.air_pressure, Some(100_000));
    assert_eq!(
        sensors.man_down,
        Some(ManDown::Status {
            state: ManDownState::Alarm,
            position_alarm: true,
            movement_alarm: false,
        })
    );
    assert_eq!(
        sensors.tilt,
        Some(Tilt::Angles {
            current_tilt: 45.0,
            current_direction: 90,
            maximum_tilt_history: 90.0,
            direction_history: 360,
        })
    );
    assert_eq!(sensors.retransmit_count, Some(2));

    let gps = frame.gps.unwrap();
    assert_eq!(gps.nav_stat, 3);
    assert_eq!(gps.num_svs, 9);
}

#[test]
fn every_prefix_is_truncated() {
    let data = hex::decode(FULL_FRAME.replace(' ', "")).unwrap();
    for len in 0..data.len() {
        assert!(matches!(
            decode(Profile::Rich, &data[..len]),
            Err(Error::UnexpectedEndOfFrame { .. })
        ));
    }
}

#[test]
fn external_sensors() {
    let frame = test!(Profile::Rich, "10ab64 40 0a 0ce4 0bb8");
    assert_eq!(
        frame.sensors.unwrap().external_sensor,
        Some(ExternalSensor::Battery {
            battery_a: 3300,
            battery_b: 3000
        })
    );

    let frame = test!(Profile::Rich, "10ab64 40 65 01");
    assert_eq!(
        frame.sensors.unwrap().external_sensor,
        Some(ExternalSensor::DetectSwitch(1))
    );

    let frame = test!(Profile::Rich, "10ab64 40 66 13");
    assert_eq!(
        frame.sensors.unwrap().external_sensor,
        Some(ExternalSensor::ButtonState {
            state: IoButtonState::Calling,
            click_count: 3
        })
    );
}

#[test]
fn bluetooth_slot_match() {
    // two beacons, status no_access_points, slot info 2
    let frame = test!(
        Profile::Rich,
        "10ab64 80 01 52 \
         0a 0a 0001 0002 \
         11 3f 0a0b0c0d0e0f"
    );
    let bluetooth = frame.sensors.unwrap().bluetooth.unwrap();

    assert_eq!(bluetooth.status, Some(ScanStatus::NoAccessPoints));
    assert_eq!(bluetooth.slot_info, SlotInfo::SlotMatch);

    let first = &bluetooth.beacons[0];
    assert_eq!(first.slot, Some(2));
    assert_eq!(first.rssi, 7);
    assert_eq!(
        first.kind,
        BeaconKind::AltBeacon {
            id1: None,
            id2: codec::HexBytes([0x00, 0x01]),
            id3: codec::HexBytes([0x00, 0x02]),
        }
    );

    let second = &bluetooth.beacons[1];
    assert_eq!(second.slot, Some(4));
    assert_eq!(second.rssi, -99);
    assert_eq!(second.kind.beacon_type(), BeaconType::Eddystone);
}

#[test]
fn bluetooth_without_beacons() {
    let frame = test!(Profile::Rich, "10ab64 80 01 10");
    let bluetooth = frame.sensors.unwrap().bluetooth.unwrap();
    assert_eq!(bluetooth.status, Some(ScanStatus::NoAccessPoints));
    assert!(bluetooth.beacons.is_empty());
}

#[test]
fn unknown_man_down_state() {
    let frame = test!(Profile::Rich, "10ab64 80 08 27");
    assert_eq!(
        frame.sensors.unwrap().man_down,
        Some(ManDown::Status {
            state: ManDownState::Unknown(7),
            position_alarm: false,
            movement_alarm: true,
        })
    );
}
