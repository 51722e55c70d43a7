use colored::*;
use tracker_frame::codec::HexBytes;
use tracker_frame::*;

/// An error that can occur when parsing a frame from the command line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not valid hex.
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
    /// The frame could not be decoded.
    #[error("invalid frame: {0}")]
    Frame(#[from] tracker_frame::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

struct Writer<'b> {
    buffer: &'b mut String,
    indent: usize,
}

impl<'b> Writer<'b> {
    fn new(buffer: &'b mut String) -> Self {
        Self { buffer, indent: 0 }
    }

    fn increase_indent(&mut self) {
        self.indent += 2;
    }

    fn decrease_indent(&mut self) {
        self.indent -= 2;
    }

    fn write(&mut self, s: String) {
        self.buffer.push_str(&" ".repeat(self.indent));
        self.buffer.push_str(&s);
    }

    fn writeln(&mut self, s: String) {
        self.write(s);
        self.buffer.push('\n');
    }

    fn field(&mut self, name: &str, value: impl core::fmt::Display) {
        self.writeln(format!("{}: {}", name.bold(), value));
    }
}

pub struct FrameParser {}

impl FrameParser {
    /// Parse a hex encoded frame. Whitespace in the input is ignored.
    pub fn parse_hex(input: &str, profile: Profile) -> Result<String> {
        let input: String = input.split_whitespace().collect();
        let data = hex::decode(input)?;
        Self::parse(&data, profile)
    }

    pub fn parse(input: &[u8], profile: Profile) -> Result<String> {
        let decoder = Decoder::new(profile);
        let frame = decoder.decode(input)?;
        let mut buffer = String::new();

        let mut w = Writer::new(&mut buffer);

        // -----------------------------------------------------------------
        // Header
        // -----------------------------------------------------------------
        let header = &frame.header;
        w.writeln("Header".underline().bold().to_string());
        w.increase_indent();
        w.field("profile", decoder.profile().to_string().bright_blue());
        w.field("crc", format!("{:02x}", frame.crc));
        w.field("battery level", frame.battery_level);
        w.field("uplink reason button", header.uplink_reason_button as usize);
        w.field("uplink reason movement", header.uplink_reason_movement as usize);
        w.field("uplink reason gpio", header.uplink_reason_gpio as usize);
        w.field("contains gps", header.contains_gps as usize);
        w.field("contains onboard sensors", header.contains_onboard_sensors as usize);
        w.field("contains special", header.contains_special as usize);
        w.field("button click", frame.button_click_reason);
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Onboard sensors
        // -----------------------------------------------------------------
        if let Some(sensors) = &frame.sensors {
            w.writeln("Sensors".underline().bold().to_string());
            w.increase_indent();
            write_sensors(&mut w, sensors);
            w.decrease_indent();
        }

        // -----------------------------------------------------------------
        // GPS
        // -----------------------------------------------------------------
        if let Some(gps) = &frame.gps {
            w.writeln("GPS".underline().bold().to_string());
            w.increase_indent();
            w.field("nav stat", gps.nav_stat);
            w.field("latitude", gps.latitude);
            w.field("longitude", gps.longitude);
            w.field("altitude", format!("{} m", gps.alt_ref));
            w.field("accuracy", format!("h {}, v {}", gps.h_acc, gps.v_acc));
            w.field("speed over ground", gps.sog);
            w.field("course over ground", format!("{}°", gps.cog));
            w.field("hdop", gps.hdop);
            w.field("satellites", gps.num_svs);
            w.decrease_indent();
        }

        Ok(buffer)
    }
}

fn write_sensors(w: &mut Writer, sensors: &SensorReadings) {
    w.field("content", sensors.content);

    if let Some(temperature) = sensors.temperature {
        w.field("temperature", format!("{temperature} °C"));
    }

    if let Some(light) = sensors.light {
        match light {
            Light::Lux(lux) => w.field("light", format!("{lux} lux")),
            Light::Raw(raw) => w.field("light", format!("{raw} (raw)")),
        }
    }

    if let Some(acceleration) = sensors.accelerometer {
        match acceleration {
            Acceleration::Scaled { x, y, z } => w.field(
                "acceleration",
                format!("x: {x} g, y: {y} g, z: {z} g"),
            ),
            Acceleration::Raw { x, y, z } => {
                w.field("acceleration", format!("x: {x}, y: {y}, z: {z}"))
            }
        }
    }

    if let Some(max) = sensors.max_acceleration {
        match max {
            MaxAcceleration::Scaled { new, history } => w.field(
                "max acceleration",
                format!("new: {new} g, history: {history} g"),
            ),
            MaxAcceleration::Raw { x, y, z } => {
                w.field("max acceleration", format!("x: {x}, y: {y}, z: {z}"))
            }
        }
    }

    if let Some(wifi) = &sensors.wifi {
        w.writeln("Wi-Fi".italic().to_string());
        w.increase_indent();
        w.field("status", wifi.status);
        for ap in &wifi.access_points {
            match ap.signal_strength {
                Some(rssi) => w.writeln(format!("{} ({rssi} dBm)", ap.mac_address)),
                None => w.writeln(ap.mac_address.to_string()),
            }
        }
        w.decrease_indent();
    }

    if let Some(external) = sensors.external_sensor {
        let value = match external {
            ExternalSensor::Battery {
                battery_a,
                battery_b,
            } => format!("battery a: {battery_a}, battery b: {battery_b}"),
            ExternalSensor::Temperature(temperature) => format!("temperature: {temperature} °C"),
            ExternalSensor::DetectSwitch(value) => format!("detect switch: {value}"),
            ExternalSensor::ButtonState { state, click_count } => {
                format!("button: {state}, clicks: {click_count}")
            }
            ExternalSensor::Raw(raw) => format!("raw: {}", HexBytes(raw)),
        };
        w.field("external sensor", value);
    }

    if let Some(bluetooth) = &sensors.bluetooth {
        w.writeln("Bluetooth".italic().to_string());
        w.increase_indent();
        if let Some(status) = bluetooth.status {
            w.field("status", status);
        }
        w.field("slot info", format!("{:?}", bluetooth.slot_info));
        for beacon in &bluetooth.beacons {
            write_beacon(w, beacon);
        }
        w.decrease_indent();
    }

    if let Some(humidity) = sensors.relative_humidity {
        w.field("relative humidity", format!("{humidity} %"));
    }

    if let Some(pressure) = sensors.air_pressure {
        w.field("air pressure", pressure);
    }

    if let Some(man_down) = sensors.man_down {
        match man_down {
            ManDown::Status {
                state,
                position_alarm,
                movement_alarm,
            } => w.field(
                "man-down",
                format!(
                    "{state}, position alarm: {}, movement alarm: {}",
                    position_alarm as usize, movement_alarm as usize
                ),
            ),
            ManDown::Present(present) => w.field("man-down", present as usize),
        }
    }

    if let Some(tilt) = sensors.tilt {
        match tilt {
            Tilt::Angles {
                current_tilt,
                current_direction,
                maximum_tilt_history,
                direction_history,
            } => {
                w.field(
                    "tilt",
                    format!("{current_tilt}° towards {current_direction}°"),
                );
                w.field(
                    "max tilt",
                    format!("{maximum_tilt_history}° towards {direction_history}°"),
                );
            }
            Tilt::Present(present) => w.field("tilt", present as usize),
        }
    }

    if let Some(count) = sensors.retransmit_count {
        w.field("retransmit count", count);
    }
}

fn write_beacon(w: &mut Writer, beacon: &Beacon) {
    w.writeln(beacon.kind.beacon_type().to_string().bold().to_string());
    w.increase_indent();
    w.field("rssi", format!("{} dBm", beacon.rssi));
    if let Some(slot) = beacon.slot {
        w.field("slot", slot);
    }

    match beacon.kind {
        BeaconKind::IBeacon { uuid, major, minor } => {
            if let Some(uuid) = uuid {
                w.field("uuid", uuid);
            }
            w.field("major", major);
            w.field("minor", minor);
        }
        BeaconKind::Eddystone {
            namespace,
            instance,
        } => {
            if let Some(namespace) = namespace {
                w.field("namespace", namespace);
            }
            w.field("instance", instance);
        }
        BeaconKind::AltBeacon { id1, id2, id3 } => {
            if let Some(id1) = id1 {
                w.field("id1", id1);
            }
            w.field("id2", id2);
            w.field("id3", id3);
        }
        BeaconKind::FullBeacon { id1, id2, id3 } => {
            if let Some(id1) = id1 {
                w.field("id1", id1);
            }
            w.field("id2", id2);
            w.field("id3", id3);
        }
    }
    w.decrease_indent();
}
