//! The decode pipeline.

use crate::header::decode_header;
use crate::{
    ButtonClickReason, FrameCursor, GpsFix, Header, Profile, Result, SensorContent,
    SensorReadings,
};

/// A fully decoded uplink frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFrame {
    /// The header flags. `uplink_reason_button` is set for long presses too.
    pub header: Header,
    /// The CRC byte, as sent.
    pub crc: u8,
    /// The battery level byte, as sent.
    pub battery_level: u8,
    /// How the button was pressed.
    pub button_click_reason: ButtonClickReason,
    /// The onboard sensor section, if the header announced one.
    pub sensors: Option<SensorReadings>,
    /// The GPS fix, if the header announced one.
    pub gps: Option<GpsFix>,
}

/// A frame decoder for one device profile.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    profile: Profile,
}

impl Decoder {
    /// Create a decoder for frames of `profile`.
    pub const fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Return the profile of this decoder.
    pub const fn profile(&self) -> Profile {
        self.profile
    }

    /// Decode a frame. Bytes after the last announced section are ignored.
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedFrame> {
        let (frame, len) = self.decode_with_len(bytes)?;
        if len < bytes.len() {
            warn!("ignoring {} trailing bytes", bytes.len() - len);
        }
        Ok(frame)
    }

    /// Decode a frame and return the number of bytes it took up.
    pub fn decode_with_len(&self, bytes: &[u8]) -> Result<(DecodedFrame, usize)> {
        trace!("decoding {} bytes", bytes.len());

        let mut cursor = FrameCursor::new(bytes);
        let (mut header, crc, battery_level) = decode_header(&mut cursor)?;
        debug!("header: crc {}, battery {}", crc, battery_level);

        let sensors = if header.contains_onboard_sensors {
            let content = SensorContent::decode(&mut cursor)?;
            debug!("sensor content: {:#x}", content.bits());
            let readings =
                SensorReadings::decode(content, &mut cursor, self.profile.field_decoders())?;
            debug!("sensor readings end at {}", cursor.position());
            Some(readings)
        } else {
            None
        };

        let button_event = sensors
            .as_ref()
            .is_some_and(|s| s.content.contains(SensorContent::BUTTON_EVENT_INFO));
        let (button_click_reason, promote) =
            ButtonClickReason::classify(header.uplink_reason_button, button_event);
        if promote {
            header.uplink_reason_button = true;
        }

        let gps = if header.contains_gps {
            let fix = GpsFix::decode(&mut cursor)?;
            debug!("gps fix with {} satellites", fix.num_svs);
            Some(fix)
        } else {
            None
        };

        trace!("decoded {} of {} bytes", cursor.position(), cursor.len());

        Ok((
            DecodedFrame {
                header,
                crc,
                battery_level,
                button_click_reason,
                sensors,
                gps,
            },
            cursor.position(),
        ))
    }
}

/// Decode a frame of `profile`.
///
/// Shorthand for `Decoder::new(profile).decode(bytes)`.
pub fn decode(profile: Profile, bytes: &[u8]) -> Result<DecodedFrame> {
    Decoder::new(profile).decode(bytes)
}
