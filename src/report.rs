//! Host report protocol.
//!
//! The host and the device exchange fixed 64-byte reports. Byte 0 is the
//! instruction tag; the rest of the report is interpreted according to
//! the tag:
//!
//! | tag   | payload                                                       |
//! |-------|---------------------------------------------------------------|
//! | 0     | settings: bytes 1..5 = r, g, b, brightness; byte 5 = mode     |
//! | 1     | control: byte 1 = command, byte 2 = pattern, bytes 3..7 =     |
//! |       | uniform color, bytes 7.. = per-LED samples                    |
//! | 2     | mode: byte 1                                                  |
//! | other | unrecognized, payload ignored                                 |
//!
//! The device answers settings and control reports with [`ACK_ACCEPTED`],
//! unrecognized instructions with a zero-length report, and mode switches
//! with nothing.

use crate::settings::Settings;

/// Number of pixels on the ring. Fixed by the control report layout.
pub const RING_LEDS: usize = 12;

/// Size of every host report, in both directions.
pub const REPORT_LEN: usize = 64;

/// Acknowledgement sent for recognized settings/control reports.
pub const ACK_ACCEPTED: [u8; 1] = [1];

const INSTRUCTION_SETTINGS: u8 = 0;
const INSTRUCTION_CONTROL: u8 = 1;
const INSTRUCTION_MODE: u8 = 2;

/// Control `command` selecting the per-LED color array.
pub const COMMAND_PER_LED: u8 = 0;
/// Control `command` selecting the uniform color.
pub const COMMAND_ALL: u8 = 1;
/// Control `command` handing rendering back to the camera watcher.
pub const COMMAND_RELEASE_OVERRIDE: u8 = 255;

/// One color sample as carried on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Decoded for layout compatibility, not applied to output.
    pub brightness: u8,
}

/// Manual control payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub command: u8,
    /// Reserved by the protocol, currently unused.
    pub pattern: u8,
    pub all: ChannelColor,
    pub leds: [ChannelColor; RING_LEDS],
}

/// A decoded host report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Replace and persist the default settings.
    Settings(Settings),
    /// Drive the ring directly, engaging or releasing the manual override.
    Control(Control),
    /// Switch the render mode in memory only.
    Mode(u8),
    /// Unrecognized instruction tag, kept for the failure acknowledgement.
    Unknown(u8),
}

impl HostCommand {
    /// Decode one report.
    pub fn decode(report: &[u8; REPORT_LEN]) -> Self {
        match report[0] {
            INSTRUCTION_SETTINGS => Self::Settings(Settings {
                r: report[1],
                g: report[2],
                b: report[3],
                brightness: report[4],
                mode: report[5],
            }),
            INSTRUCTION_CONTROL => {
                let mut leds = [ChannelColor::default(); RING_LEDS];
                // Per-LED samples advance one byte per pixel, not four, so
                // neighbouring samples share bytes. Deployed hosts encode
                // this layout; it is preserved as-is.
                for (i, led) in leds.iter_mut().enumerate() {
                    *led = ChannelColor {
                        r: report[i + 7],
                        g: report[i + 8],
                        b: report[i + 9],
                        brightness: report[i + 10],
                    };
                }
                Self::Control(Control {
                    command: report[1],
                    pattern: report[2],
                    all: ChannelColor {
                        r: report[3],
                        g: report[4],
                        b: report[5],
                        brightness: report[6],
                    },
                    leds,
                })
            }
            INSTRUCTION_MODE => Self::Mode(report[1]),
            other => Self::Unknown(other),
        }
    }

    /// Encode into `report`, zero-filling it first.
    ///
    /// Writes the same layout [`decode`](Self::decode) reads, including
    /// the one-byte per-LED stride: later samples overwrite bytes of
    /// earlier ones, exactly as on the device.
    pub fn encode(&self, report: &mut [u8; REPORT_LEN]) {
        report.fill(0);
        match self {
            Self::Settings(settings) => {
                report[0] = INSTRUCTION_SETTINGS;
                report[1] = settings.r;
                report[2] = settings.g;
                report[3] = settings.b;
                report[4] = settings.brightness;
                report[5] = settings.mode;
            }
            Self::Control(control) => {
                report[0] = INSTRUCTION_CONTROL;
                report[1] = control.command;
                report[2] = control.pattern;
                report[3] = control.all.r;
                report[4] = control.all.g;
                report[5] = control.all.b;
                report[6] = control.all.brightness;
                for (i, led) in control.leds.iter().enumerate() {
                    report[i + 7] = led.r;
                    report[i + 8] = led.g;
                    report[i + 9] = led.b;
                    report[i + 10] = led.brightness;
                }
            }
            Self::Mode(mode) => {
                report[0] = INSTRUCTION_MODE;
                report[1] = *mode;
            }
            Self::Unknown(tag) => {
                report[0] = *tag;
            }
        }
    }
}
