#![no_std]

pub mod channel;
pub mod color;
pub mod engine;
pub mod host;
pub mod render;
pub mod report;
pub mod sense;
pub mod settings;

pub use channel::{Channel, Receiver, Sender};
pub use color::{Rgb, wheel};
pub use engine::{IDLE_DELAY, RingEngine};
pub use host::{CommandChannel, CommandReceiver, CommandSender, HostLink, HostPort};
pub use render::{FRAME_PACING, LightRenderer, MODE_RAINBOW, MODE_SOLID};
pub use report::{ChannelColor, Control, HostCommand, REPORT_LEN, RING_LEDS};
pub use sense::{ActivityMonitor, CLASSIFY_INTERVAL, SenseLevel};
pub use settings::{
    SETTINGS_RECORD_LEN, Settings, SettingsStorage, SettingsStore, StorageError,
};

pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait and pushes one full ring frame
/// per call.
pub trait StripDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
