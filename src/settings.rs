//! Durable device settings.
//!
//! Settings live in a single fixed 64-byte record on whatever storage the
//! platform provides. The record carries no checksum or version: bytes
//! 0..5 are the meaningful fields, the tail is zero-filled on write and
//! ignored on read.

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Size of the persisted settings record.
pub const SETTINGS_RECORD_LEN: usize = 64;

/// Storage failure modes surfaced by [`SettingsStorage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// No record exists yet.
    NotFound,
    /// The medium cannot be accessed at all.
    Unavailable,
}

/// Named-record storage seam.
///
/// Production maps this to a file on the onboard flash filesystem; tests
/// use an in-memory buffer.
pub trait SettingsStorage {
    /// Read the whole record into `buf`.
    fn read(&mut self, buf: &mut [u8; SETTINGS_RECORD_LEN]) -> Result<(), StorageError>;

    /// Write the whole record from `buf`, flushed before returning.
    fn write(&mut self, buf: &[u8; SETTINGS_RECORD_LEN]) -> Result<(), StorageError>;
}

/// The device defaults applied while the camera drives the light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Persisted and exchanged with the host, currently not applied to
    /// output.
    pub brightness: u8,
    pub mode: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            brightness: 255,
            mode: 0,
        }
    }
}

impl Settings {
    /// Serialize into a fresh zero-filled record.
    pub fn to_record(&self) -> [u8; SETTINGS_RECORD_LEN] {
        let mut record = [0u8; SETTINGS_RECORD_LEN];
        record[0] = self.r;
        record[1] = self.g;
        record[2] = self.b;
        record[3] = self.brightness;
        record[4] = self.mode;
        record
    }

    /// Deserialize from a record.
    ///
    /// Trailing bytes are ignored and field values taken as-is; an unknown
    /// `mode` simply renders as a no-op.
    pub fn from_record(record: &[u8; SETTINGS_RECORD_LEN]) -> Self {
        Self {
            r: record[0],
            g: record[1],
            b: record[2],
            brightness: record[3],
            mode: record[4],
        }
    }
}

/// Settings persistence with a self-healing bootstrap.
pub struct SettingsStore<B: SettingsStorage> {
    backend: B,
}

impl<B: SettingsStorage> SettingsStore<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist `settings`.
    ///
    /// Storage failures are swallowed: the in-memory copy keeps driving
    /// the light.
    pub fn save(&mut self, settings: &Settings) {
        let record = settings.to_record();
        if self.backend.write(&record).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("settings: write failed");
        }
    }

    /// Load settings, creating the record when missing.
    ///
    /// A missing record self-heals: defaults are written out and read
    /// back. An unavailable medium propagates so bring-up can treat the
    /// device as faulty.
    pub fn load(&mut self) -> Result<Settings, StorageError> {
        let mut record = [0u8; SETTINGS_RECORD_LEN];
        match self.backend.read(&mut record) {
            Ok(()) => Ok(Settings::from_record(&record)),
            Err(StorageError::NotFound) => {
                #[cfg(feature = "esp32-log")]
                println!("settings: record missing, writing defaults");
                self.backend.write(&Settings::default().to_record())?;
                self.backend.read(&mut record)?;
                Ok(Settings::from_record(&record))
            }
            Err(err) => Err(err),
        }
    }
}
