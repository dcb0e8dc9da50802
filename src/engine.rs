//! Main-loop engine tying camera activity, host commands and rendering.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripDriver;
use crate::host::CommandReceiver;
use crate::render::LightRenderer;
use crate::report::{COMMAND_RELEASE_OVERRIDE, Control, HostCommand};
use crate::sense::ActivityMonitor;
use crate::settings::{Settings, SettingsStorage, SettingsStore, StorageError};

/// Baseline sleep between loop ticks.
pub const IDLE_DELAY: Duration = Duration::from_millis(1);

/// The cooperative main loop body.
///
/// Owns every piece of mutable state. The platform feeds it edges through
/// the shared [`ActivityMonitor`], commands through the command channel,
/// and drives it forever:
///
/// ```ignore
/// loop {
///     let idle = engine.tick();
///     delay(idle);
/// }
/// ```
pub struct RingEngine<'a, S: StripDriver, B: SettingsStorage, const N: usize> {
    strip: S,
    store: SettingsStore<B>,
    commands: CommandReceiver<'a, N>,
    monitor: &'a ActivityMonitor,
    renderer: LightRenderer,
    settings: Settings,
    manual_override: bool,
}

impl<'a, S: StripDriver, B: SettingsStorage, const N: usize> RingEngine<'a, S, B, N> {
    /// Bring up the engine, loading persisted settings.
    ///
    /// A missing record is created with defaults. An unreachable medium
    /// is a bring-up failure; the caller decides how to surface it.
    pub fn new(
        strip: S,
        storage: B,
        commands: CommandReceiver<'a, N>,
        monitor: &'a ActivityMonitor,
    ) -> Result<Self, StorageError> {
        let mut store = SettingsStore::new(storage);
        let settings = store.load()?;
        Ok(Self {
            strip,
            store,
            commands,
            monitor,
            renderer: LightRenderer::new(),
            settings,
            manual_override: false,
        })
    }

    /// Run one loop tick: apply queued commands, then render.
    ///
    /// While the manual override is engaged the automatic render is
    /// skipped and the last host-pushed frame stands. Returns how long
    /// the caller should sleep before the next tick.
    pub fn tick(&mut self) -> Duration {
        self.process_commands();

        let mut delay = IDLE_DELAY;
        if !self.manual_override {
            let pacing = self
                .renderer
                .render_auto(&self.settings, self.monitor.camera_active());
            self.strip.write(self.renderer.frame());
            if let Some(pacing) = pacing {
                delay += pacing;
            }
        }
        delay
    }

    /// Drain and apply all queued host commands.
    fn process_commands(&mut self) {
        while let Ok(command) = self.commands.try_receive() {
            match command {
                HostCommand::Settings(settings) => self.apply_settings(settings),
                HostCommand::Control(control) => self.apply_control(&control),
                HostCommand::Mode(mode) => {
                    // In-memory only; the host persists via a settings
                    // report when it means it.
                    self.settings.mode = mode;
                }
                HostCommand::Unknown(_) => {}
            }
        }
    }

    /// Replace the defaults and persist them.
    fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.store.save(&self.settings);
        // Read back what actually landed on storage.
        if let Ok(persisted) = self.store.load() {
            self.settings = persisted;
        }
    }

    /// Engage or release the manual override and push the requested frame.
    fn apply_control(&mut self, control: &Control) {
        if control.command == COMMAND_RELEASE_OVERRIDE {
            #[cfg(feature = "esp32-log")]
            println!("engine: reverting to camera control");
            self.manual_override = false;
        } else {
            self.manual_override = true;
        }
        self.renderer.apply_control(control);
        self.strip.write(self.renderer.frame());
    }

    /// Current in-memory settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether host control is suppressing the camera watcher.
    pub fn manual_override(&self) -> bool {
        self.manual_override
    }
}
