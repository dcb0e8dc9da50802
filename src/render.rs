//! Frame computation for the ring.

use embassy_time::Duration;

use crate::color::{OFF, Rgb, wheel};
use crate::report::{COMMAND_ALL, COMMAND_PER_LED, Control, RING_LEDS};
use crate::settings::Settings;

/// Render mode: every pixel shows the configured color.
pub const MODE_SOLID: u8 = 0;
/// Render mode: hue wheel rotating around the ring.
pub const MODE_RAINBOW: u8 = 1;

/// Frame-rate cap for the rainbow animation.
pub const FRAME_PACING: Duration = Duration::from_millis(20);

/// Computes ring frames from settings, camera activity and host control.
///
/// Owns the frame buffer, so a pass-through mode keeps whatever was
/// rendered last, matching the physical strip retaining its pixels.
pub struct LightRenderer {
    frame: [Rgb; RING_LEDS],
    cycle: u8,
}

impl LightRenderer {
    pub const fn new() -> Self {
        Self {
            frame: [OFF; RING_LEDS],
            cycle: 0,
        }
    }

    /// The most recently computed frame.
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    /// Compute the automatic frame for one loop tick.
    ///
    /// An inactive camera forces all pixels off. An active camera renders
    /// the configured mode; unknown modes change nothing and the previous
    /// frame stands. Returns the pacing delay the caller should add to
    /// its idle sleep; only the rainbow animation is capped.
    #[allow(clippy::cast_possible_truncation)]
    pub fn render_auto(&mut self, settings: &Settings, camera_active: bool) -> Option<Duration> {
        if !camera_active {
            self.frame = [OFF; RING_LEDS];
            return None;
        }
        match settings.mode {
            MODE_SOLID => {
                let color = Rgb {
                    r: settings.r,
                    g: settings.g,
                    b: settings.b,
                };
                self.frame = [color; RING_LEDS];
                None
            }
            MODE_RAINBOW => {
                // The cycle counter advances once per pixel drawn, wrapping
                // at 256, which keeps the wheel sliding between frames.
                for (i, pixel) in self.frame.iter_mut().enumerate() {
                    let position = (i * 256 / RING_LEDS + usize::from(self.cycle)) & 255;
                    *pixel = wheel(position as u8);
                    self.cycle = self.cycle.wrapping_add(1);
                }
                Some(FRAME_PACING)
            }
            _ => None,
        }
    }

    /// Apply a host control frame.
    ///
    /// Command 0 takes the per-LED samples, command 1 the uniform color.
    /// Only the color channels are used; strip-level brightness stays
    /// untouched. Any other command leaves the frame as-is.
    pub fn apply_control(&mut self, control: &Control) {
        match control.command {
            COMMAND_PER_LED => {
                for (pixel, led) in self.frame.iter_mut().zip(control.leds.iter()) {
                    *pixel = Rgb {
                        r: led.r,
                        g: led.g,
                        b: led.b,
                    };
                }
            }
            COMMAND_ALL => {
                let color = Rgb {
                    r: control.all.r,
                    g: control.all.g,
                    b: control.all.b,
                };
                self.frame = [color; RING_LEDS];
            }
            _ => {}
        }
    }
}

impl Default for LightRenderer {
    fn default() -> Self {
        Self::new()
    }
}
