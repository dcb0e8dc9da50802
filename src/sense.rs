//! Camera activity sensing.
//!
//! The camera's activity LED line idles low (with a pull-up reading it as
//! a steady level) and looks like a PWM signal while the camera captures.
//! An edge interrupt records the latest rising/falling timestamps and a
//! periodic classifier turns that window into an on/off verdict.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

/// Cadence at which [`ActivityMonitor::classify`] should run.
///
/// Bounds the reaction delay between camera state and light state.
pub const CLASSIFY_INTERVAL: Duration = Duration::from_millis(100);

/// Window difference above which the line counts as actively driven.
///
/// Empirical threshold: an idle window stays well under 150 us, an active
/// PWM well over 1500 us.
const ACTIVITY_THRESHOLD_US: u64 = 1000;

/// Logical level of the sense line after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenseLevel {
    High,
    Low,
}

/// Latest edge timestamps of one classification window, in microseconds.
#[derive(Debug, Clone, Copy, Default)]
struct EdgeWindow {
    last_on_us: u64,
    last_off_us: u64,
}

/// Shared between the edge interrupt, the classifier timer and the
/// render loop. All accessors are O(1) critical sections, safe to call
/// from interrupt context.
pub struct ActivityMonitor {
    window: Mutex<Cell<EdgeWindow>>,
    active: Mutex<Cell<bool>>,
}

impl ActivityMonitor {
    pub const fn new() -> Self {
        Self {
            window: Mutex::new(Cell::new(EdgeWindow {
                last_on_us: 0,
                last_off_us: 0,
            })),
            active: Mutex::new(Cell::new(false)),
        }
    }

    /// Record a sense-line transition.
    ///
    /// Call from the edge interrupt. Every transition overwrites its slot
    /// unconditionally; there is no debounce.
    pub fn edge(&self, level: SenseLevel, at: Instant) {
        let micros = at.as_micros();
        critical_section::with(|cs| {
            let cell = self.window.borrow(cs);
            let mut window = cell.get();
            match level {
                SenseLevel::High => window.last_on_us = micros,
                SenseLevel::Low => window.last_off_us = micros,
            }
            cell.set(window);
        });
    }

    /// Classify the window gathered since the previous call and reset it.
    ///
    /// Call every [`CLASSIFY_INTERVAL`]. The comparison is an unsigned
    /// magnitude heuristic over the two timestamps, not a duty-cycle
    /// measurement: a window without edges classifies inactive, and the
    /// subtraction deliberately wraps when the off edge is the newer one.
    /// Both slots reset to zero so a stale window cannot bleed into the
    /// next one.
    pub fn classify(&self) -> bool {
        critical_section::with(|cs| {
            let window = self.window.borrow(cs).replace(EdgeWindow::default());
            let active =
                window.last_on_us.wrapping_sub(window.last_off_us) > ACTIVITY_THRESHOLD_US;
            self.active.borrow(cs).set(active);
            active
        })
    }

    /// Latest verdict, read by the render loop.
    pub fn camera_active(&self) -> bool {
        critical_section::with(|cs| self.active.borrow(cs).get())
    }
}

impl Default for ActivityMonitor {
    fn default() -> Self {
        Self::new()
    }
}
