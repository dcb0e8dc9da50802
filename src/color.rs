//! Color helpers for the ring.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off.
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Map a 0-255 position onto a red -> green -> blue -> red hue wheel.
///
/// Three linear segments; in each, two channels ramp against one another
/// while the third stays pinned at zero. Positions 0, 85 and 170 land on
/// pure red, green and blue.
pub fn wheel(pos: u8) -> Rgb {
    let pos = 255 - pos;
    if pos < 85 {
        return Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        };
    }
    if pos < 170 {
        let pos = pos - 85;
        return Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        };
    }
    let pos = pos - 170;
    Rgb {
        r: pos * 3,
        g: 255 - pos * 3,
        b: 0,
    }
}
