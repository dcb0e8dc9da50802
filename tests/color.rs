mod tests {
    use camring_core::color::{Rgb, wheel};

    #[test]
    fn test_wheel_segment_boundaries() {
        assert_eq!(wheel(0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(wheel(85), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(wheel(170), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_wheel_wraps_back_to_red() {
        assert_eq!(wheel(255), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_wheel_interior_positions() {
        // One step into the first segment ramps red down towards blue.
        assert_eq!(wheel(1), Rgb { r: 252, g: 3, b: 0 });
        assert_eq!(wheel(86), Rgb { r: 0, g: 252, b: 3 });
    }

    #[test]
    fn test_wheel_channels_always_sum_to_full() {
        for pos in 0..=255u8 {
            let color = wheel(pos);
            let sum = u16::from(color.r) + u16::from(color.g) + u16::from(color.b);
            assert_eq!(sum, 255, "position {pos}");
        }
    }
}
