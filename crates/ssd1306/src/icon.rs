//! Fixed icon bitmaps
//!
//! Icons are stored pre-compiled as column bytes (bit 0 = top row), one set per
//! supported height.

/// Columns reserved for an icon on screen
pub const ICON_WIDTH: u8 = 8;

/// Built-in icons
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Icon {
    /// Speedometer dial
    Speed,
    /// Speedometer dial with the needle pinned to the right
    MaxSpeed,
}

const SPEED_6: [u8; 7] = [
    0b0011_1000,
    0b0100_0100,
    0b0100_1010,
    0b0101_0010,
    0b0100_0010,
    0b0100_0100,
    0b0011_1000,
];

const MAX_SPEED_6: [u8; 7] = [
    0b0011_1000,
    0b0100_0100,
    0b0100_0010,
    0b0101_0010,
    0b0101_0010,
    0b0101_0100,
    0b0011_1000,
];

impl Icon {
    /// Column bytes of the icon drawn at `height`, if that height exists
    pub fn bitmap(self, height: u8) -> Option<&'static [u8]> {
        match (self, height) {
            (Icon::Speed, 6) => Some(&SPEED_6),
            (Icon::MaxSpeed, 6) => Some(&MAX_SPEED_6),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_fit_reserved_width() {
        for icon in [Icon::Speed, Icon::MaxSpeed] {
            let bitmap = icon.bitmap(6).unwrap();
            assert!(bitmap.len() <= ICON_WIDTH as usize);
        }
    }

    #[test]
    fn test_unknown_height_has_no_bitmap() {
        assert_eq!(Icon::Speed.bitmap(8), None);
        assert_eq!(Icon::MaxSpeed.bitmap(16), None);
    }
}
