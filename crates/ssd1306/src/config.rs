//! Display configuration types and builder

pub use crate::error::BuilderError;

/// Highest contrast value accepted by the driver
pub const MAX_CONTRAST: u8 = 0x7F;
/// Highest display start line / display offset (64 rows)
pub const MAX_LINE: u8 = 63;
/// Lowest multiplex ratio accepted by the controller (16 MUX)
pub const MIN_MULTIPLEX_RATIO: u8 = 0x0F;

/// Display configuration
///
/// Holds the values written by
/// [`Display::initialize_defaults`](crate::display::Display::initialize_defaults).
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Multiplex ratio (rows driven minus one)
    pub multiplex_ratio: u8,
    /// Vertical shift of the COM outputs
    pub display_offset: u8,
    /// RAM row mapped to the top of the panel
    pub start_line: u8,
    /// Mirror columns (column 127 mapped to SEG0)
    pub segment_remap: bool,
    /// Scan COM outputs bottom to top
    pub com_scan_reversed: bool,
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// Contrast (0..=127)
    pub contrast: u8,
    /// Invert pixel polarity
    pub inverted: bool,
    /// Clock divide ratio / oscillator frequency byte
    pub clock: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            // 64 rows
            multiplex_ratio: 0x3F,
            display_offset: 0x00,
            start_line: 0,
            // Modules are mounted rotated; both flips give an upright image
            segment_remap: true,
            com_scan_reversed: true,
            // Alternative COM pin configuration, no left/right remap
            com_pins: 0x12,
            contrast: 0x60,
            inverted: false,
            // Divide ratio 1, oscillator frequency 8
            clock: 0x80,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1306::Builder;
///
/// let config = Builder::new()
///     .contrast(0x7F)
///     .inverted(true)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.contrast, 0x7F);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set multiplex ratio (15..=63)
    pub fn multiplex_ratio(mut self, ratio: u8) -> Self {
        self.config.multiplex_ratio = ratio;
        self
    }

    /// Set display offset (0..=63)
    pub fn display_offset(mut self, offset: u8) -> Self {
        self.config.display_offset = offset;
        self
    }

    /// Set display start line (0..=63)
    pub fn start_line(mut self, line: u8) -> Self {
        self.config.start_line = line;
        self
    }

    /// Mirror the panel horizontally
    pub fn segment_remap(mut self, remapped: bool) -> Self {
        self.config.segment_remap = remapped;
        self
    }

    /// Mirror the panel vertically
    pub fn com_scan_reversed(mut self, reversed: bool) -> Self {
        self.config.com_scan_reversed = reversed;
        self
    }

    /// Set COM pins hardware configuration byte
    pub fn com_pins(mut self, value: u8) -> Self {
        self.config.com_pins = value;
        self
    }

    /// Set contrast (0..=127)
    pub fn contrast(mut self, contrast: u8) -> Self {
        self.config.contrast = contrast;
        self
    }

    /// Invert pixel polarity
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.config.inverted = inverted;
        self
    }

    /// Set clock divide ratio / oscillator frequency byte
    pub fn clock(mut self, value: u8) -> Self {
        self.config.clock = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] if a value is outside the range the
    /// controller accepts.
    pub fn build(self) -> Result<Config, BuilderError> {
        let config = self.config;
        if config.contrast > MAX_CONTRAST {
            return Err(BuilderError::ContrastOutOfRange(config.contrast));
        }
        if !(MIN_MULTIPLEX_RATIO..=MAX_LINE).contains(&config.multiplex_ratio) {
            return Err(BuilderError::MultiplexRatioOutOfRange(
                config.multiplex_ratio,
            ));
        }
        if config.display_offset > MAX_LINE {
            return Err(BuilderError::DisplayOffsetOutOfRange(config.display_offset));
        }
        if config.start_line > MAX_LINE {
            return Err(BuilderError::StartLineOutOfRange(config.start_line));
        }
        Ok(config)
    }
}
