//! Driver for SSD1306 128x64 monochrome OLED controllers.
//!
//! The driver talks to the controller through a single byte-pair primitive,
//! [`DisplayInterface::send`], and keeps traffic on that bus low:
//!
//! - addressing mode and page window changes are only sent when they differ
//!   from what the controller already has ([`AddressingState`]),
//! - bitmap fonts are compiled once into column bytes ([`FontTable`]),
//! - progress bars only rewrite the columns whose state changed
//!   ([`Display::draw_bar`]).
//!
//! There is no frame buffer: every draw call writes straight into controller
//! RAM.
//!
//! ## Example
//!
//! ```
//! use ssd1306::{Builder, Display, DisplayInterface, Icon};
//!
//! #[derive(Debug, Default)]
//! struct Count(usize);
//!
//! impl DisplayInterface for Count {
//!     type Error = core::convert::Infallible;
//!
//!     fn send(&mut self, _control: u8, _value: u8) -> Result<(), Self::Error> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let config = Builder::new().contrast(0x40).build()?;
//! let mut display = Display::new(Count::default(), config)?;
//! display.initialize_defaults().unwrap();
//! display.set_charge_pump(true).unwrap();
//! display.set_power(true).unwrap();
//! display.clear_screen().unwrap();
//!
//! display.draw_icon(0, Icon::Speed, 0, 6).unwrap();
//! display.draw_text(0, "42 km/h", 10, 40, 6).unwrap();
//! display.draw_bar(2, 0, 128, 0.42).unwrap();
//!
//! // Same reading again: nothing to send
//! let sent = display.interface().0;
//! display.draw_bar(2, 0, 128, 0.42).unwrap();
//! assert_eq!(display.interface().0, sent);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

extern crate alloc;

pub mod addressing;
pub mod bar;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod fonts;
pub mod icon;
pub mod interface;
pub mod text;

#[cfg(test)]
mod mock;

pub use addressing::{AddressMode, AddressingState};
pub use bar::{BAR_EMPTY, BAR_FILLED, BarRegion, BarState, BarUpdate};
pub use config::{Builder, Config};
pub use display::Display;
pub use error::{BuilderError, Error, FontError};
pub use font::{DEFAULT_FONT_HEIGHT, FontTable, GlyphSource, Glyphs, compile};
pub use fonts::{FONT_3X6, FONT_4X6};
pub use icon::{ICON_WIDTH, Icon};
pub use interface::{DEFAULT_ADDRESS, DisplayInterface, I2cInterface};

/// Panel width in columns
pub const DISPLAY_WIDTH: usize = 128;
/// Panel height in rows
pub const DISPLAY_HEIGHT: usize = 64;
/// Eight-row pages in controller RAM
pub const PAGE_COUNT: usize = DISPLAY_HEIGHT / 8;
/// Highest column address
pub const MAX_COLUMN: u8 = (DISPLAY_WIDTH - 1) as u8;
/// Highest page address
pub const MAX_PAGE: u8 = (PAGE_COUNT - 1) as u8;
