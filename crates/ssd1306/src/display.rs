//! Core display operations

use alloc::collections::BTreeMap;

use log::{debug, warn};

use crate::addressing::{AddressMode, AddressingState};
use crate::bar::{BarRegion, BarState};
use crate::command::{
    CHARGE_PUMP_DISABLE, CHARGE_PUMP_ENABLE, COM_SCAN_NORMAL, COM_SCAN_REVERSED, CONTROL_COMMAND,
    CONTROL_DATA, DISPLAY_OFF, DISPLAY_ON, ENTIRE_DISPLAY_ON, ENTIRE_DISPLAY_RESUME,
    INVERT_DISPLAY, NORMAL_DISPLAY, SEGMENT_REMAP_OFF, SEGMENT_REMAP_ON, SET_CHARGE_PUMP,
    SET_CLOCK_DIV, SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_OFFSET, SET_MULTIPLEX_RATIO,
    SET_START_LINE,
};
use crate::config::{Config, MAX_CONTRAST, MAX_LINE, MIN_MULTIPLEX_RATIO};
use crate::error::Error;
use crate::font::FontTable;
use crate::interface::DisplayInterface;
use crate::{DISPLAY_WIDTH, MAX_COLUMN, MAX_PAGE, PAGE_COUNT};

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for SSD1306
///
/// Owns the bus interface together with everything cached about the
/// controller: the addressing state, the compiled fonts and the history of
/// every progress bar drawn. All operations are synchronous and take
/// `&mut self`; callers needing several producers must serialize access.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    pub(crate) interface: I,
    /// Display configuration
    config: Config,
    /// Addressing mode and windows last sent
    pub(crate) addressing: AddressingState,
    /// Compiled glyphs keyed by font height
    pub(crate) fonts: FontTable,
    /// Last fill column of every bar drawn
    pub(crate) bars: BTreeMap<BarRegion, BarState>,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display with the built-in font at height 6
    ///
    /// Nothing is sent to the controller; call
    /// [`initialize_defaults`](Self::initialize_defaults) once the panel is
    /// powered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Font`] if the built-in font art fails to compile.
    pub fn new(interface: I, config: Config) -> Result<Self, Error<I>> {
        Ok(Self::with_fonts(interface, config, FontTable::builtin()?))
    }

    /// Create a new Display with a custom font table
    pub fn with_fonts(interface: I, config: Config, fonts: FontTable) -> Self {
        Self {
            interface,
            config,
            addressing: AddressingState::new(),
            fonts,
            bars: BTreeMap::new(),
        }
    }

    /// Issue the power-up configuration sequence
    ///
    /// The order is required by the controller and must not change:
    /// multiplex ratio, display offset, start line, segment remap, COM scan
    /// direction, COM pins, contrast, RAM content mode, display mode, clock,
    /// addressing mode. Power and charge pump are left to the caller.
    pub fn initialize_defaults(&mut self) -> DisplayResult<I> {
        debug!("initializing controller: {:?}", self.config);
        self.addressing.invalidate();

        let config = self.config.clone();
        self.set_multiplex_ratio(config.multiplex_ratio)?;
        self.set_display_offset(config.display_offset)?;
        self.set_start_line(config.start_line)?;
        self.set_segment_remap(config.segment_remap)?;
        self.set_scan_direction(config.com_scan_reversed)?;
        self.set_com_pin_config(config.com_pins)?;
        self.set_contrast(config.contrast)?;
        self.set_entire_display_on(false)?;
        self.set_display_ram_inverted(config.inverted)?;
        self.set_clock(config.clock)?;
        self.set_address_mode(AddressMode::Horizontal)
    }

    /// Turn the panel on or off (sleep)
    pub fn set_power(&mut self, on: bool) -> DisplayResult<I> {
        debug!("power {}", if on { "on" } else { "off" });
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Set contrast, clamped to 0..=127
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        if contrast > MAX_CONTRAST {
            warn!("contrast {contrast} clamped to {MAX_CONTRAST}");
        }
        self.send_command(SET_CONTRAST)?;
        self.send_command(contrast.min(MAX_CONTRAST))
    }

    /// Set clock divide ratio / oscillator frequency
    pub fn set_clock(&mut self, value: u8) -> DisplayResult<I> {
        self.send_command(SET_CLOCK_DIV)?;
        self.send_command(value)
    }

    /// Enable or disable the internal charge pump
    pub fn set_charge_pump(&mut self, enabled: bool) -> DisplayResult<I> {
        self.send_command(SET_CHARGE_PUMP)?;
        self.send_command(if enabled {
            CHARGE_PUMP_ENABLE
        } else {
            CHARGE_PUMP_DISABLE
        })
    }

    /// COM output scan direction; `true` scans bottom to top
    pub fn set_scan_direction(&mut self, reversed: bool) -> DisplayResult<I> {
        self.send_command(if reversed {
            COM_SCAN_REVERSED
        } else {
            COM_SCAN_NORMAL
        })
    }

    /// Segment remap; `true` maps column 127 to SEG0
    pub fn set_segment_remap(&mut self, remapped: bool) -> DisplayResult<I> {
        self.send_command(if remapped {
            SEGMENT_REMAP_ON
        } else {
            SEGMENT_REMAP_OFF
        })
    }

    /// COM pins hardware configuration
    pub fn set_com_pin_config(&mut self, value: u8) -> DisplayResult<I> {
        self.send_command(SET_COM_PINS)?;
        self.send_command(value)
    }

    /// Normal (`false`) or inverse (`true`) pixel polarity
    pub fn set_display_ram_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Light every pixel regardless of RAM (`true`) or follow RAM (`false`)
    pub fn set_entire_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(if on {
            ENTIRE_DISPLAY_ON
        } else {
            ENTIRE_DISPLAY_RESUME
        })
    }

    /// Set multiplex ratio, clamped to 15..=63
    pub fn set_multiplex_ratio(&mut self, ratio: u8) -> DisplayResult<I> {
        self.send_command(SET_MULTIPLEX_RATIO)?;
        self.send_command(ratio.clamp(MIN_MULTIPLEX_RATIO, MAX_LINE))
    }

    /// Set vertical display offset, clamped to 0..=63
    pub fn set_display_offset(&mut self, offset: u8) -> DisplayResult<I> {
        self.send_command(SET_DISPLAY_OFFSET)?;
        self.send_command(offset.min(MAX_LINE))
    }

    /// Set display start line, clamped to 0..=63
    pub fn set_start_line(&mut self, line: u8) -> DisplayResult<I> {
        self.send_command(SET_START_LINE | line.min(MAX_LINE))
    }

    /// Select the addressing mode, skipped when unchanged
    pub fn set_address_mode(&mut self, mode: AddressMode) -> DisplayResult<I> {
        self.addressing.set_address_mode(&mut self.interface, mode)
    }

    /// Set the column window (inclusive); always sent
    pub fn set_column_window(&mut self, start: u8, end: u8) -> DisplayResult<I> {
        self.addressing
            .set_column_window(&mut self.interface, start, end)
    }

    /// Set the page window (inclusive), skipped when unchanged
    pub fn set_page_window(&mut self, start: u8, end: u8) -> DisplayResult<I> {
        self.addressing
            .set_page_window(&mut self.interface, start, end)
    }

    /// Write one column of eight vertical pixels at the controller cursor
    ///
    /// The controller advances its cursor according to the addressing mode
    /// and wraps inside the active windows.
    pub fn write_column(&mut self, byte: u8) -> DisplayResult<I> {
        send_data(&mut self.interface, byte)
    }

    /// Select the full column and page windows
    pub fn reset_cursor(&mut self) -> DisplayResult<I> {
        self.set_column_window(0, MAX_COLUMN)?;
        self.set_page_window(0, MAX_PAGE)
    }

    /// Fill one page with a repeated column byte
    pub fn fill_page(&mut self, page: u8, byte: u8) -> DisplayResult<I> {
        self.set_address_mode(AddressMode::Horizontal)?;
        self.set_page_window(page, page)?;
        self.set_column_window(0, MAX_COLUMN)?;
        for _ in 0..DISPLAY_WIDTH {
            self.write_column(byte)?;
        }
        Ok(())
    }

    /// Fill the whole panel with a repeated column byte
    pub fn fill_screen(&mut self, byte: u8) -> DisplayResult<I> {
        self.set_address_mode(AddressMode::Horizontal)?;
        self.reset_cursor()?;
        for _ in 0..DISPLAY_WIDTH * PAGE_COUNT {
            self.write_column(byte)?;
        }
        Ok(())
    }

    /// Blank the panel and forget every bar, so they redraw in full
    ///
    /// Bars are forgotten before anything is written, so a clear interrupted
    /// by a bus error still leaves every bar to redraw in full.
    pub fn clear_screen(&mut self) -> DisplayResult<I> {
        self.forget_bars();
        self.fill_screen(0x00)
    }

    /// Addressing state last sent to the controller
    pub fn addressing(&self) -> &AddressingState {
        &self.addressing
    }

    /// Access the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the compiled fonts
    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    /// Access the compiled fonts mutably, e.g. to register another height
    pub fn fonts_mut(&mut self) -> &mut FontTable {
        &mut self.fonts
    }

    /// Access the bus interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Access the bus interface mutably
    ///
    /// Writes made directly through the interface bypass the addressing cache.
    /// If they change the addressing, call
    /// [`initialize_defaults`](Self::initialize_defaults) afterwards.
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Send a command or command parameter byte
    fn send_command(&mut self, byte: u8) -> DisplayResult<I> {
        self.interface
            .send(CONTROL_COMMAND, byte)
            .map_err(Error::Interface)
    }
}

/// Send one GDDRAM byte
pub(crate) fn send_data<I: DisplayInterface>(interface: &mut I, byte: u8) -> DisplayResult<I> {
    interface.send(CONTROL_DATA, byte).map_err(Error::Interface)
}
