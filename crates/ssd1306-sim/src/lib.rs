//! SSD1306 controller emulation at the GDDRAM level.
//!
//! [`Emulator`] implements [`DisplayInterface`], so it can stand in for the
//! I2C bus under a [`ssd1306::Display`]. It decodes the command stream the
//! driver produces (addressing mode, column/page windows, power, contrast and
//! the one-parameter configuration commands), advances its own cursor after
//! every data byte like the real controller and keeps the 1 KiB of display RAM.
//! Bus traffic is counted so tests can check how many bytes an update cost.

use core::fmt;

use log::{trace, warn};
use ssd1306::command::*;
use ssd1306::{
    AddressMode, DISPLAY_HEIGHT, DISPLAY_WIDTH, DisplayInterface, MAX_COLUMN, MAX_PAGE, PAGE_COUNT,
};

/// Size of the display RAM in bytes
pub const GDDRAM_SIZE: usize = DISPLAY_WIDTH * PAGE_COUNT;

/// Bus error raised by the emulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulatorError {
    /// Control byte is neither command (0x00) nor data (0x40)
    UnknownControl(u8),
}

impl fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmulatorError::UnknownControl(byte) => write!(f, "Unknown control byte {byte:#04X}"),
        }
    }
}

impl std::error::Error for EmulatorError {}

/// Parameter byte the command decoder is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CmdState {
    Ready,
    AddressMode,
    ColumnStart,
    ColumnEnd,
    PageStart,
    PageEnd,
    Contrast,
    /// Parameter of a command the emulator does not model
    Skip,
}

/// SSD1306 128x64 controller
#[derive(Clone)]
pub struct Emulator {
    gddram: [u8; GDDRAM_SIZE],
    mode: AddressMode,
    column: u8,
    page: u8,
    column_window: (u8, u8),
    page_window: (u8, u8),
    display_on: bool,
    inverted: bool,
    entire_display_on: bool,
    contrast: u8,
    cmd_state: CmdState,
    /// Command and parameter bytes received
    pub command_count: usize,
    /// GDDRAM bytes received
    pub data_count: usize,
}

impl Default for Emulator {
    fn default() -> Self {
        Self {
            gddram: [0; GDDRAM_SIZE],
            // Controller reset state
            mode: AddressMode::Page,
            column: 0,
            page: 0,
            column_window: (0, MAX_COLUMN),
            page_window: (0, MAX_PAGE),
            display_on: false,
            inverted: false,
            entire_display_on: false,
            contrast: 0x7F,
            cmd_state: CmdState::Ready,
            command_count: 0,
            data_count: 0,
        }
    }
}

impl Emulator {
    /// Controller in its reset state with blank RAM
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one command or command parameter byte
    pub fn receive_command(&mut self, byte: u8) {
        self.command_count += 1;

        match self.cmd_state {
            CmdState::AddressMode => {
                self.mode = match byte & 0x03 {
                    MODE_HORIZONTAL => AddressMode::Horizontal,
                    MODE_VERTICAL => AddressMode::Vertical,
                    _ => AddressMode::Page,
                };
                self.cmd_state = CmdState::Ready;
                return;
            }
            CmdState::ColumnStart => {
                self.column_window.0 = byte.min(MAX_COLUMN);
                self.column = self.column_window.0;
                self.cmd_state = CmdState::ColumnEnd;
                return;
            }
            CmdState::ColumnEnd => {
                self.column_window.1 = byte.min(MAX_COLUMN);
                self.cmd_state = CmdState::Ready;
                return;
            }
            CmdState::PageStart => {
                self.page_window.0 = byte.min(MAX_PAGE);
                self.page = self.page_window.0;
                self.cmd_state = CmdState::PageEnd;
                return;
            }
            CmdState::PageEnd => {
                self.page_window.1 = byte.min(MAX_PAGE);
                self.cmd_state = CmdState::Ready;
                return;
            }
            CmdState::Contrast => {
                self.contrast = byte;
                self.cmd_state = CmdState::Ready;
                return;
            }
            CmdState::Skip => {
                self.cmd_state = CmdState::Ready;
                return;
            }
            CmdState::Ready => {}
        }

        match byte {
            SET_ADDRESSING_MODE => self.cmd_state = CmdState::AddressMode,
            SET_COLUMN_ADDRESS => self.cmd_state = CmdState::ColumnStart,
            SET_PAGE_ADDRESS => self.cmd_state = CmdState::PageStart,
            SET_CONTRAST => self.cmd_state = CmdState::Contrast,
            DISPLAY_OFF => self.display_on = false,
            DISPLAY_ON => self.display_on = true,
            NORMAL_DISPLAY => self.inverted = false,
            INVERT_DISPLAY => self.inverted = true,
            ENTIRE_DISPLAY_RESUME => self.entire_display_on = false,
            ENTIRE_DISPLAY_ON => self.entire_display_on = true,
            SET_MULTIPLEX_RATIO | SET_DISPLAY_OFFSET | SET_CLOCK_DIV | SET_COM_PINS
            | SET_CHARGE_PUMP => self.cmd_state = CmdState::Skip,
            // Page addressing mode cursor
            0x00..=0x0F => self.column = (self.column & 0xF0) | byte,
            0x10..=0x1F => self.column = ((byte & 0x07) << 4) | (self.column & 0x0F),
            0xB0..=0xB7 => self.page = byte & 0x07,
            // Start line, remap and scan direction only change the panel mapping
            0x40..=0x7F | SEGMENT_REMAP_OFF | SEGMENT_REMAP_ON | COM_SCAN_NORMAL
            | COM_SCAN_REVERSED => {}
            other => warn!("ignoring unknown command {other:#04X}"),
        }
    }

    /// Feed one GDDRAM byte and advance the cursor
    pub fn receive_data(&mut self, byte: u8) {
        self.data_count += 1;
        let index = usize::from(self.page) * DISPLAY_WIDTH + usize::from(self.column);
        if let Some(cell) = self.gddram.get_mut(index) {
            *cell = byte;
        }
        trace!("data {byte:#04X} at page {} column {}", self.page, self.column);
        self.advance();
    }

    fn advance(&mut self) {
        let (column_start, column_end) = self.column_window;
        let (page_start, page_end) = self.page_window;
        match self.mode {
            AddressMode::Horizontal => {
                if self.column >= column_end {
                    self.column = column_start;
                    self.page = if self.page >= page_end {
                        page_start
                    } else {
                        self.page + 1
                    };
                } else {
                    self.column += 1;
                }
            }
            AddressMode::Vertical => {
                if self.page >= page_end {
                    self.page = page_start;
                    self.column = if self.column >= column_end {
                        column_start
                    } else {
                        self.column + 1
                    };
                } else {
                    self.page += 1;
                }
            }
            // Page mode wraps to column 0 of the same page
            AddressMode::Page => {
                self.column = if self.column >= MAX_COLUMN {
                    0
                } else {
                    self.column + 1
                };
            }
        }
    }

    /// Display RAM, page-major
    pub fn gddram(&self) -> &[u8; GDDRAM_SIZE] {
        &self.gddram
    }

    /// The 128 column bytes of `page`
    pub fn page_bytes(&self, page: u8) -> &[u8] {
        let start = usize::from(page.min(MAX_PAGE)) * DISPLAY_WIDTH;
        &self.gddram[start..start + DISPLAY_WIDTH]
    }

    /// RAM bit at pixel (`x`, `y`); false outside the panel
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
            return false;
        }
        self.gddram[(y / 8) * DISPLAY_WIDTH + x] & (1 << (y % 8)) != 0
    }

    /// Whether the panel shows pixel (`x`, `y`) lit, after power, polarity
    /// and entire-display-on are applied
    pub fn lit(&self, x: usize, y: usize) -> bool {
        if !self.display_on {
            return false;
        }
        if self.entire_display_on {
            return true;
        }
        self.pixel(x, y) ^ self.inverted
    }

    /// Current addressing mode
    pub fn mode(&self) -> AddressMode {
        self.mode
    }

    /// Cursor as (page, column)
    pub fn cursor(&self) -> (u8, u8) {
        (self.page, self.column)
    }

    /// Active column window (inclusive)
    pub fn column_window(&self) -> (u8, u8) {
        self.column_window
    }

    /// Active page window (inclusive)
    pub fn page_window(&self) -> (u8, u8) {
        self.page_window
    }

    /// Whether the panel is powered on
    pub fn is_on(&self) -> bool {
        self.display_on
    }

    /// Last contrast value received
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Reset the traffic counters
    pub fn reset_counters(&mut self) {
        self.command_count = 0;
        self.data_count = 0;
    }

    /// Render the panel as text, two pixel rows per line using half blocks
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((DISPLAY_WIDTH + 1) * DISPLAY_HEIGHT / 2);
        for y in (0..DISPLAY_HEIGHT).step_by(2) {
            for x in 0..DISPLAY_WIDTH {
                out.push(match (self.lit(x, y), self.lit(x, y + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Debug for Emulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emulator")
            .field("mode", &self.mode)
            .field("cursor", &(self.page, self.column))
            .field("column_window", &self.column_window)
            .field("page_window", &self.page_window)
            .field("display_on", &self.display_on)
            .field("command_count", &self.command_count)
            .field("data_count", &self.data_count)
            .finish_non_exhaustive()
    }
}

impl DisplayInterface for Emulator {
    type Error = EmulatorError;

    fn send(&mut self, control: u8, value: u8) -> Result<(), Self::Error> {
        match control {
            CONTROL_COMMAND => self.receive_command(value),
            CONTROL_DATA => self.receive_data(value),
            other => return Err(EmulatorError::UnknownControl(other)),
        }
        Ok(())
    }
}
