// SSD1306 command definitions

// Control bytes (first byte of every bus write)
pub const CONTROL_COMMAND: u8 = 0x00; // Following byte is a command or command parameter
pub const CONTROL_DATA: u8 = 0x40; // Following byte is GDDRAM data (one pixel column)

// Fundamental commands
pub const SET_CONTRAST: u8 = 0x81; // Contrast control, one parameter byte
pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4; // Output follows RAM content
pub const ENTIRE_DISPLAY_ON: u8 = 0xA5; // Output ignores RAM content
pub const NORMAL_DISPLAY: u8 = 0xA6; // 1 in RAM = pixel on
pub const INVERT_DISPLAY: u8 = 0xA7; // 0 in RAM = pixel on
pub const DISPLAY_OFF: u8 = 0xAE; // Sleep mode
pub const DISPLAY_ON: u8 = 0xAF; // Normal mode

// Addressing
pub const SET_ADDRESSING_MODE: u8 = 0x20; // Memory addressing mode, one parameter byte
pub const SET_COLUMN_ADDRESS: u8 = 0x21; // Column window start/end, two parameter bytes
pub const SET_PAGE_ADDRESS: u8 = 0x22; // Page window start/end, two parameter bytes

// Hardware configuration
pub const SET_START_LINE: u8 = 0x40; // OR-ed with the start line (0..=63)
pub const SEGMENT_REMAP_OFF: u8 = 0xA0; // Column 0 mapped to SEG0
pub const SEGMENT_REMAP_ON: u8 = 0xA1; // Column 127 mapped to SEG0
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8; // Multiplex ratio, one parameter byte
pub const COM_SCAN_NORMAL: u8 = 0xC0; // Scan COM0 to COM[N-1]
pub const COM_SCAN_REVERSED: u8 = 0xC8; // Scan COM[N-1] to COM0
pub const SET_DISPLAY_OFFSET: u8 = 0xD3; // Vertical shift, one parameter byte
pub const SET_COM_PINS: u8 = 0xDA; // COM pins hardware configuration, one parameter byte

// Timing and driving scheme
pub const SET_CLOCK_DIV: u8 = 0xD5; // Clock divide ratio / oscillator frequency

// Charge pump
pub const SET_CHARGE_PUMP: u8 = 0x8D; // Charge pump setting, one parameter byte
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
pub const CHARGE_PUMP_DISABLE: u8 = 0x10;

// Addressing mode parameter bytes
pub const MODE_HORIZONTAL: u8 = 0x00;
pub const MODE_VERTICAL: u8 = 0x01;
pub const MODE_PAGE: u8 = 0x02;
