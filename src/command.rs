//! ST7036 command definitions
//!
//! This module defines the command bytes and bit layouts used to control the
//! ST7036 character LCD controller, together with the settle delays the
//! controller needs after each transfer. Commands are sent over SPI with the
//! RS pin low for commands and high for data.
//!
//! ## Command Structure
//!
//! The ST7036 has several instruction tables sharing the same opcode space.
//! Every command is therefore sent as a pair:
//! 1. Set RS low (command mode)
//! 2. Send the function-set byte selecting the instruction table
//!    ([`instruction_set_select`]), wait [`INSTRUCTION_SET_SETTLE_US`]
//! 3. Send the command byte, wait the command's settle time
//!
//! Data bytes (characters, glyph rows) are sent with RS high and wait
//! [`DATA_SETTLE_US`].
//!
//! ## Example
//!
//! ```
//! use st7036::command::{self, InstructionSet};
//!
//! // Function set byte for the extended table with the default template
//! let select = command::instruction_set_select(0b0011_1000, InstructionSet::Extended, false);
//! assert_eq!(select, 0b0011_1001);
//!
//! // Display on, cursor off, blink on
//! assert_eq!(command::display_mode(true, false, true), 0b0000_1101);
//! ```

// Basic instruction table (IS = 0)

/// Clear display command (0x01)
///
/// Fills DDRAM with spaces and sets the address counter to 0.
/// Needs [`ADDRESS_SETTLE_US`] before the next transfer.
pub const CLEAR: u8 = 0b0000_0001;

/// Entry mode set command (0x04)
///
/// - Bit 1 (I/D): increment address after each write
/// - Bit 0 (S): shift the display on each write
pub const ENTRY_MODE: u8 = 0b0000_0100;

/// Entry mode increment flag
pub const ENTRY_INCREMENT: u8 = 0b0000_0010;

/// Entry mode display shift flag
pub const ENTRY_SHIFT: u8 = 0b0000_0001;

/// Display on/off control command (0x08)
///
/// - Bit 2 (D): display on
/// - Bit 1 (C): cursor visible
/// - Bit 0 (B): cursor blink
pub const SET_DISPLAY_MODE: u8 = 0b0000_1000;

/// Display on flag
pub const DISPLAY_ON: u8 = 0b0000_0100;

/// Cursor visible flag
pub const CURSOR_ON: u8 = 0b0000_0010;

/// Cursor blink flag
pub const BLINK_ON: u8 = 0b0000_0001;

/// Cursor or display shift command (0x10)
///
/// - Bit 3 (S/C): shift the display instead of moving the cursor
/// - Bit 2 (R/L): move to the right
pub const SHIFT: u8 = 0b0001_0000;

/// Shift target flag: display instead of cursor
pub const SHIFT_DISPLAY: u8 = 0b0000_1000;

/// Shift direction flag: right instead of left
pub const SHIFT_RIGHT: u8 = 0b0000_0100;

/// Set CGRAM address command (0x40)
///
/// Low 6 bits select the glyph row: `slot * 8 + row`.
pub const SET_CGRAM_ADDRESS: u8 = 0b0100_0000;

/// Set DDRAM address command (0x80)
pub const SET_DDRAM_ADDRESS: u8 = 0b1000_0000;

// Extended instruction table (IS = 1)

/// Bias set command (0x14)
pub const BIAS: u8 = 0b0001_0100;

/// Power/icon control/contrast high bits command (0x54, booster on)
pub const POWER_ICON_CONTRAST: u8 = 0b0101_0100;

/// Follower control command with follower on and amplifier ratio 3 (0x6B)
pub const FOLLOWER_CONTROL: u8 = 0b0110_1011;

/// Contrast low nibble command (0x70)
pub const CONTRAST_LOW: u8 = 0b0111_0000;

/// Highest contrast value accepted by [`contrast`]
pub const MAX_CONTRAST: u8 = 0x3F;

// Double-height instruction table (IS = 2)

/// Double height position command (0x10)
///
/// Bit 3 (UD) selects which lines are merged.
pub const DOUBLE_HEIGHT_POSITION: u8 = 0b0001_0000;

// Timing, in microseconds

/// Settle time after the instruction-set-select byte
pub const INSTRUCTION_SET_SETTLE_US: u32 = 60;

/// Settle time after a generic command byte
pub const COMMAND_SETTLE_US: u32 = 60;

/// Settle time after clear, home and cursor-address commands
pub const ADDRESS_SETTLE_US: u32 = 1_500;

/// Settle time after a data byte
pub const DATA_SETTLE_US: u32 = 50;

/// Instruction table selected by the function-set byte
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum InstructionSet {
    /// Cursor, mode and RAM addressing commands
    #[default]
    Basic = 0,
    /// Bias, power/contrast and follower commands
    Extended = 1,
    /// Double height position command
    DoubleHeight = 2,
}

/// Which pair of lines is merged into one double-height line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum DoubleHeightPosition {
    /// Lower lines merged
    Bottom = 0,
    /// Upper lines merged
    #[default]
    Top = 1,
}

/// Function-set byte selecting `set`
///
/// `template` carries the fixed interface/line bits; the double-height flag
/// lives in bit 2 of the same register.
pub fn instruction_set_select(template: u8, set: InstructionSet, double_height: bool) -> u8 {
    template | set as u8 | (u8::from(double_height) << 2)
}

/// Display on/off control byte
pub fn display_mode(display_on: bool, cursor_visible: bool, cursor_blink: bool) -> u8 {
    let mut command = SET_DISPLAY_MODE;
    if display_on {
        command |= DISPLAY_ON;
    }
    if cursor_visible {
        command |= CURSOR_ON;
    }
    if cursor_blink {
        command |= BLINK_ON;
    }
    command
}

/// Entry mode byte
pub fn entry_mode(increment: bool, shift: bool) -> u8 {
    let mut command = ENTRY_MODE;
    if increment {
        command |= ENTRY_INCREMENT;
    }
    if shift {
        command |= ENTRY_SHIFT;
    }
    command
}

/// Bias set byte (extended table)
pub fn bias(bias: u8) -> u8 {
    BIAS | (bias << 4) | 1
}

/// The three extended-table bytes programming `contrast`
///
/// Returns `None` when `contrast` exceeds [`MAX_CONTRAST`].
pub fn contrast(contrast: u8) -> Option<[u8; 3]> {
    if contrast > MAX_CONTRAST {
        return None;
    }
    Some([
        POWER_ICON_CONTRAST | ((contrast >> 4) & 0x03),
        FOLLOWER_CONTROL,
        CONTRAST_LOW | (contrast & 0x0F),
    ])
}

/// Set DDRAM address byte
pub fn ddram_address(address: u8) -> u8 {
    SET_DDRAM_ADDRESS | address
}

/// Set CGRAM address byte for one row of a glyph slot
pub fn cgram_address(slot: u8, row: u8) -> u8 {
    SET_CGRAM_ADDRESS | ((slot & 0x07) << 3) | (row & 0x07)
}

/// Cursor/display shift byte
pub fn shift(display: bool, right: bool) -> u8 {
    let mut command = SHIFT;
    if display {
        command |= SHIFT_DISPLAY;
    }
    if right {
        command |= SHIFT_RIGHT;
    }
    command
}

/// Double height position byte (double-height table)
pub fn double_height_position(position: DoubleHeightPosition) -> u8 {
    DOUBLE_HEIGHT_POSITION | ((position as u8) << 3)
}
