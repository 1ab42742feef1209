//! In-memory mirror of the display mode registers
//!
//! The ST7036 cannot be read back, so the driver keeps the last values it
//! wrote and recomputes the full register byte on every change.

use crate::command;

/// Mirror of the write-only display mode state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeState {
    /// Display on
    pub display_on: bool,
    /// Cursor underline visible
    pub cursor_visible: bool,
    /// Cursor block blinking
    pub cursor_blink: bool,
    /// Double-height font enabled
    pub double_height: bool,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            display_on: true,
            cursor_visible: false,
            cursor_blink: false,
            double_height: false,
        }
    }
}

impl ModeState {
    /// Display on/off control byte for the current flags
    pub fn display_mode_command(&self) -> u8 {
        command::display_mode(self.display_on, self.cursor_visible, self.cursor_blink)
    }

    /// Function-set byte selecting `set` with the current double-height flag
    pub fn instruction_set_command(&self, template: u8, set: command::InstructionSet) -> u8 {
        command::instruction_set_select(template, set, self.double_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::InstructionSet;

    #[test]
    fn test_default_is_display_on_cursor_off() {
        let state = ModeState::default();
        assert_eq!(state.display_mode_command(), 0b0000_1100);
    }

    #[test]
    fn test_double_height_only_affects_instruction_set() {
        let mut state = ModeState::default();
        let mode = state.display_mode_command();
        state.double_height = true;
        assert_eq!(state.display_mode_command(), mode);
        assert_eq!(
            state.instruction_set_command(0b0011_1000, InstructionSet::Basic),
            0b0011_1100
        );
    }
}
