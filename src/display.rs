//! Core display operations

use crate::animation::{Animation, AnimationSlot, AnimationStore, GLYPH_ROWS, Glyph};
use crate::command::{
    self, ADDRESS_SETTLE_US, COMMAND_SETTLE_US, DATA_SETTLE_US, DoubleHeightPosition,
    INSTRUCTION_SET_SETTLE_US, InstructionSet,
};
use crate::config::Config;
use crate::error::{Error, GLYPH_SLOTS};
use crate::interface::{ControlLevel, DisplayInterface};
use crate::mode::ModeState;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for ST7036
///
/// Owns the interface and mirrors every write-only register in memory.
/// All operations block until the transfer and its settle delay have
/// completed. Call [`Display::init`] once before anything else.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Last display mode written
    mode: ModeState,
    /// CGRAM slot contents
    animations: AnimationStore,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`Display::init`] is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            mode: ModeState::default(),
            animations: AnimationStore::default(),
        }
    }

    /// Reset and initialize the controller
    ///
    /// Sequence: reset pulse, RS idle high, display on with cursor and blink
    /// off, entry mode increment, configured bias, configured contrast, clear.
    pub fn init(&mut self) -> DisplayResult<I> {
        log::debug!(
            "st7036: init {}x{} on cs{}",
            self.config.columns,
            self.config.rows,
            self.config.chip_select
        );
        self.interface.pulse_reset().map_err(Error::Interface)?;
        self.interface
            .set_control_line(ControlLevel::Data)
            .map_err(Error::Interface)?;

        self.mode = ModeState::default();
        self.write_display_mode()?;
        self.set_entry_mode(true, false)?;
        self.set_bias(self.config.bias)?;
        self.set_contrast(self.config.contrast)?;
        self.clear()
    }

    /// Set the LCD bias
    pub fn set_bias(&mut self, bias: u8) -> DisplayResult<I> {
        self.write_command(
            command::bias(bias),
            InstructionSet::Extended,
            COMMAND_SETTLE_US,
        )
    }

    /// Set the contrast (0..=63)
    ///
    /// # Errors
    ///
    /// Returns `Error::ContrastOutOfRange` without sending anything if
    /// `contrast` exceeds 0x3F.
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        let bytes = command::contrast(contrast).ok_or(Error::ContrastOutOfRange { contrast })?;
        log::debug!("st7036: contrast {}", contrast);
        for byte in bytes {
            self.write_command(byte, InstructionSet::Extended, COMMAND_SETTLE_US)?;
        }
        Ok(())
    }

    /// Set display, cursor and blink flags together
    pub fn set_display_mode(
        &mut self,
        enable: bool,
        cursor_visible: bool,
        cursor_blink: bool,
    ) -> DisplayResult<I> {
        self.mode.display_on = enable;
        self.mode.cursor_visible = cursor_visible;
        self.mode.cursor_blink = cursor_blink;
        self.write_display_mode()
    }

    /// Show or hide the cursor
    pub fn enable_cursor(&mut self, cursor_visible: bool) -> DisplayResult<I> {
        self.mode.cursor_visible = cursor_visible;
        self.write_display_mode()
    }

    /// Enable or disable cursor blinking
    pub fn enable_blink(&mut self, cursor_blink: bool) -> DisplayResult<I> {
        self.mode.cursor_blink = cursor_blink;
        self.write_display_mode()
    }

    /// Set the address counter direction and display shift on write
    pub fn set_entry_mode(&mut self, increment: bool, shift: bool) -> DisplayResult<I> {
        self.write_command(
            command::entry_mode(increment, shift),
            InstructionSet::Basic,
            COMMAND_SETTLE_US,
        )
    }

    /// Set the raw DDRAM address
    ///
    /// `offset` is not checked against the panel size.
    pub fn set_cursor_offset(&mut self, offset: u8) -> DisplayResult<I> {
        self.write_command(
            command::ddram_address(offset),
            InstructionSet::Basic,
            COMMAND_SETTLE_US,
        )
    }

    /// Move the cursor to (`column`, `row`)
    ///
    /// # Errors
    ///
    /// Returns `Error::CursorOutOfBounds` without sending anything if
    /// `column > columns` or `row` has no line on this panel. Note that
    /// `column == columns` is accepted.
    pub fn set_cursor_position(&mut self, column: u8, row: u8) -> DisplayResult<I> {
        let columns = self.config.columns;
        let rows = self.config.rows;
        let address = crate::addressing::cursor_address(column, row, columns, rows).ok_or(
            Error::CursorOutOfBounds {
                column,
                row,
                columns,
                rows,
            },
        )?;
        self.write_command(
            command::ddram_address(address),
            InstructionSet::Basic,
            ADDRESS_SETTLE_US,
        )
    }

    /// Move the cursor to the first column of the first line
    pub fn home(&mut self) -> DisplayResult<I> {
        self.set_cursor_position(0, 0)
    }

    /// Clear the display and move the cursor home
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.write_command(command::CLEAR, InstructionSet::Basic, ADDRESS_SETTLE_US)?;
        self.home()
    }

    /// Move the cursor one position left
    pub fn cursor_left(&mut self) -> DisplayResult<I> {
        self.write_shift(false, false)
    }

    /// Move the cursor one position right
    pub fn cursor_right(&mut self) -> DisplayResult<I> {
        self.write_shift(false, true)
    }

    /// Shift the whole display one position left
    pub fn shift_left(&mut self) -> DisplayResult<I> {
        self.write_shift(true, false)
    }

    /// Shift the whole display one position right
    pub fn shift_right(&mut self) -> DisplayResult<I> {
        self.write_shift(true, true)
    }

    /// Enable or disable the double-height font
    ///
    /// The flag lives in the function-set register, so it is written
    /// immediately and then carried by every later instruction-set select.
    pub fn double_height(
        &mut self,
        enable: bool,
        position: DoubleHeightPosition,
    ) -> DisplayResult<I> {
        self.mode.double_height = enable;
        self.write_instruction_set(InstructionSet::Basic)?;
        self.write_command(
            command::double_height_position(position),
            InstructionSet::DoubleHeight,
            COMMAND_SETTLE_US,
        )
    }

    /// Write text at the cursor
    ///
    /// Each character is sent as one code, its scalar value truncated to
    /// the low 8 bits, so `'\u{b0}'` prints ROM code 0xB0. Use
    /// [`Display::write_bytes`] for custom glyph codes 0..=7.
    pub fn write(&mut self, text: &str) -> DisplayResult<I> {
        for c in text.chars() {
            self.write_data((u32::from(c) & 0xFF) as u8)?;
        }
        Ok(())
    }

    /// Write raw character codes at the cursor
    pub fn write_bytes(&mut self, codes: &[u8]) -> DisplayResult<I> {
        for &code in codes {
            self.write_data(code)?;
        }
        Ok(())
    }

    /// Upload a custom glyph to `slot`
    ///
    /// Returns `Ok(false)` without sending anything if `slot` is not 0..=7.
    /// Replaces any animation stored in the slot. The display mode is
    /// reasserted afterwards to leave CGRAM addressing.
    pub fn create_char(&mut self, slot: u8, glyph: Glyph) -> Result<bool, Error<I>> {
        if usize::from(slot) >= GLYPH_SLOTS {
            return Ok(false);
        }
        self.animations.set(slot, AnimationSlot::Static(glyph));
        self.upload_glyph(slot, &glyph)?;
        Ok(true)
    }

    /// Store an animation in `slot` and upload its first frame
    ///
    /// Every frame must be exactly 8 bytes. `frame_rate` is in whole frames
    /// per second; 0 holds the first frame. Uploading disturbs the cursor,
    /// which is left at the start of the second line (first line on
    /// single-line panels).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSlot`, `Error::EmptyAnimation`,
    /// `Error::TooManyFrames` or `Error::InvalidFrameLength` without sending
    /// anything.
    pub fn create_animation(
        &mut self,
        slot: u8,
        frames: &[&[u8]],
        frame_rate: u32,
    ) -> DisplayResult<I> {
        if usize::from(slot) >= GLYPH_SLOTS {
            return Err(Error::InvalidSlot { slot });
        }
        let animation = Animation::new(frames, frame_rate)?;
        log::debug!(
            "st7036: animation in slot {} ({} frames at {} fps)",
            slot,
            animation.frames().len(),
            frame_rate
        );
        let first = animation.frames().first().copied();
        self.animations.set(slot, AnimationSlot::Animated(animation));
        if let Some(glyph) = first {
            self.upload_glyph(slot, &glyph)?;
            self.animations.mark_uploaded(slot, 0);
        }
        self.park_cursor()
    }

    /// Upload the frame due at `now_ms` for every animated slot
    ///
    /// The frame shown is `round(now_ms / 1000 * frame_rate) mod frames`, so
    /// the result depends only on the timestamp. Slots already showing the
    /// due frame are skipped. The cursor is parked once at the end, as for
    /// [`Display::create_animation`].
    ///
    /// Returns the number of slots that were re-uploaded.
    pub fn advance_animations(&mut self, now_ms: u64) -> Result<u8, Error<I>> {
        let mut uploaded = 0;
        for slot in 0..GLYPH_SLOTS as u8 {
            if let Some((frame, glyph)) = self.animations.due(slot, now_ms) {
                log::trace!("st7036: slot {} frame {}", slot, frame);
                self.upload_glyph(slot, &glyph)?;
                self.animations.mark_uploaded(slot, frame);
                uploaded += 1;
            }
        }
        self.park_cursor()?;
        Ok(uploaded)
    }

    /// Contents of a CGRAM slot, or `None` if `slot` is not 0..=7
    pub fn animation_slot(&self, slot: u8) -> Option<&AnimationSlot> {
        self.animations.get(slot)
    }

    /// Current display mode mirror
    pub fn mode(&self) -> &ModeState {
        &self.mode
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn write_display_mode(&mut self) -> DisplayResult<I> {
        self.write_command(
            self.mode.display_mode_command(),
            InstructionSet::Basic,
            COMMAND_SETTLE_US,
        )
    }

    fn write_shift(&mut self, display: bool, right: bool) -> DisplayResult<I> {
        self.write_command(
            command::shift(display, right),
            InstructionSet::Basic,
            COMMAND_SETTLE_US,
        )
    }

    fn upload_glyph(&mut self, slot: u8, glyph: &Glyph) -> DisplayResult<I> {
        for (row, &bits) in (0u8..).zip(glyph.iter().take(GLYPH_ROWS)) {
            self.write_command(
                command::cgram_address(slot, row),
                InstructionSet::Basic,
                COMMAND_SETTLE_US,
            )?;
            self.write_data(bits)?;
        }
        self.write_display_mode()
    }

    /// Cursor target after a glyph upload
    fn park_cursor(&mut self) -> DisplayResult<I> {
        let row = self.config.rows.saturating_sub(1).min(1);
        self.set_cursor_position(0, row)
    }

    fn write_instruction_set(&mut self, set: InstructionSet) -> DisplayResult<I> {
        let select = self
            .mode
            .instruction_set_command(self.config.instruction_set_template, set);
        self.interface
            .set_control_line(ControlLevel::Command)
            .map_err(Error::Interface)?;
        self.interface
            .transfer_byte(select)
            .map_err(Error::Interface)?;
        self.interface.delay_us(INSTRUCTION_SET_SETTLE_US);
        Ok(())
    }

    fn write_command(&mut self, value: u8, set: InstructionSet, settle_us: u32) -> DisplayResult<I> {
        self.write_instruction_set(set)?;
        log::trace!("st7036: command {:#04x}", value);
        self.interface
            .transfer_byte(value)
            .map_err(Error::Interface)?;
        self.interface.delay_us(settle_us);
        Ok(())
    }

    fn write_data(&mut self, value: u8) -> DisplayResult<I> {
        self.interface
            .set_control_line(ControlLevel::Data)
            .map_err(Error::Interface)?;
        self.interface
            .transfer_byte(value)
            .map_err(Error::Interface)?;
        self.interface.delay_us(DATA_SETTLE_US);
        Ok(())
    }
}

impl<I> core::fmt::Write for Display<I>
where
    I: DisplayInterface,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write(s).map_err(|_| core::fmt::Error)
    }
}
