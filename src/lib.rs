//! ST7036 Character LCD Driver
//!
//! A driver for the ST7036 dot-matrix character LCD controller, as found on
//! 1, 2 and 3 line SPI character displays.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Bias, contrast and double-height control through the extended instruction tables
//! - Custom glyphs and timestamp-driven glyph animations
//! - `embedded-graphics` glyph canvas (with `graphics` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use core::fmt::Write;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7036::{Builder, Display, Interface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let rs = MockPin;
//! # let rst = MockPin;
//! # let delay = MockDelay;
//! let interface = Interface::new(spi, rs, delay).with_reset(rst);
//! let config = match Builder::new().rows(3).columns(16).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! if display.init().is_err() {
//!     return;
//! }
//! let _ = display.set_cursor_position(0, 1);
//! let _ = write!(display, "Temp: {}C", 21);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Row base addresses and cursor address mapping
pub mod addressing;
/// Custom glyph slots and animations
pub mod animation;
/// ST7036 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Display mode register mirror
pub mod mode;

/// Glyph drawing via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use animation::{Animation, AnimationSlot, GLYPH_ROWS, Glyph};
pub use command::{DoubleHeightPosition, InstructionSet};
pub use config::{Builder, Config};
pub use display::Display;
pub use error::{BuilderError, Error, GLYPH_SLOTS, MAX_ANIMATION_FRAMES};
pub use interface::{ControlLevel, DisplayInterface, Interface, InterfaceError, NoPin};
pub use mode::ModeState;

#[cfg(feature = "graphics")]
pub use graphics::GlyphCanvas;
