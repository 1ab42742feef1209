//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Validation errors are always reported before anything is sent to the
//! controller, so a rejected call leaves the display untouched.
//!
//! ## Example
//!
//! ```
//! use st7036::{Builder, BuilderError};
//!
//! // Only 1, 2 and 3 line panels exist
//! let result = Builder::new().rows(4).build();
//! assert!(matches!(result, Err(BuilderError::InvalidRows { rows: 4 })));
//!
//! // Contrast is a 6-bit value
//! let result = Builder::new().contrast(0x40).build();
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Number of custom glyph slots in CGRAM
pub const GLYPH_SLOTS: usize = 8;

/// Maximum number of frames stored for one animated slot
pub const MAX_ANIMATION_FRAMES: usize = 32;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// The controller may have latched part of a command; reinitialize before
    /// further use.
    Interface(I::Error),
    /// Contrast above [`MAX_CONTRAST`](crate::command::MAX_CONTRAST)
    ContrastOutOfRange {
        /// Requested contrast
        contrast: u8,
    },
    /// Cursor position outside the configured panel
    ///
    /// Accepted positions satisfy `column <= columns` and `row < rows`.
    CursorOutOfBounds {
        /// Requested column
        column: u8,
        /// Requested row
        row: u8,
        /// Configured column count
        columns: u8,
        /// Configured row count
        rows: u8,
    },
    /// Glyph slot outside 0..=7
    InvalidSlot {
        /// Requested slot
        slot: u8,
    },
    /// Animation without frames
    EmptyAnimation,
    /// Animation frame that is not exactly 8 bytes
    InvalidFrameLength {
        /// Index of the offending frame
        frame: usize,
        /// Its length in bytes
        length: usize,
    },
    /// Animation longer than [`MAX_ANIMATION_FRAMES`]
    TooManyFrames {
        /// Number of frames provided
        provided: usize,
        /// Maximum supported
        max: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::ContrastOutOfRange { contrast } => {
                write!(f, "Contrast {contrast} out of range 0..=63")
            }
            Self::CursorOutOfBounds {
                column,
                row,
                columns,
                rows,
            } => write!(
                f,
                "Cursor position ({column}, {row}) outside {columns}x{rows} display"
            ),
            Self::InvalidSlot { slot } => write!(f, "Invalid glyph slot {slot}, must be 0..=7"),
            Self::EmptyAnimation => write!(f, "Animation has no frames"),
            Self::InvalidFrameLength { frame, length } => {
                write!(f, "Animation frame {frame} is {length} bytes, expected 8")
            }
            Self::TooManyFrames { provided, max } => {
                write!(f, "Animation has {provided} frames, max {max}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Row count other than 1, 2 or 3
    InvalidRows {
        /// Number of rows requested
        rows: u8,
    },
    /// Zero columns
    InvalidColumns {
        /// Number of columns requested
        columns: u8,
    },
    /// Initial contrast above 0x3F
    InvalidContrast {
        /// Contrast requested
        contrast: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidRows { rows } => write!(f, "Invalid row count {rows} (must be 1, 2 or 3)"),
            Self::InvalidColumns { columns } => write!(f, "Invalid column count {columns}"),
            Self::InvalidContrast { contrast } => {
                write!(f, "Invalid contrast {contrast} (max 63)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
