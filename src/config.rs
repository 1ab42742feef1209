//! Display configuration types and builder

use crate::addressing::row_offsets;
use crate::command::MAX_CONTRAST;
pub use crate::error::BuilderError;

/// Default number of display lines
pub const DEFAULT_ROWS: u8 = 3;

/// Default number of characters per line
pub const DEFAULT_COLUMNS: u8 = 16;

/// Default function-set template (8-bit interface, 2-line addressing)
pub const DEFAULT_INSTRUCTION_SET_TEMPLATE: u8 = 0b0011_1000;

/// Default bias programmed during initialization
pub const DEFAULT_BIAS: u8 = 1;

/// Default contrast programmed during initialization
pub const DEFAULT_CONTRAST: u8 = 40;

/// Display configuration
///
/// This struct holds all configurable parameters for the ST7036 controller.
/// Use `Builder` to create a Config. The register select and reset lines are
/// owned by the [`Interface`](crate::Interface), not by the config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of display lines (1, 2 or 3)
    pub rows: u8,
    /// Number of characters per line
    pub columns: u8,
    /// SPI chip select index the panel is wired to
    ///
    /// Informational: chip select itself is driven by the `SpiDevice`.
    pub chip_select: u8,
    /// Fixed high bits of every function-set byte
    pub instruction_set_template: u8,
    /// Bias programmed during initialization
    pub bias: u8,
    /// Contrast programmed during initialization
    pub contrast: u8,
}

impl Config {
    /// Base DDRAM address of every row
    pub fn row_offsets(&self) -> &'static [u8] {
        // rows is validated by Builder::build
        row_offsets(self.rows).unwrap_or(&[])
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            chip_select: 0,
            instruction_set_template: DEFAULT_INSTRUCTION_SET_TEMPLATE,
            bias: DEFAULT_BIAS,
            contrast: DEFAULT_CONTRAST,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7036::Builder;
///
/// let config = match Builder::new().rows(2).columns(16).contrast(32).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Number of display lines
    rows: u8,
    /// Number of characters per line
    columns: u8,
    /// SPI chip select index
    chip_select: u8,
    /// Function-set template
    instruction_set_template: u8,
    /// Initial bias
    bias: u8,
    /// Initial contrast
    contrast: u8,
}

impl Default for Builder {
    fn default() -> Self {
        let config = Config::default();
        Self {
            rows: config.rows,
            columns: config.columns,
            chip_select: config.chip_select,
            instruction_set_template: config.instruction_set_template,
            bias: config.bias,
            contrast: config.contrast,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of display lines (1, 2 or 3)
    pub fn rows(mut self, rows: u8) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of characters per line
    pub fn columns(mut self, columns: u8) -> Self {
        self.columns = columns;
        self
    }

    /// Set the SPI chip select index
    pub fn chip_select(mut self, chip_select: u8) -> Self {
        self.chip_select = chip_select;
        self
    }

    /// Set the function-set template
    ///
    /// The instruction table and double-height bits are OR-ed into this value
    /// on every command.
    pub fn instruction_set_template(mut self, template: u8) -> Self {
        self.instruction_set_template = template;
        self
    }

    /// Set the bias programmed during initialization
    pub fn bias(mut self, bias: u8) -> Self {
        self.bias = bias;
        self
    }

    /// Set the contrast programmed during initialization (0..=63)
    pub fn contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - `BuilderError::InvalidRows` if rows is not 1, 2 or 3
    /// - `BuilderError::InvalidColumns` if columns is 0
    /// - `BuilderError::InvalidContrast` if contrast exceeds 0x3F
    pub fn build(self) -> Result<Config, BuilderError> {
        if row_offsets(self.rows).is_none() {
            return Err(BuilderError::InvalidRows { rows: self.rows });
        }
        if self.columns == 0 {
            return Err(BuilderError::InvalidColumns {
                columns: self.columns,
            });
        }
        if self.contrast > MAX_CONTRAST {
            return Err(BuilderError::InvalidContrast {
                contrast: self.contrast,
            });
        }
        Ok(Config {
            rows: self.rows,
            columns: self.columns,
            chip_select: self.chip_select,
            instruction_set_template: self.instruction_set_template,
            bias: self.bias,
            contrast: self.contrast,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.rows, 3);
        assert_eq!(config.columns, 16);
        assert_eq!(config.instruction_set_template, 0b0011_1000);
        assert_eq!(config.bias, 1);
        assert_eq!(config.contrast, 40);
    }

    #[test]
    fn test_builder_rejects_unsupported_rows() {
        assert_eq!(
            Builder::new().rows(0).build(),
            Err(BuilderError::InvalidRows { rows: 0 })
        );
        assert_eq!(
            Builder::new().rows(4).build(),
            Err(BuilderError::InvalidRows { rows: 4 })
        );
    }

    #[test]
    fn test_builder_rejects_zero_columns() {
        assert_eq!(
            Builder::new().columns(0).build(),
            Err(BuilderError::InvalidColumns { columns: 0 })
        );
    }

    #[test]
    fn test_builder_rejects_contrast_out_of_range() {
        assert_eq!(
            Builder::new().contrast(64).build(),
            Err(BuilderError::InvalidContrast { contrast: 64 })
        );
        assert!(Builder::new().contrast(63).build().is_ok());
    }

    #[test]
    fn test_row_offsets_follow_rows() {
        let config = Builder::new().rows(2).build().unwrap();
        assert_eq!(config.row_offsets(), &[0x00, 0x40]);
    }
}
