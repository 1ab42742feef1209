//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ST7036 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The ST7036 requires:
//! - SPI bus (MOSI + SCK, chip select handled by the [`SpiDevice`])
//! - 1 or 2 GPIO pins:
//!   - **RS**: Register select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low, optional)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7036::{ControlLevel, DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Create interface with SPI, register select pin, reset pin and a delay
//! let mut interface = Interface::new(MockSpi, MockPin, MockDelay).with_reset(MockPin);
//!
//! // Send a command byte (clear display)
//! let _ = interface.set_control_line(ControlLevel::Command);
//! let _ = interface.transfer_byte(0x01);
//! interface.delay_us(1_500);
//! ```

use core::fmt::Debug;
use core::marker::PhantomData;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Level of the register select (control) line
///
/// The ST7036 latches every byte as either an instruction or a DDRAM/CGRAM
/// write depending on this line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlLevel {
    /// RS low: the next byte is an instruction
    Command,
    /// RS high: the next byte is written to display or character RAM
    Data,
}

/// Trait for hardware interface to the ST7036 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation, or with a recording fake in tests.
///
/// The driver never constructs these primitives itself; it only calls them
/// in protocol order and decides the settle delay after every transfer.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., bit-banged SPI, a GPIO expander for RS),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Drive the register select line to the given level
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO write fails.
    fn set_control_line(&mut self, level: ControlLevel) -> InterfaceResult<(), Self::Error>;

    /// Transfer a single byte over the serial link
    ///
    /// Blocks until the byte has been fully clocked out.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails.
    fn transfer_byte(&mut self, byte: u8) -> InterfaceResult<(), Self::Error>;

    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Pulse the reset line
    ///
    /// The implementation must:
    /// 1. Set RST pin low
    /// 2. Wait at least 1µs
    /// 3. Set RST pin high
    ///
    /// Implementations without a wired reset line return `Ok(())` without
    /// touching any pin.
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO write fails.
    fn pulse_reset(&mut self) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Minimum low time of the reset pulse in microseconds
pub const RESET_PULSE_US: u32 = 1;

/// Placeholder output pin for boards without a wired reset line
///
/// Shares its error type with the register select pin so that
/// [`Interface`] keeps a single pin error type.
#[derive(Debug, Clone, Copy)]
pub struct NoPin<E>(PhantomData<E>);

impl<E> Default for NoPin<E> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<E: digital::Error> digital::ErrorType for NoPin<E> {
    type Error = E;
}

impl<E: digital::Error> OutputPin for NoPin<E> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Hardware interface implementation for ST7036
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI, GPIO and delay traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`] (owns chip select)
/// * `RS` - Register select pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`], [`NoPin`] when not wired
/// * `D` - Delay provider implementing [`DelayNs`]
pub struct Interface<SPI, RS, RST, D> {
    /// SPI device for communication
    spi: SPI,
    /// Register select pin (low=command, high=data)
    rs: RS,
    /// Reset pin (active low)
    rst: Option<RST>,
    /// Blocking delay used for settle times
    delay: D,
}

impl<SPI, RS, D> Interface<SPI, RS, NoPin<RS::Error>, D>
where
    SPI: SpiDevice,
    RS: OutputPin,
    D: DelayNs,
{
    /// Create a new Interface without a reset line
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `rs` - Register select pin (output, low=command, high=data)
    /// * `delay` - Delay provider used for every settle time
    pub fn new(spi: SPI, rs: RS, delay: D) -> Self {
        Self {
            spi,
            rs,
            rst: None,
            delay,
        }
    }

    /// Attach a reset pin
    ///
    /// The reset pin must share the register select pin's error type.
    pub fn with_reset<RST>(self, rst: RST) -> Interface<SPI, RS, RST, D>
    where
        RST: OutputPin<Error = RS::Error>,
    {
        Interface {
            spi: self.spi,
            rs: self.rs,
            rst: Some(rst),
            delay: self.delay,
        }
    }
}

impl<SPI, RS, RST, D> Interface<SPI, RS, RST, D> {
    /// Whether a reset pin is wired
    pub fn has_reset(&self) -> bool {
        self.rst.is_some()
    }

    /// Consume the interface and return the SPI device, pins and delay
    pub fn release(self) -> (SPI, RS, Option<RST>, D) {
        (self.spi, self.rs, self.rst, self.delay)
    }
}

impl<SPI, RS, RST, D, PinErr> DisplayInterface for Interface<SPI, RS, RST, D>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    RS: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    D: DelayNs,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn set_control_line(&mut self, level: ControlLevel) -> InterfaceResult<(), Self::Error> {
        let result = match level {
            ControlLevel::Command => self.rs.set_low(),
            ControlLevel::Data => self.rs.set_high(),
        };
        result.map_err(InterfaceError::Pin)
    }

    fn transfer_byte(&mut self, byte: u8) -> InterfaceResult<(), Self::Error> {
        self.spi.write(&[byte]).map_err(InterfaceError::Spi)
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn pulse_reset(&mut self) -> InterfaceResult<(), Self::Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };
        rst.set_low().map_err(InterfaceError::Pin)?;
        self.delay.delay_us(RESET_PULSE_US);
        rst.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::{ErrorType as SpiErrorType, Operation};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Wire {
        Rs(bool),
        Rst(bool),
        Spi(u8),
        DelayNs(u32),
    }

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    type Log = alloc::rc::Rc<core::cell::RefCell<Vec<Wire>>>;

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    impl SpiErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), MockError> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    for b in bytes.iter() {
                        self.log.borrow_mut().push(Wire::Spi(*b));
                    }
                }
            }
            Ok(())
        }
    }

    struct MockPin {
        log: Log,
        reset: bool,
    }

    impl ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), MockError> {
            let wire = if self.reset {
                Wire::Rst(false)
            } else {
                Wire::Rs(false)
            };
            self.log.borrow_mut().push(wire);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), MockError> {
            let wire = if self.reset {
                Wire::Rst(true)
            } else {
                Wire::Rs(true)
            };
            self.log.borrow_mut().push(wire);
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(Wire::DelayNs(ns));
        }
    }

    fn parts(log: &Log, fail_spi: bool) -> (MockSpi, MockPin, MockDelay) {
        (
            MockSpi {
                log: log.clone(),
                fail: fail_spi,
            },
            MockPin {
                log: log.clone(),
                reset: false,
            },
            MockDelay { log: log.clone() },
        )
    }

    #[test]
    fn test_control_line_levels() {
        let log = Log::default();
        let (spi, rs, delay) = parts(&log, false);
        let mut interface = Interface::new(spi, rs, delay);
        interface.set_control_line(ControlLevel::Command).unwrap();
        interface.set_control_line(ControlLevel::Data).unwrap();
        assert_eq!(*log.borrow(), [Wire::Rs(false), Wire::Rs(true)]);
    }

    #[test]
    fn test_transfer_byte_writes_single_byte() {
        let log = Log::default();
        let (spi, rs, delay) = parts(&log, false);
        let mut interface = Interface::new(spi, rs, delay);
        interface.transfer_byte(0x41).unwrap();
        assert_eq!(*log.borrow(), [Wire::Spi(0x41)]);
    }

    #[test]
    fn test_transfer_error_is_propagated() {
        let log = Log::default();
        let (spi, rs, delay) = parts(&log, true);
        let mut interface = Interface::new(spi, rs, delay);
        assert!(matches!(
            interface.transfer_byte(0x01),
            Err(InterfaceError::Spi(MockError))
        ));
    }

    #[test]
    fn test_reset_without_pin_is_noop() {
        let log = Log::default();
        let (spi, rs, delay) = parts(&log, false);
        let mut interface = Interface::new(spi, rs, delay);
        assert!(!interface.has_reset());
        interface.pulse_reset().unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_reset_pulse_sequence() {
        let log = Log::default();
        let (spi, rs, delay) = parts(&log, false);
        let rst = MockPin {
            log: log.clone(),
            reset: true,
        };
        let mut interface = Interface::new(spi, rs, delay).with_reset(rst);
        assert!(interface.has_reset());
        interface.pulse_reset().unwrap();
        assert_eq!(
            *log.borrow(),
            [Wire::Rst(false), Wire::DelayNs(1_000), Wire::Rst(true)]
        );
    }
}
