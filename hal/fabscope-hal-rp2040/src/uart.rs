//! Blocking UART for the host link
//!
//! The command loop is the only user of the link and never has anything
//! else to do while waiting, so the blocking driver is enough.

use embassy_rp::uart::{
    Blocking, Config as RpConfig, DataBits as RpDataBits, Error as UartError,
    Parity as RpParity, StopBits as RpStopBits, Uart, UartRx as RpRx, UartTx as RpTx,
};
use fabscope_hal::uart::{DataBits, Parity, StopBits};
use fabscope_hal::{UartConfig, UartRx, UartTx};

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// Framing error
    Framing,
    /// Parity error
    Parity,
    /// Receive FIFO overrun
    Overrun,
    /// Line held low for longer than a frame
    Break,
    /// Other error
    Other,
}

impl From<UartError> for SerialError {
    fn from(e: UartError) -> Self {
        match e {
            UartError::Framing => SerialError::Framing,
            UartError::Parity => SerialError::Parity,
            UartError::Overrun => SerialError::Overrun,
            UartError::Break => SerialError::Break,
            _ => SerialError::Other,
        }
    }
}

/// Build the embassy UART configuration for a link setting
pub fn uart_config(config: &UartConfig) -> RpConfig {
    let mut out = RpConfig::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => RpDataBits::DataBits7,
        DataBits::Eight => RpDataBits::DataBits8,
    };
    out.parity = match config.parity {
        Parity::None => RpParity::ParityNone,
        Parity::Even => RpParity::ParityEven,
        Parity::Odd => RpParity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => RpStopBits::STOP1,
        StopBits::Two => RpStopBits::STOP2,
    };
    out
}

/// Full-duplex blocking serial port
pub struct BlockingSerial<'d> {
    uart: Uart<'d, Blocking>,
}

impl<'d> BlockingSerial<'d> {
    pub fn new(uart: Uart<'d, Blocking>) -> Self {
        Self { uart }
    }

    /// Split into independently owned halves
    pub fn split(self) -> (SerialTx<'d>, SerialRx<'d>) {
        let (tx, rx) = self.uart.split();
        (SerialTx { tx }, SerialRx { rx })
    }
}

impl UartTx for BlockingSerial<'_> {
    type Error = SerialError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), SerialError> {
        Ok(self.uart.blocking_write(data)?)
    }

    fn flush(&mut self) -> Result<(), SerialError> {
        Ok(self.uart.blocking_flush()?)
    }
}

impl UartRx for BlockingSerial<'_> {
    type Error = SerialError;

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, SerialError> {
        self.uart.blocking_read(buf)?;
        Ok(buf.len())
    }
}

/// Transmit half
pub struct SerialTx<'d> {
    tx: RpTx<'d, Blocking>,
}

impl UartTx for SerialTx<'_> {
    type Error = SerialError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), SerialError> {
        Ok(self.tx.blocking_write(data)?)
    }

    fn flush(&mut self) -> Result<(), SerialError> {
        Ok(self.tx.blocking_flush()?)
    }
}

/// Receive half
pub struct SerialRx<'d> {
    rx: RpRx<'d, Blocking>,
}

impl UartRx for SerialRx<'_> {
    type Error = SerialError;

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, SerialError> {
        self.rx.blocking_read(buf)?;
        Ok(buf.len())
    }
}
