//! I2C transport and tick source for the engine
//!
//! Frames engine bytes for SSD1306-class controllers over I2C: a 0x00
//! control byte ahead of each command, 0x40 ahead of display data.
//! The blocking transport finishes every block send before returning,
//! so callers pump `on_block_complete` right after starting a transfer.

use embedded_hal::i2c::I2c;
use phosphor_core::framebuffer::COLUMN_COUNT;
use phosphor_core::traits::{Clock, DisplayBus};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
const OLED_ADDR: u8 = 0x3C;

/// Control byte: command stream follows
const CTRL_COMMAND: u8 = 0x00;
/// Control byte: display data follows
const CTRL_DATA: u8 = 0x40;

/// Blocking I2C transport for one panel
pub struct OledBus<I2C> {
    i2c: I2C,
}

impl<I2C> OledBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }
}

impl<I2C> DisplayBus for OledBus<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.i2c.write(OLED_ADDR, &[CTRL_COMMAND, command])
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let mut buf = [0u8; COLUMN_COUNT + 1];
        buf[0] = CTRL_DATA;
        let len = data.len().min(COLUMN_COUNT);
        buf[1..=len].copy_from_slice(&data[..len]);
        self.i2c.write(OLED_ADDR, &buf[..=len])
    }

    fn is_busy(&self) -> bool {
        // Blocking writes have always drained by the time they return.
        false
    }

    fn start_block_transfer(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.send_data(data)
    }
}

/// Engine tick source backed by the embassy uptime clock, in microseconds
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now(&self) -> u32 {
        embassy_time::Instant::now().as_micros() as u32
    }
}
