//! Display transport abstraction
//!
//! The engine talks to the panel controller exclusively through this
//! trait: command bytes, data bytes, a readiness probe and an optional
//! hardware-assisted block send. Start/stop framing, pin and clock setup
//! stay inside the implementation.

use crate::cmd;

/// Byte transport to a page-addressed display controller
pub trait DisplayBus {
    /// Error type for transport operations
    type Error;

    /// Send one command byte
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send a run of display data bytes
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Whether the transport is still busy moving bytes
    ///
    /// The engine polls this between page writes, bounded by its
    /// configured wait budget.
    fn is_busy(&self) -> bool;

    /// Address the controller at `page` / `column`
    ///
    /// The default encoding is the SSD1306 page-addressing scheme: the
    /// page select followed by the column split into nibbles. Transports
    /// with native addressing may override it.
    fn set_page_address(&mut self, page: u8, column: u8) -> Result<(), Self::Error> {
        self.send_command(cmd::SET_PAGE_ADDR | (page & 0x07))?;
        self.send_command(cmd::SET_HIGH_COLUMN | (column >> 4))?;
        self.send_command(cmd::SET_LOW_COLUMN | (column & 0x0F))
    }

    /// Begin a hardware-assisted send of one page row
    ///
    /// An `Err` means the transfer did not start. Completion is *not*
    /// reported through this trait: the interrupt handler (or, for
    /// transports that finish synchronously, the caller) feeds
    /// completion events to the engine via `Oled::on_block_complete`.
    fn start_block_transfer(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}
