//! Hardware abstraction traits
//!
//! These traits define the interface between the engine and the two
//! collaborators it cannot own: the byte transport to the panel and a
//! monotonic tick source for transfer timing.

pub mod bus;
pub mod clock;

pub use bus::DisplayBus;
pub use clock::Clock;
