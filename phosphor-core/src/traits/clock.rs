//! Monotonic tick source
//!
//! Used only to report how long a full-frame transfer took; it is never
//! on a correctness path.

/// A free-running monotonic counter
pub trait Clock {
    /// Current counter value in implementation-defined ticks
    ///
    /// The engine subtracts two readings with wrapping arithmetic, so
    /// rollover between them is harmless.
    fn now(&self) -> u32;
}
