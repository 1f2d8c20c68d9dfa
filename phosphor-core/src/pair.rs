//! Active/display buffer coordination.
//!
//! Drawing always lands in the *active* frame; the *display* frame is the
//! one most recently handed to the panel. The pair starts with both roles
//! on the same frame, so nothing is visible until the first update. The
//! asynchronous transfer path splits the role exchange in two: the source
//! frame is snapshotted (and the active role moved off it) when the send
//! starts, and only published as the display frame once the final page has
//! gone out.

use crate::framebuffer::FrameBuffer;

/// Identifies one of the two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferId {
    A,
    B,
}

impl BufferId {
    pub(crate) fn other(self) -> Self {
        match self {
            BufferId::A => BufferId::B,
            BufferId::B => BufferId::A,
        }
    }
}

/// Buffering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferMode {
    /// One frame serves both roles; updates show partial drawing.
    Single,
    /// Draw into one frame while the other is on the glass.
    #[default]
    Double,
}

/// Owns both frames and tracks their roles.
#[derive(Debug)]
pub struct FramePair {
    frames: [FrameBuffer; 2],
    active: BufferId,
    display: BufferId,
    mode: BufferMode,
}

impl FramePair {
    pub fn new(mode: BufferMode) -> Self {
        Self {
            frames: [FrameBuffer::new(), FrameBuffer::new()],
            active: BufferId::A,
            display: BufferId::A,
            mode,
        }
    }

    pub fn mode(&self) -> BufferMode {
        self.mode
    }

    pub fn active_id(&self) -> BufferId {
        self.active
    }

    pub fn display_id(&self) -> BufferId {
        self.display
    }

    /// The frame receiving draw calls.
    pub fn active_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frames[self.active as usize]
    }

    pub fn active(&self) -> &FrameBuffer {
        &self.frames[self.active as usize]
    }

    /// The frame whose contents the panel is showing (or about to show).
    pub fn display(&self) -> &FrameBuffer {
        &self.frames[self.display as usize]
    }

    pub fn frame(&self, id: BufferId) -> &FrameBuffer {
        &self.frames[id as usize]
    }

    /// Clear both frames regardless of current roles.
    pub fn clear_all(&mut self) {
        for frame in self.frames.iter_mut() {
            frame.clear();
        }
    }

    /// Role exchange after a confirmed synchronous send: the frame just
    /// sent becomes the display frame, drawing moves to the other one.
    /// No-op in single-buffer mode.
    pub fn swap(&mut self) {
        if let BufferMode::Double = self.mode {
            self.display = self.active;
            self.active = self.active.other();
        }
    }

    /// Start of an asynchronous send: returns the frame to transmit and
    /// moves the active role off it so new drawing can begin immediately.
    pub fn begin_send(&mut self) -> BufferId {
        let source = self.active;
        if let BufferMode::Double = self.mode {
            self.active = source.other();
        }
        source
    }

    /// Completion of an asynchronous send: publish the transmitted frame.
    pub fn commit_display(&mut self, sent: BufferId) {
        if let BufferMode::Double = self.mode {
            self.display = sent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Color;

    #[test]
    fn test_roles_coincide_at_start() {
        let pair = FramePair::new(BufferMode::Double);
        assert_eq!(pair.active_id(), pair.display_id());
    }

    #[test]
    fn test_swap_ping_pongs_roles() {
        let mut pair = FramePair::new(BufferMode::Double);
        pair.swap();
        assert_eq!(pair.display_id(), BufferId::A);
        assert_eq!(pair.active_id(), BufferId::B);
        pair.swap();
        assert_eq!(pair.display_id(), BufferId::B);
        assert_eq!(pair.active_id(), BufferId::A);
    }

    #[test]
    fn test_single_mode_swap_is_noop() {
        let mut pair = FramePair::new(BufferMode::Single);
        pair.swap();
        assert_eq!(pair.active_id(), BufferId::A);
        assert_eq!(pair.display_id(), BufferId::A);
        assert_eq!(pair.begin_send(), BufferId::A);
        assert_eq!(pair.active_id(), BufferId::A);
    }

    #[test]
    fn test_async_send_splits_the_swap() {
        let mut pair = FramePair::new(BufferMode::Double);
        let source = pair.begin_send();
        assert_eq!(source, BufferId::A);
        // Drawing may continue on the other frame while A is in flight;
        // the display role moves only on commit.
        assert_eq!(pair.active_id(), BufferId::B);
        assert_eq!(pair.display_id(), BufferId::A);
        pair.commit_display(source);
        assert_eq!(pair.display_id(), BufferId::A);
        assert_eq!(pair.active_id(), BufferId::B);
    }

    #[test]
    fn test_in_flight_frame_not_disturbed_by_drawing() {
        let mut pair = FramePair::new(BufferMode::Double);
        pair.active_mut().set_pixel(1, 1, Color::White);
        let source = pair.begin_send();
        // New drawing lands in the other frame.
        pair.active_mut().set_pixel(2, 2, Color::White);
        assert!(pair.frame(source).pixel(1, 1));
        assert!(!pair.frame(source).pixel(2, 2));
        assert!(pair.active().pixel(2, 2));
        assert!(!pair.active().pixel(1, 1));
    }
}
