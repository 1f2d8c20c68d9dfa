//! The display engine: frame ownership, page-sequenced transfers and
//! the completion-driven state machine.
//!
//! A full asynchronous update runs as a chain: start page 0, return to
//! the caller, and advance one page per completion event until all
//! eight pages are out, at which point the sent frame is published as
//! the display frame. Completion events come from the transport's
//! interrupt handler on real hardware, or from the caller for
//! transports whose block send finishes synchronously. The synchronous
//! paths (full update, area update) hold the bus until done and refuse
//! to run while a chain is in flight.

use core::fmt;

use crate::chart::{self, LineChart, TimeChart};
use crate::cmd;
use crate::framebuffer::{FrameBuffer, COLUMN_COUNT, HEIGHT, PAGE_COUNT};
use crate::pair::{BufferId, BufferMode, FramePair};
use crate::text::{self, Font, GlyphIndex};
use crate::traits::{Clock, DisplayBus};

/// Controller power-on sequence: display off, addressing and scan
/// orientation, contrast, timing, charge pump, display on.
const INIT_CMDS: [u8; 23] = [
    cmd::DISPLAY_OFF,
    cmd::SET_START_LINE,
    cmd::SET_PAGE_ADDR,
    cmd::SET_COM_SCAN_DEC,
    cmd::SET_CONTRAST,
    0xFF,
    cmd::SET_SEG_REMAP,
    cmd::SET_NORMAL,
    cmd::SET_MUX_RATIO,
    0x3F,
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_CLOCK_DIV,
    0xF0,
    cmd::SET_PRECHARGE,
    0x22,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_VCOM_DETECT,
    0x49,
    cmd::SET_CHARGE_PUMP,
    0x14,
    cmd::DISPLAY_ON,
];

/// Transfer-path failures. Drawing never errors; only operations that
/// touch the transport do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// An asynchronous transfer is already in flight.
    Busy,
    /// The transport stayed busy past the configured wait budget.
    Timeout,
    /// The transport itself failed.
    Bus(E),
}

/// Engine configuration.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub mode: BufferMode,
    /// Iterations of the transport readiness poll before a page is
    /// abandoned with [`Error::Timeout`].
    pub bus_wait_budget: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: BufferMode::Double,
            bus_wait_budget: 10_000,
        }
    }
}

/// State of one in-flight asynchronous full-frame send.
#[derive(Debug, Clone, Copy)]
struct TransferSession {
    /// Page currently on the wire.
    page: usize,
    /// Frame being transmitted. Stays fixed for the whole chain even
    /// though the active role has already moved on.
    source: BufferId,
    /// Clock reading when the chain started.
    started_at: u32,
}

/// The rendering and transfer engine for one panel.
///
/// Owns the frame pair, the CJK glyph index and the transport. Drawing
/// goes through [`Oled::frame_mut`] or the text/chart helpers; nothing
/// reaches the panel until an update call.
pub struct Oled<B, C> {
    bus: B,
    clock: C,
    frames: FramePair,
    glyphs: GlyphIndex,
    session: Option<TransferSession>,
    bus_wait_budget: u32,
    last_transfer_ticks: Option<u32>,
}

impl<B, C> Oled<B, C>
where
    B: DisplayBus,
    C: Clock,
{
    pub fn new(bus: B, clock: C, config: Config) -> Self {
        Self {
            bus,
            clock,
            frames: FramePair::new(config.mode),
            glyphs: GlyphIndex::new(),
            session: None,
            bus_wait_budget: config.bus_wait_budget,
            last_transfer_ticks: None,
        }
    }

    /// Send the power-on command sequence and clear both frames.
    pub fn init(&mut self) -> Result<(), Error<B::Error>> {
        for &byte in INIT_CMDS.iter() {
            self.bus.send_command(byte).map_err(Error::Bus)?;
        }
        self.frames.clear_all();
        Ok(())
    }

    /// The frame currently receiving draw calls.
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        self.frames.active_mut()
    }

    pub fn frame(&self) -> &FrameBuffer {
        self.frames.active()
    }

    /// Clear the active frame.
    pub fn clear(&mut self) {
        self.frames.active_mut().clear();
    }

    /// Whether an asynchronous transfer chain is in flight.
    pub fn is_busy(&self) -> bool {
        self.session.is_some()
    }

    /// Duration of the most recent completed full-frame transfer, in
    /// clock ticks.
    pub fn last_transfer_ticks(&self) -> Option<u32> {
        self.last_transfer_ticks
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Blocking full-frame update.
    ///
    /// Sends all pages of the active frame, then exchanges the buffer
    /// roles. A transport error or timeout propagates immediately and
    /// leaves the roles untouched, so the caller may retry the same
    /// frame.
    pub fn update(&mut self) -> Result<(), Error<B::Error>> {
        if self.session.is_some() {
            return Err(Error::Busy);
        }
        let started_at = self.clock.now();
        for page in 0..PAGE_COUNT {
            self.bus
                .set_page_address(page as u8, 0)
                .map_err(Error::Bus)?;
            self.wait_bus_idle()?;
            self.bus
                .send_data(self.frames.active().page(page))
                .map_err(Error::Bus)?;
        }
        self.last_transfer_ticks = Some(self.clock.now().wrapping_sub(started_at));
        self.frames.swap();
        Ok(())
    }

    /// Start an asynchronous full-frame update and return immediately.
    ///
    /// On success the active role moves to the other frame, so drawing
    /// may continue while the chain runs. If the first page cannot be
    /// started, the roles stay untouched and the same frame can be
    /// retried.
    pub fn update_async(&mut self) -> Result<(), Error<B::Error>> {
        if self.session.is_some() {
            return Err(Error::Busy);
        }
        let started_at = self.clock.now();
        self.begin_page(0, self.frames.active_id())?;
        let source = self.frames.begin_send();
        self.session = Some(TransferSession {
            page: 0,
            source,
            started_at,
        });
        Ok(())
    }

    /// Feed one block-completion event into the transfer chain.
    ///
    /// Called from the transport's completion interrupt, or after each
    /// page for transports that finish synchronously. Advances to the
    /// next page; after the last one, records the elapsed ticks and
    /// publishes the sent frame. A failure to start the next page
    /// abandons the chain, leaving the previously published frame on
    /// screen. Events with no chain in flight are ignored.
    pub fn on_block_complete(&mut self) {
        let mut session = match self.session.take() {
            Some(session) => session,
            None => return,
        };
        session.page += 1;
        if session.page < PAGE_COUNT {
            if self.begin_page(session.page, session.source).is_ok() {
                self.session = Some(session);
            }
        } else {
            self.last_transfer_ticks =
                Some(self.clock.now().wrapping_sub(session.started_at));
            self.frames.commit_display(session.source);
        }
    }

    /// Blocking partial update of the display frame.
    ///
    /// The rectangle is given by two corners, inclusive. Rectangles
    /// fully outside the screen are a silent no-op before any transport
    /// traffic; ones partially outside are clamped. Reads the display
    /// frame, not the active one, so it refreshes what the panel is
    /// already showing.
    pub fn update_area(
        &mut self,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
    ) -> Result<(), Error<B::Error>> {
        if x1 >= COLUMN_COUNT as i16
            || y1 >= HEIGHT as i16
            || x2 < 0
            || y2 < 0
            || x1 > x2
            || y1 > y2
        {
            return Ok(());
        }
        if self.session.is_some() {
            return Err(Error::Busy);
        }

        let x1 = x1.max(0) as usize;
        let y1 = y1.max(0) as usize;
        let x2 = x2.min(COLUMN_COUNT as i16 - 1) as usize;
        let y2 = y2.min(HEIGHT as i16 - 1) as usize;

        for page in y1 / 8..=y2 / 8 {
            self.bus
                .set_page_address(page as u8, x1 as u8)
                .map_err(Error::Bus)?;
            self.wait_bus_idle()?;
            self.bus
                .send_data(&self.frames.display().page(page)[x1..=x2])
                .map_err(Error::Bus)?;
        }
        Ok(())
    }

    pub fn set_contrast(&mut self, level: u8) -> Result<(), Error<B::Error>> {
        self.bus.send_command(cmd::SET_CONTRAST).map_err(Error::Bus)?;
        self.bus.send_command(level).map_err(Error::Bus)
    }

    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<B::Error>> {
        let command = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
        self.bus.send_command(command).map_err(Error::Bus)
    }

    /// Draw a string into the active frame. See [`text::draw_str`].
    pub fn draw_str(&mut self, x: i16, y: i16, s: &str, font: Font) -> (i16, i16) {
        text::draw_str(self.frames.active_mut(), &mut self.glyphs, x, y, s, font)
    }

    /// Format and draw into the active frame. See [`text::draw_fmt`].
    pub fn draw_fmt(
        &mut self,
        x: i16,
        y: i16,
        font: Font,
        args: fmt::Arguments<'_>,
    ) -> (i16, i16) {
        text::draw_fmt(self.frames.active_mut(), &mut self.glyphs, x, y, font, args)
    }

    /// Draw a value-indexed chart into the active frame.
    pub fn draw_line_chart(&mut self, chart: &LineChart<'_>) {
        chart::draw_line_chart(self.frames.active_mut(), &mut self.glyphs, chart);
    }

    /// Draw a time-indexed chart into the active frame.
    pub fn draw_time_chart(&mut self, chart: &TimeChart<'_>) {
        chart::draw_time_chart(self.frames.active_mut(), &mut self.glyphs, chart);
    }

    /// Poll the transport until it reports idle, bounded by the wait
    /// budget.
    fn wait_bus_idle(&mut self) -> Result<(), Error<B::Error>> {
        let mut budget = self.bus_wait_budget;
        while self.bus.is_busy() {
            if budget == 0 {
                return Err(Error::Timeout);
            }
            budget -= 1;
        }
        Ok(())
    }

    /// Address one page and hand its row to the transport's block
    /// sender.
    fn begin_page(&mut self, page: usize, source: BufferId) -> Result<(), Error<B::Error>> {
        self.bus
            .set_page_address(page as u8, 0)
            .map_err(Error::Bus)?;
        self.wait_bus_idle()?;
        self.bus
            .start_block_transfer(self.frames.frame(source).page(page))
            .map_err(Error::Bus)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Color;
    use core::cell::Cell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockError;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum BusOp {
        Command(u8),
        Data(Vec<u8>),
        Block(Vec<u8>),
    }

    struct MockBus {
        ops: Vec<BusOp>,
        /// How many times `is_busy` still answers true.
        busy_polls: Cell<u32>,
        /// Successful block starts remaining before failure.
        block_budget: usize,
        /// Successful data sends remaining before failure.
        data_budget: usize,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                ops: Vec::new(),
                busy_polls: Cell::new(0),
                block_budget: usize::MAX,
                data_budget: usize::MAX,
            }
        }
    }

    impl DisplayBus for MockBus {
        type Error = MockError;

        fn send_command(&mut self, command: u8) -> Result<(), MockError> {
            self.ops.push(BusOp::Command(command));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), MockError> {
            if self.data_budget == 0 {
                return Err(MockError);
            }
            self.data_budget -= 1;
            self.ops.push(BusOp::Data(data.to_vec()));
            Ok(())
        }

        fn is_busy(&self) -> bool {
            let remaining = self.busy_polls.get();
            if remaining > 0 {
                self.busy_polls.set(remaining - 1);
                true
            } else {
                false
            }
        }

        fn start_block_transfer(&mut self, data: &[u8]) -> Result<(), MockError> {
            if self.block_budget == 0 {
                return Err(MockError);
            }
            self.block_budget -= 1;
            self.ops.push(BusOp::Block(data.to_vec()));
            Ok(())
        }
    }

    struct MockClock {
        ticks: Cell<u32>,
        step: u32,
    }

    impl MockClock {
        fn new(start: u32, step: u32) -> Self {
            Self {
                ticks: Cell::new(start),
                step,
            }
        }
    }

    impl Clock for MockClock {
        fn now(&self) -> u32 {
            let t = self.ticks.get();
            self.ticks.set(t.wrapping_add(self.step));
            t
        }
    }

    fn engine(mode: BufferMode) -> Oled<MockBus, MockClock> {
        Oled::new(
            MockBus::new(),
            MockClock::new(0, 25),
            Config {
                mode,
                bus_wait_budget: 16,
            },
        )
    }

    fn blocks(ops: &[BusOp]) -> usize {
        ops.iter()
            .filter(|op| matches!(op, BusOp::Block(_)))
            .count()
    }

    fn page_address_cmds(page: u8, column: u8) -> [BusOp; 3] {
        [
            BusOp::Command(cmd::SET_PAGE_ADDR | page),
            BusOp::Command(cmd::SET_HIGH_COLUMN | (column >> 4)),
            BusOp::Command(cmd::SET_LOW_COLUMN | (column & 0x0F)),
        ]
    }

    #[test]
    fn test_init_sends_power_on_sequence() {
        let mut oled = engine(BufferMode::Double);
        oled.frame_mut().set_pixel(3, 3, Color::White);
        oled.init().unwrap();
        let expected: Vec<BusOp> = INIT_CMDS.iter().map(|&c| BusOp::Command(c)).collect();
        assert_eq!(oled.bus().ops, expected);
        assert!(!oled.frame().pixel(3, 3));
    }

    #[test]
    fn test_sync_update_walks_all_pages() {
        let mut oled = engine(BufferMode::Double);
        oled.frame_mut().set_pixel(0, 0, Color::White);
        oled.frame_mut().set_pixel(127, 63, Color::White);
        oled.update().unwrap();

        // Four bus operations per page: three addressing commands and
        // one data run.
        assert_eq!(oled.bus().ops.len(), PAGE_COUNT * 4);
        for page in 0..PAGE_COUNT {
            let group = &oled.bus().ops[page * 4..page * 4 + 4];
            assert_eq!(group[..3], page_address_cmds(page as u8, 0));
            match &group[3] {
                BusOp::Data(row) => assert_eq!(row.len(), COLUMN_COUNT),
                other => panic!("expected data run, got {other:?}"),
            }
        }
        match &oled.bus().ops[3] {
            BusOp::Data(row) => assert_eq!(row[0], 0x01),
            _ => unreachable!(),
        }
        match &oled.bus().ops[PAGE_COUNT * 4 - 1] {
            BusOp::Data(row) => assert_eq!(row[127], 0x80),
            _ => unreachable!(),
        }
        // The blocking path reads the clock once at start, once at end.
        assert_eq!(oled.last_transfer_ticks(), Some(25));
    }

    #[test]
    fn test_sync_update_swaps_roles_after_send() {
        let mut oled = engine(BufferMode::Double);
        let drawn = oled.frames.active_id();
        oled.frame_mut().set_pixel(5, 5, Color::White);
        oled.update().unwrap();
        assert_eq!(oled.frames.display_id(), drawn);
        assert_eq!(oled.frames.active_id(), drawn.other());
        // The new active frame is the old display frame, still blank.
        assert!(!oled.frame().pixel(5, 5));
    }

    #[test]
    fn test_sync_failure_keeps_roles() {
        let mut oled = engine(BufferMode::Double);
        oled.bus.data_budget = 2;
        let before = (oled.frames.active_id(), oled.frames.display_id());
        assert_eq!(oled.update(), Err(Error::Bus(MockError)));
        assert_eq!((oled.frames.active_id(), oled.frames.display_id()), before);
    }

    #[test]
    fn test_async_chain_sends_eight_pages_then_commits() {
        let mut oled = engine(BufferMode::Double);
        // Split the roles first so the commit is observable.
        oled.update().unwrap();
        oled.bus.ops.clear();
        oled.frame_mut().set_pixel(10, 0, Color::White);
        let source = oled.frames.active_id();
        let display_before = oled.frames.display_id();
        assert_ne!(source, display_before);

        oled.update_async().unwrap();
        assert!(oled.is_busy());
        assert_eq!(blocks(&oled.bus().ops), 1);
        // Drawing may continue into the other frame immediately.
        assert_eq!(oled.frames.active_id(), source.other());

        for completed in 1..PAGE_COUNT {
            // Commit happens only after the final completion.
            assert_eq!(oled.frames.display_id(), display_before);
            oled.on_block_complete();
            assert_eq!(blocks(&oled.bus().ops), completed + 1);
        }
        assert!(oled.is_busy());
        oled.on_block_complete();

        assert!(!oled.is_busy());
        assert_eq!(blocks(&oled.bus().ops), PAGE_COUNT);
        assert_eq!(oled.frames.display_id(), source);

        // Every page was addressed at column 0 before its block.
        let first_block = oled
            .bus()
            .ops
            .iter()
            .position(|op| matches!(op, BusOp::Block(_)))
            .unwrap();
        assert_eq!(oled.bus().ops[first_block - 3..first_block], page_address_cmds(0, 0));
        match &oled.bus().ops[first_block] {
            BusOp::Block(row) => assert_eq!(row[10], 0x01),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_async_start_while_busy_is_rejected() {
        let mut oled = engine(BufferMode::Double);
        oled.update_async().unwrap();
        let ops_before = oled.bus().ops.len();

        assert_eq!(oled.update_async(), Err(Error::Busy));
        assert_eq!(oled.update(), Err(Error::Busy));
        assert_eq!(oled.update_area(0, 0, 10, 10), Err(Error::Busy));
        // The in-flight chain saw no extra traffic.
        assert_eq!(oled.bus().ops.len(), ops_before);
        assert!(oled.is_busy());

        // The session's page counter was untouched: its full set of
        // completions still runs the chain to commit.
        for _ in 0..PAGE_COUNT {
            oled.on_block_complete();
        }
        assert!(!oled.is_busy());
        assert_eq!(blocks(&oled.bus().ops), PAGE_COUNT);
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let mut oled = engine(BufferMode::Double);
        oled.on_block_complete();
        assert!(!oled.is_busy());
        assert!(oled.bus().ops.is_empty());
        assert_eq!(oled.last_transfer_ticks(), None);
    }

    #[test]
    fn test_failed_chain_restart_abandons_transfer() {
        let mut oled = engine(BufferMode::Double);
        // Split the roles so a wrong commit would be visible.
        oled.update().unwrap();
        oled.bus.ops.clear();
        oled.bus.block_budget = 3;
        let display_before = oled.frames.display_id();
        let ticks_before = oled.last_transfer_ticks();

        oled.update_async().unwrap();
        oled.on_block_complete();
        oled.on_block_complete();
        // Third completion tries to start page 3 and fails.
        oled.on_block_complete();

        assert!(!oled.is_busy());
        assert_eq!(blocks(&oled.bus().ops), 3);
        // Nothing was published, and no new duration was recorded.
        assert_eq!(oled.frames.display_id(), display_before);
        assert_eq!(oled.last_transfer_ticks(), ticks_before);
        // The engine accepts a fresh transfer afterwards.
        oled.bus.block_budget = usize::MAX;
        oled.update_async().unwrap();
    }

    #[test]
    fn test_timeout_leaves_roles_untouched() {
        let mut oled = engine(BufferMode::Double);
        oled.bus.busy_polls.set(100);
        let before = (oled.frames.active_id(), oled.frames.display_id());

        assert_eq!(oled.update_async(), Err(Error::Timeout));
        assert!(!oled.is_busy());
        assert_eq!((oled.frames.active_id(), oled.frames.display_id()), before);
        assert_eq!(blocks(&oled.bus().ops), 0);
    }

    #[test]
    fn test_sync_timeout_surfaces_and_keeps_roles() {
        let mut oled = engine(BufferMode::Double);
        oled.bus.busy_polls.set(100);
        let before = (oled.frames.active_id(), oled.frames.display_id());

        assert_eq!(oled.update(), Err(Error::Timeout));
        assert_eq!((oled.frames.active_id(), oled.frames.display_id()), before);
        // No page data went out after the failed wait.
        assert!(!oled.bus().ops.iter().any(|op| matches!(op, BusOp::Data(_))));
    }

    #[test]
    fn test_transfer_duration_recorded_with_wraparound() {
        let mut oled = Oled::new(
            MockBus::new(),
            MockClock::new(u32::MAX - 5, 25),
            Config::default(),
        );
        oled.update_async().unwrap();
        for _ in 0..PAGE_COUNT {
            oled.on_block_complete();
        }
        // now() is read once at start and once at commit.
        assert_eq!(oled.last_transfer_ticks(), Some(25));
    }

    #[test]
    fn test_area_update_clamps_and_addresses_columns() {
        let mut oled = engine(BufferMode::Double);
        oled.update_area(100, 8, 120, 15).unwrap();
        assert_eq!(oled.bus().ops[..3], page_address_cmds(1, 100));
        match &oled.bus().ops[3] {
            BusOp::Data(run) => assert_eq!(run.len(), 21),
            other => panic!("expected data run, got {other:?}"),
        }
        assert_eq!(oled.bus().ops.len(), 4);

        // Negative corner clamps to the origin.
        oled.bus.ops.clear();
        oled.update_area(-5, -3, 10, 9).unwrap();
        assert_eq!(oled.bus().ops[..3], page_address_cmds(0, 0));
        match &oled.bus().ops[3] {
            BusOp::Data(run) => assert_eq!(run.len(), 11),
            other => panic!("expected data run, got {other:?}"),
        }
        // Rows 0..=9 span pages 0 and 1.
        assert_eq!(oled.bus().ops.len(), 8);
    }

    #[test]
    fn test_area_update_outside_screen_is_silent() {
        let mut oled = engine(BufferMode::Double);
        oled.update_area(-10, -10, -1, -1).unwrap();
        oled.update_area(128, 0, 130, 5).unwrap();
        oled.update_area(0, 64, 10, 70).unwrap();
        oled.update_area(10, 0, 5, 5).unwrap();
        oled.update_area(0, 10, 5, 5).unwrap();
        assert!(oled.bus().ops.is_empty());
    }

    #[test]
    fn test_area_update_reads_display_frame() {
        let mut oled = engine(BufferMode::Double);
        oled.frame_mut().set_pixel(0, 0, Color::White);
        oled.update().unwrap();
        // Draw into the fresh active frame; the panel has not seen it.
        oled.frame_mut().set_pixel(1, 0, Color::White);
        oled.bus.ops.clear();

        oled.update_area(0, 0, 7, 7).unwrap();
        match &oled.bus().ops[3] {
            BusOp::Data(run) => {
                // Published content only, not the in-progress frame.
                assert_eq!(run[0], 0x01);
                assert_eq!(run[1], 0x00);
            }
            other => panic!("expected data run, got {other:?}"),
        }
    }

    #[test]
    fn test_single_buffer_mode_keeps_one_frame() {
        let mut oled = engine(BufferMode::Single);
        let id = oled.frames.active_id();
        oled.frame_mut().set_pixel(9, 9, Color::White);

        oled.update().unwrap();
        assert_eq!(oled.frames.active_id(), id);
        assert_eq!(oled.frames.display_id(), id);
        // Drawing stays visible in the active frame.
        assert!(oled.frame().pixel(9, 9));

        oled.update_async().unwrap();
        assert_eq!(oled.frames.active_id(), id);
        for _ in 0..PAGE_COUNT {
            oled.on_block_complete();
        }
        assert!(!oled.is_busy());
        assert_eq!(oled.frames.display_id(), id);
    }

    #[test]
    fn test_busy_wait_consumes_budgeted_polls() {
        let mut oled = engine(BufferMode::Double);
        // Fewer polls than the budget of 16: the wait rides it out.
        oled.bus.busy_polls.set(10);
        oled.update().unwrap();
    }

    #[test]
    fn test_set_contrast_and_power() {
        let mut oled = engine(BufferMode::Double);
        oled.set_contrast(0x7F).unwrap();
        oled.set_display_on(false).unwrap();
        oled.set_display_on(true).unwrap();
        assert_eq!(
            oled.bus().ops,
            vec![
                BusOp::Command(cmd::SET_CONTRAST),
                BusOp::Command(0x7F),
                BusOp::Command(cmd::DISPLAY_OFF),
                BusOp::Command(cmd::DISPLAY_ON),
            ]
        );
    }

    #[test]
    fn test_text_and_chart_draw_into_active_frame() {
        let mut oled = engine(BufferMode::Double);
        let cursor = oled.draw_str(0, 0, "Hi", Font::F6x8);
        assert_eq!(cursor, (12, 0));
        let cursor = oled.draw_fmt(0, 8, Font::F6x8, format_args!("{}%", 42));
        assert_eq!(cursor, (18, 8));
        oled.draw_line_chart(&LineChart {
            area: crate::chart::ChartArea {
                x: 0,
                y: 16,
                width: 60,
                height: 40,
            },
            x_data: &[0, 5, 10],
            y_data: &[0, 9, 3],
            color: Color::White,
            axis: false,
        });
        // Everything landed in the active frame, nothing on the bus.
        assert!(oled.bus().ops.is_empty());
        assert!(oled.frame().pixel(0, 1));
    }
}
