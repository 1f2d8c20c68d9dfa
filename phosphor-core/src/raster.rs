//! Shape rasterization over the frame store.
//!
//! Every primitive reduces to [`FrameBuffer::set_pixel`] (or a masked
//! page write for the blit), so nothing here can touch memory outside
//! the frame. Lines clip whole when an endpoint is off-screen;
//! rectangles wrap modulo the screen instead, which is the documented
//! behavior for marquee-style UI elements, not an accident.

use crate::framebuffer::{Color, FrameBuffer, HEIGHT, PAGE_COUNT, WIDTH};

const W: i16 = WIDTH as i16;
const H: i16 = HEIGHT as i16;

/// Outline or solid rendering for closed shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fill {
    Outline,
    Solid,
}

/// A packed 1-bit-per-pixel image.
///
/// Data is page-major: `width` bytes per 8-row band, top band first,
/// least significant bit on top. The blit reads past-the-end bytes of a
/// short slice as blank.
#[derive(Debug, Clone, Copy)]
pub struct Image<'a> {
    pub width: u8,
    pub height: u8,
    pub data: &'a [u8],
}

impl<'a> Image<'a> {
    pub const fn new(width: u8, height: u8, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }
}

fn on_screen(x: i16, y: i16) -> bool {
    x >= 0 && x < W && y >= 0 && y < H
}

/// Even-odd crossing containment test (W. Randolph Franklin's pnpoly).
///
/// `vert_x` and `vert_y` hold the polygon corners in order. Integer
/// division matches the fixed-point raster grid, so edge pixels land on
/// one side deterministically.
pub fn point_in_polygon(vert_x: &[i16], vert_y: &[i16], test_x: i16, test_y: i16) -> bool {
    let n = vert_x.len().min(vert_y.len());
    if n == 0 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        if (vert_y[i] > test_y) != (vert_y[j] > test_y) {
            // The differing comparisons guarantee vert_y[j] != vert_y[i].
            let crossing = (vert_x[j] as i32 - vert_x[i] as i32)
                * (test_y as i32 - vert_y[i] as i32)
                / (vert_y[j] as i32 - vert_y[i] as i32)
                + vert_x[i] as i32;
            if (test_x as i32) < crossing {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether the screen-space point `(x, y)` lies inside the clockwise
/// angle interval `[start, end]` in degrees. Zero points right, positive
/// angles point down. `start > end` spans the -180/180 seam; `start ==
/// end` passes everything.
fn in_angle(x: i16, y: i16, start: i16, end: i16) -> bool {
    let angle = (libm::atan2f(y as f32, x as f32) * 180.0 / core::f32::consts::PI) as i16;
    if start < end {
        angle >= start && angle <= end
    } else {
        angle >= start || angle <= end
    }
}

impl FrameBuffer {
    fn toggle_pixel(&mut self, x: i16, y: i16) {
        if !on_screen(x, y) {
            return;
        }
        self.page_mut((y / 8) as usize)[x as usize] ^= 1 << (y % 8);
    }

    /// Draw a straight line between two on-screen endpoints.
    ///
    /// Degenerate horizontal/vertical lines fill directly; everything
    /// else runs integer Bresenham normalized into the first octant
    /// (endpoint swap, Y mirror, X/Y exchange) with the transform undone
    /// per plotted point. A line with either endpoint off-screen is
    /// dropped whole.
    pub fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color) {
        if !on_screen(x0, y0) || !on_screen(x1, y1) {
            return;
        }

        if y0 == y1 {
            let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
            for x in lo..=hi {
                self.set_pixel(x, y0, color);
            }
            return;
        }
        if x0 == x1 {
            let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
            for y in lo..=hi {
                self.set_pixel(x0, y, color);
            }
            return;
        }

        let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);
        let mut y_mirrored = false;
        let mut xy_swapped = false;

        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }
        if y0 > y1 {
            y0 = -y0;
            y1 = -y1;
            y_mirrored = true;
        }
        if y1 - y0 > x1 - x0 {
            core::mem::swap(&mut x0, &mut y0);
            core::mem::swap(&mut x1, &mut y1);
            xy_swapped = true;
        }

        let dx = x1 - x0;
        let dy = y1 - y0;
        let incr_e = 2 * dy;
        let incr_ne = 2 * (dy - dx);
        let mut d = 2 * dy - dx;
        let mut x = x0;
        let mut y = y0;

        let mut plot = |fb: &mut Self, x: i16, y: i16| match (y_mirrored, xy_swapped) {
            (true, true) => fb.set_pixel(y, -x, color),
            (true, false) => fb.set_pixel(x, -y, color),
            (false, true) => fb.set_pixel(y, x, color),
            (false, false) => fb.set_pixel(x, y, color),
        };

        plot(self, x, y);
        while x < x1 {
            x += 1;
            if d < 0 {
                d += incr_e;
            } else {
                y += 1;
                d += incr_ne;
            }
            plot(self, x, y);
        }
    }

    /// Draw a rectangle whose origin wraps modulo the screen.
    ///
    /// A rectangle sticking out past one edge reappears on the opposite
    /// edge. Zero extents and origins past the bottom/right edge are
    /// no-ops.
    pub fn draw_rect(&mut self, x: i16, y: i16, width: i16, height: i16, fill: Fill) {
        if width <= 0 || height <= 0 || x >= W || y >= H {
            return;
        }
        let x = x.rem_euclid(W);
        let y = y.rem_euclid(H);

        match fill {
            Fill::Outline => {
                for i in x..x + width {
                    self.set_pixel(i % W, y, Color::White);
                    self.set_pixel(i % W, (y + height - 1) % H, Color::White);
                }
                for j in y..y + height {
                    self.set_pixel(x, j % H, Color::White);
                    self.set_pixel((x + width - 1) % W, j % H, Color::White);
                }
            }
            Fill::Solid => {
                for i in x..x + width {
                    for j in y..y + height {
                        self.set_pixel(i % W, j % H, Color::White);
                    }
                }
            }
        }
    }

    /// Invert a rectangle, wrapping like [`FrameBuffer::draw_rect`].
    ///
    /// The outline variant inverts the two horizontal edges over the
    /// full width and the two vertical edges over `y+1..=y+height-2`,
    /// so corner pixels flip exactly once. Applying the same call twice
    /// restores the frame.
    pub fn invert_rect(&mut self, x: i16, y: i16, width: i16, height: i16, fill: Fill) {
        if width <= 0 || height <= 0 || x >= W || y >= H {
            return;
        }
        let x = x.rem_euclid(W);
        let y = y.rem_euclid(H);

        match fill {
            Fill::Outline => {
                let x2 = (x + width - 1) % W;
                let y2 = (y + height - 1) % H;
                for i in x..x + width {
                    self.toggle_pixel(i % W, y);
                    self.toggle_pixel(i % W, y2);
                }
                if height > 2 {
                    for j in (y + 1)..=(y + height - 2) {
                        self.toggle_pixel(x, j % H);
                        self.toggle_pixel(x2, j % H);
                    }
                }
            }
            Fill::Solid => {
                for j in y..y + height {
                    for i in x..x + width {
                        self.toggle_pixel(i % W, j % H);
                    }
                }
            }
        }
    }

    /// Draw a triangle from three corners.
    ///
    /// Solid fill walks the corner bounding box and keeps the pixels the
    /// even-odd containment test accepts.
    pub fn draw_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        fill: Fill,
    ) {
        match fill {
            Fill::Outline => {
                self.draw_line(x0, y0, x1, y1, Color::White);
                self.draw_line(x0, y0, x2, y2, Color::White);
                self.draw_line(x1, y1, x2, y2, Color::White);
            }
            Fill::Solid => {
                let vert_x = [x0, x1, x2];
                let vert_y = [y0, y1, y2];
                let min_x = x0.min(x1).min(x2);
                let max_x = x0.max(x1).max(x2);
                let min_y = y0.min(y1).min(y2);
                let max_y = y0.max(y1).max(y2);
                for i in min_x..=max_x {
                    for j in min_y..=max_y {
                        if point_in_polygon(&vert_x, &vert_y, i, j) {
                            self.set_pixel(i, j, Color::White);
                        }
                    }
                }
            }
        }
    }

    /// Draw a circle by the integer midpoint walk.
    ///
    /// Boundary points are plotted in both modes; solid fill adds the
    /// vertical spans between symmetric boundary columns, so the outline
    /// point set is always a subset of the solid one.
    pub fn draw_circle(&mut self, cx: i16, cy: i16, radius: i16, fill: Fill) {
        let mut x = 0i16;
        let mut y = radius;
        let mut d = 1 - radius;

        self.set_pixel(cx + x, cy + y, Color::White);
        self.set_pixel(cx - x, cy - y, Color::White);
        self.set_pixel(cx + y, cy + x, Color::White);
        self.set_pixel(cx - y, cy - x, Color::White);

        if let Fill::Solid = fill {
            for j in -y..y {
                self.set_pixel(cx, cy + j, Color::White);
            }
        }

        while x < y {
            x += 1;
            if d < 0 {
                d += 2 * x + 1;
            } else {
                y -= 1;
                d += 2 * (x - y) + 1;
            }

            self.set_pixel(cx + x, cy + y, Color::White);
            self.set_pixel(cx + y, cy + x, Color::White);
            self.set_pixel(cx - x, cy - y, Color::White);
            self.set_pixel(cx - y, cy - x, Color::White);
            self.set_pixel(cx + x, cy - y, Color::White);
            self.set_pixel(cx + y, cy - x, Color::White);
            self.set_pixel(cx - x, cy + y, Color::White);
            self.set_pixel(cx - y, cy + x, Color::White);

            if let Fill::Solid = fill {
                for j in -y..y {
                    self.set_pixel(cx + x, cy + j, Color::White);
                    self.set_pixel(cx - x, cy + j, Color::White);
                }
                for j in -x..x {
                    self.set_pixel(cx - y, cy + j, Color::White);
                    self.set_pixel(cx + y, cy + j, Color::White);
                }
            }
        }
    }

    /// Draw an axis-aligned ellipse with semi-axes `a` (horizontal) and
    /// `b` (vertical).
    ///
    /// Midpoint walk in two regions; the decision terms carry a 0.5 bias
    /// and therefore run in f32, everything plotted stays integer.
    pub fn draw_ellipse(&mut self, cx: i16, cy: i16, a: i16, b: i16, fill: Fill) {
        let a2 = (a as i32 * a as i32) as f32;
        let b2 = (b as i32 * b as i32) as f32;
        let mut x = 0i16;
        let mut y = b;
        let mut d1 = b2 + a2 * (0.5 - b as f32);

        if let Fill::Solid = fill {
            for j in -y..y {
                self.set_pixel(cx, cy + j, Color::White);
            }
        }

        self.set_pixel(cx + x, cy + y, Color::White);
        self.set_pixel(cx - x, cy - y, Color::White);
        self.set_pixel(cx - x, cy + y, Color::White);
        self.set_pixel(cx + x, cy - y, Color::White);

        // Region 1: slope above -1, step in X.
        while b2 * (x as f32 + 1.0) < a2 * (y as f32 - 0.5) {
            if d1 <= 0.0 {
                d1 += b2 * (2 * x + 3) as f32;
            } else {
                d1 += b2 * (2 * x + 3) as f32 + a2 * (-2 * y + 2) as f32;
                y -= 1;
            }
            x += 1;

            if let Fill::Solid = fill {
                for j in -y..y {
                    self.set_pixel(cx + x, cy + j, Color::White);
                    self.set_pixel(cx - x, cy + j, Color::White);
                }
            }

            self.set_pixel(cx + x, cy + y, Color::White);
            self.set_pixel(cx - x, cy - y, Color::White);
            self.set_pixel(cx - x, cy + y, Color::White);
            self.set_pixel(cx + x, cy - y, Color::White);
        }

        // Region 2: slope below -1, step in Y down to the horizontal axis.
        let xf = x as f32;
        let mut d2 = b2 * (xf + 0.5) * (xf + 0.5) + a2 * ((y - 1) as f32) * ((y - 1) as f32)
            - a2 * b2;

        while y > 0 {
            if d2 <= 0.0 {
                d2 += b2 * (2 * x + 2) as f32 + a2 * (-2 * y + 3) as f32;
                x += 1;
            } else {
                d2 += a2 * (-2 * y + 3) as f32;
            }
            y -= 1;

            if let Fill::Solid = fill {
                for j in -y..y {
                    self.set_pixel(cx + x, cy + j, Color::White);
                    self.set_pixel(cx - x, cy + j, Color::White);
                }
            }

            self.set_pixel(cx + x, cy + y, Color::White);
            self.set_pixel(cx - x, cy - y, Color::White);
            self.set_pixel(cx - x, cy + y, Color::White);
            self.set_pixel(cx + x, cy - y, Color::White);
        }
    }

    /// Draw a circular arc, or a sector when solid.
    ///
    /// Runs the circle walk but gates every candidate point on the
    /// angle interval, each symmetric point tested with its own octant
    /// coordinates.
    pub fn draw_arc(
        &mut self,
        cx: i16,
        cy: i16,
        radius: i16,
        start_angle: i16,
        end_angle: i16,
        fill: Fill,
    ) {
        let mut x = 0i16;
        let mut y = radius;
        let mut d = 1 - radius;

        if in_angle(x, y, start_angle, end_angle) {
            self.set_pixel(cx + x, cy + y, Color::White);
        }
        if in_angle(-x, -y, start_angle, end_angle) {
            self.set_pixel(cx - x, cy - y, Color::White);
        }
        if in_angle(y, x, start_angle, end_angle) {
            self.set_pixel(cx + y, cy + x, Color::White);
        }
        if in_angle(-y, -x, start_angle, end_angle) {
            self.set_pixel(cx - y, cy - x, Color::White);
        }

        if let Fill::Solid = fill {
            for j in -y..y {
                if in_angle(0, j, start_angle, end_angle) {
                    self.set_pixel(cx, cy + j, Color::White);
                }
            }
        }

        while x < y {
            x += 1;
            if d < 0 {
                d += 2 * x + 1;
            } else {
                y -= 1;
                d += 2 * (x - y) + 1;
            }

            if in_angle(x, y, start_angle, end_angle) {
                self.set_pixel(cx + x, cy + y, Color::White);
            }
            if in_angle(y, x, start_angle, end_angle) {
                self.set_pixel(cx + y, cy + x, Color::White);
            }
            if in_angle(-x, -y, start_angle, end_angle) {
                self.set_pixel(cx - x, cy - y, Color::White);
            }
            if in_angle(-y, -x, start_angle, end_angle) {
                self.set_pixel(cx - y, cy - x, Color::White);
            }
            if in_angle(x, -y, start_angle, end_angle) {
                self.set_pixel(cx + x, cy - y, Color::White);
            }
            if in_angle(y, -x, start_angle, end_angle) {
                self.set_pixel(cx + y, cy - x, Color::White);
            }
            if in_angle(-x, y, start_angle, end_angle) {
                self.set_pixel(cx - x, cy + y, Color::White);
            }
            if in_angle(-y, x, start_angle, end_angle) {
                self.set_pixel(cx - y, cy + x, Color::White);
            }

            if let Fill::Solid = fill {
                for j in -y..y {
                    if in_angle(x, j, start_angle, end_angle) {
                        self.set_pixel(cx + x, cy + j, Color::White);
                    }
                    if in_angle(-x, j, start_angle, end_angle) {
                        self.set_pixel(cx - x, cy + j, Color::White);
                    }
                }
                for j in -x..x {
                    if in_angle(-y, j, start_angle, end_angle) {
                        self.set_pixel(cx - y, cy + j, Color::White);
                    }
                    if in_angle(y, j, start_angle, end_angle) {
                        self.set_pixel(cx + y, cy + j, Color::White);
                    }
                }
            }
        }
    }

    /// OR-composite an image into the frame.
    ///
    /// Supports negative and partially off-screen placement: the
    /// destination rectangle is clipped and the source offset shifted to
    /// match. When the destination is not page-aligned each output byte
    /// combines two adjacent source rows; the overflow of the last band
    /// carries into the following page.
    pub fn draw_image(&mut self, x: i16, y: i16, image: &Image<'_>) {
        let width = image.width as i16;
        let height = image.height as i16;
        if width == 0 || height == 0 || x >= W || y >= H {
            return;
        }

        let display_x = x.max(0);
        let display_y = y.max(0);
        let mut display_w = if x < 0 { width + x } else { width };
        let mut display_h = if y < 0 { height + y } else { height };
        if display_w <= 0 || display_h <= 0 {
            return;
        }
        display_w = display_w.min(W - display_x);
        display_h = display_h.min(H - display_y);

        let src_x_off = (-x).max(0);
        let src_y_off = (-y).max(0);

        let dest_start_page = (display_y / 8) as usize;
        let dest_start_bit = (display_y % 8) as u32;
        let band_count = ((display_h + (dest_start_bit as i16) + 7) / 8) as usize;

        for band in 0..band_count {
            let dest_page = dest_start_page + band;
            if dest_page >= PAGE_COUNT {
                break;
            }

            let src_start_row = (src_y_off + (band as i16) * 8 - dest_start_bit as i16).max(0);
            let src_page = (src_start_row / 8) as usize;
            let src_bit = (src_start_row % 8) as u32;
            let dest_bit = if band == 0 { dest_start_bit } else { 0 };
            let src_row_base = src_page * image.width as usize;

            for col in 0..display_w {
                let src_index = src_row_base + (src_x_off + col) as usize;
                let src_data = image.data.get(src_index).copied().unwrap_or(0);
                let next_data = if src_bit != 0 && ((src_page as i16) + 1) * 8 < height {
                    image
                        .data
                        .get(src_index + image.width as usize)
                        .copied()
                        .unwrap_or(0)
                } else {
                    0
                };

                let combined = if src_bit == 0 {
                    src_data
                } else {
                    (src_data >> src_bit) | (next_data << (8 - src_bit))
                };

                let dest_pos = (display_x + col) as usize;
                if dest_bit == 0 {
                    self.page_mut(dest_page)[dest_pos] |= combined;
                } else {
                    self.page_mut(dest_page)[dest_pos] |= combined << dest_bit;
                    if dest_page + 1 < PAGE_COUNT {
                        self.page_mut(dest_page + 1)[dest_pos] |= combined >> (8 - dest_bit);
                    }
                }
            }
        }
    }
}
