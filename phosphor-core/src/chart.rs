//! Line charts over caller-owned sample series.
//!
//! Two variants: value-indexed, where both X and Y come from data
//! arrays and scaling runs in Q16.16 fixed point, and time-indexed,
//! where X is derived from sample position (optionally windowed to the
//! most recent samples) and Y normalization runs in f32. Both expand
//! the Y range by a tenth on each side so the trace never rides the
//! frame edge, and both gate axes, arrowheads, tick labels and the mean
//! line behind one flag. All drawing lands in the active frame through
//! the rasterizer and text modules.

use crate::fixed::Fixed32;
use crate::framebuffer::{Color, FrameBuffer};
use crate::text::{draw_fmt, Font, GlyphIndex};

/// Number of samples shown when a time chart is windowed.
const TIME_WINDOW: usize = 20;

/// Tick marks per axis.
const TICK_COUNT: i16 = 5;

/// Pixel rectangle a chart renders into. `x`/`y` is the top-left
/// corner; the X axis sits at `y + height`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChartArea {
    pub x: i16,
    pub y: i16,
    pub width: i16,
    pub height: i16,
}

/// A value-indexed chart: each sample carries its own X position.
#[derive(Debug, Clone, Copy)]
pub struct LineChart<'a> {
    pub area: ChartArea,
    pub x_data: &'a [i16],
    pub y_data: &'a [i16],
    pub color: Color,
    /// Draw axes, arrowheads, tick labels and the mean line.
    pub axis: bool,
}

/// Sample storage for time-indexed charts.
#[derive(Debug, Clone, Copy)]
pub enum Series<'a> {
    I16(&'a [i16]),
    F32(&'a [f32]),
}

impl Series<'_> {
    pub fn len(&self) -> usize {
        match self {
            Series::I16(data) => data.len(),
            Series::F32(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, i: usize) -> f32 {
        match self {
            Series::I16(data) => data[i] as f32,
            Series::F32(data) => data[i],
        }
    }
}

/// A time-indexed chart: X advances uniformly per sample, newest on the
/// right.
#[derive(Debug, Clone, Copy)]
pub struct TimeChart<'a> {
    pub area: ChartArea,
    pub series: Series<'a>,
    /// Time between samples, in whatever unit the caller labels with.
    pub interval: u16,
    pub color: Color,
    /// Draw axes, arrowheads, tick labels and the mean line.
    pub axis: bool,
    /// Show only the newest [`TIME_WINDOW`] samples.
    pub latest_only: bool,
}

fn draw_axes(fb: &mut FrameBuffer, area: &ChartArea, color: Color) {
    let ChartArea {
        x: x0,
        y: y0,
        width,
        height,
    } = *area;
    fb.draw_line(x0, y0 + height, x0 + width, y0 + height, color);
    fb.draw_line(x0, y0, x0, y0 + height, color);

    fb.draw_line(x0 + width, y0 + height, x0 + width - 5, y0 + height - 3, color);
    fb.draw_line(x0 + width, y0 + height, x0 + width - 5, y0 + height + 3, color);
    fb.draw_line(x0, y0, x0 - 3, y0 + 5, color);
    fb.draw_line(x0, y0, x0 + 3, y0 + 5, color);
}

/// Y-axis ticks with value labels derived from the unexpanded data
/// range, so labels describe the data even though the trace is mapped
/// with the margin applied.
fn draw_y_ticks(
    fb: &mut FrameBuffer,
    glyphs: &mut GlyphIndex,
    area: &ChartArea,
    min_y: i16,
    max_y: i16,
    color: Color,
) {
    let interval = area.height / TICK_COUNT;
    let mut range = max_y - min_y;
    if range == 0 {
        range = 1;
    }
    for i in 1..=TICK_COUNT {
        let y_pos = area.y + area.height - i * interval;
        fb.draw_line(area.x - 3, y_pos, area.x, y_pos, color);
        let value = min_y + ((i as i32 * interval as i32 * range as i32) / area.height as i32) as i16;
        draw_fmt(
            fb,
            glyphs,
            area.x - 30,
            y_pos - 4,
            Font::F6x8,
            format_args!("{}", value),
        );
    }
}

/// Draw a value-indexed line chart.
///
/// Needs at least two samples and a non-degenerate area; otherwise the
/// call is a silent no-op. Each mapped point is clamped into the chart
/// rectangle, plotted, and joined to its predecessor.
pub fn draw_line_chart(fb: &mut FrameBuffer, glyphs: &mut GlyphIndex, chart: &LineChart<'_>) {
    let ChartArea {
        x: x0,
        y: y0,
        width,
        height,
    } = chart.area;
    let count = chart.x_data.len().min(chart.y_data.len());
    if count < 2 || width <= 0 || height <= 0 {
        return;
    }

    if chart.axis {
        draw_axes(fb, &chart.area, chart.color);
    }

    let mut min_x = chart.x_data[0];
    let mut max_x = chart.x_data[0];
    let mut min_y = chart.y_data[0];
    let mut max_y = chart.y_data[0];
    for i in 1..count {
        min_x = min_x.min(chart.x_data[i]);
        max_x = max_x.max(chart.x_data[i]);
        min_y = min_y.min(chart.y_data[i]);
        max_y = max_y.max(chart.y_data[i]);
    }

    let mut x_range = max_x - min_x;
    let mut y_range = max_y - min_y;
    if x_range == 0 {
        x_range = 1;
    }
    if y_range == 0 {
        y_range = 1;
    }

    // Integer tenth; ranges below 10 get no margin.
    let margin = y_range / 10;
    let tick_min = min_y;
    let tick_max = max_y;
    let min_y = min_y - margin;
    let y_range = y_range + 2 * margin;

    let x_scale = Fixed32::ratio(width as i32, x_range as i32);
    let y_scale = Fixed32::ratio(height as i32, y_range as i32);

    if chart.axis {
        let interval = width / TICK_COUNT;
        for i in 1..=TICK_COUNT {
            let x_pos = x0 + i * interval;
            fb.draw_line(x_pos, y0 + height, x_pos, y0 + height + 3, chart.color);
            let value =
                min_x + ((i as i32 * interval as i32 * x_range as i32) / width as i32) as i16;
            draw_fmt(
                fb,
                glyphs,
                x_pos - 15,
                y0 + height + 5,
                Font::F6x8,
                format_args!("{}", value),
            );
        }
        draw_y_ticks(fb, glyphs, &chart.area, tick_min, tick_max, chart.color);

        let sum: i32 = chart.y_data[..count].iter().map(|&v| v as i32).sum();
        let mean = (sum / count as i32) as i16;
        let mean_y = y0 + height - y_scale.scale((mean - min_y) as i32) as i16;
        fb.draw_line(x0, mean_y, x0 + width, mean_y, chart.color);
        draw_fmt(
            fb,
            glyphs,
            x0 + (width >> 1) - 30,
            y0 - 10,
            Font::F6x8,
            format_args!("均值: {}", mean),
        );
    }

    let mut prev = (0i16, 0i16);
    for i in 0..count {
        let mut x = x0 + x_scale.scale((chart.x_data[i] - min_x) as i32) as i16;
        let mut y = y0 + height - y_scale.scale((chart.y_data[i] - min_y) as i32) as i16;

        x = x.clamp(x0, x0 + width).min(127);
        y = y.clamp(y0, y0 + height);

        fb.set_pixel(x, y, chart.color);
        if i > 0 {
            fb.draw_line(prev.0, prev.1, x, y, chart.color);
        }
        prev = (x, y);
    }
}

/// Draw a time-indexed line chart.
///
/// With `latest_only` set and more samples than the window, only the
/// newest [`TIME_WINDOW`] samples are shown and the X tick labels are
/// offset so they keep naming absolute sample times.
pub fn draw_time_chart(fb: &mut FrameBuffer, glyphs: &mut GlyphIndex, chart: &TimeChart<'_>) {
    let ChartArea {
        x: x0,
        y: y0,
        width,
        height,
    } = chart.area;
    let total = chart.series.len();

    let (start, count) = if chart.latest_only && total > TIME_WINDOW {
        (total - TIME_WINDOW, TIME_WINDOW)
    } else {
        (0, total)
    };
    if count < 2 || width <= 0 || height <= 0 {
        return;
    }

    let (mut min_f, mut max_f, tick_min, tick_max) = match chart.series {
        Series::I16(data) => {
            let mut min = data[start];
            let mut max = data[start];
            for &v in &data[start + 1..start + count] {
                min = min.min(v);
                max = max.max(v);
            }
            (min as f32, max as f32, min, max)
        }
        Series::F32(data) => {
            let mut min = data[start];
            let mut max = data[start];
            for &v in &data[start + 1..start + count] {
                min = min.min(v);
                max = max.max(v);
            }
            (min, max, min as i16, max as i16)
        }
    };

    if max_f == min_f {
        max_f = min_f + 1.0;
    }
    let range = max_f - min_f;
    min_f -= range * 0.1;
    max_f += range * 0.1;
    let span = max_f - min_f;

    if chart.axis {
        draw_axes(fb, &chart.area, chart.color);

        let interval = width / TICK_COUNT;
        for i in 1..=TICK_COUNT {
            let x_pos = x0 + i * interval;
            fb.draw_line(x_pos, y0 + height, x_pos, y0 + height + 3, chart.color);
            let ticks = i as i32 * interval as i32;
            let time = if chart.latest_only && total > TIME_WINDOW {
                (start as i32 + ticks * count as i32 / width as i32) * chart.interval as i32
            } else {
                ticks * total as i32 / width as i32 * chart.interval as i32
            };
            let time = time as u16;
            draw_fmt(
                fb,
                glyphs,
                x_pos - 15,
                y0 + height + 5,
                Font::F6x8,
                format_args!("{}", time),
            );
        }
        draw_y_ticks(fb, glyphs, &chart.area, tick_min, tick_max, chart.color);

        let mut sum = 0.0f32;
        for i in 0..count {
            sum += chart.series.get(start + i);
        }
        let mean = sum / count as f32;
        let mean_y = y0 + height - ((mean - min_f) * height as f32 / span) as i16;
        fb.draw_line(x0, mean_y, x0 + width, mean_y, chart.color);
    }

    let first = chart.series.get(start);
    let mut prev_x = x0;
    let mut prev_y = (y0 as f32 + height as f32 - (first - min_f) * height as f32 / span) as i16;

    for i in 1..count {
        let mut x = x0 + ((i as i32 * width as i32) / (count as i32 - 1)) as i16;
        x = x.min(127);
        let value = chart.series.get(start + i);
        let mut y = (y0 as f32 + height as f32 - (value - min_f) * height as f32 / span) as i16;

        x = x.clamp(x0, x0 + width);
        y = y.clamp(y0, y0 + height);

        fb.draw_line(prev_x, prev_y, x, y, chart.color);
        prev_x = x;
        prev_y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_lit(fb: &FrameBuffer) -> usize {
        let mut n = 0;
        for page in 0..crate::framebuffer::PAGE_COUNT {
            for col in 0..crate::framebuffer::COLUMN_COUNT {
                n += fb.page(page)[col].count_ones() as usize;
            }
        }
        n
    }

    fn row_fully_lit(fb: &FrameBuffer, y: i16, x0: i16, x1: i16) -> bool {
        (x0..=x1).all(|x| fb.pixel(x, y))
    }

    fn value_chart<'a>(x_data: &'a [i16], y_data: &'a [i16], axis: bool) -> LineChart<'a> {
        LineChart {
            area: ChartArea {
                x: 0,
                y: 0,
                width: 100,
                height: 50,
            },
            x_data,
            y_data,
            color: Color::White,
            axis,
        }
    }

    #[test]
    fn test_needs_two_points_and_area() {
        let mut fb = FrameBuffer::new();
        let mut glyphs = GlyphIndex::new();
        draw_line_chart(&mut fb, &mut glyphs, &value_chart(&[1], &[2], true));
        draw_line_chart(&mut fb, &mut glyphs, &value_chart(&[], &[], true));
        let mut flat = value_chart(&[0, 1], &[0, 1], true);
        flat.area.width = 0;
        draw_line_chart(&mut fb, &mut glyphs, &flat);
        draw_time_chart(
            &mut fb,
            &mut glyphs,
            &TimeChart {
                area: flat.area,
                series: Series::I16(&[3]),
                interval: 1,
                color: Color::White,
                axis: true,
                latest_only: false,
            },
        );
        assert_eq!(count_lit(&fb), 0);
    }

    #[test]
    fn test_polyline_spans_mapped_endpoints() {
        let mut fb = FrameBuffer::new();
        let mut glyphs = GlyphIndex::new();
        draw_line_chart(&mut fb, &mut glyphs, &value_chart(&[0, 10], &[0, 10], false));
        // Lowest sample near the bottom edge, highest near the top,
        // both kept off the frame border by the range margin.
        assert!(fb.pixel(0, 46));
        assert!(fb.pixel(100, 5));
        assert!(!fb.pixel(0, 50));
        assert!(!fb.pixel(100, 0));
    }

    #[test]
    fn test_flat_series_maps_to_bottom_edge() {
        let mut fb = FrameBuffer::new();
        let mut glyphs = GlyphIndex::new();
        // Zero range substitutes 1 and leaves no margin; everything
        // lands on the X axis row.
        draw_line_chart(&mut fb, &mut glyphs, &value_chart(&[0, 1], &[7, 7], false));
        assert!(row_fully_lit(&fb, 50, 0, 100));
        assert_eq!(count_lit(&fb), 101);
    }

    #[test]
    fn test_axis_flag_draws_frame() {
        let mut with_axis = FrameBuffer::new();
        let mut without = FrameBuffer::new();
        let mut glyphs = GlyphIndex::new();
        draw_line_chart(&mut with_axis, &mut glyphs, &value_chart(&[0, 10], &[0, 10], true));
        draw_line_chart(&mut without, &mut glyphs, &value_chart(&[0, 10], &[0, 10], false));
        // X axis along the bottom, Y axis up the left edge.
        assert!(row_fully_lit(&with_axis, 50, 0, 100));
        assert!((0..=50).all(|y| with_axis.pixel(0, y)));
        assert!(!without.pixel(0, 0));
        assert!(!without.pixel(100, 50));
    }

    #[test]
    fn test_mean_line_crosses_whole_area() {
        let mut fb = FrameBuffer::new();
        let mut glyphs = GlyphIndex::new();
        draw_line_chart(&mut fb, &mut glyphs, &value_chart(&[0, 10], &[0, 10], true));
        // Mean of 0 and 10 maps to row 26 under the margined scale.
        assert!(row_fully_lit(&fb, 26, 0, 100));
    }

    #[test]
    fn test_time_chart_windows_latest_samples() {
        let mut fb = FrameBuffer::new();
        let mut glyphs = GlyphIndex::new();
        let mut samples = [0i16; 30];
        for (i, s) in samples.iter_mut().enumerate() {
            *s = i as i16;
        }
        draw_time_chart(
            &mut fb,
            &mut glyphs,
            &TimeChart {
                area: ChartArea {
                    x: 0,
                    y: 0,
                    width: 100,
                    height: 40,
                },
                series: Series::I16(&samples),
                interval: 1,
                color: Color::White,
                axis: false,
                latest_only: true,
            },
        );
        // Window starts at sample 10: its value maps near the bottom,
        // the newest sample near the top right.
        assert!(fb.pixel(0, 36));
        assert!(fb.pixel(100, 3));
    }

    #[test]
    fn test_time_chart_axis_ticks_and_mean() {
        let mut fb = FrameBuffer::new();
        let mut glyphs = GlyphIndex::new();
        draw_time_chart(
            &mut fb,
            &mut glyphs,
            &TimeChart {
                area: ChartArea {
                    x: 40,
                    y: 5,
                    width: 60,
                    height: 40,
                },
                series: Series::F32(&[20.0, 25.0, 22.5, 30.0]),
                interval: 2,
                color: Color::White,
                axis: true,
                latest_only: false,
            },
        );
        // Five X ticks descend below the axis row.
        for i in 1..=5 {
            let x = 40 + i * 12;
            assert!((45..=48).all(|y| fb.pixel(x, y)), "x tick {i}");
        }
        // Five Y ticks stick out left of the Y axis.
        for i in 1..=5 {
            let y = 45 - i * 8;
            assert!((37..=40).all(|x| fb.pixel(x, y)), "y tick {i}");
        }
        // Mean 24.375 maps to row 28.
        assert!(row_fully_lit(&fb, 28, 40, 100));
    }

    #[test]
    fn test_time_chart_flat_series() {
        let mut fb = FrameBuffer::new();
        let mut glyphs = GlyphIndex::new();
        draw_time_chart(
            &mut fb,
            &mut glyphs,
            &TimeChart {
                area: ChartArea {
                    x: 0,
                    y: 0,
                    width: 60,
                    height: 40,
                },
                series: Series::I16(&[5, 5, 5]),
                interval: 1,
                color: Color::White,
                axis: false,
                latest_only: false,
            },
        );
        // Range degenerates to 1 and the margin centers nothing; the
        // trace sits on one row.
        assert!(row_fully_lit(&fb, 36, 0, 60));
        assert!(!fb.pixel(0, 35));
        assert!(!fb.pixel(0, 37));
    }

    #[test]
    fn test_time_chart_mean_gated_by_axis() {
        let mut glyphs = GlyphIndex::new();
        let samples: [i16; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let chart = |axis| TimeChart {
            area: ChartArea {
                x: 0,
                y: 0,
                width: 60,
                height: 40,
            },
            series: Series::I16(&samples),
            interval: 1,
            color: Color::White,
            axis,
            latest_only: false,
        };
        let mut with_axis = FrameBuffer::new();
        draw_time_chart(&mut with_axis, &mut glyphs, &chart(true));
        let mut without = FrameBuffer::new();
        draw_time_chart(&mut without, &mut glyphs, &chart(false));
        assert!(row_fully_lit(&with_axis, 20, 0, 60));
        assert!(!row_fully_lit(&without, 20, 0, 60));
    }
}
