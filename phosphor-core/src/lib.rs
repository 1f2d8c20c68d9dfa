//! Rendering and transfer engine for 128x64 monochrome OLED panels
//!
//! This crate contains everything between application drawing calls and
//! the byte transport to an SSD1306-class controller:
//!
//! - Page-organized frame buffer with pixel, area and inversion ops
//! - Rasterizer (lines, rectangles, triangles, circles, ellipses, arcs,
//!   polygon tests, 1-bpp image blits)
//! - Text rendering for 6x8 / 8x16 ASCII and 16x16 CJK glyphs
//! - Value- and time-indexed line charts with axes and tick labels
//! - Double-buffered transfer engine with blocking, asynchronous
//!   (completion-driven) and partial-area update paths
//!
//! Hardware stays behind the [`traits::DisplayBus`] and
//! [`traits::Clock`] traits; the crate itself is board-agnostic.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod chart;
mod cmd;
pub mod fixed;
pub mod framebuffer;
pub mod pair;
pub mod raster;
pub mod text;
pub mod traits;
pub mod transfer;

// Re-export key types
pub use chart::{ChartArea, LineChart, Series, TimeChart};
pub use fixed::Fixed32;
pub use framebuffer::{Color, FrameBuffer, HEIGHT, PAGE_COUNT, WIDTH};
pub use pair::{BufferId, BufferMode, FramePair};
pub use raster::{Fill, Image};
pub use text::{Font, GlyphIndex};
pub use traits::{Clock, DisplayBus};
pub use transfer::{Config, Error, Oled};
