//! Phosphor Demo Firmware
//!
//! Exercises the rendering and transfer engine on a 128x64 SSD1306
//! panel attached to an STM32F103 "blue pill" (I2C1 on PB6/PB7).
//! Cycles through a text screen, a shape gallery and both chart
//! styles, alternating the blocking and asynchronous update paths and
//! logging how long each frame took to reach the glass.

#![no_std]
#![no_main]

mod bus;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::i2c::{self, I2c, Master};
use embassy_stm32::mode::Blocking;
use embassy_time::{Duration, Timer};
use heapless::Vec;
use {defmt_rtt as _, panic_probe as _};

use crate::bus::{OledBus, UptimeClock};
use phosphor_core::chart::{ChartArea, LineChart, Series, TimeChart};
use phosphor_core::framebuffer::Color;
use phosphor_core::raster::Fill;
use phosphor_core::text::Font;
use phosphor_core::transfer::{Config, Oled};

type Display = Oled<OledBus<I2c<'static, Blocking, Master>>, UptimeClock>;

/// Synthetic temperature trace feeding both chart screens
const TEMPERATURE: [i16; 12] = [21, 22, 24, 27, 31, 34, 36, 35, 33, 29, 25, 23];

/// Sample positions for the value-indexed chart
const SAMPLE_X: [i16; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Phosphor demo starting...");

    let p = embassy_stm32::init(Default::default());

    // I2C1 on PB6 (SCL) / PB7 (SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.timeout = Duration::from_millis(100);
    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, i2c_config);

    let mut oled: Display = Oled::new(OledBus::new(i2c), UptimeClock, Config::default());
    if let Err(e) = oled.init() {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
    }
    oled.set_contrast(0xCF).ok();

    let mut history: Vec<f32, 64> = Vec::new();
    let mut cycle: u32 = 0;

    loop {
        draw_text_screen(&mut oled, cycle);
        refresh_async(&mut oled);
        Timer::after(Duration::from_secs(2)).await;

        draw_shape_screen(&mut oled);
        refresh_blocking(&mut oled);
        Timer::after(Duration::from_secs(2)).await;

        draw_value_chart(&mut oled);
        refresh_async(&mut oled);
        // Partial refresh exercise: re-send the title strip from the
        // published frame.
        oled.update_area(0, 0, 127, 15).ok();
        Timer::after(Duration::from_secs(2)).await;

        // Extend the rolling series with the next synthetic reading.
        let reading = TEMPERATURE[(cycle as usize) % TEMPERATURE.len()] as f32 + 0.5;
        if history.is_full() {
            history.remove(0);
        }
        history.push(reading).ok();
        if history.len() >= 2 {
            draw_time_chart_screen(&mut oled, &history);
            refresh_async(&mut oled);
            Timer::after(Duration::from_secs(2)).await;
        }

        // Panel controls exercise: blink the glass between cycles.
        oled.set_display_on(false).ok();
        Timer::after(Duration::from_millis(150)).await;
        oled.set_display_on(true).ok();

        cycle = cycle.wrapping_add(1);
    }
}

fn draw_text_screen(oled: &mut Display, cycle: u32) {
    oled.clear();
    oled.draw_str(24, 0, "Phosphor", Font::F8x16);
    oled.draw_str(4, 20, "SSD1306 engine demo", Font::F6x8);
    oled.draw_str(0, 32, "温度 36 时间 120", Font::F8x16);
    oled.draw_fmt(4, 52, Font::F6x8, format_args!("cycle {}", cycle));
}

fn draw_shape_screen(oled: &mut Display) {
    let frame = oled.frame_mut();
    frame.clear();
    frame.draw_rect(2, 2, 40, 28, Fill::Outline);
    frame.draw_rect(8, 8, 12, 9, Fill::Solid);
    frame.draw_circle(64, 16, 13, Fill::Outline);
    frame.draw_circle(64, 16, 5, Fill::Solid);
    frame.draw_triangle(92, 28, 106, 4, 120, 28, Fill::Outline);
    frame.draw_ellipse(24, 47, 20, 12, Fill::Outline);
    frame.draw_arc(64, 62, 18, -180, 0, Fill::Outline);
    frame.draw_line(90, 36, 126, 60, Color::White);
    frame.draw_line(90, 60, 126, 36, Color::White);
    frame.invert_rect(2, 34, 44, 27, Fill::Outline);
}

fn draw_value_chart(oled: &mut Display) {
    oled.clear();
    oled.draw_str(0, 0, "温度", Font::F8x16);
    oled.draw_line_chart(&LineChart {
        area: ChartArea {
            x: 30,
            y: 12,
            width: 90,
            height: 38,
        },
        x_data: &SAMPLE_X,
        y_data: &TEMPERATURE,
        color: Color::White,
        axis: true,
    });
}

fn draw_time_chart_screen(oled: &mut Display, history: &Vec<f32, 64>) {
    oled.clear();
    oled.draw_str(0, 0, "时间", Font::F8x16);
    oled.draw_time_chart(&TimeChart {
        area: ChartArea {
            x: 30,
            y: 16,
            width: 90,
            height: 34,
        },
        series: Series::F32(history.as_slice()),
        interval: 2,
        color: Color::White,
        axis: true,
        latest_only: true,
    });
}

/// Push the active frame through the asynchronous path. The blocking
/// transport finishes each block inside `start_block_transfer`, so the
/// completion pump drives the whole chain right here.
fn refresh_async(oled: &mut Display) {
    if let Err(e) = oled.update_async() {
        error!("Async update failed: {:?}", e);
        return;
    }
    while oled.is_busy() {
        oled.on_block_complete();
    }
    if let Some(ticks) = oled.last_transfer_ticks() {
        info!("Async frame transfer took {} us", ticks);
    }
}

/// Push the active frame with the blocking path.
fn refresh_blocking(oled: &mut Display) {
    if let Err(e) = oled.update() {
        error!("Blocking update failed: {:?}", e);
        return;
    }
    if let Some(ticks) = oled.last_transfer_ticks() {
        info!("Blocking frame transfer took {} us", ticks);
    }
}
