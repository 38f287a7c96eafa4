// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;
use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::model::entry::display_name;
use crate::model::Viewport;

use super::{human_size, SGR_RESET};

const LUMINANCE_RAMP: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];
const UPPER_HALF_BLOCK: char = '▀';
const MIN_COLUMNS: usize = 16;
const MIN_ROWS: usize = 8;

/// How an image preview is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSupport {
    /// 24-bit color half blocks, two source rows per output row.
    TrueColor,
    /// A 10-step luminance glyph ramp.
    Ramp,
}

impl ColorSupport {
    /// Capability check over the raw environment values.
    ///
    /// `NO_COLOR` being set at all disables full color; otherwise `COLORTERM` mentioning
    /// `truecolor`/`24bit` or `TERM` mentioning `kitty`/`wezterm` enables it.
    pub fn from_env_vars(no_color: bool, colorterm: Option<&str>, term: Option<&str>) -> Self {
        if no_color {
            return Self::Ramp;
        }
        let colorterm = colorterm.unwrap_or_default().to_ascii_lowercase();
        if colorterm.contains("truecolor") || colorterm.contains("24bit") {
            return Self::TrueColor;
        }
        let term = term.unwrap_or_default().to_ascii_lowercase();
        if term.contains("kitty") || term.contains("wezterm") {
            return Self::TrueColor;
        }
        Self::Ramp
    }

    pub fn detect() -> Self {
        let colorterm = std::env::var("COLORTERM").ok();
        let term = std::env::var("TERM").ok();
        Self::from_env_vars(
            std::env::var_os("NO_COLOR").is_some(),
            colorterm.as_deref(),
            term.as_deref(),
        )
    }
}

/// Nearest-pixel source index for output cell `idx` of `outputs` along an axis of `len` pixels.
fn sample_index(idx: usize, outputs: usize, len: u32) -> u32 {
    let len = len as usize;
    let scaled = idx * (len.saturating_sub(1)) / outputs.saturating_sub(1).max(1);
    scaled.min(len.saturating_sub(1)) as u32
}

/// RGB with alpha composited over black.
fn rgb_at(img: &RgbaImage, x: u32, y: u32) -> [u8; 3] {
    let [r, g, b, a] = img.get_pixel(x, y).0;
    let over_black = |channel: u8| ((channel as u16 * a as u16) / 255) as u8;
    [over_black(r), over_black(g), over_black(b)]
}

/// `0.299R + 0.587G + 0.114B` in integer thousandths.
fn luminance([r, g, b]: [u8; 3]) -> u32 {
    (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000
}

fn output_grid(viewport: Viewport) -> (usize, usize) {
    let columns = (viewport.width() as usize).saturating_sub(2).max(MIN_COLUMNS);
    let rows = (viewport.height() as usize).saturating_sub(3).max(MIN_ROWS);
    (columns, rows)
}

fn render_true_color(img: &RgbaImage, columns: usize, rows: usize) -> String {
    let samples = rows * 2;
    let mut out = String::with_capacity(rows * (columns * 4 + 8));

    for row in 0..rows {
        let upper_y = sample_index(row * 2, samples, img.height());
        let lower_y = sample_index(row * 2 + 1, samples, img.height());
        let mut last: Option<([u8; 3], [u8; 3])> = None;

        for col in 0..columns {
            let x = sample_index(col, columns, img.width());
            let colors = (rgb_at(img, x, upper_y), rgb_at(img, x, lower_y));
            if last != Some(colors) {
                let ([fr, fg, fb], [br, bg, bb]) = colors;
                let _ = write!(out, "\x1b[38;2;{fr};{fg};{fb}m\x1b[48;2;{br};{bg};{bb}m");
                last = Some(colors);
            }
            out.push(UPPER_HALF_BLOCK);
        }

        out.push_str(SGR_RESET);
        if row + 1 < rows {
            out.push('\n');
        }
    }
    out
}

fn render_ramp(img: &RgbaImage, columns: usize, rows: usize) -> String {
    let top = (LUMINANCE_RAMP.len() - 1) as u32;
    let mut lines = Vec::with_capacity(rows);

    for row in 0..rows {
        let y = sample_index(row, rows, img.height());
        let line: String = (0..columns)
            .map(|col| {
                let x = sample_index(col, columns, img.width());
                let idx = (luminance(rgb_at(img, x, y)) * top / 255) as usize;
                LUMINANCE_RAMP[idx.min(LUMINANCE_RAMP.len() - 1)]
            })
            .collect();
        lines.push(line);
    }
    lines.join("\n")
}

/// Draws decoded pixels for the viewport. `None` for an image without pixels.
pub fn render_pixels(img: &RgbaImage, viewport: Viewport, color: ColorSupport) -> Option<String> {
    if img.width() == 0 || img.height() == 0 {
        return None;
    }
    let (columns, rows) = output_grid(viewport);
    Some(match color {
        ColorSupport::TrueColor => render_true_color(img, columns, rows),
        ColorSupport::Ramp => render_ramp(img, columns, rows),
    })
}

pub fn fallback_text(path: &Path, size: u64) -> String {
    format!(
        "image file: {}\nsize: {}\n\npreview unavailable for this format",
        display_name(path),
        human_size(size)
    )
}

fn decode(path: &Path) -> Result<RgbaImage, image::ImageError> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(img.to_rgba8())
}

/// Decodes and draws the image at `path`; any failure yields [`fallback_text`].
pub fn render_image(path: &Path, size: u64, viewport: Viewport, color: ColorSupport) -> String {
    match decode(path) {
        Ok(img) => match render_pixels(&img, viewport, color) {
            Some(art) => art,
            None => fallback_text(path, size),
        },
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "image decode failed");
            fallback_text(path, size)
        }
    }
}
