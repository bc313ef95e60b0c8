// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for lithos CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `LITHOS_THEME` first
//! (for explicit control), then `COLORFGBG` (set by some terminals), then
//! defaults to dark.
//!
//! The pressure series keep the colors engineers expect from the hand-drawn
//! charts: lithostatic blue, pore cyan, effective green, horizontal red. Layer
//! names are tinted with the terrain palette (tan, gray, brown, cycling).
//! Respects `NO_COLOR` and non-TTY detection for pipelines.
//!
//! # Theme detection order
//!
//! 1. `LITHOS_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use lithos::{
    locate, ExportError, LayerIndex, Location, PressureSample, ProfileSink, Stratigraphy,
    WaterTable,
};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("LITHOS_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; bg 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

/// Soil colors for layer names, cycled shallowest first.
const TERRAIN: [(u8, u8, u8); 3] = [
    (210, 180, 140), // #D2B48C tan
    (169, 169, 169), // #A9A9A9 gray
    (139, 69, 19),   // #8B4513 brown
];

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off
fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

/// Reset code, or nothing when colors are off
fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Truncate plain text to `max_len` characters, ending with … if cut
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border(),
        reset(),
        content,
        " ".repeat(pad),
        border(),
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Width of a pressure cell in the profile table
const CELL: usize = 11;

/// A pressure value, or a dash when not applicable
pub fn pressure_cell(value: Option<f64>, color_fn: fn() -> String, neutral_zero: bool) -> String {
    let text = match (value, neutral_zero) {
        (Some(v), _) => format!("{:.2}", v),
        (None, true) => format!("{:.2}", 0.0),
        (None, false) => "—".to_string(),
    };
    let styled = if value.is_some() {
        themed(color_fn, &[], &text)
    } else {
        themed(GRAY, &[DIM], &text)
    };
    pad_left(&styled, CELL)
}

/// Layer name tinted with its terrain color
pub fn layer_badge(index: LayerIndex, label: &str) -> String {
    let text = truncate(label, 14);
    if !use_colors() {
        return text;
    }
    format!("{}{}{}", rgb(TERRAIN[index.get() % TERRAIN.len()]), text, RESET)
}

/// Elevation with a marker for contacts and the water table
pub fn elevation_label(elevation: f64, location: Location, water_table: WaterTable) -> String {
    let marker = if elevation == water_table.elevation() {
        themed(BRIGHT_CYAN, &[BOLD], "▽")
    } else if matches!(location, Location::Contact { .. }) {
        themed(YELLOW, &[], "─")
    } else {
        " ".to_string()
    };
    format!("{} {}", marker, pad_left(&format!("{:.2}", elevation), 8))
}

// ═══════════════════════════════════════════════════════════════════════════
// PROFILE TABLE
// ═══════════════════════════════════════════════════════════════════════════

/// Renders a profile as a boxed terminal table.
pub struct TableSink {
    neutral_zero: bool,
    column: Option<Stratigraphy>,
    water_table: Option<WaterTable>,
    rows: usize,
}

impl TableSink {
    pub fn new(neutral_zero: bool) -> Self {
        Self {
            neutral_zero,
            column: None,
            water_table: None,
            rows: 0,
        }
    }

    fn header_row() -> String {
        format!(
            " {} {} {}{}{}{}",
            pad_right("  Elev (m)", 10),
            pad_right("Layer", 14),
            pad_left(&themed(BLUE, &[BOLD], "σv"), CELL),
            pad_left(&themed(CYAN, &[BOLD], "u"), CELL),
            pad_left(&themed(GREEN, &[BOLD], "σ'v"), CELL),
            pad_left(&themed(RED, &[BOLD], "σh"), CELL),
        )
    }
}

impl ProfileSink for TableSink {
    fn begin(&mut self, column: &Stratigraphy, water_table: WaterTable) -> Result<(), ExportError> {
        section_top("PRESSURE PROFILE (kPa)");
        row(&format!(
            " Column {:.2} → {:.2} m NGF, {} layers, water table {:.2} m NGF",
            column.top(),
            column.bottom(),
            column.layer_count(),
            water_table.elevation()
        ));
        section_mid("SAMPLES");
        row(&Self::header_row());
        self.column = Some(column.clone());
        self.water_table = Some(water_table);
        self.rows = 0;
        Ok(())
    }

    fn sample(&mut self, sample: &PressureSample) -> Result<(), ExportError> {
        let (Some(column), Some(water_table)) = (&self.column, self.water_table) else {
            return Err(ExportError::NotStarted);
        };
        let location = locate(sample.elevation, column);
        let layer = match location {
            Location::Within(index) | Location::Contact { upper: index, .. } => {
                layer_badge(index, &column.layer(index).label)
            }
            Location::AboveColumn => themed(GRAY, &[DIM], "(above)"),
            Location::BelowColumn => themed(GRAY, &[DIM], "(below)"),
        };
        row(&format!(
            " {} {} {}{}{}{}",
            pad_right(&elevation_label(sample.elevation, location, water_table), 10),
            pad_right(&layer, 14),
            pressure_cell(sample.lithostatic, BLUE, self.neutral_zero),
            pressure_cell(Some(sample.pore), CYAN, self.neutral_zero),
            pressure_cell(sample.effective, GREEN, self.neutral_zero),
            pressure_cell(sample.horizontal, RED, self.neutral_zero),
        ));
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        section_mid("LEGEND");
        row(&format!(
            " {} water table   {} layer contact (σh uses the upper layer's k)",
            themed(BRIGHT_CYAN, &[BOLD], "▽"),
            themed(YELLOW, &[], "─")
        ));
        row(&format!(" {} samples", self.rows));
        section_bot();
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
