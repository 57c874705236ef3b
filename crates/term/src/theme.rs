//! Fixed palette shared by every screen.

use crate::fb::{CellStyle, Rgb};

pub const BG: Rgb = Rgb::new(0, 0, 0);
pub const CARD_BG: Rgb = Rgb::new(24, 32, 40);
pub const HIGHLIGHT_BG: Rgb = Rgb::new(40, 70, 110);

pub const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
pub const MUTED: CellStyle = CellStyle::fg(Rgb::new(140, 140, 150));
pub const TITLE: CellStyle = CellStyle::fg(Rgb::new(250, 200, 90)).bold();
pub const BORDER: CellStyle = CellStyle::fg(Rgb::new(110, 130, 150));
pub const ACCENT: CellStyle = CellStyle::fg(Rgb::new(90, 200, 220)).bold();
pub const SUCCESS: CellStyle = CellStyle::fg(Rgb::new(100, 220, 120)).bold();
pub const ERROR: CellStyle = CellStyle::fg(Rgb::new(230, 90, 90)).bold();
pub const SOLVED: CellStyle = CellStyle::fg(Rgb::new(80, 140, 90)).dim();
pub const SELECTED: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255))
    .bold()
    .on(HIGHLIGHT_BG);
