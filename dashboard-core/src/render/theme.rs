//! Fixed palette and text-style helpers shared by the panels.

use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, RGBColor, TextStyle};

pub(super) const TITLE: RGBColor = RGBColor(0x2c, 0x3e, 0x50);
pub(super) const DESCRIPTION: RGBColor = RGBColor(0x29, 0x80, 0xb9);
pub(super) const ACCENT: RGBColor = RGBColor(0xe7, 0x4c, 0x3c);
pub(super) const MUTED: RGBColor = RGBColor(0x7f, 0x8c, 0x8d);
pub(super) const TRACK: RGBColor = RGBColor(0xe0, 0xe0, 0xe0);
pub(super) const HUMIDITY_FILL: RGBColor = RGBColor(0x34, 0x98, 0xdb);
pub(super) const HUMIDITY_EMPTY: RGBColor = RGBColor(0xec, 0xf0, 0xf1);
pub(super) const CARD_BORDER: RGBColor = RGBColor(0x34, 0x49, 0x5e);

/// One color per metric card, cycled by position.
pub(super) const CARD_PALETTE: [RGBColor; 5] = [
    RGBColor(0x34, 0x98, 0xdb),
    RGBColor(0x2e, 0xcc, 0x71),
    RGBColor(0x9b, 0x59, 0xb6),
    RGBColor(0xe6, 0x7e, 0x22),
    RGBColor(0x1a, 0xbc, 0x9c),
];

pub(super) fn panel_title() -> TextStyle<'static> {
    TextStyle::from(FontDesc::new(FontFamily::SansSerif, 28.0, FontStyle::Normal)).color(&TITLE)
}

pub(super) fn label(size: f64, color: &'static RGBColor) -> TextStyle<'static> {
    TextStyle::from(FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)).color(color)
}

pub(super) fn centered(size: f64, color: &'static RGBColor) -> TextStyle<'static> {
    label(size, color).pos(Pos::new(HPos::Center, VPos::Center))
}

pub(super) fn centered_bold(size: f64, color: &'static RGBColor) -> TextStyle<'static> {
    TextStyle::from(FontDesc::new(FontFamily::SansSerif, size, FontStyle::Bold))
        .color(color)
        .pos(Pos::new(HPos::Center, VPos::Center))
}
