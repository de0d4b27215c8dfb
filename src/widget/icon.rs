//! Star icon renderers.
//!
//! Anything implementing [`StarIcon`] can be plugged into the rating widgets.
//! An icon is `size` columns wide and is drawn as a single [`Line`].

use crate::rating::FillLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

pub trait StarIcon {
    /// Draw star `index` at `level`, `size` columns wide.
    fn render(&self, level: FillLevel, color: Color, size: u16, index: usize) -> Line<'static>;

    /// Right-to-left variant. The default reverses the columns of [`render`].
    ///
    /// [`render`]: StarIcon::render
    fn render_mirrored(
        &self,
        level: FillLevel,
        color: Color,
        size: u16,
        index: usize,
    ) -> Line<'static> {
        let line = self.render(level, color, size, index);
        let mut spans = line.spans;
        spans.reverse();
        Line::from(spans)
    }
}

/// Glyph set used by [`CellIcon`] renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub filled: char,
    pub unfilled: char,
    /// Partly filled column, filled on the left.
    pub partial: char,
    /// Partly filled column, filled on the right.
    pub partial_mirrored: char,
}

/// Split an icon `size` columns wide into whole filled columns and one
/// optional partly filled column for `level`.
///
/// At two or three columns per star every fill level looks different; a
/// single column can only tell empty, partial and full apart.
pub fn fill_columns(level: FillLevel, size: u16) -> (u16, bool) {
    let exact = level.fraction() * f64::from(size);
    let whole = (exact.floor() as u16).min(size);
    let partial = whole < size && exact > f64::from(whole);
    (whole, partial)
}

/// Column-filling icon: each column is a whole glyph, filled from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellIcon {
    glyphs: Glyphs,
}

impl CellIcon {
    pub const fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> Glyphs {
        self.glyphs
    }

    fn draw(&self, level: FillLevel, color: Color, size: u16, mirrored: bool) -> Line<'static> {
        let style = Style::default().fg(color);
        if size == 0 {
            return Line::default();
        }

        let (filled, partial) = fill_columns(level, size);
        let unfilled = size - filled - u16::from(partial);
        let partial_glyph = if mirrored {
            self.glyphs.partial_mirrored
        } else {
            self.glyphs.partial
        };

        let filled_span = Span::styled(repeat_glyph(self.glyphs.filled, filled), style);
        let partial_span = Span::styled(repeat_glyph(partial_glyph, u16::from(partial)), style);
        let unfilled_span = Span::styled(
            repeat_glyph(self.glyphs.unfilled, unfilled),
            if level == FillLevel::Empty {
                style
            } else {
                style.add_modifier(Modifier::DIM)
            },
        );

        let mut spans = vec![filled_span, partial_span, unfilled_span];
        if mirrored {
            spans.reverse();
        }
        Line::from(spans.into_iter().filter(|s| !s.content.is_empty()).collect::<Vec<_>>())
    }
}

impl StarIcon for CellIcon {
    fn render(&self, level: FillLevel, color: Color, size: u16, _index: usize) -> Line<'static> {
        self.draw(level, color, size, false)
    }

    fn render_mirrored(
        &self,
        level: FillLevel,
        color: Color,
        size: u16,
        _index: usize,
    ) -> Line<'static> {
        self.draw(level, color, size, true)
    }
}

/// Default star icon: `★` filled, `☆` unfilled, `⯪`/`⯫` for a partly filled column.
pub const GLYPH_STAR: CellIcon = CellIcon::new(Glyphs {
    filled: '★',
    unfilled: '☆',
    partial: '⯪',
    partial_mirrored: '⯫',
});

/// Heart icon for the custom icon example.
pub const HEART: CellIcon = CellIcon::new(Glyphs {
    filled: '♥',
    unfilled: '♡',
    partial: '❥',
    partial_mirrored: '❥',
});

impl Default for CellIcon {
    fn default() -> Self {
        GLYPH_STAR
    }
}

fn repeat_glyph(glyph: char, columns: u16) -> String {
    (0..columns).map(|_| pad_to_width(glyph, 1)).collect()
}

// Wide glyphs would push later stars out of their slot, fall back to '*'.
fn pad_to_width(glyph: char, columns: usize) -> String {
    match glyph.width() {
        Some(w) if w == columns => glyph.to_string(),
        _ => "*".repeat(columns),
    }
}
