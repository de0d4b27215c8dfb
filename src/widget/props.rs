//! Widget configuration with documented defaults.

use crate::rating::adjust::A11yLabels;
use crate::rating::Granularity;
use crate::widget::icon::{CellIcon, StarIcon};
use ratatui::style::{Color, Modifier};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default star colour, `#fdd835`.
pub const DEFAULT_COLOR: Color = Color::Rgb(0xfd, 0xd8, 0x35);

/// Emphasis applied to selected stars while the user is interacting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// How long stars stay emphasised after the interaction ends. Default 300ms.
    pub delay: Duration,
    /// Modifier standing in for the scale-up. Default bold.
    pub emphasis: Modifier,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(300),
            emphasis: Modifier::BOLD,
        }
    }
}

/// Shared handle to an icon renderer.
#[derive(Clone)]
pub struct IconHandle(pub Arc<dyn StarIcon + Send + Sync>);

impl IconHandle {
    pub fn new(icon: impl StarIcon + Send + Sync + 'static) -> Self {
        Self(Arc::new(icon))
    }
}

impl Default for IconHandle {
    fn default() -> Self {
        Self::new(CellIcon::default())
    }
}

impl fmt::Debug for IconHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IconHandle(..)")
    }
}

/// Everything both widgets need to draw a row of stars.
#[derive(Debug, Clone)]
pub struct DisplayProps {
    /// Total stars. Default 5.
    pub max_stars: usize,
    /// Columns per star. Default 2.
    pub star_size: u16,
    /// Blank columns between stars. Default 1.
    pub star_spacing: u16,
    /// Colour of non-empty stars. Default [`DEFAULT_COLOR`].
    pub color: Color,
    /// Colour of empty stars. `None` uses `color`.
    pub empty_color: Option<Color>,
    /// Finest step shown. Default half.
    pub step: Granularity,
    /// Lay stars out right to left and mirror the icons. Default false.
    pub right_to_left: bool,
    /// Icon renderer. Default the glyph star.
    pub icon: IconHandle,
}

impl Default for DisplayProps {
    fn default() -> Self {
        Self {
            max_stars: 5,
            star_size: 2,
            star_spacing: 1,
            color: DEFAULT_COLOR,
            empty_color: None,
            step: Granularity::default(),
            right_to_left: false,
            icon: IconHandle::default(),
        }
    }
}

impl DisplayProps {
    pub fn empty_color(&self) -> Color {
        self.empty_color.unwrap_or(self.color)
    }

    /// Columns taken by the whole row.
    pub fn track_width(&self) -> u16 {
        let stars = self.max_stars as u16;
        stars
            .saturating_mul(self.star_size)
            .saturating_add(stars.saturating_sub(1).saturating_mul(self.star_spacing))
    }

    /// Column offset of star `index` from the left of the track.
    pub fn star_offset(&self, index: usize) -> u16 {
        let slot = if self.right_to_left {
            self.max_stars.saturating_sub(index + 1)
        } else {
            index
        } as u16;
        slot.saturating_mul(self.star_size + self.star_spacing)
    }
}

/// Rating input configuration.
#[derive(Debug, Clone)]
pub struct StarRatingProps {
    pub display: DisplayProps,
    /// Follow the pointer while it is dragged. Default true.
    pub enable_swiping: bool,
    pub animation: AnimationConfig,
    pub labels: A11yLabels,
}

impl Default for StarRatingProps {
    fn default() -> Self {
        Self {
            display: DisplayProps::default(),
            enable_swiping: true,
            animation: AnimationConfig::default(),
            labels: A11yLabels::default(),
        }
    }
}

impl StarRatingProps {
    pub fn max_stars(mut self, max_stars: usize) -> Self {
        self.display.max_stars = max_stars;
        self
    }

    pub fn step(mut self, step: Granularity) -> Self {
        self.display.step = step;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.display.color = color;
        self
    }

    pub fn empty_color(mut self, color: Color) -> Self {
        self.display.empty_color = Some(color);
        self
    }

    pub fn star_size(mut self, size: u16) -> Self {
        self.display.star_size = size;
        self
    }

    pub fn star_spacing(mut self, spacing: u16) -> Self {
        self.display.star_spacing = spacing;
        self
    }

    pub fn right_to_left(mut self, rtl: bool) -> Self {
        self.display.right_to_left = rtl;
        self
    }

    pub fn icon(mut self, icon: impl StarIcon + Send + Sync + 'static) -> Self {
        self.display.icon = IconHandle::new(icon);
        self
    }

    pub fn enable_swiping(mut self, enabled: bool) -> Self {
        self.enable_swiping = enabled;
        self
    }
}
