use crate::rating::{resolve_fill_sequence, FillLevel};
use crate::widget::props::DisplayProps;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::Widget;

/// Read-only row of stars.
#[derive(Debug, Clone)]
pub struct StarRatingDisplay {
    rating: f64,
    props: DisplayProps,
}

impl StarRatingDisplay {
    pub fn new(rating: f64) -> Self {
        Self {
            rating,
            props: DisplayProps::default(),
        }
    }

    pub fn props(mut self, props: DisplayProps) -> Self {
        self.props = props;
        self
    }
}

impl Widget for StarRatingDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_stars(self.rating, &self.props, area, buf, |_| None);
    }
}

/// Draw the star row into `area` and return the track actually used.
///
/// `emphasis` may add a modifier to star `i`.
pub(crate) fn render_stars(
    rating: f64,
    props: &DisplayProps,
    area: Rect,
    buf: &mut Buffer,
    emphasis: impl Fn(usize) -> Option<Modifier>,
) -> Rect {
    let track = Rect {
        width: props.track_width().min(area.width),
        height: area.height.min(1),
        ..area
    };
    if track.is_empty() {
        return track;
    }

    let levels = resolve_fill_sequence(rating, props.max_stars, props.step);
    for (i, level) in levels.into_iter().enumerate() {
        let offset = props.star_offset(i);
        if offset >= track.width {
            continue;
        }
        let color = if level == FillLevel::Empty {
            props.empty_color()
        } else {
            props.color
        };
        let icon = &props.icon.0;
        let mut line = if props.right_to_left {
            icon.render_mirrored(level, color, props.star_size, i)
        } else {
            icon.render(level, color, props.star_size, i)
        };
        if let Some(modifier) = emphasis(i) {
            line = line.patch_style(modifier);
        }
        buf.set_line(track.x + offset, track.y, &line, track.width - offset);
    }
    track
}
