use ratatui::style::Color;
use starling::config::AppConfig;
use starling::rating::format_rating;
use starling::widget::{StarRatingProps, StarRatingState, HEART};
use starling::{Granularity, RatingEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// Interactive rating
    Input,
    /// Read-only display driven by the arrow keys
    Display,
}

/// Bookkeeping for clearing the rating when the current value is tapped
/// without dragging.
#[derive(Debug, Clone, Default)]
pub struct ClearOnTap {
    pub before_start: f64,
    pub prevent_clear: bool,
}

#[derive(Debug, Clone)]
pub struct RatingCard {
    pub title: String,
    pub kind: CardKind,
    pub rating: f64,
    pub props: StarRatingProps,
    pub state: StarRatingState,
    pub clear_on_tap: Option<ClearOnTap>,
}

impl RatingCard {
    pub fn new(title: &str, kind: CardKind, rating: f64, props: StarRatingProps) -> Self {
        let state = StarRatingState::new(rating, &props);
        Self {
            title: title.to_string(),
            kind,
            rating,
            props,
            state,
            clear_on_tap: None,
        }
    }

    fn with_clear_on_tap(mut self) -> Self {
        self.clear_on_tap = Some(ClearOnTap::default());
        self
    }

    pub fn set_rating(&mut self, rating: f64) {
        self.rating = rating;
        self.state.set_rating(rating);
    }

    /// Apply events emitted by the widget. Returns the status line to show,
    /// if any.
    pub fn apply(&mut self, events: Vec<RatingEvent>) -> Option<String> {
        let mut status = None;
        for event in events {
            match event {
                RatingEvent::Start(_) => {
                    if let Some(clear) = &mut self.clear_on_tap {
                        clear.before_start = self.rating;
                        clear.prevent_clear = false;
                    }
                }
                RatingEvent::Change(rating) => {
                    self.set_rating(rating);
                    if let Some(clear) = &mut self.clear_on_tap {
                        clear.prevent_clear = true;
                    }
                    status = Some(format!("{}: {}", self.title, format_rating(rating)));
                }
                RatingEvent::End(rating) => {
                    let cleared = match &self.clear_on_tap {
                        Some(clear) => !clear.prevent_clear && rating == clear.before_start,
                        None => false,
                    };
                    if cleared {
                        self.set_rating(0.0);
                        status = Some(format!("{}: cleared", self.title));
                    }
                }
                RatingEvent::Announce(text) => status = Some(text),
            }
        }
        status
    }

    /// Step the read-only display's rating by one granularity step.
    pub fn nudge(&mut self, up: bool) {
        let step = self.props.display.step.step_size();
        let max = self.props.display.max_stars as f64;
        let next = if up {
            (self.rating + step).min(max)
        } else {
            (self.rating - step).max(0.0)
        };
        self.set_rating(next);
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub cards: Vec<RatingCard>,
    pub focus: usize,
    pub status: String,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig, base: StarRatingProps) -> Self {
        let cards = gallery_cards(&base);
        Self {
            config,
            cards,
            focus: 0,
            status: "Tab to move between examples, arrows to adjust, Enter to commit".to_string(),
            dirty: true,
            should_quit: false,
        }
    }

    pub fn focused_card(&mut self) -> Option<&mut RatingCard> {
        self.cards.get_mut(self.focus)
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        if self.cards.is_empty() {
            return;
        }
        let n = self.cards.len();
        self.focus = if forward {
            (self.focus + 1) % n
        } else {
            (self.focus + n - 1) % n
        };
    }

    pub fn status_line(&self) -> String {
        self.status.clone()
    }
}

fn gallery_cards(base: &StarRatingProps) -> Vec<RatingCard> {
    vec![
        RatingCard::new("Basic", CardKind::Input, 2.5, base.clone()),
        RatingCard::new(
            "Step: full",
            CardKind::Input,
            3.0,
            base.clone().step(Granularity::Full),
        ),
        RatingCard::new(
            "Step: quarter",
            CardKind::Input,
            3.75,
            base.clone().step(Granularity::Quarter).star_size(4),
        ),
        RatingCard::new("Display", CardKind::Display, 3.5, base.clone()),
        RatingCard::new(
            "Custom icon",
            CardKind::Input,
            2.5,
            base.clone().icon(HEART).color(Color::Red),
        ),
        RatingCard::new(
            "Clear on current rating tap",
            CardKind::Input,
            3.0,
            base.clone(),
        )
        .with_clear_on_tap(),
        RatingCard::new(
            "Right to left",
            CardKind::Input,
            1.5,
            base.clone().right_to_left(!base.display.right_to_left),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> RatingCard {
        RatingCard::new("t", CardKind::Input, 3.0, StarRatingProps::default()).with_clear_on_tap()
    }

    #[test]
    fn test_tap_on_current_rating_clears() {
        let mut c = card();
        c.apply(vec![RatingEvent::Start(3.0)]);
        let status = c.apply(vec![RatingEvent::End(3.0)]);
        assert_eq!(c.rating, 0.0);
        assert_eq!(status.as_deref(), Some("t: cleared"));
    }

    #[test]
    fn test_drag_back_to_current_rating_keeps_it() {
        let mut c = card();
        c.apply(vec![RatingEvent::Start(3.0)]);
        c.apply(vec![RatingEvent::Change(4.0)]);
        c.apply(vec![RatingEvent::Change(3.0)]);
        c.apply(vec![RatingEvent::End(3.0)]);
        assert_eq!(c.rating, 3.0);
    }

    #[test]
    fn test_change_resyncs_staged_rating() {
        let mut c = card();
        c.apply(vec![RatingEvent::Change(1.5)]);
        assert_eq!(c.state.staged(), 1.5);
    }

    #[test]
    fn test_nudge_stays_in_range() {
        let mut c = RatingCard::new("d", CardKind::Display, 4.5, StarRatingProps::default());
        c.nudge(true);
        c.nudge(true);
        assert_eq!(c.rating, 5.0);
        for _ in 0..20 {
            c.nudge(false);
        }
        assert_eq!(c.rating, 0.0);
    }

    #[test]
    fn test_cycle_focus_wraps() {
        let mut state = AppState::new(AppConfig::default(), StarRatingProps::default());
        let n = state.cards.len();
        state.cycle_focus(false);
        assert_eq!(state.focus, n - 1);
        state.cycle_focus(true);
        assert_eq!(state.focus, 0);
    }
}
