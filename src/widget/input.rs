//! Interactive rating input.
//!
//! [`StarRating`] is a stateful widget: rendering records where the star
//! track landed, and [`StarRatingState`] turns mouse and key events on that
//! track into [`RatingEvent`]s for the caller to apply.

use crate::rating::adjust::{A11yAction, A11yOutcome, A11yValue, AdjustableRating};
use crate::rating::compute_rating_from_offset;
use crate::widget::display::render_stars;
use crate::widget::props::StarRatingProps;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::StatefulWidget;
use std::time::Instant;

/// Notifications produced while the user interacts with the rating.
#[derive(Debug, Clone, PartialEq)]
pub enum RatingEvent {
    /// Interaction started; carries the rating under the pointer.
    Start(f64),
    /// New rating to store. Only emitted when it differs from the current one,
    /// except on accessibility activation.
    Change(f64),
    /// Interaction ended; carries the rating under the pointer.
    End(f64),
    /// Text for assistive technology.
    Announce(String),
}

#[derive(Debug, Clone)]
pub struct StarRating {
    rating: f64,
    props: StarRatingProps,
    focused: bool,
}

impl StarRating {
    pub fn new(rating: f64, props: StarRatingProps) -> Self {
        Self {
            rating,
            props,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Per-instance interaction state.
#[derive(Debug, Clone)]
pub struct StarRatingState {
    /// Track laid out by the last render, `None` before the first one.
    track: Option<Rect>,
    interacting: bool,
    pressed: bool,
    settle_at: Option<Instant>,
    adjust: AdjustableRating,
}

impl StarRatingState {
    pub fn new(rating: f64, props: &StarRatingProps) -> Self {
        Self {
            track: None,
            interacting: false,
            pressed: false,
            settle_at: None,
            adjust: AdjustableRating::new(rating, props.display.max_stars, props.display.step),
        }
    }

    pub fn track(&self) -> Option<Rect> {
        self.track
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    pub fn staged(&self) -> f64 {
        self.adjust.staged()
    }

    /// Resynchronise after the owner changed the rating.
    pub fn set_rating(&mut self, rating: f64) {
        self.adjust.sync(rating);
    }

    /// Accessibility label with the staged value filled in.
    pub fn label(&self, props: &StarRatingProps) -> String {
        self.adjust.label(&props.labels)
    }

    pub fn value(&self, rating: f64, props: &StarRatingProps) -> A11yValue {
        A11yValue::new(rating, props.display.max_stars, props.display.step)
    }

    /// Rating under `column`. The cell under the pointer counts up to its
    /// far edge in reading direction, so the last cell reaches `max_stars`.
    /// Scaling uses the full track width even when the render was clipped.
    fn rating_at(&self, column: u16, rating: f64, props: &StarRatingProps) -> f64 {
        let display = &props.display;
        let (width, offset) = match self.track {
            Some(track) => {
                let local = column
                    .saturating_sub(track.x)
                    .min(track.width.saturating_sub(1));
                let edge = if display.right_to_left {
                    local
                } else {
                    local + 1
                };
                (Some(f64::from(display.track_width())), f64::from(edge))
            }
            None => (None, 0.0),
        };
        compute_rating_from_offset(
            offset,
            width,
            display.max_stars,
            display.step,
            display.right_to_left,
            rating,
        )
    }

    fn change(&self, new_rating: f64, rating: f64, events: &mut Vec<RatingEvent>) {
        if new_rating != rating {
            tracing::debug!(from = rating, to = new_rating, "rating changed");
            events.push(RatingEvent::Change(new_rating));
        }
    }

    /// Feed a mouse event. `rating` is the owner's current value.
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        rating: f64,
        props: &StarRatingProps,
    ) -> Vec<RatingEvent> {
        let mut events = Vec::new();
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let inside = self
                    .track
                    .is_some_and(|t| t.contains(Position::new(event.column, event.row)));
                if !inside {
                    return events;
                }
                let new_rating = self.rating_at(event.column, rating, props);
                events.push(RatingEvent::Start(new_rating));
                self.change(new_rating, rating, &mut events);
                self.pressed = true;
                self.interacting = true;
                self.settle_at = None;
            }
            MouseEventKind::Drag(MouseButton::Left) if self.pressed => {
                if props.enable_swiping {
                    let new_rating = self.rating_at(event.column, rating, props);
                    self.change(new_rating, rating, &mut events);
                }
            }
            MouseEventKind::Up(MouseButton::Left) if self.pressed => {
                let new_rating = self.rating_at(event.column, rating, props);
                self.change(new_rating, rating, &mut events);
                events.push(RatingEvent::End(new_rating));
                self.release(props);
            }
            _ => {}
        }
        events
    }

    /// The pointer was taken away mid-interaction (focus lost, resize).
    pub fn terminate(&mut self, props: &StarRatingProps) {
        if self.pressed {
            self.release(props);
        }
    }

    fn release(&mut self, props: &StarRatingProps) {
        self.pressed = false;
        self.settle_at = Some(Instant::now() + props.animation.delay);
    }

    /// Drop the interaction emphasis once the settle delay has passed.
    /// Returns true when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.settle_at {
            Some(at) if now >= at => {
                self.settle_at = None;
                self.interacting = false;
                true
            }
            _ => false,
        }
    }

    /// Run an accessibility action against the staged rating.
    pub fn accessibility_action(
        &mut self,
        action: A11yAction,
        props: &StarRatingProps,
    ) -> Vec<RatingEvent> {
        self.adjust.reconfigure(props.display.max_stars, props.display.step);
        match self.adjust.apply(action, &props.labels) {
            A11yOutcome::Announce(text) => vec![RatingEvent::Announce(text)],
            A11yOutcome::Commit(value) => vec![RatingEvent::Change(value)],
        }
    }

    /// Keyboard bindings for the accessibility actions. Left and right follow
    /// the visual direction of the track.
    pub fn handle_key(&mut self, key: KeyEvent, props: &StarRatingProps) -> Vec<RatingEvent> {
        let rtl = props.display.right_to_left;
        let action = match key.code {
            KeyCode::Right if rtl => A11yAction::Decrement,
            KeyCode::Left if rtl => A11yAction::Increment,
            KeyCode::Right | KeyCode::Up | KeyCode::Char('+') => A11yAction::Increment,
            KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => A11yAction::Decrement,
            KeyCode::Enter | KeyCode::Char(' ') => A11yAction::Activate,
            _ => return Vec::new(),
        };
        self.accessibility_action(action, props)
    }
}

impl StatefulWidget for StarRating {
    type State = StarRatingState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let rating = self.rating;
        let emphasis = self.props.animation.emphasis;
        let interacting = state.interacting;
        let track = render_stars(rating, &self.props.display, area, buf, |i| {
            (interacting && rating - i as f64 >= 0.5).then_some(emphasis)
        });
        if self.focused && !track.is_empty() {
            let cursor = Rect {
                y: track.y,
                height: 1,
                ..track
            };
            buf.set_style(cursor, ratatui::style::Modifier::UNDERLINED);
        }
        state.track = (!track.is_empty()).then_some(track);
    }
}
