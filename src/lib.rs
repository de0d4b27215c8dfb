//! Star-rating widgets for ratatui.
//!
//! [`rating`] holds the pure arithmetic (fill levels, pointer mapping and
//! the accessibility staged value); [`widget`] draws it and turns terminal
//! mouse and key events into [`widget::RatingEvent`]s.

pub mod config;
pub mod error;
pub mod logging;
pub mod rating;
pub mod widget;

pub use rating::{compute_rating_from_offset, resolve_fill_sequence, FillLevel, Granularity};
pub use widget::{RatingEvent, StarRating, StarRatingDisplay, StarRatingProps, StarRatingState};
