//! Rating widgets: the interactive [`StarRating`] and the read-only
//! [`StarRatingDisplay`], both drawn through a pluggable [`StarIcon`].

pub mod display;
pub mod icon;
pub mod input;
pub mod props;

pub use display::StarRatingDisplay;
pub use icon::{CellIcon, StarIcon, GLYPH_STAR, HEART};
pub use input::{RatingEvent, StarRating, StarRatingState};
pub use props::{AnimationConfig, DisplayProps, IconHandle, StarRatingProps, DEFAULT_COLOR};
