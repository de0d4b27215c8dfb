//! Rating arithmetic: fill levels per star and pointer-offset mapping.
//!
//! Both functions are pure and total. Callers own clamping of the rating
//! itself; out-of-range values saturate to all-empty or all-full.

pub mod adjust;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Finest fractional step a single star can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Full,
    #[default]
    Half,
    Quarter,
}

impl Granularity {
    /// Number of steps per star: 1, 2 or 4.
    pub fn multiplier(self) -> u32 {
        match self {
            Granularity::Full => 1,
            Granularity::Half => 2,
            Granularity::Quarter => 4,
        }
    }

    /// Size of one accessibility increment.
    pub fn step_size(self) -> f64 {
        1.0 / f64::from(self.multiplier())
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Full => "full",
            Granularity::Half => "half",
            Granularity::Quarter => "quarter",
        };
        f.write_str(name)
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Granularity::Full),
            "half" => Ok(Granularity::Half),
            "quarter" => Ok(Granularity::Quarter),
            other => Err(format!("unknown step '{}'", other)),
        }
    }
}

/// Visual state of one star, ordered from empty to full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FillLevel {
    Empty,
    Quarter,
    Half,
    ThreeQuarter,
    Full,
}

impl FillLevel {
    /// Filled fraction of the star in `[0, 1]`.
    pub fn fraction(self) -> f64 {
        match self {
            FillLevel::Empty => 0.0,
            FillLevel::Quarter => 0.25,
            FillLevel::Half => 0.5,
            FillLevel::ThreeQuarter => 0.75,
            FillLevel::Full => 1.0,
        }
    }
}

/// Fill level of every star for `rating`, index 0 being the first star
/// before any right-to-left mirroring.
pub fn resolve_fill_sequence(
    rating: f64,
    star_count: usize,
    granularity: Granularity,
) -> Vec<FillLevel> {
    (0..star_count)
        .map(|i| fill_level(rating - i as f64, granularity))
        .collect()
}

fn fill_level(remainder: f64, granularity: Granularity) -> FillLevel {
    if remainder >= 1.0 {
        return FillLevel::Full;
    }

    match granularity {
        Granularity::Quarter if remainder >= 0.75 => FillLevel::ThreeQuarter,
        Granularity::Quarter if remainder >= 0.5 => FillLevel::Half,
        Granularity::Quarter if remainder >= 0.25 => FillLevel::Quarter,
        Granularity::Half if remainder >= 0.5 => FillLevel::Half,
        _ => FillLevel::Empty,
    }
}

/// Map a horizontal pointer offset inside the star track to a rating.
///
/// `track_width` is `None` until the track has been laid out. An unknown or
/// zero width returns `previous` untouched. Right-to-left tracks are mirrored
/// first and then go through the same left-to-right arithmetic.
///
/// Half and quarter steps round with a `+0.2` bias so a touch slightly short
/// of a boundary still lands on it, and are clamped to `[0, star_count]`.
/// Full steps use `ceil` with no clamp, so an offset of 0 yields 0.
pub fn compute_rating_from_offset(
    offset_x: f64,
    track_width: Option<f64>,
    star_count: usize,
    granularity: Granularity,
    right_to_left: bool,
    previous: f64,
) -> f64 {
    let width = match track_width {
        Some(w) if w != 0.0 => w,
        _ => return previous,
    };

    let offset_x = if right_to_left {
        width - offset_x
    } else {
        offset_x
    };

    let stars = star_count as f64;
    let rating = match granularity {
        Granularity::Full => (offset_x / width * stars).ceil(),
        _ => {
            let multiplier = f64::from(granularity.multiplier());
            let stepped = (offset_x / width * stars * multiplier + 0.2).round() / multiplier;
            stepped.min(stars).max(0.0)
        }
    };

    tracing::trace!(offset_x, width, %granularity, rating, "mapped pointer offset");
    rating
}

/// Format a rating the way it is read out: `3`, `3.5`, `3.25`.
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 && rating.is_finite() {
        format!("{}", rating as i64)
    } else {
        format!("{}", rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::FillLevel::{Empty, Full, Half, Quarter, ThreeQuarter};

    #[test]
    fn test_sequence_length_matches_star_count() {
        for n in 0..12 {
            for r in [-2.0, 0.0, 0.3, 2.5, 7.75, 40.0] {
                for g in [Granularity::Full, Granularity::Half, Granularity::Quarter] {
                    assert_eq!(resolve_fill_sequence(r, n, g).len(), n);
                }
            }
        }
    }

    #[test]
    fn test_known_sequences() {
        assert_eq!(
            resolve_fill_sequence(3.0, 5, Granularity::Half),
            vec![Full, Full, Full, Empty, Empty]
        );
        assert_eq!(
            resolve_fill_sequence(2.5, 5, Granularity::Half),
            vec![Full, Full, Half, Empty, Empty]
        );
        assert_eq!(
            resolve_fill_sequence(3.75, 5, Granularity::Quarter),
            vec![Full, Full, Full, ThreeQuarter, Empty]
        );
        assert_eq!(
            resolve_fill_sequence(1.3, 3, Granularity::Quarter),
            vec![Full, Quarter, Empty]
        );
    }

    #[test]
    fn test_full_granularity_never_partial() {
        let mut r = -1.0;
        while r <= 6.0 {
            let seq = resolve_fill_sequence(r, 5, Granularity::Full);
            assert!(seq.iter().all(|l| matches!(l, Empty | Full)), "r = {}", r);
            r += 0.05;
        }
        assert_eq!(
            resolve_fill_sequence(2.9, 4, Granularity::Full),
            vec![Full, Full, Empty, Empty]
        );
    }

    #[test]
    fn test_half_granularity_has_no_quarters() {
        let seq = resolve_fill_sequence(1.8, 3, Granularity::Half);
        assert_eq!(seq, vec![Full, Half, Empty]);
        let seq = resolve_fill_sequence(1.3, 3, Granularity::Half);
        assert_eq!(seq, vec![Full, Empty, Empty]);
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(
            resolve_fill_sequence(-3.0, 3, Granularity::Quarter),
            vec![Empty, Empty, Empty]
        );
        assert_eq!(
            resolve_fill_sequence(99.0, 3, Granularity::Quarter),
            vec![Full, Full, Full]
        );
    }

    #[test]
    fn test_fill_is_monotonic_in_rating() {
        for g in [Granularity::Full, Granularity::Half, Granularity::Quarter] {
            let mut prev = resolve_fill_sequence(-1.0, 5, g);
            let mut r = -1.0;
            while r <= 6.0 {
                r += 0.05;
                let next = resolve_fill_sequence(r, 5, g);
                for (a, b) in prev.iter().zip(&next) {
                    assert!(b >= a, "{:?} dropped below {:?} at r = {}", b, a, r);
                }
                prev = next;
            }
        }
    }

    #[test]
    fn test_unknown_width_returns_previous() {
        for g in [Granularity::Full, Granularity::Half, Granularity::Quarter] {
            assert_eq!(compute_rating_from_offset(12.0, None, 5, g, false, 3.5), 3.5);
            assert_eq!(compute_rating_from_offset(12.0, Some(0.0), 5, g, true, 1.25), 1.25);
        }
    }

    #[test]
    fn test_half_step_mapping() {
        let w = Some(100.0);
        assert_eq!(compute_rating_from_offset(0.0, w, 5, Granularity::Half, false, 0.0), 0.0);
        assert_eq!(compute_rating_from_offset(50.0, w, 5, Granularity::Half, false, 0.0), 2.5);
        // just short of the 3-star boundary still resolves to 3 thanks to the bias
        assert_eq!(compute_rating_from_offset(53.5, w, 5, Granularity::Half, false, 0.0), 3.0);
        assert_eq!(compute_rating_from_offset(100.0, w, 5, Granularity::Half, false, 0.0), 5.0);
    }

    #[test]
    fn test_non_full_steps_are_clamped() {
        let w = Some(100.0);
        assert_eq!(compute_rating_from_offset(-40.0, w, 5, Granularity::Quarter, false, 0.0), 0.0);
        assert_eq!(compute_rating_from_offset(180.0, w, 5, Granularity::Half, false, 0.0), 5.0);
    }

    #[test]
    fn test_quarter_step_mapping() {
        let w = Some(100.0);
        assert_eq!(compute_rating_from_offset(15.0, w, 5, Granularity::Quarter, false, 0.0), 0.75);
        assert_eq!(compute_rating_from_offset(70.0, w, 5, Granularity::Quarter, false, 0.0), 3.5);
    }

    #[test]
    fn test_full_step_uses_ceil_without_clamp() {
        let w = Some(100.0);
        assert_eq!(compute_rating_from_offset(0.0, w, 5, Granularity::Full, false, 4.0), 0.0);
        assert_eq!(compute_rating_from_offset(1.0, w, 5, Granularity::Full, false, 0.0), 1.0);
        assert_eq!(compute_rating_from_offset(41.0, w, 5, Granularity::Full, false, 0.0), 3.0);
        assert_eq!(compute_rating_from_offset(130.0, w, 5, Granularity::Full, false, 0.0), 7.0);
    }

    #[test]
    fn test_right_to_left_mirrors_offset() {
        let w = 120.0;
        for g in [Granularity::Full, Granularity::Half, Granularity::Quarter] {
            let mut x = 0.0;
            while x <= w {
                assert_eq!(
                    compute_rating_from_offset(x, Some(w), 4, g, true, 0.0),
                    compute_rating_from_offset(w - x, Some(w), 4, g, false, 0.0),
                );
                x += 7.5;
            }
        }
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(3.0), "3");
        assert_eq!(format_rating(3.5), "3.5");
        assert_eq!(format_rating(0.25), "0.25");
        assert_eq!(format_rating(0.0), "0");
    }

    #[test]
    fn test_granularity_parse_and_display() {
        assert_eq!("Quarter".parse::<Granularity>(), Ok(Granularity::Quarter));
        assert!("tenth".parse::<Granularity>().is_err());
        assert_eq!(Granularity::Half.to_string(), "half");
        assert_eq!(Granularity::Quarter.step_size(), 0.25);
    }
}
