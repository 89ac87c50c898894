use serde::Serialize;

use crate::constants::{
    FALLBACK_LENGTH, FALLBACK_WIDTH, MIN_EXERCISE_SIDE, PITCH_LENGTH, PITCH_WIDTH,
};

/// Resolved exercise-area dimensions, guaranteed to fit on the pitch.
///
/// Invariant: `5 ≤ exercise_length ≤ 105` and `5 ≤ exercise_width ≤ 68`.
/// These are the authoritative values after clamping; the UI feeds them
/// back into the input widgets so a typed 500 redisplays as 105.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PitchGeometry {
    /// Exercise area length in metres, along the pitch's long axis.
    pub exercise_length: f64,
    /// Exercise area width in metres, along the pitch's short axis.
    pub exercise_width: f64,
}

impl PitchGeometry {
    /// Exercise area in m².
    pub fn area(&self) -> f64 {
        self.exercise_length * self.exercise_width
    }
}

/// Resolve raw length/width inputs into a valid [`PitchGeometry`].
///
/// A missing value is treated as 0. When both values end up at exactly 0
/// (both absent, or the user typed zeros) the fallback 50×30 area is
/// substituted instead. Everything else is silently clamped into
/// [5, 105] × [5, 68] — out-of-range geometry is capped, never rejected,
/// so this is total over all finite inputs, negatives included.
pub fn resolve(length: Option<f64>, width: Option<f64>) -> PitchGeometry {
    let mut length = length.unwrap_or(0.0);
    let mut width = width.unwrap_or(0.0);
    if length == 0.0 && width == 0.0 {
        length = FALLBACK_LENGTH;
        width = FALLBACK_WIDTH;
    }
    PitchGeometry {
        exercise_length: length.clamp(MIN_EXERCISE_SIDE, PITCH_LENGTH),
        exercise_width: width.clamp(MIN_EXERCISE_SIDE, PITCH_WIDTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_values_pass_through() {
        let g = resolve(Some(40.0), Some(30.0));
        assert_eq!(g.exercise_length, 40.0);
        assert_eq!(g.exercise_width, 30.0);
        assert_eq!(g.area(), 1200.0);
    }

    #[test]
    fn test_oversize_clamps_to_full_pitch() {
        let g = resolve(Some(500.0), Some(200.0));
        assert_eq!(g.exercise_length, 105.0);
        assert_eq!(g.exercise_width, 68.0);
    }

    #[test]
    fn test_negative_clamps_up_to_minimum() {
        let g = resolve(Some(-10.0), Some(-3.0));
        assert_eq!(g.exercise_length, 5.0);
        assert_eq!(g.exercise_width, 5.0);
    }

    #[test]
    fn test_output_always_within_bounds() {
        for length in [-1e9, -5.0, 0.0, 4.9, 5.0, 52.5, 105.0, 105.1, 1e9] {
            for width in [-1e9, -5.0, 0.0, 4.9, 5.0, 34.0, 68.0, 68.1, 1e9] {
                let g = resolve(Some(length), Some(width));
                assert!(
                    (5.0..=105.0).contains(&g.exercise_length),
                    "length {length} resolved to {}",
                    g.exercise_length
                );
                assert!(
                    (5.0..=68.0).contains(&g.exercise_width),
                    "width {width} resolved to {}",
                    g.exercise_width
                );
            }
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let first = resolve(Some(500.0), Some(-4.0));
        let second = resolve(Some(first.exercise_length), Some(first.exercise_width));
        assert_eq!(first, second);
    }

    #[test]
    fn test_both_absent_uses_fallback() {
        let g = resolve(None, None);
        assert_eq!(g.exercise_length, 50.0);
        assert_eq!(g.exercise_width, 30.0);
    }

    #[test]
    fn test_both_zero_uses_fallback() {
        let g = resolve(Some(0.0), Some(0.0));
        assert_eq!(g.exercise_length, 50.0);
        assert_eq!(g.exercise_width, 30.0);
    }

    #[test]
    fn test_single_zero_clamps_instead_of_fallback() {
        let g = resolve(Some(0.0), Some(30.0));
        assert_eq!(g.exercise_length, 5.0);
        assert_eq!(g.exercise_width, 30.0);
    }

    #[test]
    fn test_single_absent_treated_as_zero() {
        let g = resolve(None, Some(30.0));
        assert_eq!(g.exercise_length, 5.0);
        assert_eq!(g.exercise_width, 30.0);
    }
}
