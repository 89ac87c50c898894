//! Fixed real-world pitch dimensions and drawing constants.
//!
//! All lengths are in metres on a standard full-size pitch. The scene is
//! laid out in field coordinates, x in [0, 105] and y in [0, 68], with the
//! origin at the bottom-left corner flag.

/// Full pitch length (goal line to goal line).
pub const PITCH_LENGTH: f64 = 105.0;
/// Full pitch width (touchline to touchline).
pub const PITCH_WIDTH: f64 = 68.0;

/// x coordinate of the halfway line.
pub const HALFWAY_X: f64 = PITCH_LENGTH / 2.0;
/// y coordinate of the pitch centre.
pub const CENTER_Y: f64 = PITCH_WIDTH / 2.0;
/// Centre circle radius.
pub const CENTER_CIRCLE_RADIUS: f64 = 5.0;

/// Penalty area depth, measured from the goal line.
pub const PENALTY_AREA_DEPTH: f64 = 16.5;
/// Penalty area width, centred on the goal.
pub const PENALTY_AREA_WIDTH: f64 = 40.3;
/// Goal area depth, measured from the goal line.
pub const GOAL_AREA_DEPTH: f64 = 5.5;
/// Goal area width, centred on the goal.
pub const GOAL_AREA_WIDTH: f64 = 7.32;

/// Smallest allowed exercise side; shorter inputs are clamped up.
pub const MIN_EXERCISE_SIDE: f64 = 5.0;

/// Exercise dimensions substituted when the user has supplied no geometry
/// at all (both sides absent or both exactly zero).
pub const FALLBACK_LENGTH: f64 = 50.0;
pub const FALLBACK_WIDTH: f64 = 30.0;

/// Conceptual canvas the pitch scene is sized for, in pixels.
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 520.0;
