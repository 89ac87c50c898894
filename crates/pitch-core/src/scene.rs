use serde::Serialize;

use crate::constants::{
    CENTER_CIRCLE_RADIUS, CENTER_Y, GOAL_AREA_DEPTH, GOAL_AREA_WIDTH, HALFWAY_X,
    PENALTY_AREA_DEPTH, PENALTY_AREA_WIDTH, PITCH_LENGTH, PITCH_WIDTH,
};
use crate::energy::{EnergyLevels, MAX_LEVEL};
use crate::geometry::PitchGeometry;

/// 8-bit RGBA color carried by scene primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const DARK_GREEN: Self = Self::opaque(0, 100, 0);
    /// Exercise-area fill, half transparent so the markings show through.
    pub const EXERCISE_BLUE: Self = Self { r: 0, g: 0, b: 255, a: 128 };
}

/// A drawable primitive in field coordinates ([0, 105] × [0, 68] metres,
/// y pointing up). The renderer maps these onto its canvas; nothing here
/// knows about pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    Rect {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stroke: Rgba,
        fill: Option<Rgba>,
    },
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stroke: Rgba,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        stroke: Rgba,
    },
    /// Text annotation centred at (x, y); `rotated` labels are turned 90°
    /// counter-clockwise so they read along the vertical axis.
    Label {
        x: f64,
        y: f64,
        text: String,
        rotated: bool,
    },
}

/// Ordered list of primitives describing one pitch view. Rebuilt from
/// scratch on every evaluation; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub title: String,
    pub shapes: Vec<Shape>,
}

/// One horizontal indicator bar on the fixed 0..=5 scale. The metric name
/// doubles as the in-bar text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyBar {
    pub label: String,
    pub level: u8,
    pub max_level: u8,
}

/// Build the pitch scene: fixed field markings in draw order, then the
/// exercise rectangle centred on the pitch centre, then its two dimension
/// labels. The geometry is trusted to be pre-clamped; the rectangle can
/// at most coincide with the field boundary, never exceed it.
pub fn compose_pitch(geometry: &PitchGeometry) -> Scene {
    let length = geometry.exercise_length;
    let width = geometry.exercise_width;
    let penalty_y0 = (PITCH_WIDTH - PENALTY_AREA_WIDTH) / 2.0;
    let penalty_y1 = (PITCH_WIDTH + PENALTY_AREA_WIDTH) / 2.0;
    let goal_y0 = (PITCH_WIDTH - GOAL_AREA_WIDTH) / 2.0;
    let goal_y1 = (PITCH_WIDTH + GOAL_AREA_WIDTH) / 2.0;

    let shapes = vec![
        // Field background.
        Shape::Rect {
            x0: 0.0,
            y0: 0.0,
            x1: PITCH_LENGTH,
            y1: PITCH_WIDTH,
            stroke: Rgba::BLACK,
            fill: Some(Rgba::DARK_GREEN),
        },
        // Halfway line and centre circle.
        Shape::Line {
            x0: HALFWAY_X,
            y0: 0.0,
            x1: HALFWAY_X,
            y1: PITCH_WIDTH,
            stroke: Rgba::WHITE,
        },
        Shape::Circle {
            cx: HALFWAY_X,
            cy: CENTER_Y,
            radius: CENTER_CIRCLE_RADIUS,
            stroke: Rgba::WHITE,
        },
        // Penalty areas.
        Shape::Rect {
            x0: 0.0,
            y0: penalty_y0,
            x1: PENALTY_AREA_DEPTH,
            y1: penalty_y1,
            stroke: Rgba::WHITE,
            fill: None,
        },
        Shape::Rect {
            x0: PITCH_LENGTH - PENALTY_AREA_DEPTH,
            y0: penalty_y0,
            x1: PITCH_LENGTH,
            y1: penalty_y1,
            stroke: Rgba::WHITE,
            fill: None,
        },
        // Goal areas.
        Shape::Rect {
            x0: 0.0,
            y0: goal_y0,
            x1: GOAL_AREA_DEPTH,
            y1: goal_y1,
            stroke: Rgba::WHITE,
            fill: None,
        },
        Shape::Rect {
            x0: PITCH_LENGTH - GOAL_AREA_DEPTH,
            y0: goal_y0,
            x1: PITCH_LENGTH,
            y1: goal_y1,
            stroke: Rgba::WHITE,
            fill: None,
        },
        // Exercise area, centred on the pitch centre.
        Shape::Rect {
            x0: HALFWAY_X - length / 2.0,
            y0: CENTER_Y - width / 2.0,
            x1: HALFWAY_X + length / 2.0,
            y1: CENTER_Y + width / 2.0,
            stroke: Rgba::BLACK,
            fill: Some(Rgba::EXERCISE_BLUE),
        },
        // Dimension labels: length above the top edge, width left of the
        // left edge (rotated).
        Shape::Label {
            x: HALFWAY_X,
            y: CENTER_Y + width / 2.0 + 1.0,
            text: format!("Length: {length}m"),
            rotated: false,
        },
        Shape::Label {
            x: HALFWAY_X - length / 2.0 - 1.0,
            y: CENTER_Y,
            text: format!("Width: {width}m"),
            rotated: true,
        },
    ];

    Scene {
        title: "Dimensiones y Densidad".to_string(),
        shapes,
    }
}

/// Build one bar descriptor. Levels outside the scale would be a bug in
/// the caller, not a runtime condition.
pub fn energy_bar(level: u8, label: &str) -> EnergyBar {
    debug_assert!(level <= MAX_LEVEL, "level {level} off the 0..={MAX_LEVEL} scale");
    EnergyBar {
        label: label.to_string(),
        level,
        max_level: MAX_LEVEL,
    }
}

/// The four sidebar bars in presentation order.
pub fn energy_bars(levels: &EnergyLevels) -> [EnergyBar; 4] {
    [
        energy_bar(levels.total_distance, "Distancia total"),
        energy_bar(levels.high_speed_running, "Alta velocidad"),
        energy_bar(levels.sprint_distance, "Sprints"),
        energy_bar(levels.accel_decel, "Acc y Dec"),
    ]
}
