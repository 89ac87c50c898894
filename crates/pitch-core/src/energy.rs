use serde::Serialize;

use crate::geometry::PitchGeometry;

/// Upper end of the energy-level scale; every bar runs 0..=5.
pub const MAX_LEVEL: u8 = 5;

/// Player density derived from the resolved geometry and team sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityMetrics {
    /// Exercise area in m², full precision.
    pub total_area: f64,
    /// Sum of both team sizes; absent inputs count as 0.
    pub total_players: u32,
    /// m² of space per player, or 0 when nobody is on the pitch.
    pub density_per_player: f64,
}

impl DensityMetrics {
    /// Derive the density for an exercise. Zero players is a valid state,
    /// not a division fault; density is defined as 0 in that case.
    pub fn compute(geometry: &PitchGeometry, team_a: Option<u32>, team_b: Option<u32>) -> Self {
        let total_players = team_a.unwrap_or(0) + team_b.unwrap_or(0);
        let total_area = geometry.area();
        let density_per_player = if total_players > 0 {
            total_area / f64::from(total_players)
        } else {
            0.0
        };
        Self {
            total_area,
            total_players,
            density_per_player,
        }
    }

    /// Sidebar readout. Rounding happens here only; the stored value keeps
    /// full precision.
    pub fn area_text(&self) -> String {
        format!("Area Total: {} m²", self.total_area.round())
    }

    /// Sidebar readout for the density value.
    pub fn density_text(&self) -> String {
        format!("Densidad por jugador: {} m²", self.density_per_player.round())
    }
}

/// Discrete physical-demand indicators for a given density, each on the
/// fixed 0..=5 scale. More space per player means more high-intensity
/// running capacity and fewer fatigue-forced decelerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnergyLevels {
    pub total_distance: u8,
    pub high_speed_running: u8,
    pub sprint_distance: u8,
    pub accel_decel: u8,
}

impl EnergyLevels {
    /// Step function over density (m² per player). Bands are evaluated
    /// top-down with exclusive lower and inclusive upper bounds, so a
    /// density of exactly 300 lands in the (250, 300] band.
    pub fn from_density(density: f64) -> Self {
        let (total_distance, high_speed_running, sprint_distance, accel_decel) =
            if density > 300.0 {
                (5, 5, 5, 2)
            } else if density > 250.0 {
                (5, 4, 4, 3)
            } else if density > 200.0 {
                (4, 4, 3, 3)
            } else if density > 150.0 {
                (4, 3, 2, 4)
            } else if density > 100.0 {
                (3, 2, 1, 5)
            } else if density > 50.0 {
                (2, 1, 0, 5)
            } else {
                (1, 0, 0, 4)
            };
        Self {
            total_distance,
            high_speed_running,
            sprint_distance,
            accel_decel,
        }
    }

    /// Levels in presentation order: total distance, high-speed running,
    /// sprint distance, accelerations/decelerations.
    pub fn as_array(&self) -> [u8; 4] {
        [
            self.total_distance,
            self.high_speed_running,
            self.sprint_distance,
            self.accel_decel,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry;

    fn levels(density: f64) -> [u8; 4] {
        EnergyLevels::from_density(density).as_array()
    }

    #[test]
    fn test_band_boundaries_are_inclusive_above() {
        assert_eq!(levels(300.0), [5, 4, 4, 3], "300 belongs to (250, 300]");
        assert_eq!(levels(300.0001), [5, 5, 5, 2], "just over 300 is the top band");
        assert_eq!(levels(50.0), [1, 0, 0, 4], "50 belongs to the bottom band");
        assert_eq!(levels(50.0001), [2, 1, 0, 5], "just over 50 is (50, 100]");
    }

    #[test]
    fn test_every_band() {
        assert_eq!(levels(400.0), [5, 5, 5, 2]);
        assert_eq!(levels(275.0), [5, 4, 4, 3]);
        assert_eq!(levels(225.0), [4, 4, 3, 3]);
        assert_eq!(levels(175.0), [4, 3, 2, 4]);
        assert_eq!(levels(120.0), [3, 2, 1, 5]);
        assert_eq!(levels(75.0), [2, 1, 0, 5]);
        assert_eq!(levels(25.0), [1, 0, 0, 4]);
        assert_eq!(levels(0.0), [1, 0, 0, 4]);
    }

    #[test]
    fn test_levels_stay_on_scale() {
        for density in [0.0, 49.9, 50.0, 101.0, 250.5, 299.999, 300.0, 7140.0] {
            for level in levels(density) {
                assert!(level <= MAX_LEVEL, "level {level} at density {density}");
            }
        }
    }

    #[test]
    fn test_levels_depend_on_density_alone() {
        // 40×30 with 10 players and 60×20 with 10 players both give 120 m².
        let a = DensityMetrics::compute(&geometry::resolve(Some(40.0), Some(30.0)), Some(5), Some(5));
        let b = DensityMetrics::compute(&geometry::resolve(Some(60.0), Some(20.0)), Some(4), Some(6));
        assert_eq!(a.density_per_player, b.density_per_player);
        assert_eq!(
            EnergyLevels::from_density(a.density_per_player),
            EnergyLevels::from_density(b.density_per_player),
        );
    }

    #[test]
    fn test_density_monotone_in_area() {
        let players = (Some(5), Some(5));
        let mut previous = f64::NEG_INFINITY;
        for length in [10.0, 20.0, 40.0, 80.0, 105.0] {
            let g = geometry::resolve(Some(length), Some(30.0));
            let m = DensityMetrics::compute(&g, players.0, players.1);
            assert!(
                m.density_per_player >= previous,
                "density dropped at length {length}"
            );
            previous = m.density_per_player;
        }
    }

    #[test]
    fn test_five_a_side_scenario() {
        let g = geometry::resolve(Some(40.0), Some(30.0));
        let m = DensityMetrics::compute(&g, Some(5), Some(5));
        assert_eq!(m.total_area, 1200.0);
        assert_eq!(m.total_players, 10);
        assert_eq!(m.density_per_player, 120.0);
        assert_eq!(EnergyLevels::from_density(m.density_per_player).as_array(), [3, 2, 1, 5]);
        assert_eq!(m.area_text(), "Area Total: 1200 m²");
        assert_eq!(m.density_text(), "Densidad por jugador: 120 m²");
    }

    #[test]
    fn test_zero_players_is_not_a_fault() {
        let g = geometry::resolve(Some(40.0), Some(30.0));
        for (a, b) in [(Some(0), Some(0)), (None, None), (Some(0), None)] {
            let m = DensityMetrics::compute(&g, a, b);
            assert_eq!(m.total_players, 0);
            assert_eq!(m.density_per_player, 0.0);
            assert_eq!(EnergyLevels::from_density(m.density_per_player).as_array(), [1, 0, 0, 4]);
        }
    }

    #[test]
    fn test_display_rounding_keeps_internal_precision() {
        let g = geometry::resolve(Some(40.0), Some(30.0));
        let m = DensityMetrics::compute(&g, Some(4), Some(3));
        assert_eq!(m.total_area, 1200.0);
        assert!((m.density_per_player - 1200.0 / 7.0).abs() < 1e-12);
        assert_eq!(m.density_text(), "Densidad por jugador: 171 m²");
    }
}
