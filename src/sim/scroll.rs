//! Cosmetic scenery: two ground lane markers and a background cloud
//!
//! Shares the obstacle's wrap-around pattern but never touches gameplay.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Scenery positions (horizontal offsets from field center)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub marker_a: f32,
    pub marker_b: f32,
    pub cloud: f32,
}

impl ScrollState {
    pub fn new(tuning: &Tuning) -> Self {
        let width = tuning.field_width;
        Self {
            marker_a: width * 3.0 / 4.0,
            marker_b: width / 4.0 - 50.0,
            cloud: width,
        }
    }

    /// Scroll one physics tick at the current obstacle speed
    ///
    /// Markers move with the ground, the cloud at half speed.
    pub fn advance(&mut self, speed: f32, tuning: &Tuning) {
        self.marker_a = scroll(self.marker_a, speed, tuning);
        self.marker_b = scroll(self.marker_b, speed, tuning);
        self.cloud = scroll(self.cloud, speed / 2.0, tuning);
    }
}

#[inline]
fn scroll(x: f32, delta: f32, tuning: &Tuning) -> f32 {
    let x = x - delta;
    if x < tuning.wrap_x() { tuning.spawn_x() } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let tuning = Tuning::default();
        let scroll = ScrollState::new(&tuning);
        assert_eq!(scroll.marker_a, 138.0);
        assert_eq!(scroll.marker_b, -4.0);
        assert_eq!(scroll.cloud, 184.0);
    }

    #[test]
    fn test_cloud_moves_at_half_speed() {
        let tuning = Tuning::default();
        let mut scroll = ScrollState::new(&tuning);
        scroll.advance(5.0, &tuning);
        assert_eq!(scroll.marker_a, 133.0);
        assert_eq!(scroll.marker_b, -9.0);
        assert_eq!(scroll.cloud, 181.5);
    }

    #[test]
    fn test_markers_wrap() {
        let tuning = Tuning::default();
        let mut scroll = ScrollState::new(&tuning);
        // marker_b starts at -4 and passes -92 after 18 ticks at speed 5
        for _ in 0..17 {
            scroll.advance(5.0, &tuning);
        }
        assert_eq!(scroll.marker_b, -89.0);
        scroll.advance(5.0, &tuning);
        assert_eq!(scroll.marker_b, tuning.spawn_x());
    }
}
