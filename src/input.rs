use crate::constants::{DOUBLE_CLICK_MS, DOUBLE_CLICK_TRAVEL_PX};
use nalgebra::Vector2;

/// Pairs up left clicks into double clicks. The window layer only reports single presses.
#[derive(Debug)]
pub struct DoubleClickDetector {
    window_ms: f64,
    travel_px: f32,
    last_press: Option<(f64, Vector2<f32>)>,
}

impl Default for DoubleClickDetector {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_MS, DOUBLE_CLICK_TRAVEL_PX)
    }
}

impl DoubleClickDetector {
    pub fn new(window_ms: f64, travel_px: f32) -> Self {
        Self {
            window_ms,
            travel_px,
            last_press: None,
        }
    }

    /// time_ms: time since start of the loop
    pub fn press(&mut self, time_ms: f64, position: Vector2<f32>) -> bool {
        match self.last_press.take() {
            Some((last_time, last_pos))
                if time_ms - last_time <= self.window_ms
                    && (position - last_pos).norm() <= self.travel_px =>
            {
                // the pair is consumed, a third click starts over
                true
            }
            _ => {
                self.last_press = Some((time_ms, position));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click() {
        let mut d = DoubleClickDetector::default();
        let pos = Vector2::new(100.0, 100.0);
        assert!(!d.press(0.0, pos));
        assert!(d.press(250.0, pos));
    }

    #[test]
    fn test_too_slow() {
        let mut d = DoubleClickDetector::default();
        let pos = Vector2::new(100.0, 100.0);
        assert!(!d.press(0.0, pos));
        assert!(!d.press(800.0, pos));
        // the slow click still counts as the first of a new pair
        assert!(d.press(1000.0, pos));
    }

    #[test]
    fn test_too_far() {
        let mut d = DoubleClickDetector::default();
        assert!(!d.press(0.0, Vector2::new(0.0, 0.0)));
        assert!(!d.press(100.0, Vector2::new(50.0, 0.0)));
        assert!(d.press(200.0, Vector2::new(51.0, 1.0)));
    }

    #[test]
    fn test_triple_click_is_one_double() {
        let mut d = DoubleClickDetector::default();
        let pos = Vector2::new(5.0, 5.0);
        assert!(!d.press(0.0, pos));
        assert!(d.press(100.0, pos));
        assert!(!d.press(200.0, pos));
    }
}
