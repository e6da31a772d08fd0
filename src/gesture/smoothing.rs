//! Exponential cursor smoothing.
//!
//! A single-pole IIR low-pass filter over the mapped cursor target. Each
//! step moves the filtered position a fixed fraction of the remaining
//! distance toward the target, so the error toward a constant target decays
//! geometrically by `(1 - alpha)` per frame.

/// 1D filter state tracking the last smoothed value.
#[derive(Debug, Clone)]
pub struct FilterState {
    pub position: f64,
}

impl FilterState {
    pub fn new(initial: f64) -> Self {
        Self { position: initial }
    }

    /// Advance one step toward `target` with weight `alpha` in (0, 1].
    pub fn step(&mut self, target: f64, alpha: f64) -> f64 {
        self.position += (target - self.position) * alpha;
        self.position
    }
}

/// 2D filter for cursor position (X and Y axes).
#[derive(Debug, Clone)]
pub struct CursorFilter {
    pub x: FilterState,
    pub y: FilterState,
}

impl CursorFilter {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: FilterState::new(x),
            y: FilterState::new(y),
        }
    }

    /// Advance both axes toward the target position.
    pub fn step(&mut self, target_x: f64, target_y: f64, alpha: f64) -> (f64, f64) {
        (self.x.step(target_x, alpha), self.y.step(target_y, alpha))
    }

    /// Last smoothed position.
    pub fn position(&self) -> (f64, f64) {
        (self.x.position, self.y.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometric_decay_toward_constant_target() {
        let alpha = 1.0 / 7.0;
        let target = 100.0;
        let mut state = FilterState::new(0.0);
        let initial_error = target;

        for n in 1..=40 {
            state.step(target, alpha);
            let expected_error = initial_error * (1.0 - alpha).powi(n);
            assert!(
                ((target - state.position) - expected_error).abs() < 1e-9,
                "error after {} steps was {}, expected {}",
                n,
                target - state.position,
                expected_error
            );
        }
    }

    #[test]
    fn test_convergence_is_monotone() {
        let alpha = 1.0 / 7.0;
        let target = 500.0;
        let mut state = FilterState::new(0.0);
        let mut previous_error = (target - state.position).abs();

        for _ in 0..100 {
            state.step(target, alpha);
            let error = (target - state.position).abs();
            assert!(
                error < previous_error,
                "error {} did not shrink below {}",
                error,
                previous_error
            );
            previous_error = error;
        }
    }

    #[test]
    fn test_alpha_one_tracks_exactly() {
        let mut filter = CursorFilter::new(10.0, 20.0);
        assert_eq!(filter.step(300.0, 400.0, 1.0), (300.0, 400.0));
        assert_eq!(filter.position(), (300.0, 400.0));
    }

    #[test]
    fn test_smaller_alpha_lags_more() {
        let mut heavy = FilterState::new(0.0);
        let mut light = FilterState::new(0.0);
        heavy.step(100.0, 1.0 / 10.0);
        light.step(100.0, 1.0 / 2.0);
        assert!(
            heavy.position < light.position,
            "heavier damping {} should lag behind {}",
            heavy.position,
            light.position
        );
    }
}
