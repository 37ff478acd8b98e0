pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 5.0;
pub const SPEED_UP_FACTOR: f64 = 1.2;
pub const SLOW_DOWN_FACTOR: f64 = 0.8;

/// The knobs the user can turn. Everything that reacts to the user reads from
/// here rather than from anything global.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub running: bool,
    speed_multiplier: f64,
    pub labels_visible: bool,
    pub trails_visible: bool,
    selected_info_key: Option<String>,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    pub fn new() -> Self {
        SimulationState {
            running: true,
            speed_multiplier: 1.0,
            labels_visible: true,
            trails_visible: true,
            selected_info_key: None,
        }
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn speed_up(&mut self) {
        self.set_speed_multiplier(self.speed_multiplier * SPEED_UP_FACTOR);
    }

    pub fn slow_down(&mut self) {
        self.set_speed_multiplier(self.speed_multiplier * SLOW_DOWN_FACTOR);
    }

    pub fn reset_speed(&mut self) {
        self.speed_multiplier = 1.0;
    }

    fn set_speed_multiplier(&mut self, value: f64) {
        self.speed_multiplier = nalgebra::clamp(value, MIN_SPEED, MAX_SPEED);
    }

    pub fn selected_info_key(&self) -> Option<&str> {
        self.selected_info_key.as_deref()
    }

    pub fn select(&mut self, key: &str) {
        self.selected_info_key = Some(key.to_owned());
    }

    pub fn deselect(&mut self) {
        self.selected_info_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_speed_stays_in_range() {
        let mut state = SimulationState::new();
        for _ in 0..100 {
            state.speed_up();
            assert!(state.speed_multiplier() <= MAX_SPEED);
        }
        assert_eq!(state.speed_multiplier(), MAX_SPEED);

        for _ in 0..100 {
            state.slow_down();
            assert!(state.speed_multiplier() >= MIN_SPEED);
        }
        assert_eq!(state.speed_multiplier(), MIN_SPEED);
    }

    #[test]
    fn test_speed_steps() {
        let mut state = SimulationState::new();
        state.speed_up();
        assert_relative_eq!(state.speed_multiplier(), 1.2);
        state.slow_down();
        assert_relative_eq!(state.speed_multiplier(), 0.96);
        state.reset_speed();
        assert_eq!(state.speed_multiplier(), 1.0);
    }
}
