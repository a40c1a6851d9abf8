//! Tuning parameters for the roll animation

/// Configuration for [`RollAnimator`](super::RollAnimator)
///
/// Rates that scale with the frame rate are expressed per frame-per-second,
/// so the same roll looks the same on fast and slow displays.
#[derive(Debug, Clone, PartialEq)]
pub struct RollConfig {
    /// Frame rate assumed when the measured one is unusable
    pub nominal_frame_rate: f32,
    /// Fastest measured frame rate a roll is sized for
    pub max_frame_rate: f32,
    /// Shortest roll, in seconds worth of frames
    pub min_roll_seconds: u32,
    /// Longest roll, in seconds worth of frames
    pub max_roll_seconds: u32,
    /// Lower bound of the spin speed, degrees/sec per frame-per-second
    pub min_spin_factor: f32,
    /// Upper bound of the spin speed, degrees/sec per frame-per-second
    pub max_spin_factor: f32,
    /// Lower bound of the drift speed, viewport fractions per second
    pub min_drift_factor: f32,
    /// Upper bound of the drift speed, viewport fractions per second
    pub max_drift_factor: f32,
    /// Translation at which the die bounces back, per axis
    pub bounce_limit: f32,
    /// Orientation before the first landing, in degrees
    pub initial_angle_deg: [f32; 3],
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            nominal_frame_rate: 60.0,
            max_frame_rate: 1000.0,
            min_roll_seconds: 2,
            max_roll_seconds: 5,
            min_spin_factor: 4.0,
            max_spin_factor: 8.0,
            min_drift_factor: 1.0 / 200.0,
            max_drift_factor: 1.0 / 100.0,
            bounce_limit: 1.5,
            initial_angle_deg: [250.0, 345.0, 12.0],
        }
    }
}

impl RollConfig {
    pub fn with_nominal_frame_rate(mut self, frame_rate: f32) -> Self {
        self.nominal_frame_rate = frame_rate;
        self
    }

    pub fn with_max_frame_rate(mut self, frame_rate: f32) -> Self {
        self.max_frame_rate = frame_rate;
        self
    }

    pub fn with_roll_seconds(mut self, min: u32, max: u32) -> Self {
        self.min_roll_seconds = min;
        self.max_roll_seconds = max;
        self
    }

    pub fn with_spin_factor(mut self, min: f32, max: f32) -> Self {
        self.min_spin_factor = min;
        self.max_spin_factor = max;
        self
    }

    pub fn with_drift_factor(mut self, min: f32, max: f32) -> Self {
        self.min_drift_factor = min;
        self.max_drift_factor = max;
        self
    }

    pub fn with_bounce_limit(mut self, limit: f32) -> Self {
        self.bounce_limit = limit;
        self
    }

    /// Panics if any range is empty or any rate is unusable.
    ///
    /// A bad configuration is a programming error, so this is checked once
    /// at construction instead of on every frame.
    pub fn assert_valid(&self) {
        assert!(
            self.nominal_frame_rate.is_finite() && self.nominal_frame_rate >= 1.0,
            "nominal frame rate must be at least 1, got {}",
            self.nominal_frame_rate
        );
        assert!(
            self.max_frame_rate.is_finite() && self.max_frame_rate >= self.nominal_frame_rate,
            "max frame rate {} is below the nominal {}",
            self.max_frame_rate,
            self.nominal_frame_rate
        );
        assert!(
            self.min_roll_seconds >= 1 && self.min_roll_seconds <= self.max_roll_seconds,
            "roll duration range {}..={} is invalid",
            self.min_roll_seconds,
            self.max_roll_seconds
        );
        assert!(
            self.min_spin_factor > 0.0 && self.min_spin_factor <= self.max_spin_factor,
            "spin factor range {}..={} is invalid",
            self.min_spin_factor,
            self.max_spin_factor
        );
        assert!(
            (self.max_frame_rate * self.max_spin_factor).is_finite(),
            "spin factor {} overflows at {} fps",
            self.max_spin_factor,
            self.max_frame_rate
        );
        assert!(
            self.min_drift_factor >= 0.0
                && self.min_drift_factor <= self.max_drift_factor
                && self.max_drift_factor.is_finite(),
            "drift factor range {}..={} is invalid",
            self.min_drift_factor,
            self.max_drift_factor
        );
        assert!(
            self.bounce_limit.is_finite() && self.bounce_limit > 0.0,
            "bounce limit must be positive, got {}",
            self.bounce_limit
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        RollConfig::default().assert_valid();
    }

    #[test]
    #[should_panic(expected = "roll duration")]
    fn test_inverted_duration_panics() {
        RollConfig::default().with_roll_seconds(5, 2).assert_valid();
    }

    #[test]
    #[should_panic(expected = "nominal frame rate")]
    fn test_zero_frame_rate_panics() {
        RollConfig::default()
            .with_nominal_frame_rate(0.0)
            .assert_valid();
    }

    #[test]
    #[should_panic(expected = "max frame rate")]
    fn test_max_frame_rate_below_nominal_panics() {
        RollConfig::default()
            .with_max_frame_rate(30.0)
            .assert_valid();
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_spin_factor_overflowing_at_max_rate_panics() {
        RollConfig::default()
            .with_spin_factor(1.0, f32::MAX)
            .assert_valid();
    }

    #[test]
    #[should_panic(expected = "drift factor")]
    fn test_inverted_drift_range_panics() {
        RollConfig::default()
            .with_drift_factor(0.5, 0.1)
            .assert_valid();
    }

    #[test]
    #[should_panic(expected = "spin factor")]
    fn test_empty_spin_range_panics() {
        RollConfig::default().with_spin_factor(8.0, 4.0).assert_valid();
    }
}
