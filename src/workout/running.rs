use super::{Kind, Workout, WorkoutRecord, MIN_IN_H, M_IN_KM};

/// Training: running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    record: WorkoutRecord,
}

impl Running {
    pub const STEP_LENGTH_M: f64 = 0.65;

    // Empirical calories-per-minute coefficients.
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            record: WorkoutRecord::new(action, duration_h, weight_kg),
        }
    }
}

impl Workout for Running {
    fn kind(&self) -> Kind {
        Kind::Running
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn step_length_m(&self) -> f64 {
        Self::STEP_LENGTH_M
    }

    /// Per-minute empirical rate times weight times total minutes.
    fn calories_spent(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.avg_speed_kmh() + Self::SPEED_SHIFT) * self.record.weight_kg
            / M_IN_KM
            * (self.record.duration_h * MIN_IN_H)
    }
}
