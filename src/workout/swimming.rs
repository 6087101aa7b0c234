use super::{Kind, Workout, WorkoutRecord, M_IN_KM};

/// Training: swimming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    record: WorkoutRecord,
    pool_length_m: f64,
    pool_laps: f64,
}

impl Swimming {
    pub const STROKE_LENGTH_M: f64 = 1.38;

    // Empirical calorie coefficients.
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    ) -> Self {
        Self {
            record: WorkoutRecord::new(action, duration_h, weight_kg),
            pool_length_m,
            pool_laps,
        }
    }
}

impl Workout for Swimming {
    fn kind(&self) -> Kind {
        Kind::Swimming
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn step_length_m(&self) -> f64 {
        Self::STROKE_LENGTH_M
    }

    /// A pool lap is not a stride: speed comes from lane length times
    /// lap count, not from the stroke-based distance.
    fn avg_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps / M_IN_KM / self.record.duration_h
    }

    fn calories_spent(&self) -> f64 {
        (self.avg_speed_kmh() + Self::SPEED_SHIFT)
            * Self::WEIGHT_MULTIPLIER
            * self.record.weight_kg
            * self.record.duration_h
    }
}
