mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::Walking;

use crate::report::Summary;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// The three supported workout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Kind {
    Running,
    Walking,
    Swimming,
}

/// Raw sensor data shared by every workout kind.
///
/// `action` is the raw sensor count (steps or strokes), `duration_h`
/// the workout length in hours, `weight_kg` the athlete's weight.
/// Invariant: `duration_h > 0` — the speed computation divides by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutRecord {
    pub action: f64,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl WorkoutRecord {
    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

/// A workout that can report its derived statistics.
///
/// Distance and mean speed share one stride-based computation; every
/// kind supplies its own calorie model, and Swimming replaces the
/// speed formula with a pool-based one.
pub trait Workout: std::fmt::Debug {
    fn kind(&self) -> Kind;

    fn record(&self) -> &WorkoutRecord;

    /// Meters covered by one action (step or stroke).
    fn step_length_m(&self) -> f64;

    /// Distance covered, in km.
    fn distance_km(&self) -> f64 {
        self.record().action * self.step_length_m() / M_IN_KM
    }

    /// Mean speed over the whole workout, in km/h.
    ///
    /// Caller must guarantee `duration_h > 0`.
    fn avg_speed_kmh(&self) -> f64 {
        self.distance_km() / self.record().duration_h
    }

    /// Energy burned, in kcal.
    fn calories_spent(&self) -> f64;

    /// Materializes the derived statistics for reporting.
    fn summary(&self) -> Summary {
        Summary {
            kind: self.kind().to_string(),
            duration_h: self.record().duration_h,
            distance_km: self.distance_km(),
            avg_speed_kmh: self.avg_speed_kmh(),
            calories: self.calories_spent(),
        }
    }
}
