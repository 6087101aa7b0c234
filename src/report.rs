use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::util;

/// Computed view of one workout, produced fresh per record and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub kind: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub calories: f64,
}

impl Summary {
    /// Renders the fixed one-line report, numeric fields to three
    /// decimal places. Pure formatting, no computation.
    pub fn render(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.kind, self.duration_h, self.distance_km, self.avg_speed_kmh, self.calories
        )
    }
}

/// Aggregate view over a batch of summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub workouts: usize,
    pub distance_km: f64,
    pub calories: f64,
    pub mean_speed_kmh: f64,
    pub speed_std_dev_kmh: f64,
    pub by_kind: Vec<(String, usize)>,
}

impl Totals {
    pub fn render(&self) -> String {
        let kinds = self
            .by_kind
            .iter()
            .map(|(kind, n)| format!("{} x{}", kind, n))
            .join(", ");

        format!(
            "Totals: {} workouts ({}); Distance: {:.3} km; Avg speed: {:.3} km/h (sd {:.3}); Calories burned: {:.3}.",
            self.workouts, kinds, self.distance_km, self.mean_speed_kmh, self.speed_std_dev_kmh, self.calories
        )
    }
}

/// Folds a batch of summaries into totals. None on an empty batch.
pub fn totals(summaries: &[Summary]) -> Option<Totals> {
    let speeds: Vec<f64> = summaries.iter().map(|s| s.avg_speed_kmh).collect();
    let mean_speed_kmh = util::mean(&speeds)?;
    let speed_std_dev_kmh = util::std_dev(&speeds)?;

    let by_kind = summaries
        .iter()
        .map(|s| s.kind.clone())
        .counts()
        .into_iter()
        .sorted()
        .collect();

    Some(Totals {
        workouts: summaries.len(),
        distance_km: summaries.iter().map(|s| s.distance_km).sum(),
        calories: summaries.iter().map(|s| s.calories).sum(),
        mean_speed_kmh,
        speed_std_dev_kmh,
        by_kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Summary {
        Summary {
            kind: "Running".to_string(),
            duration_h: 1.0,
            distance_km: 9.75,
            avg_speed_kmh: 9.75,
            calories: 797.805,
        }
    }

    #[test]
    fn test_render_template() {
        assert_eq!(
            sample().render(),
            "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 797.805."
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let summary = sample();

        assert_eq!(summary.render(), summary.render());
    }

    #[test]
    fn test_render_rounds_to_three_decimals() {
        let summary = Summary {
            kind: "Swimming".to_string(),
            duration_h: 1.0,
            distance_km: 0.9936,
            avg_speed_kmh: 1.0,
            calories: 336.0,
        };

        assert!(summary.render().contains("Distance: 0.994 km"));
        assert!(summary.render().contains("Calories burned: 336.000."));
    }

    #[test]
    fn test_totals_empty_batch() {
        assert_eq!(totals(&[]), None);
    }

    #[test]
    fn test_totals_over_batch() {
        let mut fast = sample();
        fast.avg_speed_kmh = 12.25;
        let batch = vec![sample(), sample(), fast];

        let totals = totals(&batch).unwrap();

        assert_eq!(totals.workouts, 3);
        assert!((totals.distance_km - 29.25).abs() < 1e-9);
        assert!((totals.calories - 2393.415).abs() < 1e-9);
        assert!((totals.mean_speed_kmh - (9.75 + 9.75 + 12.25) / 3.0).abs() < 1e-9);
        assert_eq!(totals.by_kind, vec![("Running".to_string(), 3)]);
    }

    #[test]
    fn test_totals_by_kind_sorted() {
        let mut swim = sample();
        swim.kind = "Swimming".to_string();
        let mut walk = sample();
        walk.kind = "Walking".to_string();
        let batch = vec![walk, swim, sample()];

        let totals = totals(&batch).unwrap();

        assert_eq!(
            totals.by_kind,
            vec![
                ("Running".to_string(), 1),
                ("Swimming".to_string(), 1),
                ("Walking".to_string(), 1),
            ]
        );
    }
}
