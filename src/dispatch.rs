use thiserror::Error;
use tracing::debug;

use crate::workout::{Kind, Running, Swimming, Walking, Workout};

/// Errors surfaced while turning a sensor package into a workout.
///
/// Both variants signal a caller contract violation and propagate to
/// the top; nothing here is retried or defaulted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("unknown workout code {0:?}")]
    UnknownCode(String),

    #[error("{kind} takes {expected} sensor values, got {got}")]
    ArityMismatch {
        kind: Kind,
        expected: usize,
        got: usize,
    },
}

fn expect_arity(kind: Kind, expected: usize, args: &[f64]) -> Result<(), DispatchError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(DispatchError::ArityMismatch {
            kind,
            expected,
            got: args.len(),
        })
    }
}

/// Builds the workout matching a sensor package code.
///
/// The args are spread positionally into the variant's constructor:
/// "RUN" takes (action, duration, weight), "WLK" adds height and
/// "SWM" adds pool length and lap count.
pub fn resolve(code: &str, args: &[f64]) -> Result<Box<dyn Workout>, DispatchError> {
    let workout: Box<dyn Workout> = match code {
        "RUN" => {
            expect_arity(Kind::Running, 3, args)?;
            Box::new(Running::new(args[0], args[1], args[2]))
        }
        "WLK" => {
            expect_arity(Kind::Walking, 4, args)?;
            Box::new(Walking::new(args[0], args[1], args[2], args[3]))
        }
        "SWM" => {
            expect_arity(Kind::Swimming, 5, args)?;
            Box::new(Swimming::new(args[0], args[1], args[2], args[3], args[4]))
        }
        other => return Err(DispatchError::UnknownCode(other.to_string())),
    };

    debug!(code, kind = %workout.kind(), "resolved sensor package");
    Ok(workout)
}
