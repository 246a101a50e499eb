use snafu::Snafu;
use strum::IntoStaticStr;

use crate::axis::AxisDirection;

#[derive(Debug, Snafu, IntoStaticStr)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(
        "Inconsistent axis ordering: `{}` is sorted before `{}` but compares greater",
        first.as_ref().map_or_else(|| "<none>".to_string(), ToString::to_string),
        second.as_ref().map_or_else(|| "<none>".to_string(), ToString::to_string),
    ))]
    InconsistentAxisOrdering {
        first: Option<AxisDirection>,
        second: Option<AxisDirection>,
    },

    #[snafu(display("Dimension mismatch: expected {}, found {}", expected, found))]
    DimensionMismatch {
        expected: usize,
        found: usize,
    },

    #[snafu(display(
        "Invalid permutation {:?} for a sequence of length {}",
        permutation,
        length
    ))]
    InvalidPermutation {
        permutation: Vec<usize>,
        length: usize,
    },
}
