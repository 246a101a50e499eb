mod compare;
mod sort;

pub use compare::{CompareDirections, compare_directions};
pub use sort::{SortAxes, sort_axes};
