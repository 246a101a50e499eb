//! Canonical ordering of coordinate system axes.
//!
//! Axes are brought into an order that approximates a right-handed coordinate
//! system: compass directions first (north before east), then directions along
//! meridians by ascending meridian, then everything else in input order.
//!
//! The pairwise ordering is not transitive for every combination of compass
//! directions (north, east, south and west form a cycle). Such inputs are
//! reported as [`Error::InconsistentAxisOrdering`] instead of being sorted
//! arbitrarily.

use crate::axis::compass::compass_angle;
use crate::axis::meridian::DirectionAlongMeridian;
use crate::axis::{AxisDirection, HasAxisDirection};
use crate::error::{Error, InconsistentAxisOrderingSnafu};
use crate::util::Result;
use snafu::ensure;
use std::cmp::Ordering;
use tracing::{debug, error, trace};

/// The axes in canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedAxes<A> {
    pub axes: Vec<A>,
    /// For every output position, the position of the axis in the input.
    pub source_indices: Vec<usize>,
    /// `true` if at least one axis moved.
    pub changed: bool,
}

/// Pairs an axis with its parsed meridian for the duration of a sort.
struct ComparisonAdapter<'a> {
    index: usize,
    direction: Option<&'a AxisDirection>,
    meridian: Option<DirectionAlongMeridian>,
}

impl<'a> ComparisonAdapter<'a> {
    fn new<A: HasAxisDirection + ?Sized>(index: usize, axis: &'a A) -> Self {
        let direction = axis.axis_direction();
        let meridian = direction.and_then(AxisDirection::meridian);

        trace!(index, ?direction, ?meridian, "wrapping axis for comparison");

        Self {
            index,
            direction,
            meridian,
        }
    }

    fn is_compass(&self) -> bool {
        self.direction.is_some_and(AxisDirection::is_compass)
    }

    fn compare(&self, other: &Self) -> Ordering {
        if let (Some(this), Some(that)) = (self.direction, other.direction) {
            if let Some(angle) = compass_angle(that, this) {
                return angle.cmp(&0);
            }
        }

        match (self.is_compass(), other.is_compass()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        match (&self.meridian, &other.meridian) {
            (Some(this), Some(that)) => this.compare(that),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Compares two axes by the canonical ordering rules.
///
/// 1. Two compass directions compare by the rotation between them: `a` comes first
///    if `b` lies less than half a turn clockwise of it.
/// 2. A compass direction comes before any other direction.
/// 3. Directions along meridians compare by ascending meridian and come before
///    directions without one. All remaining directions are equal.
pub fn compare_axes<A, B>(a: &A, b: &B) -> Ordering
where
    A: HasAxisDirection + ?Sized,
    B: HasAxisDirection + ?Sized,
{
    ComparisonAdapter::new(0, a).compare(&ComparisonAdapter::new(1, b))
}

/// Computes the canonical order of `axes`.
///
/// The result holds, for every output position, the input position of the axis
/// that goes there. Axes that compare equal keep their relative order.
pub fn canonical_permutation<A: HasAxisDirection>(axes: &[A]) -> Result<Vec<usize>> {
    let mut adapters: Vec<ComparisonAdapter> = axes
        .iter()
        .enumerate()
        .map(|(index, axis)| ComparisonAdapter::new(index, axis))
        .collect();

    binary_insertion_sort(&mut adapters);
    check_consistency(&adapters)?;

    Ok(adapters.iter().map(|adapter| adapter.index).collect())
}

/// Brings `axes` into canonical order and reports whether anything moved.
pub fn sort_axes<A: HasAxisDirection>(axes: Vec<A>) -> Result<SortedAxes<A>> {
    let source_indices = canonical_permutation(&axes)?;
    let changed = is_reordering(&source_indices);

    debug!(axes = axes.len(), changed, "canonicalized axis order");

    let axes = if changed {
        apply_permutation(axes, &source_indices)?
    } else {
        axes
    };

    Ok(SortedAxes {
        axes,
        source_indices,
        changed,
    })
}

/// Like [`sort_axes`], but reorders the slice itself.
pub fn sort_axes_in_place<A: HasAxisDirection>(axes: &mut [A]) -> Result<bool> {
    let source_indices = canonical_permutation(axes)?;
    let changed = is_reordering(&source_indices);

    if changed {
        permute_in_place(axes, &source_indices);
    }

    Ok(changed)
}

/// Checks whether `axes` already are in canonical order.
pub fn is_canonical<A: HasAxisDirection>(axes: &[A]) -> Result<bool> {
    Ok(!is_reordering(&canonical_permutation(axes)?))
}

/// Moves `items[source_indices[i]]` to position `i`.
pub fn apply_permutation<T>(items: Vec<T>, source_indices: &[usize]) -> Result<Vec<T>> {
    let length = items.len();
    let invalid = || Error::InvalidPermutation {
        permutation: source_indices.to_vec(),
        length,
    };

    if source_indices.len() != length {
        return Err(invalid());
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();

    source_indices
        .iter()
        .map(|&index| slots.get_mut(index).and_then(Option::take).ok_or_else(invalid))
        .collect()
}

fn is_reordering(source_indices: &[usize]) -> bool {
    source_indices
        .iter()
        .enumerate()
        .any(|(position, &index)| position != index)
}

/// Applies a valid permutation by walking its cycles.
fn permute_in_place<T>(items: &mut [T], source_indices: &[usize]) {
    let mut visited = vec![false; items.len()];

    for start in 0..items.len() {
        if visited[start] {
            continue;
        }

        let mut current = start;
        loop {
            visited[current] = true;
            let next = source_indices[current];
            if next == start {
                break;
            }
            items.swap(current, next);
            current = next;
        }
    }
}

/// Stable sort that does not panic if the comparison is not a total order.
fn binary_insertion_sort(adapters: &mut [ComparisonAdapter]) {
    for i in 1..adapters.len() {
        let mut low = 0;
        let mut high = i;

        while low < high {
            let mid = low + (high - low) / 2;
            if adapters[i].compare(&adapters[mid]) == Ordering::Less {
                high = mid;
            } else {
                low = mid + 1;
            }
        }

        adapters[low..=i].rotate_right(1);
    }
}

fn check_consistency(sorted: &[ComparisonAdapter]) -> Result<()> {
    for (position, first) in sorted.iter().enumerate() {
        for second in &sorted[position + 1..] {
            let consistent = first.compare(second) != Ordering::Greater;

            if !consistent {
                error!(
                    first = ?first.direction,
                    second = ?second.direction,
                    "axis ordering is not transitive"
                );
            }

            ensure!(
                consistent,
                InconsistentAxisOrderingSnafu {
                    first: first.direction.cloned(),
                    second: second.direction.cloned(),
                }
            );
        }
    }

    Ok(())
}
