use crate::axis::AxisDirection;

/// Number of points on the compass rose that [`AxisDirection`] distinguishes.
pub const COMPASS_DIRECTION_COUNT: i32 = 16;

/// The signed rotation from `source` to `target` in sixteenths of a full turn.
///
/// The result lies in `[-8, 8]` and is positive for clockwise rotations,
/// e.g. `+4` from north to east. Rotations by half a turn are `+8` in one
/// direction and `-8` in the other. Returns `None` if either direction is not
/// a compass point.
pub fn compass_angle(source: &AxisDirection, target: &AxisDirection) -> Option<i32> {
    let source = source.compass_index()? as i32;
    let target = target.compass_index()? as i32;

    let mut angle = target - source;
    if angle < -COMPASS_DIRECTION_COUNT / 2 {
        angle += COMPASS_DIRECTION_COUNT;
    } else if angle > COMPASS_DIRECTION_COUNT / 2 {
        angle -= COMPASS_DIRECTION_COUNT;
    }

    Some(angle)
}

/// Same as [`compass_angle`], in degrees.
pub fn compass_angle_degrees(source: &AxisDirection, target: &AxisDirection) -> Option<f64> {
    compass_angle(source, target)
        .map(|angle| f64::from(angle) * 360. / f64::from(COMPASS_DIRECTION_COUNT))
}
