/// This macro allows comparing coordinate tuples using [`float_cmp::approx_eq`].
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => ({
        if !$crate::util::helpers::approx_eq_floats($left, $right) {
            panic!(r#"assertion failed: `(left == right)`
            left: `{:?}`,
           right: `{:?}`"#, $left, $right)
        }
    });
    ($left:expr, $right:expr, $($arg:tt)+) => ({
        if !$crate::util::helpers::approx_eq_floats($left, $right) {
            panic!(r#"assertion failed: `(left == right)`
  left: `{:?}`,
 right: `{:?}`: {}"#, $left, $right,
                           format_args!($($arg)+))
        }
    });
}

#[must_use]
pub fn approx_eq_floats(left: &[f64], right: &[f64]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    left.iter()
        .zip(right)
        .all(|(&l, &r)| float_cmp::approx_eq!(f64, l, r))
}

/// Normalizes a longitude in degrees into the range `(-180, 180]`.
///
/// Returns `None` for non-finite input.
#[must_use]
pub fn normalize_longitude(degrees: f64) -> Option<f64> {
    if !degrees.is_finite() {
        return None;
    }

    let mut normalized = degrees % 360.;
    if normalized > 180. {
        normalized -= 360.;
    } else if normalized <= -180. {
        normalized += 360.;
    }

    // adding `+0` turns `-0` into `+0`
    Some(normalized + 0.)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_approx_eq_for_floats() {
        assert_approx_eq!(&[1., 2., 3.], &[1., 2., 3.]);

        assert!(!approx_eq_floats(&[1., 2.], &[1., 2., 3.]));
    }

    #[test]
    fn it_normalizes_longitudes() {
        assert_approx_eq!(
            &[
                normalize_longitude(90.).unwrap(),
                normalize_longitude(270.).unwrap(),
                normalize_longitude(-180.).unwrap(),
                normalize_longitude(180.).unwrap(),
                normalize_longitude(540.).unwrap(),
                normalize_longitude(-450.).unwrap(),
            ],
            &[90., -90., 180., 180., 180., -90.]
        );

        assert!(normalize_longitude(f64::NAN).is_none());
        assert!(normalize_longitude(f64::INFINITY).is_none());
    }

    #[test]
    fn it_removes_negative_zero() {
        let zero = normalize_longitude(-0.).unwrap();
        assert!(zero.is_sign_positive());

        let zero = normalize_longitude(-360.).unwrap();
        assert!(zero.is_sign_positive());
    }
}
