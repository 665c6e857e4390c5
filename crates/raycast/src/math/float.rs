pub trait FloatAsExt {
    /// Returns `Some(f)` is f is far enough from zero (near is given by eps) else returns None
    ///
    /// Returns None for NaN and Some(f) for +/- infty
    fn into_non_zero(self, eps: Self) -> Option<f32>;

    /// Returns `Some(f)` is f is finite else returns None
    ///
    /// Returns None for NaN and +/- infty
    fn into_finite(self) -> Option<f32>;
}

impl FloatAsExt for f32 {
    fn into_non_zero(self, eps: Self) -> Option<f32> {
        (self.abs() > eps).then_some(self)
    }

    fn into_finite(self) -> Option<f32> {
        self.is_finite().then_some(self)
    }
}

/// Real roots of `a t² + b t + c = 0`, smallest first.
///
/// A near-zero leading coefficient is treated as degenerate and yields no root.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let a = a.into_non_zero(crate::PARALLEL_EPSILON)?;
    let discriminant = (b * b - 4.0 * a * c).into_finite()?;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_discriminant = discriminant.sqrt();
    let t1 = (-b - sqrt_discriminant) / (2.0 * a);
    let t2 = (-b + sqrt_discriminant) / (2.0 * a);
    Some((t1.min(t2), t1.max(t2)))
}

#[cfg(test)]
mod tests {
    use super::{solve_quadratic, FloatAsExt};

    #[test]
    fn as_non_zero_test() {
        assert_eq!(0.0f32.into_non_zero(0.1), None);
        assert_eq!(1.0f32.into_non_zero(0.1), Some(1.0));
        assert_eq!((-0.01f32).into_non_zero(0.1), None);
        assert_eq!((-1.0f32).into_non_zero(0.1), Some(-1.0));
        assert_eq!(f32::NAN.into_non_zero(0.1), None);
        assert_eq!(f32::INFINITY.into_non_zero(0.1), Some(f32::INFINITY));
    }

    #[test]
    fn as_finite_test() {
        assert_eq!(0.0f32.into_finite(), Some(0.0));
        assert_eq!((-1.0f32).into_finite(), Some(-1.0));
        assert_eq!(f32::NAN.into_finite(), None);
        assert_eq!(f32::INFINITY.into_finite(), None);
    }

    #[test]
    fn quadratic_roots_are_sorted() {
        // (t - 2)(t - 3) with a negative leading coefficient
        let (t1, t2) = solve_quadratic(-1.0, 5.0, -6.0).unwrap();
        assert!((t1 - 2.0).abs() < 1e-6);
        assert!((t2 - 3.0).abs() < 1e-6);
    }

    #[test]
    fn quadratic_degenerate_cases() {
        assert!(solve_quadratic(0.0, 1.0, 1.0).is_none());
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_none());
    }
}
