//! Shared math utilities.

/// Logistic function, mapping a raw logit into `(0, 1)`.
pub fn sigmoid(logit: f32) -> f32 {
    1.0 / (1.0 + (-logit).exp())
}

/// Apply the logistic function to every element in place.
pub fn sigmoid_in_place(v: &mut [f32]) {
    for x in v.iter_mut() {
        *x = sigmoid(*x);
    }
}

/// Divide, returning `0.0` when the denominator is zero.
///
/// Every metric ratio goes through here so no `NaN` or infinity leaks into
/// a report.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Harmonic mean of precision and recall, `0.0` when both are zero.
pub fn f1(precision: f64, recall: f64) -> f64 {
    ratio(2.0 * precision * recall, precision + recall)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_range() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
        assert!(sigmoid(-20.0) < 0.01);
        assert!(sigmoid(20.0) > 0.99);
    }

    #[test]
    fn test_sigmoid_monotonic() {
        let mut v = vec![-1.0, 0.0, 1.0];
        sigmoid_in_place(&mut v);
        assert!(v[0] < v[1]);
        assert!(v[1] < v[2]);
    }

    #[test]
    fn test_ratio_guards_zero() {
        assert_eq!(ratio(3.0, 0.0), 0.0);
        assert!((ratio(1.0, 4.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_f1() {
        assert_eq!(f1(0.0, 0.0), 0.0);
        assert!((f1(0.5, 0.5) - 0.5).abs() < 1e-12);
        assert!((f1(1.0, 0.5) - 2.0 / 3.0).abs() < 1e-12);
    }
}
