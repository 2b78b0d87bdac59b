/// Largest magnitude the logistic argument is allowed to reach.
///
/// Beyond ±35 the f64 result of `1 / (1 + e^-x)` rounds to exactly 1.0 (or
/// underflows towards 0.0), and far beyond it `exp` overflows. Clamping keeps
/// the output strictly inside (0, 1).
pub const MAX_LOGIT: f64 = 35.0;

/// Logistic activation used by the perceptron.
pub struct Sigmoid;

impl Sigmoid {
    /// `1 / (1 + e^-x)` with `x` clamped to `[-MAX_LOGIT, MAX_LOGIT]`.
    pub fn function(x: f64) -> f64 {
        let x = x.clamp(-MAX_LOGIT, MAX_LOGIT);
        1.0 / (1.0 + (-x).exp())
    }

    /// Derivative expressed through an already computed output: `y·(1 − y)`.
    pub fn derivative_from_output(y: f64) -> f64 {
        y * (1.0 - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_maps_to_one_half() {
        assert_eq!(Sigmoid::function(0.0), 0.5);
        assert_eq!(Sigmoid::derivative_from_output(Sigmoid::function(0.0)), 0.25);
    }

    #[test]
    fn extreme_arguments_stay_inside_open_interval() {
        for x in [-1e308, -1e6, -800.0, -36.0, 36.0, 800.0, 1e6, 1e308] {
            let y = Sigmoid::function(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
        }
    }

    #[test]
    fn symmetric_around_zero() {
        for x in [0.1, 0.5, 1.0, 3.0, 10.0] {
            let sum = Sigmoid::function(x) + Sigmoid::function(-x);
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }
}
