// Easing curves used by the splash run.

/// Bisection tolerance when inverting the bezier x polynomial.
const CUBIC_ERROR_BOUND: f64 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    /// cubic-bezier(0.25, 0.1, 0.25, 1.0), the CSS `ease` curve.
    Ease,
    /// cubic-bezier(0.4, 0.0, 0.2, 1.0), Material's standard curve.
    FastOutSlowIn,
}

impl Curve {
    /// Maps progress `t` in [0,1] to eased progress. Endpoints are exact.
    pub fn transform(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match *self {
            Curve::Ease => cubic(0.25, 0.1, 0.25, 1.0, t),
            Curve::FastOutSlowIn => cubic(0.4, 0.0, 0.2, 1.0, t),
        }
    }
}

#[inline]
fn evaluate_cubic(a: f64, b: f64, m: f64) -> f64 {
    3.0 * a * (1.0 - m) * (1.0 - m) * m + 3.0 * b * (1.0 - m) * m * m + m * m * m
}

/// Finds the bezier parameter whose x equals `t` by bisection, returns its y.
fn cubic(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    let mut start = 0.0;
    let mut end = 1.0;
    loop {
        let midpoint = (start + end) / 2.0;
        let estimate = evaluate_cubic(a, c, midpoint);
        if (t - estimate).abs() < CUBIC_ERROR_BOUND || end - start < f64::EPSILON {
            return evaluate_cubic(b, d, midpoint);
        }
        if estimate < t {
            start = midpoint;
        } else {
            end = midpoint;
        }
    }
}

/// Linear interpolation between `begin` and `end`; exact at both ends.
#[inline]
pub fn lerp(begin: f64, end: f64, t: f64) -> f64 {
    if t <= 0.0 {
        begin
    } else if t >= 1.0 {
        end
    } else {
        begin + (end - begin) * t
    }
}
