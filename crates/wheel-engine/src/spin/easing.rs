// spin/easing.rs
//
// Timing curves for the spin-down animation.
// Every curve here is monotone non-decreasing on [0, 1] and ends at rest —
// the wheel must never oscillate past its planned target.

/// Timing curve applied to the spin animation's normalized time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinEase {
    /// Cubic ease-out.
    CubicOut,
    /// Quartic ease-out (longer tail).
    QuartOut,
    /// Exponential ease-out (dramatic stop).
    ExpoOut,
    /// Arbitrary CSS-style cubic bézier timing curve.
    Bezier(CubicBezier),
}

impl Default for SpinEase {
    fn default() -> Self {
        SpinEase::Bezier(CubicBezier::SPIN_DOWN)
    }
}

impl SpinEase {
    /// Apply the curve to a normalized time value `t` in [0, 1].
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            SpinEase::CubicOut => 1.0 - (1.0 - t).powi(3),
            SpinEase::QuartOut => 1.0 - (1.0 - t).powi(4),
            SpinEase::ExpoOut => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
            SpinEase::Bezier(bezier) => bezier.eval(t),
        }
    }
}

/// CSS-style cubic bézier timing curve through (0,0) and (1,1) with control
/// points (x1, y1) and (x2, y2). `x1`/`x2` must lie in [0, 1], which makes
/// x(u) monotone and the curve a function of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// The spin-down feel: slow ramp-in, long decelerating tail.
    pub const SPIN_DOWN: CubicBezier = CubicBezier::new(0.15, 0.0, 0.2, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    // Polynomial coefficients in Horner form:
    // B(u) = ((a·u + b)·u + c)·u  with  c = 3p1, b = 3(p2 − p1) − c, a = 1 − c − b.
    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample(p1: f64, p2: f64, u: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        ((a * u + b) * u + c) * u
    }

    fn sample_derivative(p1: f64, p2: f64, u: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        (3.0 * a * u + 2.0 * b) * u + c
    }

    /// Solve for the curve parameter `u` such that x(u) == x.
    /// Newton-Raphson with a bisection fallback for flat regions.
    fn solve_u(&self, x: f64) -> f64 {
        let mut u = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, u) - x;
            if err.abs() < 1e-7 {
                return u;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, u);
            if slope.abs() < 1e-6 {
                break;
            }
            u -= err / slope;
        }

        // Bisection: x(u) is monotone for x1, x2 in [0, 1]
        let (mut lo, mut hi) = (0.0, 1.0);
        u = x;
        while hi - lo > 1e-7 {
            if Self::sample(self.x1, self.x2, u) < x {
                lo = u;
            } else {
                hi = u;
            }
            u = (lo + hi) * 0.5;
        }
        u
    }

    /// Evaluate the timing curve at time `x` in [0, 1].
    pub fn eval(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let u = self.solve_u(x).clamp(0.0, 1.0);
        Self::sample(self.y1, self.y2, u)
    }
}
