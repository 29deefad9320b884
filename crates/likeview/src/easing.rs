//! Easing curves driving particle travel and fade.
//!
//! Both curves map normalized progress in `[0, 1]` onto `[0, 1]`, are
//! monotonic, and hit the endpoints exactly.

/// Control points of the fast-out-slow-in curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
const FAST_OUT_SLOW_IN: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;
const EPSILON: f32 = 1e-6;

/// Accelerates quickly, then settles gently into the end value.
pub fn fast_out_slow_in(t: f32) -> f32 {
    FAST_OUT_SLOW_IN.ease(t)
}

/// Quadratic ease-out: `1 - (1 - t)^2`.
pub fn decelerate(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// CSS-style cubic bezier anchored at (0, 0) and (1, 1).
#[derive(Clone, Copy, Debug)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn ease(self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(x);
        Self::component(t, self.y1, self.y2)
    }

    fn component(t: f32, p1: f32, p2: f32) -> f32 {
        let inv = 1.0 - t;
        3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
    }

    fn slope(t: f32, p1: f32, p2: f32) -> f32 {
        let inv = 1.0 - t;
        3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Finds the curve parameter whose x equals `x`.
    fn solve_t(self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = Self::component(t, self.x1, self.x2) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let d = Self::slope(t, self.x1, self.x2);
            if d.abs() < EPSILON {
                break;
            }
            t = (t - err / d).clamp(0.0, 1.0);
        }

        // Newton stalled on a flat stretch; bisection always converges here
        // since x(t) is monotonic.
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = Self::component(t, self.x1, self.x2);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }
}
