use crate::math::polynomial::polynomialerror::PolynomialError;

/// Equality criterion for domain edges: a few ulps, relative to the
/// larger magnitude (absolute near zero).
pub fn s_equal(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 4.0 * f64::EPSILON * scale
}

/// Finite interval [xmin, xmax] together with the affine map onto the
/// normalized variable t ∈ [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    xmin: f64,
    xmax: f64,
}

impl Domain {
    /// Edges may come in any order; they are sorted here.
    pub fn new(xmin: f64, xmax: f64) -> Result<Domain, PolynomialError> {
        let (lo, hi) = if xmin <= xmax { (xmin, xmax) } else { (xmax, xmin) };
        if !lo.is_finite() || !hi.is_finite() || lo == hi {
            return Err(PolynomialError::InvalidDomain { xmin, xmax });
        }
        Ok(Domain { xmin: lo, xmax: hi })
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn contains(&self, x: f64) -> bool {
        self.xmin <= x && x <= self.xmax
    }

    /// x → t
    pub fn t(&self, x: f64) -> f64 {
        (2.0 * x - self.xmax - self.xmin) / (self.xmax - self.xmin)
    }

    /// t → x
    pub fn x(&self, t: f64) -> f64 {
        0.5 * (t * (self.xmax - self.xmin) + self.xmax + self.xmin)
    }

    /// dt/dx
    pub fn dt_dx(&self) -> f64 {
        2.0 / (self.xmax - self.xmin)
    }

    /// dx/dt
    pub fn dx_dt(&self) -> f64 {
        0.5 * (self.xmax - self.xmin)
    }

    pub fn same_as(&self, other: &Domain) -> bool {
        s_equal(self.xmin, other.xmin) && s_equal(self.xmax, other.xmax)
    }

    /// `Ok(())` if both domains coincide, `DomainMismatch` otherwise.
    pub fn check_same(&self, other: &Domain) -> Result<(), PolynomialError> {
        if self.same_as(other) {
            Ok(())
        } else {
            Err(PolynomialError::DomainMismatch {
                left: (self.xmin, self.xmax),
                right: (other.xmin, other.xmax),
            })
        }
    }

    /// Clamp [low, high] to the domain; `None` when nothing is left.
    pub fn clamp(&self, low: f64, high: f64) -> Option<(f64, f64)> {
        let a = low.max(self.xmin);
        let b = high.min(self.xmax);
        if a < b { Some((a, b)) } else { None }
    }
}

impl Default for Domain {
    fn default() -> Domain {
        Domain { xmin: -1.0, xmax: 1.0 }
    }
}
