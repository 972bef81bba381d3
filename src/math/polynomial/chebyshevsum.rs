use crate::math::curve::curve::{
    Curve,
    CurveIntegration
};
use crate::math::polynomial::basis::Basis;
use crate::math::polynomial::domain::Domain;
use crate::math::polynomial::polynomialerror::PolynomialError;
use crate::math::polynomial::polynomialsum::PolynomialSum;
use crate::math::polynomial::polysum::{
    PolySum,
    impl_polysum_common
};

// ChebyshevSum
//
//   f(x) = Σ p_k·T_k(t),   t = (2x - xmax - xmin) / (xmax - xmin)
//
// Derivative coefficients (backward recurrence, d_0 halved at the end):
//   d_{k-1} = d_{k+1} + 2k·c_k
//
// Primitive coefficients:
//   a_1 = c_0 - c_2/2
//   a_k = (c_{k-1} - c_{k+1}) / 2k,   k ≥ 2

#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevSum {
    polysum: PolySum,
    domain: Domain,
}

impl ChebyshevSum {
    pub fn new(degree: usize, xmin: f64, xmax: f64) -> Result<ChebyshevSum, PolynomialError> {
        Ok(ChebyshevSum {
            polysum: PolySum::new(degree),
            domain: Domain::new(xmin, xmax)?,
        })
    }

    pub fn from_pars(
        pars: impl IntoIterator<Item = f64>,
        xmin: f64,
        xmax: f64,
    ) -> Result<ChebyshevSum, PolynomialError> {
        Ok(ChebyshevSum {
            polysum: PolySum::from_pars(pars.into_iter().collect()),
            domain: Domain::new(xmin, xmax)?,
        })
    }

    pub fn x(&self, t: f64) -> f64 {
        self.domain.x(t)
    }

    pub fn t(&self, x: f64) -> f64 {
        self.domain.t(x)
    }

    /// Value at x (Clenshaw), zero outside the domain.
    pub fn evaluate(&self, x: f64) -> f64 {
        if !self.domain.contains(x) {
            return 0.0;
        }
        Basis::Chebyshev.clenshaw(self.polysum.pars(), self.t(x))
    }

    pub fn derivative(&self, x: f64) -> f64 {
        if !self.domain.contains(x) || self.degree() == 0 {
            return 0.0;
        }
        let d = derivative_pars(self.polysum.pars());
        Basis::Chebyshev.clenshaw(&d, self.t(x)) * self.domain.dt_dx()
    }

    pub fn derivative_poly(&self) -> ChebyshevSum {
        let mut d = derivative_pars(self.polysum.pars());
        let dt_dx = self.domain.dt_dx();
        d.iter_mut().for_each(|p| *p *= dt_dx);
        ChebyshevSum { polysum: PolySum::from_pars(d), domain: self.domain }
    }

    /// Primitive of degree N+1 with value `c` at xmin.
    pub fn indefinite_integral(&self, c: f64) -> ChebyshevSum {
        let mut a = integral_pars(self.polysum.pars());
        let dx_dt = self.domain.dx_dt();
        a.iter_mut().for_each(|p| *p *= dx_dt);
        // T_k(-1) = (-1)^k
        let at_xmin: f64 = a
            .iter()
            .enumerate()
            .map(|(k, &p)| if k % 2 == 0 { p } else { -p })
            .sum();
        a[0] = c - at_xmin;
        ChebyshevSum { polysum: PolySum::from_pars(a), domain: self.domain }
    }

    /// ∫_{-1}^{1} T_k dt = 2/(1 - k²) for even k, zero for odd k.
    pub fn integral(&self) -> f64 {
        let s: f64 = self
            .polysum
            .pars()
            .iter()
            .enumerate()
            .step_by(2)
            .map(|(k, &p)| {
                let kf = k as f64;
                2.0 * p / (1.0 - kf * kf)
            })
            .sum();
        s * self.domain.dx_dt()
    }

    /// ∫ over [low, high] clamped to the domain; reversed bounds flip the sign.
    pub fn integral_range(&self, low: f64, high: f64) -> f64 {
        if low > high {
            return -self.integral_range(high, low);
        }
        match self.domain.clamp(low, high) {
            None => 0.0,
            Some((a, b)) if a == self.xmin() && b == self.xmax() => self.integral(),
            Some((a, b)) => {
                let primitive = integral_pars(self.polysum.pars());
                let fb = Basis::Chebyshev.clenshaw(&primitive, self.t(b));
                let fa = Basis::Chebyshev.clenshaw(&primitive, self.t(a));
                (fb - fa) * self.domain.dx_dt()
            }
        }
    }
}

fn derivative_pars(pars: &[f64]) -> Vec<f64> {
    let n = pars.len() - 1;
    if n == 0 {
        return vec![0.0];
    }
    let mut d = vec![0.0; n + 2];
    for k in (1..=n).rev() {
        d[k - 1] = d[k + 1] + 2.0 * k as f64 * pars[k];
    }
    d[0] *= 0.5;
    d.truncate(n);
    d
}

fn integral_pars(pars: &[f64]) -> Vec<f64> {
    let n = pars.len();
    let c = |k: usize| pars.get(k).copied().unwrap_or(0.0);
    let mut a = vec![0.0; n + 1];
    for k in 1..=n {
        a[k] = if k == 1 {
            c(0) - 0.5 * c(2)
        } else {
            (c(k - 1) - c(k + 1)) / (2 * k) as f64
        };
    }
    a
}

impl_polysum_common!(ChebyshevSum);

impl PolynomialSum for ChebyshevSum {
    const BASIS: Basis = Basis::Chebyshev;

    fn polysum(&self) -> &PolySum {
        &self.polysum
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn from_parts(polysum: PolySum, domain: Domain) -> ChebyshevSum {
        ChebyshevSum { polysum, domain }
    }

    fn t(&self, x: f64) -> f64 {
        self.domain.t(x)
    }
}

impl<P: PolynomialSum> From<&P> for ChebyshevSum {
    fn from(poly: &P) -> ChebyshevSum {
        poly.to_basis()
    }
}

impl Curve for ChebyshevSum {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        ChebyshevSum::derivative(self, x)
    }
}

impl CurveIntegration for ChebyshevSum {
    fn integral(&self, a: f64, b: f64) -> f64 {
        self.integral_range(a, b)
    }
}
