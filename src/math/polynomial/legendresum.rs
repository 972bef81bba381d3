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

// LegendreSum
//
//   f(x) = Σ p_k·P_k(t),   t = (2x - xmax - xmin) / (xmax - xmin)
//
// From P'_{k+1} - P'_{k-1} = (2k+1)·P_k:
//   derivative  d_k = (2k+1)·(c_{k+1} + d_{k+2}/(2k+5))
//   primitive   a_k = c_{k-1}/(2k-1) - c_{k+1}/(2k+3),   k ≥ 1

#[derive(Debug, Clone, PartialEq)]
pub struct LegendreSum {
    polysum: PolySum,
    domain: Domain,
}

impl LegendreSum {
    pub fn new(degree: usize, xmin: f64, xmax: f64) -> Result<LegendreSum, PolynomialError> {
        Ok(LegendreSum {
            polysum: PolySum::new(degree),
            domain: Domain::new(xmin, xmax)?,
        })
    }

    pub fn from_pars(
        pars: impl IntoIterator<Item = f64>,
        xmin: f64,
        xmax: f64,
    ) -> Result<LegendreSum, PolynomialError> {
        Ok(LegendreSum {
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

    pub fn evaluate(&self, x: f64) -> f64 {
        if !self.domain.contains(x) {
            return 0.0;
        }
        Basis::Legendre.clenshaw(self.polysum.pars(), self.t(x))
    }

    pub fn derivative(&self, x: f64) -> f64 {
        if !self.domain.contains(x) || self.degree() == 0 {
            return 0.0;
        }
        let d = derivative_pars(self.polysum.pars());
        Basis::Legendre.clenshaw(&d, self.t(x)) * self.domain.dt_dx()
    }

    pub fn derivative_poly(&self) -> LegendreSum {
        let mut d = derivative_pars(self.polysum.pars());
        let dt_dx = self.domain.dt_dx();
        d.iter_mut().for_each(|p| *p *= dt_dx);
        LegendreSum { polysum: PolySum::from_pars(d), domain: self.domain }
    }

    /// Primitive of degree N+1 with value `c` at xmin.
    pub fn indefinite_integral(&self, c: f64) -> LegendreSum {
        let mut a = integral_pars(self.polysum.pars());
        let dx_dt = self.domain.dx_dt();
        a.iter_mut().for_each(|p| *p *= dx_dt);
        // P_k(-1) = (-1)^k
        let at_xmin: f64 = a
            .iter()
            .enumerate()
            .map(|(k, &p)| if k % 2 == 0 { p } else { -p })
            .sum();
        a[0] = c - at_xmin;
        LegendreSum { polysum: PolySum::from_pars(a), domain: self.domain }
    }

    /// Orthogonality leaves only the P_0 term: 2·p_0 in t.
    pub fn integral(&self) -> f64 {
        2.0 * self.polysum.par(0) * self.domain.dx_dt()
    }

    pub fn integral_range(&self, low: f64, high: f64) -> f64 {
        if low > high {
            return -self.integral_range(high, low);
        }
        match self.domain.clamp(low, high) {
            None => 0.0,
            Some((a, b)) if a == self.xmin() && b == self.xmax() => self.integral(),
            Some((a, b)) => {
                let primitive = integral_pars(self.polysum.pars());
                let fb = Basis::Legendre.clenshaw(&primitive, self.t(b));
                let fa = Basis::Legendre.clenshaw(&primitive, self.t(a));
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
    for k in (0..n).rev() {
        let kf = k as f64;
        d[k] = (2.0 * kf + 1.0) * (pars[k + 1] + d[k + 2] / (2.0 * kf + 5.0));
    }
    d.truncate(n);
    d
}

fn integral_pars(pars: &[f64]) -> Vec<f64> {
    let n = pars.len();
    let c = |k: usize| pars.get(k).copied().unwrap_or(0.0);
    let mut a = vec![0.0; n + 1];
    for k in 1..=n {
        let kf = k as f64;
        a[k] = c(k - 1) / (2.0 * kf - 1.0) - c(k + 1) / (2.0 * kf + 3.0);
    }
    a
}

impl_polysum_common!(LegendreSum);

impl PolynomialSum for LegendreSum {
    const BASIS: Basis = Basis::Legendre;

    fn polysum(&self) -> &PolySum {
        &self.polysum
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn from_parts(polysum: PolySum, domain: Domain) -> LegendreSum {
        LegendreSum { polysum, domain }
    }

    fn t(&self, x: f64) -> f64 {
        self.domain.t(x)
    }
}

impl<P: PolynomialSum> From<&P> for LegendreSum {
    fn from(poly: &P) -> LegendreSum {
        poly.to_basis()
    }
}

impl Curve for LegendreSum {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        LegendreSum::derivative(self, x)
    }
}

impl CurveIntegration for LegendreSum {
    fn integral(&self, a: f64, b: f64) -> f64 {
        self.integral_range(a, b)
    }
}
