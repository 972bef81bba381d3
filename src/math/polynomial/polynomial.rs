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

// Polynomial - monomial form
//
//   f(x) = Σ p_k·t^k,   t = (2x - xmax - xmin) / (xmax - xmin)
//
// Zero outside [xmin, xmax].

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    polysum: PolySum,
    domain: Domain,
}

impl Polynomial {
    /// Zero polynomial of the given degree.
    pub fn new(degree: usize, xmin: f64, xmax: f64) -> Result<Polynomial, PolynomialError> {
        Ok(Polynomial {
            polysum: PolySum::new(degree),
            domain: Domain::new(xmin, xmax)?,
        })
    }

    pub fn from_pars(
        pars: impl IntoIterator<Item = f64>,
        xmin: f64,
        xmax: f64,
    ) -> Result<Polynomial, PolynomialError> {
        Ok(Polynomial {
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

    /// Value at x, zero outside the domain.
    pub fn evaluate(&self, x: f64) -> f64 {
        if !self.domain.contains(x) {
            return 0.0;
        }
        Basis::Monomial.clenshaw(self.polysum.pars(), self.t(x))
    }

    /// df/dx at x, zero outside the domain.
    pub fn derivative(&self, x: f64) -> f64 {
        if !self.domain.contains(x) || self.degree() == 0 {
            return 0.0;
        }
        let d = derivative_pars(self.polysum.pars());
        Basis::Monomial.clenshaw(&d, self.t(x)) * self.domain.dt_dx()
    }

    /// df/dx as a polynomial on the same domain.
    pub fn derivative_poly(&self) -> Polynomial {
        let mut d = derivative_pars(self.polysum.pars());
        let dt_dx = self.domain.dt_dx();
        d.iter_mut().for_each(|p| *p *= dt_dx);
        Polynomial { polysum: PolySum::from_pars(d), domain: self.domain }
    }

    /// Primitive of degree N+1 with value `c` at xmin.
    pub fn indefinite_integral(&self, c: f64) -> Polynomial {
        let mut a = integral_pars(self.polysum.pars());
        let dx_dt = self.domain.dx_dt();
        a.iter_mut().for_each(|p| *p *= dx_dt);
        a[0] = c - Basis::Monomial.clenshaw(&a, -1.0);
        Polynomial { polysum: PolySum::from_pars(a), domain: self.domain }
    }

    /// ∫ over [xmin, xmax]: only even powers contribute, ∫t^k = 2/(k+1).
    pub fn integral(&self) -> f64 {
        let s: f64 = self
            .polysum
            .pars()
            .iter()
            .enumerate()
            .step_by(2)
            .map(|(k, &p)| 2.0 * p / (k + 1) as f64)
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
                let fb = Basis::Monomial.clenshaw(&primitive, self.t(b));
                let fa = Basis::Monomial.clenshaw(&primitive, self.t(a));
                (fb - fa) * self.domain.dx_dt()
            }
        }
    }
}

/// d/dt: d_k = (k+1)·c_{k+1}
fn derivative_pars(pars: &[f64]) -> Vec<f64> {
    if pars.len() <= 1 {
        return vec![0.0];
    }
    pars.iter()
        .enumerate()
        .skip(1)
        .map(|(k, &c)| k as f64 * c)
        .collect()
}

/// ∫dt: a_{k+1} = c_k/(k+1), a_0 = 0
fn integral_pars(pars: &[f64]) -> Vec<f64> {
    let mut a = Vec::with_capacity(pars.len() + 1);
    a.push(0.0);
    a.extend(pars.iter().enumerate().map(|(k, &c)| c / (k + 1) as f64));
    a
}

impl_polysum_common!(Polynomial);

impl PolynomialSum for Polynomial {
    const BASIS: Basis = Basis::Monomial;

    fn polysum(&self) -> &PolySum {
        &self.polysum
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn from_parts(polysum: PolySum, domain: Domain) -> Polynomial {
        Polynomial { polysum, domain }
    }

    fn t(&self, x: f64) -> f64 {
        self.domain.t(x)
    }
}

impl<P: PolynomialSum> From<&P> for Polynomial {
    fn from(poly: &P) -> Polynomial {
        poly.to_basis()
    }
}

impl Curve for Polynomial {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        Polynomial::derivative(self, x)
    }
}

impl CurveIntegration for Polynomial {
    fn integral(&self, a: f64, b: f64) -> f64 {
        self.integral_range(a, b)
    }
}
