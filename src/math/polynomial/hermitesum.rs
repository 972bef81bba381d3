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

// HermiteSum - probabilist Hermite polynomials He_k
//
//   f(x) = Σ p_k·He_k(t),   t = scale·(2x - xmin - xmax),   scale = 2/(xmax - xmin)
//
// so t runs over [-2, 2] and dt/dx = 2·scale.
//
//   He'_k = k·He_{k-1}       ∫He_k = He_{k+1}/(k+1)

#[derive(Debug, Clone, PartialEq)]
pub struct HermiteSum {
    polysum: PolySum,
    domain: Domain,
    scale: f64,
}

fn scale_of(domain: &Domain) -> f64 {
    2.0 / domain.width()
}

impl HermiteSum {
    pub fn new(degree: usize, xmin: f64, xmax: f64) -> Result<HermiteSum, PolynomialError> {
        let domain = Domain::new(xmin, xmax)?;
        Ok(HermiteSum {
            polysum: PolySum::new(degree),
            domain,
            scale: scale_of(&domain),
        })
    }

    pub fn from_pars(
        pars: impl IntoIterator<Item = f64>,
        xmin: f64,
        xmax: f64,
    ) -> Result<HermiteSum, PolynomialError> {
        let domain = Domain::new(xmin, xmax)?;
        Ok(HermiteSum {
            polysum: PolySum::from_pars(pars.into_iter().collect()),
            domain,
            scale: scale_of(&domain),
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn x(&self, t: f64) -> f64 {
        0.5 * (t / self.scale + self.domain.xmin() + self.domain.xmax())
    }

    pub fn t(&self, x: f64) -> f64 {
        self.scale * (2.0 * x - self.domain.xmin() - self.domain.xmax())
    }

    fn dt_dx(&self) -> f64 {
        2.0 * self.scale
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        if !self.domain.contains(x) {
            return 0.0;
        }
        Basis::Hermite.clenshaw(self.polysum.pars(), self.t(x))
    }

    pub fn derivative(&self, x: f64) -> f64 {
        if !self.domain.contains(x) || self.degree() == 0 {
            return 0.0;
        }
        let d = derivative_pars(self.polysum.pars());
        Basis::Hermite.clenshaw(&d, self.t(x)) * self.dt_dx()
    }

    pub fn derivative_poly(&self) -> HermiteSum {
        let mut d = derivative_pars(self.polysum.pars());
        let dt_dx = self.dt_dx();
        d.iter_mut().for_each(|p| *p *= dt_dx);
        HermiteSum::from_parts(PolySum::from_pars(d), self.domain)
    }

    /// Primitive of degree N+1 with value `c` at xmin.
    pub fn indefinite_integral(&self, c: f64) -> HermiteSum {
        let mut a = integral_pars(self.polysum.pars());
        let dx_dt = 1.0 / self.dt_dx();
        a.iter_mut().for_each(|p| *p *= dx_dt);
        a[0] = c - Basis::Hermite.clenshaw(&a, self.t(self.domain.xmin()));
        HermiteSum::from_parts(PolySum::from_pars(a), self.domain)
    }

    pub fn integral(&self) -> f64 {
        self.primitive_difference(self.domain.xmin(), self.domain.xmax())
    }

    pub fn integral_range(&self, low: f64, high: f64) -> f64 {
        if low > high {
            return -self.integral_range(high, low);
        }
        match self.domain.clamp(low, high) {
            None => 0.0,
            Some((a, b)) => self.primitive_difference(a, b),
        }
    }

    fn primitive_difference(&self, a: f64, b: f64) -> f64 {
        let primitive = integral_pars(self.polysum.pars());
        let fb = Basis::Hermite.clenshaw(&primitive, self.t(b));
        let fa = Basis::Hermite.clenshaw(&primitive, self.t(a));
        (fb - fa) / self.dt_dx()
    }
}

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

fn integral_pars(pars: &[f64]) -> Vec<f64> {
    let mut a = Vec::with_capacity(pars.len() + 1);
    a.push(0.0);
    a.extend(pars.iter().enumerate().map(|(k, &c)| c / (k + 1) as f64));
    a
}

impl_polysum_common!(HermiteSum);

impl PolynomialSum for HermiteSum {
    const BASIS: Basis = Basis::Hermite;

    fn polysum(&self) -> &PolySum {
        &self.polysum
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn from_parts(polysum: PolySum, domain: Domain) -> HermiteSum {
        HermiteSum { polysum, domain, scale: scale_of(&domain) }
    }

    fn t(&self, x: f64) -> f64 {
        HermiteSum::t(self, x)
    }
}

impl<P: PolynomialSum> From<&P> for HermiteSum {
    fn from(poly: &P) -> HermiteSum {
        poly.to_basis()
    }
}

impl Curve for HermiteSum {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        HermiteSum::derivative(self, x)
    }
}

impl CurveIntegration for HermiteSum {
    fn integral(&self, a: f64, b: f64) -> f64 {
        self.integral_range(a, b)
    }
}
