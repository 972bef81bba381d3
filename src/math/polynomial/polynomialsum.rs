use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::curve::{
    Curve,
    CurveIntegration
};
use crate::math::polynomial::basis::Basis;
use crate::math::polynomial::chebyshevsum::ChebyshevSum;
use crate::math::polynomial::conversion::convert_pars;
use crate::math::polynomial::domain::Domain;
use crate::math::polynomial::hermitesum::HermiteSum;
use crate::math::polynomial::legendresum::LegendreSum;
use crate::math::polynomial::polynomial::Polynomial;
use crate::math::polynomial::polynomialerror::PolynomialError;
use crate::math::polynomial::polysum::PolySum;

/// Common view of the four domain-mapped sums, used by generic code
/// (basis conversion, exponential integration).
pub trait PolynomialSum: Curve + CurveIntegration + Clone {
    const BASIS: Basis;

    fn polysum(&self) -> &PolySum;

    fn domain(&self) -> &Domain;

    /// Assemble from coefficients already expressed in this basis.
    fn from_parts(polysum: PolySum, domain: Domain) -> Self;

    /// x → canonical variable of the basis
    fn t(&self, x: f64) -> f64;

    /// Re-express the same function on the same domain in basis `B`.
    fn to_basis<B: PolynomialSum>(&self) -> B {
        let pars = convert_pars(Self::BASIS, B::BASIS, self.polysum().pars());
        B::from_parts(PolySum::from_pars(pars), *self.domain())
    }
}

// BasisPolynomial

/// Serialized form: `{ "basis": ..., "pars": [...], "xmin": ..., "xmax": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolynomialRecord {
    basis: Basis,
    #[serde(default)]
    pars: Vec<f64>,
    #[serde(default = "default_xmin")]
    xmin: f64,
    #[serde(default = "default_xmax")]
    xmax: f64,
}

fn default_xmin() -> f64 {
    -1.0
}

fn default_xmax() -> f64 {
    1.0
}

/// Any of the four sums, tagged by its basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolynomialRecord", into = "PolynomialRecord")]
pub enum BasisPolynomial {
    Monomial(Polynomial),
    Chebyshev(ChebyshevSum),
    Legendre(LegendreSum),
    Hermite(HermiteSum),
}

impl BasisPolynomial {
    pub fn new(
        basis: Basis,
        pars: Vec<f64>,
        xmin: f64,
        xmax: f64,
    ) -> Result<BasisPolynomial, PolynomialError> {
        let poly = match basis {
            Basis::Monomial  => BasisPolynomial::Monomial(Polynomial::from_pars(pars, xmin, xmax)?),
            Basis::Chebyshev => BasisPolynomial::Chebyshev(ChebyshevSum::from_pars(pars, xmin, xmax)?),
            Basis::Legendre  => BasisPolynomial::Legendre(LegendreSum::from_pars(pars, xmin, xmax)?),
            Basis::Hermite   => BasisPolynomial::Hermite(HermiteSum::from_pars(pars, xmin, xmax)?),
        };
        Ok(poly)
    }

    pub fn basis(&self) -> Basis {
        match self {
            BasisPolynomial::Monomial(_)  => Basis::Monomial,
            BasisPolynomial::Chebyshev(_) => Basis::Chebyshev,
            BasisPolynomial::Legendre(_)  => Basis::Legendre,
            BasisPolynomial::Hermite(_)   => Basis::Hermite,
        }
    }

    pub fn pars(&self) -> &[f64] {
        match self {
            BasisPolynomial::Monomial(p)  => p.pars(),
            BasisPolynomial::Chebyshev(p) => p.pars(),
            BasisPolynomial::Legendre(p)  => p.pars(),
            BasisPolynomial::Hermite(p)   => p.pars(),
        }
    }

    pub fn domain(&self) -> Domain {
        match self {
            BasisPolynomial::Monomial(p)  => *PolynomialSum::domain(p),
            BasisPolynomial::Chebyshev(p) => *PolynomialSum::domain(p),
            BasisPolynomial::Legendre(p)  => *PolynomialSum::domain(p),
            BasisPolynomial::Hermite(p)   => *PolynomialSum::domain(p),
        }
    }

    pub fn degree(&self) -> usize {
        self.pars().len() - 1
    }

    /// Same function in the requested basis.
    pub fn convert(&self, basis: Basis) -> BasisPolynomial {
        let polysum = PolySum::from_pars(convert_pars(self.basis(), basis, self.pars()));
        let domain = self.domain();
        match basis {
            Basis::Monomial  => BasisPolynomial::Monomial(Polynomial::from_parts(polysum, domain)),
            Basis::Chebyshev => BasisPolynomial::Chebyshev(ChebyshevSum::from_parts(polysum, domain)),
            Basis::Legendre  => BasisPolynomial::Legendre(LegendreSum::from_parts(polysum, domain)),
            Basis::Hermite   => BasisPolynomial::Hermite(HermiteSum::from_parts(polysum, domain)),
        }
    }

    pub fn to_monomial(&self) -> Polynomial {
        let pars = convert_pars(self.basis(), Basis::Monomial, self.pars());
        Polynomial::from_parts(PolySum::from_pars(pars), self.domain())
    }
}

impl Curve for BasisPolynomial {
    fn value(&self, x: f64) -> f64 {
        match self {
            BasisPolynomial::Monomial(p)  => p.value(x),
            BasisPolynomial::Chebyshev(p) => p.value(x),
            BasisPolynomial::Legendre(p)  => p.value(x),
            BasisPolynomial::Hermite(p)   => p.value(x),
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        match self {
            BasisPolynomial::Monomial(p)  => Curve::derivative(p, x),
            BasisPolynomial::Chebyshev(p) => Curve::derivative(p, x),
            BasisPolynomial::Legendre(p)  => Curve::derivative(p, x),
            BasisPolynomial::Hermite(p)   => Curve::derivative(p, x),
        }
    }
}

impl CurveIntegration for BasisPolynomial {
    fn integral(&self, a: f64, b: f64) -> f64 {
        match self {
            BasisPolynomial::Monomial(p)  => p.integral_range(a, b),
            BasisPolynomial::Chebyshev(p) => p.integral_range(a, b),
            BasisPolynomial::Legendre(p)  => p.integral_range(a, b),
            BasisPolynomial::Hermite(p)   => p.integral_range(a, b),
        }
    }
}

impl TryFrom<PolynomialRecord> for BasisPolynomial {
    type Error = PolynomialError;

    fn try_from(record: PolynomialRecord) -> Result<BasisPolynomial, PolynomialError> {
        BasisPolynomial::new(record.basis, record.pars, record.xmin, record.xmax)
    }
}

impl From<BasisPolynomial> for PolynomialRecord {
    fn from(poly: BasisPolynomial) -> PolynomialRecord {
        let domain = poly.domain();
        PolynomialRecord {
            basis: poly.basis(),
            pars: poly.pars().to_vec(),
            xmin: domain.xmin(),
            xmax: domain.xmax(),
        }
    }
}

impl Display for BasisPolynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BasisPolynomial::Monomial(p)  => Display::fmt(p, f),
            BasisPolynomial::Chebyshev(p) => Display::fmt(p, f),
            BasisPolynomial::Legendre(p)  => Display::fmt(p, f),
            BasisPolynomial::Hermite(p)   => Display::fmt(p, f),
        }
    }
}
