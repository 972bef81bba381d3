use crate::math::polynomial::basis::Basis;
use crate::math::polynomial::chebyshevsum::ChebyshevSum;
use crate::math::polynomial::conversion::{
    affine_transform,
    convert_pars
};
use crate::math::polynomial::domain::Domain;
use crate::math::polynomial::hermitesum::HermiteSum;
use crate::math::polynomial::legendresum::LegendreSum;
use crate::math::polynomial::polynomial::Polynomial;
use crate::math::polynomial::polynomialerror::PolynomialError;
use crate::math::polynomial::polynomialsum::PolynomialSum;
use crate::math::polynomial::polysum::PolySum;

/// A polynomial in Bernstein form on [xmin, xmax]:
///
///   B(x) = Σ b_j·C(n,j)·s^j·(1-s)^(n-j),   s = (x - xmin)/(xmax - xmin)
///
/// Only what the conversions below need is required of an implementor.
pub trait BernsteinBasis {
    fn degree(&self) -> usize;

    fn xmin(&self) -> f64;

    fn xmax(&self) -> f64;

    /// b_k, zero for k > degree
    fn par(&self, k: usize) -> f64;
}

pub(crate) fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

fn domain_of<B: BernsteinBasis + ?Sized>(bernstein: &B) -> Result<Domain, PolynomialError> {
    Domain::new(bernstein.xmin(), bernstein.xmax())
}

/// Monomial coefficients in the normalized variable u ∈ [-1, 1].
///
/// The Bernstein form is first expanded in powers of s ∈ [0, 1],
///   a_m = Σ_{j≤m} b_j·C(n,j)·C(n-j,m-j)·(-1)^(m-j),
/// then s = (1 + u)/2 is substituted.
fn monomial_pars<B: BernsteinBasis + ?Sized>(bernstein: &B) -> Vec<f64> {
    let n = bernstein.degree();
    let in_s: Vec<f64> = (0..=n)
        .map(|m| {
            (0..=m)
                .map(|j| {
                    let sign = if (m - j) % 2 == 0 { 1.0 } else { -1.0 };
                    sign * bernstein.par(j) * binomial(n, j) * binomial(n - j, m - j)
                })
                .sum()
        })
        .collect();
    affine_transform(&in_s, 0.5, 0.5)
}

/// Legendre coefficients through the moment identity
///
///   c_k = (2k+1)/(n+k+1) · Σ_j b_j · Σ_{i≤k} (-1)^(k+i)·C(k,i)²·C(n,j)/C(n+k,i+j)
fn legendre_pars<B: BernsteinBasis + ?Sized>(bernstein: &B) -> Vec<f64> {
    let n = bernstein.degree();
    (0..=n)
        .map(|k| {
            let inner: f64 = (0..=n)
                .map(|j| {
                    let b = bernstein.par(j);
                    if b == 0.0 {
                        return 0.0;
                    }
                    let weight: f64 = (0..=k)
                        .map(|i| {
                            let sign = if (k + i) % 2 == 0 { 1.0 } else { -1.0 };
                            let cki = binomial(k, i);
                            sign * cki * cki * binomial(n, j) / binomial(n + k, i + j)
                        })
                        .sum();
                    b * weight
                })
                .sum();
            (2 * k + 1) as f64 / (n + k + 1) as f64 * inner
        })
        .collect()
}

impl Polynomial {
    pub fn from_bernstein<B: BernsteinBasis + ?Sized>(
        bernstein: &B,
    ) -> Result<Polynomial, PolynomialError> {
        let domain = domain_of(bernstein)?;
        Ok(Polynomial::from_parts(
            PolySum::from_pars(monomial_pars(bernstein)),
            domain,
        ))
    }
}

impl LegendreSum {
    pub fn from_bernstein<B: BernsteinBasis + ?Sized>(
        bernstein: &B,
    ) -> Result<LegendreSum, PolynomialError> {
        let domain = domain_of(bernstein)?;
        Ok(LegendreSum::from_parts(
            PolySum::from_pars(legendre_pars(bernstein)),
            domain,
        ))
    }
}

impl ChebyshevSum {
    /// Goes through the monomial basis.
    pub fn from_bernstein<B: BernsteinBasis + ?Sized>(
        bernstein: &B,
    ) -> Result<ChebyshevSum, PolynomialError> {
        let domain = domain_of(bernstein)?;
        log::debug!(
            "Bernstein -> {} conversion chained through the monomial basis",
            Basis::Chebyshev
        );
        let pars = convert_pars(Basis::Monomial, Basis::Chebyshev, &monomial_pars(bernstein));
        Ok(ChebyshevSum::from_parts(PolySum::from_pars(pars), domain))
    }
}

impl HermiteSum {
    /// Goes through the monomial basis.
    pub fn from_bernstein<B: BernsteinBasis + ?Sized>(
        bernstein: &B,
    ) -> Result<HermiteSum, PolynomialError> {
        let domain = domain_of(bernstein)?;
        log::debug!(
            "Bernstein -> {} conversion chained through the monomial basis",
            Basis::Hermite
        );
        let pars = convert_pars(Basis::Monomial, Basis::Hermite, &monomial_pars(bernstein));
        Ok(HermiteSum::from_parts(PolySum::from_pars(pars), domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Coefficients {
        pars: Vec<f64>,
        xmin: f64,
        xmax: f64,
    }

    impl BernsteinBasis for Coefficients {
        fn degree(&self) -> usize {
            self.pars.len() - 1
        }

        fn xmin(&self) -> f64 {
            self.xmin
        }

        fn xmax(&self) -> f64 {
            self.xmax
        }

        fn par(&self, k: usize) -> f64 {
            self.pars.get(k).copied().unwrap_or(0.0)
        }
    }

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(5, 0), 1.0);
        assert_eq!(binomial(5, 2), 10.0);
        assert_eq!(binomial(6, 3), 20.0);
        assert_eq!(binomial(3, 4), 0.0);
    }

    #[test]
    fn linear_bernstein_to_monomial() {
        // b0·(1-s) + b1·s with s = (1+u)/2
        let b = Coefficients { pars: vec![1.0, 3.0], xmin: -1.0, xmax: 1.0 };
        let p = Polynomial::from_bernstein(&b).unwrap();
        assert!((p.par(0) - 2.0).abs() < 1e-15);
        assert!((p.par(1) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn linear_bernstein_to_legendre() {
        let b = Coefficients { pars: vec![1.0, 3.0], xmin: 0.0, xmax: 2.0 };
        let l = LegendreSum::from_bernstein(&b).unwrap();
        assert!((l.par(0) - 2.0).abs() < 1e-15);
        assert!((l.par(1) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn degenerate_domain_is_rejected() {
        let b = Coefficients { pars: vec![1.0], xmin: 1.0, xmax: 1.0 };
        assert!(matches!(
            Polynomial::from_bernstein(&b),
            Err(PolynomialError::InvalidDomain { .. })
        ));
    }
}
