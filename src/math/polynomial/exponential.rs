use serde::{
    Deserialize,
    Serialize
};

use crate::math::polynomial::basis::Basis;
use crate::math::polynomial::bernstein::BernsteinBasis;
use crate::math::polynomial::conversion::convert_pars;
use crate::math::polynomial::polynomial::Polynomial;
use crate::math::polynomial::polynomialerror::PolynomialError;
use crate::math::polynomial::polynomialsum::{
    BasisPolynomial,
    PolynomialSum
};

// ∫ P(x)·e^(τx) dx
//
// With x = γt + δ, γ = (xmax - xmin)/2, δ = (xmax + xmin)/2 and P = Σ p_k t^k:
//
//   ∫ P(x)·e^(τx) dx = γ · Σ p_k ∫ t^k·e^(σt + τδ) dt,     σ = τγ
//
// For |σ| ≥ series_threshold integration by parts:
//   I_k = [t^k·E(t)/σ] - (k/σ)·I_{k-1},   E(t) = e^(σt + τδ) = e^(τx)
// run forward while k ≤ |σ| and backward (Miller) for k > |σ|, where the
// forward direction amplifies rounding by k/|σ| per step.
//
// Otherwise the forward recurrence cancels badly and E is expanded instead:
//   I_k = e^(τδ) · Σ_m σ^m/m! · (tb^(k+m+1) - ta^(k+m+1))/(k+m+1)

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpIntegration {
    pub series_threshold: f64,
    pub series_tolerance: f64,
    pub max_series_terms: usize,
}

impl Default for ExpIntegration {
    fn default() -> Self {
        ExpIntegration {
            series_threshold: 1.0,
            series_tolerance: 1e-16,
            max_series_terms: 200,
        }
    }
}

impl ExpIntegration {
    /// ∫_a^b P(x)·e^(τx) dx, bounds clamped to the domain of `poly`.
    pub fn integrate<P: PolynomialSum>(&self, poly: &P, tau: f64, a: f64, b: f64) -> f64 {
        if a > b {
            return -self.integrate(poly, tau, b, a);
        }
        let domain = *poly.domain();
        let Some((low, high)) = domain.clamp(a, b) else {
            return 0.0;
        };
        if low == high {
            return 0.0;
        }
        if tau == 0.0 {
            return poly.integral(low, high);
        }

        let pars = convert_pars(P::BASIS, Basis::Monomial, poly.polysum().pars());
        let gamma = 0.5 * domain.width();
        let delta = 0.5 * (domain.xmin() + domain.xmax());
        let sigma = tau * gamma;
        let ta = domain.t(low);
        let tb = domain.t(high);

        let sum = if sigma.abs() >= self.series_threshold {
            by_parts(&pars, sigma, tau * delta, ta, tb)
        } else {
            log::debug!(
                "exponential integral with σ = {:e} below {}, using series expansion",
                sigma,
                self.series_threshold
            );
            (tau * delta).exp() * self.series(&pars, sigma, ta, tb)
        };
        gamma * sum
    }

    /// ∫ P(x)·e^(τx) dx over the whole domain of `poly`.
    pub fn integrate_domain<P: PolynomialSum>(&self, poly: &P, tau: f64) -> f64 {
        let domain = poly.domain();
        self.integrate(poly, tau, domain.xmin(), domain.xmax())
    }

    pub fn integrate_basis(&self, poly: &BasisPolynomial, tau: f64, a: f64, b: f64) -> f64 {
        match poly {
            BasisPolynomial::Monomial(p)  => self.integrate(p, tau, a, b),
            BasisPolynomial::Chebyshev(p) => self.integrate(p, tau, a, b),
            BasisPolynomial::Legendre(p)  => self.integrate(p, tau, a, b),
            BasisPolynomial::Hermite(p)   => self.integrate(p, tau, a, b),
        }
    }

    pub fn integrate_bernstein<B: BernsteinBasis + ?Sized>(
        &self,
        bernstein: &B,
        tau: f64,
        a: f64,
        b: f64,
    ) -> Result<f64, PolynomialError> {
        let poly = Polynomial::from_bernstein(bernstein)?;
        Ok(self.integrate(&poly, tau, a, b))
    }

    fn series(&self, pars: &[f64], sigma: f64, ta: f64, tb: f64) -> f64 {
        let mut total = 0.0;
        for (k, &p) in pars.iter().enumerate() {
            if p == 0.0 {
                continue;
            }
            let mut coef = 1.0;
            let mut pa = ta.powi(k as i32 + 1);
            let mut pb = tb.powi(k as i32 + 1);
            let mut term_sum = 0.0;
            let mut converged = false;
            for m in 0..self.max_series_terms {
                let order = (k + m + 1) as f64;
                term_sum += coef * (pb - pa) / order;
                // odd orders cancel exactly on symmetric bounds
                let envelope = coef.abs() * (pa.abs() + pb.abs()) / order;
                if envelope <= self.series_tolerance * term_sum.abs() || envelope == 0.0 {
                    converged = true;
                    break;
                }
                coef *= sigma / (m + 1) as f64;
                pa *= ta;
                pb *= tb;
            }
            if !converged {
                log::warn!(
                    "series for t^{} e^(σt), σ = {:e}, not converged after {} terms",
                    k,
                    sigma,
                    self.max_series_terms
                );
            }
            total += p * term_sum;
        }
        total
    }
}

fn by_parts(pars: &[f64], sigma: f64, shift: f64, ta: f64, tb: f64) -> f64 {
    let n = pars.len() - 1;
    let ea = (sigma * ta + shift).exp();
    let eb = (sigma * tb + shift).exp();
    // forward recurrence up to k = |σ|, backward above it
    let split = (sigma.abs().floor() as usize).min(n);

    let mut ik = (eb - ea) / sigma;
    let mut total = pars[0] * ik;
    let mut pa = 1.0;
    let mut pb = 1.0;
    for (k, &p) in pars.iter().enumerate().take(split + 1).skip(1) {
        pa *= ta;
        pb *= tb;
        ik = (pb * eb - pa * ea) / sigma - k as f64 / sigma * ik;
        total += p * ik;
    }
    if split == n {
        return total;
    }

    // I_{k-1} = ([t^k·E] - σ·I_k)/k, started from I_top = 0; the start error
    // is damped by |σ|/k < 1 at every step
    let top = n + 2 * sigma.abs().ceil() as usize + 60;
    let mut ik = 0.0;
    for k in ((split + 2)..=top).rev() {
        let boundary = tb.powi(k as i32) * eb - ta.powi(k as i32) * ea;
        ik = (boundary - sigma * ik) / k as f64;
        if k - 1 <= n {
            total += pars[k - 1] * ik;
        }
    }
    total
}

/// ∫_a^b P(x)·e^(τx) dx with default settings.
pub fn integrate_exp<P: PolynomialSum>(poly: &P, tau: f64, a: f64, b: f64) -> f64 {
    ExpIntegration::default().integrate(poly, tau, a, b)
}

/// ∫ P(x)·e^(τx) dx over the domain of `poly`, default settings.
pub fn integrate_exp_domain<P: PolynomialSum>(poly: &P, tau: f64) -> f64 {
    ExpIntegration::default().integrate_domain(poly, tau)
}

pub fn integrate_bernstein_exp<B: BernsteinBasis + ?Sized>(
    bernstein: &B,
    tau: f64,
    a: f64,
    b: f64,
) -> Result<f64, PolynomialError> {
    ExpIntegration::default().integrate_bernstein(bernstein, tau, a, b)
}
