//! ∫ P(x)·e^(τx) dx against closed forms.
//!
//! Covers the integration-by-parts regime, the small-slope series regime,
//! their agreement where both apply, and every basis.

use approx::{
    assert_abs_diff_eq,
    assert_relative_eq
};

use polybasis::math::polynomial::basis::Basis;
use polybasis::math::polynomial::bernstein::BernsteinBasis;
use polybasis::math::polynomial::chebyshevsum::ChebyshevSum;
use polybasis::math::polynomial::exponential::{
    ExpIntegration,
    integrate_bernstein_exp,
    integrate_exp,
    integrate_exp_domain
};
use polybasis::math::polynomial::hermitesum::HermiteSum;
use polybasis::math::polynomial::legendresum::LegendreSum;
use polybasis::math::polynomial::polynomial::Polynomial;
use polybasis::math::polynomial::polynomialsum::BasisPolynomial;

/// ∫_0^1 x·e^(τx) dx
fn x_exp_on_unit(tau: f64) -> f64 {
    tau.exp() * (1.0 / tau - 1.0 / (tau * tau)) + 1.0 / (tau * tau)
}

/// x on [0, 1] in the monomial basis: t = 2x - 1
fn identity_on_unit() -> Polynomial {
    Polynomial::from_pars([0.5, 0.5], 0.0, 1.0).unwrap()
}

#[test]
fn test_by_parts_regime() {
    let p = identity_on_unit();
    for tau in [2.0, -3.0, 10.0] {
        assert_relative_eq!(integrate_exp_domain(&p, tau), x_exp_on_unit(tau), max_relative = 1e-13);
    }
}

#[test]
fn test_series_regime() {
    let p = identity_on_unit();
    for tau in [0.1, -0.5, 1.5] {
        assert_relative_eq!(integrate_exp_domain(&p, tau), x_exp_on_unit(tau), max_relative = 1e-13);
    }
}

#[test]
fn test_tiny_slope_has_no_cancellation() {
    // ∫_0^1 x(1 + τx + τ²x²/2 + ...) = 1/2 + τ/3 + τ²/8 + O(τ³)
    let p = identity_on_unit();
    let tau = 1e-7;
    let expected = 0.5 + tau / 3.0 + tau * tau / 8.0;
    assert_relative_eq!(integrate_exp_domain(&p, tau), expected, max_relative = 1e-14);
}

#[test]
fn test_zero_slope_is_plain_integral() {
    let c = ChebyshevSum::from_pars([1.0, 0.5, -0.25], 2.0, 6.0).unwrap();
    assert_relative_eq!(integrate_exp(&c, 0.0, 3.0, 5.0), c.integral_range(3.0, 5.0), epsilon = 1e-14);
}

#[test]
fn test_series_and_by_parts_agree() {
    let p = Polynomial::from_pars([0.3, -1.0, 0.8, 0.25], -1.0, 3.0).unwrap();
    let always_by_parts = ExpIntegration { series_threshold: 0.0, ..ExpIntegration::default() };
    let always_series = ExpIntegration { series_threshold: f64::INFINITY, ..ExpIntegration::default() };
    for tau in [-0.9, -0.2, 0.4, 0.7] {
        let a = always_by_parts.integrate(&p, tau, -0.5, 2.5);
        let b = always_series.integrate(&p, tau, -0.5, 2.5);
        assert_relative_eq!(a, b, max_relative = 1e-12);
    }
}

/// Series expansion only, used as reference for the high-degree cases.
fn series_reference() -> ExpIntegration {
    ExpIntegration {
        series_threshold: f64::INFINITY,
        max_series_terms: 400,
        ..ExpIntegration::default()
    }
}

fn power(k: usize) -> Polynomial {
    let mut pars = vec![0.0; k + 1];
    pars[k] = 1.0;
    Polynomial::from_pars(pars, -1.0, 1.0).unwrap()
}

#[test]
fn test_high_degree_moderate_slope() {
    // degree above |σ| with |σ| ≥ series_threshold, so integration by parts
    for (k, tau) in [(14, 1.0), (18, 1.0), (22, 1.0), (16, -2.0), (20, 2.5), (25, -1.5)] {
        let p = power(k);
        let value = integrate_exp_domain(&p, tau);
        let expected = series_reference().integrate_domain(&p, tau);
        if k % 2 == 0 {
            // t^k·e^(τt) is non-negative on [-1, 1]
            assert!(value > 0.0, "t^{} e^({}t): {}", k, tau, value);
        }
        assert_relative_eq!(value, expected, max_relative = 1e-12);
    }
}

#[test]
fn test_high_degree_mixed_polynomial() {
    let pars: Vec<f64> = (0..=20).map(|k| ((k * 5 + 2) % 9) as f64 / 9.0 - 0.4).collect();
    let c = ChebyshevSum::from_pars(pars, 1.0, 4.0).unwrap();
    for tau in [-1.7, 0.9, 2.0] {
        let value = integrate_exp(&c, tau, 1.2, 3.9);
        let expected = series_reference().integrate(&c, tau, 1.2, 3.9);
        assert_relative_eq!(value, expected, epsilon = 1e-12, max_relative = 1e-9);
    }
}

#[test]
fn test_every_basis_gives_same_integral() {
    let p = Polynomial::from_pars([0.3, -1.0, 0.8, 0.25, -0.1], 1.0, 5.0).unwrap();
    let c = ChebyshevSum::from(&p);
    let l = LegendreSum::from(&p);
    let h = HermiteSum::from(&p);
    for tau in [-1.3, -0.05, 0.3, 2.0] {
        let expected = integrate_exp(&p, tau, 1.5, 4.5);
        assert_relative_eq!(integrate_exp(&c, tau, 1.5, 4.5), expected, max_relative = 1e-12);
        assert_relative_eq!(integrate_exp(&l, tau, 1.5, 4.5), expected, max_relative = 1e-12);
        assert_relative_eq!(integrate_exp(&h, tau, 1.5, 4.5), expected, max_relative = 1e-12);

        let tagged = BasisPolynomial::new(Basis::Legendre, l.pars().to_vec(), 1.0, 5.0).unwrap();
        let settings = ExpIntegration::default();
        assert_relative_eq!(settings.integrate_basis(&tagged, tau, 1.5, 4.5), expected, max_relative = 1e-12);
    }
}

#[test]
fn test_quadratic_on_shifted_domain() {
    // ∫_2^4 x²·e^(-x) dx = [-(x² + 2x + 2)·e^(-x)]_2^4
    let primitive = |x: f64| -(x * x + 2.0 * x + 2.0) * (-x).exp();
    let expected = primitive(4.0) - primitive(2.0);
    // x = t + 3 on [2, 4]: x² = 9 + 6t + t²
    let p = Polynomial::from_pars([9.0, 6.0, 1.0], 2.0, 4.0).unwrap();
    assert_relative_eq!(integrate_exp_domain(&p, -1.0), expected, max_relative = 1e-13);
}

#[test]
fn test_bounds_are_clamped_and_oriented() {
    let p = identity_on_unit();
    let full = integrate_exp_domain(&p, 2.0);
    assert_relative_eq!(integrate_exp(&p, 2.0, -5.0, 5.0), full, max_relative = 1e-15);
    assert_relative_eq!(integrate_exp(&p, 2.0, 1.0, 0.0), -full, max_relative = 1e-15);
    assert_eq!(integrate_exp(&p, 2.0, 1.5, 3.0), 0.0);
    assert_abs_diff_eq!(integrate_exp(&p, 2.0, 0.5, 0.5), 0.0);
}

struct ConstantBernstein;

impl BernsteinBasis for ConstantBernstein {
    fn degree(&self) -> usize {
        3
    }

    fn xmin(&self) -> f64 {
        0.0
    }

    fn xmax(&self) -> f64 {
        2.0
    }

    fn par(&self, _k: usize) -> f64 {
        1.0
    }
}

#[test]
fn test_bernstein_exponential() {
    // Bernstein coefficients all one: B(x) = 1
    let tau: f64 = -1.5;
    let expected = ((2.0 * tau).exp() - 1.0) / tau;
    assert_relative_eq!(
        integrate_bernstein_exp(&ConstantBernstein, tau, 0.0, 2.0).unwrap(),
        expected,
        max_relative = 1e-13
    );
}
