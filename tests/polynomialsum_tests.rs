//! Calculus and arithmetic of the four domain-mapped sums.
//!
//! ## Test Organization
//!
//! 1. **Concrete scenarios** - hand-computed values
//! 2. **Calculus** - derivative of the primitive, integrals, clamping
//! 3. **Arithmetic** - linearity, scalar operators, domain checks
//! 4. **Formatting**

use approx::{
    assert_abs_diff_eq,
    assert_relative_eq
};

use polybasis::math::polynomial::chebyshevsum::ChebyshevSum;
use polybasis::math::polynomial::hermitesum::HermiteSum;
use polybasis::math::polynomial::legendresum::LegendreSum;
use polybasis::math::polynomial::polynomial::Polynomial;
use polybasis::math::polynomial::polynomialerror::PolynomialError;

const PARS: [f64; 5] = [0.7, -1.3, 0.4, 2.1, -0.6];
const SAMPLES: [f64; 5] = [1.0, 1.3, 2.0, 2.45, 3.0];

/// Runs the body once per basis with `$ty` bound to the sum type.
macro_rules! for_each_basis {
    ($ty:ident => $body:block) => {{
        {
            type $ty = Polynomial;
            $body
        }
        {
            type $ty = ChebyshevSum;
            $body
        }
        {
            type $ty = LegendreSum;
            $body
        }
        {
            type $ty = HermiteSum;
            $body
        }
    }};
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_monomial_quadratic() {
    // 1 + 2x + 3x² on [-1, 1]
    let p = Polynomial::from_pars([1.0, 2.0, 3.0], -1.0, 1.0).unwrap();
    assert_relative_eq!(p.evaluate(0.5), 2.75, epsilon = 1e-15);
    assert_relative_eq!(p.derivative(0.5), 5.0, epsilon = 1e-15);
    // ∫1 = 2, ∫2x = 0, ∫3x² = 2
    assert_relative_eq!(p.integral(), 4.0, epsilon = 1e-15);
    assert_relative_eq!(p.integral_range(-1.0, 1.0), 4.0, epsilon = 1e-15);
    assert_eq!(p.derivative_poly().pars(), &[2.0, 6.0]);
}

#[test]
fn test_chebyshev_t2() {
    let c = ChebyshevSum::from_pars([0.0, 0.0, 1.0], -1.0, 1.0).unwrap();
    assert_relative_eq!(c.evaluate(1.0), 1.0);
    assert_relative_eq!(c.evaluate(0.0), -1.0);
    // T_2' = 4x
    assert_relative_eq!(c.derivative(0.25), 1.0, epsilon = 1e-15);
}

#[test]
fn test_invalid_domain_is_rejected() {
    assert!(matches!(
        Polynomial::new(2, 1.0, 1.0),
        Err(PolynomialError::InvalidDomain { .. })
    ));
    assert!(matches!(
        HermiteSum::from_pars([1.0], 0.0, f64::INFINITY),
        Err(PolynomialError::InvalidDomain { .. })
    ));
}

#[test]
fn test_new_is_zero_of_degree() {
    let c = ChebyshevSum::new(3, 0.0, 1.0).unwrap();
    assert_eq!(c.degree(), 3);
    assert_eq!(c.npars(), 4);
    assert!(c.is_zero());
}

// ============================================================================
// Calculus
// ============================================================================

#[test]
fn test_derivative_of_primitive_restores_pars() {
    for_each_basis!(T => {
        let p = T::from_pars(PARS, 1.0, 3.0).unwrap();
        let q = p.indefinite_integral(0.25);
        assert_eq!(q.degree(), p.degree() + 1);
        assert_relative_eq!(q.evaluate(1.0), 0.25, epsilon = 1e-13);
        let d = q.derivative_poly();
        for (a, b) in d.pars().iter().zip(p.pars()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-13);
        }
    });
}

#[test]
fn test_derivative_matches_finite_difference() {
    let h = 1e-6;
    for_each_basis!(T => {
        let p = T::from_pars(PARS, 1.0, 3.0).unwrap();
        for x in [1.2, 2.0, 2.8] {
            let numeric = (p.evaluate(x + h) - p.evaluate(x - h)) / (2.0 * h);
            assert_relative_eq!(p.derivative(x), numeric, epsilon = 1e-6, max_relative = 1e-7);
            assert_relative_eq!(p.derivative_poly().evaluate(x), p.derivative(x), epsilon = 1e-12);
        }
    });
}

#[test]
fn test_integral_matches_primitive() {
    for_each_basis!(T => {
        let p = T::from_pars(PARS, 1.0, 3.0).unwrap();
        let q = p.indefinite_integral(0.0);
        assert_relative_eq!(p.integral(), q.evaluate(3.0), epsilon = 1e-12);
        assert_relative_eq!(
            p.integral_range(1.5, 2.5),
            q.evaluate(2.5) - q.evaluate(1.5),
            epsilon = 1e-12
        );
    });
}

#[test]
fn test_integral_range_is_clamped() {
    for_each_basis!(T => {
        let p = T::from_pars(PARS, 1.0, 3.0).unwrap();
        assert_relative_eq!(p.integral_range(-10.0, 10.0), p.integral(), epsilon = 1e-13);
        assert_relative_eq!(p.integral_range(0.0, 2.0), p.integral_range(1.0, 2.0), epsilon = 1e-13);
        assert_relative_eq!(p.integral_range(2.0, 1.5), -p.integral_range(1.5, 2.0), epsilon = 1e-15);
        assert_eq!(p.integral_range(4.0, 5.0), 0.0);
        assert_eq!(p.integral_range(2.0, 2.0), 0.0);
    });
}

#[test]
fn test_zero_outside_domain() {
    for_each_basis!(T => {
        let p = T::from_pars(PARS, 1.0, 3.0).unwrap();
        for x in [0.999, -5.0, 3.001, 1e9] {
            assert_eq!(p.evaluate(x), 0.0);
            assert_eq!(p.derivative(x), 0.0);
        }
        assert_ne!(p.evaluate(1.0), 0.0);
    });
}

#[test]
fn test_constant_has_zero_derivative() {
    for_each_basis!(T => {
        let p = T::from_pars([4.0], 1.0, 3.0).unwrap();
        assert_eq!(p.derivative(2.0), 0.0);
        assert!(p.derivative_poly().is_zero());
        assert_relative_eq!(p.integral(), 8.0, epsilon = 1e-14);
    });
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_sum_is_linear() {
    for_each_basis!(T => {
        let a = T::from_pars(PARS, 1.0, 3.0).unwrap();
        let b = T::from_pars([0.5, 0.5], 1.0, 3.0).unwrap();
        let s = a.sum(&b).unwrap();
        let d = a.subtract(&b).unwrap();
        assert_eq!(s.degree(), 4);
        for x in SAMPLES {
            assert_relative_eq!(s.evaluate(x), a.evaluate(x) + b.evaluate(x), epsilon = 1e-12);
            assert_relative_eq!(d.evaluate(x), a.evaluate(x) - b.evaluate(x), epsilon = 1e-12);
        }
    });
}

#[test]
fn test_scalar_operators() {
    for_each_basis!(T => {
        let p = T::from_pars(PARS, 1.0, 3.0).unwrap();
        for x in SAMPLES {
            let v = p.evaluate(x);
            assert_relative_eq!((p.clone() + 2.0).evaluate(x), v + 2.0, epsilon = 1e-12);
            assert_relative_eq!((p.clone() - 2.0).evaluate(x), v - 2.0, epsilon = 1e-12);
            assert_relative_eq!((3.0 * p.clone()).evaluate(x), 3.0 * v, epsilon = 1e-12);
            assert_relative_eq!((p.clone() / 4.0).evaluate(x), v / 4.0, epsilon = 1e-12);
            assert_relative_eq!((1.0 - p.clone()).evaluate(x), 1.0 - v, epsilon = 1e-12);
            assert_relative_eq!((-p.clone()).evaluate(x), -v, epsilon = 1e-12);
        }
        let mut q = p.clone();
        q *= 2.0;
        q += 1.0;
        assert_relative_eq!(q.par(0), 2.0 * PARS[0] + 1.0, epsilon = 1e-15);
        assert_relative_eq!(q.par(1), 2.0 * PARS[1], epsilon = 1e-15);
    });
}

#[test]
fn test_set_par_in_and_out_of_range() {
    for_each_basis!(T => {
        let mut p = T::new(2, 0.0, 1.0).unwrap();
        assert!(p.set_par(2, 1.5));
        assert_eq!(p.par(2), 1.5);
        assert!(!p.set_par(3, 1.0));
        assert_eq!(p.degree(), 2);
        assert_eq!(p.par(7), 0.0);
    });
}

#[test]
fn test_sum_on_different_domains_fails() {
    let a = Polynomial::from_pars([1.0, 2.0], -1.0, 1.0).unwrap();
    let b = Polynomial::from_pars([1.0, 2.0], 0.0, 2.0).unwrap();
    assert!(matches!(a.sum(&b), Err(PolynomialError::DomainMismatch { .. })));
    assert!(matches!(a.subtract(&b), Err(PolynomialError::DomainMismatch { .. })));

    // a Chebyshev sum on [0, 2] brought into the monomial basis keeps its domain
    let c = ChebyshevSum::from_pars([1.0, 2.0], 0.0, 2.0).unwrap();
    let converted = Polynomial::from(&c);
    assert!(matches!(a.sum(&converted), Err(PolynomialError::DomainMismatch { .. })));
    assert!(b.sum(&converted).is_ok());
}

#[test]
fn test_domains_equal_within_rounding() {
    let a = LegendreSum::from_pars([1.0], 0.1 + 0.2, 1.0).unwrap();
    let b = LegendreSum::from_pars([1.0], 0.3, 1.0).unwrap();
    assert!(a.sum(&b).is_ok());
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn test_display() {
    let l = LegendreSum::from_pars([1.0, 0.0, 2.0], -1.0, 1.0).unwrap();
    assert_eq!(l.to_string(), "LegendreSum([1, 0, 2],-1,1)");
    let p = Polynomial::from_pars([0.5, -1.0], 0.0, 2.5).unwrap();
    assert_eq!(p.to_string(), "Polynomial([0.5, -1],0,2.5)");
    let h = HermiteSum::from_pars([3.0], -2.0, 2.0).unwrap();
    assert_eq!(h.to_string(), "HermiteSum([3],-2,2)");
}
