use nalgebra::DMatrix;

use crate::math::polynomial::basis::Basis;
use crate::math::polynomial::polynomialerror::PolynomialError;

// Change of basis
//
// Source basis functions are generated one after another with their own
// three-term recurrence, each expressed directly in the target basis:
//
//   B_{k+1} = a_k·s·(u·B_k) + b_k·B_{k-1}
//
// where u·(...) is the target basis' multiply-by-u operator and s the
// source scale between canonical and normalized variable. Accumulating
// c_k·B_k gives the target coefficients in O(N²) without passing through
// the monomial basis, for every pair.
//
// Above this degree the conversion matrices between the classical bases
// have entries of order 2^N and results lose significant digits.
const WELL_CONDITIONED_DEGREE: usize = 30;

/// Coefficients of the same function in the `to` basis. The degree is
/// preserved; the domain is irrelevant since all bases share the
/// normalized variable.
pub fn convert_pars(from: Basis, to: Basis, pars: &[f64]) -> Vec<f64> {
    if from == to || pars.is_empty() {
        return pars.to_vec();
    }
    let n = pars.len();
    if n - 1 > WELL_CONDITIONED_DEGREE {
        log::warn!(
            "{} -> {} conversion at degree {} (> {}); expect loss of precision",
            from,
            to,
            n - 1,
            WELL_CONDITIONED_DEGREE
        );
    }

    let scale = from.canonical_scale();
    let mut result = vec![0.0; n];
    let mut prev: Vec<f64> = Vec::new();
    let mut cur: Vec<f64> = vec![1.0];
    result[0] = pars[0];

    for k in 0..(n - 1) {
        let (a, b) = from.recurrence(k);
        let mut next = to.mul_u(&cur);
        next.iter_mut().for_each(|v| *v *= a * scale);
        if k > 0 && b != 0.0 {
            for (v, &p) in next.iter_mut().zip(prev.iter()) {
                *v += b * p;
            }
        }
        let c = pars[k + 1];
        if c != 0.0 {
            for (r, &v) in result.iter_mut().zip(next.iter()) {
                *r += c * v;
            }
        }
        prev = cur;
        cur = next;
    }
    result
}

/// The same transform routed through the monomial basis. Kept for
/// comparison with the direct path: its error grows faster with degree.
pub fn convert_pars_via_monomial(from: Basis, to: Basis, pars: &[f64]) -> Vec<f64> {
    if from == Basis::Monomial || to == Basis::Monomial {
        return convert_pars(from, to, pars);
    }
    log::debug!("{} -> {} conversion chained through the monomial basis", from, to);
    let monomial = convert_pars(from, Basis::Monomial, pars);
    convert_pars(Basis::Monomial, to, &monomial)
}

/// Coefficients of q(x) = p(αx + β), p given by its monomial coefficients.
pub fn affine_transform(input: &[f64], alpha: f64, beta: f64) -> Vec<f64> {
    let n = input.len();
    if n == 0 {
        return Vec::new();
    }
    // Horner over polynomials: r ← r·(αx + β) + p_k
    let mut result = vec![0.0; n];
    result[0] = input[n - 1];
    for (used, &p) in input.iter().rev().skip(1).enumerate() {
        let len = used + 1;
        for i in (0..=len).rev() {
            let shifted = if i > 0 { alpha * result[i - 1] } else { 0.0 };
            let kept = if i < len { beta * result[i] } else { 0.0 };
            result[i] = shifted + kept;
        }
        result[0] += p;
    }
    result
}

/// Dense change-of-basis matrix M with c_to = M·c_from.
pub fn conversion_matrix(from: Basis, to: Basis, degree: usize) -> DMatrix<f64> {
    let n = degree + 1;
    let mut matrix = DMatrix::<f64>::zeros(n, n);
    let mut unit = vec![0.0; n];
    for j in 0..n {
        unit[j] = 1.0;
        let column = convert_pars(from, to, &unit);
        for (i, v) in column.into_iter().enumerate() {
            matrix[(i, j)] = v;
        }
        unit[j] = 0.0;
    }
    matrix
}

/// Covariance of the coefficients after a change of basis: M·C·Mᵀ.
pub fn transform_covariance(
    cov: &DMatrix<f64>,
    from: Basis,
    to: Basis,
) -> Result<DMatrix<f64>, PolynomialError> {
    let (rows, cols) = cov.shape();
    if rows != cols || rows == 0 {
        return Err(PolynomialError::NonSquareCovariance { rows, cols });
    }
    let m = conversion_matrix(from, to, rows - 1);
    Ok(&m * cov * m.transpose())
}
