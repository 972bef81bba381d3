use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize
};

// Basis
//
// Every supported family obeys a three-term recurrence in its canonical
// variable t:
//
//   B_0(t) = 1
//   B_{k+1}(t) = a_k·t·B_k(t) + b_k·B_{k-1}(t)
//
//   Monomial   a_k = 1                 b_k = 0
//   Chebyshev  a_0 = 1, a_k = 2        b_k = -1
//   Legendre   a_k = (2k+1)/(k+1)      b_k = -k/(k+1)
//   Hermite    a_k = 1                 b_k = -k        (probabilist He_k)
//
// Monomial, Chebyshev and Legendre use t = u ∈ [-1, 1]; Hermite uses
// t = 2u ∈ [-2, 2], u being the normalized domain variable.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Basis {
    Monomial,
    Chebyshev,
    Legendre,
    Hermite,
}

impl Basis {
    pub const ALL: [Basis; 4] = [
        Basis::Monomial,
        Basis::Chebyshev,
        Basis::Legendre,
        Basis::Hermite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Basis::Monomial  => "Polynomial",
            Basis::Chebyshev => "ChebyshevSum",
            Basis::Legendre  => "LegendreSum",
            Basis::Hermite   => "HermiteSum",
        }
    }

    /// t = canonical_scale()·u
    pub fn canonical_scale(&self) -> f64 {
        match self {
            Basis::Hermite => 2.0,
            _              => 1.0,
        }
    }

    /// (a_k, b_k) of the recurrence above.
    pub fn recurrence(&self, k: usize) -> (f64, f64) {
        let kf = k as f64;
        match self {
            Basis::Monomial  => (1.0, 0.0),
            Basis::Chebyshev => (if k == 0 { 1.0 } else { 2.0 }, -1.0),
            Basis::Legendre  => ((2.0 * kf + 1.0) / (kf + 1.0), -kf / (kf + 1.0)),
            Basis::Hermite   => (1.0, -kf),
        }
    }

    /// Σ c_k B_k(t) by Clenshaw's backward recurrence.
    pub fn clenshaw(&self, pars: &[f64], t: f64) -> f64 {
        let n = pars.len();
        if n == 0 {
            return 0.0;
        }
        if let Basis::Monomial = self {
            return pars.iter().rev().fold(0.0, |acc, &p| f64::mul_add(acc, t, p));
        }

        // b_k = c_k + a_k·t·b_{k+1} + b'_{k+1}·b_{k+2}
        let mut b1 = 0.0;
        let mut b2 = 0.0;
        for k in (1..n).rev() {
            let (a, _) = self.recurrence(k);
            let (_, beta) = self.recurrence(k + 1);
            let b0 = pars[k] + a * t * b1 + beta * b2;
            b2 = b1;
            b1 = b0;
        }
        let (a0, _) = self.recurrence(0);
        let (_, beta1) = self.recurrence(1);
        pars[0] + a0 * t * b1 + beta1 * b2
    }

    /// Coefficients of u·f(u) in this basis, u being the normalized
    /// variable. One degree higher than the input.
    pub fn mul_u(&self, pars: &[f64]) -> Vec<f64> {
        let mut result = vec![0.0; pars.len() + 1];
        for (j, &c) in pars.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let jf = j as f64;
            match self {
                Basis::Monomial => result[j + 1] += c,
                Basis::Chebyshev => {
                    if j == 0 {
                        result[1] += c;
                    } else {
                        result[j + 1] += 0.5 * c;
                        result[j - 1] += 0.5 * c;
                    }
                }
                Basis::Legendre => {
                    // u·P_j = ((j+1)·P_{j+1} + j·P_{j-1}) / (2j+1)
                    let d = 2.0 * jf + 1.0;
                    result[j + 1] += c * (jf + 1.0) / d;
                    if j > 0 {
                        result[j - 1] += c * jf / d;
                    }
                }
                Basis::Hermite => {
                    // u·He_j(2u) = (He_{j+1} + j·He_{j-1}) / 2
                    result[j + 1] += 0.5 * c;
                    if j > 0 {
                        result[j - 1] += 0.5 * c * jf;
                    }
                }
            }
        }
        result
    }
}

impl Display for Basis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// `Name([c0, c1, ...],xmin,xmax)`
pub(crate) fn format_sum(
    f: &mut std::fmt::Formatter<'_>,
    basis: Basis,
    pars: &[f64],
    xmin: f64,
    xmax: f64,
) -> std::fmt::Result {
    let list: Vec<String> = pars.iter().map(|p| p.to_string()).collect();
    write!(f, "{}([{}],{},{})", basis.name(), list.join(", "), xmin, xmax)
}
