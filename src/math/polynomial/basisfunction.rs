use crate::math::curve::curve::{
    Curve,
    CurveIntegration
};

// Single basis functions
//
// Canonical variable only, no domain mapping and no clamping.
//
//   T_n = 2x·T_{n-1} - T_{n-2}                  T_0 = 1, T_1 = x
//   U_n = x·U_{n-1} + T_n                       U_0 = 1, U_1 = 2x
//   P_n = ((2n-1)x·P_{n-1} - (n-1)·P_{n-2}) / n  P_0 = 1, P_1 = x
//   He_n = x·He_{n-1} - (n-1)·He_{n-2}          He_0 = 1, He_1 = x

pub fn chebyshev_t(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let mut t0 = 1.0;
            let mut t1 = x;
            for _ in 2..=n {
                let t2 = 2.0 * x * t1 - t0;
                t0 = t1;
                t1 = t2;
            }
            t1
        }
    }
}

pub fn chebyshev_u(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => 2.0 * x,
        _ => {
            let mut t0 = 1.0;
            let mut t1 = x;
            let mut u = 2.0 * x;
            for _ in 2..=n {
                let t2 = 2.0 * x * t1 - t0;
                t0 = t1;
                t1 = t2;
                u = x * u + t1;
            }
            u
        }
    }
}

pub fn legendre_p(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let mut p0 = 1.0;
            let mut p1 = x;
            for k in 2..=n {
                let kf = k as f64;
                let p2 = ((2.0 * kf - 1.0) * x * p1 - (kf - 1.0) * p0) / kf;
                p0 = p1;
                p1 = p2;
            }
            p1
        }
    }
}

pub fn hermite_he(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let mut h0 = 1.0;
            let mut h1 = x;
            for k in 2..=n {
                let h2 = x * h1 - (k - 1) as f64 * h0;
                h0 = h1;
                h1 = h2;
            }
            h1
        }
    }
}

// Fixed-degree evaluators

/// T_N with the degree fixed at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChebyshevN<const N: usize>;

/// U_N with the degree fixed at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChebyshevUN<const N: usize>;

/// P_N with the degree fixed at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegendreN<const N: usize>;

/// He_N with the degree fixed at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct HermiteN<const N: usize>;

impl<const N: usize> ChebyshevN<N> {
    pub const DEGREE: usize = N;

    pub fn evaluate(x: f64) -> f64 {
        chebyshev_t(N, x)
    }
}

impl<const N: usize> ChebyshevUN<N> {
    pub const DEGREE: usize = N;

    pub fn evaluate(x: f64) -> f64 {
        chebyshev_u(N, x)
    }
}

impl<const N: usize> LegendreN<N> {
    pub const DEGREE: usize = N;

    pub fn evaluate(x: f64) -> f64 {
        legendre_p(N, x)
    }
}

impl<const N: usize> HermiteN<N> {
    pub const DEGREE: usize = N;

    pub fn evaluate(x: f64) -> f64 {
        hermite_he(N, x)
    }
}

// Runtime-degree evaluators

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chebyshev {
    n: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChebyshevU {
    n: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Legendre {
    n: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hermite {
    n: usize,
}

impl Chebyshev {
    pub fn new(n: usize) -> Chebyshev {
        Chebyshev { n }
    }

    pub fn degree(&self) -> usize {
        self.n
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        chebyshev_t(self.n, x)
    }

    /// ∫T_n = T_{n+1}/(2(n+1)) - T_{n-1}/(2(n-1))
    fn primitive(&self, x: f64) -> f64 {
        match self.n {
            0 => x,
            1 => 0.5 * x * x,
            n => {
                chebyshev_t(n + 1, x) / (2.0 * (n + 1) as f64)
                    - chebyshev_t(n - 1, x) / (2.0 * (n - 1) as f64)
            }
        }
    }
}

impl Curve for Chebyshev {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }

    /// T'_n = n·U_{n-1}
    fn derivative(&self, x: f64) -> f64 {
        match self.n {
            0 => 0.0,
            n => n as f64 * chebyshev_u(n - 1, x),
        }
    }
}

impl CurveIntegration for Chebyshev {
    fn integral(&self, a: f64, b: f64) -> f64 {
        self.primitive(b) - self.primitive(a)
    }
}

impl ChebyshevU {
    pub fn new(n: usize) -> ChebyshevU {
        ChebyshevU { n }
    }

    pub fn degree(&self) -> usize {
        self.n
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        chebyshev_u(self.n, x)
    }
}

impl Curve for ChebyshevU {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }

    /// Differentiated recurrence U'_k = 2U_{k-1} + 2x·U'_{k-1} - U'_{k-2},
    /// regular at x = ±1.
    fn derivative(&self, x: f64) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        let mut u0 = 1.0;
        let mut u1 = 2.0 * x;
        let mut d0 = 0.0;
        let mut d1 = 2.0;
        for _ in 2..=self.n {
            let u2 = 2.0 * x * u1 - u0;
            let d2 = 2.0 * u1 + 2.0 * x * d1 - d0;
            u0 = u1;
            u1 = u2;
            d0 = d1;
            d1 = d2;
        }
        d1
    }
}

impl CurveIntegration for ChebyshevU {
    /// ∫U_n = T_{n+1}/(n+1)
    fn integral(&self, a: f64, b: f64) -> f64 {
        let m = self.n + 1;
        (chebyshev_t(m, b) - chebyshev_t(m, a)) / m as f64
    }
}

impl Legendre {
    pub fn new(n: usize) -> Legendre {
        Legendre { n }
    }

    pub fn degree(&self) -> usize {
        self.n
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        legendre_p(self.n, x)
    }

    /// ∫P_n = (P_{n+1} - P_{n-1}) / (2n+1)
    fn primitive(&self, x: f64) -> f64 {
        match self.n {
            0 => x,
            n => (legendre_p(n + 1, x) - legendre_p(n - 1, x)) / (2 * n + 1) as f64,
        }
    }
}

impl Curve for Legendre {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }

    /// P'_n = Σ (2j+1)·P_j over j = n-1, n-3, ...
    fn derivative(&self, x: f64) -> f64 {
        let n = self.n;
        if n == 0 {
            return 0.0;
        }
        let mut result = 0.0;
        let mut p0 = 1.0;
        let mut p1 = x;
        for j in 0..n {
            let pj = if j == 0 { p0 } else { p1 };
            if (n - 1 - j) % 2 == 0 {
                result += (2 * j + 1) as f64 * pj;
            }
            if j >= 1 {
                let kf = (j + 1) as f64;
                let p2 = ((2.0 * kf - 1.0) * x * p1 - (kf - 1.0) * p0) / kf;
                p0 = p1;
                p1 = p2;
            }
        }
        result
    }
}

impl CurveIntegration for Legendre {
    fn integral(&self, a: f64, b: f64) -> f64 {
        self.primitive(b) - self.primitive(a)
    }
}

impl Hermite {
    pub fn new(n: usize) -> Hermite {
        Hermite { n }
    }

    pub fn degree(&self) -> usize {
        self.n
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        hermite_he(self.n, x)
    }
}

impl Curve for Hermite {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }

    /// He'_n = n·He_{n-1}
    fn derivative(&self, x: f64) -> f64 {
        match self.n {
            0 => 0.0,
            n => n as f64 * hermite_he(n - 1, x),
        }
    }
}

impl CurveIntegration for Hermite {
    /// ∫He_n = He_{n+1}/(n+1)
    fn integral(&self, a: f64, b: f64) -> f64 {
        let m = self.n + 1;
        (hermite_he(m, b) - hermite_he(m, a)) / m as f64
    }
}
