use std::ops::{
    DivAssign,
    MulAssign
};

/// Dense coefficient list f = Σ p_k B_k, shared by every basis.
///
/// Never empty: `degree() == pars().len() - 1`. The degree is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PolySum {
    pars: Vec<f64>,
}

impl PolySum {
    /// All-zero coefficients for the given degree.
    pub fn new(degree: usize) -> PolySum {
        PolySum { pars: vec![0.0; degree + 1] }
    }

    /// An empty list becomes the zero polynomial of degree 0.
    pub fn from_pars(mut pars: Vec<f64>) -> PolySum {
        if pars.is_empty() {
            pars.push(0.0);
        }
        PolySum { pars }
    }

    pub fn degree(&self) -> usize {
        self.pars.len() - 1
    }

    pub fn npars(&self) -> usize {
        self.pars.len()
    }

    /// True iff every coefficient is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.pars.iter().all(|&p| p == 0.0)
    }

    /// Zero for indices beyond the degree.
    pub fn par(&self, k: usize) -> f64 {
        self.pars.get(k).copied().unwrap_or(0.0)
    }

    /// Returns false, leaving the coefficients untouched, when `k` is
    /// beyond the degree.
    pub fn set_par(&mut self, k: usize, value: f64) -> bool {
        match self.pars.get_mut(k) {
            Some(p) => {
                *p = value;
                true
            }
            None => false,
        }
    }

    pub fn pars(&self) -> &[f64] {
        &self.pars
    }

    pub(crate) fn pars_mut(&mut self) -> &mut [f64] {
        &mut self.pars
    }

    /// Element-wise combination up to the longer operand, the shorter one
    /// padded with zeros.
    pub(crate) fn combine(&self, other: &PolySum, sign: f64) -> PolySum {
        let n = self.npars().max(other.npars());
        let pars = (0..n)
            .map(|k| self.par(k) + sign * other.par(k))
            .collect();
        PolySum { pars }
    }
}

impl MulAssign<f64> for PolySum {
    fn mul_assign(&mut self, a: f64) {
        self.pars.iter_mut().for_each(|p| *p *= a);
    }
}

/// Division by zero is not guarded.
impl DivAssign<f64> for PolySum {
    fn div_assign(&mut self, a: f64) {
        self.pars.iter_mut().for_each(|p| *p /= a);
    }
}

// Shared surface of the domain-mapped sums
//
// Expects a struct with `polysum: PolySum` and `domain: Domain` fields that
// implements `PolynomialSum`. Adding a scalar only touches the degree-0
// coefficient since B_0 = 1 in every supported basis.

macro_rules! impl_polysum_common {
    ($name:ident) => {
        impl $name {
            pub fn degree(&self) -> usize {
                self.polysum.degree()
            }

            pub fn npars(&self) -> usize {
                self.polysum.npars()
            }

            pub fn is_zero(&self) -> bool {
                self.polysum.is_zero()
            }

            pub fn par(&self, k: usize) -> f64 {
                self.polysum.par(k)
            }

            /// False, without mutation, when `k` is beyond the degree.
            pub fn set_par(&mut self, k: usize, value: f64) -> bool {
                self.polysum.set_par(k, value)
            }

            pub fn pars(&self) -> &[f64] {
                self.polysum.pars()
            }

            pub fn xmin(&self) -> f64 {
                self.domain.xmin()
            }

            pub fn xmax(&self) -> f64 {
                self.domain.xmax()
            }

            /// Add a sum defined on the same domain.
            pub fn sum(
                &self,
                other: &$name,
            ) -> Result<$name, $crate::math::polynomial::polynomialerror::PolynomialError> {
                self.domain.check_same(&other.domain)?;
                Ok(<$name as $crate::math::polynomial::polynomialsum::PolynomialSum>::from_parts(
                    self.polysum.combine(&other.polysum, 1.0),
                    self.domain,
                ))
            }

            /// Subtract a sum defined on the same domain.
            pub fn subtract(
                &self,
                other: &$name,
            ) -> Result<$name, $crate::math::polynomial::polynomialerror::PolynomialError> {
                self.domain.check_same(&other.domain)?;
                Ok(<$name as $crate::math::polynomial::polynomialsum::PolynomialSum>::from_parts(
                    self.polysum.combine(&other.polysum, -1.0),
                    self.domain,
                ))
            }
        }

        impl std::ops::Neg for $name {
            type Output = $name;

            fn neg(mut self) -> $name {
                self.polysum *= -1.0;
                self
            }
        }

        impl std::ops::AddAssign<f64> for $name {
            fn add_assign(&mut self, a: f64) {
                self.polysum.pars_mut()[0] += a;
            }
        }

        impl std::ops::SubAssign<f64> for $name {
            fn sub_assign(&mut self, a: f64) {
                self.polysum.pars_mut()[0] -= a;
            }
        }

        impl std::ops::MulAssign<f64> for $name {
            fn mul_assign(&mut self, a: f64) {
                self.polysum *= a;
            }
        }

        impl std::ops::DivAssign<f64> for $name {
            fn div_assign(&mut self, a: f64) {
                self.polysum /= a;
            }
        }

        impl std::ops::Add<f64> for $name {
            type Output = $name;

            fn add(mut self, a: f64) -> $name {
                self += a;
                self
            }
        }

        impl std::ops::Sub<f64> for $name {
            type Output = $name;

            fn sub(mut self, a: f64) -> $name {
                self -= a;
                self
            }
        }

        impl std::ops::Mul<f64> for $name {
            type Output = $name;

            fn mul(mut self, a: f64) -> $name {
                self *= a;
                self
            }
        }

        impl std::ops::Div<f64> for $name {
            type Output = $name;

            fn div(mut self, a: f64) -> $name {
                self /= a;
                self
            }
        }

        impl std::ops::Add<$name> for f64 {
            type Output = $name;

            fn add(self, p: $name) -> $name {
                p + self
            }
        }

        impl std::ops::Sub<$name> for f64 {
            type Output = $name;

            fn sub(self, p: $name) -> $name {
                -p + self
            }
        }

        impl std::ops::Mul<$name> for f64 {
            type Output = $name;

            fn mul(self, p: $name) -> $name {
                p * self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::math::polynomial::basis::format_sum(
                    f,
                    <$name as $crate::math::polynomial::polynomialsum::PolynomialSum>::BASIS,
                    self.polysum.pars(),
                    self.domain.xmin(),
                    self.domain.xmax(),
                )
            }
        }
    };
}

pub(crate) use impl_polysum_common;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_and_npars() {
        let p = PolySum::new(3);
        assert_eq!(p.degree(), 3);
        assert_eq!(p.npars(), 4);
        assert!(p.is_zero());

        let q = PolySum::from_pars(vec![]);
        assert_eq!(q.degree(), 0);
        assert_eq!(q.pars(), &[0.0]);
    }

    #[test]
    fn par_out_of_range_is_zero() {
        let p = PolySum::from_pars(vec![1.0, 2.0]);
        assert_eq!(p.par(1), 2.0);
        assert_eq!(p.par(7), 0.0);
    }

    #[test]
    fn set_par_respects_degree() {
        let mut p = PolySum::new(1);
        assert!(p.set_par(1, 5.0));
        assert!(!p.set_par(2, 5.0));
        assert_eq!(p.pars(), &[0.0, 5.0]);
        assert!(!p.is_zero());
    }

    #[test]
    fn scale_in_place() {
        let mut p = PolySum::from_pars(vec![1.0, -2.0, 4.0]);
        p *= 2.0;
        assert_eq!(p.pars(), &[2.0, -4.0, 8.0]);
        p /= 4.0;
        assert_eq!(p.pars(), &[0.5, -1.0, 2.0]);
    }

    #[test]
    fn combine_pads_shorter_operand() {
        let a = PolySum::from_pars(vec![1.0, 1.0, 1.0]);
        let b = PolySum::from_pars(vec![2.0]);
        assert_eq!(a.combine(&b, 1.0).pars(), &[3.0, 1.0, 1.0]);
        assert_eq!(b.combine(&a, -1.0).pars(), &[1.0, -1.0, -1.0]);
    }
}
