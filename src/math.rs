use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::ops::Mul;

/// 2x2 matrix of big integers, laid out as
///
/// ```text
/// | a b |
/// | c d |
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    pub a: BigUint,
    pub b: BigUint,
    pub c: BigUint,
    pub d: BigUint,
}

impl Matrix {
    pub fn identity() -> Self {
        Matrix {
            a: BigUint::one(),
            b: BigUint::zero(),
            c: BigUint::zero(),
            d: BigUint::one(),
        }
    }

    /// The Fibonacci step matrix `[[1, 1], [1, 0]]`. Its n-th power is
    /// `[[F(n+1), F(n)], [F(n), F(n-1)]]`.
    pub fn step() -> Self {
        Matrix {
            a: BigUint::one(),
            b: BigUint::one(),
            c: BigUint::one(),
            d: BigUint::zero(),
        }
    }

    // Exponentiation by squaring, O(log exp) multiplications
    pub fn pow(&self, mut exp: u64) -> Matrix {
        let mut result = Matrix::identity();
        let mut base = self.clone();

        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        result
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        Matrix {
            a: &self.a * &rhs.a + &self.b * &rhs.c,
            b: &self.a * &rhs.b + &self.b * &rhs.d,
            c: &self.c * &rhs.a + &self.d * &rhs.c,
            d: &self.c * &rhs.b + &self.d * &rhs.d,
        }
    }
}

/// Returns `(F(n), F(n+1))`.
///
/// # Example
/// ```
/// use fibseq::math::fibonacci_pair;
/// use num_bigint::BigUint;
/// let (f10, f11) = fibonacci_pair(10);
/// assert_eq!(f10, BigUint::from(55u32));
/// assert_eq!(f11, BigUint::from(89u32));
/// ```
pub fn fibonacci_pair(n: u64) -> (BigUint, BigUint) {
    let Matrix { a, b, .. } = Matrix::step().pow(n);
    (b, a)
}
