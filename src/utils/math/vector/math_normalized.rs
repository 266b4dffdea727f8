use std::ops::AddAssign;

use num::Float;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Float + AddAssign,
{
    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> N {
        self.norm_sq::<N>().sqrt()
    }

    /// Scale to unit Euclidean norm.
    /// The zero vector is left untouched.
    #[inline]
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > N::zero() {
            for v in self.vals_mut() {
                *v = *v / norm;
            }
        }
    }

    /// Cosine similarity.
    /// Returns 0 when either side is the zero vector.
    #[inline]
    pub fn cosine(&self, other: &Self) -> N {
        let denom = self.norm() * other.norm();
        if denom <= N::zero() {
            return N::zero();
        }
        self.dot::<N>(other) / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_yields_unit_norm() {
        let mut v = ZeroSpVec::from(vec![3.0_f64, 0.0, 4.0]);
        v.l2_normalize();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.get(0).copied().unwrap_or_default() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_stays_zero() {
        let mut v: ZeroSpVec<f64> = ZeroSpVec::zeros(4);
        v.l2_normalize();
        assert_eq!(v.nnz(), 0);
        assert_eq!(v.cosine(&ZeroSpVec::from(vec![1.0, 0.0, 0.0, 0.0])), 0.0);
    }

    #[test]
    fn cosine_of_parallel_vectors_is_one() {
        let a = ZeroSpVec::from(vec![1.0_f64, 2.0, 0.0]);
        let b = ZeroSpVec::from(vec![2.0_f64, 4.0, 0.0]);
        assert!((a.cosine(&b) - 1.0).abs() < 1e-12);
    }
}
