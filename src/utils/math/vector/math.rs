use std::{cmp::Ordering, ops::AddAssign};

use num::Num;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Dot product of two sparse vectors of the same dimension
    ///
    /// # Arguments
    /// * `other` - other vector
    ///
    /// # Returns
    /// * `R` - result accumulated in `R`
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + AddAssign,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = R::zero();
        let (self_inds, self_vals) = (self.inds(), self.vals());
        let (other_inds, other_vals) = (other.inds(), other.vals());

        let mut i = 0;
        let mut j = 0;
        while i < self_inds.len() && j < other_inds.len() {
            match self_inds[i].cmp(&other_inds[j]) {
                Ordering::Equal => {
                    let a: R = self_vals[i].into();
                    let b: R = other_vals[j].into();
                    result += a * b;
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        let mut result = R::zero();
        for val in self.vals() {
            let val: R = (*val).into();
            result += val * val;
        }
        result
    }
}
