pub mod math;
pub mod math_normalized;

use std::fmt::{self, Debug};

use num::Num;

/// ZeroSpVec is a sparse vector that treats zero as the implicit element.
/// It keeps parallel `inds` / `vals` arrays for the non-zero entries and a
/// logical length (the dimension).
///
/// Entries are always sorted by ascending index.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
    zero: N,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    #[inline]
    pub fn new() -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
            zero: N::zero(),
        }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
            zero: N::zero(),
        }
    }

    /// Build from (index, value) pairs.
    /// Pairs are sorted by index, zeros dropped and duplicate indices summed.
    ///
    /// # Arguments
    /// * `len` - logical dimension
    /// * `entries` - non-zero candidates, every index must be `< len`
    pub fn from_entries(len: usize, mut entries: Vec<(usize, N)>) -> Self {
        entries.sort_by_key(|(idx, _)| *idx);
        let mut vec = ZeroSpVec::with_capacity(entries.len());
        vec.len = len;
        for (idx, val) in entries {
            debug_assert!(idx < len, "index out of bounds");
            if val == N::zero() {
                continue;
            }
            if vec.inds.last().copied() == Some(idx) {
                if let Some(v) = vec.vals.last_mut() {
                    *v = *v + val;
                }
            } else {
                vec.inds.push(idx);
                vec.vals.push(val);
            }
        }
        vec
    }

    /// An all-zero vector of the given dimension
    #[inline]
    pub fn zeros(len: usize) -> Self {
        let mut vec = ZeroSpVec::new();
        vec.len = len;
        vec
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// number of stored (non-zero) entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn push(&mut self, elem: N) {
        if elem != N::zero() {
            self.inds.push(self.len);
            self.vals.push(elem);
        }
        self.len += 1;
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&index) {
            Ok(i) => self.vals.get(i),
            Err(_) => Some(&self.zero),
        }
    }

    /// Iterate over stored entries as (index, value)
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter())
    }

    #[inline]
    pub(crate) fn vals_mut(&mut self) -> &mut [N] {
        &mut self.vals
    }

    #[inline]
    pub(crate) fn inds(&self) -> &[usize] {
        &self.inds
    }

    #[inline]
    pub(crate) fn vals(&self) -> &[N] {
        &self.vals
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> From<Vec<N>> for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn from(dense: Vec<N>) -> Self {
        let mut vec = ZeroSpVec::with_capacity(dense.len());
        for val in dense {
            vec.push(val);
        }
        vec
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Num + Copy + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "ZeroSpVec {{ len: {}, nnz: {}, [", self.len, self.nnz())?;
            for (i, (idx, val)) in self.raw_iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {:?}", idx, val)?;
            }
            write!(f, "] }}")
        } else {
            f.debug_struct("ZeroSpVec")
                .field("len", &self.len)
                .field("inds", &self.inds)
                .field("vals", &self.vals)
                .finish()
        }
    }
}
