//! Prepartition encoding.
//!
//! Every value is assigned one of `n` buckets. Values in the same bucket
//! are forced into the same subset; the residue is obtained by running
//! Karmarkar-Karp over the bucket sums.

use rand::Rng;

use super::types::{ensure_len, Solution};
use crate::error::{PartitionError, Result};
use crate::heap::BoundedMaxHeap;
use crate::kk::karmarkar_karp;
use crate::problem::Problem;

/// Bucket assignment in `[0, n)` for each of the `n` problem values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Prepartition {
    buckets: Vec<usize>,
}

impl Prepartition {
    /// Wraps explicit bucket indices, each of which must be below the
    /// number of entries.
    pub fn from_buckets(buckets: Vec<usize>) -> Result<Self> {
        let n = buckets.len();
        if let Some(pos) = buckets.iter().position(|&b| b >= n) {
            return Err(PartitionError::InvalidSolution(format!(
                "bucket at index {pos} is {}, expected < {n}",
                buckets[pos]
            )));
        }
        Ok(Self { buckets })
    }

    pub fn buckets(&self) -> &[usize] {
        &self.buckets
    }

    /// Moves the value at `index` into `bucket`.
    pub fn set(&mut self, index: usize, bucket: usize) -> Result<()> {
        let n = self.buckets.len();
        if bucket >= n {
            return Err(PartitionError::InvalidSolution(format!(
                "bucket {bucket} out of range for length {n}"
            )));
        }
        let slot = self.buckets.get_mut(index).ok_or_else(|| {
            PartitionError::InvalidSolution(format!("index {index} out of range for length {n}"))
        })?;
        *slot = bucket;
        Ok(())
    }

    /// Per-bucket sums of `problem`, zeros included.
    pub fn bucket_sums(&self, problem: &Problem) -> Result<Vec<u64>> {
        ensure_len(self.buckets.len(), problem)?;
        let mut sums = vec![0u64; self.buckets.len()];
        for (&v, &b) in problem.values().iter().zip(&self.buckets) {
            // Bounded by problem.total().
            sums[b] += v;
        }
        Ok(sums)
    }
}

impl TryFrom<Vec<usize>> for Prepartition {
    type Error = PartitionError;

    fn try_from(buckets: Vec<usize>) -> Result<Self> {
        Self::from_buckets(buckets)
    }
}

impl From<Prepartition> for Vec<usize> {
    fn from(p: Prepartition) -> Self {
        p.buckets
    }
}

impl Solution for Prepartition {
    const NAME: &'static str = "prepartition";

    fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let buckets = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { buckets }
    }

    /// Reassigns one value to a different bucket, sampling `(index,
    /// bucket)` pairs until the bucket differs from the current one.
    ///
    /// With a single value there is no other bucket and the copy is
    /// returned unchanged.
    fn neighbor<R: Rng>(&self, rng: &mut R) -> Self {
        let mut next = self.clone();
        let n = next.buckets.len();
        if n < 2 {
            return next;
        }

        loop {
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            if next.buckets[i] != j {
                next.buckets[i] = j;
                return next;
            }
        }
    }

    fn residue(&self, problem: &Problem) -> Result<u64> {
        let sums = self.bucket_sums(problem)?;
        let mut heap = BoundedMaxHeap::from_values(&sums);
        karmarkar_karp(&mut heap)
    }

    fn len(&self) -> usize {
        self.buckets.len()
    }
}
