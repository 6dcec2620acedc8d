//! Core trait shared by the solution encodings.

use rand::Rng;

use crate::error::{PartitionError, Result};
use crate::problem::Problem;

/// A candidate partition of a [`Problem`].
///
/// Implementors supply random instantiation, neighbor generation and
/// residue evaluation. The search runners handle everything else.
///
/// Neighbors are always fresh copies; the receiver is never modified.
///
/// # Examples
///
/// ```
/// use u_partition::repr::{SignSequence, Solution};
/// use u_partition::Problem;
///
/// let problem = Problem::new(vec![1, 1, 1, 1]).unwrap();
/// let s = SignSequence::from_signs(vec![1, 1, -1, -1]).unwrap();
/// assert_eq!(s.residue(&problem).unwrap(), 0);
/// ```
pub trait Solution: Clone + Send {
    /// Short name used in logs.
    const NAME: &'static str;

    /// Draws a uniformly random solution for a problem of `n` values.
    fn random<R: Rng>(n: usize, rng: &mut R) -> Self;

    /// Returns a copy of `self` with one or two assignments changed.
    fn neighbor<R: Rng>(&self, rng: &mut R) -> Self;

    /// Absolute difference between the two partition sums.
    ///
    /// Fails with [`PartitionError::LengthMismatch`] unless the solution
    /// has exactly one entry per problem value.
    fn residue(&self, problem: &Problem) -> Result<u64>;

    /// Number of entries (one per problem value).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Checks that a solution of length `actual` fits `problem`.
pub(crate) fn ensure_len(actual: usize, problem: &Problem) -> Result<()> {
    if actual != problem.len() {
        return Err(PartitionError::LengthMismatch {
            expected: problem.len(),
            actual,
        });
    }
    Ok(())
}

/// Selects one of the two solution encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Representation {
    /// One sign per value, see [`SignSequence`](super::SignSequence).
    #[default]
    SignSequence,
    /// One bucket per value, see [`Prepartition`](super::Prepartition).
    Prepartition,
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Representation::SignSequence => write!(f, "sign-sequence"),
            Representation::Prepartition => write!(f, "prepartition"),
        }
    }
}
