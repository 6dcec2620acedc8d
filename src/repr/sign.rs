//! Direct sign encoding.

use rand::Rng;

use super::types::{ensure_len, Solution};
use crate::error::{PartitionError, Result};
use crate::problem::Problem;

/// Assigns every value a sign of `+1` or `-1`; values sharing a sign form
/// one subset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<i8>", into = "Vec<i8>"))]
pub struct SignSequence {
    signs: Vec<i8>,
}

impl SignSequence {
    /// Wraps explicit signs, rejecting anything other than `1` and `-1`.
    pub fn from_signs(signs: Vec<i8>) -> Result<Self> {
        if let Some(pos) = signs.iter().position(|&s| s != 1 && s != -1) {
            return Err(PartitionError::InvalidSolution(format!(
                "sign at index {pos} is {}, expected 1 or -1",
                signs[pos]
            )));
        }
        Ok(Self { signs })
    }

    pub fn signs(&self) -> &[i8] {
        &self.signs
    }

    /// Sets the sign at `index`.
    pub fn set(&mut self, index: usize, sign: i8) -> Result<()> {
        if sign != 1 && sign != -1 {
            return Err(PartitionError::InvalidSolution(format!(
                "sign {sign} is not 1 or -1"
            )));
        }
        let len = self.signs.len();
        let slot = self.signs.get_mut(index).ok_or_else(|| {
            PartitionError::InvalidSolution(format!("index {index} out of range for length {len}"))
        })?;
        *slot = sign;
        Ok(())
    }

    fn flip(&mut self, index: usize) {
        self.signs[index] = -self.signs[index];
    }
}

impl TryFrom<Vec<i8>> for SignSequence {
    type Error = PartitionError;

    fn try_from(signs: Vec<i8>) -> Result<Self> {
        Self::from_signs(signs)
    }
}

impl From<SignSequence> for Vec<i8> {
    fn from(s: SignSequence) -> Self {
        s.signs
    }
}

impl Solution for SignSequence {
    const NAME: &'static str = "sign-sequence";

    fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let signs = (0..n)
            .map(|_| if rng.random::<bool>() { 1 } else { -1 })
            .collect();
        Self { signs }
    }

    /// Flips one random position and, with probability 0.5, a second
    /// distinct one.
    fn neighbor<R: Rng>(&self, rng: &mut R) -> Self {
        let mut next = self.clone();
        let n = next.signs.len();
        if n == 0 {
            return next;
        }

        let i = rng.random_range(0..n);
        next.flip(i);
        if n == 1 {
            return next;
        }

        let mut j = rng.random_range(0..n);
        while j == i {
            j = rng.random_range(0..n);
        }
        if rng.random_bool(0.5) {
            next.flip(j);
        }
        next
    }

    fn residue(&self, problem: &Problem) -> Result<u64> {
        ensure_len(self.signs.len(), problem)?;
        let sum: i128 = problem
            .values()
            .iter()
            .zip(&self.signs)
            .map(|(&v, &s)| v as i128 * s as i128)
            .sum();
        // |sum| <= problem.total(), which fits in u64.
        Ok(sum.unsigned_abs() as u64)
    }

    fn len(&self) -> usize {
        self.signs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn differing_positions(a: &SignSequence, b: &SignSequence) -> usize {
        a.signs()
            .iter()
            .zip(b.signs())
            .filter(|(x, y)| x != y)
            .count()
    }

    #[test]
    fn test_residue_balanced() {
        let problem = Problem::new(vec![1, 1, 1, 1]).unwrap();
        let s = SignSequence::from_signs(vec![1, 1, -1, -1]).unwrap();
        assert_eq!(s.residue(&problem).unwrap(), 0);
    }

    #[test]
    fn test_residue_absolute_value() {
        let problem = Problem::new(vec![10, 8, 7]).unwrap();
        let s = SignSequence::from_signs(vec![-1, -1, 1]).unwrap();
        assert_eq!(s.residue(&problem).unwrap(), 11);
    }

    #[test]
    fn test_residue_extreme_values() {
        let problem = Problem::new(vec![u64::MAX, 0]).unwrap();
        let s = SignSequence::from_signs(vec![-1, 1]).unwrap();
        assert_eq!(s.residue(&problem).unwrap(), u64::MAX);
    }

    #[test]
    fn test_global_flip_invariant() {
        let problem = Problem::new(vec![9, 2, 6, 5, 3]).unwrap();
        let mut rng = create_rng(Some(11));
        for _ in 0..50 {
            let s = SignSequence::random(problem.len(), &mut rng);
            let flipped =
                SignSequence::from_signs(s.signs().iter().map(|&x| -x).collect()).unwrap();
            assert_eq!(s.residue(&problem).unwrap(), flipped.residue(&problem).unwrap());
        }
    }

    #[test]
    fn test_random_values_are_signs() {
        let mut rng = create_rng(Some(5));
        let s = SignSequence::random(200, &mut rng);
        assert_eq!(s.len(), 200);
        assert!(s.signs().iter().all(|&x| x == 1 || x == -1));
        assert!(s.signs().contains(&1));
        assert!(s.signs().contains(&-1));
    }

    #[test]
    fn test_neighbor_changes_one_or_two() {
        let mut rng = create_rng(Some(9));
        let s = SignSequence::random(30, &mut rng);
        let mut seen_one = false;
        let mut seen_two = false;
        for _ in 0..200 {
            let n = s.neighbor(&mut rng);
            match differing_positions(&s, &n) {
                1 => seen_one = true,
                2 => seen_two = true,
                d => panic!("neighbor differs in {d} positions"),
            }
        }
        assert!(seen_one && seen_two);
    }

    #[test]
    fn test_neighbor_single_element() {
        let mut rng = create_rng(Some(1));
        let s = SignSequence::from_signs(vec![1]).unwrap();
        assert_eq!(s.neighbor(&mut rng).signs(), &[-1]);
    }

    #[test]
    fn test_from_signs_rejects_zero() {
        assert!(SignSequence::from_signs(vec![1, 0, -1]).is_err());
    }

    #[test]
    fn test_set() {
        let mut s = SignSequence::from_signs(vec![1, 1]).unwrap();
        s.set(1, -1).unwrap();
        assert_eq!(s.signs(), &[1, -1]);
        assert!(s.set(2, 1).is_err());
        assert!(s.set(0, 2).is_err());
    }

    #[test]
    fn test_residue_rejects_length_mismatch() {
        let problem = Problem::new(vec![1, 2, 3]).unwrap();
        let s = SignSequence::from_signs(vec![1, -1]).unwrap();
        assert!(matches!(
            s.residue(&problem),
            Err(PartitionError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_residue_rejects_shorter_and_empty() {
        let problem = Problem::new(vec![5, 5, 5]).unwrap();
        let short = SignSequence::from_signs(vec![1]).unwrap();
        let empty = SignSequence::from_signs(vec![]).unwrap();
        assert!(short.residue(&problem).is_err());
        assert!(empty.residue(&problem).is_err());
    }

    #[test]
    fn test_try_from_validates() {
        assert!(SignSequence::try_from(vec![1, -1]).is_ok());
        assert!(SignSequence::try_from(vec![1, 3]).is_err());
        let back: Vec<i8> = SignSequence::try_from(vec![-1, 1]).unwrap().into();
        assert_eq!(back, vec![-1, 1]);
    }
}
