//! Problem instances.
//!
//! An instance is an ordered, immutable sequence of non-negative integers.
//! Construction checks that the sequence is non-empty and that its total
//! fits in `u64`, so every bucket sum and every signed sum computed later
//! is representable.
//!
//! Instances are stored on disk as plain text, one integer per line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rand::Rng;
use tracing::debug;

use crate::error::{PartitionError, Result};

/// Number of values in a canonical instance.
pub const DEFAULT_SIZE: usize = 100;

/// Upper bound (inclusive) for randomly generated values.
pub const MAX_GENERATED_VALUE: u64 = 1_000_000_000_000;

/// A validated number partitioning instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u64>", into = "Vec<u64>"))]
pub struct Problem {
    values: Vec<u64>,
    total: u64,
}

impl Problem {
    /// Creates an instance from `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::Problem;
    ///
    /// let problem = Problem::new(vec![4, 4, 4]).unwrap();
    /// assert_eq!(problem.len(), 3);
    /// assert_eq!(problem.total(), 12);
    /// assert!(Problem::new(vec![]).is_err());
    /// ```
    pub fn new(values: Vec<u64>) -> Result<Self> {
        if values.is_empty() {
            return Err(PartitionError::EmptyProblem);
        }
        let total = values
            .iter()
            .try_fold(0u64, |acc, &v| acc.checked_add(v))
            .ok_or(PartitionError::SumOverflow)?;
        Ok(Self { values, total })
    }

    /// Draws `n` values uniformly from `[1, MAX_GENERATED_VALUE]`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self> {
        let values = (0..n)
            .map(|_| rng.random_range(1..=MAX_GENERATED_VALUE))
            .collect();
        Self::new(values)
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the instance holds no values. Construction rejects empty
    /// input, so this is false for every `Problem`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all values.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Parses an instance from text with one integer per line. Blank lines
    /// are skipped.
    pub fn from_reader<B: BufRead>(reader: B) -> Result<Self> {
        let mut values = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let value = trimmed.parse::<u64>().map_err(|e| PartitionError::Parse {
                line: idx + 1,
                message: format!("'{trimmed}': {e}"),
            })?;
            values.push(value);
        }
        Self::new(values)
    }

    /// Reads an instance file.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let problem = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), size = problem.len(), "loaded instance");
        Ok(problem)
    }

    /// Writes the instance as one integer per line.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for v in &self.values {
            writeln!(writer, "{v}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes the instance to a file, replacing any existing content.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        debug!(path = %path.display(), size = self.len(), "wrote instance");
        Ok(())
    }
}

impl TryFrom<Vec<u64>> for Problem {
    type Error = PartitionError;

    fn try_from(values: Vec<u64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<Problem> for Vec<u64> {
    fn from(problem: Problem) -> Self {
        problem.values
    }
}
