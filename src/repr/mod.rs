//! Solution encodings.
//!
//! Two encodings of a two-way partition share the [`Solution`] trait:
//!
//! - [`SignSequence`]: a `+1`/`-1` sign per value; residue is the absolute
//!   signed sum.
//! - [`Prepartition`]: a bucket per value; residue is Karmarkar-Karp over
//!   the bucket sums.
//!
//! # References
//!
//! Ruml, W., Ngo, J. T., Marks, J. & Shieber, S. M. (1996). "Easily
//! searched encodings for number partitioning", *Journal of Optimization
//! Theory and Applications* 89(2), 251-291.

mod prepartition;
mod sign;
mod types;

pub use prepartition::Prepartition;
pub use sign::SignSequence;
pub use types::{Representation, Solution};
