//! Karmarkar-Karp differencing.
//!
//! Repeatedly replaces the two largest values with their difference until a
//! single value, the residue, remains. The result depends only on the
//! multiset of inputs, never on their order.
//!
//! # Reference
//!
//! Karmarkar, N. & Karp, R. M. (1982). "The differencing method of set
//! partitioning", Technical Report UCB/CSD 82/113.

use crate::error::Result;
use crate::heap::BoundedMaxHeap;

/// Drains `heap` by differencing and returns the residue.
///
/// Fails with [`PartitionError::EmptyHeap`](crate::PartitionError::EmptyHeap)
/// when the heap holds no values.
pub fn karmarkar_karp(heap: &mut BoundedMaxHeap) -> Result<u64> {
    while heap.len() > 1 {
        let first = heap.pop_max()?;
        let second = heap.pop_max()?;
        heap.push(first - second)?;
    }
    heap.pop_max()
}

/// Runs Karmarkar-Karp over `values`.
///
/// # Examples
///
/// ```
/// use u_partition::kk::kk;
///
/// assert_eq!(kk(&[10, 8, 7, 6, 5]).unwrap(), 2);
/// assert!(kk(&[]).is_err());
/// ```
pub fn kk(values: &[u64]) -> Result<u64> {
    let mut heap = BoundedMaxHeap::from_values(values);
    karmarkar_karp(&mut heap)
}
