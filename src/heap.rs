//! Fixed-capacity binary max-heap.
//!
//! Backed by a single array indexed from 0: the children of node `i` are
//! `2i + 1` and `2i + 2`, its parent is `(i - 1) / 2`. Capacity is declared
//! up front and never grows; pushing onto a full heap is an error rather
//! than a silent drop, since a dropped value would corrupt any residue
//! computed from the heap.

use crate::error::{PartitionError, Result};

/// Array-backed max-heap with a fixed capacity.
///
/// # Examples
///
/// ```
/// use u_partition::heap::BoundedMaxHeap;
///
/// let mut heap = BoundedMaxHeap::with_capacity(3);
/// heap.push(4).unwrap();
/// heap.push(9).unwrap();
/// heap.push(1).unwrap();
/// assert!(heap.push(7).is_err());
/// assert_eq!(heap.pop_max().unwrap(), 9);
/// assert_eq!(heap.pop_max().unwrap(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedMaxHeap {
    data: Vec<u64>,
    capacity: usize,
}

impl BoundedMaxHeap {
    /// Creates an empty heap that can hold at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a heap holding every value of `values`, with capacity equal
    /// to the number of values.
    pub fn from_values(values: &[u64]) -> Self {
        let mut heap = Self::with_capacity(values.len());
        for &v in values {
            heap.insert(v);
        }
        heap
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the largest value without removing it.
    pub fn peek(&self) -> Option<u64> {
        self.data.first().copied()
    }

    /// Inserts `value`, failing with [`PartitionError::HeapFull`] when the
    /// heap already holds `capacity` values.
    pub fn push(&mut self, value: u64) -> Result<()> {
        if self.data.len() == self.capacity {
            return Err(PartitionError::HeapFull {
                capacity: self.capacity,
            });
        }
        self.insert(value);
        Ok(())
    }

    /// Removes and returns the largest value.
    pub fn pop_max(&mut self) -> Result<u64> {
        let last = self.data.pop().ok_or(PartitionError::EmptyHeap)?;
        if self.data.is_empty() {
            return Ok(last);
        }
        let max = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Ok(max)
    }

    /// Push without the capacity check. Callers guarantee room.
    fn insert(&mut self, value: u64) {
        debug_assert!(self.data.len() < self.capacity);
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] <= self.data[parent] {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let size = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut largest = index;

            if left < size && self.data[left] > self.data[largest] {
                largest = left;
            }
            if right < size && self.data[right] > self.data[largest] {
                largest = right;
            }
            if largest == index {
                break;
            }
            self.data.swap(index, largest);
            index = largest;
        }
    }

    #[cfg(test)]
    fn satisfies_heap_property(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2] >= self.data[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_descending() {
        let mut heap = BoundedMaxHeap::with_capacity(8);
        for v in [5, 17, 10, 84, 19, 6, 22, 9] {
            heap.push(v).unwrap();
            assert!(heap.satisfies_heap_property());
        }

        let mut drained = Vec::new();
        while !heap.is_empty() {
            drained.push(heap.pop_max().unwrap());
            assert!(heap.satisfies_heap_property());
        }
        assert_eq!(drained, vec![84, 22, 19, 17, 10, 9, 6, 5]);
    }

    #[test]
    fn test_push_full_is_error() {
        let mut heap = BoundedMaxHeap::with_capacity(2);
        heap.push(1).unwrap();
        heap.push(2).unwrap();

        let err = heap.push(3).unwrap_err();
        assert!(matches!(err, PartitionError::HeapFull { capacity: 2 }));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.peek(), Some(2));
    }

    #[test]
    fn test_pop_empty_is_error() {
        let mut heap = BoundedMaxHeap::with_capacity(4);
        assert!(matches!(heap.pop_max(), Err(PartitionError::EmptyHeap)));

        heap.push(3).unwrap();
        assert_eq!(heap.pop_max().unwrap(), 3);
        assert!(matches!(heap.pop_max(), Err(PartitionError::EmptyHeap)));
    }

    #[test]
    fn test_zero_capacity() {
        let mut heap = BoundedMaxHeap::with_capacity(0);
        assert!(heap.push(0).is_err());
        assert!(heap.pop_max().is_err());
    }

    #[test]
    fn test_duplicates_and_zeros() {
        let mut heap = BoundedMaxHeap::from_values(&[0, 4, 4, 0, 8]);
        assert_eq!(heap.capacity(), 5);
        assert!(heap.satisfies_heap_property());

        let drained: Vec<u64> = (0..5).map(|_| heap.pop_max().unwrap()).collect();
        assert_eq!(drained, vec![8, 4, 4, 0, 0]);
    }

    #[test]
    fn test_sift_down_picks_larger_child() {
        // After removing 10 the root becomes 1 and must swap with 7, not 3.
        let mut heap = BoundedMaxHeap::from_values(&[10, 3, 7, 1]);
        assert_eq!(heap.pop_max().unwrap(), 10);
        assert_eq!(heap.peek(), Some(7));
        assert!(heap.satisfies_heap_property());
    }

    #[test]
    fn test_refill_after_drain() {
        let mut heap = BoundedMaxHeap::with_capacity(2);
        heap.push(1).unwrap();
        heap.push(2).unwrap();
        heap.pop_max().unwrap();
        heap.push(5).unwrap();
        assert_eq!(heap.pop_max().unwrap(), 5);
        assert_eq!(heap.pop_max().unwrap(), 1);
    }
}
