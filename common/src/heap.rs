//! Array backed binary heap with a fixed capacity.
//!
//! The heap never looks into its items, they are ranked by a comparator passed on creation. `HeapKind`
//! selects whether the comparator's smallest (`Min`) or largest (`Max`) item sits at the root.
//!
//! The implicit binary tree is encoded in the array positions:
//! parent(i) = (i - 1) / 2, left(i) = 2i + 1, right(i) = 2i + 2

use core::cmp::Ordering;

use crate::HuffError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    Min,
    Max,
}

#[inline]
pub fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
pub fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub fn right(index: usize) -> usize {
    2 * index + 2
}

pub struct PriorityQueue<T, F> {
    items: Vec<T>,
    capacity: usize,
    kind: HeapKind,
    cmp: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// The storage for `capacity` items is allocated once, the queue never grows beyond it.
    pub fn new(capacity: usize, kind: HeapKind, cmp: F) -> Self {
        PriorityQueue {
            items: Vec::with_capacity(capacity),
            capacity,
            kind,
            cmp,
        }
    }

    pub fn new_min(capacity: usize, cmp: F) -> Self {
        Self::new(capacity, HeapKind::Min, cmp)
    }

    pub fn new_max(capacity: usize, cmp: F) -> Self {
        Self::new(capacity, HeapKind::Max, cmp)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// item at array position `index`, the root is at 0
    #[inline]
    pub fn peek_at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Inserts `item` and floats it up to its place.
    ///
    /// Fails without touching the queue if it is full.
    pub fn insert(&mut self, item: T) -> Result<(), HuffError> {
        if self.items.len() >= self.capacity {
            return Err(HuffError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
        Ok(())
    }

    /// Removes and returns the root, `None` if the queue is empty.
    pub fn extract(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let root = self.items.swap_remove(0);
        self.sift_down(0);
        Some(root)
    }

    /// true if `a` has to sit above `b`
    #[inline]
    fn prefers(&self, a: &T, b: &T) -> bool {
        let ordering = (self.cmp)(a, b);
        match self.kind {
            HeapKind::Min => ordering == Ordering::Less,
            HeapKind::Max => ordering == Ordering::Greater,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent_index = parent(index);
            if !self.prefers(&self.items[index], &self.items[parent_index]) {
                break;
            }
            self.items.swap(index, parent_index);
            index = parent_index;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let size = self.items.len();
        loop {
            let left_index = left(index);
            let right_index = right(index);

            let mut top = index;
            if left_index < size && self.prefers(&self.items[left_index], &self.items[top]) {
                top = left_index;
            }
            if right_index < size && self.prefers(&self.items[right_index], &self.items[top]) {
                top = right_index;
            }
            if top == index {
                break;
            }
            self.items.swap(index, top);
            index = top;
        }
    }

    /// checks the heap property for every parent in the array
    pub fn is_valid_heap(&self) -> bool {
        (1..self.items.len()).all(|index| !self.prefers(&self.items[index], &self.items[parent(index)]))
    }
}

impl<T: core::fmt::Debug, F> core::fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("kind", &self.kind)
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}
