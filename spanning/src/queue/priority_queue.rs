//! This module defines [PriorityQueue].

use std::{cmp::Ordering, collections::HashMap, fmt, hash::Hash};

use crate::error::Error;

use super::Queue;

/// Signature of the comparison function used by [PriorityQueue::min_heap] and [PriorityQueue::max_heap]
pub type NaturalOrder<E> = fn(&E, &E) -> Ordering;

/// Priority queue implemented as an indexed binary heap
///
/// Elements are kept in a vector representing a complete binary tree.
/// Additionally, each element is associated with its current position in that vector,
/// which allows checking for and removing arbitrary elements in logarithmic time.
///
/// Whether the smallest or largest element (according to `comparator`) is kept at the top
/// is decided on construction.
/// The relative order of elements that compare as equal is unspecified.
pub struct PriorityQueue<E, F> {
    heap: Vec<E>,
    index_map: HashMap<E, usize>,

    comparator: F,
    use_min_heap: bool,
}

impl<E, F> PriorityQueue<E, F>
where
    E: Clone + Eq + Hash,
    F: Fn(&E, &E) -> Ordering,
{
    /// Create a new empty [PriorityQueue].
    ///
    /// If `use_min_heap` is `true`, the smallest element according to `comparator`
    /// is at the top, otherwise the largest one.
    pub fn new(comparator: F, use_min_heap: bool) -> Self {
        Self::with_capacity(comparator, use_min_heap, 0)
    }

    /// Create a new empty [PriorityQueue] with space for at least `capacity` elements.
    pub fn with_capacity(comparator: F, use_min_heap: bool, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index_map: HashMap::with_capacity(capacity),
            comparator,
            use_min_heap,
        }
    }

    /// Return `true` if the smallest element is kept at the top.
    pub fn is_min_heap(&self) -> bool {
        self.use_min_heap
    }

    /// Consume the queue and return its elements in the order they would be popped.
    pub fn into_sorted_vec(mut self) -> Vec<E> {
        let mut result = Vec::with_capacity(self.heap.len());
        while let Ok(element) = self.pop() {
            result.push(element);
        }

        result
    }

    /// Return `true` if the element at position `first`
    /// has to be placed above the element at position `second`.
    fn precedes(&self, first: usize, second: usize) -> bool {
        let ordering = (self.comparator)(&self.heap[first], &self.heap[second]);

        if self.use_min_heap {
            ordering == Ordering::Less
        } else {
            ordering == Ordering::Greater
        }
    }

    /// Exchange the elements at the given positions, keeping the index map up to date.
    fn swap(&mut self, first: usize, second: usize) {
        if first == second {
            return;
        }

        self.heap.swap(first, second);
        *self
            .index_map
            .get_mut(&self.heap[first])
            .expect("every element in the heap has an index") = first;
        *self
            .index_map
            .get_mut(&self.heap[second])
            .expect("every element in the heap has an index") = second;
    }

    /// Move the element at `index` towards the root until its parent precedes it.
    /// Returns the final position of the element.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.precedes(index, parent) {
                break;
            }

            self.swap(index, parent);
            index = parent;
        }

        index
    }

    /// Move the element at `index` towards the leaves until it precedes both children.
    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            if left >= self.heap.len() {
                break;
            }

            let right = left + 1;
            let child = if right < self.heap.len() && self.precedes(right, left) {
                right
            } else {
                left
            };

            if !self.precedes(child, index) {
                break;
            }

            self.swap(index, child);
            index = child;
        }
    }

    /// Remove the element at position `index`.
    fn remove_at(&mut self, index: usize) -> E {
        let last = self.heap.len() - 1;
        self.swap(index, last);

        let element = self
            .heap
            .pop()
            .expect("function is only called on non-empty heaps");
        self.index_map.remove(&element);

        // The former last element now sits at `index` and may violate the order in either direction.
        if index < self.heap.len() && self.sift_up(index) == index {
            self.sift_down(index);
        }

        element
    }
}

impl<E> PriorityQueue<E, NaturalOrder<E>>
where
    E: Ord + Clone + Hash,
{
    /// Create a new [PriorityQueue] returning the smallest element first.
    pub fn min_heap() -> Self {
        Self::new(Ord::cmp, true)
    }

    /// Create a new [PriorityQueue] returning the largest element first.
    pub fn max_heap() -> Self {
        Self::new(Ord::cmp, false)
    }
}

impl<E, F> Queue<E> for PriorityQueue<E, F>
where
    E: Clone + Eq + Hash,
    F: Fn(&E, &E) -> Ordering,
{
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, element: E) -> bool {
        if self.contains(&element) {
            return false;
        }

        let index = self.heap.len();
        self.index_map.insert(element.clone(), index);
        self.heap.push(element);
        self.sift_up(index);

        true
    }

    fn contains(&self, element: &E) -> bool {
        self.index_map.contains_key(element)
    }

    fn top(&self) -> Option<&E> {
        self.heap.first()
    }

    fn pop(&mut self) -> Result<E, Error> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }

        Ok(self.remove_at(0))
    }

    fn remove(&mut self, element: &E) -> bool {
        match self.index_map.get(element) {
            Some(&index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }
}

impl<E: fmt::Debug, F> fmt::Debug for PriorityQueue<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .field("use_min_heap", &self.use_min_heap)
            .finish_non_exhaustive()
    }
}
