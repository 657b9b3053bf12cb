//! This module defines the [Queue] abstraction and the heap-backed [PriorityQueue].

pub(crate) mod priority_queue;

pub use priority_queue::PriorityQueue;

use crate::error::Error;

/// Capabilities of a queue holding unique elements of type `E`.
pub trait Queue<E> {
    /// Return `true` if the queue holds no elements.
    fn is_empty(&self) -> bool;

    /// Return the number of elements in the queue.
    fn len(&self) -> usize;

    /// Add `element` to the queue.
    ///
    /// Returns `false` without changing the queue if the element is already present.
    fn push(&mut self, element: E) -> bool;

    /// Return `true` if `element` is currently in the queue.
    fn contains(&self, element: &E) -> bool;

    /// Return the element at the front of the queue without removing it.
    fn top(&self) -> Option<&E>;

    /// Remove and return the element at the front of the queue.
    ///
    /// # Errors
    /// Returns [Error::EmptyQueue] if there is no element.
    fn pop(&mut self) -> Result<E, Error>;

    /// Remove `element` from the queue.
    ///
    /// Returns `false` if the element was not present.
    fn remove(&mut self, element: &E) -> bool;
}
