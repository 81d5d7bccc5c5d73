//! Binary heap and priority queue with a caller-supplied ordering.
//!
//! Purpose
//! - `std::collections::BinaryHeap` needs `Ord` on the element type; cells carry
//!   `f64` scores, so we inject the order as a closure instead and keep the
//!   element type plain.
//!
//! Conventions
//! - `order(a, b)` returns true iff `a` must leave the heap before `b` (a strict
//!   weak ordering). `|a, b| a > b` yields a max-heap, `|a, b| a < b` a min-heap.
//! - Elements are moved in and out by value; no `&mut T` access.
//! - Indices refer to the internal array layout (root at 0, children of `i` at
//!   `2i + 1` and `2i + 2`). Out-of-range indices are ignored.

mod queue;

pub use queue::PriorityQueue;

/// Array-backed binary heap ordered by `order`.
#[derive(Clone)]
pub struct Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    nodes: Vec<T>,
    order: F,
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Empty heap.
    pub fn new(order: F) -> Self {
        Self {
            nodes: Vec::new(),
            order,
        }
    }

    /// Empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, order: F) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Heapify an existing vector in O(n): sift down from the last parent to the root.
    pub fn from_vec(nodes: Vec<T>, order: F) -> Self {
        let mut heap = Self { nodes, order };
        for i in (0..heap.nodes.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Highest-priority element, if any.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Elements in internal (heap) order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.nodes
    }

    pub fn insert(&mut self, value: T) {
        self.nodes.push(value);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Replace the element at `index`; the heap is re-balanced around the new value.
    pub fn replace(&mut self, index: usize, value: T) {
        if index >= self.nodes.len() {
            return;
        }
        self.remove_at(index);
        self.insert(value);
    }

    /// Pop the highest-priority element.
    pub fn remove(&mut self) -> Option<T> {
        if self.nodes.is_empty() {
            return None;
        }
        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        let top = self.nodes.pop();
        self.sift_down(0);
        top
    }

    /// Remove the element at `index` (array position, not priority rank).
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let len = self.nodes.len();
        if index >= len {
            return None;
        }
        let last = len - 1;
        if index != last {
            self.nodes.swap(index, last);
            self.sift_down_until(index, last);
            self.sift_up(index);
        }
        self.nodes.pop()
    }

    /// Consume the heap, returning elements in internal order.
    pub fn into_vec(self) -> Vec<T> {
        self.nodes
    }

    /// Consume the heap, returning elements in priority order (heap sort).
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        while let Some(v) = self.remove() {
            out.push(v);
        }
        out
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if !(self.order)(&self.nodes[child], &self.nodes[parent]) {
                break;
            }
            self.nodes.swap(child, parent);
            child = parent;
        }
    }

    #[inline]
    fn sift_down(&mut self, index: usize) {
        self.sift_down_until(index, self.nodes.len());
    }

    /// Sift `index` down considering only positions `< end`.
    fn sift_down_until(&mut self, mut index: usize, end: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut first = index;
            if left < end && (self.order)(&self.nodes[left], &self.nodes[first]) {
                first = left;
            }
            if right < end && (self.order)(&self.nodes[right], &self.nodes[first]) {
                first = right;
            }
            if first == index {
                return;
            }
            self.nodes.swap(index, first);
            index = first;
        }
    }
}

impl<T: PartialEq, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Array position of the first element equal to `node` (linear scan).
    pub fn index_of(&self, node: &T) -> Option<usize> {
        self.nodes.iter().position(|n| n == node)
    }

    /// Remove the first element equal to `node`.
    pub fn remove_node(&mut self, node: &T) -> Option<T> {
        let index = self.index_of(node)?;
        self.remove_at(index)
    }
}

impl<T, F> Extend<T> for Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heap").field("nodes", &self.nodes).finish()
    }
}
