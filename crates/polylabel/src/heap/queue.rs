//! Priority-queue vocabulary on top of `Heap`.

use super::Heap;

/// Priority queue: `dequeue` returns the element ordered first by `order`.
#[derive(Clone)]
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    heap: Heap<T, F>,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(order: F) -> Self {
        Self {
            heap: Heap::new(order),
        }
    }

    pub fn with_capacity(capacity: usize, order: F) -> Self {
        Self {
            heap: Heap::with_capacity(capacity, order),
        }
    }

    pub fn from_vec(items: Vec<T>, order: F) -> Self {
        Self {
            heap: Heap::from_vec(items, order),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.heap.insert(item);
    }
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.remove()
    }

    /// Swap the element at `index` for `value` (with its new priority).
    pub fn change_priority(&mut self, index: usize, value: T) {
        self.heap.replace(index, value);
    }

    pub fn into_heap(self) -> Heap<T, F> {
        self.heap
    }
}

impl<T: PartialEq, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.heap.index_of(item)
    }
}

impl<T, F> Extend<T> for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter);
    }
}

impl<T, F> Iterator for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Item = T;

    /// Draining iteration in priority order.
    fn next(&mut self) -> Option<T> {
        self.dequeue()
    }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}
