//! Binary min-heap ordered by a caller-supplied predicate.
//!
//! Storage is a 0-indexed `Vec` with `parent(i) = (i - 1) / 2`,
//! `left(i) = 2i + 1` and `right(i) = 2i + 2`. The predicate
//! `before(a, b)` answers "must `a` be popped no later than `b`"; for every
//! non-root index `i`, `before(nodes[i], nodes[parent(i)])` is false.
//!
//! Membership queries ([`contains`](Heap::contains),
//! [`index_of`](Heap::index_of)) are linear scans by equality. That is
//! fine for the grid sizes this engine targets (tens to a few hundred
//! cells) and is the main scalability limit of the type.

use std::fmt;

/// A min-heap over `T` ordered by the predicate `F`.
pub struct Heap<T, F> {
    nodes: Vec<T>,
    before: F,
}

#[inline(always)]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline(always)]
fn left_child(i: usize) -> usize {
    2 * i + 1
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty heap.
    pub fn new(before: F) -> Self {
        Self {
            nodes: Vec::new(),
            before,
        }
    }

    /// Build a heap from an arbitrary vector in O(n).
    pub fn from_vec(nodes: Vec<T>, before: F) -> Self {
        let mut heap = Self { nodes, before };
        // Sift down every node of the upper half, bottom-up.
        for i in (0..heap.nodes.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `⌊log2(len)⌋`, the index of the deepest level; 0 when empty.
    pub fn depth(&self) -> usize {
        match self.nodes.len() {
            0 => 0,
            n => n.ilog2() as usize,
        }
    }

    /// The element [`extract_min`](Self::extract_min) would return.
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Iterate in storage order (not sorted).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.nodes.iter()
    }

    /// Add an element. O(log n).
    pub fn insert(&mut self, value: T) {
        self.nodes.push(value);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Remove and return the root. O(log n).
    pub fn extract_min(&mut self) -> Option<T> {
        if self.nodes.is_empty() {
            return None;
        }
        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        let min = self.nodes.pop();
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Remove the element stored at `index`. O(log n).
    ///
    /// Returns `None` if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.nodes.len() {
            return None;
        }
        let last = self.nodes.len() - 1;
        if index != last {
            self.nodes.swap(index, last);
            // The removed value still sits at `last`; keep it out of reach.
            self.sift_down_until(index, last);
            self.sift_up(index);
        }
        self.nodes.pop()
    }

    /// Replace the element at `index` with `value`, restoring heap order.
    ///
    /// Implemented as remove-then-insert. No-op if `index` is out of range.
    pub fn replace(&mut self, index: usize, value: T) {
        if index >= self.nodes.len() {
            return;
        }
        self.remove_at(index);
        self.insert(value);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if !(self.before)(&self.nodes[i], &self.nodes[p]) {
                break;
            }
            self.nodes.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, i: usize) {
        self.sift_down_until(i, self.nodes.len());
    }

    /// Sift down considering only indices below `end`.
    fn sift_down_until(&mut self, mut i: usize, end: usize) {
        loop {
            let l = left_child(i);
            let r = l + 1;
            let mut target = i;
            if l < end && (self.before)(&self.nodes[l], &self.nodes[target]) {
                target = l;
            }
            if r < end && (self.before)(&self.nodes[r], &self.nodes[target]) {
                target = r;
            }
            if target == i {
                return;
            }
            self.nodes.swap(i, target);
            i = target;
        }
    }
}

impl<T, F> Heap<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> bool,
{
    /// Whether an element equal to `value` is stored. O(n).
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Storage index of the first element equal to `value`. O(n).
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.nodes.iter().position(|n| n == value)
    }

    /// Remove the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let i = self.index_of(value)?;
        self.remove_at(i)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap").field("nodes", &self.nodes).finish()
    }
}
