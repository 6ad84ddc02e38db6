//! Mutable min-priority queue over vertex indices.
//!
//! A binary heap that remembers where each vertex sits, so Dijkstra can lower a
//! tentative distance in place (`decrease_key`) instead of pushing duplicates.

use std::cmp::Ordering;

use crate::graph::VertexIdx;

const NOT_QUEUED: usize = usize::MAX;

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct FloatOrd(pub(crate) f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct QueueEntry {
    key: FloatOrd,
    vertex: VertexIdx,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Indexed binary min-heap keyed by tentative distance.
#[derive(Debug)]
pub struct MutablePriorityQueue {
    positions: Vec<usize>,
    data: Vec<QueueEntry>,
}

impl MutablePriorityQueue {
    /// Create an empty queue able to hold vertices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            positions: vec![NOT_QUEUED; capacity],
            data: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, vertex: VertexIdx) -> bool {
        self.positions[vertex] != NOT_QUEUED
    }

    /// Key currently stored for `vertex`, if queued.
    pub fn key(&self, vertex: VertexIdx) -> Option<f64> {
        match self.positions[vertex] {
            NOT_QUEUED => None,
            position => Some(self.data[position].key.0),
        }
    }

    /// Insert a vertex that is not yet queued. Already-queued vertices are
    /// moved to the new key instead.
    pub fn insert(&mut self, vertex: VertexIdx, key: f64) {
        if self.contains(vertex) {
            self.decrease_key(vertex, key);
            return;
        }
        let position = self.data.len();
        self.positions[vertex] = position;
        self.data.push(QueueEntry {
            key: FloatOrd(key),
            vertex,
        });
        self.sift_up(position);
    }

    /// Remove and return the vertex with the smallest key.
    pub fn extract_min(&mut self) -> Option<(VertexIdx, f64)> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.swap(0, last);
        let entry = self.data.pop()?;
        self.positions[entry.vertex] = NOT_QUEUED;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some((entry.vertex, entry.key.0))
    }

    /// Lower the key of a queued vertex. Larger keys and unqueued vertices are
    /// ignored.
    pub fn decrease_key(&mut self, vertex: VertexIdx, key: f64) {
        let position = self.positions[vertex];
        if position == NOT_QUEUED {
            return;
        }
        if FloatOrd(key) >= self.data[position].key {
            return;
        }
        self.data[position].key = FloatOrd(key);
        self.sift_up(position);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.data[parent] <= self.data[position] {
                break;
            }
            self.swap(parent, position);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;
            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }
            if smallest == position {
                return;
            }
            self.swap(position, smallest);
            position = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.positions[self.data[a].vertex] = a;
        self.positions[self.data[b].vertex] = b;
    }
}
