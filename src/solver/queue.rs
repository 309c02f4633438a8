// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// A bucketed priority queue over small integer priorities. Items of equal priority are popped
/// in insertion order, so ties are broken by discovery order.
pub(crate) struct BucketQueue<T> {
    buckets: Vec<VecDeque<T>>,
    // no non-empty bucket below this index
    cursor: usize,
    len: usize,
}

impl<T> BucketQueue<T> {
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
            cursor: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, priority: usize, item: T) {
        if priority >= self.buckets.len() {
            self.buckets.resize_with(priority + 1, VecDeque::new);
        }
        self.buckets[priority].push_back(item);
        self.cursor = self.cursor.min(priority);
        self.len += 1;
    }

    pub fn pop_min(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        while self.buckets[self.cursor].is_empty() {
            self.cursor += 1;
        }
        self.len -= 1;
        self.buckets[self.cursor].pop_front()
    }

    pub fn len(&self) -> usize {
        self.len
    }
}
