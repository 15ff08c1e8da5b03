//! Fixed-capacity FIFO queue

use std::collections::vec_deque::{Iter, VecDeque};

use serde::{Deserialize, Serialize};

/// Queue holding at most `N` items; pushing onto a full queue evicts the
/// oldest item. Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<T>", into = "Vec<T>")]
#[serde(bound(serialize = "T: Clone + Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct BoundedQueue<T, const N: usize> {
    items: VecDeque<T>,
}

impl<T, const N: usize> BoundedQueue<T, N> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(N),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Push an item, returning the evicted item if the queue was full
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() >= N {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Oldest to newest
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// The `n` newest items, oldest first
    pub fn latest(&self, n: usize) -> impl Iterator<Item = &T> {
        self.items.iter().skip(self.items.len().saturating_sub(n))
    }
}

impl<T, const N: usize> Default for BoundedQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<Vec<T>> for BoundedQueue<T, N> {
    /// Keeps the newest `N` items of an over-long array
    fn from(items: Vec<T>) -> Self {
        let mut queue = Self::new();
        for item in items {
            queue.push(item);
        }
        queue
    }
}

impl<T, const N: usize> From<BoundedQueue<T, N>> for Vec<T> {
    fn from(queue: BoundedQueue<T, N>) -> Self {
        queue.items.into()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedQueue<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_evicts_oldest() {
        let mut queue: BoundedQueue<u32, 3> = BoundedQueue::new();
        assert_eq!(queue.push(1), None);
        assert_eq!(queue.push(2), None);
        assert_eq!(queue.push(3), None);
        assert_eq!(queue.push(4), Some(1));

        let items: Vec<u32> = queue.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 4]);
        assert_eq!(queue.len(), queue.capacity());
    }

    #[test]
    fn test_latest() {
        let queue: BoundedQueue<u32, 10> = BoundedQueue::from(vec![1, 2, 3, 4, 5, 6]);
        let latest: Vec<u32> = queue.latest(3).copied().collect();
        assert_eq!(latest, vec![4, 5, 6]);

        let all: Vec<u32> = queue.latest(50).copied().collect();
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn test_deserialize_truncates_to_capacity() {
        let queue: BoundedQueue<u32, 2> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(serde_json::to_string(&queue).unwrap(), "[2,3]");
    }
}
