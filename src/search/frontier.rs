//! Frontier primitives shared by the graph search strategies: a LIFO stack,
//! a FIFO queue, and a min-priority frontier.

use crate::search::heuristics::HeuristicValue;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: vec![] }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A min-priority frontier over arbitrary (not necessarily hashable) items.
/// Items are registered in a slab and the priority queue orders their ids,
/// so search nodes carrying paths never need `Hash` themselves.
#[derive(Debug)]
pub struct MinPriorityFrontier<T> {
    entries: Vec<Option<T>>,
    queue: PriorityQueue<usize, Reverse<HeuristicValue>>,
}

impl<T> MinPriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            queue: PriorityQueue::new(),
        }
    }

    pub fn push(&mut self, item: T, priority: f64) {
        let id = self.entries.len();
        self.entries.push(Some(item));
        self.queue.push(id, Reverse(OrderedFloat(priority)));
    }

    pub fn pop(&mut self) -> Option<T> {
        let (id, _) = self.queue.pop()?;
        self.entries[id].take()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T> Default for MinPriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = FifoQueue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn priority_frontier_pops_minimum_first() {
        let mut frontier = MinPriorityFrontier::new();
        frontier.push("far", 7.0);
        frontier.push("near", 1.0);
        frontier.push("middle", 3.5);
        assert_eq!(frontier.pop(), Some("near"));
        assert_eq!(frontier.pop(), Some("middle"));
        assert_eq!(frontier.pop(), Some("far"));
        assert!(frontier.is_empty());
    }
}
