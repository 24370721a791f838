use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Discovered-but-not-yet-expanded nodes awaiting exploration. The pop
/// order is the whole difference between the three strategies; the driver
/// loop is shared.
pub(crate) trait Frontier<N> {
    fn push(&mut self, node: N, f_cost: f64);
    fn pop_next(&mut self) -> Option<N>;
    fn is_empty(&self) -> bool;
}

/// LIFO frontier: depth-first exploration.
#[derive(Debug, Default)]
pub(crate) struct StackFrontier<N> {
    entries: Vec<N>,
}

impl<N> StackFrontier<N> {
    pub(crate) fn new() -> Self {
        StackFrontier {
            entries: Vec::new(),
        }
    }
}

impl<N> Frontier<N> for StackFrontier<N> {
    fn push(&mut self, node: N, _f_cost: f64) {
        self.entries.push(node);
    }

    fn pop_next(&mut self) -> Option<N> {
        self.entries.pop()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// FIFO frontier: breadth-first exploration.
#[derive(Debug, Default)]
pub(crate) struct QueueFrontier<N> {
    entries: VecDeque<N>,
}

impl<N> QueueFrontier<N> {
    pub(crate) fn new() -> Self {
        QueueFrontier {
            entries: VecDeque::new(),
        }
    }
}

impl<N> Frontier<N> for QueueFrontier<N> {
    fn push(&mut self, node: N, _f_cost: f64) {
        self.entries.push_back(node);
    }

    fn pop_next(&mut self) -> Option<N> {
        self.entries.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
struct OpenEntry<N> {
    node: N,
    f_cost: f64,
    seq: usize,
}

impl<N> PartialEq for OpenEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<N> Eq for OpenEntry<N> {}

impl<N> PartialOrd for OpenEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for OpenEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the BinaryHeap pops the lowest f first; equal f falls
        // back to insertion order, keeping results deterministic.
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority frontier ordered by ascending f = g + h, ties FIFO-stable.
#[derive(Debug)]
pub(crate) struct PriorityFrontier<N> {
    heap: BinaryHeap<OpenEntry<N>>,
    next_seq: usize,
}

impl<N: Ord> PriorityFrontier<N> {
    pub(crate) fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<N: Ord> Frontier<N> for PriorityFrontier<N> {
    fn push(&mut self, node: N, f_cost: f64) {
        self.heap.push(OpenEntry {
            node,
            f_cost,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    fn pop_next(&mut self) -> Option<N> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_pops_most_recent() {
        let mut frontier = StackFrontier::new();
        frontier.push(1, 0.0);
        frontier.push(2, 0.0);
        frontier.push(3, 0.0);
        assert_eq!(frontier.pop_next(), Some(3));
        assert_eq!(frontier.pop_next(), Some(2));
        assert_eq!(frontier.pop_next(), Some(1));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_queue_pops_oldest() {
        let mut frontier = QueueFrontier::new();
        frontier.push(1, 0.0);
        frontier.push(2, 0.0);
        frontier.push(3, 0.0);
        assert_eq!(frontier.pop_next(), Some(1));
        assert_eq!(frontier.pop_next(), Some(2));
        assert_eq!(frontier.pop_next(), Some(3));
    }

    #[test]
    fn test_priority_pops_lowest_f() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("far", 9.0);
        frontier.push("near", 1.0);
        frontier.push("mid", 4.5);
        assert_eq!(frontier.pop_next(), Some("near"));
        assert_eq!(frontier.pop_next(), Some("mid"));
        assert_eq!(frontier.pop_next(), Some("far"));
    }

    #[test]
    fn test_priority_ties_are_fifo() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("first", 2.0);
        frontier.push("second", 2.0);
        frontier.push("third", 2.0);
        assert_eq!(frontier.pop_next(), Some("first"));
        assert_eq!(frontier.pop_next(), Some("second"));
        assert_eq!(frontier.pop_next(), Some("third"));
    }
}
