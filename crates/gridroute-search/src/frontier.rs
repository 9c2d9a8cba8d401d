//! The open set: a min-heap of frontier nodes keyed on f = g + h.

use std::collections::BinaryHeap;

use gridroute_core::Point;

/// A frontier node: a cell plus its accumulated cost `g` and heuristic
/// estimate `h`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OpenNode {
    pub pos: Point,
    pub g: i32,
    pub h: i32,
    /// Insertion sequence number, used as the tie-break.
    seq: u64,
}

impl OpenNode {
    /// The node's priority, f = g + h. Lower is popped first.
    #[inline]
    pub fn f(&self) -> i32 {
        self.g + self.h
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse on f so BinaryHeap (a max-heap) pops the smallest f.
        // Among equal f, the most recently inserted node wins.
        other
            .f()
            .cmp(&self.f())
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The open set for one search call.
///
/// Pop order is deterministic: lowest f first, and among f-ties the most
/// recently inserted node. A fresh `Frontier` is created per search and
/// dropped with it; nothing is shared across calls.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<OpenNode>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node with the given cost and estimate.
    pub fn push(&mut self, pos: Point, g: i32, h: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(OpenNode { pos, g, h, seq });
    }

    /// Remove and return the best node, or `None` if the frontier is empty.
    pub fn pop(&mut self) -> Option<OpenNode> {
        self.heap.pop()
    }

    /// Whether the frontier holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of nodes currently in the frontier.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_f_first() {
        let mut fr = Frontier::new();
        fr.push(Point::new(0, 0), 3, 4);
        fr.push(Point::new(1, 1), 1, 1);
        fr.push(Point::new(2, 2), 2, 3);
        assert_eq!(fr.pop().unwrap().pos, Point::new(1, 1));
        assert_eq!(fr.pop().unwrap().pos, Point::new(2, 2));
        assert_eq!(fr.pop().unwrap().pos, Point::new(0, 0));
        assert!(fr.pop().is_none());
    }

    #[test]
    fn equal_f_pops_most_recent_insertion() {
        let mut fr = Frontier::new();
        fr.push(Point::new(0, 1), 1, 3);
        fr.push(Point::new(1, 0), 2, 2);
        fr.push(Point::new(1, 1), 3, 1);
        // All f = 4; LIFO among ties.
        assert_eq!(fr.pop().unwrap().pos, Point::new(1, 1));
        assert_eq!(fr.pop().unwrap().pos, Point::new(1, 0));
        assert_eq!(fr.pop().unwrap().pos, Point::new(0, 1));
    }

    #[test]
    fn len_and_is_empty() {
        let mut fr = Frontier::new();
        assert!(fr.is_empty());
        fr.push(Point::ZERO, 0, 0);
        assert_eq!(fr.len(), 1);
        fr.pop();
        assert!(fr.is_empty());
    }
}
