//! `CircularLinkedList`: a singly linked ring.
//!
//! The tail's `next` always points back at the head. Nodes are stored in an
//! index arena; the ring is grow-only, so no free list is needed.

use core::fmt;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: usize,
}

/// A circular singly linked list.
#[derive(Debug, Clone)]
pub struct CircularLinkedList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> CircularLinkedList<T> {
    /// Creates an empty ring.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the ring is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts `value` just before the head, i.e. at the end of one lap.
    pub fn push_back(&mut self, value: T) {
        let idx = self.nodes.len();
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                self.nodes.push(Node { value, next: head });
                self.nodes[tail].next = idx;
            }
            _ => {
                self.nodes.push(Node { value, next: idx });
                self.head = Some(idx);
            }
        }
        self.tail = Some(idx);
    }

    /// The element the ring currently starts at.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|idx| &self.nodes[idx].value)
    }

    /// Advances the head by one node; the old head becomes the tail.
    pub fn rotate(&mut self) {
        if let Some(head) = self.head {
            self.tail = Some(head);
            self.head = Some(self.nodes[head].next);
        }
    }

    /// Iterates exactly one lap, starting at the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len(),
        }
    }

    /// Follows the ring forever (empty if the ring is empty).
    pub fn cycle(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: usize::MAX,
        }
    }
}

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

/// Borrowing iterator for [`CircularLinkedList`].
pub struct Iter<'a, T> {
    list: &'a CircularLinkedList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.current?];
        self.current = Some(node.next);
        if self.remaining != usize::MAX {
            self.remaining -= 1;
        }
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a CircularLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for CircularLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("nil");
        }
        for value in self {
            write!(f, "{value} -> ")?;
        }
        f.write_str("(head)")
    }
}
