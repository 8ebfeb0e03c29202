//! `DoublyLinkedList`: a doubly linked list stored in an index arena.
//!
//! Nodes live in a `Vec` of slots and link to each other by index, which
//! gives O(1) insertion and removal at both ends without `unsafe` or
//! reference counting. Freed slots are chained into a free list and reused.

use core::fmt;

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied {
        value: T,
        prev: Option<usize>,
        next: Option<usize>,
    },
    Free(Option<usize>),
}

/// A doubly linked list with O(1) operations at both ends.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let slot = Slot::Occupied { value, prev, next };
        match self.free_head {
            Some(idx) => {
                if let Slot::Free(next_free) = self.slots[idx] {
                    self.free_head = next_free;
                }
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        }
    }

    // Takes the value out of an occupied slot and threads it onto the free list.
    fn release(&mut self, idx: usize) -> Option<(T, Option<usize>, Option<usize>)> {
        let slot = core::mem::replace(&mut self.slots[idx], Slot::Free(self.free_head));
        match slot {
            Slot::Occupied { value, prev, next } => {
                self.free_head = Some(idx);
                self.len -= 1;
                Some((value, prev, next))
            }
            free @ Slot::Free(_) => {
                self.slots[idx] = free;
                None
            }
        }
    }

    fn set_prev(&mut self, idx: usize, to: Option<usize>) {
        if let Slot::Occupied { prev, .. } = &mut self.slots[idx] {
            *prev = to;
        }
    }

    fn set_next(&mut self, idx: usize, to: Option<usize>) {
        if let Slot::Occupied { next, .. } = &mut self.slots[idx] {
            *next = to;
        }
    }

    fn value(&self, idx: usize) -> Option<&T> {
        match &self.slots[idx] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Free(_) => None,
        }
    }

    /// Appends `value` at the back.
    pub fn push_back(&mut self, value: T) {
        let old_tail = self.tail;
        let idx = self.alloc(value, old_tail, None);
        match old_tail {
            Some(tail) => self.set_next(tail, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Prepends `value` at the front.
    pub fn push_front(&mut self, value: T) {
        let old_head = self.head;
        let idx = self.alloc(value, None, old_head);
        match old_head {
            Some(head) => self.set_prev(head, Some(idx)),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let (value, _, next) = self.release(head)?;
        self.head = next;
        match next {
            Some(n) => self.set_prev(n, None),
            None => self.tail = None,
        }
        Some(value)
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let (value, prev, _) = self.release(tail)?;
        self.tail = prev;
        match prev {
            Some(p) => self.set_next(p, None),
            None => self.head = None,
        }
        Some(value)
    }

    /// Returns the first element.
    pub fn front(&self) -> Option<&T> {
        self.value(self.head?)
    }

    /// Returns the last element.
    pub fn back(&self) -> Option<&T> {
        self.value(self.tail?)
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            forward: true,
        }
    }

    /// Iterates back to front by following `prev` links.
    pub fn iter_rev(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.tail,
            forward: false,
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

/// Borrowing iterator for [`DoublyLinkedList`], in either direction.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    current: Option<usize>,
    forward: bool,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        match &self.list.slots[idx] {
            Slot::Occupied { value, prev, next } => {
                self.current = if self.forward { *next } else { *prev };
                Some(value)
            }
            Slot::Free(_) => None,
        }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{value} <-> ")?;
        }
        f.write_str("nil")
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("len", &self.len)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}
