//! Linear containers.
//!
//! Collections are organized by data structure type:
//! - `stack` / `queue`: LIFO and FIFO containers whose empty-access
//!   operations return [`Error::EmptyContainer`](crate::Error::EmptyContainer)
//! - `linked_list`: singly, doubly and circular linked lists

pub mod linked_list;
pub mod queue;
pub mod stack;

pub use linked_list::{CircularLinkedList, DoublyLinkedList, SinglyLinkedList};
pub use queue::Queue;
pub use stack::Stack;
