//! Linked lists in three shapes.
//!
//! - `singly`: boxed nodes, front-to-back links
//! - `doubly`: index arena with `prev`/`next` links
//! - `circular`: index arena whose tail links back to the head

pub mod circular;
pub mod doubly;
pub mod singly;

pub use circular::CircularLinkedList;
pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;
