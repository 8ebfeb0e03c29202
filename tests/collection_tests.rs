use rudiments::{
    BinarySearchTree, BinaryTree, CircularLinkedList, DoublyLinkedList, Error, Queue, SinglyLinkedList,
    Stack, TreeNode,
};

#[test]
fn test_stack_lifo_and_empty_errors() {
    let mut stack = Stack::new();
    assert_eq!(stack.peek(), Err(Error::EmptyContainer("stack")));
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.peek(), Ok(&3));
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.pop(), Ok(1));
    assert_eq!(stack.pop(), Err(Error::EmptyContainer("stack")));
    assert!(stack.is_empty());
}

#[test]
fn test_queue_fifo_and_empty_errors() {
    let mut queue: Queue<&str> = Queue::new();
    assert_eq!(queue.dequeue(), Err(Error::EmptyContainer("queue")));
    queue.enqueue("a");
    queue.enqueue("b");
    assert_eq!(queue.front(), Ok(&"a"));
    assert_eq!(queue.dequeue(), Ok("a"));
    queue.enqueue("c");
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_linked_lists_render_and_iterate() {
    let mut singly: SinglyLinkedList<i32> = (1..=3).collect();
    assert_eq!(singly.to_string(), "1 -> 2 -> 3 -> nil");
    singly.push_front(0);
    assert_eq!(singly.pop_front(), Some(0));
    assert!(singly.contains(&3));
    assert!(!singly.contains(&7));

    let mut doubly = DoublyLinkedList::new();
    doubly.push_back(2);
    doubly.push_back(3);
    doubly.push_front(1);
    assert_eq!(doubly.to_string(), "1 <-> 2 <-> 3 <-> nil");
    assert_eq!(doubly.iter_rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(doubly.pop_back(), Some(3));
    assert_eq!(doubly.pop_front(), Some(1));
    assert_eq!(doubly.front(), doubly.back());

    let mut circular = CircularLinkedList::new();
    assert_eq!(circular.to_string(), "nil");
    for v in 1..=3 {
        circular.push_back(v);
    }
    assert_eq!(circular.to_string(), "1 -> 2 -> 3 -> (head)");
    circular.rotate();
    assert_eq!(circular.head(), Some(&2));
    assert_eq!(circular.cycle().take(5).copied().collect::<Vec<_>>(), vec![2, 3, 1, 2, 3]);
}

#[test]
fn test_binary_tree_traversals() {
    //       1
    //     2   3
    //    4 5
    let tree = BinaryTree::from_root(TreeNode::new(
        1,
        Some(TreeNode::new(2, Some(TreeNode::leaf(4)), Some(TreeNode::leaf(5)))),
        Some(TreeNode::leaf(3)),
    ));
    assert_eq!(tree.in_order(), vec![&4, &2, &5, &1, &3]);
    assert_eq!(tree.pre_order(), vec![&1, &2, &4, &5, &3]);
    assert_eq!(tree.post_order(), vec![&4, &5, &2, &3, &1]);
    assert_eq!(tree.level_order(), vec![&1, &2, &3, &4, &5]);
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_bst_orders_and_queries() {
    let bst: BinarySearchTree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    assert_eq!(bst.in_order(), vec![&20, &30, &40, &50, &60, &70, &80]);
    assert_eq!(bst.level_order(), vec![&50, &30, &70, &20, &40, &60, &80]);
    assert_eq!(bst.min(), Some(&20));
    assert_eq!(bst.max(), Some(&80));
    assert!(bst.contains(&60));
    assert!(!bst.contains(&65));
    assert_eq!(bst.height(), 3);

    let empty: BinarySearchTree<i32> = BinarySearchTree::new();
    assert_eq!(empty.min(), None);
    assert_eq!(empty.height(), 0);
}
