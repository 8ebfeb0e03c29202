use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use rudiments::arrays::{self, Matrix};
use rudiments::graph::{self, AdjacencyMatrix, Graph, GraphSnapshot, NodeId, VisitedSet};
use rudiments::modeling::{BankAccount, Bike, Car, Circle, Employee, Person, Rectangle, Shape, Vehicle};
use rudiments::sort::{self, Algorithm};
use rudiments::{recursion, search, strings};
use rudiments::{
    BinarySearchTree, BinaryTree, CircularLinkedList, DoublyLinkedList, Queue, SinglyLinkedList, Stack,
    TreeNode,
};

use crate::report::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Representation {
    /// Insertion-ordered adjacency list
    List,
    /// Dense adjacency matrix over ids `0..n`
    Matrix,
}

#[derive(Debug, Args)]
pub struct GraphArgs {
    /// Graph representation to build
    #[arg(long, value_enum, default_value_t = Representation::List)]
    pub repr: Representation,

    /// Node the traversals start from
    #[arg(long, default_value_t = 1)]
    pub start: NodeId,

    /// Undirected edges as `a:b` pairs, comma separated (defaults to a triangle)
    #[arg(long, value_delimiter = ',', value_parser = parse_edge)]
    pub edges: Vec<(NodeId, NodeId)>,

    /// Load an adjacency-list graph from a JSON snapshot
    #[arg(long, conflicts_with = "edges")]
    pub snapshot: Option<PathBuf>,
}

fn parse_edge(raw: &str) -> Result<(NodeId, NodeId), String> {
    let (a, b) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `a:b`, got `{raw}`"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<NodeId>()
            .map_err(|e| format!("bad node id `{s}`: {e}"))
    };
    Ok((parse(a)?, parse(b)?))
}

pub fn parse_algorithm(raw: &str) -> Result<Algorithm, String> {
    Algorithm::ALL
        .into_iter()
        .find(|a| a.name().eq_ignore_ascii_case(raw))
        .ok_or_else(|| {
            let names: Vec<_> = Algorithm::ALL.iter().map(|a| a.name()).collect();
            format!("unknown algorithm `{raw}`, expected one of {}", names.join(", "))
        })
}

const TRIANGLE: [(NodeId, NodeId); 3] = [(1, 2), (1, 3), (2, 3)];
const MATRIX_TRIANGLE: [(NodeId, NodeId); 3] = [(0, 1), (0, 2), (1, 2)];
/// Largest node count the tour renders as a matrix.
const MAX_MATRIX_NODES: usize = 4096;

pub fn graph(args: &GraphArgs) -> Result<Section> {
    match args.repr {
        Representation::List => adjacency_list(args),
        Representation::Matrix => adjacency_matrix(args),
    }
}

fn load_graph(args: &GraphArgs) -> Result<Graph> {
    if let Some(path) = &args.snapshot {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        return serde_json::from_str(&text).with_context(|| format!("parsing snapshot {}", path.display()));
    }
    if !args.edges.is_empty() {
        return Ok(Graph::from_edges(args.edges.iter().copied()));
    }
    let mut g = Graph::new();
    for node in [1, 2, 3] {
        g.add_node(node);
    }
    for (a, b) in TRIANGLE {
        g.add_edge(a, b)?;
    }
    Ok(g)
}

fn adjacency_list(args: &GraphArgs) -> Result<Section> {
    let g = load_graph(args)?;
    let start = args.start;
    tracing::info!(nodes = g.node_count(), edges = g.edge_count(), start = start, "graph loaded");

    let bfs = g.bfs(start).with_context(|| format!("bfs from node {start}"))?;
    let dfs = g
        .dfs(start, &mut VisitedSet::new())
        .with_context(|| format!("dfs from node {start}"))?;
    let dfs_iterative = g.dfs_iterative(start, &mut VisitedSet::new())?;
    let layers = graph::bfs_layers(&g, start)?;

    let mut section = Section::new("graph (adjacency list)");
    section
        .record("adjacency", &g.to_string())?
        .record("bfs", &bfs)?
        .record("dfs", &dfs)?
        .record("dfs (iterative)", &dfs_iterative)?
        .record("bfs layers", &layers)?
        .record("snapshot", &GraphSnapshot::from(g))?;
    Ok(section)
}

fn adjacency_matrix(args: &GraphArgs) -> Result<Section> {
    if args.snapshot.is_some() {
        bail!("snapshots describe adjacency lists; drop --snapshot or use --repr list");
    }
    let edges: &[(NodeId, NodeId)] = if args.edges.is_empty() {
        &MATRIX_TRIANGLE
    } else {
        &args.edges
    };
    let largest = edges.iter().flat_map(|&(a, b)| [a, b]).max().unwrap_or(0);
    let size = usize::try_from(largest)
        .map(|n| n + 1)
        .with_context(|| format!("matrix ids must be non-negative, got {largest}"))?;
    if size > MAX_MATRIX_NODES {
        bail!("matrix ids must be below {MAX_MATRIX_NODES}, got {largest}");
    }

    let mut m = AdjacencyMatrix::new(size)?;
    for &(a, b) in edges {
        m.add_edge(a, b)?;
    }
    let start = args.start;
    let bfs = graph::bfs(&m, start).with_context(|| format!("bfs from node {start}"))?;
    let dfs = graph::dfs(&m, start, &mut VisitedSet::new())?;

    let mut section = Section::new("graph (adjacency matrix)");
    section
        .record("matrix", &m.to_string())?
        .record("bfs", &bfs)?
        .record("dfs", &dfs)?;
    Ok(section)
}

pub fn stacks_and_queues() -> Result<Section> {
    let mut section = Section::new("stacks and queues");

    let mut stack: Stack<i32> = [1, 2, 3].into_iter().collect();
    section.record("stack peek", stack.peek()?)?;
    let popped = [stack.pop()?, stack.pop()?, stack.pop()?];
    section
        .record("stack pops", &popped)?
        .record("pop on empty", &stack.pop().err().map(|e| e.to_string()))?;

    let mut queue: Queue<i32> = [1, 2, 3].into_iter().collect();
    section.record("queue front", queue.front()?)?;
    let dequeued = [queue.dequeue()?, queue.dequeue()?, queue.dequeue()?];
    section
        .record("queue dequeues", &dequeued)?
        .record("dequeue on empty", &queue.dequeue().err().map(|e| e.to_string()))?;
    Ok(section)
}

pub fn linked_lists() -> Result<Section> {
    let mut section = Section::new("linked lists");

    let singly: SinglyLinkedList<i32> = (1..=3).collect();
    section
        .record("singly", &singly.to_string())?
        .record("singly contains 2", &singly.contains(&2))?;

    let mut doubly = DoublyLinkedList::new();
    for value in 1..=3 {
        doubly.push_back(value);
    }
    doubly.push_front(0);
    let backwards: Vec<_> = doubly.iter_rev().collect();
    section
        .record("doubly", &doubly.to_string())?
        .record("doubly reversed", &backwards)?;

    let mut circular = CircularLinkedList::new();
    for value in 1..=3 {
        circular.push_back(value);
    }
    section.record("circular", &circular.to_string())?;
    circular.rotate();
    section.record("circular rotated", &circular.to_string())?;
    Ok(section)
}

pub fn trees() -> Result<Section> {
    let mut section = Section::new("trees");

    let tree = BinaryTree::from_root(TreeNode::new(
        1,
        Some(TreeNode::new(2, Some(TreeNode::leaf(4)), Some(TreeNode::leaf(5)))),
        Some(TreeNode::leaf(3)),
    ));
    section
        .record("in-order", &tree.in_order())?
        .record("pre-order", &tree.pre_order())?
        .record("post-order", &tree.post_order())?
        .record("level-order", &tree.level_order())?
        .record("height", &tree.height())?;

    let bst: BinarySearchTree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    section
        .record("bst in-order", &bst.in_order())?
        .record("bst min", &bst.min())?
        .record("bst max", &bst.max())?
        .record("bst contains 60", &bst.contains(&60))?
        .record("bst contains 65", &bst.contains(&65))?;
    Ok(section)
}

pub fn searching(values: &[i64], target: i64) -> Result<Section> {
    let sorted = sort::sorted(values, Algorithm::Quick);
    let mut section = Section::new("searching");
    section
        .record("input (sorted)", &sorted)?
        .record("target", &target)?
        .record("linear", &search::linear_search(&sorted, &target))?
        .record("binary", &search::binary_search(&sorted, &target))?
        .record("jump", &search::jump_search(&sorted, &target))?
        .record("interpolation", &search::interpolation_search(&sorted, &target))?;
    Ok(section)
}

pub fn sorting(values: &[i64], algorithm: Option<Algorithm>) -> Result<Section> {
    let mut section = Section::new("sorting");
    section.record("input", values)?;
    let chosen: Vec<Algorithm> = algorithm.map_or_else(|| Algorithm::ALL.to_vec(), |a| vec![a]);
    for algorithm in chosen {
        section.record(algorithm.name(), &sort::sorted(values, algorithm))?;
    }
    Ok(section)
}

pub fn array_techniques() -> Result<Section> {
    let arr = [1_i64, 2, 3, 4, 5];
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
    let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]])?;
    let cube = vec![
        vec![vec![1, 2, 3], vec![4, 5, 6]],
        vec![vec![7, 8, 9], vec![10, 11, 12]],
    ];

    let mut section = Section::new("arrays");
    section
        .record("input", &arr)?
        .record("max", &arrays::find_max(&arr))?
        .record("two sum to 5", &arrays::two_sum_sorted(&arr, 5))?
        .record("max window of 2", &arrays::max_window_sum(&arr, 2)?)?
        .record("matrix sum", &a.checked_add(&b)?.to_string())?
        .record("3d traversal", &arrays::flatten_3d(&cube))?;
    Ok(section)
}

pub fn string_helpers(text: &str) -> Result<Section> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut section = Section::new("strings");
    section
        .record("text", text)?
        .record("reversed", &strings::reverse(text))?
        .record("words joined by '-'", &strings::concat_words(&words, "-"))?
        .record("first five chars", &strings::char_slice(text, 0..5))?;
    Ok(section)
}

pub fn recursion_demos(n: u32, queens: usize) -> Result<Section> {
    let solutions = recursion::solve_n_queens(queens);
    let mut section = Section::new("recursion");
    section
        .record(&format!("{n}!"), &recursion::factorial(n))?
        .record(&format!("fib({n})"), &recursion::fibonacci(n))?
        .record(&format!("{queens}-queens solutions"), &solutions.len())?;
    if let Some(first) = solutions.first() {
        section.record("first board", &first.to_string())?;
    }
    Ok(section)
}

pub fn models() -> Result<Section> {
    let mut section = Section::new("modeling");

    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Circle::new(5.0)), Box::new(Rectangle::new(4.0, 6.0))];
    for shape in &shapes {
        section
            .record(&format!("{} area", shape.name()), &shape.area())?
            .record(&format!("{} perimeter", shape.name()), &shape.perimeter())?;
    }

    let fleet: Vec<Box<dyn Vehicle>> = vec![Box::new(Car::new("Toyota")), Box::new(Bike::new("Yamaha"))];
    let messages: Vec<String> = fleet.iter().flat_map(|v| [v.start(), v.stop()]).collect();
    section.record("vehicles", &messages)?;

    let mut account = BankAccount::open("123456789", 1000.0)?;
    account.deposit(500.0)?;
    account.withdraw(200.0)?;
    section
        .record("balance", &account.balance())?
        .record(
            "overdraw",
            &account.withdraw(10_000.0).err().map(|e| e.to_string()),
        )?;

    let employee = Employee::new(Person::new("John Doe", 30), "Engineering");
    section
        .record("employee name", &employee.name)?
        .record("employee age", &employee.age)?
        .record("employee", &employee)?;
    Ok(section)
}
