//! A small undirected multigraph with typed edges.
//!
//! Vertices are any `Copy + Eq + Hash` value; each edge carries a kind
//! (for the game map, a [`Transport`](super::connection::Transport)).
//! Two vertices may be joined by several edges as long as their kinds
//! differ. Queries take a slice of allowed kinds.

use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

/// Errors raised while building a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {0} is not in the graph")]
    MissingVertex(String),
    #[error("a {kind} edge already joins {a} and {b}")]
    DuplicateEdge { a: String, b: String, kind: String },
}

/// Undirected graph keyed by vertex, with per-vertex adjacency lists.
#[derive(Debug, Clone)]
pub struct Graph<V, K> {
    adjacency: HashMap<V, Vec<(V, K)>>,
    kinds: Vec<K>,
}

impl<V, K> Default for Graph<V, K> {
    fn default() -> Self {
        Graph { adjacency: HashMap::new(), kinds: Vec::new() }
    }
}

impl<V, K> Graph<V, K>
where
    V: Copy + Eq + Hash + Debug,
    K: Copy + Eq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex. Returns `true` if it was not already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, Vec::new());
        true
    }

    pub fn contains(&self, v: V) -> bool {
        self.adjacency.contains_key(&v)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Every edge kind seen so far, in insertion order.
    pub fn all_kinds(&self) -> &[K] {
        &self.kinds
    }

    /// Joins `v` and `w` with an edge of `kind`, in both directions.
    pub fn add_edge(&mut self, v: V, w: V, kind: K) -> Result<(), GraphError> {
        for x in [v, w] {
            if !self.contains(x) {
                return Err(GraphError::MissingVertex(format!("{x:?}")));
            }
        }
        if self.is_adjacent(v, w, &[kind]) {
            return Err(GraphError::DuplicateEdge {
                a: format!("{v:?}"),
                b: format!("{w:?}"),
                kind: format!("{kind:?}"),
            });
        }
        self.insert_edge(v, w, kind);
        Ok(())
    }

    /// Joins `v` and `w` like [`add_edge`](Self::add_edge), adding missing
    /// vertices and leaving an existing edge of `kind` alone.
    pub fn connect(&mut self, v: V, w: V, kind: K) {
        self.add_vertex(v);
        self.add_vertex(w);
        if !self.is_adjacent(v, w, &[kind]) {
            self.insert_edge(v, w, kind);
        }
    }

    fn insert_edge(&mut self, v: V, w: V, kind: K) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self.adjacency.entry(v).or_default().push((w, kind));
        self.adjacency.entry(w).or_default().push((v, kind));
    }

    /// True if an edge of one of `kinds` joins `v` and `w`.
    pub fn is_adjacent(&self, v: V, w: V, kinds: &[K]) -> bool {
        self.adjacency
            .get(&v)
            .is_some_and(|edges| edges.iter().any(|(n, k)| *n == w && kinds.contains(k)))
    }

    /// [`is_adjacent`](Self::is_adjacent) over every kind seen.
    pub fn is_adjacent_any(&self, v: V, w: V) -> bool {
        self.is_adjacent(v, w, &self.kinds)
    }

    /// Distinct neighbours of `v` over `kinds`, in insertion order.
    pub fn neighbours(&self, v: V, kinds: &[K]) -> Vec<V> {
        let mut out = Vec::new();
        if let Some(edges) = self.adjacency.get(&v) {
            for (n, k) in edges {
                if kinds.contains(k) && !out.contains(n) {
                    out.push(*n);
                }
            }
        }
        out
    }

    pub fn neighbours_any(&self, v: V) -> Vec<V> {
        self.neighbours(v, &self.kinds)
    }

    /// Breadth-first search from `source`, returning each reached vertex's
    /// predecessor. The source maps to itself.
    pub fn bfs(&self, source: V, kinds: &[K]) -> HashMap<V, V> {
        let mut pred = HashMap::new();
        if !self.contains(source) {
            return pred;
        }
        pred.insert(source, source);
        let mut queue = VecDeque::from([source]);
        while let Some(v) = queue.pop_front() {
            for n in self.neighbours(v, kinds) {
                if !pred.contains_key(&n) {
                    pred.insert(n, v);
                    queue.push_back(n);
                }
            }
        }
        pred
    }

    /// Shortest path by hop count from `source` to `target`, both included.
    pub fn path(&self, source: V, target: V, kinds: &[K]) -> Option<Vec<V>> {
        let pred = self.bfs(source, kinds);
        if !pred.contains_key(&target) {
            return None;
        }
        let mut path = vec![target];
        let mut v = target;
        while v != source {
            v = pred[&v];
            path.push(v);
        }
        path.reverse();
        Some(path)
    }

    /// Hop count of the shortest path, or `None` if unreachable.
    pub fn distance(&self, source: V, target: V, kinds: &[K]) -> Option<usize> {
        self.path(source, target, kinds).map(|p| p.len() - 1)
    }

    pub fn distance_any(&self, source: V, target: V) -> Option<usize> {
        self.distance(source, target, &self.kinds)
    }
}
