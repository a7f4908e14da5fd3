//! Directed, weighted route network.
//!
//! Terminals live in an arena indexed by name. Each terminal records its
//! outgoing and incoming edges, so neighbour lookups and duplicate-edge
//! checks never scan the whole graph.
//!
//! The graph has two phases: edges are inserted while it is being built, and
//! afterwards every operation is a read-only query.

mod frontier;

use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use crate::domain::{GraphError, Terminal, Weight};

/// Index of a terminal in the graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(usize);

/// A terminal and its edges.
///
/// Edge maps are ordered by `NodeId`, i.e. by creation order of the
/// neighbour, which keeps search order deterministic.
#[derive(Debug, Clone)]
struct Node {
    name: Terminal,
    outgoing: BTreeMap<NodeId, Weight>,
    incoming: BTreeMap<NodeId, Weight>,
}

impl Node {
    fn new(name: Terminal) -> Self {
        Self {
            name,
            outgoing: BTreeMap::new(),
            incoming: BTreeMap::new(),
        }
    }
}

/// The route network.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<Terminal, NodeId>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge, creating either terminal if it is new.
    ///
    /// Fails on a zero weight, before either terminal is registered. Also
    /// fails if the ordered pair already has an edge; the existing weight is
    /// kept, and the terminals are still registered in that case.
    pub fn add_edge(
        &mut self,
        origin: &Terminal,
        destination: &Terminal,
        weight: Weight,
    ) -> Result<(), GraphError> {
        if weight == 0 {
            return Err(GraphError::ZeroWeight {
                origin: origin.clone(),
                destination: destination.clone(),
            });
        }

        let from = self.insert_or_get(origin);
        let to = self.insert_or_get(destination);

        if self.nodes[from.0].outgoing.contains_key(&to) {
            return Err(GraphError::EdgeAlreadyExists {
                origin: origin.clone(),
                destination: destination.clone(),
            });
        }

        self.nodes[from.0].outgoing.insert(to, weight);
        self.nodes[to.0].incoming.insert(from, weight);

        trace!(%origin, %destination, weight, "Added edge");
        Ok(())
    }

    /// Look up a terminal, registering it if it has not been seen before.
    fn insert_or_get(&mut self, name: &Terminal) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name.clone()));
        self.index.insert(name.clone(), id);
        id
    }

    /// Resolve every name, or fail listing all of the unknown ones.
    ///
    /// Unknown names are reported once each, in the order first asked for.
    pub fn require_nodes(&self, names: &[Terminal]) -> Result<(), GraphError> {
        self.resolve(names).map(|_| ())
    }

    pub(crate) fn resolve(&self, names: &[Terminal]) -> Result<Vec<NodeId>, GraphError> {
        let mut ids = Vec::with_capacity(names.len());
        let mut missing: Vec<Terminal> = Vec::new();

        for name in names {
            match self.index.get(name) {
                Some(&id) => ids.push(id),
                None => {
                    if !missing.contains(name) {
                        missing.push(name.clone());
                    }
                }
            }
        }

        if missing.is_empty() {
            Ok(ids)
        } else {
            Err(GraphError::UnknownNode { names: missing })
        }
    }

    /// Weights of the edges along an exact stop sequence.
    ///
    /// Returns `Ok(None)` when fewer than two stops are given: there is no
    /// edge to walk. Otherwise every name must be known and every consecutive
    /// pair must be joined by a direct edge; the first missing edge is
    /// reported.
    pub fn build_path(&self, stops: &[Terminal]) -> Result<Option<Vec<Weight>>, GraphError> {
        if stops.len() < 2 {
            return Ok(None);
        }

        let ids = self.resolve(stops)?;

        let weights = ids
            .windows(2)
            .map(|pair| {
                self.nodes[pair[0].0]
                    .outgoing
                    .get(&pair[1])
                    .copied()
                    .ok_or_else(|| GraphError::NoSuchEdge {
                        from: self.name(pair[0]).clone(),
                        to: self.name(pair[1]).clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(weights))
    }

    /// Whether the terminal is part of the graph.
    pub fn contains(&self, name: &Terminal) -> bool {
        self.index.contains_key(name)
    }

    /// Number of terminals.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.outgoing.len()).sum()
    }

    /// Weight of the direct edge between two terminals, if there is one.
    pub fn weight(&self, origin: &Terminal, destination: &Terminal) -> Option<Weight> {
        let from = self.index.get(origin)?;
        let to = self.index.get(destination)?;
        self.nodes[from.0].outgoing.get(to).copied()
    }

    /// All terminals, in the order they were first seen.
    pub fn terminals(&self) -> impl Iterator<Item = &Terminal> {
        self.nodes.iter().map(|n| &n.name)
    }

    /// Terminals reachable by one edge from `name`, with edge weights.
    pub fn neighbours(&self, name: &Terminal) -> Result<Vec<(Terminal, Weight)>, GraphError> {
        let id = self.resolve(std::slice::from_ref(name))?[0];
        Ok(self.named_edges(&self.nodes[id.0].outgoing))
    }

    /// Terminals with an edge into `name`, with edge weights.
    pub fn predecessors(&self, name: &Terminal) -> Result<Vec<(Terminal, Weight)>, GraphError> {
        let id = self.resolve(std::slice::from_ref(name))?[0];
        Ok(self.named_edges(&self.nodes[id.0].incoming))
    }

    fn named_edges(&self, edges: &BTreeMap<NodeId, Weight>) -> Vec<(Terminal, Weight)> {
        edges
            .iter()
            .map(|(id, weight)| (self.name(*id).clone(), *weight))
            .collect()
    }

    pub(crate) fn name(&self, id: NodeId) -> &Terminal {
        &self.nodes[id.0].name
    }

    pub(crate) fn outgoing(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.nodes[id.0].outgoing.iter().map(|(to, w)| (*to, *w))
    }
}
