//! Frontier-expansion searches over the route network.
//!
//! Every search here is the same algorithm: a min-priority queue of search
//! states, seeded by expanding the start terminal's outgoing edges (never by
//! the zero-length state at the start itself), and popped lowest-cost first.
//! The searches differ only in what the cost counts (distance or stops) and
//! in what they do with each popped state.
//!
//! States keep a back-reference to the state that produced them, stored as an
//! index into an arena, so the walk that reached any state can be rebuilt.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashSet};

use tracing::{debug, trace};

use super::{Graph, NodeId};
use crate::domain::{GraphError, Path, Terminal, Weight};

/// Index of a state in the frontier's arena.
type TileId = usize;

/// What a state's accumulated cost measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cost {
    /// Sum of edge weights.
    Distance,
    /// Number of edges traversed.
    Stops,
}

impl Cost {
    fn step(self, so_far: u64, weight: Weight) -> u64 {
        match self {
            Cost::Distance => so_far + u64::from(weight),
            Cost::Stops => so_far + 1,
        }
    }
}

/// What to do with a state once it is popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    /// Push a successor for every outgoing edge.
    Expand,
    /// Drop the state.
    Skip,
    /// Stop the search.
    Finish,
}

/// An intermediate search state.
#[derive(Debug, Clone)]
struct Tile {
    node: NodeId,
    parent: Option<TileId>,
    cost: u64,
}

/// A search in progress.
///
/// Queue entries are ordered by `(cost, id)`. Ids grow with insertion, so
/// equal-cost states pop in the order they were pushed.
struct Frontier<'g> {
    graph: &'g Graph,
    cost: Cost,
    tiles: Vec<Tile>,
    queue: BinaryHeap<Reverse<(u64, TileId)>>,
    expanded: usize,
}

impl<'g> Frontier<'g> {
    /// Start a search by expanding the edges out of `start`.
    fn seeded(graph: &'g Graph, start: NodeId, cost: Cost) -> Self {
        let mut frontier = Self {
            graph,
            cost,
            tiles: vec![Tile {
                node: start,
                parent: None,
                cost: 0,
            }],
            queue: BinaryHeap::new(),
            expanded: 0,
        };
        frontier.expand(0);
        frontier
    }

    fn expand(&mut self, id: TileId) {
        let (node, so_far) = (self.tiles[id].node, self.tiles[id].cost);
        self.expanded += 1;

        for (next, weight) in self.graph.outgoing(node) {
            let cost = self.cost.step(so_far, weight);
            let next_id = self.tiles.len();
            self.tiles.push(Tile {
                node: next,
                parent: Some(id),
                cost,
            });
            self.queue.push(Reverse((cost, next_id)));
        }
    }

    /// Pop states until the queue is empty or `visit` says to finish.
    fn run<F>(&mut self, mut visit: F)
    where
        F: FnMut(&Self, TileId) -> Visit,
    {
        while let Some(Reverse((cost, id))) = self.queue.pop() {
            trace!(
                terminal = %self.graph.name(self.tiles[id].node),
                cost,
                "Popped frontier state"
            );
            match visit(&*self, id) {
                Visit::Expand => self.expand(id),
                Visit::Skip => {}
                Visit::Finish => break,
            }
        }
    }

    fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id]
    }

    /// Rebuild the walk that reached `id`, start first.
    fn path(&self, id: TileId) -> Path {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(tile_id) = current {
            let tile = &self.tiles[tile_id];
            names.push(self.graph.name(tile.node).clone());
            current = tile.parent;
        }
        names.reverse();
        Path::new(names)
    }
}

impl Graph {
    fn endpoints(&self, start: &Terminal, end: &Terminal) -> Result<(NodeId, NodeId), GraphError> {
        let ids = self.resolve(&[start.clone(), end.clone()])?;
        Ok((ids[0], ids[1]))
    }

    /// Minimum-distance walk from `start` to `end`.
    ///
    /// At least one edge is always traversed, so when `start == end` the
    /// result is the shortest cycle back to `start`. Returns `Ok(None)` if
    /// `end` cannot be reached.
    pub fn shortest_path(
        &self,
        start: &Terminal,
        end: &Terminal,
    ) -> Result<Option<Path>, GraphError> {
        let (from, to) = self.endpoints(start, end)?;

        let mut frontier = Frontier::seeded(self, from, Cost::Distance);
        let mut settled: HashSet<NodeId> = HashSet::from([from]);
        let mut found = None;

        frontier.run(|f, id| {
            let node = f.tile(id).node;
            if node == to {
                found = Some(f.path(id));
                return Visit::Finish;
            }
            if settled.insert(node) {
                Visit::Expand
            } else {
                Visit::Skip
            }
        });

        debug!(
            %start,
            %end,
            found = found.is_some(),
            expanded = frontier.expanded,
            "Shortest path search complete"
        );
        Ok(found)
    }

    /// Every walk from `start` to `end` with exactly `n` stops.
    pub fn paths_with_exact_stops(
        &self,
        start: &Terminal,
        end: &Terminal,
        n: u64,
    ) -> Result<BTreeSet<Path>, GraphError> {
        self.collect_paths(start, end, Cost::Stops, n, |stops| stops == n)
    }

    /// Every walk from `start` to `end` with between 1 and `n` stops.
    pub fn paths_with_at_most_stops(
        &self,
        start: &Terminal,
        end: &Terminal,
        n: u64,
    ) -> Result<BTreeSet<Path>, GraphError> {
        self.collect_paths(start, end, Cost::Stops, n, |stops| stops <= n)
    }

    /// Every walk from `start` to `end` whose total distance is below `n`.
    ///
    /// Every edge has positive weight, so each expansion moves the walk
    /// closer to the bound and the search terminates.
    pub fn paths_shorter_than_distance(
        &self,
        start: &Terminal,
        end: &Terminal,
        n: u64,
    ) -> Result<BTreeSet<Path>, GraphError> {
        self.collect_paths(start, end, Cost::Distance, n, |distance| distance < n)
    }

    /// Exhaustive expansion without a settled set.
    ///
    /// States are expanded while their cost is below `bound`; a state at
    /// `end` whose cost satisfies `accept` is recorded. Terminals may be
    /// revisited any number of times within the bound.
    fn collect_paths<A>(
        &self,
        start: &Terminal,
        end: &Terminal,
        cost: Cost,
        bound: u64,
        accept: A,
    ) -> Result<BTreeSet<Path>, GraphError>
    where
        A: Fn(u64) -> bool,
    {
        let (from, to) = self.endpoints(start, end)?;

        let mut frontier = Frontier::seeded(self, from, cost);
        let mut paths = BTreeSet::new();

        frontier.run(|f, id| {
            let tile = f.tile(id);
            if tile.node == to && accept(tile.cost) {
                paths.insert(f.path(id));
            }
            if tile.cost < bound {
                Visit::Expand
            } else {
                Visit::Skip
            }
        });

        debug!(
            %start,
            %end,
            ?cost,
            bound,
            found = paths.len(),
            expanded = frontier.expanded,
            "Path enumeration complete"
        );
        Ok(paths)
    }
}
