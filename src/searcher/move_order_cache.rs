//! Single-use move-ordering memo keyed by board state.
//!
//! While a search walks a depth-2 node it scores that node's children; once
//! every child has a score the full list is recorded under the node's state
//! key. A later search whose root matches a key consumes the ordering
//! exactly once; the entry is removed on consumption so a stale ordering
//! never biases more than one subsequent search. Between searches a
//! background task re-sorts each list so the consuming side's most promising
//! move comes first.
//!
//! A recording from search N can only ever match the root of search N+1
//! (when the opponent's move arrives from outside) or N+2 (when one searcher
//! plays both sides). Entries older than that are evicted at the start of
//! the next search, so unconsumed recordings never accumulate.

use rustc_hash::FxHashMap;

use super::node::Node;

/// How many searches an unconsumed entry survives before eviction.
const MAX_ENTRY_AGE: u32 = 2;

struct Entry {
    born: u32,
    nodes: Vec<Node>,
}

#[derive(Default)]
pub struct MoveOrderCache {
    entries: FxHashMap<u64, Entry>,
    generation: u32,
}

impl MoveOrderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pre-populated cache, e.g. from an externally supplied table.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u64, Vec<Node>)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, nodes)| (key, Entry { born: 0, nodes }))
                .collect(),
            generation: 0,
        }
    }

    /// Marks the start of a new search and evicts entries too old to ever
    /// be consumed.
    pub fn begin_search(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        self.entries
            .retain(|_, entry| generation - entry.born <= MAX_ENTRY_AGE);
    }

    /// Removes and returns the ordering for `key`, if one exists.
    pub fn consume(&mut self, key: u64) -> Option<Vec<Node>> {
        self.entries.remove(&key).map(|entry| entry.nodes)
    }

    /// Records a complete scored ordering under `key`, stamped with the
    /// current generation. Replaces any previous entry for the key.
    pub fn insert(&mut self, key: u64, nodes: Vec<Node>) {
        self.entries.insert(
            key,
            Entry {
                born: self.generation,
                nodes,
            },
        );
    }

    /// Sorts every ordering so the best move for the team that will consume
    /// it comes first: descending by score for Home, ascending for Away.
    pub fn reorder(&mut self) {
        for entry in self.entries.values_mut() {
            let team = match entry.nodes.first() {
                Some(node) => node.team(),
                None => continue,
            };
            if team.maximize_score() {
                entry.nodes.sort_by(|a, b| b.score().cmp(&a.score()));
            } else {
                entry.nodes.sort_by(|a, b| a.score().cmp(&b.score()));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: u64) -> bool {
        self.entries.contains_key(&key)
    }
}
