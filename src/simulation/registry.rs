//! Session-scoped body storage
//!
//! Bodies get a monotonically increasing [`BodyId`] when inserted. Storage is
//! kept in insertion order, which is also the order pair rules and per-body
//! phases visit bodies in. Removing a body never reuses its id.

use std::fmt;

use crate::simulation::states::{Body, BodyKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    next_id: u64,
    entries: Vec<(BodyId, Body)>, // sorted by id since ids only grow
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a body and hand back its id
    /// An empty name is replaced with `<kind>-<id>`
    pub fn insert(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        if body.name.is_empty() {
            body.name = format!("{}-{}", body.kind.label(), id.0);
        }
        self.entries.push((id, body));
        id
    }

    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.index_of(id)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.index_of(id).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        let idx = self.index_of(id)?;
        Some(&mut self.entries[idx].1)
    }

    /// Two disjoint mutable borrows, in the order asked for
    /// `None` if either id is missing or both ids are the same
    pub fn pair_mut(&mut self, a: BodyId, b: BodyId) -> Option<(&mut Body, &mut Body)> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if ia == ib {
            return None;
        }

        if ia < ib {
            let (lo, hi) = self.entries.split_at_mut(ib);
            Some((&mut lo[ia].1, &mut hi[0].1))
        } else {
            let (lo, hi) = self.entries.split_at_mut(ia);
            Some((&mut hi[0].1, &mut lo[ib].1))
        }
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.entries.iter().map(|(id, b)| (*id, b))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyId, &mut Body)> {
        self.entries.iter_mut().map(|(id, b)| (*id, b))
    }

    pub fn ids(&self) -> Vec<BodyId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    pub fn ids_of(&self, kind: BodyKind) -> Vec<BodyId> {
        self.iter()
            .filter(|(_, b)| b.kind == kind)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn count(&self, kind: BodyKind) -> usize {
        self.entries.iter().filter(|(_, b)| b.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.entries.binary_search_by_key(&id, |(i, _)| *i).ok()
    }
}
