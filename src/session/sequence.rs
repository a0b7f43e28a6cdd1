use super::SessionError;
use crate::format::vertex_label;
use crate::types::{Coordinate, Waypoint};

#[derive(Debug, Clone, PartialEq)]
struct Connector {
    /// Vertices that preceded the connector when it was spliced in.
    anchor: usize,
    waypoint: Waypoint,
}

/// Ordered waypoints of the current drawing.
///
/// Vertices are rewritten wholesale from the live geometry. Polygon
/// connectors are only ever added by splicing; each one remembers how many
/// vertices preceded it and keeps that place across vertex rewrites. When a
/// rewrite has fewer vertices, such connectors trail the last vertex in
/// their original order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointSequence {
    vertices: Vec<Coordinate>,
    connectors: Vec<Connector>,
    entries: Vec<Waypoint>,
}

impl WaypointSequence {
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.connectors.clear();
        self.entries.clear();
    }

    /// Replace every vertex with `coords`, relabeled "01".."NN".
    pub fn replace_vertex_run(&mut self, coords: &[Coordinate]) {
        self.vertices.clear();
        self.vertices.extend_from_slice(coords);
        self.rebuild();
    }

    /// Splice `waypoint` in at `position`, shifting later entries back.
    ///
    /// Existing labels are left as they are.
    pub fn insert(&mut self, position: usize, waypoint: Waypoint) -> Result<(), SessionError> {
        if position > self.entries.len() {
            return Err(SessionError::InvalidInsertionIndex {
                index: position,
                len: self.entries.len(),
            });
        }
        let head = &self.entries[..position];
        let preceding = head.iter().filter(|wp| wp.is_vertex()).count();
        let slot = head.len() - preceding;
        // Anchors stay non-decreasing; a connector spliced behind trailing
        // connectors inherits their anchor.
        let anchor = slot
            .checked_sub(1)
            .map_or(preceding, |prev| preceding.max(self.connectors[prev].anchor));
        self.connectors.insert(slot, Connector { anchor, waypoint });
        self.rebuild();
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<Waypoint> {
        self.entries.clone()
    }

    fn rebuild(&mut self) {
        self.entries.clear();
        let mut connectors = self.connectors.iter().peekable();
        for (idx, coord) in self.vertices.iter().enumerate() {
            while let Some(c) = connectors.next_if(|c| c.anchor <= idx) {
                self.entries.push(c.waypoint.clone());
            }
            self.entries.push(Waypoint::vertex(vertex_label(idx), *coord));
        }
        self.entries.extend(connectors.map(|c| c.waypoint.clone()));
    }
}
