use std::collections::{BTreeMap, HashMap};

use crate::graph::VertexId;

/// Bidirectional mapping between location names and vertex identifiers.
///
/// Both directions are updated together on every insertion. Registering a
/// name or an id a second time overwrites the previous mapping and drops the
/// stale reverse entry, so `index(name(id)) == id` always holds.
#[derive(Debug, Clone, Default)]
pub struct LocationDirectory {
    name_to_id: HashMap<String, VertexId>,
    id_to_name: BTreeMap<VertexId, String>,
}

impl LocationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` for vertex `id`, replacing any earlier mapping of
    /// either side.
    pub fn add_location(&mut self, name: impl Into<String>, id: VertexId) {
        let name = name.into();

        if let Some(previous_id) = self.name_to_id.get(&name).copied() {
            if previous_id != id {
                self.id_to_name.remove(&previous_id);
            }
        }
        if let Some(previous_name) = self.id_to_name.get(&id) {
            if *previous_name != name {
                self.name_to_id.remove(previous_name);
            }
        }

        self.name_to_id.insert(name.clone(), id);
        self.id_to_name.insert(id, name);
    }

    /// Lookup a vertex identifier by its case-sensitive name.
    pub fn index(&self, name: &str) -> Option<VertexId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a location name by vertex identifier.
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.id_to_name.get(&id).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }

    /// Iterate `(id, name)` pairs ordered by vertex id.
    pub fn names(&self) -> impl Iterator<Item = (VertexId, &str)> + '_ {
        self.id_to_name
            .iter()
            .map(|(id, name)| (*id, name.as_str()))
    }
}
