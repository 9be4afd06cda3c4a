//! Entity identity registry

use std::collections::HashMap;

use posebridge_core::EntityId;

/// Maps entity names to stable numeric ids, first-seen order.
///
/// Ids start at 1 and never change once assigned; there is no removal. The
/// registry is a value owned by its snapshot handler and lives exactly as
/// long as the pipeline does, so independent pipelines get independent id
/// spaces.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    ids: HashMap<String, EntityId>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        EntityRegistry::default()
    }

    /// Resolve a name to its id, assigning the next id on first sight.
    ///
    /// Idempotent: repeated calls with the same name return the same id.
    pub fn resolve(&mut self, name: &str) -> EntityId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = EntityId::new(self.ids.len() as u64 + 1);
        self.ids.insert(name.to_owned(), id);
        id
    }

    /// Id previously assigned to `name`, if any
    pub fn get(&self, name: &str) -> Option<EntityId> {
        self.ids.get(name).copied()
    }

    /// Number of distinct entities seen
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
