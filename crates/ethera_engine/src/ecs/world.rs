//! ECS World implementation

use super::{Component, EcsError, Entity, EntityId};
use slotmap::SlotMap;

/// ECS World containing all entities of a scene
///
/// Entities live in a dense vector kept in registration order; the slot map
/// translates stable [`EntityId`]s into positions in that vector.
#[derive(Default)]
pub struct World {
    index: SlotMap<EntityId, usize>,
    entities: Vec<(EntityId, Entity)>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and return its identifier
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = self.index.insert(self.entities.len());
        self.entities.push((id, entity));
        id
    }

    /// Add several entities, keeping their order
    pub fn spawn_batch<I: IntoIterator<Item = Entity>>(&mut self, entities: I) -> Vec<EntityId> {
        entities.into_iter().map(|entity| self.spawn(entity)).collect()
    }

    /// Remove an entity and return it
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let position = self.index.remove(id)?;
        let (_, entity) = self.entities.remove(position);

        for (moved, _) in &self.entities[position..] {
            if let Some(slot) = self.index.get_mut(*moved) {
                *slot -= 1;
            }
        }

        Some(entity)
    }

    /// Check whether the entity is still part of the world
    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(id)
    }

    /// Get an entity
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        let position = *self.index.get(id)?;
        self.entities.get(position).map(|(_, entity)| entity)
    }

    /// Get a mutable entity
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let position = *self.index.get(id)?;
        self.entities.get_mut(position).map(|(_, entity)| entity)
    }

    /// Get an entity that must exist
    ///
    /// # Errors
    /// Returns [`EcsError::NoSuchEntity`] for stale or unknown ids.
    pub fn require(&self, id: EntityId) -> Result<&Entity, EcsError> {
        self.get(id).ok_or(EcsError::NoSuchEntity(id))
    }

    /// Mutable variant of [`World::require`]
    ///
    /// # Errors
    /// Returns [`EcsError::NoSuchEntity`] for stale or unknown ids.
    pub fn require_mut(&mut self, id: EntityId) -> Result<&mut Entity, EcsError> {
        self.get_mut(id).ok_or(EcsError::NoSuchEntity(id))
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world has no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Remove every entity
    pub fn clear(&mut self) {
        self.index.clear();
        self.entities.clear();
    }

    /// Entity ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().map(|(id, _)| *id)
    }

    /// Iterate entities in registration order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(id, entity)| (*id, entity))
    }

    /// Iterate entities mutably in registration order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Entity)> {
        self.entities.iter_mut().map(|(id, entity)| (*id, entity))
    }

    /// Iterate entities that carry a component of type `T`
    pub fn with_component<T: Component>(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.iter().filter(|(_, entity)| entity.has_component::<T>())
    }

    /// Mutable variant of [`World::with_component`]
    pub fn with_component_mut<T: Component>(&mut self) -> impl Iterator<Item = (EntityId, &mut Entity)> {
        self.iter_mut().filter(|(_, entity)| entity.has_component::<T>())
    }

    /// Ids of the entities that carry a component of type `T`
    pub fn ids_with<T: Component>(&self) -> Vec<EntityId> {
        self.with_component::<T>().map(|(id, _)| id).collect()
    }

    /// First entity (in registration order) that carries a component of type `T`
    pub fn first_with<T: Component>(&self) -> Option<EntityId> {
        self.with_component::<T>().map(|(id, _)| id).next()
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entities.iter().map(|(_, entity)| entity)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;
    impl Component for Marker {}

    #[test]
    fn test_spawn_and_despawn_keep_order() {
        let mut world = World::new();
        let a = world.spawn(Entity::named("a"));
        let b = world.spawn(Entity::named("b").with(Marker));
        let c = world.spawn(Entity::named("c"));

        let removed = world.despawn(b).unwrap();
        assert_eq!(removed.name(), Some("b"));
        assert_eq!(world.ids().collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(world.get(c).and_then(Entity::name), Some("c"));
        assert!(!world.contains(b));
        assert!(world.despawn(b).is_none());
    }

    #[test]
    fn test_stale_id_is_rejected() {
        let mut world = World::new();
        let old = world.spawn(Entity::new());
        world.despawn(old);
        let _new = world.spawn(Entity::new());

        assert!(matches!(world.require(old), Err(EcsError::NoSuchEntity(_))));
    }

    #[test]
    fn test_component_filters() {
        let mut world = World::new();
        world.spawn(Entity::new());
        let marked = world.spawn(Entity::new().with(Marker));

        assert_eq!(world.ids_with::<Marker>(), vec![marked]);
        assert_eq!(world.first_with::<Marker>(), Some(marked));
        assert_eq!(world.with_component_mut::<Marker>().count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut world = World::new();
        world.spawn_batch(vec![Entity::new(), Entity::new()]);
        assert_eq!(world.len(), 2);

        world.clear();
        assert!(world.is_empty());
    }
}
