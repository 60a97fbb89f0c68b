//! Entity implementation
//!
//! An entity is a bag of components with at most one component per concrete
//! type. Entities are stored in a [`World`](super::World) arena and referred
//! to by [`EntityId`].

use super::component::{short_type_name, Component};
use super::EcsError;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

slotmap::new_key_type! {
    /// Entity identifier (arena index + generation)
    pub struct EntityId;
}

struct StoredComponent {
    name: &'static str,
    value: Box<dyn Any>,
}

/// Container of components
#[derive(Default)]
pub struct Entity {
    name: Option<String>,
    components: HashMap<TypeId, StoredComponent>,
}

impl Entity {
    /// Create an empty entity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty entity with a label used in logs
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            components: HashMap::new(),
        }
    }

    /// Label of this entity, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Add a component (builder pattern)
    #[must_use]
    pub fn with<T: Component>(mut self, component: T) -> Self {
        self.add_component(component);
        self
    }

    /// Add a component, replacing and returning any previous component of the same type
    pub fn add_component<T: Component>(&mut self, component: T) -> Option<T> {
        let stored = StoredComponent {
            name: short_type_name::<T>(),
            value: Box::new(component),
        };

        self.components
            .insert(TypeId::of::<T>(), stored)
            .and_then(|old| old.value.downcast::<T>().ok())
            .map(|old| *old)
    }

    /// Remove a component and return it
    pub fn remove_component<T: Component>(&mut self) -> Option<T> {
        self.components
            .remove(&TypeId::of::<T>())
            .and_then(|old| old.value.downcast::<T>().ok())
            .map(|old| *old)
    }

    /// Check whether the entity has a component of type `T`
    pub fn has_component<T: Component>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<T>())
    }

    /// Get a component
    pub fn component<T: Component>(&self) -> Option<&T> {
        self.components
            .get(&TypeId::of::<T>())
            .and_then(|stored| stored.value.downcast_ref::<T>())
    }

    /// Get a mutable component
    pub fn component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&TypeId::of::<T>())
            .and_then(|stored| stored.value.downcast_mut::<T>())
    }

    /// Get a component that the caller expects to be present
    ///
    /// # Errors
    /// Returns [`EcsError::MissingComponent`] when the entity has no `T`.
    pub fn require<T: Component>(&self) -> Result<&T, EcsError> {
        self.component::<T>()
            .ok_or_else(|| missing::<T>(self.name.as_deref()))
    }

    /// Mutable variant of [`Entity::require`]
    ///
    /// # Errors
    /// Returns [`EcsError::MissingComponent`] when the entity has no `T`.
    pub fn require_mut<T: Component>(&mut self) -> Result<&mut T, EcsError> {
        let name = self.name.as_deref();
        self.components
            .get_mut(&TypeId::of::<T>())
            .and_then(|stored| stored.value.downcast_mut::<T>())
            .ok_or_else(|| missing::<T>(name))
    }

    /// Number of components attached
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Sorted names of the attached component types
    pub fn component_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.components.values().map(|stored| stored.name).collect();
        names.sort_unstable();
        names
    }
}

fn missing<T: Component>(name: Option<&str>) -> EcsError {
    EcsError::MissingComponent {
        entity: name.unwrap_or("<unnamed>").to_string(),
        component: short_type_name::<T>(),
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("name", &self.name)
            .field("components", &self.component_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(u32);
    impl Component for Health {}

    #[derive(Debug, PartialEq)]
    struct Speed(f32);
    impl Component for Speed {}

    #[test]
    fn test_one_component_per_type() {
        let mut entity = Entity::new().with(Health(3));
        let previous = entity.add_component(Health(5));

        assert_eq!(previous, Some(Health(3)));
        assert_eq!(entity.component_count(), 1);
        assert_eq!(entity.component::<Health>(), Some(&Health(5)));
    }

    #[test]
    fn test_mutate_and_remove() {
        let mut entity = Entity::new().with(Speed(1.0)).with(Health(1));
        entity.component_mut::<Speed>().unwrap().0 = 2.0;

        assert_eq!(entity.component::<Speed>(), Some(&Speed(2.0)));
        assert_eq!(entity.remove_component::<Speed>(), Some(Speed(2.0)));
        assert!(!entity.has_component::<Speed>());
        assert!(entity.has_component::<Health>());
    }

    #[test]
    fn test_require_reports_missing_component() {
        let entity = Entity::named("player").with(Health(1));
        let err = entity.require::<Speed>().unwrap_err();

        match err {
            EcsError::MissingComponent { entity, component } => {
                assert_eq!(entity, "player");
                assert_eq!(component, "Speed");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_component_names_sorted() {
        let entity = Entity::new().with(Speed(1.0)).with(Health(1));
        assert_eq!(entity.component_names(), vec!["Health", "Speed"]);
    }
}
