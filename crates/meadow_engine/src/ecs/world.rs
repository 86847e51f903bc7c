//! ECS World implementation

use super::{Component, Entity, EntityKind};
use super::components::TransformComponent;
use slotmap::{SecondaryMap, SlotMap};
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// ECS World containing all entities and components
///
/// Transforms live in one flat store; every other component type gets its own
/// secondary map keyed by [`Entity`]. Entities are only ever added, so
/// iteration follows insertion order.
pub struct World {
    transforms: SlotMap<Entity, TransformComponent>,
    kinds: SecondaryMap<Entity, EntityKind>,
    component_storages: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self {
            transforms: SlotMap::with_key(),
            kinds: SecondaryMap::new(),
            component_storages: HashMap::new(),
        }
    }

    /// Create a new entity with its kind and initial transform
    pub fn create_entity(&mut self, kind: EntityKind, transform: TransformComponent) -> Entity {
        let entity = self.transforms.insert(transform);
        self.kinds.insert(entity, kind);
        entity
    }

    /// Add a component to an entity, replacing any previous one of that type
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.transforms.contains_key(entity) {
            log::warn!("Ignoring component for unknown entity {entity:?}");
            return;
        }
        match self.storage_mut::<T>() {
            Some(storage) => {
                storage.insert(entity, component);
            }
            None => log::error!("Component storage for {} is corrupted", std::any::type_name::<T>()),
        }
    }

    /// Get a component from an entity
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.storage::<T>()?.get(entity)
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.component_storages
            .get_mut(&TypeId::of::<T>())?
            .downcast_mut::<SecondaryMap<Entity, T>>()?
            .get_mut(entity)
    }

    /// Iterate over every entity carrying a `T`
    pub fn query<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.storage::<T>().into_iter().flat_map(SecondaryMap::iter)
    }

    /// Visit every entity carrying a `T` together with its transform
    pub fn for_each_mut<T, F>(&mut self, mut f: F)
    where
        T: Component,
        F: FnMut(Entity, &mut T, &mut TransformComponent),
    {
        let Some(storage) = self
            .component_storages
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.downcast_mut::<SecondaryMap<Entity, T>>())
        else {
            return;
        };

        for (entity, component) in storage.iter_mut() {
            if let Some(transform) = self.transforms.get_mut(entity) {
                f(entity, component, transform);
            }
        }
    }

    /// Get an entity's transform
    pub fn transform(&self, entity: Entity) -> Option<&TransformComponent> {
        self.transforms.get(entity)
    }

    /// Get an entity's transform mutably
    pub fn transform_mut(&mut self, entity: Entity) -> Option<&mut TransformComponent> {
        self.transforms.get_mut(entity)
    }

    /// Get an entity's kind
    pub fn kind(&self, entity: Entity) -> Option<EntityKind> {
        self.kinds.get(entity).copied()
    }

    /// Get an iterator over all entities in insertion order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.transforms.keys()
    }

    /// Iterate over all entities of one kind
    pub fn entities_of_kind(&self, kind: EntityKind) -> impl Iterator<Item = Entity> + '_ {
        self.kinds
            .iter()
            .filter(move |(_, k)| **k == kind)
            .map(|(entity, _)| entity)
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether the world holds no entities
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    fn storage<T: Component>(&self) -> Option<&SecondaryMap<Entity, T>> {
        self.component_storages
            .get(&TypeId::of::<T>())?
            .downcast_ref::<SecondaryMap<Entity, T>>()
    }

    fn storage_mut<T: Component>(&mut self) -> Option<&mut SecondaryMap<Entity, T>> {
        self.component_storages
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(SecondaryMap::<Entity, T>::new()))
            .downcast_mut::<SecondaryMap<Entity, T>>()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
