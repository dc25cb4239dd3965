use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};
use crate::error::{WorldError, WorldResult};

/// The world model. Owns every entity; containment is expressed through each
/// entity's ordered `contents`.
///
/// Containment is a tree: every entity has at most one direct holder. The
/// model enforces the no-cycle invariant on attach but leaves single-parent
/// exclusivity to [`World::move_entity`] — raw [`World::attach`] is a
/// building-phase tool that performs no membership checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Display name of the world.
    pub name: String,
    entities: HashMap<EntityId, Entity>,
}

impl World {
    /// Create an empty world.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: HashMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Entity registry
    // -----------------------------------------------------------------------

    /// Register an entity. Returns its ID.
    ///
    /// Duplicate IDs are rejected; duplicate names are legal (a house can
    /// have two "Oak Door"s).
    pub fn spawn(&mut self, entity: Entity) -> WorldResult<EntityId> {
        let id = entity.id;
        if self.entities.contains_key(&id) {
            return Err(WorldError::DuplicateId(id));
        }
        self.entities.insert(id, entity);
        Ok(id)
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// The display name of an entity, or a placeholder for unknown IDs.
    pub fn name_of(&self, id: EntityId) -> &str {
        self.get(id).map_or("something", |e| e.name.as_str())
    }

    /// Number of registered entities, including detached ones.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    // -----------------------------------------------------------------------
    // Containment
    // -----------------------------------------------------------------------

    /// Append `item` to `container`'s contents.
    ///
    /// Rejects unknown IDs and anything that would put an entity inside its
    /// own subtree. Performs no duplicate-membership check; inserting an
    /// entity that already has a holder is a caller error — gameplay code
    /// goes through [`World::move_entity`] instead.
    pub fn attach(&mut self, container: EntityId, item: EntityId) -> WorldResult<()> {
        if !self.entities.contains_key(&item) {
            return Err(WorldError::EntityNotFound(item));
        }
        if container == item || self.is_within(item, container) {
            return Err(WorldError::ContainmentCycle {
                item: self.name_of(item).to_string(),
                container: self.name_of(container).to_string(),
            });
        }
        let holder = self
            .entities
            .get_mut(&container)
            .ok_or(WorldError::EntityNotFound(container))?;
        holder.contents.push(item);
        Ok(())
    }

    /// Remove `item` from `container`'s direct contents. No-op when absent.
    pub fn detach(&mut self, container: EntityId, item: EntityId) {
        if let Some(holder) = self.entities.get_mut(&container) {
            holder.contents.retain(|&id| id != item);
        }
    }

    /// Atomically re-parent `item` from one container to another.
    ///
    /// This is the single operation gameplay uses for grab, drop, and
    /// movement; it removes the duplicate-insertion hazard of a detach
    /// followed by a separate attach. Fails without mutating anything.
    pub fn move_entity(
        &mut self,
        item: EntityId,
        from: EntityId,
        to: EntityId,
    ) -> WorldResult<()> {
        let held = self
            .get(from)
            .ok_or(WorldError::EntityNotFound(from))?
            .contents
            .contains(&item);
        if !held {
            return Err(WorldError::NotHeld {
                item: self.name_of(item).to_string(),
                container: self.name_of(from).to_string(),
            });
        }
        if to == item || self.is_within(item, to) {
            return Err(WorldError::ContainmentCycle {
                item: self.name_of(item).to_string(),
                container: self.name_of(to).to_string(),
            });
        }
        if !self.entities.contains_key(&to) {
            return Err(WorldError::EntityNotFound(to));
        }
        self.detach(from, item);
        if let Some(dest) = self.entities.get_mut(&to) {
            dest.contents.push(item);
        }
        Ok(())
    }

    /// Direct contents of an entity, in order. Empty for unknown IDs.
    pub fn contents_of(&self, id: EntityId) -> &[EntityId] {
        self.get(id).map_or(&[], |e| e.contents.as_slice())
    }

    /// True if `item` sits anywhere in `root`'s transitive contents.
    pub fn is_within(&self, root: EntityId, item: EntityId) -> bool {
        self.contents_of(root)
            .iter()
            .any(|&child| child == item || self.is_within(child, item))
    }

    /// Every entity transitively contained in `root`, in enumeration order:
    /// each child's subtree first, then the child itself.
    ///
    /// This order is load-bearing: the command resolver builds its noun
    /// table from it, and ambiguous terms default to the first candidate.
    pub fn descendants(&self, root: EntityId) -> Vec<EntityId> {
        let mut out = Vec::new();
        self.collect_descendants(root, &mut out);
        out
    }

    fn collect_descendants(&self, id: EntityId, out: &mut Vec<EntityId>) {
        for &child in self.contents_of(id) {
            self.collect_descendants(child, out);
            out.push(child);
        }
    }

    /// The direct holder of `item` within `root`'s subtree (including `root`
    /// itself), searching depth-first and stopping at the first match.
    pub fn holder_of(&self, root: EntityId, item: EntityId) -> Option<EntityId> {
        if self.contents_of(root).contains(&item) {
            return Some(root);
        }
        self.contents_of(root)
            .iter()
            .find_map(|&child| self.holder_of(child, item))
    }

    /// Search `root`'s subtree for the direct holder of `item` and remove
    /// `item` there. Without effect when `item` is absent from the subtree.
    pub fn remove_from(&mut self, root: EntityId, item: EntityId) {
        if let Some(holder) = self.holder_of(root, item) {
            self.detach(holder, item);
        }
    }

    /// Like [`World::remove_from`], but splice `replacement` into the exact
    /// slot `item` vacated, leaving sibling order intact. Without effect
    /// when `item` is absent from the subtree.
    pub fn replace_in(
        &mut self,
        root: EntityId,
        item: EntityId,
        replacement: EntityId,
    ) -> WorldResult<()> {
        if !self.entities.contains_key(&replacement) {
            return Err(WorldError::EntityNotFound(replacement));
        }
        let Some(holder) = self.holder_of(root, item) else {
            return Ok(());
        };
        let Some(holder_entity) = self.entities.get_mut(&holder) else {
            return Ok(());
        };
        if let Some(slot) = holder_entity.contents.iter().position(|&id| id == item) {
            holder_entity.contents[slot] = replacement;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;

    fn item(name: &str) -> Entity {
        Entity::new(EntityKind::Item, name)
    }

    fn room(name: &str) -> Entity {
        Entity::new(EntityKind::Room { x: 0, y: 0 }, name)
    }

    #[test]
    fn spawn_and_get() {
        let mut world = World::new("Test House");
        let id = world.spawn(item("Wooden Chair")).unwrap();
        assert_eq!(world.get(id).unwrap().name, "Wooden Chair");
        assert_eq!(world.entity_count(), 1);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut world = World::new("Test House");
        let chair = item("Wooden Chair");
        let copy = chair.clone();
        world.spawn(chair).unwrap();
        assert!(matches!(
            world.spawn(copy),
            Err(WorldError::DuplicateId(_))
        ));
    }

    #[test]
    fn duplicate_names_are_legal() {
        let mut world = World::new("Test House");
        world.spawn(item("Oak Door")).unwrap();
        world.spawn(item("Oak Door")).unwrap();
        assert_eq!(world.entity_count(), 2);
    }

    #[test]
    fn attach_rejects_self_containment() {
        let mut world = World::new("Test House");
        let chest = world.spawn(item("Chest")).unwrap();
        let err = world.attach(chest, chest);
        assert!(matches!(err, Err(WorldError::ContainmentCycle { .. })));
    }

    #[test]
    fn attach_rejects_cycle_through_subtree() {
        let mut world = World::new("Test House");
        let outer = world.spawn(item("Outer")).unwrap();
        let inner = world.spawn(item("Inner")).unwrap();
        world.attach(outer, inner).unwrap();
        // Putting the outer chest inside its own content must fail.
        let err = world.attach(inner, outer);
        assert!(matches!(err, Err(WorldError::ContainmentCycle { .. })));
    }

    #[test]
    fn descendants_order_is_subtree_before_child() {
        let mut world = World::new("Test House");
        let r = world.spawn(room("Living Room")).unwrap();
        let chest = world.spawn(item("Chest")).unwrap();
        let coin = world.spawn(item("Coin")).unwrap();
        let lamp = world.spawn(item("Lamp")).unwrap();
        world.attach(r, chest).unwrap();
        world.attach(chest, coin).unwrap();
        world.attach(r, lamp).unwrap();

        assert_eq!(world.descendants(r), vec![coin, chest, lamp]);
    }

    #[test]
    fn is_within_sees_nested_entities() {
        let mut world = World::new("Test House");
        let r = world.spawn(room("Living Room")).unwrap();
        let chest = world.spawn(item("Chest")).unwrap();
        let coin = world.spawn(item("Coin")).unwrap();
        world.attach(r, chest).unwrap();
        world.attach(chest, coin).unwrap();

        assert!(world.is_within(r, coin));
        assert!(!world.is_within(coin, r));
    }

    #[test]
    fn remove_from_reaches_nested_holder() {
        let mut world = World::new("Test House");
        let r = world.spawn(room("Living Room")).unwrap();
        let chest = world.spawn(item("Chest")).unwrap();
        let coin = world.spawn(item("Coin")).unwrap();
        world.attach(r, chest).unwrap();
        world.attach(chest, coin).unwrap();

        world.remove_from(r, coin);
        assert!(world.contents_of(chest).is_empty());
        // The coin still exists, it is just out of the tree.
        assert!(world.get(coin).is_some());
    }

    #[test]
    fn remove_from_absent_item_is_noop() {
        let mut world = World::new("Test House");
        let r = world.spawn(room("Living Room")).unwrap();
        let chest = world.spawn(item("Chest")).unwrap();
        let stray = world.spawn(item("Stray")).unwrap();
        world.attach(r, chest).unwrap();

        world.remove_from(r, stray);
        assert_eq!(world.contents_of(r), &[chest]);
    }

    #[test]
    fn replace_in_preserves_sibling_order() {
        let mut world = World::new("Test House");
        let r = world.spawn(room("Living Room")).unwrap();
        let a = world.spawn(item("Lamp")).unwrap();
        let crate_ = world.spawn(item("Wooden Crate")).unwrap();
        let b = world.spawn(item("Rug")).unwrap();
        let broken = world.spawn(item("Broken Crate")).unwrap();
        for id in [a, crate_, b] {
            world.attach(r, id).unwrap();
        }

        world.replace_in(r, crate_, broken).unwrap();
        assert_eq!(world.contents_of(r), &[a, broken, b]);
    }

    #[test]
    fn replace_in_absent_item_is_noop() {
        let mut world = World::new("Test House");
        let r = world.spawn(room("Living Room")).unwrap();
        let a = world.spawn(item("Lamp")).unwrap();
        let stray = world.spawn(item("Stray")).unwrap();
        let broken = world.spawn(item("Broken Stray")).unwrap();
        world.attach(r, a).unwrap();

        world.replace_in(r, stray, broken).unwrap();
        assert_eq!(world.contents_of(r), &[a]);
    }

    #[test]
    fn move_entity_reparents() {
        let mut world = World::new("Test House");
        let living = world.spawn(room("Living Room")).unwrap();
        let dining = world.spawn(room("Dining Room")).unwrap();
        let chair = world.spawn(item("Wooden Chair")).unwrap();
        world.attach(living, chair).unwrap();

        world.move_entity(chair, living, dining).unwrap();
        assert!(world.contents_of(living).is_empty());
        assert_eq!(world.contents_of(dining), &[chair]);
    }

    #[test]
    fn move_entity_fails_cleanly_when_not_held() {
        let mut world = World::new("Test House");
        let living = world.spawn(room("Living Room")).unwrap();
        let dining = world.spawn(room("Dining Room")).unwrap();
        let chair = world.spawn(item("Wooden Chair")).unwrap();
        world.attach(dining, chair).unwrap();

        let err = world.move_entity(chair, living, dining);
        assert!(matches!(err, Err(WorldError::NotHeld { .. })));
        // Nothing moved.
        assert_eq!(world.contents_of(dining), &[chair]);
        assert!(world.contents_of(living).is_empty());
    }

    #[test]
    fn holder_of_stops_at_first_match() {
        let mut world = World::new("Test House");
        let r = world.spawn(room("Living Room")).unwrap();
        let wall = world.spawn(item("West Wall")).unwrap();
        let key = world.spawn(item("Brass Key")).unwrap();
        world.attach(r, wall).unwrap();
        world.attach(wall, key).unwrap();

        assert_eq!(world.holder_of(r, key), Some(wall));
        assert_eq!(world.holder_of(r, wall), Some(r));
        assert_eq!(world.holder_of(wall, r), None);
    }
}
