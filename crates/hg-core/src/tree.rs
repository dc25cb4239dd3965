//! Debug walk over a containment subtree.
//!
//! Gameplay listings never show hidden content: an entity's `broken_form`
//! (and everything nested inside it) only enters the tree on destruction.
//! This walk is the one place that descends into those links, marking hidden
//! entries with `-` instead of `+`.

use std::fmt::Write as _;

use crate::entity::EntityId;
use crate::world::World;

/// Render the full containment tree under `root`, hidden entries included.
pub fn render(world: &World, root: EntityId) -> String {
    let mut out = String::new();
    render_node(world, root, 0, false, &mut out);
    out
}

fn render_node(world: &World, id: EntityId, depth: usize, hidden: bool, out: &mut String) {
    let Some(entity) = world.get(id) else {
        return;
    };
    let marker = if hidden { '-' } else { '+' };
    let _ = writeln!(
        out,
        "{}{} {:<30} {}",
        "...".repeat(depth),
        marker,
        entity.name,
        entity.kind
    );
    for &child in &entity.contents {
        render_node(world, child, depth + 1, false, out);
    }
    if let Some(broken) = entity.broken_form {
        render_node(world, broken, depth + 1, true, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Entity, EntityKind};

    #[test]
    fn render_marks_hidden_broken_forms() {
        let mut world = World::new("Test House");
        let room = world
            .spawn(Entity::new(EntityKind::Room { x: 0, y: 0 }, "Dining Room"))
            .unwrap();
        let sword = world
            .spawn(Entity::new(EntityKind::Item, "Silvered Sword").takeable())
            .unwrap();
        let broken = world
            .spawn(Entity::new(EntityKind::Item, "Broken Crate").takeable())
            .unwrap();
        world.attach(broken, sword).unwrap();
        let crate_ = world
            .spawn(
                Entity::new(EntityKind::Item, "Wooden Crate")
                    .takeable()
                    .with_broken_form(broken),
            )
            .unwrap();
        world.attach(room, crate_).unwrap();

        let rendered = render(&world, room);
        assert!(rendered.contains("+ Dining Room"));
        assert!(rendered.contains("+ Wooden Crate"));
        // The broken crate is hidden, the sword inside it renders normally.
        assert!(rendered.contains("- Broken Crate"));
        assert!(rendered.contains("+ Silvered Sword"));
    }

    #[test]
    fn render_shows_kinds() {
        let mut world = World::new("Test House");
        let room = world
            .spawn(Entity::new(EntityKind::Room { x: 0, y: 0 }, "Bedroom"))
            .unwrap();
        let rendered = render(&world, room);
        assert!(rendered.contains("room"));
    }
}
