//! The built-in demo house.
//!
//! Three rooms around a small puzzle chain: the brass key on the living
//! room's west wall opens the oak door to the dining room, the crate in
//! the dining room breaks open to reveal a sword, and the sword deals
//! with what sleeps in the bedroom.

use hg_core::{Entity, EntityId, EntityKind, Facing, World, WorldResult};

/// A freshly built demo world plus the IDs a session needs to start.
pub struct DemoWorld {
    /// The world itself.
    pub world: World,
    /// The player entity.
    pub actor: EntityId,
    /// The starting room.
    pub start: EntityId,
    /// Every room, in tour order.
    pub rooms: Vec<EntityId>,
}

/// Build the demo house.
pub fn build() -> WorldResult<DemoWorld> {
    let mut world = World::new("The Demo House");

    let living = world.spawn(
        Entity::new(EntityKind::Room { x: 0, y: 0 }, "Living Room").with_description(
            "A lovely living room, with each wall painted a different color. On the south \
             wall, there is an oak door. On the east wall, there is a metal door.",
        ),
    )?;
    let dining = world.spawn(
        Entity::new(EntityKind::Room { x: 0, y: -1 }, "Dining Room").with_description(
            "A cute little kitchen. There is an oak door on the south wall.",
        ),
    )?;
    let bedroom = world.spawn(
        Entity::new(EntityKind::Room { x: 1, y: 0 }, "Bedroom")
            .with_description("A cozy bedroom. There is nothing of note inside it."),
    )?;

    // Living room walls.
    let north_living = spawn_wall(
        &mut world,
        Facing::North,
        "North Wall",
        "A wall painted red, facing north.",
    )?;
    let east_living = spawn_wall(
        &mut world,
        Facing::East,
        "East Wall",
        "A wall painted yellow, facing east.",
    )?;
    let south_living = spawn_wall(
        &mut world,
        Facing::South,
        "South Wall",
        "A wall painted blue, facing south.",
    )?;
    let west_living = spawn_wall(
        &mut world,
        Facing::West,
        "West Wall",
        "A wall painted green, facing west. There is a key hanging on the wall.",
    )?;
    for wall in [north_living, east_living, south_living, west_living] {
        world.attach(living, wall)?;
    }

    // Dining room walls, named by their colors.
    let north_dining = spawn_wall(
        &mut world,
        Facing::North,
        "Red Wall",
        "A wall painted red, facing north.",
    )?;
    let east_dining = spawn_wall(
        &mut world,
        Facing::East,
        "Yellow Wall",
        "A wall painted yellow, facing east.",
    )?;
    let south_dining = spawn_wall(
        &mut world,
        Facing::South,
        "Blue Wall",
        "A wall painted blue, facing south.",
    )?;
    let west_dining = spawn_wall(
        &mut world,
        Facing::West,
        "Green Wall",
        "A wall painted green, facing west.",
    )?;
    for wall in [north_dining, east_dining, south_dining, west_dining] {
        world.attach(dining, wall)?;
    }

    // Bedroom walls.
    let mut west_bedroom = None;
    for facing in [Facing::North, Facing::East, Facing::South, Facing::West] {
        let name = match facing {
            Facing::North => "North Wall",
            Facing::East => "East Wall",
            Facing::South => "South Wall",
            Facing::West => "West Wall",
        };
        let wall = spawn_wall(
            &mut world,
            facing,
            name,
            format!("A wall on the {facing} side of the room."),
        )?;
        world.attach(bedroom, wall)?;
        if facing == Facing::West {
            west_bedroom = Some(wall);
        }
    }

    // The key and the oak door reference each other, so the key's target is
    // patched in once the door exists.
    let key_entity = Entity::new(EntityKind::Key { target: None }, "Brass Key")
        .with_description("It's slightly rusted. You're not sure if brass can rust.")
        .takeable();
    let key = key_entity.id;
    world.spawn(key_entity)?;
    world.attach(west_living, key)?;

    let oak_south = world.spawn(
        Entity::new(
            EntityKind::Door {
                lock: Some(key),
                destination: dining,
            },
            "Oak Door",
        )
        .with_description("It has a lock on it."),
    )?;
    world.attach(south_living, oak_south)?;
    if let Some(entity) = world.get_mut(key) {
        entity.kind = EntityKind::Key {
            target: Some(oak_south),
        };
    }

    let oak_north = world.spawn(
        Entity::new(
            EntityKind::Door {
                lock: None,
                destination: living,
            },
            "Oak Door",
        )
        .with_description("It was unlocked from the other side."),
    )?;
    world.attach(north_dining, oak_north)?;

    let metal_east = world.spawn(
        Entity::new(
            EntityKind::Door {
                lock: None,
                destination: bedroom,
            },
            "Metal Door",
        )
        .with_description("Despite being made of metal, it is unlocked."),
    )?;
    world.attach(east_living, metal_east)?;
    let metal_west = world.spawn(
        Entity::new(
            EntityKind::Door {
                lock: None,
                destination: living,
            },
            "Metal Door",
        )
        .with_description("Despite being made of metal, it is unlocked."),
    )?;
    if let Some(wall) = west_bedroom {
        world.attach(wall, metal_west)?;
    }

    // Dining room furnishings. The broken crate stays hidden until the
    // whole one is destroyed.
    let chair = world.spawn(
        Entity::new(EntityKind::Item, "Wooden Chair")
            .with_description("It looks uncomfortable.")
            .with_use_text("You sit in the chair. It feels awful.")
            .takeable()
            .breakable(),
    )?;
    world.attach(dining, chair)?;

    let sword = world.spawn(
        Entity::new(EntityKind::Item, "Silvered Sword")
            .with_description("An honored family blade, kept in pristine condition")
            .with_use_text("The sword feels good in your hands.")
            .takeable(),
    )?;
    let broken_crate = world.spawn(
        Entity::new(EntityKind::Item, "Broken Crate")
            .with_description("The crate has been broken open.")
            .with_use_text("It's not useful anymore.")
            .takeable(),
    )?;
    world.attach(broken_crate, sword)?;
    let crate_ = world.spawn(
        Entity::new(EntityKind::Item, "Wooden Crate")
            .with_description("There doesn't look like a way to open this.")
            .with_use_text("You need to break this to see what is inside.")
            .takeable()
            .with_broken_form(broken_crate),
    )?;
    world.attach(dining, crate_)?;

    // Bedroom furnishings.
    let gold = world.spawn(
        Entity::new(EntityKind::Item, "Gold Bar")
            .with_description("A very expensive golden bar.")
            .with_use_text("You win!")
            .takeable(),
    )?;
    let monster = world.spawn(
        Entity::new(EntityKind::Item, "Monster")
            .with_description("A scary guy, sleeping in the bed.")
            .with_use_text("It doesn't want to be bothered.")
            .with_break_tool(sword)
            .with_broken_form(gold),
    )?;
    let bed = world.spawn(
        Entity::new(EntityKind::Item, "Bed")
            .with_description("It looks comfy.")
            .with_use_text("The bed is occupied."),
    )?;
    world.attach(bed, monster)?;
    world.attach(bedroom, bed)?;

    let actor = world.spawn(
        Entity::new(EntityKind::Actor { health: 100 }, "Self")
            .with_description("It's you! Very handsome!"),
    )?;
    world.attach(living, actor)?;

    Ok(DemoWorld {
        world,
        actor,
        start: living,
        rooms: vec![living, dining, bedroom],
    })
}

fn spawn_wall(
    world: &mut World,
    facing: Facing,
    name: &str,
    description: impl Into<String>,
) -> WorldResult<EntityId> {
    world.spawn(Entity::new(EntityKind::Wall { facing }, name).with_description(description))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_world_builds() {
        let demo = build().unwrap();
        assert!(demo.world.entity_count() > 20);
        assert!(demo.world.contents_of(demo.start).contains(&demo.actor));
    }

    #[test]
    fn key_and_door_reference_each_other() {
        let demo = build().unwrap();
        let key = demo
            .world
            .descendants(demo.start)
            .into_iter()
            .find(|&id| demo.world.name_of(id) == "Brass Key")
            .unwrap();
        let door = demo.world.get(key).unwrap().key_target().unwrap();
        assert_eq!(demo.world.get(door).unwrap().lock(), Some(key));
    }

    #[test]
    fn broken_crate_starts_detached() {
        let demo = build().unwrap();
        let visible = demo.world.descendants(demo.start);
        assert!(
            !visible
                .iter()
                .any(|&id| demo.world.name_of(id) == "Broken Crate")
        );
    }
}
