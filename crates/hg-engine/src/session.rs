//! Turn-based play session.
//!
//! One turn is one call to [`Session::turn`]: the line is classified,
//! implicit-command rules fill the gaps, the verb dispatches onto a
//! behavior, and the behavior returns narration. Semantic failures (locked
//! doors, missing tools, ungrabbable objects) are narration too — a turn
//! either advances the world validly or leaves it untouched.

use hg_core::{EntityId, EntityKind, Facing, World};

use crate::alias::AliasTable;
use crate::config::SessionConfig;
use crate::error::{EngineError, EngineResult};
use crate::parser::{ParsedCommand, Verb, classify};
use crate::trace::Trace;

/// What one turn produced.
#[derive(Debug, Clone)]
pub struct TurnOutput {
    /// The narration block for the player.
    pub narration: String,
    /// Resolution trace lines, empty unless tracing is enabled.
    pub trace: Vec<String>,
}

/// A single-player play session over one world.
///
/// The session is the world's only mutator; turns never interleave.
pub struct Session {
    world: World,
    actor: EntityId,
    room: EntityId,
    aliases: AliasTable,
    config: SessionConfig,
}

impl Session {
    /// Start a session with the given actor standing in the given room.
    ///
    /// The world must already be constructed; building it is the caller's
    /// concern. The actor entity must sit in the room's contents.
    pub fn new(
        world: World,
        actor: EntityId,
        room: EntityId,
        aliases: AliasTable,
        config: SessionConfig,
    ) -> EngineResult<Self> {
        let actor_entity = world
            .get(actor)
            .ok_or(hg_core::WorldError::EntityNotFound(actor))?;
        if !actor_entity.is_actor() {
            return Err(EngineError::NotAnActor(actor_entity.name.clone()));
        }
        let room_entity = world
            .get(room)
            .ok_or(hg_core::WorldError::EntityNotFound(room))?;
        if !matches!(room_entity.kind, EntityKind::Room { .. }) {
            return Err(EngineError::NotARoom(room_entity.name.clone()));
        }
        if !room_entity.contents.contains(&actor) {
            return Err(EngineError::ActorNotInRoom {
                actor: actor_entity.name.clone(),
                room: room_entity.name.clone(),
            });
        }
        Ok(Self {
            world,
            actor,
            room,
            aliases,
            config,
        })
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player's entity.
    pub fn actor(&self) -> EntityId {
        self.actor
    }

    /// The room the player currently stands in.
    pub fn room(&self) -> EntityId {
        self.room
    }

    /// Flip trace collection for subsequent turns. Returns the new state.
    pub fn toggle_trace(&mut self) -> bool {
        self.config.trace = !self.config.trace;
        self.config.trace
    }

    /// Run one full turn: classify, apply implicit rules, dispatch, narrate.
    pub fn turn(&mut self, input: &str) -> EngineResult<TurnOutput> {
        let mut trace = Trace::new(self.config.trace);
        let mut cmd = classify(
            input,
            &self.world,
            self.actor,
            self.room,
            &self.aliases,
            &mut trace,
        );
        self.apply_implicit_rules(&mut cmd, &mut trace);
        let narration = self.dispatch(&cmd)?;
        Ok(TurnOutput {
            narration,
            trace: trace.into_lines(),
        })
    }

    /// The gap-filling rules applied after classification, in order.
    fn apply_implicit_rules(&self, cmd: &mut ParsedCommand, trace: &mut Trace) {
        let direction = cmd.adjective.as_deref().and_then(Facing::parse);

        // A lone "self" means checking the inventory.
        if cmd.term_count == 1 && cmd.verb.is_none() && cmd.noun == Some(self.actor) {
            trace.note("lone self-reference, implying look");
            cmd.verb = Some(Verb::Look);
        }

        // "look" without a target looks at a directional wall, or around.
        if cmd.verb == Some(Verb::Look) && cmd.noun.is_none() {
            if let Some(facing) = direction {
                cmd.noun = self.wall_facing(facing);
                trace.note(format!("bare look toward {facing}"));
            } else {
                cmd.noun = Some(self.room);
                trace.note("bare look, implying the room");
            }
        }

        // A lone direction means walking that way.
        if cmd.term_count == 1 && cmd.verb.is_none() && cmd.noun.is_none() && direction.is_some()
        {
            trace.note("lone direction, implying move");
            cmd.verb = Some(Verb::Move);
        }
    }

    fn dispatch(&mut self, cmd: &ParsedCommand) -> EngineResult<String> {
        let Some(verb) = cmd.verb else {
            return Ok("I don't understand that action. Type \"help\" for assistance.".into());
        };
        match verb {
            Verb::Help => Ok(Self::help_text()),
            Verb::Look => Ok(self.do_look(cmd.noun)),
            Verb::Grab => self.do_grab(cmd.noun),
            Verb::Move => self.do_move(cmd.noun, cmd.adjective.as_deref()),
            Verb::Use => self.do_use(cmd.noun),
            Verb::Unlock => Ok(self.do_unlock(cmd.noun)),
            Verb::Drop => self.do_drop(cmd.noun),
            Verb::Destroy => self.do_destroy(cmd.noun),
        }
    }

    fn help_text() -> String {
        "Tell me what you do as simply as possible, for example \"look west\" or \
         \"grab sword\".\nSuggested actions: look, grab, move, use, unlock, drop, destroy."
            .into()
    }

    // -----------------------------------------------------------------------
    // Verb behaviors
    // -----------------------------------------------------------------------

    fn do_look(&self, noun: Option<EntityId>) -> String {
        let Some(target) = noun else {
            return "You can't look there.".into();
        };
        if target == self.actor {
            return self.inventory_listing();
        }
        let Some(entity) = self.world.get(target) else {
            return "You can't see that.".into();
        };

        let mut out = format!("You look at the {}. {}", entity.name, entity.description);
        let contents: Vec<EntityId> = entity
            .contents
            .iter()
            .copied()
            .filter(|&id| id != self.actor)
            .collect();
        match contents.as_slice() {
            [] => {}
            [only] => {
                out.push_str(&format!(
                    "\nInside the {}, you see a {}.",
                    entity.name,
                    self.world.name_of(*only)
                ));
            }
            several => {
                out.push_str(&format!("\nInside the {}, you see several items:", entity.name));
                for &id in several {
                    out.push_str(&format!("\n-{}", self.world.name_of(id)));
                }
            }
        }
        out
    }

    fn inventory_listing(&self) -> String {
        let mut out = String::from("You look in your pockets.\n");
        match self.world.contents_of(self.actor) {
            [] => out.push_str("You find nothing."),
            [only] => out.push_str(&format!("You find a {}.", self.world.name_of(*only))),
            several => {
                out.push_str("You find the following items:");
                for &id in several {
                    out.push_str(&format!("\n-{}", self.world.name_of(id)));
                }
            }
        }
        out
    }

    fn do_grab(&mut self, noun: Option<EntityId>) -> EngineResult<String> {
        let Some(target) = noun else {
            return Ok("You can't see anything of that name.".into());
        };
        let name = self.world.name_of(target).to_string();
        if target != self.room && !self.world.is_within(self.room, target) {
            return Ok(format!("The {name} is not in this room."));
        }
        let takeable = self.world.get(target).is_some_and(|e| e.takeable);
        if !takeable {
            return Ok(format!("You cannot grab the {name}."));
        }
        let holder = self
            .world
            .holder_of(self.room, target)
            .unwrap_or(self.room);
        self.world.move_entity(target, holder, self.actor)?;
        Ok(format!("You grab the {name}."))
    }

    fn do_move(&mut self, noun: Option<EntityId>, adjective: Option<&str>) -> EngineResult<String> {
        let mut target = noun;

        // "move south" walks toward the wall on that side.
        if target.is_none() {
            match adjective.and_then(Facing::parse) {
                Some(facing) => target = self.wall_facing(facing),
                None => return Ok("You can't move there.".into()),
            }
        }
        let Some(mut target) = target else {
            return Ok("You can't move there.".into());
        };

        // A wall stands in for the first door it carries.
        if self.world.get(target).is_some_and(hg_core::Entity::is_wall) {
            let door = self
                .world
                .descendants(target)
                .into_iter()
                .find(|&id| self.world.get(id).is_some_and(hg_core::Entity::is_door));
            match door {
                Some(door) => target = door,
                None => {
                    return Ok(format!(
                        "There is no door on the {}.",
                        self.world.name_of(target)
                    ));
                }
            }
        }

        if self.world.get(target).is_some_and(hg_core::Entity::is_door) {
            self.go_through(target)
        } else {
            Ok("You can't move that.".into())
        }
    }

    fn go_through(&mut self, door: EntityId) -> EngineResult<String> {
        let door_name = self.world.name_of(door).to_string();
        if !self.world.is_within(self.room, door) {
            return Ok(format!("The {door_name} is not in this room."));
        }
        let Some(entity) = self.world.get(door) else {
            return Ok("You can't move that.".into());
        };
        if entity.lock().is_some() {
            return Ok(format!("The {door_name} is locked."));
        }
        let Some(destination) = entity.destination() else {
            return Ok("You can't move that.".into());
        };
        self.world.move_entity(self.actor, self.room, destination)?;
        self.room = destination;
        Ok(format!(
            "You move through the {door_name} into the {}.",
            self.world.name_of(destination)
        ))
    }

    fn do_use(&mut self, noun: Option<EntityId>) -> EngineResult<String> {
        let Some(target) = noun else {
            return Ok("You can't use that.".into());
        };
        let Some(entity) = self.world.get(target) else {
            return Ok("You can't use that.".into());
        };
        if entity.takeable && !self.world.is_within(self.actor, target) {
            return Ok(format!("You need to pick up the {} first.", entity.name));
        }

        match entity.kind {
            EntityKind::Key { target: key_target } => self.use_key(target, key_target),
            EntityKind::Door { .. } => self.go_through(target),
            _ => {
                // Automatic tool discovery: using a tool anywhere in a room
                // that holds something gated on it destroys that thing.
                let gated = self
                    .world
                    .descendants(self.room)
                    .into_iter()
                    .find(|&id| {
                        self.world
                            .get(id)
                            .is_some_and(|e| e.break_tool == Some(target))
                    });
                match gated {
                    Some(victim) => self.destroy_entity(victim),
                    None => Ok(self
                        .world
                        .get(target)
                        .map(hg_core::Entity::interaction_text)
                        .unwrap_or_else(|| "You can't use that.".into())),
                }
            }
        }
    }

    fn use_key(&mut self, key: EntityId, key_target: Option<EntityId>) -> EngineResult<String> {
        let key_name = self.world.name_of(key).to_string();
        let Some(door) = key_target else {
            return Ok("This key does not go anywhere new.".into());
        };
        if !self.world.is_within(self.room, door) {
            return Ok(format!(
                "You can't unlock anything in this room with the {key_name}."
            ));
        }
        let door_name = self.world.name_of(door).to_string();
        // Single use: the door's lock and the key's target clear together.
        if let Some(entity) = self.world.get_mut(door) {
            entity.clear_lock();
        }
        if let Some(entity) = self.world.get_mut(key) {
            entity.clear_key_target();
        }
        Ok(format!("You unlock the {door_name} with the {key_name}."))
    }

    fn do_unlock(&mut self, noun: Option<EntityId>) -> String {
        let Some(target) = noun else {
            return "What do you want to unlock?".into();
        };
        let Some(entity) = self.world.get(target) else {
            return "What do you want to unlock?".into();
        };
        if !entity.is_door() {
            return format!("You can't unlock the {}.", entity.name);
        }
        let Some(key) = entity.lock() else {
            return format!("The {} is already unlocked.", entity.name);
        };
        let door_name = entity.name.clone();
        if !self.world.is_within(self.actor, key) {
            return "You don't have a key.".into();
        }
        let key_name = self.world.name_of(key).to_string();
        if let Some(door) = self.world.get_mut(target) {
            door.clear_lock();
        }
        format!("You unlock the {door_name} with the {key_name}.")
    }

    fn do_drop(&mut self, noun: Option<EntityId>) -> EngineResult<String> {
        let held = noun.is_some_and(|id| self.world.contents_of(self.actor).contains(&id));
        let (Some(target), true) = (noun, held) else {
            return Ok("You can't drop something you don't have.".into());
        };
        let name = self.world.name_of(target).to_string();
        self.world.move_entity(target, self.actor, self.room)?;
        Ok(format!(
            "You drop the {name} in the {}.",
            self.world.name_of(self.room)
        ))
    }

    fn do_destroy(&mut self, noun: Option<EntityId>) -> EngineResult<String> {
        let Some(target) = noun else {
            return Ok("You can't see anything of that name.".into());
        };
        if target == self.actor {
            return Ok("You can't be harmed! You're the protagonist!".into());
        }
        self.destroy_entity(target)
    }

    /// The destruction state machine: reject unbreakables, reject a missing
    /// tool, then remove the target or splice in its broken form at the
    /// same tree position. All checks run before any mutation.
    fn destroy_entity(&mut self, target: EntityId) -> EngineResult<String> {
        let Some(entity) = self.world.get(target) else {
            return Ok("You can't see anything of that name.".into());
        };
        let name = entity.name.clone();
        if !entity.breakable {
            return Ok(format!("You can't break the {name}."));
        }
        let broken_form = entity.broken_form;
        let tool = entity.break_tool;

        let tool_name = match tool {
            Some(tool) => {
                if !self.world.is_within(self.actor, tool) {
                    return Ok(format!(
                        "You need a {} to break the {name}.",
                        self.world.name_of(tool)
                    ));
                }
                Some(self.world.name_of(tool).to_string())
            }
            None => None,
        };

        match broken_form {
            Some(replacement) => self.world.replace_in(self.room, target, replacement)?,
            None => self.world.remove_from(self.room, target),
        }

        let left_behind = broken_form.map(|id| self.world.name_of(id).to_string());
        Ok(match (tool_name, left_behind) {
            (None, None) => format!("You destroy the {name}."),
            (None, Some(remains)) => {
                format!("You destroy the {name}, leaving behind a {remains}.")
            }
            (Some(tool), None) => format!("You destroy the {name} with the {tool}."),
            (Some(tool), Some(remains)) => {
                format!("You destroy the {name} with the {tool}, leaving behind a {remains}.")
            }
        })
    }

    /// The wall in the current room with the given facing, if any.
    fn wall_facing(&self, facing: Facing) -> Option<EntityId> {
        self.world
            .descendants(self.room)
            .into_iter()
            .find(|&id| self.world.get(id).and_then(hg_core::Entity::facing) == Some(facing))
    }
}
