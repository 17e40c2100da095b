//! Navigation and inventory rules.
//!
//! Each rule checks legality against the current [`GameState`], performs
//! the mutation when legal, and returns the line of text to show. Illegal
//! requests leave the state untouched.
//!
//! Behavior hooks are cloned out of the catalog before they run so they can
//! borrow the whole state mutably.

use adventure_foundation::Error;
use tracing::{debug, warn};

use crate::messages;
use crate::place::Place;
use crate::state::GameState;

/// True iff `target` (lower-cased) is among `place`'s paths.
#[must_use]
pub fn is_next_to(place: &Place, target: &str) -> bool {
    place.is_next_to(target)
}

/// Walks the player to an adjacent place.
///
/// Runs the destination's enter hook first; if it refuses, its message is
/// returned and neither position nor visit count change.
pub fn move_to(state: &mut GameState, target: &str) -> String {
    let target = target.to_lowercase();

    if !is_next_to(state.current_place(), &target) {
        debug!(from = state.player.position(), to = %target, "move rejected: not adjacent");
        return format!(
            "You are not next to the {target}, staying in the {}",
            state.player.position()
        );
    }

    let Some(destination) = state.catalog.get(&target) else {
        debug!(to = %target, "move rejected: no such place");
        return messages::CANT_GO.to_string();
    };

    let hook = destination.on_enter().cloned();
    if let Some(hook) = hook {
        if let Err(err) = hook(state) {
            return hook_failure("enter", &target, &err);
        }
    }

    arrive(state, &target);
    format!("You walked to the {target}")
}

/// Turns a failed look or enter hook into response text.
///
/// A deliberate refusal shows its bare message. Any other error is shown
/// in full and logged as a warning.
pub fn hook_failure(hook: &str, place: &str, err: &Error) -> String {
    match err.rejection_message() {
        Some(message) => {
            debug!(hook, place, reason = message, "hook refused");
            message.to_string()
        }
        None => {
            warn!(hook, place, error = %err, "hook failed");
            err.to_string()
        }
    }
}

/// Teleports the player to a previously visited place.
///
/// Requires the teleporter and exactly one target. The destination's enter
/// hook is not run.
pub fn teleport(state: &mut GameState, targets: &[String]) -> String {
    if !state.player.has_item(messages::TELEPORTER) {
        return messages::NEED_TELEPORTER.to_string();
    }

    let [target] = targets else {
        return messages::SINGLE_PLACE.to_string();
    };
    let target = target.to_lowercase();

    let visits = state.catalog.get(&target).map_or(0, Place::visit_count);
    if visits == 0 {
        debug!(to = %target, "teleport rejected: never visited");
        return messages::NOT_VISITED.to_string();
    }

    arrive(state, &target);
    format!("Teleported to {target}")
}

/// Moves named items from the current place into the player's hands.
///
/// The first taken item with a take hook ends the operation: the hook's
/// text becomes the whole response and any remaining names are ignored.
pub fn take(state: &mut GameState, names: &[String]) -> String {
    if names.is_empty() {
        return messages::TAKE_WHAT.to_string();
    }

    let mut lines = Vec::new();

    for name in names {
        let Some(item) = state.current_place_mut().items_mut().remove(name) else {
            continue;
        };
        let hook = item.on_take().cloned();
        state.player.add_item(name.clone(), item);
        debug!(item = %name, place = state.player.position(), "item taken");

        if let Some(hook) = hook {
            return hook(state);
        }

        lines.push(format!("You took the {name}"));
    }

    if lines.is_empty() {
        return messages::NOTHING_TO_TAKE.to_string();
    }
    lines.join("\n")
}

/// Moves named items from the player's hands into the current place.
pub fn drop(state: &mut GameState, names: &[String]) -> String {
    if names.is_empty() {
        return messages::DROP_WHAT.to_string();
    }

    let mut lines = Vec::new();

    for name in names {
        let Some(item) = state.player.remove_item(name) else {
            continue;
        };
        state.current_place_mut().items_mut().insert(name.clone(), item);
        debug!(item = %name, place = state.player.position(), "item dropped");

        lines.push(format!("You dropped the {name}"));
    }

    if lines.is_empty() {
        return messages::CANNOT_DROP.to_string();
    }
    lines.join("\n")
}

/// Uses a carried item. Only the first name counts.
pub fn use_item(state: &mut GameState, names: &[String]) -> String {
    let Some(name) = names.first() else {
        return messages::USE_WHAT.to_string();
    };

    let Some(item) = state.player.item(name) else {
        return messages::NOT_CARRYING_ITEM.to_string();
    };

    let hook = item.on_use().cloned();
    match hook {
        Some(hook) => hook(state),
        None => format!("You can’t use the {name}"),
    }
}

fn arrive(state: &mut GameState, target: &str) {
    if let Some(place) = state.catalog.get_mut(target) {
        place.record_visit();
        debug!(to = target, visits = place.visit_count(), "player arrived");
    }
    state.player.set_position(target);
}
