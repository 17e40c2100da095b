//! The standard world shipped with the game.
//!
//! ```text
//!   lake ── start ── forest ── cave ── treasury
//! ```
//!
//! The teleporter lies in the forest. The cave is too dark to look around
//! without the torch from the lake, and the treasury only opens for
//! someone carrying the key hidden in the cave.

use adventure_foundation::{Error, Result};

use crate::catalog::WorldCatalog;
use crate::item::Item;
use crate::place::Place;
use crate::player::Player;
use crate::state::GameState;

/// Where a new player starts.
pub const START: &str = "start";

/// Builds a fresh game in the standard world.
///
/// # Errors
///
/// Returns an error if the world definition is inconsistent.
pub fn standard_world() -> Result<GameState> {
    let catalog = WorldCatalog::builder()
        .place(start())
        .place(forest())
        .place(lake())
        .place(cave())
        .place(treasury())
        .build()?;

    Ok(GameState::new(catalog, Player::new(START)))
}

fn start() -> Place {
    Place::new(START)
        .with_paths(["forest", "lake"])
        .with_item(map())
        .with_on_look(|_| {
            Ok("A crossroads under an open sky. A weathered signpost points \
                toward the forest and the lake."
                .to_string())
        })
}

fn forest() -> Place {
    Place::new("forest")
        .with_paths(["start", "cave"])
        .with_item(Item::new("teleporter"))
        .with_on_look(|state| {
            let mut text = "Tall pines creak in the wind.".to_string();
            if state.current_place().items().contains("teleporter") {
                text.push_str(" Something metallic hums beneath the ferns.");
            }
            Ok(text)
        })
}

fn lake() -> Place {
    Place::new("lake")
        .with_path("start")
        .with_item(coin())
        .with_item(Item::new("torch"))
}

fn cave() -> Place {
    Place::new("cave")
        .with_paths(["forest", "treasury"])
        .with_item(Item::new("key"))
        .with_on_look(|state| {
            if state.player.has_item("torch") {
                Ok("Torchlight dances over wet stone. An iron door is set into \
                    the far wall."
                    .to_string())
            } else {
                Err(Error::rejected("It is too dark to see anything."))
            }
        })
}

fn treasury() -> Place {
    Place::new("treasury")
        .with_path("cave")
        .with_item(crown())
        .with_on_enter(|state| {
            if state.player.has_item("key") {
                Ok(())
            } else {
                Err(Error::rejected("The treasury door is locked."))
            }
        })
}

fn map() -> Item {
    Item::new("map").with_on_use(|state| {
        format!(
            "The map shows: {}",
            state.catalog.place_names().join(", ")
        )
    })
}

fn coin() -> Item {
    Item::new("coin")
        .with_on_take(|_| "The coin glitters as you pocket it.".to_string())
        .with_on_use(|state| {
            if state.player.position() != "lake" {
                return "You flip the coin. Heads.".to_string();
            }
            if let Some(coin) = state.player.remove_item("coin") {
                state.current_place_mut().items_mut().insert("coin", coin);
            }
            "The coin sinks into the lake. You feel lucky.".to_string()
        })
}

fn crown() -> Item {
    Item::new("crown").with_on_use(|_| {
        "You place the crown on your head. The adventure is yours!".to_string()
    })
}
