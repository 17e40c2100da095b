//! Movement and inventory rules on hand-built worlds.

use adventure_foundation::Error;
use adventure_world::{GameState, Item, Place, Player, WorldCatalog, messages, rules};
use proptest::prelude::*;

fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

fn corridor() -> GameState {
    let catalog = WorldCatalog::builder()
        .place(
            Place::new("hall")
                .with_path("study")
                .with_item(Item::new("lamp"))
                .with_item(Item::new("book")),
        )
        .place(Place::new("study").with_paths(["hall", "vault"]))
        .place(
            Place::new("vault")
                .with_path("study")
                .with_on_enter(|state| {
                    if state.player.has_item("lamp") {
                        Ok(())
                    } else {
                        Err(Error::rejected("It is pitch black."))
                    }
                }),
        )
        .build()
        .unwrap();
    GameState::new(catalog, Player::new("hall"))
}

#[test]
fn walk_counts_visits() {
    let mut state = corridor();
    assert_eq!(rules::move_to(&mut state, "study"), "You walked to the study");
    assert_eq!(rules::move_to(&mut state, "hall"), "You walked to the hall");
    assert_eq!(rules::move_to(&mut state, "STUDY"), "You walked to the study");

    assert_eq!(state.catalog.resolve_place("study").visit_count(), 2);
    assert_eq!(state.catalog.resolve_place("hall").visit_count(), 1);
}

#[test]
fn walk_to_non_neighbor_stays_put() {
    let mut state = corridor();
    assert_eq!(
        rules::move_to(&mut state, "vault"),
        "You are not next to the vault, staying in the hall"
    );
    assert_eq!(state.player.position(), "hall");
    assert_eq!(state.catalog.resolve_place("vault").visit_count(), 0);
}

#[test]
fn enter_hook_can_refuse() {
    let mut state = corridor();
    rules::move_to(&mut state, "study");
    assert_eq!(rules::move_to(&mut state, "vault"), "It is pitch black.");
    assert_eq!(state.player.position(), "study");
    assert_eq!(state.catalog.resolve_place("vault").visit_count(), 0);
}

#[test]
fn enter_hook_can_allow() {
    let mut state = corridor();
    rules::take(&mut state, &args(&["lamp"]));
    rules::move_to(&mut state, "study");
    assert_eq!(rules::move_to(&mut state, "vault"), "You walked to the vault");
    assert_eq!(state.catalog.resolve_place("vault").visit_count(), 1);
}

#[test]
fn take_several_skips_missing() {
    let mut state = corridor();
    assert_eq!(
        rules::take(&mut state, &args(&["book", "sword", "lamp"])),
        "You took the book\nYou took the lamp"
    );
    assert!(state.current_place().items().is_empty());
    assert_eq!(state.player.item_count(), 2);
}

#[test]
fn take_hook_short_circuits() {
    let catalog = WorldCatalog::builder()
        .place(
            Place::new("shop")
                .with_item(Item::new("apple"))
                .with_item(Item::new("bell").with_on_take(|_| "Ding!".to_string()))
                .with_item(Item::new("cup")),
        )
        .build()
        .unwrap();
    let mut state = GameState::new(catalog, Player::new("shop"));

    let text = rules::take(&mut state, &args(&["apple", "bell", "cup"]));
    assert_eq!(text, "Ding!");
    assert!(state.player.has_item("apple"));
    assert!(state.player.has_item("bell"));
    assert!(!state.player.has_item("cup"));
    assert!(state.current_place().items().contains("cup"));
}

#[test]
fn drop_leaves_items_here() {
    let mut state = corridor();
    rules::take(&mut state, &args(&["book"]));
    rules::move_to(&mut state, "study");
    assert_eq!(
        rules::drop(&mut state, &args(&["book", "lamp"])),
        "You dropped the book"
    );
    assert!(state.current_place().items().contains("book"));
    assert_eq!(rules::drop(&mut state, &args(&["book"])), messages::CANNOT_DROP);
}

#[test]
fn use_without_hook() {
    let mut state = corridor();
    rules::take(&mut state, &args(&["book"]));
    assert_eq!(
        rules::use_item(&mut state, &args(&["book"])),
        "You can’t use the book"
    );
}

#[test]
fn teleport_back_to_visited_place() {
    let catalog = WorldCatalog::builder()
        .place(Place::new("start").with_path("forest"))
        .place(
            Place::new("forest")
                .with_path("start")
                .with_item(Item::new("teleporter")),
        )
        .build()
        .unwrap();
    let mut state = GameState::new(catalog, Player::new("start"));

    rules::move_to(&mut state, "forest");
    rules::take(&mut state, &args(&["teleporter"]));
    rules::move_to(&mut state, "start");

    assert_eq!(
        rules::teleport(&mut state, &args(&["forest"])),
        "Teleported to forest"
    );
    assert_eq!(state.player.position(), "forest");
    assert_eq!(state.catalog.resolve_place("forest").visit_count(), 2);
}

#[test]
fn teleport_skips_enter_hook() {
    let mut state = corridor();
    state.player.add_item(messages::TELEPORTER, Item::new(messages::TELEPORTER));
    state.catalog.get_mut("vault").unwrap().record_visit();

    assert_eq!(
        rules::teleport(&mut state, &args(&["vault"])),
        "Teleported to vault"
    );
    assert_eq!(state.player.position(), "vault");
}

#[test]
fn void_keeps_dropped_items() {
    let catalog = WorldCatalog::builder()
        .place(Place::new("hall"))
        .build()
        .unwrap();
    let mut state = GameState::new(catalog, Player::new("limbo"));
    state.player.add_item("pebble", Item::new("pebble"));

    assert_eq!(
        rules::drop(&mut state, &args(&["pebble"])),
        "You dropped the pebble"
    );
    assert!(state.catalog.void().items().contains("pebble"));
    assert_eq!(state.item_total(), 1);

    assert_eq!(rules::move_to(&mut state, "nowhere"), messages::CANT_GO);
    assert_eq!(state.player.position(), "limbo");
}

proptest! {
    #[test]
    fn take_then_drop_conserves_items(names in prop::collection::vec("[a-z]{1,6}", 0..6)) {
        let mut state = corridor();
        let before = state.item_total();

        rules::take(&mut state, &names);
        prop_assert_eq!(state.item_total(), before);

        rules::move_to(&mut state, "study");
        rules::drop(&mut state, &names);
        prop_assert_eq!(state.item_total(), before);
    }
}
