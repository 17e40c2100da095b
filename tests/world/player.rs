//! Player inventory.

use adventure_world::messages;
use adventure_world::{Item, Player};

#[test]
fn new_player_carries_nothing() {
    let player = Player::new("start");
    assert_eq!(player.position(), "start");
    assert_eq!(player.item_count(), 0);
    assert_eq!(player.describe_items(), messages::NOT_CARRYING_ANYTHING);
}

#[test]
fn items_listed_in_name_order() {
    let mut player = Player::new("start");
    player.add_item("torch", Item::new("torch"));
    player.add_item("coin", Item::new("coin"));
    player.add_item("map", Item::new("map"));
    assert_eq!(player.describe_items(), "coin, map, torch");
}

#[test]
fn remove_returns_the_item() {
    let mut player = Player::new("start");
    player.add_item("key", Item::new("key"));

    let key = player.remove_item("key").unwrap();
    assert_eq!(key.name(), "key");
    assert!(!player.has_item("key"));
    assert!(player.remove_item("key").is_none());
}

#[test]
fn item_names_are_case_sensitive() {
    let mut player = Player::new("start");
    player.add_item("Key", Item::new("Key"));
    assert!(player.has_item("Key"));
    assert!(!player.has_item("key"));
}
