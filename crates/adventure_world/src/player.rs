//! Player state: where the player stands and what they carry.
//!
//! A passive record. Whether a move or a transfer is legal is decided by
//! [`rules`](crate::rules), never here.

use adventure_foundation::NameMap;

use crate::item::Item;
use crate::messages;

/// The single player of a game session.
#[derive(Clone, Debug)]
pub struct Player {
    position: String,
    items: NameMap<Item>,
}

impl Player {
    /// Creates a player standing at `position` with empty hands.
    #[must_use]
    pub fn new(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            items: NameMap::new(),
        }
    }

    /// Name of the current place.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Moves the player. No adjacency check is made.
    pub fn set_position(&mut self, position: impl Into<String>) {
        self.position = position.into();
    }

    /// Adds an item, replacing any carried item with the same name.
    pub fn add_item(&mut self, name: impl Into<String>, item: Item) {
        self.items.insert(name, item);
    }

    /// Removes and returns a carried item.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.items.remove(name)
    }

    /// True if the player carries an item with this name.
    #[must_use]
    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains(name)
    }

    /// Returns a carried item.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// All carried items.
    #[must_use]
    pub fn items(&self) -> &NameMap<Item> {
        &self.items
    }

    /// Number of carried items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Carried item names, sorted and comma separated.
    #[must_use]
    pub fn describe_items(&self) -> String {
        if self.items.is_empty() {
            return messages::NOT_CARRYING_ANYTHING.to_string();
        }
        self.items.join_names(", ")
    }
}
