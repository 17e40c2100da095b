//! Game state: the catalog and the player, mutated only by commands.

use crate::catalog::WorldCatalog;
use crate::place::Place;
use crate::player::Player;

/// Everything a command can read or change.
#[derive(Clone, Debug)]
pub struct GameState {
    /// All places and the items lying in them.
    pub catalog: WorldCatalog,
    /// The player.
    pub player: Player,
}

impl GameState {
    /// Creates a game state.
    #[must_use]
    pub fn new(catalog: WorldCatalog, player: Player) -> Self {
        Self { catalog, player }
    }

    /// The place the player stands in, or the void place.
    #[must_use]
    pub fn current_place(&self) -> &Place {
        self.catalog.resolve_place(self.player.position())
    }

    /// The place the player stands in, mutably.
    pub fn current_place_mut(&mut self) -> &mut Place {
        self.catalog.resolve_place_mut(self.player.position())
    }

    /// Total number of items in all places (including the void) and the
    /// player's hands.
    #[must_use]
    pub fn item_total(&self) -> usize {
        let in_places: usize = self.catalog.places().map(|p| p.items().len()).sum();
        in_places + self.catalog.void().items().len() + self.player.item_count()
    }
}
