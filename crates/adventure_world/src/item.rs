//! Items that lie in places or are carried by the player.

use std::fmt;
use std::rc::Rc;

use crate::hook::{TakeHook, UseHook};
use crate::state::GameState;

/// An object that can be held by a place or the player.
#[derive(Clone)]
pub struct Item {
    name: String,
    on_take: Option<TakeHook>,
    on_use: Option<UseHook>,
}

impl Item {
    /// Creates an item with no behavior hooks.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_take: None,
            on_use: None,
        }
    }

    /// Attaches a take hook.
    #[must_use]
    pub fn with_on_take(mut self, hook: impl Fn(&mut GameState) -> String + 'static) -> Self {
        self.on_take = Some(Rc::new(hook));
        self
    }

    /// Attaches a use hook.
    #[must_use]
    pub fn with_on_use(mut self, hook: impl Fn(&mut GameState) -> String + 'static) -> Self {
        self.on_use = Some(Rc::new(hook));
        self
    }

    /// Returns the item's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the take hook, if any.
    #[must_use]
    pub fn on_take(&self) -> Option<&TakeHook> {
        self.on_take.as_ref()
    }

    /// Returns the use hook, if any.
    #[must_use]
    pub fn on_use(&self) -> Option<&UseHook> {
        self.on_use.as_ref()
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("name", &self.name)
            .field("on_take", &self.on_take.is_some())
            .field("on_use", &self.on_use.is_some())
            .finish()
    }
}
