//! Places: the nodes of the navigation graph.

use std::fmt;
use std::rc::Rc;

use adventure_foundation::{NameMap, Result};

use crate::hook::{EnterHook, LookHook};
use crate::item::Item;
use crate::state::GameState;

/// Name of the fallback place returned for unknown positions.
pub const VOID: &str = "void";

/// A location the player can occupy.
///
/// Paths are one-directional: a place lists where you can walk *from* it,
/// and nothing is inferred about the way back.
#[derive(Clone)]
pub struct Place {
    name: String,
    paths: Vec<String>,
    items: NameMap<Item>,
    visit_count: u32,
    on_look: Option<LookHook>,
    on_enter: Option<EnterHook>,
}

impl Place {
    /// Creates a place with no paths, items or hooks. The name is lower-cased.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_lowercase(),
            paths: Vec::new(),
            items: NameMap::new(),
            visit_count: 0,
            on_look: None,
            on_enter: None,
        }
    }

    /// The place returned when a lookup misses.
    #[must_use]
    pub fn void() -> Self {
        Self::new(VOID).with_path("nowhere")
    }

    /// Adds a path to a neighboring place. Duplicates are ignored.
    #[must_use]
    pub fn with_path(mut self, to: impl AsRef<str>) -> Self {
        let to = to.as_ref().to_lowercase();
        if !self.paths.contains(&to) {
            self.paths.push(to);
        }
        self
    }

    /// Adds several paths.
    #[must_use]
    pub fn with_paths<I, S>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .fold(self, |place, path| place.with_path(path))
    }

    /// Places an item here, keyed by its name.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.name().to_string(), item);
        self
    }

    /// Attaches a look hook.
    #[must_use]
    pub fn with_on_look(
        mut self,
        hook: impl Fn(&mut GameState) -> Result<String> + 'static,
    ) -> Self {
        self.on_look = Some(Rc::new(hook));
        self
    }

    /// Attaches an enter hook.
    #[must_use]
    pub fn with_on_enter(mut self, hook: impl Fn(&mut GameState) -> Result<()> + 'static) -> Self {
        self.on_enter = Some(Rc::new(hook));
        self
    }

    /// Returns the place's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the outgoing paths in authored order.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Returns the items lying here.
    #[must_use]
    pub fn items(&self) -> &NameMap<Item> {
        &self.items
    }

    /// Returns the items lying here, mutably.
    pub fn items_mut(&mut self) -> &mut NameMap<Item> {
        &mut self.items
    }

    /// Number of successful arrivals so far.
    #[must_use]
    pub fn visit_count(&self) -> u32 {
        self.visit_count
    }

    /// Records one arrival.
    pub fn record_visit(&mut self) {
        self.visit_count = self.visit_count.saturating_add(1);
    }

    /// Returns the look hook, if any.
    #[must_use]
    pub fn on_look(&self) -> Option<&LookHook> {
        self.on_look.as_ref()
    }

    /// Returns the enter hook, if any.
    #[must_use]
    pub fn on_enter(&self) -> Option<&EnterHook> {
        self.on_enter.as_ref()
    }

    /// True iff `target` (compared lower-cased) is one of this place's paths.
    #[must_use]
    pub fn is_next_to(&self, target: &str) -> bool {
        let target = target.to_lowercase();
        self.paths.iter().any(|p| *p == target)
    }

    /// The static description: where you are and where you can walk.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.paths.is_empty() {
            format!("You are in the {}\nThere are no paths from here.", self.name)
        } else {
            format!(
                "You are in the {}\nYou can walk to: {}",
                self.name,
                self.paths.join(", ")
            )
        }
    }
}

impl fmt::Debug for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Place")
            .field("name", &self.name)
            .field("paths", &self.paths)
            .field("items", &self.items)
            .field("visit_count", &self.visit_count)
            .field("on_look", &self.on_look.is_some())
            .field("on_enter", &self.on_enter.is_some())
            .finish()
    }
}
