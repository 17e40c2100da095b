//! Verb vocabulary.
//!
//! Maps every recognized word, full verb names and their single-letter
//! aliases, to a canonical [`Verb`].

use std::collections::HashMap;
use std::fmt;

/// A canonical verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verb {
    /// Put carried items down.
    Drop,
    /// End the session.
    Exit,
    /// List the verbs.
    Help,
    /// Show the inventory.
    Items,
    /// Describe the current place.
    Look,
    /// Pick items up.
    Take,
    /// Jump to a visited place.
    Teleport,
    /// Use a carried item.
    Use,
    /// Walk to adjacent places.
    Walk,
}

impl Verb {
    /// Every verb, in name order.
    pub const ALL: [Verb; 9] = [
        Verb::Drop,
        Verb::Exit,
        Verb::Help,
        Verb::Items,
        Verb::Look,
        Verb::Take,
        Verb::Teleport,
        Verb::Use,
        Verb::Walk,
    ];

    /// The full verb name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Verb::Drop => "drop",
            Verb::Exit => "exit",
            Verb::Help => "help",
            Verb::Items => "items",
            Verb::Look => "look",
            Verb::Take => "take",
            Verb::Teleport => "teleport",
            Verb::Use => "use",
            Verb::Walk => "walk",
        }
    }

    /// The single-letter alias this verb asks for. `exit` has none.
    #[must_use]
    pub fn alias(self) -> Option<&'static str> {
        match self {
            Verb::Exit => None,
            verb => Some(&verb.name()[..1]),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime lookup table from words to verbs.
#[derive(Clone, Debug, Default)]
pub struct VerbRegistry {
    /// Full name -> verb
    verbs: HashMap<&'static str, Verb>,
    /// Alias -> verb
    aliases: HashMap<&'static str, Verb>,
}

impl VerbRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every verb and alias.
    ///
    /// Verbs are registered in name order and an alias never replaces an
    /// earlier binding, so `t` means `take`, not `teleport`.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for verb in Verb::ALL {
            registry.register(verb);
        }
        registry
    }

    /// Registers a verb and, if still free, its alias.
    pub fn register(&mut self, verb: Verb) {
        self.verbs.insert(verb.name(), verb);
        if let Some(alias) = verb.alias() {
            self.aliases.entry(alias).or_insert(verb);
        }
    }

    /// Resolves a word exactly, full names first, then aliases.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Verb> {
        self.verbs
            .get(word)
            .or_else(|| self.aliases.get(word))
            .copied()
    }

    /// Full verb names in sorted order. Aliases are excluded.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.verbs.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Every recognized word (names and aliases), sorted.
    #[must_use]
    pub fn words(&self) -> Vec<&'static str> {
        let mut words: Vec<_> = self
            .verbs
            .keys()
            .chain(self.aliases.keys())
            .copied()
            .collect();
        words.sort_unstable();
        words
    }

    /// Number of registered verbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}
