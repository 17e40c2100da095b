//! The world catalog: every place in the game, keyed by name.
//!
//! The catalog's shape is fixed once [`CatalogBuilder::build`] returns.
//! Places cannot be added or removed and paths never change; only the
//! items lying in each place and its visit counter mutate during play.

use std::collections::HashMap;

use adventure_foundation::{Error, ErrorContext, Result};
use tracing::trace;

use crate::place::Place;

/// Registry of all places.
#[derive(Clone, Debug)]
pub struct WorldCatalog {
    places: HashMap<String, Place>,
    /// Fallback returned for unknown names. Owned here so that items
    /// dropped in the void are kept rather than lost.
    void: Place,
}

impl WorldCatalog {
    /// Starts building a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Returns the place registered under `name`, or the void place.
    #[must_use]
    pub fn resolve_place(&self, name: &str) -> &Place {
        self.places.get(name).unwrap_or_else(|| {
            trace!(name, "place lookup missed, using void");
            &self.void
        })
    }

    /// Mutable counterpart of [`resolve_place`](Self::resolve_place).
    pub fn resolve_place_mut(&mut self, name: &str) -> &mut Place {
        match self.places.get_mut(name) {
            Some(place) => place,
            None => &mut self.void,
        }
    }

    /// Returns the registered place, without falling back.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Place> {
        self.places.get(name)
    }

    /// Returns the registered place mutably, without falling back.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Place> {
        self.places.get_mut(name)
    }

    /// True if a place with this name was registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.places.contains_key(name)
    }

    /// Registered place names in sorted order.
    #[must_use]
    pub fn place_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.places.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// True if no places are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Iterates over registered places in no particular order.
    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.places.values()
    }

    /// The fallback place.
    #[must_use]
    pub fn void(&self) -> &Place {
        &self.void
    }
}

/// Assembles a [`WorldCatalog`] and validates it.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    places: Vec<Place>,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a place.
    #[must_use]
    pub fn place(mut self, place: Place) -> Self {
        self.places.push(place);
        self
    }

    /// Adds several places.
    #[must_use]
    pub fn places(mut self, places: impl IntoIterator<Item = Place>) -> Self {
        self.places.extend(places);
        self
    }

    /// Builds the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if a place name is registered twice, or if a path
    /// leads to a name that was never registered.
    pub fn build(self) -> Result<WorldCatalog> {
        let mut places = HashMap::with_capacity(self.places.len());

        for place in self.places {
            let name = place.name().to_string();
            if places.insert(name.clone(), place).is_some() {
                return Err(Error::duplicate_place(name.clone()).with_context(
                    ErrorContext::new()
                        .with_source(name)
                        .with_frame("CatalogBuilder::build"),
                ));
            }
        }

        for place in places.values() {
            if let Some(missing) = place.paths().iter().find(|p| !places.contains_key(*p)) {
                return Err(Error::unknown_path(place.name(), missing.as_str())
                    .with_context(ErrorContext::new().with_frame("CatalogBuilder::build")));
            }
        }

        Ok(WorldCatalog {
            places,
            void: Place::void(),
        })
    }
}
