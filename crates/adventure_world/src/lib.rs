//! World model for Adventure.
//!
//! This crate provides:
//! - [`Place`] and [`Item`] - Nodes of the navigation graph and the objects lying in them
//! - [`WorldCatalog`] - Registry of every place, built once at startup
//! - [`Player`] - Current position and carried items
//! - [`GameState`] - Catalog and player together, the only state commands mutate
//! - [`rules`] - Movement, teleport and item transfer rules
//! - [`content`] - The standard playable world

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod content;
pub mod hook;
pub mod item;
pub mod messages;
pub mod place;
pub mod player;
pub mod rules;
pub mod state;

pub use catalog::{CatalogBuilder, WorldCatalog};
pub use content::standard_world;
pub use hook::{EnterHook, LookHook, TakeHook, UseHook};
pub use item::Item;
pub use place::Place;
pub use player::Player;
pub use state::GameState;
