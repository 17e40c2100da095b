//! Behavior hooks.
//!
//! Hooks are optional per-instance callables stored on places and items.
//! Each receives the whole [`GameState`] so it can inspect or rearrange the
//! world, and look/enter hooks may refuse with [`Error::rejected`].
//!
//! [`Error::rejected`]: adventure_foundation::Error::rejected

use std::rc::Rc;

use adventure_foundation::Result;

use crate::state::GameState;

/// Produces extra text for `look`. A rejection replaces the whole response.
pub type LookHook = Rc<dyn Fn(&mut GameState) -> Result<String>>;

/// Runs before the player walks in. A rejection cancels the move.
pub type EnterHook = Rc<dyn Fn(&mut GameState) -> Result<()>>;

/// Replaces the confirmation when the item is taken.
pub type TakeHook = Rc<dyn Fn(&mut GameState) -> String>;

/// Replaces the "cannot use" response when the item is used.
pub type UseHook = Rc<dyn Fn(&mut GameState) -> String>;
