//! Fixed response texts.

/// Fallback for any verb the interpreter does not know.
pub const GENERIC: &str = "You don’t know how to do that.";
/// Response to `exit`.
pub const GOODBYE: &str = "Good bye! Player 1";
/// Shown by `items` with an empty inventory.
pub const NOT_CARRYING_ANYTHING: &str = "You are not carrying anything.";
/// Prefix for the inventory listing.
pub const CARRYING: &str = "You are carrying: ";
/// First line of `help`.
pub const CAN_PERFORM: &str = "You can perform the following commands:\n";
/// Walk produced nothing, or the destination is not a registered place.
pub const CANT_GO: &str = "You can’t go there!";
/// Walk without a destination.
pub const NEED_DESTINATION: &str = "You need to specify where to go.";

/// Take without arguments.
pub const TAKE_WHAT: &str = "You didn’t tell me what to take.";
/// None of the requested items are here.
pub const NOTHING_TO_TAKE: &str = "You can’t take that which doesn’t exist.";
/// Drop without arguments.
pub const DROP_WHAT: &str = "You didn’t tell me what to drop.";
/// None of the requested items are carried.
pub const CANNOT_DROP: &str = "Unable to drop something you are not carrying.";
/// Use without arguments.
pub const USE_WHAT: &str = "You didn’t tell me what to use.";
/// Use of an item that is not carried.
pub const NOT_CARRYING_ITEM: &str = "You are not carrying that item.";

/// Teleport without the teleporter.
pub const NEED_TELEPORTER: &str = "You need to have the teleporter in order to teleport.";
/// Teleport with zero or several targets.
pub const SINGLE_PLACE: &str = "You can only teleport to a single place.";
/// Teleport to a place never arrived at.
pub const NOT_VISITED: &str = "You can’t teleport to places you haven’t visited before.";

/// Name of the item that enables teleporting.
pub const TELEPORTER: &str = "teleporter";
