//! Vocabulary tests.

use adventure_parser::{Verb, VerbRegistry};

#[test]
fn every_alias_is_the_first_letter() {
    let registry = VerbRegistry::standard();
    for (alias, verb) in [
        ("d", Verb::Drop),
        ("h", Verb::Help),
        ("i", Verb::Items),
        ("l", Verb::Look),
        ("t", Verb::Take),
        ("u", Verb::Use),
        ("w", Verb::Walk),
    ] {
        assert_eq!(registry.lookup(alias), Some(verb), "alias {alias}");
    }
}

#[test]
fn teleport_has_no_free_alias() {
    let registry = VerbRegistry::standard();
    assert_eq!(registry.lookup("teleport"), Some(Verb::Teleport));
    assert_ne!(registry.lookup("t"), Some(Verb::Teleport));
}

#[test]
fn registration_order_decides_alias() {
    let mut registry = VerbRegistry::new();
    registry.register(Verb::Teleport);
    registry.register(Verb::Take);
    assert_eq!(registry.lookup("t"), Some(Verb::Teleport));
    assert_eq!(registry.lookup("take"), Some(Verb::Take));
}

#[test]
fn empty_registry_knows_nothing() {
    let registry = VerbRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.lookup("help"), None);
}

#[test]
fn display_is_the_name() {
    assert_eq!(Verb::Teleport.to_string(), "teleport");
    assert_eq!(Verb::Use.to_string(), "use");
}
