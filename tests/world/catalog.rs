//! Catalog construction and place resolution.

use adventure_foundation::ErrorKind;
use adventure_world::place::VOID;
use adventure_world::{Item, Place, WorldCatalog};

fn triangle() -> WorldCatalog {
    WorldCatalog::builder()
        .place(Place::new("a").with_paths(["b", "c"]))
        .place(Place::new("b").with_path("c"))
        .place(Place::new("c").with_path("a"))
        .build()
        .unwrap()
}

#[test]
fn names_are_lower_cased() {
    let catalog = WorldCatalog::builder()
        .place(Place::new("Great Hall").with_path("GARDEN"))
        .place(Place::new("Garden"))
        .build()
        .unwrap();

    assert!(catalog.contains("great hall"));
    assert!(catalog.contains("garden"));
    assert_eq!(catalog.resolve_place("great hall").paths(), ["garden"]);
}

#[test]
fn adjacency_is_one_directional() {
    let catalog = triangle();
    let b = catalog.resolve_place("b");
    assert!(b.is_next_to("c"));
    assert!(!b.is_next_to("a"));
}

#[test]
fn unknown_name_resolves_to_void() {
    let catalog = triangle();
    let place = catalog.resolve_place("atlantis");
    assert_eq!(place.name(), VOID);
    assert_eq!(place.paths(), ["nowhere"]);
    assert!(place.items().is_empty());
    assert_eq!(place.visit_count(), 0);
}

#[test]
fn place_names_sorted() {
    assert_eq!(triangle().place_names(), vec!["a", "b", "c"]);
}

#[test]
fn duplicate_place_rejected() {
    let err = WorldCatalog::builder()
        .place(Place::new("hall"))
        .place(Place::new("HALL").with_item(Item::new("lamp")))
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicatePlace(ref name) if name == "hall"));
}

#[test]
fn path_to_unregistered_place_rejected() {
    let err = WorldCatalog::builder()
        .place(Place::new("hall").with_path("cellar"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnknownPath { ref from, ref to } if from == "hall" && to == "cellar"
    ));
}

#[test]
fn describe_lists_paths_in_authored_order() {
    let catalog = triangle();
    assert_eq!(
        catalog.resolve_place("a").describe(),
        "You are in the a\nYou can walk to: b, c"
    );
}

#[test]
fn describe_without_paths() {
    let catalog = WorldCatalog::builder()
        .place(Place::new("cell"))
        .build()
        .unwrap();
    assert_eq!(
        catalog.resolve_place("cell").describe(),
        "You are in the cell\nThere are no paths from here."
    );
}
