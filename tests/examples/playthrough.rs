//! A full game in the standard world.

use adventure_parser::Interpreter;
use adventure_world::{messages, standard_world};

#[test]
fn from_crossroads_to_crown() {
    let mut interp = Interpreter::new(standard_world().unwrap());
    let total = interp.state().item_total();

    let steps: &[(&str, &str)] = &[
        ("items", messages::NOT_CARRYING_ANYTHING),
        ("take map", "You took the map"),
        ("walk lake", "You walked to the lake"),
        ("take torch", "You took the torch"),
        (
            "walk start forest cave",
            "You walked to the start\nYou walked to the forest\nYou walked to the cave",
        ),
        ("walk treasury", "The treasury door is locked."),
        ("take key", "You took the key"),
        ("walk treasury", "You walked to the treasury"),
        ("take crown", "You took the crown"),
        ("items", "You are carrying: crown, key, map, torch"),
        ("drop map torch", "You dropped the map\nYou dropped the torch"),
        ("use crown", "You place the crown on your head. The adventure is yours!"),
        ("exit", messages::GOODBYE),
    ];

    for (line, expected) in steps {
        let response = interp.execute_line(line).unwrap();
        assert_eq!(response.text, *expected, "after `{line}`");
    }

    let state = interp.state();
    assert_eq!(state.player.position(), "treasury");
    assert_eq!(state.item_total(), total);
    assert_eq!(
        state.current_place().items().join_names(", "),
        "map, torch"
    );
    assert_eq!(state.catalog.resolve_place("treasury").visit_count(), 1);
    assert_eq!(state.catalog.resolve_place("start").visit_count(), 1);
}

#[test]
fn lucky_coin() {
    let mut interp = Interpreter::new(standard_world().unwrap());
    for line in ["walk lake", "take coin"] {
        interp.execute_line(line).unwrap();
    }

    assert_eq!(
        interp.execute_line("use coin").unwrap().text,
        "The coin sinks into the lake. You feel lucky."
    );
    assert_eq!(
        interp.execute_line("items").unwrap().text,
        messages::NOT_CARRYING_ANYTHING
    );
    assert!(interp.state().current_place().items().contains("coin"));
}
