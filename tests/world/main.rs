//! Integration tests for Layer 1: World
//!
//! Tests for the navigation graph, inventories and the movement and
//! inventory rules.

mod catalog;
mod player;
mod rules;
