//! View tree fixtures for testing Vantage measurement
//!
//! This crate provides a fixture that plays the hosting UI runtime in
//! tests: it owns a view registry and the window placement, implements
//! the collaborator traits the measurer consumes, and hands out a ready
//! [`vantage_ui::ViewMeasurer`] bound to the test thread.

mod fixture;

pub use fixture::*;
