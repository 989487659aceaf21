//! Weather data model and formatting helpers for a weather display.

pub mod weather;
