//! Inspects Mapbox vector tiles.
//!
//! [`input`] loads a tile file, detects its compression and parses it; [`report`] writes the summary and
//! dump reports the `mvtinfo` binary prints.

pub mod input;
pub mod report;

pub use input::TileInput;
