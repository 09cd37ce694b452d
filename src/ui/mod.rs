//! Terminal rendering for the plaisio binary

pub mod blocks;
pub mod console;
pub mod context;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
