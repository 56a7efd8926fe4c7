//! Domain types for the item manager.

pub mod item;

pub use item::{Item, ItemDraft};
