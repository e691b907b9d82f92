//! Domain Layer
//!
//! Contains the stored entities and core abstractions.

mod entity;
mod item;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::{Item, NewItem, ItemPatch};
