//! Grocery Server
//!
//! Layered architecture:
//! - domain: the Item entity and its rules
//! - repository: data access abstractions and the SQLite implementation
//! - api: the `/items` REST resource

pub mod config;
pub mod domain;
pub mod repository;
pub mod api;

pub use api::create_router;
pub use config::ServerConfig;
