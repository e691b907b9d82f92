//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod item_repo;


pub use traits::Repository;
pub use db::{init_db, DbConn};
pub use item_repo::ItemRepository;
