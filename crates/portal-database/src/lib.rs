//! # portal-database
//!
//! PostgreSQL connection management, migrations, and the portal
//! repository.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::portal::{PortalRepository, PortalStore};
