pub mod model;

pub use model::{CreatePortal, Portal};
