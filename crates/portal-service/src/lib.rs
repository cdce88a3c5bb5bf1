//! # portal-service
//!
//! Business logic services: slug generation, portal creation, and
//! download redemption.

pub mod portal;

pub use portal::redeem::{DownloadGrant, RedemptionService};
pub use portal::service::{CreatePortalRequest, PortalService};
