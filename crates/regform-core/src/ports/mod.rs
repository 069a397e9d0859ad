//! Ports module (Hexagonal Architecture)
//!
//! Inbound: what the presentation layer drives. Outbound: notification,
//! submission and event capabilities the forms depend on.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
