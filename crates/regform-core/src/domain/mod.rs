//! Domain module
//!
//! Contains all form logic: records, schemas, validation and the signature surface.

pub mod value_objects;
pub mod schema;
pub mod records;
pub mod field_store;
pub mod validation;
pub mod signature;
pub mod submission;
pub mod events;
pub mod navigation;
pub mod terms;

pub use value_objects::*;
pub use schema::*;
pub use events::FormEvent;
