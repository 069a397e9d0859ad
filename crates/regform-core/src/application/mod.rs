//! Application layer
//!
//! Coordinates the field store, validator, signature canvas and ports.

pub mod preloader;
pub mod shared_store;
pub mod signature_pad;
pub mod submission;

pub use preloader::{Preloader, PreloaderExit};
pub use shared_store::SharedStore;
pub use signature_pad::SignaturePad;
pub use submission::{FormPorts, SubmissionController};
