pub mod cache;
pub mod error;
pub mod fetch;
pub mod installer;
pub mod io;
pub mod manifest;
pub mod paths;
pub mod preflight;
pub mod registrar;

pub use error::{PrimerError, Result};
