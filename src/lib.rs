pub mod commands;
pub mod core;
pub mod error;
pub mod store;
pub mod utils;

pub use crate::core::post::{render_and_persist, PostOutcome};
pub use crate::core::selector::{select, LinkEntry, TargetDate};
pub use error::LinksError;
pub use store::{Publication, PublicationStore};
