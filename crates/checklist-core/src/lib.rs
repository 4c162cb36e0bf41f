pub mod config;
pub mod error;
pub mod io;
pub mod page;
pub mod parser;
pub mod paths;
pub mod service;
pub mod store;
pub mod suggest;
pub mod types;

pub use error::{ChecklistError, Result};
pub use service::Checklist;
