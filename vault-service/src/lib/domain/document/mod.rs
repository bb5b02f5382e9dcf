pub mod errors;
pub mod models;
pub mod service;

pub use errors::DocumentError;
pub use models::DocumentSummary;
pub use service::DocumentService;
