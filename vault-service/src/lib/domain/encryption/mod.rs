pub mod errors;
pub mod models;
pub mod service;

pub use errors::EncryptionError;
pub use models::EncryptionKey;
pub use service::EncryptionService;
