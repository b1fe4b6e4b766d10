pub mod error;
pub mod persona;
pub mod ports;

// Re-export common error type
pub use error::AtelierError;
