//! Common Smart Contracts utilities.
pub mod address;
pub mod metadata;
pub mod reentrant_call_handler;
pub mod revert;

pub use address::AddressUtils;
pub use metadata::Metadata;
pub use reentrant_call_handler::ReentrantCallHandler;
