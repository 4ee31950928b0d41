//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain logic, ports, and external systems.

pub mod password_assembler;
pub mod password_service;
pub mod translation_service;

pub use password_service::PasswordService;
pub use translation_service::RetryPolicy;
