//! Veriflow Core Library
//!
//! Shared functionality for Veriflow components:
//! - Flow coordination between an embedded verification surface and the host
//! - Wire contract with the hosted verification flow (entry URL, callback)
//! - Capture destination preparation
//! - Configuration resolution and common error types

pub mod capture;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod flow;
pub mod host;
pub mod tracing_init;

pub use config::FlowConfig;
pub use coordinator::{FlowCoordinator, NavigationDecision};
pub use error::{Error, Result};
