//! Blender Bridge Core
//!
//! A reusable library for driving a Blender process from typed requests.
//! Provides the request schemas, script renderers, a session-aware subprocess
//! runner and the name registry shared by front-ends.

pub mod client;
pub mod config;
pub mod error;
pub mod ops;
pub mod registry;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use client::{BlenderClient, RunMode, ScriptRunner};
pub use config::BlenderConfig;
pub use error::BridgeError;
pub use registry::NameRegistry;
pub use session::Session;

/// Result type alias using BridgeError
pub type Result<T> = std::result::Result<T, BridgeError>;
