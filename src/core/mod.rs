//! Core module containing the domain types for symlink-rights
//!
//! This module provides the foundational building blocks used throughout
//! the tool: the privilege identity and SID value types, typed phase
//! reports, and the error type.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    PolicyReport,
    PrivilegeId,
    RightsError,
    RightsResult,
    Sid,
    TokenReport,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

// Platform verification at compile time
#[cfg(not(target_os = "windows"))]
compile_error!("symlink-rights only supports the Windows platform");
