//! Core type definitions for symlink-rights
//!
//! This module contains all fundamental types used throughout the tool:
//! the session-local privilege identity, the owned SID value, typed phase
//! reports, and the error type.

mod error;
mod privilege_id;
mod report;
mod sid;

// Re-export all public types
pub use error::{RightsError, RightsResult};
pub use privilege_id::PrivilegeId;
pub use report::{HolderEntry, PolicyReport, ToggleAction, TokenReport};
pub use sid::Sid;
