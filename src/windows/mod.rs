//! Windows API layer for privilege and policy access
//!
//! Provides safe wrappers around the Win32 and LSA surfaces the pipeline
//! touches. All unsafe FFI calls are contained within this module and the
//! token/policy modules, with proper error handling and release discipline.

pub mod types;
pub mod utils;

// Re-export commonly used items
pub use types::Handle;
pub use utils::{nt_success, sid_to_string, string_to_wide, wide_to_string, LsaString};
