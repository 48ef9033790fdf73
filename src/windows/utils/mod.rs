//! Windows utility functions

mod error_codes;
mod sid_conv;
mod string_conv;

// Re-export commonly used utilities
pub use error_codes::{last_win32_error, nt_success};
pub use sid_conv::{sid_from_psid, sid_to_string};
pub use string_conv::{string_to_wide, unicode_to_string, wide_to_string, LsaString};
