//! Process token inspection
//!
//! Resolves privilege names to their session-local identities and takes
//! point-in-time snapshots of the privileges held by the current process
//! token.

mod query;
mod snapshot;

pub use query::{query_with_sized_buffer, QueryStep};
pub use snapshot::{resolve_privilege, TokenSnapshot};
