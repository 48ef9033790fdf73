//! Local security policy operations
//!
//! Everything that talks to the LSA policy database: the scoped policy
//! handle, account and SID resolution, account-rights enumeration, and the
//! grant/revoke toggle.

mod accounts;
mod handle;
mod memory;
mod rights;
mod toggle;

pub use accounts::resolve_account;
pub use handle::{PolicyAccess, PolicyHandle};
pub use rights::{account_rights, holder_sids, resolve_sid_names};
pub use toggle::{apply_toggle, holds_right};
