//! Compiled-in audit target
//!
//! The tool inspects one privilege and flips the matching account right for
//! one well-known account. There is no configuration file, command-line
//! flag, or environment input; both names are compiled in.

/// Privilege inspected on the token; its name doubles as the account-right
/// name in the policy database
pub const DEFAULT_PRIVILEGE: &str = "SeCreateSymbolicLinkPrivilege";

/// Well-known local group whose right assignment is flipped
pub const DEFAULT_ACCOUNT: &str = "Users";

/// Audit target description
#[derive(Debug, Clone)]
pub struct Target {
    /// Privilege name, also used as the account-right name
    pub privilege: &'static str,
    /// Account whose right assignment is flipped
    pub account: &'static str,
}

impl Default for Target {
    fn default() -> Self {
        Target {
            privilege: DEFAULT_PRIVILEGE,
            account: DEFAULT_ACCOUNT,
        }
    }
}
