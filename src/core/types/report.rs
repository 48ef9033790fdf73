//! Typed phase outcomes for the audit pipeline
//!
//! Phases produce these values; turning them into text is the renderer's
//! job, so tests can assert on structure instead of strings.

use super::privilege_id::PrivilegeId;
use super::sid::Sid;

/// Result of the token inspection phase
#[derive(Debug, Clone)]
pub struct TokenReport {
    /// Session-local identity of the audited privilege
    pub privilege: PrivilegeId,
    /// Number of privileges in the token snapshot
    pub privilege_count: usize,
    /// Whether the snapshot contains the audited privilege
    pub held: bool,
}

/// One account currently holding the audited right
#[derive(Debug, Clone)]
pub struct HolderEntry {
    pub sid: Sid,
    /// Canonical "S-1-…" form of the SID
    pub sid_string: String,
    /// Isolated display name the SID resolved to
    pub name: String,
}

/// Direction of the account-rights mutation.
///
/// The toggle is deliberately a flip, not convergence toward a desired
/// state: whichever assignment is observed, the opposite is applied, so
/// running the pipeline twice in succession restores the original
/// assignment. Do not replace this with an idempotent "ensure granted"
/// operation; the flip is part of the tool's observable behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// The right was absent and gets added
    Grant,
    /// The right was present and gets removed
    Revoke,
}

impl ToggleAction {
    /// Single-transition decision rule: held flips to revoke, not held
    /// flips to grant.
    pub fn for_held(currently_held: bool) -> Self {
        if currently_held {
            ToggleAction::Revoke
        } else {
            ToggleAction::Grant
        }
    }
}

/// Result of the policy inspection and toggle phase
#[derive(Debug, Clone)]
pub struct PolicyReport {
    /// Account the pipeline acted on
    pub account: String,
    /// How many SIDs the account name resolved to; only the first is acted
    /// on, extra entries are informational
    pub resolved_sids: usize,
    /// Rights currently granted to the account (diagnostic only)
    pub rights: Vec<String>,
    /// Accounts holding the audited right before the toggle
    pub holders: Vec<HolderEntry>,
    /// Whether the account held the right before the toggle
    pub previously_held: bool,
    /// Mutation that was applied
    pub action: ToggleAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_held_is_a_flip() {
        assert_eq!(ToggleAction::for_held(false), ToggleAction::Grant);
        assert_eq!(ToggleAction::for_held(true), ToggleAction::Revoke);
    }

    #[test]
    fn test_double_application_restores_membership() {
        // Model the holder set as a bool and apply the decision rule twice
        for initial in [false, true] {
            let mut held = initial;
            for _ in 0..2 {
                held = match ToggleAction::for_held(held) {
                    ToggleAction::Grant => true,
                    ToggleAction::Revoke => false,
                };
            }
            assert_eq!(held, initial);
        }
    }

    #[test]
    fn test_reports_are_cloneable() {
        let report = TokenReport {
            privilege: PrivilegeId::new(0, 33),
            privilege_count: 5,
            held: false,
        };
        let cloned = report.clone();
        assert_eq!(cloned.privilege, report.privilege);
        assert_eq!(cloned.privilege_count, 5);
        assert!(!cloned.held);
    }
}
