//! Symlink-Rights library for Windows privilege-assignment inspection
//!
//! Checks whether the current process token holds the symbolic-link
//! privilege, then flips the matching account right for a well-known group
//! in the local security policy. The two phases are isolated fault
//! domains: each runs even when the other fails.

pub mod audit;
pub mod config;
pub mod core;
pub mod policy;
pub mod token;
pub mod windows;

// Re-export main types from core module
pub use crate::core::types::{
    HolderEntry, PolicyReport, PrivilegeId, RightsError, RightsResult, Sid, ToggleAction,
    TokenReport,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_module_accessible() {
        assert_eq!(crate::core::VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(crate::core::AUTHORS, env!("CARGO_PKG_AUTHORS"));
    }

    #[test]
    fn test_privilege_id_reexport() {
        let id = PrivilegeId::new(0, 35);
        assert_eq!(id.low(), 35);
        assert_eq!(id, PrivilegeId::new(0, 35));
    }

    #[test]
    fn test_sid_reexport() {
        let sid = Sid::from_bytes(vec![1, 2, 0, 0, 0, 0, 0, 5]);
        assert_eq!(sid.len(), 8);
        assert!(!sid.is_empty());
    }

    #[test]
    fn test_toggle_action_reexport() {
        assert_eq!(ToggleAction::for_held(false), ToggleAction::Grant);
        assert_eq!(ToggleAction::for_held(true), ToggleAction::Revoke);
    }

    #[test]
    fn test_error_reexport() {
        let err = RightsError::OpenPolicyFailed(0xc000_0022);
        assert!(err.to_string().contains("LsaOpenPolicy"));

        let result: RightsResult<u32> = Ok(7);
        assert!(result.is_ok());
    }
}
