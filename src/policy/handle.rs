//! Scoped connection to the local security policy database

use crate::core::types::{RightsError, RightsResult};
use crate::windows::utils::nt_success;
use std::mem;
use std::ptr;
use winapi::um::ntlsa::{
    LsaClose, LsaOpenPolicy, LSA_HANDLE, LSA_OBJECT_ATTRIBUTES, POLICY_LOOKUP_NAMES,
    POLICY_VIEW_LOCAL_INFORMATION,
};

/// Access rights requested when opening the policy database
#[derive(Debug, Clone, Copy)]
pub struct PolicyAccess {
    value: u32,
}

impl PolicyAccess {
    /// Name and SID translation; also required by the rights enumeration
    /// and mutation calls
    pub const LOOKUP_NAMES: Self = Self {
        value: POLICY_LOOKUP_NAMES,
    };
    /// Enumerating the accounts holding a right
    pub const VIEW_LOCAL_INFORMATION: Self = Self {
        value: POLICY_VIEW_LOCAL_INFORMATION,
    };

    /// Combine access rights
    pub fn combine(rights: &[Self]) -> Self {
        let mut value = 0;
        for right in rights {
            value |= right.value;
        }
        Self { value }
    }

    /// Minimal union needed by the full pipeline
    pub fn for_pipeline() -> Self {
        Self::combine(&[Self::LOOKUP_NAMES, Self::VIEW_LOCAL_INFORMATION])
    }

    /// Get raw value
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Scoped handle to the local security policy.
///
/// Released through `LsaClose` exactly once when dropped, on every exit
/// path, success or failure.
pub struct PolicyHandle {
    handle: LSA_HANDLE,
}

impl PolicyHandle {
    /// Open the local machine's policy with the given access
    pub fn open(access: PolicyAccess) -> RightsResult<Self> {
        let mut attributes: LSA_OBJECT_ATTRIBUTES = unsafe { mem::zeroed() };
        attributes.Length = mem::size_of::<LSA_OBJECT_ATTRIBUTES>() as u32;

        let mut handle: LSA_HANDLE = ptr::null_mut();
        let status =
            unsafe { LsaOpenPolicy(ptr::null_mut(), &mut attributes, access.value(), &mut handle) };
        if !nt_success(status) {
            return Err(RightsError::OpenPolicyFailed(status as u32));
        }
        Ok(PolicyHandle { handle })
    }

    pub(crate) fn raw(&self) -> LSA_HANDLE {
        self.handle
    }
}

impl Drop for PolicyHandle {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            unsafe {
                LsaClose(self.handle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_constants() {
        assert_eq!(PolicyAccess::LOOKUP_NAMES.value(), 0x0800);
        assert_eq!(PolicyAccess::VIEW_LOCAL_INFORMATION.value(), 0x0001);
    }

    #[test]
    fn test_access_combine() {
        let combined = PolicyAccess::combine(&[
            PolicyAccess::LOOKUP_NAMES,
            PolicyAccess::VIEW_LOCAL_INFORMATION,
        ]);
        assert_eq!(combined.value(), 0x0801);
        assert_eq!(PolicyAccess::for_pipeline().value(), combined.value());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_open_policy() {
        // May fail without sufficient rights; either way the handle guard
        // must not crash on drop
        let result = PolicyHandle::open(PolicyAccess::for_pipeline());
        match result {
            Ok(handle) => drop(handle),
            Err(RightsError::OpenPolicyFailed(code)) => assert_ne!(code, 0),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}
