//! Account name to SID resolution

use crate::core::types::{RightsError, RightsResult, Sid};
use crate::windows::utils::{nt_success, sid_from_psid, LsaString};
use std::ptr;
use std::slice;
use winapi::shared::ntstatus::STATUS_NONE_MAPPED;
use winapi::um::ntlsa::{LsaLookupNames2, LSA_REFERENCED_DOMAIN_LIST, LSA_TRANSLATED_SID2};
use winapi::um::winnt::{SidTypeInvalid, SidTypeUnknown};

use super::handle::PolicyHandle;
use super::memory::LsaBuf;

// Resolve isolated names as local accounts; the flag is missing from the
// ntlsa bindings
const LSA_LOOKUP_ISOLATED_AS_LOCAL: u32 = 0x8000_0000;

/// Resolve an account name to its SIDs.
///
/// Purely local (non-domain-qualified) names resolve without a domain
/// prefix. The result may legitimately be empty (unknown account) or hold
/// several entries (ambiguous name); the caller decides how many to act on.
pub fn resolve_account(policy: &PolicyHandle, name: &str) -> RightsResult<Vec<Sid>> {
    let mut backing = LsaString::new(name);
    let mut lsa_name = backing.as_unicode();

    let mut domains: *mut LSA_REFERENCED_DOMAIN_LIST = ptr::null_mut();
    let mut translated: *mut LSA_TRANSLATED_SID2 = ptr::null_mut();
    let status = unsafe {
        LsaLookupNames2(
            policy.raw(),
            LSA_LOOKUP_ISOLATED_AS_LOCAL,
            1,
            &mut lsa_name,
            &mut domains,
            &mut translated,
        )
    };
    // Both buffers are returned even when nothing mapped
    let _domains = unsafe { LsaBuf::from_raw(domains) };
    let translated = unsafe { LsaBuf::from_raw(translated) };

    if status == STATUS_NONE_MAPPED {
        return Ok(Vec::new());
    }
    if !nt_success(status) {
        return Err(RightsError::LookupNamesFailed(status as u32));
    }

    // One translated entry per looked-up name
    let entries = unsafe { slice::from_raw_parts(translated.as_ptr(), 1) };
    let mut resolved = Vec::new();
    for entry in entries {
        if entry.Use == SidTypeUnknown || entry.Use == SidTypeInvalid || entry.Sid.is_null() {
            continue;
        }
        resolved.push(unsafe { sid_from_psid(entry.Sid) });
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyAccess;

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_resolve_well_known_group() {
        // Needs a policy handle; tolerate restricted environments
        let Ok(policy) = PolicyHandle::open(PolicyAccess::for_pipeline()) else {
            return;
        };
        if let Ok(sids) = resolve_account(&policy, "Users") {
            assert!(!sids.is_empty());
            // BUILTIN\Users is S-1-5-32-545
            assert_eq!(sids[0].as_bytes()[0], 1);
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_resolve_unknown_account_is_empty() {
        let Ok(policy) = PolicyHandle::open(PolicyAccess::for_pipeline()) else {
            return;
        };
        if let Ok(sids) = resolve_account(&policy, "NoSuchAccountNameHere") {
            assert!(sids.is_empty());
        }
    }
}
