//! Account-rights enumeration over the policy database

use crate::core::types::{HolderEntry, RightsError, RightsResult, Sid};
use crate::windows::utils::{
    nt_success, sid_from_psid, sid_to_string, unicode_to_string, LsaString,
};
use std::ptr;
use std::slice;
use winapi::ctypes::c_void;
use winapi::shared::ntstatus::{STATUS_NO_MORE_ENTRIES, STATUS_OBJECT_NAME_NOT_FOUND};
use winapi::um::ntlsa::{
    LsaEnumerateAccountRights, LsaEnumerateAccountsWithUserRight, LsaLookupSids,
    LSA_ENUMERATION_INFORMATION, LSA_REFERENCED_DOMAIN_LIST, LSA_TRANSLATED_NAME,
    LSA_UNICODE_STRING,
};
use winapi::um::winnt::PSID;

use super::handle::PolicyHandle;
use super::memory::LsaBuf;

/// List the rights currently granted to the given SID.
///
/// Diagnostic view; an account with no recorded rights yields an empty
/// list.
pub fn account_rights(policy: &PolicyHandle, sid: &Sid) -> RightsResult<Vec<String>> {
    let mut rights: *mut LSA_UNICODE_STRING = ptr::null_mut();
    let mut count: u32 = 0;
    let status =
        unsafe { LsaEnumerateAccountRights(policy.raw(), sid.as_psid(), &mut rights, &mut count) };
    if status == STATUS_OBJECT_NAME_NOT_FOUND {
        return Ok(Vec::new());
    }
    if !nt_success(status) {
        return Err(RightsError::EnumerateRightsFailed(status as u32));
    }

    let rights = unsafe { LsaBuf::from_raw(rights) };
    let entries = unsafe { slice::from_raw_parts(rights.as_ptr(), count as usize) };
    Ok(entries
        .iter()
        .map(|right| unsafe { unicode_to_string(right) })
        .collect())
}

/// List the SIDs currently holding the named right.
///
/// An unassigned right yields an empty list rather than an error, so a
/// first-time grant starts from an empty holder set.
pub fn holder_sids(policy: &PolicyHandle, right: &str) -> RightsResult<Vec<Sid>> {
    let mut backing = LsaString::new(right);
    let mut lsa_right = backing.as_unicode();

    let mut buffer: *mut c_void = ptr::null_mut();
    let mut count: u32 = 0;
    let status = unsafe {
        LsaEnumerateAccountsWithUserRight(policy.raw(), &mut lsa_right, &mut buffer, &mut count)
    };
    if status == STATUS_NO_MORE_ENTRIES {
        return Ok(Vec::new());
    }
    if !nt_success(status) {
        return Err(RightsError::EnumerateHoldersFailed(status as u32));
    }

    let entries = unsafe { LsaBuf::from_raw(buffer as *mut LSA_ENUMERATION_INFORMATION) };
    let entries = unsafe { slice::from_raw_parts(entries.as_ptr(), count as usize) };
    Ok(entries
        .iter()
        .map(|entry| unsafe { sid_from_psid(entry.Sid) })
        .collect())
}

/// Resolve holder SIDs back to display names and canonical string SIDs
pub fn resolve_sid_names(policy: &PolicyHandle, sids: &[Sid]) -> RightsResult<Vec<HolderEntry>> {
    if sids.is_empty() {
        return Ok(Vec::new());
    }

    let mut raw_sids: Vec<PSID> = sids.iter().map(|sid| sid.as_psid()).collect();
    let mut domains: *mut LSA_REFERENCED_DOMAIN_LIST = ptr::null_mut();
    let mut names: *mut LSA_TRANSLATED_NAME = ptr::null_mut();
    let status = unsafe {
        LsaLookupSids(
            policy.raw(),
            raw_sids.len() as u32,
            raw_sids.as_mut_ptr(),
            &mut domains,
            &mut names,
        )
    };
    let _domains = unsafe { LsaBuf::from_raw(domains) };
    let names = unsafe { LsaBuf::from_raw(names) };

    if !nt_success(status) {
        return Err(RightsError::LookupSidsFailed(status as u32));
    }

    let resolved = unsafe { slice::from_raw_parts(names.as_ptr(), sids.len()) };
    let mut holders = Vec::with_capacity(sids.len());
    for (sid, name) in sids.iter().zip(resolved) {
        holders.push(HolderEntry {
            sid: sid.clone(),
            sid_string: sid_to_string(sid)?,
            name: unsafe { unicode_to_string(&name.Name) },
        });
    }
    Ok(holders)
}
