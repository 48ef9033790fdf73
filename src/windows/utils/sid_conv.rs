//! SID conversion between raw, owned, and display forms

use crate::core::types::{RightsError, RightsResult, Sid};
use std::ptr;
use winapi::shared::minwindef::{FALSE, HLOCAL};
use winapi::um::sddl::ConvertSidToStringSidW;
use winapi::um::securitybaseapi::GetLengthSid;
use winapi::um::winbase::LocalFree;
use winapi::um::winnt::PSID;

use super::string_conv::wide_to_string;

/// Copy a subsystem-owned SID into an owned value.
///
/// # Safety
/// `psid` must point at a valid SID for the duration of the call.
pub unsafe fn sid_from_psid(psid: PSID) -> Sid {
    let len = GetLengthSid(psid) as usize;
    let bytes = std::slice::from_raw_parts(psid as *const u8, len);
    Sid::from_bytes(bytes.to_vec())
}

/// Convert a SID to its canonical "S-1-…" display form
pub fn sid_to_string(sid: &Sid) -> RightsResult<String> {
    let mut raw: *mut u16 = ptr::null_mut();
    let ok = unsafe { ConvertSidToStringSidW(sid.as_psid(), &mut raw) };
    if ok == FALSE || raw.is_null() {
        return Err(RightsError::last_os_error());
    }
    // The string is LocalAlloc-owned and must go back through LocalFree
    let guard = LocalString(raw);

    let mut len = 0usize;
    unsafe {
        while *guard.0.add(len) != 0 {
            len += 1;
        }
        let units = std::slice::from_raw_parts(guard.0, len);
        Ok(wide_to_string(units))
    }
}

struct LocalString(*mut u16);

impl Drop for LocalString {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe {
                LocalFree(self.0 as HLOCAL);
            }
        }
    }
}
