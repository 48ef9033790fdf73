//! Privilege-name resolution and token privilege snapshots

use crate::core::types::{PrivilegeId, RightsError, RightsResult};
use crate::windows::types::Handle;
use crate::windows::utils::{last_win32_error, string_to_wide};
use std::ptr;
use winapi::shared::minwindef::{DWORD, FALSE};
use winapi::shared::winerror::ERROR_INSUFFICIENT_BUFFER;
use winapi::um::processthreadsapi::{GetCurrentProcess, OpenProcessToken};
use winapi::um::securitybaseapi::GetTokenInformation;
use winapi::um::winbase::LookupPrivilegeValueW;
use winapi::um::winnt::{TokenPrivileges, HANDLE, LUID, TOKEN_PRIVILEGES, TOKEN_READ};

use super::query::{query_with_sized_buffer, QueryStep};

/// Resolve a privilege name to its session-local identity.
///
/// Pure lookup against the OS privilege-name table; deterministic for a
/// fixed name within one boot session.
pub fn resolve_privilege(name: &str) -> RightsResult<PrivilegeId> {
    let wide = string_to_wide(name);
    let mut luid = LUID {
        LowPart: 0,
        HighPart: 0,
    };
    if unsafe { LookupPrivilegeValueW(ptr::null(), wide.as_ptr(), &mut luid) } == FALSE {
        return Err(RightsError::privilege_not_found(name, last_win32_error()));
    }
    Ok(PrivilegeId::new(luid.HighPart, luid.LowPart))
}

/// Immutable point-in-time view of the privileges held by a token.
///
/// Snapshots of an unchanged token agree with each other; querying one is
/// read-only and repeatable.
pub struct TokenSnapshot {
    entries: Vec<(PrivilegeId, u32)>,
}

impl TokenSnapshot {
    /// Snapshot the current process token.
    ///
    /// Opens the token for read access and queries its privilege list
    /// through the two-call sizing protocol.
    pub fn for_current_process() -> RightsResult<Self> {
        // GetCurrentProcess returns a pseudo-handle and cannot fail
        let mut raw: HANDLE = ptr::null_mut();
        if unsafe { OpenProcessToken(GetCurrentProcess(), TOKEN_READ, &mut raw) } == FALSE {
            return Err(RightsError::OpenTokenFailed(last_win32_error()));
        }
        let token = Handle::new(raw);

        let buffer = query_with_sized_buffer("GetTokenInformation", |buf| {
            let mut needed: DWORD = 0;
            let ok = unsafe {
                GetTokenInformation(
                    token.raw(),
                    TokenPrivileges,
                    if buf.is_empty() {
                        ptr::null_mut()
                    } else {
                        buf.as_mut_ptr() as *mut _
                    },
                    buf.len() as DWORD,
                    &mut needed,
                )
            };
            if ok != FALSE {
                QueryStep::Filled
            } else {
                let code = last_win32_error();
                if code == ERROR_INSUFFICIENT_BUFFER {
                    QueryStep::NeedsSize(needed)
                } else {
                    QueryStep::Failed(code)
                }
            }
        })?;

        Ok(TokenSnapshot {
            entries: parse_privileges(&buffer),
        })
    }

    /// Number of privileges in the snapshot
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear scan for the given identity
    pub fn holds(&self, privilege: PrivilegeId) -> bool {
        self.entries.iter().any(|(id, _)| *id == privilege)
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<(PrivilegeId, u32)>) -> Self {
        TokenSnapshot { entries }
    }
}

/// Parse a filled TOKEN_PRIVILEGES buffer into (identity, attributes) pairs
fn parse_privileges(buffer: &[u8]) -> Vec<(PrivilegeId, u32)> {
    unsafe {
        let privileges = &*(buffer.as_ptr() as *const TOKEN_PRIVILEGES);
        let entries = std::slice::from_raw_parts(
            privileges.Privileges.as_ptr(),
            privileges.PrivilegeCount as usize,
        );
        entries
            .iter()
            .map(|e| (PrivilegeId::new(e.Luid.HighPart, e.Luid.LowPart), e.Attributes))
            .collect()
    }
}
