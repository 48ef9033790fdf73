//! Grant/revoke toggle for the audited account right
//!
//! The toggle is a deliberate flip: whichever assignment is observed, the
//! opposite is applied, so two consecutive runs restore the original
//! state. See [`ToggleAction`] for why this must stay a flip.

use crate::core::types::{HolderEntry, RightsError, RightsResult, Sid, ToggleAction};
use crate::windows::utils::{nt_success, LsaString};
use winapi::um::ntlsa::{LsaAddAccountRights, LsaRemoveAccountRights};

use super::handle::PolicyHandle;

/// Membership test feeding the toggle decision.
///
/// The target holds the right when some holder matches by raw SID bytes
/// or, case-insensitively, by display name.
pub fn holds_right(holders: &[HolderEntry], target: &Sid, account: &str) -> bool {
    holders
        .iter()
        .any(|holder| holder.sid == *target || holder.name.eq_ignore_ascii_case(account))
}

/// Apply the toggle transition to the policy database
pub fn apply_toggle(
    policy: &PolicyHandle,
    target: &Sid,
    right: &str,
    action: ToggleAction,
) -> RightsResult<()> {
    let mut backing = LsaString::new(right);
    let mut lsa_right = backing.as_unicode();

    match action {
        ToggleAction::Grant => {
            let status =
                unsafe { LsaAddAccountRights(policy.raw(), target.as_psid(), &mut lsa_right, 1) };
            if !nt_success(status) {
                return Err(RightsError::AddRightFailed(status as u32));
            }
        }
        ToggleAction::Revoke => {
            let status = unsafe {
                LsaRemoveAccountRights(policy.raw(), target.as_psid(), 0, &mut lsa_right, 1)
            };
            if !nt_success(status) {
                return Err(RightsError::RemoveRightFailed(status as u32));
            }
        }
    }
    Ok(())
}
