//! Audit pipeline orchestration
//!
//! Two isolated fault domains run in sequence: the token inspection phase
//! and the policy/account-rights phase. A failure in either is reported on
//! the diagnostic stream and does not stop the other.

pub mod render;

use crate::config::Target;
use crate::core::types::{PolicyReport, RightsError, RightsResult, ToggleAction, TokenReport};
use crate::policy::{self, PolicyAccess, PolicyHandle};
use crate::token::{resolve_privilege, TokenSnapshot};
use tracing::error;

/// Outcome of one full pipeline run
pub struct AuditOutcome {
    pub token: RightsResult<TokenReport>,
    pub policy: RightsResult<PolicyReport>,
}

/// Run both phases against the given target.
///
/// Neither phase is retried, and neither prevents the other from running.
pub fn run(target: &Target) -> AuditOutcome {
    let token = token_phase(target);
    if let Err(err) = &token {
        error!("token inspection failed: {err}");
    }

    let policy = policy_phase(target);
    if let Err(err) = &policy {
        error!("account-rights toggle failed: {err}");
    }

    AuditOutcome { token, policy }
}

/// Session-local check: does the current process token hold the privilege
fn token_phase(target: &Target) -> RightsResult<TokenReport> {
    let privilege = resolve_privilege(target.privilege)?;
    let snapshot = TokenSnapshot::for_current_process()?;
    Ok(TokenReport {
        privilege,
        privilege_count: snapshot.len(),
        held: snapshot.holds(privilege),
    })
}

/// Policy branch: resolve the account, report its rights, enumerate the
/// current holders, and flip the assignment
fn policy_phase(target: &Target) -> RightsResult<PolicyReport> {
    let handle = PolicyHandle::open(PolicyAccess::for_pipeline())?;

    let sids = policy::resolve_account(&handle, target.account)?;
    // Act on the first resolved SID; extra entries are informational only
    let target_sid = sids
        .first()
        .cloned()
        .ok_or_else(|| RightsError::AccountUnknown(target.account.to_string()))?;

    let rights = policy::account_rights(&handle, &target_sid)?;

    let holder_sids = policy::holder_sids(&handle, target.privilege)?;
    let holders = policy::resolve_sid_names(&handle, &holder_sids)?;

    let previously_held = policy::holds_right(&holders, &target_sid, target.account);
    let action = ToggleAction::for_held(previously_held);
    policy::apply_toggle(&handle, &target_sid, target.privilege, action)?;

    Ok(PolicyReport {
        account: target.account.to_string(),
        resolved_sids: sids.len(),
        rights,
        holders,
        previously_held,
        action,
    })
}
