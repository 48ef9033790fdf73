//! Text rendering of typed phase outcomes
//!
//! The report is human-readable; its exact wording is not a contract.
//! Failed phases produce nothing here — the pipeline already put their
//! diagnostics on the error stream.

use std::fmt::Write;

use crate::config::Target;
use crate::core::types::{PolicyReport, ToggleAction, TokenReport};

use super::AuditOutcome;

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Render the token inspection phase
pub fn render_token(report: &TokenReport, target: &Target) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} = {}", target.privilege, report.privilege);
    let _ = writeln!(
        out,
        "User has {} privilege{}",
        report.privilege_count,
        plural(report.privilege_count)
    );
    let _ = writeln!(
        out,
        "User does{} have the {}",
        if report.held { "" } else { "n't" },
        target.privilege
    );
    out
}

/// Render the policy inspection and toggle phase
pub fn render_policy(report: &PolicyReport, target: &Target) -> String {
    let mut out = String::new();
    if report.resolved_sids > 1 {
        let _ = writeln!(
            out,
            "{} resolved to {} SIDs, acting on the first",
            report.account, report.resolved_sids
        );
    }
    let _ = writeln!(
        out,
        "{} right{} found",
        report.rights.len(),
        plural(report.rights.len())
    );
    for right in &report.rights {
        let _ = writeln!(out, "  {right}");
    }

    let _ = writeln!(
        out,
        "{} SID{} found",
        report.holders.len(),
        plural(report.holders.len())
    );
    for holder in &report.holders {
        let _ = writeln!(out, "  {} ({})", holder.name, holder.sid_string);
    }

    let _ = writeln!(
        out,
        "{} had{} got {}",
        report.account,
        if report.previously_held { "" } else { "n't" },
        target.privilege
    );
    match report.action {
        ToggleAction::Grant => {
            let _ = writeln!(out, "granted {} to {}", target.privilege, report.account);
        }
        ToggleAction::Revoke => {
            let _ = writeln!(out, "removed {} from {}", target.privilege, report.account);
        }
    }
    out
}

/// Render a full outcome, skipping failed phases
pub fn render(outcome: &AuditOutcome, target: &Target) -> String {
    let mut out = String::new();
    if let Ok(report) = &outcome.token {
        out.push_str(&render_token(report, target));
    }
    if let Ok(report) = &outcome.policy {
        out.push_str(&render_policy(report, target));
    }
    out
}
