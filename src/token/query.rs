//! Two-call sized query protocol
//!
//! Several Win32 query APIs report the required buffer size through a
//! deliberately failing first call. The helper here runs that protocol
//! once: probe with an empty buffer, allocate exactly the reported size,
//! refill.

use crate::core::types::{RightsError, RightsResult};

/// Outcome of one call in the sized-query protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStep {
    /// The call succeeded and wrote its data
    Filled,
    /// The buffer was too small; the payload is the required size in bytes
    NeedsSize(u32),
    /// The call failed with a Win32 error code
    Failed(u32),
}

/// Run the probe-allocate-refill protocol for the named operation.
///
/// The probe against the empty buffer must report [`QueryStep::NeedsSize`];
/// any other outcome is an [`RightsError::UnexpectedProbe`] rather than a
/// guess. The refill runs against a buffer of exactly the probed size and
/// must report [`QueryStep::Filled`]; a second `NeedsSize` means the two
/// calls disagreed and fails with [`RightsError::InconsistentQuery`].
pub fn query_with_sized_buffer<F>(op: &'static str, mut call: F) -> RightsResult<Vec<u8>>
where
    F: FnMut(&mut [u8]) -> QueryStep,
{
    let probed = match call(&mut []) {
        QueryStep::NeedsSize(n) if n > 0 => n,
        QueryStep::NeedsSize(_) => {
            return Err(RightsError::UnexpectedProbe {
                op,
                detail: "probe reported a zero-byte requirement".to_string(),
            })
        }
        QueryStep::Filled => {
            return Err(RightsError::UnexpectedProbe {
                op,
                detail: "probe succeeded against an empty buffer".to_string(),
            })
        }
        QueryStep::Failed(code) => {
            return Err(RightsError::UnexpectedProbe {
                op,
                detail: format!("probe failed with error {code}"),
            })
        }
    };

    let mut buffer = vec![0u8; probed as usize];
    match call(&mut buffer) {
        QueryStep::Filled => Ok(buffer),
        QueryStep::NeedsSize(reported) => Err(RightsError::InconsistentQuery {
            op,
            probed,
            reported,
        }),
        QueryStep::Failed(code) => Err(RightsError::QueryFailed { op, code }),
    }
}
