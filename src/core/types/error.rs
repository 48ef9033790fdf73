//! Custom error types for the privilege and account-rights pipeline

use thiserror::Error;

/// Main error type for privilege and account-rights operations.
///
/// Every fallible OS subsystem call has its own variant carrying the
/// numeric code it failed with, so a failure always identifies which call
/// went wrong and how.
#[derive(Error, Debug)]
pub enum RightsError {
    #[error("LookupPrivilegeValue failed for {name} (error {code})")]
    PrivilegeNameNotFound { name: String, code: u32 },

    #[error("OpenProcessToken failed (error {0})")]
    OpenTokenFailed(u32),

    #[error("{op} failed (error {code})")]
    QueryFailed { op: &'static str, code: u32 },

    #[error("{op}: unexpected outcome from sizing probe: {detail}")]
    UnexpectedProbe { op: &'static str, detail: String },

    #[error("{op}: refill inconsistent with sizing probe: probed {probed} bytes, call reported {reported}")]
    InconsistentQuery {
        op: &'static str,
        probed: u32,
        reported: u32,
    },

    #[error("LsaOpenPolicy failed with status 0x{0:08x}")]
    OpenPolicyFailed(u32),

    #[error("LsaLookupNames2 failed with status 0x{0:08x}")]
    LookupNamesFailed(u32),

    #[error("account resolved to no SID: {0}")]
    AccountUnknown(String),

    #[error("LsaEnumerateAccountRights failed with status 0x{0:08x}")]
    EnumerateRightsFailed(u32),

    #[error("LsaEnumerateAccountsWithUserRight failed with status 0x{0:08x}")]
    EnumerateHoldersFailed(u32),

    #[error("LsaLookupSids failed with status 0x{0:08x}")]
    LookupSidsFailed(u32),

    #[error("LsaAddAccountRights failed with status 0x{0:08x}")]
    AddRightFailed(u32),

    #[error("LsaRemoveAccountRights failed with status 0x{0:08x}")]
    RemoveRightFailed(u32),

    #[error("Windows API error: {0}")]
    WindowsApiError(#[from] windows::core::Error),
}

/// Result type alias for privilege and account-rights operations
pub type RightsResult<T> = Result<T, RightsError>;

impl RightsError {
    /// Creates a new Windows API error with the last error code
    pub fn last_os_error() -> Self {
        RightsError::WindowsApiError(windows::core::Error::from_win32())
    }

    /// Creates a privilege-name resolution error
    pub fn privilege_not_found(name: impl Into<String>, code: u32) -> Self {
        RightsError::PrivilegeNameNotFound {
            name: name.into(),
            code,
        }
    }

    /// Numeric code carried by this error, if the failing call reported one
    pub fn code(&self) -> Option<u32> {
        match self {
            RightsError::PrivilegeNameNotFound { code, .. }
            | RightsError::OpenTokenFailed(code)
            | RightsError::QueryFailed { code, .. }
            | RightsError::OpenPolicyFailed(code)
            | RightsError::LookupNamesFailed(code)
            | RightsError::EnumerateRightsFailed(code)
            | RightsError::EnumerateHoldersFailed(code)
            | RightsError::LookupSidsFailed(code)
            | RightsError::AddRightFailed(code)
            | RightsError::RemoveRightFailed(code) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_call() {
        let err = RightsError::OpenPolicyFailed(0xc000_0022);
        assert_eq!(err.to_string(), "LsaOpenPolicy failed with status 0xc0000022");

        let err = RightsError::privilege_not_found("SeBogusPrivilege", 1313);
        assert_eq!(
            err.to_string(),
            "LookupPrivilegeValue failed for SeBogusPrivilege (error 1313)"
        );
    }

    #[test]
    fn test_every_call_variant_carries_its_code() {
        let errors: Vec<(RightsError, u32)> = vec![
            (RightsError::OpenTokenFailed(5), 5),
            (
                RightsError::QueryFailed {
                    op: "GetTokenInformation",
                    code: 998,
                },
                998,
            ),
            (RightsError::OpenPolicyFailed(0xc000_0022), 0xc000_0022),
            (RightsError::LookupNamesFailed(0xc000_0073), 0xc000_0073),
            (RightsError::EnumerateRightsFailed(0xc000_0034), 0xc000_0034),
            (RightsError::EnumerateHoldersFailed(0xc000_0022), 0xc000_0022),
            (RightsError::LookupSidsFailed(0xc000_0073), 0xc000_0073),
            (RightsError::AddRightFailed(0xc000_0061), 0xc000_0061),
            (RightsError::RemoveRightFailed(0xc000_0061), 0xc000_0061),
        ];

        for (error, code) in errors {
            assert_eq!(error.code(), Some(code), "{error}");
        }
    }

    #[test]
    fn test_probe_errors_name_the_operation() {
        let err = RightsError::UnexpectedProbe {
            op: "GetTokenInformation",
            detail: "probe succeeded against an empty buffer".to_string(),
        };
        assert!(err.to_string().contains("GetTokenInformation"));
        assert!(err.code().is_none());

        let err = RightsError::InconsistentQuery {
            op: "GetTokenInformation",
            probed: 64,
            reported: 96,
        };
        assert!(err.to_string().contains("probed 64"));
        assert!(err.to_string().contains("reported 96"));
    }

    #[test]
    fn test_account_unknown_display() {
        let err = RightsError::AccountUnknown("Users".to_string());
        assert_eq!(err.to_string(), "account resolved to no SID: Users");
    }

    #[test]
    fn test_rights_result_type() {
        fn example_function() -> RightsResult<u32> {
            Ok(42)
        }

        fn failing_function() -> RightsResult<u32> {
            Err(RightsError::OpenTokenFailed(6))
        }

        assert_eq!(example_function().unwrap(), 42);
        assert!(failing_function().is_err());
    }
}
