//! NTSTATUS and Win32 error helpers

use winapi::shared::ntdef::NTSTATUS;
use winapi::um::errhandlingapi::GetLastError;

/// True when an NTSTATUS value reports success.
///
/// Success and informational values are non-negative; warning and error
/// severities set the sign bit.
pub fn nt_success(status: NTSTATUS) -> bool {
    status >= 0
}

/// Last Win32 error code on the calling thread
pub fn last_win32_error() -> u32 {
    unsafe { GetLastError() }
}
