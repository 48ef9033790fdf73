//! String conversion utilities for the Windows and LSA APIs

use std::ffi::{OsStr, OsString};
use std::os::windows::ffi::{OsStrExt, OsStringExt};
use winapi::um::ntlsa::LSA_UNICODE_STRING;

/// Convert a Rust string to a Windows wide string (UTF-16, NUL-terminated)
pub fn string_to_wide(s: &str) -> Vec<u16> {
    OsStr::new(s)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}

/// Convert a Windows wide string (UTF-16) to a Rust string
pub fn wide_to_string(wide: &[u16]) -> String {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    let os_string = OsString::from_wide(&wide[..len]);
    os_string.to_string_lossy().into_owned()
}

/// Convert a counted LSA string to a Rust string.
///
/// # Safety
/// `value.Buffer` must be null or point at `value.Length / 2` valid UTF-16
/// units.
pub unsafe fn unicode_to_string(value: &LSA_UNICODE_STRING) -> String {
    if value.Buffer.is_null() {
        return String::new();
    }
    let units = std::slice::from_raw_parts(value.Buffer, (value.Length / 2) as usize);
    wide_to_string(units)
}

/// Owned backing store for an `LSA_UNICODE_STRING` argument.
///
/// The LSA string convention is counted: `Length` excludes the terminator,
/// `MaximumLength` includes it. The UTF-16 buffer stays alive for as long
/// as this value, which must outlive any view produced by
/// [`LsaString::as_unicode`].
pub struct LsaString {
    buf: Vec<u16>,
}

impl LsaString {
    pub fn new(s: &str) -> Self {
        LsaString {
            buf: string_to_wide(s),
        }
    }

    /// Counted view over the backing buffer for passing to LSA calls
    pub fn as_unicode(&mut self) -> LSA_UNICODE_STRING {
        let chars = self.buf.len() - 1;
        LSA_UNICODE_STRING {
            Length: (chars * 2) as u16,
            MaximumLength: (self.buf.len() * 2) as u16,
            Buffer: self.buf.as_mut_ptr(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_wide() {
        let wide = string_to_wide("Hello");
        assert_eq!(wide, vec![72, 101, 108, 108, 111, 0]);

        let empty = string_to_wide("");
        assert_eq!(empty, vec![0]);
    }

    #[test]
    fn test_wide_to_string() {
        let wide = vec![72, 101, 108, 108, 111, 0];
        assert_eq!(wide_to_string(&wide), "Hello");

        let no_null = vec![72, 101, 108, 108, 111];
        assert_eq!(wide_to_string(&no_null), "Hello");
    }

    #[test]
    fn test_unicode_strings_round_trip() {
        let unicode_str = "Hello 世界";
        let wide = string_to_wide(unicode_str);
        let back = wide_to_string(&wide);
        assert_eq!(back, unicode_str);
    }

    #[test]
    fn test_lsa_string_lengths() {
        let mut s = LsaString::new("Users");
        let view = s.as_unicode();
        assert_eq!(view.Length, 10);
        assert_eq!(view.MaximumLength, 12);
    }

    #[test]
    fn test_lsa_string_view_round_trips() {
        let mut s = LsaString::new("SeCreateSymbolicLinkPrivilege");
        let view = s.as_unicode();
        let back = unsafe { unicode_to_string(&view) };
        assert_eq!(back, "SeCreateSymbolicLinkPrivilege");
    }

    #[test]
    fn test_unicode_to_string_null_buffer() {
        let empty = LSA_UNICODE_STRING {
            Length: 0,
            MaximumLength: 0,
            Buffer: std::ptr::null_mut(),
        };
        assert_eq!(unsafe { unicode_to_string(&empty) }, "");
    }
}
