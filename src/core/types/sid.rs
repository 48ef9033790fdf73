//! Owned security identifier value

use std::fmt;
use winapi::ctypes::c_void;

/// Owned copy of a variable-length binary security identifier.
///
/// SIDs are persistent across sessions. Equality is raw byte equality,
/// which is the only comparison the format supports.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sid(Vec<u8>);

impl Sid {
    /// Creates a SID from its raw byte representation
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Sid(bytes.into())
    }

    /// Raw byte representation
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the raw representation in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw pointer for PSID parameters. The pointee is never written
    /// through by the calls this tool makes.
    pub(crate) fn as_psid(&self) -> *mut c_void {
        self.0.as_ptr() as *mut c_void
    }
}

impl fmt::Debug for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sid(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // S-1-5-32-545 (BUILTIN\Users)
    fn users_sid() -> Vec<u8> {
        vec![1, 2, 0, 0, 0, 0, 0, 5, 32, 0, 0, 0, 33, 2, 0, 0]
    }

    #[test]
    fn test_byte_equality() {
        let a = Sid::from_bytes(users_sid());
        let b = Sid::from_bytes(users_sid());
        assert_eq!(a, b);

        let mut other = users_sid();
        other[12] = 34; // different final subauthority
        assert_ne!(a, Sid::from_bytes(other));
    }

    #[test]
    fn test_accessors() {
        let sid = Sid::from_bytes(users_sid());
        assert_eq!(sid.len(), 16);
        assert!(!sid.is_empty());
        assert_eq!(sid.as_bytes(), users_sid().as_slice());
    }

    #[test]
    fn test_debug_is_hex() {
        let sid = Sid::from_bytes(vec![0x01, 0xab]);
        assert_eq!(format!("{sid:?}"), "Sid(01ab)");
    }

    proptest! {
        #[test]
        fn eq_matches_raw_bytes(
            a in proptest::collection::vec(any::<u8>(), 0..32),
            b in proptest::collection::vec(any::<u8>(), 0..32),
        ) {
            let left = Sid::from_bytes(a.clone());
            let right = Sid::from_bytes(b.clone());
            prop_assert_eq!(left == right, a == b);
        }
    }
}
