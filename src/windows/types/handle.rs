//! Safe HANDLE wrapper with automatic cleanup

use std::ptr;
use winapi::um::handleapi::CloseHandle;
use winapi::um::winnt::HANDLE;

/// Safe wrapper around a Windows HANDLE with RAII semantics.
///
/// The handle is closed exactly once when the wrapper drops, on every exit
/// path of the owning scope.
pub struct Handle {
    handle: HANDLE,
}

impl Handle {
    /// Takes ownership of a raw handle
    pub fn new(handle: HANDLE) -> Self {
        Handle { handle }
    }

    /// Creates a null handle
    pub fn null() -> Self {
        Handle {
            handle: ptr::null_mut(),
        }
    }

    /// Check if handle is null
    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    /// Get the raw handle
    pub fn raw(&self) -> HANDLE {
        self.handle
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            // Ignore errors on cleanup
            unsafe {
                CloseHandle(self.handle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_creation() {
        let handle = Handle::null();
        assert!(handle.is_null());
        assert_eq!(handle.raw(), ptr::null_mut());
    }

    #[test]
    fn test_handle_drop_null() {
        // Create handle in scope and let it drop
        {
            let _handle = Handle::null();
        }
        // Should not crash
    }
}
