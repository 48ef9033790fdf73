//! Guard for LSA-owned output buffers

use winapi::um::ntlsa::LsaFreeMemory;

/// Owning guard for a buffer allocated by the LSA subsystem.
///
/// LSA output buffers must be released through `LsaFreeMemory`, never a
/// generic deallocation path. A null pointer is a valid no-op guard, so a
/// failed call's untouched output parameter can be wrapped unconditionally.
pub(crate) struct LsaBuf<T> {
    ptr: *mut T,
}

impl<T> LsaBuf<T> {
    /// # Safety
    /// `ptr` must be null or an LSA allocation owned by the caller.
    pub(crate) unsafe fn from_raw(ptr: *mut T) -> Self {
        LsaBuf { ptr }
    }

    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr
    }
}

impl<T> Drop for LsaBuf<T> {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe {
                LsaFreeMemory(self.ptr as *mut _);
            }
        }
    }
}
