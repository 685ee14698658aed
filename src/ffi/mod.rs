//! C API for hosts that link the static library.
//!
//! Strings crossing the boundary are NUL-terminated UTF-8. Strings returned
//! by this module are owned by the caller and released with
//! [`kana_string_free`].

use std::ffi::{c_char, CStr, CString};
use std::path::Path;

pub mod engine;


pub use engine::*;

use kana_core::romaji::RomajiTrie;
use kana_core::settings;

/// Allocate a value on the heap and return a raw pointer suitable for FFI.
/// The caller is responsible for eventually passing the pointer to [`owned_drop`].
pub(crate) fn owned_new<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// Free a heap-allocated value previously created by [`owned_new`].
/// No-op if `ptr` is null.
///
/// # Safety
/// `ptr` must have been produced by [`owned_new`] (i.e. `Box::into_raw`)
/// and must not have been freed already.
pub(crate) unsafe fn owned_drop<T>(ptr: *mut T) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// `CString` for text that may hold interior NULs (passthrough input); they are dropped.
pub(crate) fn to_cstring(s: &str) -> CString {
    CString::new(s.replace('\0', "")).unwrap_or_default()
}

macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; mut: $name:ident = $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            return $on_err;
        }
        let $name = unsafe { &mut *$ptr };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; ref: $name:ident = $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            return $on_err;
        }
        let $name = unsafe { &*$ptr };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

macro_rules! ffi_close {
    ($fn_name:ident, $T:ty) => {
        #[no_mangle]
        pub extern "C" fn $fn_name(ptr: *mut $T) {
            unsafe { $crate::ffi::owned_drop(ptr) };
        }
    };
}

// Make macros available to sub-modules.
pub(crate) use ffi_close;
pub(crate) use ffi_guard;

/// Status codes returned by the configuration entry points.
pub const KANA_OK: i32 = 0;
pub const KANA_ERR_ARGUMENT: i32 = -1;
pub const KANA_ERR_CONFIG: i32 = 1;

#[no_mangle]
pub extern "C" fn kana_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

#[no_mangle]
pub extern "C" fn kana_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe { drop(CString::from_raw(ptr)) };
    }
}

/// Replace the romaji table. Must run before the first engine is created.
#[no_mangle]
pub extern "C" fn kana_romaji_init_custom(toml: *const c_char) -> i32 {
    ffi_guard!(KANA_ERR_ARGUMENT;
        str: toml_str = toml,
    );
    match RomajiTrie::init_custom(toml_str.to_string()) {
        Ok(()) => KANA_OK,
        Err(e) => {
            tracing::warn!(error = %e, "custom romaji table rejected");
            KANA_ERR_CONFIG
        }
    }
}

/// Replace the global settings. Must run before the first engine is created.
#[no_mangle]
pub extern "C" fn kana_settings_init_custom(toml: *const c_char) -> i32 {
    ffi_guard!(KANA_ERR_ARGUMENT;
        str: toml_str = toml,
    );
    match settings::init_custom(toml_str.to_string()) {
        Ok(()) => KANA_OK,
        Err(e) => {
            tracing::warn!(error = %e, "custom settings rejected");
            KANA_ERR_CONFIG
        }
    }
}

/// Default settings TOML, for hosts that offer it as an editable template.
#[no_mangle]
pub extern "C" fn kana_settings_default_toml() -> *mut c_char {
    to_cstring(settings::default_toml()).into_raw()
}

#[no_mangle]
pub extern "C" fn kana_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}
