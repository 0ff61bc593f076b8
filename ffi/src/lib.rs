//! mb64-ffi
//!
//! C ABI embedding boundary over mb64-core, for loading the coder into
//! other runtimes as a shared library.
//!
//! Contract:
//! - 0 = success; distinct nonzero codes per error kind (see `codes`).
//! - Output buffers are allocated here with `malloc` and owned by the
//!   caller, who must release them with `mb64_free`.
//! - The host runtime's memory model is never assumed; everything crosses
//!   the boundary as (pointer, length) pairs.
//!
//! The core keeps configuration per instance; this layer holds the single
//! process-wide instance C callers expect, behind a mutex.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_uchar, c_void};
use std::sync::{Mutex, MutexGuard, OnceLock};

use mb64_core::{Coder, Mb64Error};

/// Status codes returned across the boundary.
pub mod codes {
    use std::os::raw::c_int;

    pub const OK: c_int = 0;
    pub const EMPTY_KEY: c_int = 1;
    pub const ENCODING_STATE: c_int = 2;
    pub const INPUT_TOO_SHORT: c_int = 3;
    pub const AUTHENTICATION_FAILURE: c_int = 4;
    pub const FAILURE: c_int = 5;
    pub const INVALID_ARGUMENT: c_int = 6;
}

fn status_code(err: &Mb64Error) -> c_int {
    match err {
        Mb64Error::EmptyKey => codes::EMPTY_KEY,
        Mb64Error::EncodingState => codes::ENCODING_STATE,
        Mb64Error::InputTooShort { .. } => codes::INPUT_TOO_SHORT,
        Mb64Error::AuthenticationFailure => codes::AUTHENTICATION_FAILURE,
        Mb64Error::Failure(_) => codes::FAILURE,
    }
}

static CODER: OnceLock<Mutex<Coder>> = OnceLock::new();

fn coder() -> MutexGuard<'static, Coder> {
    CODER
        .get_or_init(|| Mutex::new(Coder::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Copy `data` into a fresh malloc'd buffer the caller owns.
/// Returns null only if the allocator fails.
unsafe fn export_buffer(data: &[u8]) -> *mut c_uchar {
    // malloc(0) may legally return null; always request at least one byte.
    let ptr = libc::malloc(data.len().max(1)) as *mut c_uchar;
    if ptr.is_null() {
        return ptr;
    }
    std::ptr::copy_nonoverlapping(data.as_ptr(), ptr, data.len());
    ptr
}

/// Configure keyed mode from a NUL-terminated key string.
///
/// # Safety
/// `key` must be a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn mb64_set_encoding(key: *const c_char) -> c_int {
    if key.is_null() {
        return codes::INVALID_ARGUMENT;
    }
    let key = match CStr::from_ptr(key).to_str() {
        Ok(s) => s,
        Err(_) => return codes::INVALID_ARGUMENT,
    };

    match coder().set_encoding(key) {
        Ok(()) => codes::OK,
        Err(e) => status_code(&e),
    }
}

/// Switch to bypassed (plain base64) mode. Always succeeds.
#[no_mangle]
pub extern "C" fn mb64_bypass() {
    coder().bypass();
}

unsafe fn run_op(
    data: *const c_uchar,
    len: c_int,
    out: *mut *mut c_uchar,
    out_len: *mut c_int,
    op: impl FnOnce(&mut Coder, &[u8]) -> Result<Vec<u8>, Mb64Error>,
) -> c_int {
    if (data.is_null() && len != 0) || len < 0 || out.is_null() || out_len.is_null() {
        return codes::INVALID_ARGUMENT;
    }
    let input: &[u8] = if len == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(data, len as usize)
    };

    let result = op(&mut coder(), input);
    match result {
        Ok(bytes) => {
            let ptr = export_buffer(&bytes);
            if ptr.is_null() {
                return codes::FAILURE;
            }
            *out = ptr;
            *out_len = bytes.len() as c_int;
            codes::OK
        }
        Err(e) => status_code(&e),
    }
}

/// Encode `len` bytes at `data`; on success `*out`/`*out_len` receive a
/// caller-owned buffer holding the encoded text (not NUL-terminated).
///
/// # Safety
/// `data` must point to `len` readable bytes; `out` and `out_len` must be
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn mb64_encode(
    data: *const c_uchar,
    len: c_int,
    out: *mut *mut c_uchar,
    out_len: *mut c_int,
) -> c_int {
    run_op(data, len, out, out_len, |coder, input| {
        coder.encode(input).map(String::into_bytes)
    })
}

/// Decode `len` bytes of encoded text at `data`; on success `*out` /
/// `*out_len` receive a caller-owned buffer holding the payload.
///
/// # Safety
/// Same requirements as `mb64_encode`.
#[no_mangle]
pub unsafe extern "C" fn mb64_decode(
    data: *const c_uchar,
    len: c_int,
    out: *mut *mut c_uchar,
    out_len: *mut c_int,
) -> c_int {
    run_op(data, len, out, out_len, |coder, input| {
        let text = std::str::from_utf8(input)
            .map_err(|_| Mb64Error::Failure("input is not valid UTF-8 text".into()))?;
        coder.decode(text)
    })
}

/// Release a buffer previously returned through `mb64_encode`/`mb64_decode`.
///
/// # Safety
/// `ptr` must have been produced by this library and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn mb64_free(ptr: *mut c_void) {
    if !ptr.is_null() {
        libc::free(ptr);
    }
}
