//! C entry points, so C test code can render buffers the same way

use core::ffi::c_char;

/// Write `size` bytes from `buffer` as uppercase hex plus a terminating NUL into `out`
///
/// Returns false, leaving `out` untouched, if `out_len` is less than `2 * size + 1`.
///
/// # Safety
///
/// `buffer` must be valid for reads of `size` bytes and `out` for writes of `out_len` bytes. Either
/// may be null if the respective length is 0.
#[no_mangle]
pub unsafe extern "C" fn microstrain_test_format_hex(
    buffer: *const u8,
    size: usize,
    out: *mut c_char,
    out_len: usize,
) -> bool {
    let needed = match size.checked_mul(2).and_then(|n| n.checked_add(1)) {
        Some(needed) if needed <= out_len => needed,
        _ => return false,
    };
    let buffer = if size == 0 {
        &[][..]
    } else {
        unsafe { core::slice::from_raw_parts(buffer, size) }
    };
    let out = unsafe { core::slice::from_raw_parts_mut(out.cast::<u8>(), needed) };
    let (text, terminator) = out.split_at_mut(needed - 1);
    text.copy_from_slice(crate::format_hex(buffer).as_bytes());
    terminator[0] = 0;
    true
}
