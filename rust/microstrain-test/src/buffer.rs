//! Equality of fixed-length byte buffers, with hex diagnostics

use alloc::format;

use crate::hex::Hex;
use crate::host::{conclude, Host, Mismatch, Outcome, Severity};

fn prefix(buffer: &[u8], size: usize) -> &[u8] {
    &buffer[..size.min(buffer.len())]
}

/// Compare the first `size` bytes of two buffers at the given severity
///
/// The host gets both buffers rendered as hex in `Actual:` and `Expected:` context lines. A buffer
/// holding fewer than `size` bytes is reported as [`Mismatch::BufferTooShort`], with whatever it
/// does hold rendered.
#[track_caller]
pub fn assert_buffer_eq<H: Host + ?Sized>(
    host: &mut H,
    severity: Severity,
    actual: &[u8],
    expected: &[u8],
    size: usize,
    expression: &str,
) -> Outcome {
    let actual_part = prefix(actual, size);
    let expected_part = prefix(expected, size);
    let context = [
        format!("Actual:   {}", Hex(actual_part)),
        format!("Expected: {}", Hex(expected_part)),
    ];
    let mismatch = if actual_part.len() < size || expected_part.len() < size {
        Some(Mismatch::BufferTooShort)
    } else if actual_part != expected_part {
        Some(Mismatch::BufferDiffers)
    } else {
        None
    };
    conclude(host, severity, expression, context, mismatch)
}

/// Compare `size` bytes behind two raw pointers
///
/// # Safety
///
/// Both `actual` and `expected` must be valid for reads of `size` bytes. For `size == 0` they may
/// be null.
#[track_caller]
pub unsafe fn assert_buffer_eq_raw<H: Host + ?Sized>(
    host: &mut H,
    severity: Severity,
    actual: *const u8,
    expected: *const u8,
    size: usize,
    expression: &str,
) -> Outcome {
    if size == 0 {
        return assert_buffer_eq(host, severity, &[], &[], 0, expression);
    }
    // Safety: precondition of this function
    let (actual, expected) = unsafe {
        (
            core::slice::from_raw_parts(actual, size),
            core::slice::from_raw_parts(expected, size),
        )
    };
    assert_buffer_eq(host, severity, actual, expected, size, expression)
}

/// Warn, but do not fail the test, when the buffers differ
#[track_caller]
pub fn warn_buffer_eq<H: Host + ?Sized>(
    host: &mut H,
    actual: &[u8],
    expected: &[u8],
    size: usize,
) -> bool {
    assert_buffer_eq(host, Severity::Warn, actual, expected, size, "actual == expected").is_passed()
}

/// Fail the test, but keep running it, when the buffers differ
#[track_caller]
pub fn check_buffer_eq<H: Host + ?Sized>(
    host: &mut H,
    actual: &[u8],
    expected: &[u8],
    size: usize,
) -> bool {
    assert_buffer_eq(host, Severity::Check, actual, expected, size, "actual == expected").is_passed()
}

/// Fail the test and leave it (through the returned `Err`) when the buffers differ
#[track_caller]
pub fn require_buffer_eq<H: Host + ?Sized>(
    host: &mut H,
    actual: &[u8],
    expected: &[u8],
    size: usize,
) -> crate::Result {
    assert_buffer_eq(host, Severity::Require, actual, expected, size, "actual == expected")
        .into_result()
}
