//! Equality of NUL-terminated strings
//!
//! Before comparing contents, the actual string has to end exactly where the expected one does.
//! This catches an unterminated (or longer) actual string without reading it past the expected
//! length.
//!
//! In the safe functions, both sides are length-carrying: the end of a slice counts as a
//! terminator just like a NUL byte does. An actual string that is shorter than the expected one
//! thus fails the termination check rather than being read out of bounds.

use core::ffi::{c_char, CStr};

use alloc::ffi::CString;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::host::{conclude, Host, Mismatch, Outcome, Severity};

/// Values that can be viewed as the bytes of a C string
///
/// The bytes may contain a NUL (for example a fixed-size `char` array from a C struct); the string
/// then ends there. Without a NUL, it ends with the slice.
pub trait CBytes {
    fn c_bytes(&self) -> &[u8];
}

impl CBytes for [u8] {
    fn c_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> CBytes for [u8; N] {
    fn c_bytes(&self) -> &[u8] {
        self
    }
}

impl CBytes for Vec<u8> {
    fn c_bytes(&self) -> &[u8] {
        self
    }
}

impl CBytes for str {
    fn c_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl CBytes for String {
    fn c_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl CBytes for CStr {
    fn c_bytes(&self) -> &[u8] {
        self.to_bytes_with_nul()
    }
}

impl CBytes for CString {
    fn c_bytes(&self) -> &[u8] {
        self.as_bytes_with_nul()
    }
}

impl<T: CBytes + ?Sized> CBytes for &T {
    fn c_bytes(&self) -> &[u8] {
        (**self).c_bytes()
    }
}

/// Length up to the first NUL, or of the whole slice if there is none
pub fn strlen(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
}

/// Whether `bytes` is terminated at exactly `offset`
///
/// The end of the slice terminates as well; an offset past the end does not.
pub fn terminated_at(bytes: &[u8], offset: usize) -> bool {
    match bytes.get(offset) {
        Some(&b) => b == 0,
        None => offset == bytes.len(),
    }
}

fn until_nul(bytes: &[u8]) -> &[u8] {
    &bytes[..strlen(bytes)]
}

fn compare(actual: &[u8], expected: &[u8]) -> Option<Mismatch> {
    let expected = until_nul(expected);
    if !terminated_at(actual, expected.len()) {
        return Some(Mismatch::NotTerminated);
    }
    // Terminated at the same offset, so this is strcmp() == 0
    if until_nul(actual) != expected {
        return Some(Mismatch::ContentDiffers);
    }
    None
}

#[track_caller]
fn report<H: Host + ?Sized>(
    host: &mut H,
    severity: Severity,
    shown_actual: &[u8],
    expected: &[u8],
    mismatch: Option<Mismatch>,
    expression: &str,
) -> Outcome {
    let context = [
        format!("Actual:   {}", String::from_utf8_lossy(until_nul(shown_actual))),
        format!("Expected: {}", String::from_utf8_lossy(until_nul(expected))),
    ];
    conclude(host, severity, expression, context, mismatch)
}

/// Compare two C strings at the given severity
///
/// The host gets `Actual:` and `Expected:` context lines for this report. If `actual` is not
/// terminated at the length of `expected`, that is reported and the contents are not compared.
#[track_caller]
pub fn assert_cstr_eq<H: Host + ?Sized>(
    host: &mut H,
    severity: Severity,
    actual: &[u8],
    expected: &[u8],
    expression: &str,
) -> Outcome {
    report(host, severity, actual, expected, compare(actual, expected), expression)
}

/// Compare a C string behind a raw pointer
///
/// The comparison reads `expected.to_bytes().len() + 1` bytes of `actual`; the `Actual:` context
/// line shows all of `actual` up to its terminator.
///
/// # Safety
///
/// `actual` must point to a NUL-terminated string, and be valid for reads of
/// `expected.to_bytes().len() + 1` bytes as well as up to its terminator. An actual string that is
/// shorter than `expected` *and* sits at the end of its allocation is read out of bounds.
#[track_caller]
pub unsafe fn assert_cstr_eq_raw<H: Host + ?Sized>(
    host: &mut H,
    severity: Severity,
    actual: *const c_char,
    expected: &CStr,
    expression: &str,
) -> Outcome {
    let len = expected.to_bytes().len() + 1;
    // Safety: precondition of this function
    let compared = unsafe { core::slice::from_raw_parts(actual.cast::<u8>(), len) };
    let mismatch = compare(compared, expected.to_bytes_with_nul());
    // Safety: precondition of this function
    let shown = unsafe { CStr::from_ptr(actual) };
    report(host, severity, shown.to_bytes(), expected.to_bytes(), mismatch, expression)
}

/// Warn, but do not fail the test, when the C strings differ
#[track_caller]
pub fn warn_cstr_eq<H, A, E>(host: &mut H, actual: &A, expected: &E) -> bool
where
    H: Host + ?Sized,
    A: CBytes + ?Sized,
    E: CBytes + ?Sized,
{
    assert_cstr_eq(host, Severity::Warn, actual.c_bytes(), expected.c_bytes(), "actual == expected")
        .is_passed()
}

/// Fail the test, but keep running it, when the C strings differ
#[track_caller]
pub fn check_cstr_eq<H, A, E>(host: &mut H, actual: &A, expected: &E) -> bool
where
    H: Host + ?Sized,
    A: CBytes + ?Sized,
    E: CBytes + ?Sized,
{
    assert_cstr_eq(host, Severity::Check, actual.c_bytes(), expected.c_bytes(), "actual == expected")
        .is_passed()
}

/// Fail the test and leave it (through the returned `Err`) when the C strings differ
#[track_caller]
pub fn require_cstr_eq<H, A, E>(host: &mut H, actual: &A, expected: &E) -> crate::Result
where
    H: Host + ?Sized,
    A: CBytes + ?Sized,
    E: CBytes + ?Sized,
{
    assert_cstr_eq(
        host,
        Severity::Require,
        actual.c_bytes(),
        expected.c_bytes(),
        "actual == expected",
    )
    .into_result()
}
