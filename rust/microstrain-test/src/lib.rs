//! C-string and byte-buffer assertions for test code, at three severities
//!
//! * `warn`: report a mismatch as a warning, keep the test passing and running
//! * `check`: fail the test, but keep running it
//! * `require`: fail the test and leave it, by returning `Err(Aborted)` for `?` to propagate
//!
//! The assertions report to a [`Host`], which is whatever test framework is in use. This crate
//! brings an in-memory [`Recorder`] and a minimal [`runner`]; the `microstrain-test-libtest` crate
//! binds to Rust's own `#[test]` harness.
//!
//! ```
//! use microstrain_test::{check_buffer_eq, require_cstr_eq, Recorder};
//!
//! fn body(host: &mut Recorder) -> microstrain_test::Result {
//!     let name = *b"imu\0\0\0\0\0";
//!     require_cstr_eq!(host, name, c"imu");
//!     check_buffer_eq!(host, [0x75u8, 0x65], b"ue", 2);
//!     Ok(())
//! }
//!
//! let mut host = Recorder::new();
//! body(&mut host).unwrap();
//! assert!(!host.is_failed());
//! ```
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod host;
pub use host::{Aborted, Assertion, Host, Mismatch, Outcome, Severity};

mod hex;
pub use hex::{format_hex, Hex};

pub mod cstr;
pub use cstr::{check_cstr_eq, require_cstr_eq, warn_cstr_eq, CBytes};

pub mod buffer;
pub use buffer::{check_buffer_eq, require_buffer_eq, warn_buffer_eq};

mod recorder;
pub use recorder::{Event, Recorder};

pub mod runner;
pub use runner::{display_name, TestCase};

pub mod ffi;

pub type Result<T = ()> = core::result::Result<T, Aborted>;

#[doc(hidden)]
pub fn __bytes<T: AsRef<[u8]> + ?Sized>(value: &T) -> &[u8] {
    value.as_ref()
}

/// `"[<suite>] <name>"` as a string literal
///
/// ```
/// assert_eq!(microstrain_test::test_case_name!("mip", "parse field"), "[mip] parse field");
/// ```
#[macro_export]
macro_rules! test_case_name {
    ($suite:literal, $name:literal $(,)?) => {
        concat!("[", $suite, "] ", $name)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __cstr_eq {
    ($severity:ident, $host:expr, $actual:expr, $expected:expr) => {
        $crate::cstr::assert_cstr_eq(
            &mut *$host,
            $crate::Severity::$severity,
            $crate::CBytes::c_bytes(&$actual),
            $crate::CBytes::c_bytes(&$expected),
            concat!(stringify!($actual), " == ", stringify!($expected)),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __buffer_eq {
    ($severity:ident, $host:expr, $actual:expr, $expected:expr, $size:expr) => {
        $crate::buffer::assert_buffer_eq(
            &mut *$host,
            $crate::Severity::$severity,
            $crate::__bytes(&$actual),
            $crate::__bytes(&$expected),
            $size,
            concat!(
                "memcmp(",
                stringify!($actual),
                ", ",
                stringify!($expected),
                ", ",
                stringify!($size),
                ") == 0"
            ),
        )
    };
}

/// Warn, but do not fail the test, when two C strings differ; evaluates to whether they matched
///
/// `host` is a `&mut` to a [`Host`]. Pass the expected string second: the actual one has to be
/// terminated where the expected one is, or the contents are not compared at all.
#[macro_export]
macro_rules! warn_cstr_eq {
    ($host:expr, $actual:expr, $expected:expr $(,)?) => {
        $crate::Outcome::is_passed($crate::__cstr_eq!(Warn, $host, $actual, $expected))
    };
}

/// Fail the test, but keep running it, when two C strings differ; evaluates to whether they
/// matched
///
/// Pass the expected string second, see [`warn_cstr_eq!`].
#[macro_export]
macro_rules! check_cstr_eq {
    ($host:expr, $actual:expr, $expected:expr $(,)?) => {
        $crate::Outcome::is_passed($crate::__cstr_eq!(Check, $host, $actual, $expected))
    };
}

/// Fail the test and return from the enclosing function with `Err(Aborted)` when two C strings
/// differ
///
/// Pass the expected string second, see [`warn_cstr_eq!`].
#[macro_export]
macro_rules! require_cstr_eq {
    ($host:expr, $actual:expr, $expected:expr $(,)?) => {
        $crate::Outcome::into_result($crate::__cstr_eq!(Require, $host, $actual, $expected))?
    };
}

/// Warn, but do not fail the test, when the first `size` bytes of two buffers differ
#[macro_export]
macro_rules! warn_buffer_eq {
    ($host:expr, $actual:expr, $expected:expr, $size:expr $(,)?) => {
        $crate::Outcome::is_passed($crate::__buffer_eq!(Warn, $host, $actual, $expected, $size))
    };
}

/// Fail the test, but keep running it, when the first `size` bytes of two buffers differ
#[macro_export]
macro_rules! check_buffer_eq {
    ($host:expr, $actual:expr, $expected:expr, $size:expr $(,)?) => {
        $crate::Outcome::is_passed($crate::__buffer_eq!(Check, $host, $actual, $expected, $size))
    };
}

/// Fail the test and return from the enclosing function with `Err(Aborted)` when the first `size`
/// bytes of two buffers differ
#[macro_export]
macro_rules! require_buffer_eq {
    ($host:expr, $actual:expr, $expected:expr, $size:expr $(,)?) => {
        $crate::Outcome::into_result($crate::__buffer_eq!(Require, $host, $actual, $expected, $size))?
    };
}
