//! Host for microstrain-test's assertions inside Rust's built-in `#[test]` harness
//!
//! libtest has no notion of a failed-but-continuing assertion, so check failures are collected
//! and turned into a panic when the host goes out of scope (or into an `Err` by [`LibtestHost::finish`]).
//! Require failures return `Err(Aborted)`; test functions using them return
//! `microstrain_test::Result`, which libtest reports as a failure.
//!
//! ```
//! use microstrain_test::{check_cstr_eq, require_buffer_eq};
//! use microstrain_test_libtest::LibtestHost;
//!
//! fn name_field() -> microstrain_test::Result {
//!     let mut host = LibtestHost::named("mip", "name field");
//!     check_cstr_eq!(&mut host, *b"gnss\0\0\0\0", c"gnss");
//!     require_buffer_eq!(&mut host, [0x75u8, 0x65], [0x75u8, 0x65], 2);
//!     Ok(())
//! }
//! name_field().unwrap();
//! ```

use std::fmt;

use microstrain_test::{Assertion, Host, Severity};

/// Check (or require) assertions failed in the test this host was used in
#[derive(Debug, Clone)]
pub struct CheckFailed {
    pub messages: Vec<String>,
}

impl fmt::Display for CheckFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} assertion(s) failed", self.messages.len())?;
        for message in &self.messages {
            write!(f, "\n{}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for CheckFailed {}

pub struct LibtestHost {
    name: Option<String>,
    info: Vec<String>,
    failures: Vec<String>,
    warnings: usize,
    assertions: usize,
    finished: bool,
}

/// Set up `env_logger` for test output, once per process
///
/// Warnings are shown unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}

impl LibtestHost {
    pub fn new() -> Self {
        init_logging();
        LibtestHost {
            name: None,
            info: Vec::new(),
            failures: Vec::new(),
            warnings: 0,
            assertions: 0,
            finished: false,
        }
    }

    /// A host for the test case displayed as `"[<suite>] <name>"`
    pub fn named(suite: &str, name: &str) -> Self {
        let mut host = Self::new();
        host.name = Some(microstrain_test::display_name(suite, name));
        log::info!("Running test case {}", host.display_name());
        host
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    pub fn assertions(&self) -> usize {
        self.assertions
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    /// Messages of the failed check and require assertions so far
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// End the test without the panic on drop, handing the failures out instead
    pub fn finish(mut self) -> Result<(), CheckFailed> {
        self.finished = true;
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(CheckFailed {
                messages: std::mem::take(&mut self.failures),
            })
        }
    }

    fn describe(&self, assertion: &Assertion<'_>) -> String {
        let mut message = assertion.to_string();
        for line in &self.info {
            message.push_str("\n  ");
            message.push_str(line);
        }
        message
    }
}

impl Default for LibtestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for LibtestHost {
    fn push_info(&mut self, info: String) {
        self.info.push(info);
    }

    fn pop_info(&mut self) {
        self.info.pop();
    }

    fn report(&mut self, assertion: &Assertion<'_>) {
        self.assertions += 1;
        if assertion.passed() {
            return;
        }
        let message = self.describe(assertion);
        match assertion.severity {
            Severity::Warn => {
                self.warnings += 1;
                log::warn!("{}", message);
            }
            Severity::Check | Severity::Require => {
                log::error!("{}", message);
                self.failures.push(message);
            }
        }
    }
}

impl Drop for LibtestHost {
    fn drop(&mut self) {
        if self.finished || self.failures.is_empty() || std::thread::panicking() {
            return;
        }
        let failed = CheckFailed {
            messages: std::mem::take(&mut self.failures),
        };
        panic!("{}: {}", self.display_name(), failed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use microstrain_test::{check_buffer_eq, check_cstr_eq, require_cstr_eq, warn_buffer_eq};

    #[test]
    fn warnings_do_not_fail() {
        let mut host = LibtestHost::named("libtest", "warnings");
        warn_buffer_eq!(&mut host, [1u8, 2, 3], [1u8, 2, 4], 3);
        assert_eq!(host.warnings(), 1);
        assert!(host.finish().is_ok());
    }

    #[test]
    fn named_host_uses_the_suite_tag() {
        let host = LibtestHost::named("libtest", "naming");
        assert_eq!(host.display_name(), microstrain_test::test_case_name!("libtest", "naming"));
    }

    #[test]
    fn check_failures_are_handed_out() {
        let mut host = LibtestHost::new();
        host.push_info("frame 7".into());
        check_buffer_eq!(&mut host, [1u8, 2, 3], [1u8, 2, 4], 3);
        check_cstr_eq!(&mut host, "ok", "ok");
        assert_eq!(host.assertions(), 2);

        let failed = host.finish().unwrap_err();
        assert_eq!(failed.messages.len(), 1);
        let message = &failed.messages[0];
        assert!(message.contains("CHECK( memcmp("), "{}", message);
        assert!(message.contains("The buffers differ."), "{}", message);
        assert!(message.contains("\n  frame 7\n  Actual:   010203\n  Expected: 010204"), "{}", message);
    }

    #[test]
    #[should_panic(expected = "[libtest] drop: 1 assertion(s) failed")]
    fn check_failure_panics_on_drop() {
        let mut host = LibtestHost::named("libtest", "drop");
        check_cstr_eq!(&mut host, "helloX", "hello");
    }

    fn aborts(host: &mut LibtestHost) -> microstrain_test::Result {
        require_cstr_eq!(host, "a", "b");
        check_cstr_eq!(host, "not", "reached");
        Ok(())
    }

    #[test]
    fn require_failure_aborts() {
        let mut host = LibtestHost::new();
        assert_eq!(aborts(&mut host), Err(microstrain_test::Aborted));
        assert_eq!(host.assertions(), 1);
        assert!(host.finish().is_err());
    }
}
