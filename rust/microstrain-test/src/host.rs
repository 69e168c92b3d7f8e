//! The seam between the assertions and whatever test framework reports them
//!
//! A host needs three capabilities: keeping diagnostic context lines that accompany the next
//! reports, receiving the result of every evaluated assertion, and letting a `require` failure
//! leave the test case. The last one is not a trait method: the require entry points return
//! [`Aborted`], and the test body propagates it with `?`.

use core::fmt;
use core::panic::Location;

use alloc::string::String;

/// How a failed comparison affects the enclosing test case
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Report a warning; the test neither fails nor stops
    Warn,
    /// Report a failure; the test fails but keeps running
    Check,
    /// Report a failure and leave the test case
    Require,
}

impl Severity {
    /// Whether a mismatch at this severity fails the test
    pub fn is_failing(self) -> bool {
        !matches!(self, Severity::Warn)
    }

    /// Whether a mismatch at this severity ends the test case
    pub fn is_fatal(self) -> bool {
        matches!(self, Severity::Require)
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Warn => "WARN",
            Severity::Check => "CHECK",
            Severity::Require => "REQUIRE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a comparison did not hold
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// The actual string continues past the length of the expected one (or ends before it)
    NotTerminated,
    /// Both strings end at the same offset, but their bytes differ
    ContentDiffers,
    /// The compared buffer bytes differ
    BufferDiffers,
    /// One of the buffers holds fewer bytes than the compared size
    BufferTooShort,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mismatch::NotTerminated => {
                "The actual string is not terminated when the expected string is."
            }
            Mismatch::ContentDiffers => "The strings differ.",
            Mismatch::BufferDiffers => "The buffers differ.",
            Mismatch::BufferTooShort => "A buffer is shorter than the compared size.",
        })
    }
}

/// One evaluated assertion, as handed to [`Host::report`]
#[derive(Debug, Clone)]
pub struct Assertion<'a> {
    pub severity: Severity,
    /// Source text of the comparison, for example `name == c"imu"`
    pub expression: &'a str,
    /// `None` if the comparison held
    pub mismatch: Option<Mismatch>,
    pub location: &'static Location<'static>,
}

impl Assertion<'_> {
    pub fn passed(&self) -> bool {
        self.mismatch.is_none()
    }
}

impl fmt::Display for Assertion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}( {} )",
            self.location.file(),
            self.location.line(),
            self.severity,
            self.expression
        )?;
        match self.mismatch {
            None => f.write_str(" PASSED"),
            Some(mismatch) => write!(f, " is NOT correct! {}", mismatch),
        }
    }
}

/// A test framework that assertions report to
pub trait Host {
    /// Add a context line that accompanies every report until the matching [`Host::pop_info`]
    fn push_info(&mut self, info: String);

    /// Drop the most recently pushed context line
    fn pop_info(&mut self);

    /// Receive the result of one assertion
    ///
    /// Called for passing assertions too, so hosts can count them. The context lines pushed at
    /// this point belong to the report.
    fn report(&mut self, assertion: &Assertion<'_>);
}

impl<H: Host + ?Sized> Host for &mut H {
    fn push_info(&mut self, info: String) {
        (**self).push_info(info)
    }

    fn pop_info(&mut self) {
        (**self).pop_info()
    }

    fn report(&mut self, assertion: &Assertion<'_>) {
        (**self).report(assertion)
    }
}

/// The current test case was left because a `require` assertion failed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Aborted;

impl fmt::Display for Aborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("test case aborted by a failed REQUIRE assertion")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Aborted {}

/// What an assertion amounted to at its severity
#[must_use = "a Require outcome has to be propagated with into_result()?"]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// The comparison did not hold, and the severity lets the test continue
    Mismatched,
    /// The comparison did not hold at [`Severity::Require`]
    Aborted,
}

impl Outcome {
    pub(crate) fn of(severity: Severity, mismatch: Option<Mismatch>) -> Self {
        match mismatch {
            None => Outcome::Passed,
            Some(_) if severity.is_fatal() => Outcome::Aborted,
            Some(_) => Outcome::Mismatched,
        }
    }

    pub fn is_passed(self) -> bool {
        self == Outcome::Passed
    }

    /// `Err` only for [`Outcome::Aborted`], so `?` leaves the test case exactly when required
    pub fn into_result(self) -> crate::Result {
        match self {
            Outcome::Aborted => Err(Aborted),
            _ => Ok(()),
        }
    }
}

/// Report one comparison to the host with the given context lines pushed around it
#[track_caller]
pub(crate) fn conclude<H: Host + ?Sized>(
    host: &mut H,
    severity: Severity,
    expression: &str,
    context: [String; 2],
    mismatch: Option<Mismatch>,
) -> Outcome {
    let location = Location::caller();
    let pushed = context.len();
    for line in context {
        host.push_info(line);
    }
    host.report(&Assertion {
        severity,
        expression,
        mismatch,
        location,
    });
    for _ in 0..pushed {
        host.pop_info();
    }
    if let Some(mismatch) = mismatch {
        log::trace!(
            "{} mismatch at {}:{}: {}",
            severity,
            location.file(),
            location.line(),
            mismatch
        );
    }
    Outcome::of(severity, mismatch)
}
