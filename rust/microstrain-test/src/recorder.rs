use alloc::string::String;
use alloc::vec::Vec;

use crate::host::{Assertion, Host, Mismatch, Severity};

/// One assertion as seen by a [`Recorder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub severity: Severity,
    pub expression: String,
    pub mismatch: Option<Mismatch>,
    /// Context lines that were active when the assertion was reported, oldest first
    pub info: Vec<String>,
    pub file: &'static str,
    pub line: u32,
}

impl Event {
    pub fn passed(&self) -> bool {
        self.mismatch.is_none()
    }
}

/// A host that keeps every report in memory
///
/// This is what the bundled runner executes test cases against, and what the crate's own tests
/// inspect.
#[derive(Debug, Default)]
pub struct Recorder {
    info: Vec<String>,
    events: Vec<Event>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Context lines currently pushed
    pub fn info(&self) -> &[String] {
        &self.info
    }

    /// Number of evaluated assertions, passed or not
    pub fn assertions(&self) -> usize {
        self.events.len()
    }

    /// Mismatches reported at [`Severity::Warn`]
    pub fn warnings(&self) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(|e| !e.passed() && !e.severity.is_failing())
    }

    /// Mismatches that fail the test
    pub fn failures(&self) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(|e| !e.passed() && e.severity.is_failing())
    }

    pub fn is_failed(&self) -> bool {
        self.failures().next().is_some()
    }
}

impl Host for Recorder {
    fn push_info(&mut self, info: String) {
        self.info.push(info);
    }

    fn pop_info(&mut self) {
        self.info.pop();
    }

    fn report(&mut self, assertion: &Assertion<'_>) {
        self.events.push(Event {
            severity: assertion.severity,
            expression: assertion.expression.into(),
            mismatch: assertion.mismatch,
            info: self.info.clone(),
            file: assertion.location.file(),
            line: assertion.location.line(),
        });
    }
}
