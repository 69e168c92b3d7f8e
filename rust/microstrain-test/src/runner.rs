//! A minimal runner for explicitly listed test cases
//!
//! There is no discovery: callers hand over a slice of [`TestCase`]s. Each one runs against a
//! fresh [`Recorder`].

use core::fmt;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Recorder;

pub type TestBody = fn(&mut Recorder) -> crate::Result;

/// `"[<suite>] <name>"`, the run-time counterpart of [`test_case_name!`](crate::test_case_name)
pub fn display_name(suite: &str, name: &str) -> String {
    format!("[{}] {}", suite, name)
}

/// A test case tagged with the suite it belongs to
#[derive(Copy, Clone)]
pub struct TestCase {
    pub suite: &'static str,
    pub name: &'static str,
    pub body: TestBody,
}

impl TestCase {
    pub const fn new(suite: &'static str, name: &'static str, body: TestBody) -> Self {
        Self { suite, name, body }
    }

    pub fn display_name(&self) -> String {
        display_name(self.suite, self.name)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TestCase").field(&self.display_name()).finish()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CaseVerdict {
    /// No failing assertion; warnings may have been reported
    Passed,
    /// At least one check failed, and the case ran to its end
    Failed,
    /// A require failed and the case was left early
    Aborted,
}

#[derive(Debug, Clone)]
pub struct CaseReport {
    pub name: String,
    pub verdict: CaseVerdict,
    pub assertions: usize,
    pub warnings: usize,
    pub failures: usize,
}

pub fn run_case(case: &TestCase) -> CaseReport {
    let name = case.display_name();
    log::info!("Running test case {}", name);

    let mut host = Recorder::new();
    let result = (case.body)(&mut host);

    for event in host.warnings() {
        log::warn!("{}:{}: WARN( {} ) {:?}", event.file, event.line, event.expression, event.info);
    }
    for event in host.failures() {
        log::error!(
            "{}:{}: {}( {} ) {:?}",
            event.file,
            event.line,
            event.severity,
            event.expression,
            event.info
        );
    }

    let verdict = match result {
        Err(crate::Aborted) => CaseVerdict::Aborted,
        Ok(()) if host.is_failed() => CaseVerdict::Failed,
        Ok(()) => CaseVerdict::Passed,
    };
    log::info!("Test case {} finished: {:?}", name, verdict);

    CaseReport {
        name,
        verdict,
        assertions: host.assertions(),
        warnings: host.warnings().count(),
        failures: host.failures().count(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub reports: Vec<CaseReport>,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.reports.iter().all(|r| r.verdict == CaseVerdict::Passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &CaseReport> {
        self.reports.iter().filter(|r| r.verdict != CaseVerdict::Passed)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.failed().count();
        write!(
            f,
            "test cases: {} | {} passed | {} failed | assertions: {}",
            self.reports.len(),
            self.reports.len() - failed,
            failed,
            self.reports.iter().map(|r| r.assertions).sum::<usize>()
        )
    }
}

/// Run all cases whose display name contains `filter` (all of them if `None`)
pub fn run(cases: &[TestCase], filter: Option<&str>) -> Summary {
    let reports = cases
        .iter()
        .filter(|case| filter.map_or(true, |f| case.display_name().contains(f)))
        .map(run_case)
        .collect();
    Summary { reports }
}
