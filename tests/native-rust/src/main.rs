mod cases;

use microstrain_test::runner;
use microstrain_test::TestCase;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let filter = std::env::args().nth(1);
    let filter = filter.as_deref();

    println!("Running test cases without introducing errors...");
    let clean: Vec<TestCase> = cases::CASES.iter().map(|c| c.clean).collect();
    let summary = runner::run(&clean, filter);
    println!("{}", summary);
    let mut first_error = match summary.failed().next() {
        Some(report) => Err(report.name.clone()),
        None => Ok(()),
    };

    println!("Running test cases and introducing errors...");
    let with_error: Vec<TestCase> = cases::CASES.iter().map(|c| c.with_error).collect();
    let summary = runner::run(&with_error, filter);
    println!("{}", summary);
    let expected = cases::CASES
        .iter()
        .filter(|c| filter.map_or(true, |f| c.with_error.display_name().contains(f)));
    for (report, case) in summary.reports.iter().zip(expected) {
        println!("Test {} ran, result was {:?}", report.name, report.verdict);
        if report.verdict != case.verdict_with_error && first_error.is_ok() {
            first_error = Err(report.name.clone());
        }
    }

    first_error
}
