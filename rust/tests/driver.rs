use timed_relax::{run, run_once, Config, Outcome};

fn report(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out).unwrap().lines().map(str::to_owned).collect()
}

fn elapsed(line: &str) -> u64 {
    line.strip_suffix("ms")
        .unwrap_or_else(|| panic!("not a timing line: {:?}", line))
        .parse()
        .unwrap()
}

#[test]
fn empty_matrix_completes() {
    let mut out = Vec::new();
    let outcome = run_once(0, relax::DEFAULT_SEED, &mut out).unwrap();
    assert_eq!(outcome, Outcome::Completed { flag: true });
    let lines = report(out);
    assert_eq!(lines.len(), 2);
    elapsed(&lines[0]);
    assert_eq!(lines[1], "1");
}

#[test]
fn negative_size_reports_exception() {
    let mut out = Vec::new();
    let outcome = run_once(-1, relax::DEFAULT_SEED, &mut out).unwrap();
    assert_eq!(outcome, Outcome::Exception);
    let lines = report(out);
    assert_eq!(lines.len(), 2);
    elapsed(&lines[0]);
    assert_eq!(lines[1], "exception");
}

#[test]
fn oversized_matrix_reports_exception() {
    let mut out = Vec::new();
    let outcome = run_once(i32::MAX, relax::DEFAULT_SEED, &mut out).unwrap();
    assert!(outcome.is_exception());
    assert_eq!(report(out)[1], "exception");
}

#[test]
fn fifty_completes() {
    let mut out = Vec::new();
    let outcome = run_once(50, 11, &mut out).unwrap();
    assert_eq!(outcome, Outcome::Completed { flag: true });
    let lines = report(out);
    assert_eq!(lines.len(), 2);
    elapsed(&lines[0]);
    assert_eq!(lines[1], "1");
}

#[test]
fn default_config_is_the_failing_case() {
    let mut out = Vec::new();
    let outcomes = run(&Config::default(), &mut out).unwrap();
    assert_eq!(outcomes, vec![Outcome::Exception]);
    assert_eq!(report(out)[1], "exception");
}

#[test]
fn iterations_repeat_the_report() {
    let config = Config { size: 8, iterations: 3, ..Config::default() };
    let mut out = Vec::new();
    let outcomes = run(&config, &mut out).unwrap();
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| *o == Outcome::Completed { flag: true }));
    let lines = report(out);
    assert_eq!(lines.len(), 6);
    for pair in lines.chunks(2) {
        elapsed(&pair[0]);
        assert_eq!(pair[1], "1");
    }
}
