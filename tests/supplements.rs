use int_code_procs::{diag, gravity, int_code::read_int_code, Error};

#[test]
fn gravity_assist_patch() {
    let int_code = read_int_code("tests/data/gravity.txt").unwrap();
    assert_eq!(gravity::run_with_patch(&int_code, 9, 10).unwrap(), 3500);
    assert_eq!(gravity::run_with_patch(&int_code, 12, 2).unwrap(), 100);
}

#[test]
fn gravity_assist_search() {
    let int_code = read_int_code("tests/data/gravity.txt").unwrap();
    assert_eq!(
        gravity::find_noun_verb(&int_code, 3500).unwrap(),
        Some((2, 70))
    );
    assert_eq!(gravity::find_noun_verb(&[99], 1).unwrap(), None);
}

#[test]
fn gravity_assist_search_stops_at_fault() {
    assert!(matches!(
        gravity::find_noun_verb(&[42, 0, 0, 0, 99], 0),
        Err(Error::UnsupportedOpcode {
            inst_p: 0,
            opcode: 42,
            ..
        })
    ));
}

#[test]
fn diagnostic_code() {
    let int_code = read_int_code("tests/data/compare_eight.txt").unwrap();
    assert_eq!(diag::run_diagnostic(&int_code, 5).unwrap(), 999);
    assert_eq!(diag::run_diagnostic(&int_code, 8).unwrap(), 1000);

    assert_eq!(diag::run_diagnostic(&[104, 0, 104, 0, 104, 42, 99], 1).unwrap(), 42);
}

#[test]
fn diagnostic_failures() {
    assert!(matches!(
        diag::run_diagnostic(&[104, 0, 104, 3, 104, 42, 99], 1),
        Err(diag::Error::FailedCheck { ind: 1, value: 3 })
    ));
    assert!(matches!(
        diag::run_diagnostic(&[3, 0, 99], 1),
        Err(diag::Error::NoOutput)
    ));
    assert!(matches!(
        diag::run_diagnostic(&[3, 0, 3, 0, 99], 1),
        Err(diag::Error::ExecutionError(_))
    ));
}
