use int_code_procs::{
    int_code::{parse_int_code, read_int_code, run_to_completion, IntCodeComputer, ProcessState},
    Error,
};

fn final_image(int_code: &[i64]) -> Vec<i64> {
    let mut computer = IntCodeComputer::new(int_code);
    computer.finish(&[]).unwrap();
    Vec::from(computer.image())
}

#[test]
fn arithmetic_programs_leave_expected_memory() {
    assert_eq!(
        final_image(&[1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]),
        vec![3500, 9, 10, 70, 2, 3, 11, 0, 99, 30, 40, 50]
    );
    assert_eq!(final_image(&[1, 0, 0, 0, 99]), vec![2, 0, 0, 0, 99]);
    assert_eq!(final_image(&[2, 3, 0, 3, 99]), vec![2, 3, 0, 6, 99]);
    assert_eq!(final_image(&[2, 4, 4, 5, 99, 0]), vec![2, 4, 4, 5, 99, 9801]);
    assert_eq!(
        final_image(&[1, 1, 1, 4, 99, 5, 6, 0, 99]),
        vec![30, 1, 1, 4, 2, 5, 6, 0, 99]
    );
}

#[test]
fn echo_input() {
    assert_eq!(run_to_completion(&[3, 0, 4, 0, 99], &[17]).unwrap(), vec![17]);
}

#[test]
fn immediate_mode_and_negative_values() {
    assert!(run_to_completion(&[1002, 4, 3, 4, 33], &[])
        .unwrap()
        .is_empty());
    assert_eq!(final_image(&[1101, 100, -1, 4, 0]), vec![1101, 100, -1, 4, 99]);
}

#[test]
fn compare_with_eight() {
    let equal_position = [3, 9, 8, 9, 10, 9, 4, 9, 99, -1, 8];
    let less_immediate = [3, 3, 1107, -1, 8, 3, 4, 3, 99];
    assert_eq!(run_to_completion(&equal_position, &[8]).unwrap(), vec![1]);
    assert_eq!(run_to_completion(&equal_position, &[6]).unwrap(), vec![0]);
    assert_eq!(run_to_completion(&equal_position, &[9]).unwrap(), vec![0]);
    assert_eq!(run_to_completion(&less_immediate, &[7]).unwrap(), vec![1]);
    assert_eq!(run_to_completion(&less_immediate, &[8]).unwrap(), vec![0]);

    let int_code = read_int_code("tests/data/compare_eight.txt").unwrap();
    assert_eq!(run_to_completion(&int_code, &[7]).unwrap(), vec![999]);
    assert_eq!(run_to_completion(&int_code, &[8]).unwrap(), vec![1000]);
    assert_eq!(run_to_completion(&int_code, &[9]).unwrap(), vec![1001]);
}

#[test]
fn jumps() {
    let position = [3, 12, 6, 12, 15, 1, 13, 14, 13, 4, 13, 99, -1, 0, 1, 9];
    let immediate = [3, 3, 1105, -1, 9, 1101, 0, 0, 12, 4, 12, 99, 1];
    for int_code in [&position[..], &immediate[..]] {
        assert_eq!(run_to_completion(int_code, &[0]).unwrap(), vec![0]);
        assert_eq!(run_to_completion(int_code, &[5]).unwrap(), vec![1]);
    }
}

#[test]
fn relative_mode_quine() {
    let int_code = read_int_code("tests/data/quine.txt").unwrap();
    assert_eq!(run_to_completion(&int_code, &[]).unwrap(), int_code);
}

#[test]
fn large_numbers() {
    let outputs = run_to_completion(&[104, 1125899906842624, 99], &[]).unwrap();
    assert_eq!(outputs, vec![1125899906842624]);

    let outputs = run_to_completion(&[1102, 34915192, 34915192, 7, 4, 7, 99, 0], &[]).unwrap();
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].to_string().len(), 16);
}

#[test]
fn far_relative_write_stays_sparse() {
    let int_code = [109, 100000, 21101, 3, 4, 0, 204, 0, 99];
    let mut computer = IntCodeComputer::new(&int_code);
    assert_eq!(computer.finish(&[]).unwrap(), vec![7]);
    assert_eq!(computer.rel_base(), 100000);
    assert_eq!(computer.read_mem(100000), 7);
    assert_eq!(computer.read_mem(99999), 0);
    assert_eq!(computer.image().len(), int_code.len());
}

#[test]
fn unused_mode_digits_are_ignored() {
    assert_eq!(run_to_completion(&[30104, 5, 99], &[]).unwrap(), vec![5]);
}

#[test]
fn suspend_on_input_and_resume() {
    let mut computer = IntCodeComputer::new(&[3, 0, 4, 0, 99]);
    assert_eq!(computer.state(), ProcessState::Ready);

    let res = computer.resume(&[]).unwrap();
    assert!(res.outputs.is_empty());
    assert!(!res.halted);
    assert_eq!(computer.state(), ProcessState::Block);
    assert_eq!(computer.inst_p(), 0);

    assert!(matches!(
        computer.resume(&[]),
        Err(Error::StarvedInput { inst_p: 0 })
    ));

    let res = computer.resume(&[17]).unwrap();
    assert_eq!(res.outputs, vec![17]);
    assert!(res.halted);
    assert!(computer.is_halt());
    assert_eq!(computer.step_count(), 3);

    assert!(matches!(
        computer.resume(&[1]),
        Err(Error::ResumeHaltedProcess)
    ));
}

#[test]
fn outputs_are_collected_per_resume() {
    let mut computer = IntCodeComputer::new(&[3, 20, 4, 20, 104, 0, 3, 20, 4, 20, 99]);
    assert_eq!(computer.resume(&[5]).unwrap().outputs, vec![5, 0]);
    let res = computer.resume(&[6]).unwrap();
    assert_eq!(res.outputs, vec![6]);
    assert!(res.halted);
}

#[test]
fn leftover_inputs_are_kept_for_later() {
    let mut computer = IntCodeComputer::new(&[3, 20, 4, 20, 3, 20, 4, 20, 99]);
    let res = computer.resume(&[1, 2]).unwrap();
    assert_eq!(res.outputs, vec![1, 2]);
    assert!(res.halted);
}

#[test]
fn completion_requires_halt() {
    assert!(matches!(
        run_to_completion(&[3, 0, 3, 1, 99], &[1]),
        Err(Error::ExpectMoreInput { inst_p: 2 })
    ));
}

#[test]
fn same_program_same_outputs() {
    let int_code = read_int_code("tests/data/compare_eight.txt").unwrap();
    let first = run_to_completion(&int_code, &[8]).unwrap();
    let second = run_to_completion(&int_code, &[8]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn faults() {
    assert!(matches!(
        run_to_completion(&[1, 0, 0, 0, 42], &[]),
        Err(Error::UnsupportedOpcode {
            inst_p: 4,
            opcode: 42,
            ..
        })
    ));
    assert!(matches!(
        run_to_completion(&[11101, 1, 1, 5, 99], &[]),
        Err(Error::ImmediateDestination {
            inst_p: 0,
            param: 5
        })
    ));
    assert!(matches!(
        run_to_completion(&[301, 0, 0, 0, 99], &[]),
        Err(Error::InvalidMode { inst_p: 0, mode: 3 })
    ));
    assert!(matches!(
        run_to_completion(&[1, -1, 0, 0, 99], &[]),
        Err(Error::OutOfBounds {
            inst_p: 0,
            addr: -1
        })
    ));
    assert!(matches!(
        run_to_completion(&[1105, 1, -5], &[]),
        Err(Error::OutOfBounds {
            inst_p: 0,
            addr: -5
        })
    ));
    assert!(matches!(
        run_to_completion(&[204, -3, 99], &[]),
        Err(Error::OutOfBounds { .. })
    ));
}

#[test]
fn parse_program_text() {
    assert_eq!(parse_int_code(" 1,0, -3,99\n").unwrap(), vec![1, 0, -3, 99]);
    assert!(matches!(parse_int_code("\n"), Err(Error::EmptyError)));
    assert!(matches!(
        parse_int_code("1,x,99"),
        Err(Error::ParseIntError(s)) if s == "x"
    ));
    assert!(matches!(
        read_int_code("tests/data/missing.txt"),
        Err(Error::IOError(_))
    ));
}
