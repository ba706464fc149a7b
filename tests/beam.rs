use int_code_procs::{
    beam::{self, Point},
    int_code::read_int_code,
};

#[test]
fn beam_cone() {
    // The beam covers every point with x <= y.
    let int_code = read_int_code("tests/data/beam.txt").unwrap();
    assert!(beam::is_pulled(&int_code, Point { x: 3, y: 3 }).unwrap());
    assert!(!beam::is_pulled(&int_code, Point { x: 4, y: 3 }).unwrap());
    assert_eq!(beam::count_affected_points(&int_code, 0..10, 0..10).unwrap(), 55);
    assert_eq!(beam::count_affected_points(&int_code, 5..10, 0..5).unwrap(), 0);
}

#[test]
fn bad_drone_results() {
    assert!(matches!(
        beam::count_affected_points(&[3, 100, 3, 101, 104, 2, 99], 0..2, 0..2),
        Err(beam::Error::InvalidDroneResult(_, 2))
    ));
    assert!(matches!(
        beam::is_pulled(&[3, 100, 3, 101, 99], Point { x: 1, y: 2 }),
        Err(beam::Error::EmptyDroneResult(Point { x: 1, y: 2 }))
    ));
    assert!(matches!(
        beam::is_pulled(&[3, 100, 3, 101, 42], Point { x: 0, y: 0 }),
        Err(beam::Error::ExecutionError(_, _))
    ));
}
