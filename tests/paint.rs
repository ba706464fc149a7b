use int_code_procs::{
    int_code::read_int_code,
    paint::{self, Color, Panel, PaintRobot},
};

#[test]
fn paint_panels_from_black_hull() {
    let int_code = read_int_code("tests/data/paint.txt").unwrap();
    let mut robot = PaintRobot::new();
    paint::run_robot(&int_code, &mut robot, paint::MAX_ROBOT_TURNS).unwrap();

    assert_eq!(robot.paint_count(), 7);
    assert_eq!(robot.painted_panels(), 6);
    assert_eq!(robot.position(), Panel { x: 0, y: 1 });
    assert_eq!(robot.color(Panel { x: 0, y: 0 }), Color::Black);
    assert_eq!(robot.color(Panel { x: 1, y: 1 }), Color::White);
    assert_eq!(robot.color(Panel { x: 5, y: 5 }), Color::Black);

    assert_eq!(
        paint::count_painted_panels(&int_code, Color::Black).unwrap(),
        6
    );
}

#[test]
fn robot_reads_color_under_it() {
    // Paint the current panel with the color read from it.
    let echo = [3, 100, 4, 100, 104, 1, 99];

    let mut robot = PaintRobot::with_start_color(Color::White);
    paint::run_robot(&echo, &mut robot, 10).unwrap();
    assert_eq!(robot.color(Panel { x: 0, y: 0 }), Color::White);
    assert_eq!(robot.position(), Panel { x: 1, y: 0 });

    let mut robot = PaintRobot::new();
    paint::run_robot(&echo, &mut robot, 10).unwrap();
    assert_eq!(robot.color(Panel { x: 0, y: 0 }), Color::Black);
    assert_eq!(robot.painted_panels(), 1);
}

#[test]
fn bad_robot_commands() {
    assert!(matches!(
        paint::count_painted_panels(&[3, 100, 104, 2, 104, 0, 99], Color::Black),
        Err(paint::Error::InvalidPaintColor(2))
    ));
    assert!(matches!(
        paint::count_painted_panels(&[3, 100, 104, 1, 104, 5, 99], Color::Black),
        Err(paint::Error::InvalidTurnDirection(5))
    ));
    assert!(matches!(
        paint::count_painted_panels(&[3, 100, 104, 1, 99], Color::Black),
        Err(paint::Error::InvalidCommand(c)) if c == vec![1]
    ));
    assert!(matches!(
        paint::count_painted_panels(&[3, 100, 42], Color::Black),
        Err(paint::Error::ExecutionError(_))
    ));

    let mut robot = PaintRobot::new();
    assert!(matches!(
        paint::run_robot(&[3, 100, 1105, 1, 0], &mut robot, 5),
        Err(paint::Error::RanTooLong(5))
    ));
}
