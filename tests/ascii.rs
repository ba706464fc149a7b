use int_code_procs::{
    ascii::{self, ScaffoldMap},
    int_code::read_int_code,
    spring::{self, DetectMode, HullReport, Op, Register, SpringInstruction, SpringScript},
};

const CAMERA_VIEW: &str = "\
..#..........
..#..........
#######...###
#.#...#...#.#
#############
..#...#...#..
..#####...^..
";

const WALK_SCRIPT: &str = "\
NOT B T
NOT C J
OR T J
NOT A T
OR T J
AND D J
WALK
";

#[test]
fn ascii_codes() {
    assert_eq!(ascii::encode_ascii("OR A J\n").unwrap(), vec![79, 82, 32, 65, 32, 74, 10]);
    assert_eq!(ascii::decode_ascii(&[70, 69, 76, 76, 10]).unwrap(), "FELL\n");
    assert!(matches!(
        ascii::encode_ascii("é"),
        Err(ascii::Error::NonAsciiInput('é'))
    ));
    assert!(matches!(
        ascii::decode_ascii(&[65, 300]),
        Err(ascii::Error::InvalidAscii(300))
    ));
}

#[test]
fn scaffold_intersections() {
    let map = CAMERA_VIEW.parse::<ScaffoldMap>().unwrap();
    assert_eq!((map.width(), map.height()), (13, 7));
    assert_eq!(map.intersections(), vec![(2, 2), (2, 4), (6, 4), (10, 4)]);
    assert_eq!(map.alignment_sum(), 76);

    assert!(matches!(
        "###\n##\n".parse::<ScaffoldMap>(),
        Err(ascii::Error::InconsistentMapRow(2, 3))
    ));
    assert!(matches!(
        "\n\n".parse::<ScaffoldMap>(),
        Err(ascii::Error::EmptyMap)
    ));
}

#[test]
fn scaffold_from_camera_program() {
    let int_code = read_int_code("tests/data/scaffold.txt").unwrap();
    let map = ascii::scan_scaffold(&int_code).unwrap();
    assert_eq!(map.alignment_sum(), 76);
}

#[test]
fn springscript_text() {
    let script = WALK_SCRIPT.parse::<SpringScript>().unwrap();
    assert_eq!(script.mode(), DetectMode::Walk);
    assert_eq!(script.len(), 6);
    assert_eq!(script.to_string(), WALK_SCRIPT);

    let inst = SpringInstruction::new(Op::Not, Register::H, Register::J).unwrap();
    let script = SpringScript::new(vec![inst], DetectMode::Run).unwrap();
    assert_eq!(script.to_string(), "NOT H J\nRUN\n");
}

#[test]
fn invalid_springscript() {
    assert!(matches!(
        "AND A B\nWALK\n".parse::<SpringScript>(),
        Err(spring::Error::ReadOnlyRegister(Register::B))
    ));
    assert!(matches!(
        "OR E J\nWALK\n".parse::<SpringScript>(),
        Err(spring::Error::SensorOutOfRange(Register::E))
    ));
    assert!(matches!(
        "XOR A J\nWALK\n".parse::<SpringScript>(),
        Err(spring::Error::InvalidInstruction(_))
    ));
    assert!(matches!(
        "OR K J\nRUN\n".parse::<SpringScript>(),
        Err(spring::Error::InvalidInstruction(_))
    ));
    assert!(matches!(
        "NOT A J\n".parse::<SpringScript>(),
        Err(spring::Error::MissingMode)
    ));
    let too_long = "NOT A J\n".repeat(16) + "WALK\n";
    assert!(matches!(
        too_long.parse::<SpringScript>(),
        Err(spring::Error::TooManyInstructions(16))
    ));
}

#[test]
fn hull_survey() {
    // Reports damage for WALK scripts and falls for RUN scripts.
    let int_code = read_int_code("tests/data/spring.txt").unwrap();

    let script = WALK_SCRIPT.parse::<SpringScript>().unwrap();
    assert_eq!(
        spring::survey_hull(&int_code, &script).unwrap(),
        HullReport::Damage(19362259)
    );

    let script = "NOT A J\nRUN\n".parse::<SpringScript>().unwrap();
    assert_eq!(
        spring::survey_hull(&int_code, &script).unwrap(),
        HullReport::Fell("FELL\n".to_string())
    );
}
