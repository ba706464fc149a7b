use crate::{int_code::IntCodeComputer, Error};

pub const NOUN_VERB_RANGE: std::ops::RangeInclusive<i64> = 0..=99;

/// Put `noun` and `verb` into addresses 1 and 2, run to halt, and return
/// address 0.
pub fn run_with_patch(int_code: &[i64], noun: i64, verb: i64) -> Result<i64, Error> {
    let mut image = Vec::from(int_code);
    if image.len() < 3 {
        image.resize(3, 0);
    }
    image[1] = noun;
    image[2] = verb;

    let mut computer = IntCodeComputer::new(&image);
    computer.finish(&[])?;
    Ok(computer.read_mem(0))
}

/// Search nouns then verbs in ascending order for the first pair making the
/// program leave `goal` at address 0. A fault in any run stops the search.
pub fn find_noun_verb(int_code: &[i64], goal: i64) -> Result<Option<(i64, i64)>, Error> {
    for noun in NOUN_VERB_RANGE {
        for verb in NOUN_VERB_RANGE {
            if run_with_patch(int_code, noun, verb)? == goal {
                return Ok(Some((noun, verb)));
            }
        }
    }

    Ok(None)
}
