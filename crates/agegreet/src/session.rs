//! The interactive session script.
//!
//! Five fixed steps in order: read the name, read the age, greet, restate
//! the age, print the classification line. No state survives the run.

use crate::bracket::AgeBracket;
use crate::errors::InputError;
use crate::prompt;
use std::io::{BufRead, Write};
use tracing::debug;

/// What a completed session observed and decided.
#[derive(Debug)]
pub struct SessionOutcome {
    pub name: String,
    pub age: i64,
    pub bracket: AgeBracket,
}

/// Run one interaction from first prompt to classification line.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<SessionOutcome, InputError> {
    let name = prompt::read_name(input, output)?;
    let age = prompt::read_age(input, output)?;

    debug!(%name, age, "input collected");

    let bracket = AgeBracket::classify(age);

    writeln!(output)?;
    writeln!(output, "Hello, {}!", name)?;
    writeln!(output, "You are {} years old.", age)?;
    writeln!(output, "{}", bracket.message())?;

    Ok(SessionOutcome { name, age, bracket })
}
