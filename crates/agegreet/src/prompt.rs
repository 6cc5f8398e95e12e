//! Interactive prompt helpers.
//!
//! Each helper writes its prompt, flushes, then reads from the paired
//! reader. Generic over `BufRead`/`Write` so tests can drive them with
//! `Cursor` and `Vec<u8>`.

use crate::errors::InputError;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

/// Prompt for and read one full line of text.
///
/// The trailing line break is stripped; interior whitespace is kept
/// verbatim. End of stream before any text yields the empty string,
/// not a failure.
pub fn read_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String, InputError> {
    write!(output, "Enter your name: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Prompt for and read one whitespace-delimited token as a signed age.
///
/// A token that does not parse as an integer gets a warning line and a
/// fresh prompt. A blank line re-prompts silently, the way a
/// token-oriented read skips leading whitespace. End of stream before
/// any token has been read is an error.
pub fn read_age<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64, InputError> {
    loop {
        write!(output, "Enter your age: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::InputClosed);
        }

        let Some(token) = line.split_whitespace().next() else {
            continue;
        };

        match parse_age(token) {
            Ok(age) => return Ok(age),
            Err(err) => {
                writeln!(output, "   {}  {}, please try again", "!".yellow(), err)?;
            }
        }
    }
}

/// Parse a single token as a signed integer age.
pub fn parse_age(token: &str) -> Result<i64, InputError> {
    token.parse::<i64>().map_err(|_| InputError::NotAnInteger {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_name_plain() {
        let mut input = Cursor::new("Ada\n");
        let mut output = Vec::new();
        let name = read_name(&mut input, &mut output).unwrap();
        assert_eq!(name, "Ada");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter your name: ");
    }

    #[test]
    fn test_read_name_keeps_interior_spaces() {
        let mut input = Cursor::new("Mary Jane Watson\n");
        let mut output = Vec::new();
        let name = read_name(&mut input, &mut output).unwrap();
        assert_eq!(name, "Mary Jane Watson");
    }

    #[test]
    fn test_read_name_empty_stream_yields_empty_string() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let name = read_name(&mut input, &mut output).unwrap();
        assert_eq!(name, "");
    }

    #[test]
    fn test_read_name_strips_crlf() {
        let mut input = Cursor::new("Ada\r\n");
        let mut output = Vec::new();
        let name = read_name(&mut input, &mut output).unwrap();
        assert_eq!(name, "Ada");
    }

    #[test]
    fn test_read_age_valid_token() {
        let mut input = Cursor::new("30\n");
        let mut output = Vec::new();
        let age = read_age(&mut input, &mut output).unwrap();
        assert_eq!(age, 30);
        assert_eq!(String::from_utf8(output).unwrap(), "Enter your age: ");
    }

    #[test]
    fn test_read_age_surrounding_whitespace() {
        let mut input = Cursor::new("  42 \n");
        let mut output = Vec::new();
        assert_eq!(read_age(&mut input, &mut output).unwrap(), 42);
    }

    #[test]
    fn test_read_age_negative() {
        let mut input = Cursor::new("-5\n");
        let mut output = Vec::new();
        assert_eq!(read_age(&mut input, &mut output).unwrap(), -5);
    }

    #[test]
    fn test_read_age_malformed_then_valid() {
        let mut input = Cursor::new("abc\n30\n");
        let mut output = Vec::new();
        let age = read_age(&mut input, &mut output).unwrap();
        assert_eq!(age, 30);

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("'abc' is not a whole number"));
        // Prompt re-issued after the warning.
        assert_eq!(rendered.matches("Enter your age: ").count(), 2);
    }

    #[test]
    fn test_read_age_blank_line_reprompts_silently() {
        let mut input = Cursor::new("\n19\n");
        let mut output = Vec::new();
        let age = read_age(&mut input, &mut output).unwrap();
        assert_eq!(age, 19);

        let rendered = String::from_utf8(output).unwrap();
        assert!(!rendered.contains("is not a whole number"));
        assert_eq!(rendered.matches("Enter your age: ").count(), 2);
    }

    #[test]
    fn test_read_age_closed_stream() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = read_age(&mut input, &mut output).unwrap_err();
        assert!(matches!(err, InputError::InputClosed));
    }

    #[test]
    fn test_parse_age_rejects_partial_numbers() {
        // A token is the whole non-whitespace run; "12x" is not an
        // integer even though it starts with digits.
        assert!(parse_age("12x").is_err());
        assert!(parse_age("").is_err());
        assert_eq!(parse_age("0").unwrap(), 0);
        assert_eq!(parse_age("-17").unwrap(), -17);
    }
}
