//! Command-line front end
//!
//! `anagram <word>` prints the number of anagrams of `word`.

use crate::anagram::{self, WordError};
use std::io::{self, Write};

/// Exit code for a successful run (including the `empty` case)
pub const EXIT_OK: i32 = 0;
/// Exit code for a wrong argument count or a non-alphabetic word
pub const EXIT_INVALID: i32 = 1;

/// Run the CLI over the arguments that follow the program name
///
/// Output goes to the given writers so the behavior can be checked without
/// a subprocess. Returns the process exit code.
pub fn run<I, S, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> io::Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    O: Write,
    E: Write,
{
    let mut args = args.into_iter();
    let (Some(word), None) = (args.next(), args.next()) else {
        writeln!(stderr, "invalid")?;
        return Ok(EXIT_INVALID);
    };

    match anagram::validate_word(word.as_ref()) {
        Ok(word) => {
            writeln!(stdout, "{}", anagram::count_anagrams(word))?;
            Ok(EXIT_OK)
        }
        Err(WordError::Empty) => {
            writeln!(stdout, "empty")?;
            Ok(EXIT_OK)
        }
        Err(WordError::NotAlphabetic) => {
            writeln!(stderr, "invalid")?;
            Ok(EXIT_INVALID)
        }
    }
}
