//! Interactive terminal prompts.
//!
//! The selection loop and the station resolver ask questions through the
//! [`Prompter`] trait, so tests can drive them with scripted input.

use std::io::{self, BufRead, StdinLock, Write};

/// Answer to a prompt, or the user closing the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply<T> {
    Answer(T),
    Abort,
}

/// Asks the user questions.
///
/// Prompts are written to `out` so they interleave correctly with the
/// rest of the command's output.
pub trait Prompter {
    /// Yes/no question, defaulting to no.
    fn confirm(&mut self, out: &mut dyn Write, question: &str) -> io::Result<Reply<bool>>;

    /// Ask for an integer, re-asking until one is given.
    fn integer(&mut self, out: &mut dyn Write, question: &str) -> io::Result<Reply<i64>>;
}

/// Prompter reading answers line by line.
#[derive(Debug)]
pub struct LinePrompter<R> {
    input: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Next trimmed line, `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl LinePrompter<StdinLock<'static>> {
    /// Prompter on the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn confirm(&mut self, out: &mut dyn Write, question: &str) -> io::Result<Reply<bool>> {
        loop {
            write!(out, "{question} [y/N]: ")?;
            out.flush()?;

            let Some(answer) = self.read_answer()? else {
                writeln!(out)?;
                return Ok(Reply::Abort);
            };

            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(Reply::Answer(true)),
                "" | "n" | "no" => return Ok(Reply::Answer(false)),
                _ => writeln!(out, "Error: invalid input")?,
            }
        }
    }

    fn integer(&mut self, out: &mut dyn Write, question: &str) -> io::Result<Reply<i64>> {
        loop {
            write!(out, "{question}: ")?;
            out.flush()?;

            let Some(answer) = self.read_answer()? else {
                writeln!(out)?;
                return Ok(Reply::Abort);
            };

            match answer.parse::<i64>() {
                Ok(n) => return Ok(Reply::Answer(n)),
                Err(_) => writeln!(out, "Error: '{answer}' is not a valid integer.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn confirm_answers() {
        let mut out = Vec::new();
        let mut p = prompter("y\nNo\n\nYES\n");

        assert_eq!(p.confirm(&mut out, "Go?").unwrap(), Reply::Answer(true));
        assert_eq!(p.confirm(&mut out, "Go?").unwrap(), Reply::Answer(false));
        assert_eq!(p.confirm(&mut out, "Go?").unwrap(), Reply::Answer(false));
        assert_eq!(p.confirm(&mut out, "Go?").unwrap(), Reply::Answer(true));
        assert!(String::from_utf8(out).unwrap().starts_with("Go? [y/N]: "));
    }

    #[test]
    fn confirm_reasks_on_garbage() {
        let mut out = Vec::new();
        let mut p = prompter("maybe\ny\n");

        assert_eq!(p.confirm(&mut out, "Go?").unwrap(), Reply::Answer(true));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Go? [y/N]: ").count(), 2);
        assert!(text.contains("Error: invalid input"));
    }

    #[test]
    fn integer_reasks_until_valid() {
        let mut out = Vec::new();
        let mut p = prompter("two\n 2 \n");

        assert_eq!(p.integer(&mut out, "Which?").unwrap(), Reply::Answer(2));
        assert!(
            String::from_utf8(out)
                .unwrap()
                .contains("Error: 'two' is not a valid integer.")
        );
    }

    #[test]
    fn negative_integers_parse() {
        let mut out = Vec::new();
        assert_eq!(
            prompter("-1\n").integer(&mut out, "Which?").unwrap(),
            Reply::Answer(-1)
        );
    }

    #[test]
    fn end_of_input_aborts() {
        let mut out = Vec::new();
        assert_eq!(prompter("").confirm(&mut out, "Go?").unwrap(), Reply::Abort);
        assert_eq!(prompter("abc\n").integer(&mut out, "Which?").unwrap(), Reply::Abort);
    }
}
