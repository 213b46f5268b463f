// prompt.rs - Overwrite confirmation

use std::io::{self, BufRead, Write};
use std::path::Path;

/// Asks whether an existing destination may be replaced
pub trait OverwritePrompt {
    fn confirm_overwrite(&mut self, source: &Path, new_name: &str) -> Result<bool, String>;
}

impl<P: OverwritePrompt + ?Sized> OverwritePrompt for &mut P {
    fn confirm_overwrite(&mut self, source: &Path, new_name: &str) -> Result<bool, String> {
        (**self).confirm_overwrite(source, new_name)
    }
}

/// Prompt over an arbitrary reader/writer pair.
///
/// `ConsolePrompt::stdio()` is the interactive one used by the binary.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> OverwritePrompt for ConsolePrompt<R, W> {
    fn confirm_overwrite(&mut self, source: &Path, new_name: &str) -> Result<bool, String> {
        write!(
            self.output,
            "    Renaming '{}' will overwrite '{}'.  Overwrite?  [Y/N] ",
            source.display(),
            new_name
        )
        .map_err(|e| format!("Write error: {}", e))?;
        self.output.flush().map_err(|e| format!("Flush error: {}", e))?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .map_err(|e| format!("Failed to read answer: {}", e))?;
        if read == 0 {
            // EOF: nobody is there to say yes
            writeln!(self.output).map_err(|e| format!("Write error: {}", e))?;
            return Ok(false);
        }

        Ok(is_affirmative(&answer))
    }
}

fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> (bool, String) {
        let mut output = Vec::new();
        let answer = {
            let mut prompt = ConsolePrompt::new(Cursor::new(input.as_bytes()), &mut output);
            prompt
                .confirm_overwrite(Path::new("dir/a.txt"), "b.txt")
                .unwrap()
        };
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_yes_answers() {
        assert!(ask("y\n").0);
        assert!(ask("Y\r\n").0);
        assert!(ask("  yes \n").0);
    }

    #[test]
    fn test_other_answers_decline() {
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("yep\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn test_prompt_text() {
        let (_, text) = ask("n\n");
        assert_eq!(
            text,
            "    Renaming 'dir/a.txt' will overwrite 'b.txt'.  Overwrite?  [Y/N] "
        );
    }
}
