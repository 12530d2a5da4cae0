use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use dialoguer::Input;

use crate::domain::AppError;
use crate::ports::Console;

const INVALID_INPUT_PAUSE: Duration = Duration::from_secs(1);

/// Console on the process's stdin/stdout.
///
/// Uses dialoguer line editing on a terminal and plain line reads otherwise,
/// so answers can be piped in.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn show(&mut self, line: &str) {
        println!("{line}");
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        if io::stdin().is_terminal() && io::stdout().is_terminal() {
            return Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| AppError::Io(io::Error::other(format!("Failed to read input: {e}"))));
        }

        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("No input for '{prompt}'"),
            )));
        }
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }

    fn pause(&mut self) {
        thread::sleep(INVALID_INPUT_PAUSE);
    }
}
