use std::io::{self, BufRead, Write};

use console::Term;
use portal_application::commands::admin_registration_commands::Confirmation;

/// Interactive side of the terminal: questions go to stderr so stdout stays
/// clean for command output.
pub trait Terminal: Confirmation {
    fn ask(&self, label: &str) -> io::Result<String>;

    /// Reads a password. Terminals that can hide input override this.
    fn ask_secret(&self, label: &str) -> io::Result<String> {
        self.ask(label)
    }

    fn notice(&self, message: &str);
}

pub struct StdinTerminal;

impl Terminal for StdinTerminal {
    fn ask(&self, label: &str) -> io::Result<String> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{}", label)?;
        stderr.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask_secret(&self, label: &str) -> io::Result<String> {
        let term = Term::stderr();
        // Piped input has no echo to hide.
        if !term.is_term() {
            return self.ask(label);
        }
        term.write_str(label)?;
        term.flush()?;
        term.read_secure_line()
    }

    fn notice(&self, message: &str) {
        eprintln!("{}", message);
    }
}

impl Confirmation for StdinTerminal {
    fn confirm(&self, prompt: &str) -> bool {
        match self.ask(&format!("{} [y/N] ", prompt)) {
            Ok(answer) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
