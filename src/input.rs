use std::io;
use std::path::Path;

use colored::Colorize;
use console::{Key, Term};
use dialoguer::theme::{ColorfulTheme, Theme};

use crate::core::{CleanError, Console};

/// Console backed by the controlling terminal.
///
/// Questions are answered with a single keypress: `y` accepts, any other key
/// declines. Without a terminal every question is declined.
pub struct TerminalConsole {
    theme: ColorfulTheme,
    term: Term,
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
        }
    }
}

fn accepts(key: &Key) -> bool {
    matches!(key, Key::Char('y' | 'Y'))
}

impl TerminalConsole {
    fn render(&self, prompt: &str, answer: Option<bool>) -> Result<String, CleanError> {
        let mut rendered = String::new();
        let written = match answer {
            None => self
                .theme
                .format_confirm_prompt(&mut rendered, prompt, Some(false)),
            Some(_) => self
                .theme
                .format_confirm_prompt_selection(&mut rendered, prompt, answer),
        };
        written.map_err(|e| CleanError::Terminal(io::Error::other(e)))?;
        Ok(rendered)
    }
}

impl Console for TerminalConsole {
    fn confirm(&mut self, prompt: &str) -> Result<bool, CleanError> {
        let question = self.render(prompt, None)?;
        self.term.write_str(&question).map_err(CleanError::Terminal)?;

        let key = self.term.read_key().map_err(CleanError::Terminal)?;
        let answer = accepts(&key);

        let summary = self.render(prompt, Some(answer))?;
        self.term.clear_line().map_err(CleanError::Terminal)?;
        self.term.write_line(&summary).map_err(CleanError::Terminal)?;
        Ok(answer)
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }

    fn announce_removal(&mut self, path: &Path) {
        println!("{} {}", "DELETING:".red().bold(), path.display());
    }
}
