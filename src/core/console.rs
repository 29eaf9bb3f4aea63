use std::path::Path;

use super::error::CleanError;

/// The pruner's view of the user: ask a yes/no question, print a line.
pub trait Console {
    fn confirm(&mut self, prompt: &str) -> Result<bool, CleanError>;

    fn say(&mut self, line: &str);

    fn announce_removal(&mut self, path: &Path) {
        self.say(&format!("DELETING: {}", path.display()));
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned answers and records everything said.
    #[derive(Default)]
    pub struct ScriptedConsole {
        pub answers: VecDeque<bool>,
        pub prompts: Vec<String>,
        pub lines: Vec<String>,
    }

    impl ScriptedConsole {
        pub fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Self::default()
            }
        }

        pub fn said(&self, needle: &str) -> bool {
            self.lines.iter().any(|l| l.contains(needle))
        }
    }

    impl Console for ScriptedConsole {
        fn confirm(&mut self, prompt: &str) -> Result<bool, CleanError> {
            self.prompts.push(prompt.to_string());
            Ok(self.answers.pop_front().unwrap_or(false))
        }

        fn say(&mut self, line: &str) {
            self.lines.push(line.to_string());
        }
    }
}
