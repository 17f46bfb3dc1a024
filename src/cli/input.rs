//! REPL line parsing

use pharmqa_core::Subject;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Submit this text as the question.
    Ask(String),
    /// Empty line: submit the pending question again.
    Resubmit,
    /// `/subject` alone lists subjects; with an argument it selects one.
    Subject(Option<Subject>),
    Reset,
    Again,
    Examples,
    History,
    Question,
    Help,
    Quit,
    /// A slash command that could not be understood, with the reason.
    Invalid(String),
}

/// Collects one REPL entry. A line ending in `\` continues on the next line.
#[derive(Debug, Default)]
pub struct EntryBuffer {
    text: String,
}

impl EntryBuffer {
    /// Add a raw input line. Returns `true` once the entry is complete.
    pub fn push(&mut self, line: &str) -> bool {
        let line = line.trim_end_matches(['\n', '\r']);
        match line.trim_end().strip_suffix('\\') {
            Some(head) => {
                self.text.push_str(head);
                self.text.push('\n');
                false
            }
            None => {
                self.text.push_str(line);
                true
            }
        }
    }

    /// Whether a continuation line is expected.
    pub fn is_continuing(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

pub fn parse_line(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Resubmit;
    }
    let Some(command) = line.strip_prefix('/') else {
        return ReplCommand::Ask(line.to_string());
    };

    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match (name.as_str(), arg) {
        ("subject" | "s", None) => ReplCommand::Subject(None),
        ("subject" | "s", Some(raw)) => match raw.parse::<Subject>() {
            Ok(subject) => ReplCommand::Subject(Some(subject)),
            Err(err) => ReplCommand::Invalid(err.to_string()),
        },
        ("reset", _) => ReplCommand::Reset,
        ("again", _) => ReplCommand::Again,
        ("examples", _) => ReplCommand::Examples,
        ("history", _) => ReplCommand::History,
        ("question", _) => ReplCommand::Question,
        ("help" | "h" | "?", _) => ReplCommand::Help,
        ("quit" | "exit" | "q", _) => ReplCommand::Quit,
        (other, _) => ReplCommand::Invalid(format!("unknown command '/{other}' (try /help)")),
    }
}
