use alloc::string::String;
use serde::{Deserialize, Serialize};

const ITALIC_OPEN: &str = "<i>";
const ITALIC_CLOSE: &str = "</i>";

/// What a board cell currently shows.
///
/// States only move forward: `Hidden -> Question -> Answer`, and `Answer` is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Question/answer pair exactly as a clue source supplied it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClue {
    pub question: String,
    pub answer: String,
}

impl RawClue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Outcome of a reveal event on a single clue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome<'a> {
    NoChange,
    ShowQuestion(&'a str),
    ShowAnswer(&'a str),
}

impl<'a> RevealOutcome<'a> {
    /// Whether the cell needs to be redrawn
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::ShowQuestion(_) => true,
            Self::ShowAnswer(_) => true,
        }
    }

    /// Text the cell should now display, `None` means leave it as is
    pub const fn display_text(self) -> Option<&'a str> {
        match self {
            Self::NoChange => None,
            Self::ShowQuestion(text) | Self::ShowAnswer(text) => Some(text),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    reveal_state: RevealState,
}

impl Clue {
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal_state
    }

    /// Advance the clue one step and report what to display.
    pub fn reveal(&mut self) -> RevealOutcome<'_> {
        use RevealState::*;

        match self.reveal_state {
            Hidden => {
                self.reveal_state = Question;
                log::trace!("Clue moved to question");
                RevealOutcome::ShowQuestion(&self.question)
            }
            Question => {
                self.reveal_state = Answer;
                log::trace!("Clue moved to answer");
                RevealOutcome::ShowAnswer(&self.answer)
            }
            Answer => RevealOutcome::NoChange,
        }
    }
}

impl From<RawClue> for Clue {
    fn from(raw: RawClue) -> Self {
        normalize(raw)
    }
}

/// Strips a single `<i>...</i>` wrapper around the whole answer, nothing else.
fn strip_italic_wrapper(answer: &str) -> Option<&str> {
    answer
        .strip_prefix(ITALIC_OPEN)?
        .strip_suffix(ITALIC_CLOSE)
}

/// Turns a raw source clue into a fresh, hidden board clue.
pub fn normalize(raw: RawClue) -> Clue {
    let RawClue { question, answer } = raw;
    let answer = match strip_italic_wrapper(&answer) {
        Some(inner) => inner.into(),
        None => answer,
    };
    Clue {
        question,
        answer,
        reveal_state: RevealState::Hidden,
    }
}
