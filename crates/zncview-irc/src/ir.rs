use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Formatting state carried by a run of IRC text.
///
/// Values are immutable; every transition returns a new state, leaving the
/// receiver untouched. A freshly constructed state has no colors and no
/// attributes set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleState {
    pub fg_color: Option<u8>,
    pub bg_color: Option<u8>,
    pub is_bold: bool,
    pub has_underline: bool,
}

impl StyleState {
    /// Clears colors and attributes (`^O`).
    pub fn reset(self) -> Self {
        Self::default()
    }

    /// Flips the bold attribute (`^B`), keeping everything else.
    pub fn toggle_bold(self) -> Self {
        Self {
            is_bold: !self.is_bold,
            ..self
        }
    }

    /// Flips the underline attribute (`^_`), keeping everything else.
    pub fn toggle_underline(self) -> Self {
        Self {
            has_underline: !self.has_underline,
            ..self
        }
    }

    /// Replaces both color fields (`^C`).
    ///
    /// A color code always sets both fields: passing `bg = None` clears the
    /// background rather than leaving it unchanged.
    pub fn with_color(self, fg: Option<u8>, bg: Option<u8>) -> Self {
        Self {
            fg_color: fg,
            bg_color: bg,
            ..self
        }
    }
}

/// A maximal run of plain text sharing one formatting state.
///
/// The text is never empty; adjacent control codes with nothing between them
/// produce no fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub state: StyleState,
    pub text: String,
}

/// Classification of a log line, in match precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Join,
    Part,
    Quit,
    Action,
    Message,
}

/// One fully parsed log line.
///
/// `nick` is set only for [`LineKind::Message`]. For every other kind,
/// `fragments` holds exactly one fragment spanning the whole post-timestamp
/// remainder, carrying the default state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    pub timestamp: String,
    pub nick: Option<String>,
    pub kind: LineKind,
    pub fragments: Vec<Fragment>,
}

/// A log line whose leading timestamp could not be recognized.
///
/// Scoped to the single offending line; the caller decides whether to skip
/// it or abort rendering the file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("log line {0:?} has no body after its timestamp")]
    MissingBody(String),
    #[error("timestamp {0:?} is not bracketed")]
    UnbracketedTimestamp(String),
}
