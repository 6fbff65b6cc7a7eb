use once_cell::sync::Lazy;
use regex::Regex;

use crate::ir::{Fragment, LineKind, ParseError, ParsedLine, StyleState};
use crate::lexer::{Lexer, TokenKind};

static MESSAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<(?P<nick>\S+)> (?P<message>.*)$").unwrap());
static JOIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*\* Joins: .*$").unwrap());
static PART_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*\* Parts: .*$").unwrap());
static QUIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*\* Quits: .*$").unwrap());
static ACTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\* \S+ .*$").unwrap());

/// Parses one raw log line into its structured form.
///
/// The line must start with a bracketed timestamp followed by a space;
/// anything else is a [`ParseError`] for that line alone. Malformed color
/// digit sequences never error, they degrade to unset colors.
pub fn parse_line(raw_line: &str) -> Result<ParsedLine, ParseError> {
    let raw_line = raw_line.trim();
    let (timestamp, line) = split_on_timestamp(raw_line)?;
    let kind = classify(line);

    let mut nick = None;
    let mut fragments = Vec::new();

    if kind == LineKind::Message {
        let (found_nick, remainder) = split_on_nick(line);
        nick = found_nick.map(str::to_owned);
        fragments = emit_fragments(remainder);
    } else {
        fragments.push(Fragment {
            state: StyleState::default(),
            text: line.to_owned(),
        });
    }

    Ok(ParsedLine {
        timestamp: timestamp.to_owned(),
        nick,
        kind,
        fragments,
    })
}

/// Splits a raw line into its timestamp and everything after it, stripping
/// the brackets around the timestamp.
fn split_on_timestamp(raw_line: &str) -> Result<(&str, &str), ParseError> {
    let (timestamp, line) = raw_line
        .split_once(' ')
        .ok_or_else(|| ParseError::MissingBody(raw_line.to_owned()))?;
    let timestamp = timestamp
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .ok_or_else(|| ParseError::UnbracketedTimestamp(timestamp.to_owned()))?;
    Ok((timestamp, line))
}

/// Classifies the post-timestamp remainder. Precedence is fixed:
/// join, part, quit, action, and everything else is a message.
fn classify(line: &str) -> LineKind {
    if JOIN_RE.is_match(line) {
        LineKind::Join
    } else if PART_RE.is_match(line) {
        LineKind::Part
    } else if QUIT_RE.is_match(line) {
        LineKind::Quit
    } else if ACTION_RE.is_match(line) {
        LineKind::Action
    } else {
        LineKind::Message
    }
}

/// Extracts the `<nick>` prefix of a message line.
///
/// Returns `(None, line)` when the line has no such prefix, which happens on
/// lines classified as messages only because nothing else matched.
fn split_on_nick(line: &str) -> (Option<&str>, &str) {
    match MESSAGE_RE.captures(line) {
        Some(caps) => match (caps.name("nick"), caps.name("message")) {
            (Some(nick), Some(message)) => (Some(nick.as_str()), message.as_str()),
            _ => (None, line),
        },
        None => (None, line),
    }
}

/// Walks the tokenized message body, threading the style state and emitting
/// a fragment for every non-empty text run.
fn emit_fragments(text: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut state = StyleState::default();
    let mut pending = String::new();

    // The trailing reset makes the final text run flush inside the loop body.
    let tokens = Lexer::new(text).chain(std::iter::once((TokenKind::Reset, "\x0f")));

    for (kind, token_text) in tokens {
        if kind == TokenKind::Text {
            pending.push_str(token_text);
            continue;
        }
        if !pending.is_empty() {
            fragments.push(Fragment {
                state,
                text: std::mem::take(&mut pending),
            });
        }
        state = match kind {
            TokenKind::Bold => state.toggle_bold(),
            TokenKind::Underline => state.toggle_underline(),
            TokenKind::Reset => state.reset(),
            TokenKind::Color => {
                let (fg, bg) = color_ids(token_text);
                state.with_color(fg, bg)
            }
            TokenKind::Text => state,
        };
    }

    fragments
}

/// Decodes the digit groups of a `^C` token into color ids.
///
/// A non-numeric foreground group yields `None`; an absent background group
/// yields `None`.
fn color_ids(token: &str) -> (Option<u8>, Option<u8>) {
    // the first byte is the ^C introducer
    let digits = &token[1..];
    let (fg, bg) = match digits.split_once(',') {
        Some((fg, bg)) => (fg, Some(bg)),
        None => (digits, None),
    };
    (
        fg.parse().ok(),
        bg.and_then(|b| b.parse().ok()),
    )
}
