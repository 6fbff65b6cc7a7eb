//! # zncview IRC line parser
//!
//! Parser for the timestamped IRC log lines that a ZNC bouncer's log module
//! writes, with structured styled-text output.
//!
//! ## Overview
//!
//! This crate transforms one raw log line into a [`ParsedLine`](ir::ParsedLine):
//! the bracketed timestamp, the line kind (message, join, part, quit, action),
//! the speaking nick for messages, and the message body broken into
//! [`Fragment`](ir::Fragment)s. A fragment is a maximal run of plain text that
//! shares one formatting state.
//!
//! IRC text embeds a small stateful formatting protocol: `^B` toggles bold,
//! `^_` toggles underline, `^O` resets everything, and `^C` followed by digit
//! groups selects foreground (and optionally background) colors. The parser
//! threads a [`StyleState`](ir::StyleState) through the line and emits a new
//! fragment every time the state changes.
//!
//! ```text
//! ┌──────────────┐   parse_line()   ┌─────────────────────────────┐
//! │ raw log line │ ───────────────► │ ParsedLine                  │
//! │ "[12:34:56]  │                  │   timestamp, nick, kind,    │
//! │  <alice> ..."│                  │   [(state, text), ...]      │
//! └──────────────┘                  └─────────────────────────────┘
//! ```
//!
//! ## Statelessness
//!
//! Parsing is a pure function of the input line. Formatting state never leaks
//! across lines, and [`StyleState`](ir::StyleState) transitions return fresh
//! values, so already-emitted fragments are never retroactively changed.
//! Concurrent callers need no synchronization.
//!
//! ## Examples
//!
//! ```
//! use zncview_irc::{LineKind, parse_line};
//!
//! let line = parse_line("[12:34:56] <alice> \u{2}hello\u{2} world")?;
//! assert_eq!(line.timestamp, "12:34:56");
//! assert_eq!(line.nick.as_deref(), Some("alice"));
//! assert_eq!(line.kind, LineKind::Message);
//!
//! assert_eq!(line.fragments[0].text, "hello");
//! assert!(line.fragments[0].state.is_bold);
//! assert_eq!(line.fragments[1].text, " world");
//! assert!(!line.fragments[1].state.is_bold);
//! # Ok::<(), zncview_irc::ParseError>(())
//! ```
//!
//! Server events carry no nick and a single unstyled fragment:
//!
//! ```
//! use zncview_irc::{LineKind, parse_line};
//!
//! let line = parse_line("[09:00:00] *** Joins: bob (bob@host)")?;
//! assert_eq!(line.kind, LineKind::Join);
//! assert_eq!(line.nick, None);
//! assert_eq!(line.fragments[0].text, "*** Joins: bob (bob@host)");
//! # Ok::<(), zncview_irc::ParseError>(())
//! ```

/// Styled-fragment value types.
pub mod ir;
/// Control-code tokenizer.
pub mod lexer;
/// Line parsing entry point.
pub mod parser;

#[cfg(test)]
mod tests;

pub use ir::{Fragment, LineKind, ParseError, ParsedLine, StyleState};
pub use parser::parse_line;
