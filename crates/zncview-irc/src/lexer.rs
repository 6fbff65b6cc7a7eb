/// Bold toggle, `^B`.
pub const BOLD: char = '\x02';
/// Color introducer, `^C`.
pub const COLOR: char = '\x03';
/// Full style reset, `^O`.
pub const RESET: char = '\x0F';
/// Underline toggle, `^_`.
pub const UNDERLINE: char = '\x1F';

/// The kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Bold,
    Underline,
    Reset,
    Color,
}

/// A tokenizer for the mIRC formatting codes embedded in a line of IRC text.
///
/// ## Overview
///
/// The lexer performs character-level scanning of one line, producing a
/// stream of ([`TokenKind`], `&str`) tuples. Each token is either a
/// contiguous run of plain text or exactly one control-code sequence:
///
/// - **Bold / underline / reset**: the single bytes `^B`, `^_`, `^O`
/// - **Color**: `^C` followed by 1–2 digits, optionally a comma plus 1–2
///   more digits (foreground, background)
/// - **Text**: everything else, consumed greedily until a control byte
///
/// A `^C` with no digit after it is not a color sequence and lexes as text,
/// as does any other byte below `0x20`. The comma after the foreground
/// digits is consumed only when background digits follow it.
///
/// ## Totality
///
/// Tokenization is non-destructive: every input byte lands in exactly one
/// token, and concatenating all token texts reproduces the input.
///
/// ## Performance Characteristics
///
/// - **Single-pass**: O(n) in the line length
/// - **Zero-copy**: returns `&str` slices into the original line
/// - **Lazy**: implemented as an iterator, tokens produced on demand
///
/// ## Examples
///
/// ```
/// use zncview_irc::lexer::{Lexer, TokenKind};
///
/// let tokens: Vec<_> = Lexer::new("\u{3}3,12xmas\u{f} plain").collect();
///
/// assert_eq!(tokens[0], (TokenKind::Color, "\u{3}3,12"));
/// assert_eq!(tokens[1], (TokenKind::Text, "xmas"));
/// assert_eq!(tokens[2], (TokenKind::Reset, "\u{f}"));
/// assert_eq!(tokens[3], (TokenKind::Text, " plain"));
/// ```
pub struct Lexer<'a> {
    /// The line being lexed.
    input: &'a str,
    /// Current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` over the given line.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<(TokenKind, &'a str)> {
        let start = self.position;
        let rest = &self.input[start..];
        let c = rest.chars().next()?;

        let kind = match c {
            BOLD => {
                self.position += c.len_utf8();
                TokenKind::Bold
            }
            RESET => {
                self.position += c.len_utf8();
                TokenKind::Reset
            }
            UNDERLINE => {
                self.position += c.len_utf8();
                TokenKind::Underline
            }
            COLOR if starts_with_digit(&rest[1..]) => {
                // ^C plus 1-2 foreground digits
                self.position += c.len_utf8();
                self.take_digits(2);
                // background digits only when the comma is followed by one
                if self.input[self.position..].starts_with(',')
                    && starts_with_digit(&self.input[self.position + 1..])
                {
                    self.position += 1;
                    self.take_digits(2);
                }
                TokenKind::Color
            }
            _ => {
                // Plain text run. A lone ^C without digits falls through to
                // here and stays literal text.
                self.position += c.len_utf8();
                while let Some(n) = self.input[self.position..].chars().next() {
                    if is_control(n) {
                        break;
                    }
                    self.position += n.len_utf8();
                }
                TokenKind::Text
            }
        };

        Some((kind, &self.input[start..self.position]))
    }

    fn take_digits(&mut self, max: usize) {
        let mut taken = 0;
        while taken < max {
            match self.input[self.position..].chars().next() {
                Some(d) if d.is_ascii_digit() => {
                    self.position += d.len_utf8();
                    taken += 1;
                }
                _ => break,
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (TokenKind, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

fn is_control(c: char) -> bool {
    matches!(c, BOLD | COLOR | RESET | UNDERLINE)
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<(TokenKind, &str)> {
        Lexer::new(input).collect()
    }

    #[test]
    fn test_plain_text_is_one_token() {
        assert_eq!(tokenize("hello world"), vec![(TokenKind::Text, "hello world")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_bold_toggle_pair() {
        assert_eq!(
            tokenize("\x02hi\x02 there"),
            vec![
                (TokenKind::Bold, "\x02"),
                (TokenKind::Text, "hi"),
                (TokenKind::Bold, "\x02"),
                (TokenKind::Text, " there"),
            ]
        );
    }

    #[test]
    fn test_color_foreground_only() {
        assert_eq!(
            tokenize("\x034red"),
            vec![(TokenKind::Color, "\x034"), (TokenKind::Text, "red")]
        );
    }

    #[test]
    fn test_color_two_digit_background() {
        assert_eq!(
            tokenize("\x033,12xmas"),
            vec![(TokenKind::Color, "\x033,12"), (TokenKind::Text, "xmas")]
        );
    }

    #[test]
    fn test_color_digits_capped_at_two() {
        // the third digit is text, mirroring the \d{1,2} limit
        assert_eq!(
            tokenize("\x03123"),
            vec![(TokenKind::Color, "\x0312"), (TokenKind::Text, "3")]
        );
    }

    #[test]
    fn test_comma_without_background_digits_stays_text() {
        assert_eq!(
            tokenize("\x0312,no"),
            vec![(TokenKind::Color, "\x0312"), (TokenKind::Text, ",no")]
        );
    }

    #[test]
    fn test_bare_color_byte_is_text() {
        assert_eq!(tokenize("a\x03b"), vec![
            (TokenKind::Text, "a"),
            (TokenKind::Text, "\x03b"),
        ]);
    }

    #[test]
    fn test_other_control_bytes_are_text() {
        assert_eq!(tokenize("\x01\x07\x1b[0m"), vec![(TokenKind::Text, "\x01\x07\x1b[0m")]);
    }

    #[test]
    fn test_adjacent_control_codes() {
        assert_eq!(
            tokenize("\x02\x1f\x0f"),
            vec![
                (TokenKind::Bold, "\x02"),
                (TokenKind::Underline, "\x1f"),
                (TokenKind::Reset, "\x0f"),
            ]
        );
    }

    #[test]
    fn test_multi_byte_text() {
        assert_eq!(
            tokenize("caf\u{e9} \x02f\u{ea}te"),
            vec![
                (TokenKind::Text, "caf\u{e9} "),
                (TokenKind::Bold, "\x02"),
                (TokenKind::Text, "f\u{ea}te"),
            ]
        );
    }

    #[test]
    fn test_round_trip_concatenation() {
        let input = "\x02bold\x02 \x033,12colored\x03 bare\x0f plain\x1f_";
        let joined: String = tokenize(input).into_iter().map(|(_, t)| t).collect();
        assert_eq!(joined, input);
    }
}
