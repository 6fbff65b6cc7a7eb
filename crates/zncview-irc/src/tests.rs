use crate::ir::{LineKind, ParseError, StyleState};
use crate::parse_line;

#[test]
fn test_bold_message_fragments() {
    let line = parse_line("[12:34:56] <alice> \x02hello\x02 world").unwrap();

    assert_eq!(line.timestamp, "12:34:56");
    assert_eq!(line.nick.as_deref(), Some("alice"));
    assert_eq!(line.kind, LineKind::Message);

    assert_eq!(line.fragments.len(), 2);
    assert_eq!(line.fragments[0].text, "hello");
    assert!(line.fragments[0].state.is_bold);
    assert_eq!(line.fragments[1].text, " world");
    assert!(!line.fragments[1].state.is_bold);
}

#[test]
fn test_join_line() {
    let line = parse_line("[09:00:00] *** Joins: bob (bob@host)").unwrap();

    assert_eq!(line.kind, LineKind::Join);
    assert_eq!(line.nick, None);
    assert_eq!(line.fragments.len(), 1);
    assert_eq!(line.fragments[0].text, "*** Joins: bob (bob@host)");
    assert_eq!(line.fragments[0].state, StyleState::default());
}

#[test]
fn test_part_and_quit_lines() {
    let part = parse_line("[10:00:00] *** Parts: bob (bob@host) (bye)").unwrap();
    assert_eq!(part.kind, LineKind::Part);

    let quit = parse_line("[10:00:01] *** Quits: bob (bob@host) (Ping timeout)").unwrap();
    assert_eq!(quit.kind, LineKind::Quit);
}

#[test]
fn test_action_line() {
    let line = parse_line("[11:11:11] * alice waves at everyone").unwrap();

    assert_eq!(line.kind, LineKind::Action);
    assert_eq!(line.nick, None);
    assert_eq!(line.fragments.len(), 1);
    assert_eq!(line.fragments[0].text, "* alice waves at everyone");
}

#[test]
fn test_server_events_keep_control_bytes_literal() {
    // non-message lines are a single fragment, never tokenized
    let line = parse_line("[10:00:00] *** Quits: bob (bob@host) (\x02loud\x02 exit)").unwrap();

    assert_eq!(line.kind, LineKind::Quit);
    assert_eq!(line.fragments.len(), 1);
    assert_eq!(line.fragments[0].text, "*** Quits: bob (bob@host) (\x02loud\x02 exit)");
}

#[test]
fn test_message_without_nick_prefix() {
    // classified as message because nothing else matched, but the body has
    // no <nick> element
    let line = parse_line("[08:00:00] topic changed to: welcome").unwrap();

    assert_eq!(line.kind, LineKind::Message);
    assert_eq!(line.nick, None);
    assert_eq!(line.fragments.len(), 1);
    assert_eq!(line.fragments[0].text, "topic changed to: welcome");
}

#[test]
fn test_color_foreground_and_background() {
    let line = parse_line("[12:00:00] <alice> \x033,12xmas\x0f done").unwrap();

    assert_eq!(line.fragments.len(), 2);
    assert_eq!(line.fragments[0].text, "xmas");
    assert_eq!(line.fragments[0].state.fg_color, Some(3));
    assert_eq!(line.fragments[0].state.bg_color, Some(12));
    assert_eq!(line.fragments[1].text, " done");
    assert_eq!(line.fragments[1].state, StyleState::default());
}

#[test]
fn test_color_without_background_clears_it() {
    let line = parse_line("[12:00:00] <alice> \x031,2ab\x034cd").unwrap();

    assert_eq!(line.fragments[0].state.bg_color, Some(2));
    // the second color code sets fg and clears bg, it does not keep it
    assert_eq!(line.fragments[1].state.fg_color, Some(4));
    assert_eq!(line.fragments[1].state.bg_color, None);
}

#[test]
fn test_bare_color_byte_stays_in_text() {
    let line = parse_line("[12:00:00] <alice> \x034red\x03more").unwrap();

    assert_eq!(line.fragments.len(), 1);
    assert_eq!(line.fragments[0].text, "red\x03more");
    assert_eq!(line.fragments[0].state.fg_color, Some(4));
}

#[test]
fn test_underline_spans_color_change() {
    let line = parse_line("[12:00:00] <alice> \x1fa\x034b\x1fc").unwrap();

    assert_eq!(line.fragments.len(), 3);
    assert!(line.fragments[0].state.has_underline);
    assert_eq!(line.fragments[0].state.fg_color, None);
    assert!(line.fragments[1].state.has_underline);
    assert_eq!(line.fragments[1].state.fg_color, Some(4));
    assert!(!line.fragments[2].state.has_underline);
    assert_eq!(line.fragments[2].state.fg_color, Some(4));
}

#[test]
fn test_adjacent_control_codes_emit_no_empty_fragment() {
    let line = parse_line("[12:00:00] <alice> \x02\x1f\x0fplain").unwrap();

    assert_eq!(line.fragments.len(), 1);
    assert_eq!(line.fragments[0].text, "plain");
    assert_eq!(line.fragments[0].state, StyleState::default());
}

#[test]
fn test_trailing_styled_run_is_flushed() {
    let line = parse_line("[12:00:00] <alice> plain \x02bold to end").unwrap();

    assert_eq!(line.fragments.len(), 2);
    assert_eq!(line.fragments[1].text, "bold to end");
    assert!(line.fragments[1].state.is_bold);
}

#[test]
fn test_missing_body_is_an_error() {
    assert_eq!(
        parse_line("[12:34:56]"),
        Err(ParseError::MissingBody("[12:34:56]".to_owned()))
    );
}

#[test]
fn test_unbracketed_timestamp_is_an_error() {
    assert_eq!(
        parse_line("12:34:56 hello"),
        Err(ParseError::UnbracketedTimestamp("12:34:56".to_owned()))
    );
}

#[test]
fn test_empty_line_is_an_error() {
    assert!(parse_line("").is_err());
    assert!(parse_line("   ").is_err());
}

#[test]
fn test_style_state_reset_is_idempotent() {
    let state = StyleState::default()
        .toggle_bold()
        .toggle_underline()
        .with_color(Some(4), Some(1));

    assert_eq!(state.reset(), state.reset().reset());
    assert_eq!(state.reset(), StyleState::default());
}

#[test]
fn test_style_state_toggles_are_involutions() {
    let state = StyleState::default().with_color(Some(9), None);

    assert_eq!(state.toggle_bold().toggle_bold(), state);
    assert_eq!(state.toggle_underline().toggle_underline(), state);
}

#[test]
fn test_style_state_transitions_do_not_mutate() {
    let before = StyleState::default();
    let after = before.toggle_bold();

    assert!(!before.is_bold);
    assert!(after.is_bold);
}
