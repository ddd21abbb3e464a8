const SINGLE_QUOTE_CHAR: char = '\'';
const DOUBLE_QUOTE_CHAR: char = '"';
const BACKTICK_CHAR: char = '`';
const ESCAPE_CHAR: char = '\\';
const SLASH_CHAR: char = '/';
const NEWLINE_CHAR: char = '\n';

// This enum models where in the input the scan currently sits. A literal
// state is entered from `Normal` when its delimiter is seen and left only
// when the same delimiter appears unescaped; `//` opens a comment only in
// `Normal`, so comment-lookalikes inside literals are never stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    SingleQuoted,
    DoubleQuoted,
    TemplateLiteral,
    LineComment,
}

impl State {
    fn opened_by(c: char) -> Option<State> {
        match c {
            SINGLE_QUOTE_CHAR => Some(State::SingleQuoted),
            DOUBLE_QUOTE_CHAR => Some(State::DoubleQuoted),
            BACKTICK_CHAR => Some(State::TemplateLiteral),
            _ => None,
        }
    }

    fn delimiter(self) -> Option<char> {
        match self {
            State::SingleQuoted => Some(SINGLE_QUOTE_CHAR),
            State::DoubleQuoted => Some(DOUBLE_QUOTE_CHAR),
            State::TemplateLiteral => Some(BACKTICK_CHAR),
            State::Normal | State::LineComment => None,
        }
    }
}

/// Removes `//` line comments from `source`, leaving the contents of
/// single-quoted, double-quoted, and backtick-delimited literals exactly
/// as written (so e.g. `"http://example.com"` survives).
///
/// A comment runs up to, but not including, the next newline; a comment
/// cut short by end-of-input is consumed the same way. Unterminated
/// literals are not an error, the scan just ends in whatever state it
/// was in.
pub fn strip_line_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());

    let mut state = State::Normal;
    let mut prev: Option<char> = None;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        state = match state {
            State::Normal => match State::opened_by(c) {
                Some(literal) => {
                    out.push(c);
                    literal
                }
                None if c == SLASH_CHAR && chars.peek() == Some(&SLASH_CHAR) => {
                    // Neither slash reaches the output.
                    chars.next();
                    State::LineComment
                }
                None => {
                    out.push(c);
                    State::Normal
                }
            },
            State::SingleQuoted | State::DoubleQuoted | State::TemplateLiteral => {
                out.push(c);
                // The lookback is a single character of the *input*: a
                // delimiter preceded by an escaped backslash (`\\`) still
                // reads as escaped. Backslash parity is not counted.
                if Some(c) == state.delimiter() && prev != Some(ESCAPE_CHAR) {
                    State::Normal
                } else {
                    state
                }
            }
            State::LineComment => {
                if c == NEWLINE_CHAR {
                    out.push(c);
                    State::Normal
                } else {
                    state
                }
            }
        };

        prev = Some(c);
    }

    out
}
