/// Magnitude suffixes and words recognized after the numeric part of a
/// funding string. Matched case-insensitively against the whole word.
const MAGNITUDES: &[(&str, f64)] = &[
    ("k", 1e3),
    ("thousand", 1e3),
    ("m", 1e6),
    ("mm", 1e6),
    ("mn", 1e6),
    ("million", 1e6),
    ("b", 1e9),
    ("bn", 1e9),
    ("billion", 1e9),
    ("l", 1e5),
    ("lakh", 1e5),
    ("lakhs", 1e5),
    ("lac", 1e5),
    ("lacs", 1e5),
    ("cr", 1e7),
    ("crore", 1e7),
    ("crores", 1e7),
];

/// Parse a loosely formatted funding amount into a comparable magnitude
///
/// Accepts currency symbols, comma or space thousands separators, a decimal
/// point (also leading, as in `.5M`) and a magnitude suffix (`k`, `m`, `mm`,
/// `b`, `l`, or words such as `million` and `lakhs`).
/// Strings without any digits parse as `0.0`.
///
/// # Examples
/// ```
/// use venture_match::core::parse_funding;
///
/// assert_eq!(parse_funding("50k"), 50_000.0);
/// assert_eq!(parse_funding("$1,500,000"), 1_500_000.0);
/// assert_eq!(parse_funding("50 lakhs"), 5_000_000.0);
/// ```
pub fn parse_funding(input: &str) -> f64 {
    let Some(start) = number_start(input) else {
        return 0.0;
    };

    let rest = &input[start..];
    let mut digits = String::with_capacity(rest.len() + 1);
    let mut seen_dot = false;
    let mut end = rest.len();
    let mut prev_digit = false;
    let mut chars = rest.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let grouped_space =
            prev_digit && !seen_dot && chars.peek().is_some_and(|(_, n)| n.is_ascii_digit());
        prev_digit = c.is_ascii_digit();

        match c {
            '0'..='9' => digits.push(c),
            ',' => {}
            '.' if !seen_dot => {
                seen_dot = true;
                digits.push('.');
            }
            // Space-grouped thousands, e.g. "1 500 000"
            ' ' | '\u{a0}' | '\u{202f}' if grouped_space => {}
            _ => {
                end = i;
                break;
            }
        }
    }

    if digits.starts_with('.') {
        digits.insert(0, '0');
    }

    let value = digits.parse::<f64>().unwrap_or(0.0) * magnitude(&rest[end..]);

    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Byte offset where the number begins: the first digit, or a `.` directly
/// before a digit that does not end a word (so "Rs.50" starts at `5`)
fn number_start(input: &str) -> Option<usize> {
    let mut prev: Option<char> = None;
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_ascii_digit() {
            return Some(i);
        }

        if c == '.'
            && !prev.is_some_and(char::is_alphabetic)
            && chars.peek().is_some_and(|(_, n)| n.is_ascii_digit())
        {
            return Some(i);
        }

        prev = Some(c);
    }

    None
}

/// Multiplier for the word directly following the number, 1 if none matches
fn magnitude(tail: &str) -> f64 {
    let word: String = tail
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();

    MAGNITUDES
        .iter()
        .find(|(suffix, _)| *suffix == word)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}
