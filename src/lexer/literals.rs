use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::ErrorImpl;

use super::tokens::{TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER_RE: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref HEX_RE: Regex = Regex::new("^0[xX][0-9a-fA-F]+").unwrap();
    static ref OCT_RE: Regex = Regex::new("^0[oO][0-7]+").unwrap();
    static ref BIN_RE: Regex = Regex::new("^0[bB][01]+").unwrap();
}

/// Scans a numeric literal at the start of `remaining`. The caller
/// guarantees the first character is a digit, or a `.` followed by a digit.
///
/// Dispatch by leading character:
/// - `0x`/`0o`/`0b` open a hex/octal/binary literal needing at least one
///   digit of that base;
/// - `0.` and `0e` open a float; a `0` followed by anything else is the
///   single-character literal `0`;
/// - any other digit opens a `[0-9_]` run, continuing as a float before
///   `.`, `e` or `E`;
/// - a leading `.` is a float with an empty integer part.
pub fn scan_number(remaining: &str) -> Result<(TokenKind, String), ErrorImpl> {
    let chars: Vec<char> = remaining.chars().collect();

    if chars[0] == '.' {
        return Ok((TokenKind::ConstFloat, scan_float(&chars)?));
    }

    if chars[0] == '0' {
        return match chars.get(1) {
            Some('x') | Some('X') => scan_based(remaining, &HEX_RE, TokenKind::ConstHex),
            Some('o') | Some('O') => scan_based(remaining, &OCT_RE, TokenKind::ConstOct),
            Some('b') | Some('B') => scan_based(remaining, &BIN_RE, TokenKind::ConstBin),
            Some('e') | Some('E') | Some('.') => {
                Ok((TokenKind::ConstFloat, scan_float(&chars)?))
            }
            _ => Ok((TokenKind::ConstDec, String::from("0"))),
        };
    }

    let mut end = 0;
    while end < chars.len() && (chars[end].is_ascii_digit() || chars[end] == '_') {
        end += 1;
    }

    match chars.get(end) {
        Some('.') | Some('e') | Some('E') => Ok((TokenKind::ConstFloat, scan_float(&chars)?)),
        _ => Ok((TokenKind::ConstDec, chars[..end].iter().collect())),
    }
}

fn scan_based(
    remaining: &str,
    pattern: &Regex,
    kind: TokenKind,
) -> Result<(TokenKind, String), ErrorImpl> {
    match pattern.find(remaining) {
        Some(matched) => Ok((kind, matched.as_str().to_string())),
        None => Err(ErrorImpl::MalformedLiteral {
            literal: remaining.chars().take(2).collect(),
        }),
    }
}

/// The float grammar: `digits? ('.' digits?)? ([eE] [+-]? digits)?`, with the
/// caller guaranteeing that a fractional part or an exponent part is present.
/// An exponent marker with no digit after the optional sign is malformed.
fn scan_float(chars: &[char]) -> Result<String, ErrorImpl> {
    let mut end = 0;

    while end < chars.len() && (chars[end].is_ascii_digit() || chars[end] == '_') {
        end += 1;
    }

    if chars.get(end) == Some(&'.') {
        end += 1;
        while end < chars.len() && chars[end].is_ascii_digit() {
            end += 1;
        }
    }

    if matches!(chars.get(end), Some('e') | Some('E')) {
        end += 1;

        if matches!(chars.get(end), Some('+') | Some('-')) {
            end += 1;
        }

        if !matches!(chars.get(end), Some(c) if c.is_ascii_digit()) {
            return Err(ErrorImpl::MalformedLiteral {
                literal: chars[..end].iter().collect(),
            });
        }

        while end < chars.len() && chars[end].is_ascii_digit() {
            end += 1;
        }
    }

    Ok(chars[..end].iter().collect())
}

/// Scans an identifier run and promotes it to a keyword on an exact match
/// against the reserved-word table.
pub fn scan_identifier(remaining: &str) -> (TokenKind, String) {
    let matched = IDENTIFIER_RE.find(remaining).unwrap().as_str();

    match RESERVED_LOOKUP.get(matched) {
        Some(kind) => (*kind, matched.to_string()),
        None => (TokenKind::Id, matched.to_string()),
    }
}
