//! Integration tests for end-to-end lexing.
//!
//! These tests drive the public API the way a downstream parser would:
//! constructing a lexer from an in-memory reader, decoding a whole program,
//! and consuming the resulting token stream by id.

use std::io::Cursor;

use lexical::lexer::lexer::{decode, Lexer};
use lexical::lexer::tokens::TokenKind;

#[test]
fn test_lexer_from_reader() {
    let source = Cursor::new("x = 1\ny = 2\n");
    let lexer = Lexer::new(source, Some("test.py".to_string())).unwrap();

    let tokens = lexer.decode().unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Id);
    assert_eq!(tokens[0].lexogram, "x");
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EndMarker);
}

#[test]
fn test_decode_full_program() {
    let source = "\
def grow(n):
    if n >= 10:
        return n * 2
    return n + 1

total = grow(0x1F)
";
    let tokens = decode(source.to_string(), Some("grow.py".to_string())).unwrap();

    let expected = vec![
        TokenKind::Def,
        TokenKind::Id,
        TokenKind::LeftParenthesis,
        TokenKind::Id,
        TokenKind::RightParenthesis,
        TokenKind::Colon,
        TokenKind::Newline,
        TokenKind::Indent,
        TokenKind::If,
        TokenKind::Id,
        TokenKind::GreaterEqual,
        TokenKind::ConstDec,
        TokenKind::Colon,
        TokenKind::Newline,
        TokenKind::Indent,
        TokenKind::Return,
        TokenKind::Id,
        TokenKind::Mul,
        TokenKind::ConstDec,
        TokenKind::Semicolon,
        TokenKind::Newline,
        TokenKind::Dedent,
        TokenKind::Return,
        TokenKind::Id,
        TokenKind::Add,
        TokenKind::ConstDec,
        TokenKind::Semicolon,
        TokenKind::Newline,
        TokenKind::Dedent,
        TokenKind::Id,
        TokenKind::Attrib,
        TokenKind::Id,
        TokenKind::LeftParenthesis,
        TokenKind::ConstHex,
        TokenKind::RightParenthesis,
        TokenKind::Semicolon,
        TokenKind::Newline,
        TokenKind::EndMarker,
    ];

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, expected);
}

#[test]
fn test_token_ids_match_the_published_table() {
    let tokens = decode("x += 1\n".to_string(), Some("ids.py".to_string())).unwrap();

    let ids: Vec<u32> = tokens.iter().map(|t| t.kind.id()).collect();

    // Id, AttribSum, ConstDec, Semicolon, Newline, EndMarker
    assert_eq!(ids, vec![30, 83, 36, 65, 28, 95]);
}

#[test]
fn test_decode_mixed_structures() {
    let source = "\
class Point:
    def scale(self, k):
        self.x *= k
        label = '''a
multi-line string'''
        return label
";
    let tokens = decode(source.to_string(), Some("point.py".to_string())).unwrap();

    let strings: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .map(|t| t.lexogram.as_str())
        .collect();
    assert_eq!(strings, vec!["a\nmulti-line string"]);

    let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
    assert_eq!(dedents, 2);

    assert_eq!(tokens.last().unwrap().kind, TokenKind::EndMarker);
}

#[test]
fn test_decode_error_carries_position() {
    let source = "a = 1\nb = 2\nc = 1e+\n";
    let result = decode(source.to_string(), Some("bad.py".to_string()));

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "MalformedLiteral");
    assert_eq!(error.get_position().0, 2);
    assert_eq!(error.get_position().1, 4);
}

#[test]
fn test_separate_lexers_are_independent() {
    let first = Lexer::new(Cursor::new("if x:\n    y = 1\n"), Some("a.py".to_string())).unwrap();
    let second = Lexer::new(Cursor::new("z = 2\n"), Some("b.py".to_string())).unwrap();

    let first_tokens = first.decode().unwrap();
    let second_tokens = second.decode().unwrap();

    assert!(first_tokens.iter().any(|t| t.kind == TokenKind::Indent));
    assert!(second_tokens.iter().all(|t| t.kind != TokenKind::Indent));
}
