//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span anchored at the lexer's current cursor
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexogram` - The literal text matched for the token
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::ConstDec, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexogram:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexogram: $lexogram,
            span: $span,
        }
    };
}

/// Creates a Span starting at the lexer's current line/column and covering
/// `$len` columns of the current line.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(lexer, 2); // a two-character token at the cursor
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($lexer:expr, $len:expr) => {
        Span {
            start: Position(
                $lexer.line_index as u32,
                $lexer.column_index as u32,
                Rc::clone(&$lexer.file),
            ),
            end: Position(
                $lexer.line_index as u32,
                ($lexer.column_index + $len) as u32,
                Rc::clone(&$lexer.file),
            ),
        }
    };
}
