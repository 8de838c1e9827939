use std::io::BufRead;
use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::indent::{IndentChange, IndentationTracker};
use super::literals;
use super::tokens::{self, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringDelimiter {
    Quote,
    DQuote,
    TripleQuote,
    TripleDQuote,
}

impl StringDelimiter {
    fn closing(&self) -> &'static str {
        match self {
            StringDelimiter::Quote => "'",
            StringDelimiter::DQuote => "\"",
            StringDelimiter::TripleQuote => "'''",
            StringDelimiter::TripleDQuote => "\"\"\"",
        }
    }

    fn is_triple(&self) -> bool {
        matches!(self, StringDelimiter::TripleQuote | StringDelimiter::TripleDQuote)
    }
}

/// A string literal whose closing delimiter has not been seen yet. While one
/// is open, raw characters bypass every other recogniser and accumulate here.
struct OpenString {
    delimiter: StringDelimiter,
    buffer: String,
    start: Position,
}

pub struct Lexer {
    input_lines: Vec<String>,
    tokens: Vec<Token>,
    line_index: usize,
    column_index: usize,
    indentation: IndentationTracker,
    open_string: Option<OpenString>,
    file: Rc<String>,
}

impl Lexer {
    /// Materializes every line of the input up front. A source that cannot
    /// be read to the end is rejected.
    pub fn new(input: impl BufRead, file: Option<String>) -> Result<Lexer, Error> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut input_lines = vec![];
        for line in input.lines() {
            match line {
                Ok(line) => input_lines.push(line),
                Err(err) => {
                    return Err(Error::new(
                        ErrorImpl::InvalidInput {
                            reason: err.to_string(),
                        },
                        Position(input_lines.len() as u32, 0, Rc::clone(&file_name)),
                    ))
                }
            }
        }

        Ok(Lexer {
            input_lines,
            tokens: vec![],
            line_index: 0,
            column_index: 0,
            indentation: IndentationTracker::new(),
            open_string: None,
            file: file_name,
        })
    }

    /// Scans the whole input and returns the token stream, ending with the
    /// dedents for any still-open blocks and the end marker.
    pub fn decode(mut self) -> Result<Vec<Token>, Error> {
        while self.line_index < self.input_lines.len() {
            let line: Vec<char> = self.input_lines[self.line_index].chars().collect();
            self.column_index = 0;
            self.decode_line(&line)?;
            self.line_index += 1;
        }

        if let Some(open) = &self.open_string {
            return Err(Error::new(ErrorImpl::UnterminatedString, open.start.clone()));
        }

        self.column_index = 0;
        for _ in 0..self.indentation.close_remaining() {
            let span = MK_SPAN!(self, 0);
            self.tokens.push(MK_TOKEN!(TokenKind::Dedent, String::new(), span));
        }

        let span = MK_SPAN!(self, 0);
        self.tokens.push(MK_TOKEN!(TokenKind::EndMarker, String::new(), span));

        Ok(self.tokens)
    }

    fn decode_line(&mut self, line: &[char]) -> Result<(), Error> {
        let tokens_before = self.tokens.len();

        if self.open_string.is_some() {
            self.scan_string_body(line);
            if self.open_string.is_some() {
                return Ok(());
            }
        } else {
            let (width, consumed) = IndentationTracker::measure(line);

            // blank and comment-only lines carry no structure at all
            if matches!(line.get(consumed), None | Some('#')) {
                return Ok(());
            }

            self.column_index = consumed;
            self.track_indentation(line, width, consumed)?;
        }

        self.scan_tokens(line)?;

        if self.open_string.is_none() && self.tokens.len() > tokens_before {
            self.push_line_terminator(line.len());
        }

        Ok(())
    }

    fn track_indentation(
        &mut self,
        line: &[char],
        width: usize,
        consumed: usize,
    ) -> Result<(), Error> {
        match self.indentation.advance(width) {
            Ok(IndentChange::Unchanged) => Ok(()),
            Ok(IndentChange::Opened) => {
                if self.tokens.is_empty() {
                    return Err(Error::new(
                        ErrorImpl::FirstLineIndent,
                        Position(self.line_index as u32, consumed as u32, Rc::clone(&self.file)),
                    ));
                }

                let span = Span {
                    start: Position(self.line_index as u32, 0, Rc::clone(&self.file)),
                    end: Position(self.line_index as u32, consumed as u32, Rc::clone(&self.file)),
                };
                self.tokens.push(MK_TOKEN!(
                    TokenKind::Indent,
                    line[..consumed].iter().collect(),
                    span
                ));
                Ok(())
            }
            Ok(IndentChange::Closed(count)) => {
                for _ in 0..count {
                    let span = Span {
                        start: Position(self.line_index as u32, 0, Rc::clone(&self.file)),
                        end: Position(self.line_index as u32, 0, Rc::clone(&self.file)),
                    };
                    self.tokens
                        .push(MK_TOKEN!(TokenKind::Dedent, String::new(), span));
                }
                Ok(())
            }
            Err(internal) => Err(Error::new(
                internal,
                Position(self.line_index as u32, consumed as u32, Rc::clone(&self.file)),
            )),
        }
    }

    fn scan_tokens(&mut self, line: &[char]) -> Result<(), Error> {
        while self.column_index < line.len() {
            let c = line[self.column_index];

            if c == ' ' || c == '\t' || c == '\r' {
                self.column_index += 1;
                continue;
            }

            if c == '#' {
                break;
            }

            if c == '\'' || c == '"' {
                self.begin_string(line, c);
                self.scan_string_body(line);
                continue;
            }

            let next_is_digit =
                matches!(line.get(self.column_index + 1), Some(d) if d.is_ascii_digit());
            if c.is_ascii_digit() || (c == '.' && next_is_digit) {
                let remaining: String = line[self.column_index..].iter().collect();
                let (kind, lexogram) = literals::scan_number(&remaining)
                    .map_err(|internal| self.error_here(internal))?;

                let length = lexogram.chars().count();
                let span = MK_SPAN!(self, length);
                self.tokens.push(MK_TOKEN!(kind, lexogram, span));
                self.column_index += length;
                continue;
            }

            if let Some(kind) = tokens::longest_match(&line[self.column_index..]) {
                let spelling = kind.spelling().unwrap();
                let length = spelling.chars().count();
                let span = MK_SPAN!(self, length);
                self.tokens
                    .push(MK_TOKEN!(kind, String::from(spelling), span));
                self.column_index += length;
                continue;
            }

            if tokens::is_identifier_start(c) {
                let remaining: String = line[self.column_index..].iter().collect();
                let (kind, lexogram) = literals::scan_identifier(&remaining);

                let length = lexogram.chars().count();
                let span = MK_SPAN!(self, length);
                self.tokens.push(MK_TOKEN!(kind, lexogram, span));
                self.column_index += length;
                continue;
            }

            return Err(self.error_here(ErrorImpl::UnrecognisedCharacter { character: c }));
        }

        Ok(())
    }

    fn begin_string(&mut self, line: &[char], quote: char) {
        let triple = line.get(self.column_index + 1) == Some(&quote)
            && line.get(self.column_index + 2) == Some(&quote);

        let delimiter = match (quote, triple) {
            ('\'', false) => StringDelimiter::Quote,
            ('"', false) => StringDelimiter::DQuote,
            ('\'', true) => StringDelimiter::TripleQuote,
            (_, true) => StringDelimiter::TripleDQuote,
            _ => unreachable!(),
        };

        self.open_string = Some(OpenString {
            delimiter,
            buffer: String::new(),
            start: Position(
                self.line_index as u32,
                self.column_index as u32,
                Rc::clone(&self.file),
            ),
        });
        self.column_index += delimiter.closing().len();
    }

    /// Consumes raw characters into the open string's buffer until its
    /// closing delimiter or the end of the line. Triple-quoted forms keep
    /// the line break as part of the body.
    fn scan_string_body(&mut self, line: &[char]) {
        let delimiter = self.open_string.as_ref().unwrap().delimiter;
        let closing: Vec<char> = delimiter.closing().chars().collect();

        while self.column_index < line.len() {
            let closes = line.len() - self.column_index >= closing.len()
                && line[self.column_index..self.column_index + closing.len()] == closing[..];

            if closes {
                let open = self.open_string.take().unwrap();
                let span = Span {
                    start: open.start,
                    end: Position(
                        self.line_index as u32,
                        (self.column_index + closing.len()) as u32,
                        Rc::clone(&self.file),
                    ),
                };
                self.tokens
                    .push(MK_TOKEN!(TokenKind::String, open.buffer, span));
                self.column_index += closing.len();
                return;
            }

            let c = line[self.column_index];
            self.open_string.as_mut().unwrap().buffer.push(c);
            self.column_index += 1;
        }

        if delimiter.is_triple() {
            self.open_string.as_mut().unwrap().buffer.push('\n');
        }
    }

    /// Terminates the statement on this line: a synthesized semicolon unless
    /// the last token already opens or closes a block, then the newline.
    fn push_line_terminator(&mut self, line_length: usize) {
        self.column_index = line_length;

        let last_kind = self.tokens.last().unwrap().kind;
        if !matches!(
            last_kind,
            TokenKind::Colon | TokenKind::Indent | TokenKind::Dedent
        ) {
            let span = MK_SPAN!(self, 1);
            self.tokens
                .push(MK_TOKEN!(TokenKind::Semicolon, String::from(";"), span));
        }

        let span = MK_SPAN!(self, 1);
        self.tokens
            .push(MK_TOKEN!(TokenKind::Newline, String::from("\n"), span));
    }

    fn error_here(&self, internal: ErrorImpl) -> Error {
        Error::new(
            internal,
            Position(
                self.line_index as u32,
                self.column_index as u32,
                Rc::clone(&self.file),
            ),
        )
    }
}

/// Lexes an in-memory source string.
pub fn decode(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(std::io::Cursor::new(source), file)?.decode()
}
