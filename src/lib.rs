#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A point in the input: 0-based line, 0-based column, and the file name.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, 0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

pub fn get_line_at(file: PathBuf, line: u32) -> String {
    let content = fs::read_to_string(&file).unwrap();

    match content.lines().nth(line as usize) {
        Some(text) => text.to_string(),
        None => panic!("Line number exceeds file length"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    #[test]
    fn test_get_line_at() {
        let path = std::env::temp_dir().join("lexical_get_line_at.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "first line\nsecond line\nthird line\n").unwrap();

        assert_eq!(super::get_line_at(path.clone(), 0), "first line");
        assert_eq!(super::get_line_at(path.clone(), 2), "third line");

        std::fs::remove_file(path).unwrap();
    }
}

pub fn display_error(error: Error, file: PathBuf) {
    /*
        error: message
        -> final.py
           |
        20 | x = .5.
           | -----^
    */

    let position = error.get_position();
    let line_text = get_line_at(file.clone(), position.0);

    let line_string = (position.0 + 1).to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = ((position.1 + 1) as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
