use std::{env, fs::File, io::BufReader, path::PathBuf, time::Instant};

use lexical::{display_error, lexer::lexer::Lexer};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let file = File::open(file_path).expect("Failed to read file!");
    let lexer = Lexer::new(BufReader::new(file), Some(String::from(file_name)));

    let lexer = match lexer {
        Ok(lexer) => lexer,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            panic!()
        }
    };

    let tokens = match lexer.decode() {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            panic!()
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    for token in &tokens {
        token.debug();
    }

    println!("{} tokens", tokens.len());
}
