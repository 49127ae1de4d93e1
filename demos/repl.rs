use boolcalc::*;
use std::io::{self, BufRead, Write};

static EXIT: &str = "exit";

fn main() -> io::Result<()> {
    env_logger::init();

    println!("Boolean Calculator REPL");
    println!("Enter expressions to evaluate (or '{}' to quit)", EXIT);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!(">>> ");
        io::stdout().flush()?;

        let input = match lines.next() {
            None => break,
            Some(line) => line?,
        };
        let input = input.trim();
        if input == EXIT {
            break;
        }
        if input.is_empty() {
            continue;
        }

        match compute_with(input, &Limits::strict()) {
            Ok(table) => print!("{}", table),
            Err(e) => println!("Error: {}", e),
        }
    }
    Ok(())
}
