use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use seq_stream::{
    LineSequence, ReadableStream, SequenceStream, Whence,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        println!("Usage: {} <path_to_file> [start_line]", args[0]);
        return;
    }
    let file_path = &args[1];
    let start_line: i64 = match args.get(2) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                println!("Error: start_line must be an integer.");
                return;
            }
        },
        None => 0,
    };

    if !Path::new(file_path).exists() {
        println!("Error: file does not exist.");
        return;
    }

    let file = match File::open(file_path) {
        Ok(file) => file,
        Err(e) => {
            println!("Error opening file: {:?}", e);
            return;
        }
    };

    let sequence = LineSequence::new(BufReader::new(file));
    let mut stream = SequenceStream::new(sequence)
        .with_stringify(|line: &String| format!("{}\n", line));

    match stream.seek(start_line, Whence::Start) {
        Ok(true) => {}
        Ok(false) => {
            println!("Error: start_line must be non-negative.");
            return;
        }
        Err(e) => {
            println!("Error seeking stream: {:?}", e);
            return;
        }
    }

    match stream.get_contents() {
        Ok(contents) => {
            print!("{}", contents);
            println!("-- cursor at line {}", stream.tell());
        }
        Err(e) => {
            println!("Error reading stream: {:?}", e);
        }
    }
}
