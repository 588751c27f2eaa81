use std::env;
use std::process;

use tiny_csv::pipeline::FallibleIterator;
use tiny_csv::{Encoding, Pipeline, StreamLineSource, Tokenizer};

/// Print the records of specified CSV files.
///
/// `TINY_CSV_ENCODING` selects the file encoding (default UTF-8).
fn main() {
    env_logger::init();
    let encoding = match env::var("TINY_CSV_ENCODING") {
        Ok(label) => match label.parse::<Encoding>() {
            Ok(encoding) => encoding,
            Err(err) => {
                eprintln!("Err: {err}");
                process::exit(1);
            }
        },
        Err(_) => Encoding::default(),
    };
    let args = env::args();
    for arg in args.skip(1) {
        println!("{arg}");
        let source = match StreamLineSource::open(&arg, encoding) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("Err: {err} in {arg}");
                continue;
            }
        };
        let mut pipeline = Pipeline::new(source, Tokenizer::comma());
        let mut records = pipeline.records();
        loop {
            match records.next() {
                Ok(None) => break,
                Err(err) => {
                    eprintln!("Err: {err} in {arg}");
                    break;
                }
                Ok(Some(record)) => {
                    let fields: Vec<&str> = record
                        .iter()
                        .map(|field| field.as_deref().unwrap_or("<null>"))
                        .collect();
                    println!("{}", fields.join(" | "));
                }
            }
        }
    }
}
