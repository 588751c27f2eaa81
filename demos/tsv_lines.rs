use std::env;
use std::fs;

use tiny_csv::from_tab_separated_str;

/// Parse specified TSV files in memory and print the field count of each line.
fn main() {
    env_logger::init();
    let args = env::args();
    for arg in args.skip(1) {
        let text = match fs::read_to_string(&arg) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("Err: {err} in {arg}");
                continue;
            }
        };
        match from_tab_separated_str(&text, None) {
            Ok(records) => {
                for (i, record) in records.iter().enumerate() {
                    println!("{arg}:{}: {} field(s)", i + 1, record.len());
                }
            }
            Err(err) => eprintln!("Err: {err} in {arg}"),
        }
    }
}
