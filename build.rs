use std::env;
use std::fs::File;
use std::io::{BufWriter, Result, Write};
use std::path::Path;

use phf_codegen::Map;
use uncased::UncasedStr;

/// Labels accepted by `Encoding::for_label`, matched case-insensitively.
const ENCODINGS: &[(&str, &str)] = &[
    ("utf-8", "Encoding::Utf8"),
    ("utf8", "Encoding::Utf8"),
    ("unicode-1-1-utf-8", "Encoding::Utf8"),
    ("us-ascii", "Encoding::Ascii"),
    ("ascii", "Encoding::Ascii"),
    ("ansi_x3.4-1968", "Encoding::Ascii"),
    ("iso-8859-1", "Encoding::Latin1"),
    ("iso8859-1", "Encoding::Latin1"),
    ("iso_8859-1", "Encoding::Latin1"),
    ("latin1", "Encoding::Latin1"),
    ("l1", "Encoding::Latin1"),
];

fn main() -> Result<()> {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir);

    let mut labels = Map::<&UncasedStr>::new();
    for (label, encoding) in ENCODINGS {
        labels.entry(UncasedStr::new(label), *encoding);
    }
    let mut file = BufWriter::new(File::create(out_path.join("encodings.rs"))?);
    writeln!(
        &mut file,
        "static ENCODINGS: ::phf::Map<&'static UncasedStr, Encoding> = \n{};",
        labels.build()
    )?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
