//! `keep2bear` - convert a Google Keep export into Bear TextBundles.
//!
//! Reads the `Keep/` folder of a Google Takeout archive and writes one
//! `.textbundle` per note, ready for Bear's import.

use keep2bear::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
