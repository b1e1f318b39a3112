//! Line-oriented input
//!
//! All interaction is one line at a time from standard input. A closed
//! input stream surfaces as `UnexpectedEof` so the loops can wind down
//! instead of spinning on empty reads.

use std::io::{self, BufRead, Write};

/// Print a prompt (without a trailing newline) and read one line
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    read_line()
}

/// Read one line from stdin, stripped of the trailing newline
pub fn read_line() -> io::Result<String> {
    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
