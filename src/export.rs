//! Writing generated passwords to a text file.
//!
//! One password per line, each line newline-terminated. An existing file is
//! truncated; asking the user before overwriting is the caller's job.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `passwords` to any writer, one per line.
pub fn write_passwords<W: Write, S: AsRef<str>>(mut writer: W, passwords: &[S]) -> io::Result<()> {
    for pwd in passwords {
        writer.write_all(pwd.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Create or overwrite `path` with the given passwords.
pub fn save_passwords<S: AsRef<str>>(path: &Path, passwords: &[S]) -> io::Result<()> {
    let file = File::create(path)?;
    write_passwords(BufWriter::new(file), passwords)?;
    log::info!("saved {} passwords to {}", passwords.len(), path.display());
    Ok(())
}
