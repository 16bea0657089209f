pub mod bases;
pub mod batch;
pub mod convert;
pub mod schema;
pub mod summary;

use crate::calc::batch::{read_csv, read_json, BatchEntry};
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read salary records from a CSV or JSON file (or stdin with "-")
pub fn read_entries(path: &Path) -> anyhow::Result<Vec<BatchEntry>> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<Vec<BatchEntry>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let entries = if is_json {
        read_json(reader)?
    } else {
        read_csv(reader)?
    };
    Ok(entries)
}

fn read_from_stdin() -> anyhow::Result<Vec<BatchEntry>> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.iter().all(u8::is_ascii_whitespace) {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    let is_json = buffer
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'{');
    let cursor = io::Cursor::new(buffer);
    let entries = if is_json {
        read_json(cursor)?
    } else {
        read_csv(cursor)?
    };
    Ok(entries)
}
