use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

fn is_stdin_marker(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read the whole input from a file, or stdin when no path (or `-`) is given
pub fn read_to_string(path: Option<&Path>) -> Result<String> {
    let mut content = String::new();
    match path {
        Some(p) if !is_stdin_marker(p) => {
            File::open(p)
                .with_context(|| format!("failed to open {}", p.display()))?
                .read_to_string(&mut content)
                .with_context(|| format!("failed to read {}", p.display()))?;
        }
        _ => {
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
        }
    }
    Ok(content)
}

/// Line reader over a file or stdin
pub fn open_lines(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(p) if !is_stdin_marker(p) => {
            let file = File::open(p).with_context(|| format!("failed to open {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}
