use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LessonError, Result};

pub const USAGE: &str = "Please specify one file path as a command-line argument.";

/// Terminators that end a line in addition to `\n` and `\r\n`.
const LINE_BREAKS: [char; 4] = ['\r', '\u{2028}', '\u{2029}', '\u{85}'];

/// Reads `path` line by line, appending each line and a `\n` to the returned
/// buffer. Every recognised terminator comes back as `\n`.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let file = File::open(path).map_err(|source| LessonError::Open {
        path: display.clone(),
        source,
    })?;
    log::debug!("opened {}", display);

    let mut reader = BufReader::new(file);
    let mut content = String::new();
    let mut chunk = String::new();
    loop {
        chunk.clear();
        let read = reader
            .read_line(&mut chunk)
            .map_err(|source| LessonError::Read {
                path: display.clone(),
                source,
            })?;
        if read == 0 {
            break;
        }
        append_lines(&mut content, &chunk);
    }

    Ok(content)
}

/// Splits one `read_line` chunk on the remaining terminators. A chunk that
/// ends the file without `\n` does not produce a trailing empty line.
fn append_lines(content: &mut String, chunk: &str) {
    let (body, terminated) = match chunk.strip_suffix('\n') {
        Some(body) => (body.strip_suffix('\r').unwrap_or(body), true),
        None => (chunk, false),
    };

    let mut lines: Vec<&str> = body.split(|c: char| LINE_BREAKS.contains(&c)).collect();
    if !terminated && body.ends_with(|c: char| LINE_BREAKS.contains(&c)) {
        lines.pop();
    }

    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
}
