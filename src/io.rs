use std::io::BufRead;
use std::path::{Path, PathBuf};

fn list_files_in_dir(path: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("py"))
                .unwrap_or(false)
        })
        .map(|e| e.path().to_owned())
        .collect();
    files.sort();
    files
}

pub fn list_python_files(path: &Path) -> Option<Vec<PathBuf>> {
    if path.is_file() {
        Some(Vec::from([path.to_path_buf()]))
    } else if path.is_dir() {
        Some(list_files_in_dir(path))
    } else {
        None
    }
}

/// Reads source code line by line until a blank line or end of input.
pub fn read_interactive_source(input: impl BufRead) -> Result<String, String> {
    let mut source_lines = Vec::new();
    for line in input.lines() {
        let line = line.map_err(|e| format!("Unable to read input: {}", e))?;
        if line.trim().is_empty() {
            break;
        }
        source_lines.push(line);
    }
    Ok(source_lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::read_interactive_source;

    #[test]
    fn reading_stops_at_a_blank_line() {
        let input = b"x = 1\ny = 2\n\nz = 3\n" as &[u8];
        assert_eq!(read_interactive_source(input).unwrap(), "x = 1\ny = 2");
    }

    #[test]
    fn reading_stops_at_end_of_input() {
        let input = b"x = 1" as &[u8];
        assert_eq!(read_interactive_source(input).unwrap(), "x = 1");
    }
}
