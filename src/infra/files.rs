use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use super::error::InfraError;

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String, InfraError> {
    fs::read_to_string(path).map_err(|err| InfraError::file("read", path, err))
}

/// Read `path` when given; a missing argument reads as empty text.
pub fn read_optional(path: Option<&Path>) -> Result<String, InfraError> {
    path.map_or_else(|| Ok(String::new()), read_text)
}

/// Write `document` to `path`, or to stdout when no path is given. Parent
/// directories are created as needed.
pub fn write_document(path: Option<&Path>, document: &str) -> Result<(), InfraError> {
    let Some(path) = path else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| InfraError::file("create", parent, err))?;
    }
    fs::write(path, document).map_err(|err| InfraError::file("write", path, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_through_nested_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out").join("book.html");

        write_document(Some(&path), "<html></html>").expect("write");
        assert_eq!(read_text(&path).expect("read"), "<html></html>");
    }

    #[test]
    fn missing_optional_input_reads_empty() {
        assert_eq!(read_optional(None).expect("no path"), "");
    }

    #[test]
    fn read_errors_name_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");

        let err = read_text(&path).expect_err("file is absent");
        assert!(err.to_string().contains("absent.json"));
        assert!(err.to_string().starts_with("failed to read"));
    }
}
