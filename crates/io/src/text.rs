//! Plain-text output of rendered ASCII rows.

use std::fs;
use std::path::Path;

use mosaic_core::error::MosaicError;

/// Joins rows with `\n`, ending with a trailing newline when non-empty.
pub fn join_rows(rows: &[String]) -> String {
    let mut out = rows.join("\n");
    if !rows.is_empty() {
        out.push('\n');
    }
    out
}

/// Writes rows to `path`, one per line.
pub fn write_text(rows: &[String], path: &Path) -> Result<(), MosaicError> {
    fs::write(path, join_rows(rows)).map_err(|e| MosaicError::Io(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::{render_as_text, Picture, Rgba};

    #[test]
    fn join_rows_adds_trailing_newline() {
        let rows = vec!["ab".to_string(), "cd".to_string()];
        assert_eq!(join_rows(&rows), "ab\ncd\n");
        assert_eq!(join_rows(&[]), "");
    }

    #[test]
    fn write_text_round_trip() {
        let pic = Picture::filled(3, 2, Rgba::opaque(0, 0, 0)).unwrap();
        let rows = render_as_text(&pic);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.txt");

        write_text(&rows, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().collect::<Vec<_>>(), vec!["@@@", "@@@"]);
    }

    #[test]
    fn write_text_to_missing_dir_is_io_error() {
        let result = write_text(&[], Path::new("/no/such/dir/art.txt"));
        assert!(matches!(result, Err(MosaicError::Io(_))));
    }
}
