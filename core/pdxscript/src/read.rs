use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::{Result, ScriptError};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Code points WINDOWS-1252 leaves unassigned. encoding_rs maps them to
/// C1 controls instead of failing, so they are rejected explicitly to
/// keep the fallback chain able to fail.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Decode file bytes as UTF-8 (with or without BOM), falling back to
/// WINDOWS-1252 for legacy game files.
pub fn decode_text(path: &Path, bytes: &[u8]) -> Result<String> {
    let stripped = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(stripped) {
        return Ok(text.to_owned());
    }
    if bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
        return Err(ScriptError::Decode(path.to_path_buf()));
    }
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    Ok(text.into_owned())
}

pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ScriptError::NotFound(path.to_path_buf())
        } else {
            ScriptError::Io(e)
        }
    })?;
    decode_text(path, &bytes)
}

pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    Ok(read_text(path)?.lines().map(str::to_owned).collect())
}

/// Like [`read_lines`], but a missing file yields no lines. Used for
/// destination files that are created on first write.
pub fn read_lines_or_empty(path: &Path) -> Result<Vec<String>> {
    match read_lines(path) {
        Ok(lines) => Ok(lines),
        Err(ScriptError::NotFound(_)) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn decodes_plain_utf8() {
        let text = decode_text(Path::new("x"), "hello = 1".as_bytes()).unwrap();
        assert_eq!(text, "hello = 1");
    }

    #[test]
    fn strips_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("l_english:".as_bytes());
        let text = decode_text(Path::new("x"), &bytes).unwrap();
        assert_eq!(text, "l_english:");
    }

    #[test]
    fn falls_back_to_windows_1252() {
        // 0xE9 is 'é' in WINDOWS-1252 and invalid as standalone UTF-8
        let bytes = [b'c', b'a', b'f', 0xE9];
        let text = decode_text(Path::new("x"), &bytes).unwrap();
        assert_eq!(text, "café");
    }

    #[test]
    fn bytes_undefined_in_windows_1252_are_a_decode_error() {
        // 0x81 is invalid UTF-8 here and unassigned in WINDOWS-1252
        let bytes = [b'b', b'a', b'd', 0x81];
        let err = decode_text(Path::new("x"), &bytes).unwrap_err();
        assert!(matches!(err, ScriptError::Decode(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = read_lines(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(matches!(err, ScriptError::NotFound(_)));
    }

    #[test]
    fn missing_file_or_empty_yields_no_lines() {
        let lines = read_lines_or_empty(Path::new("/nonexistent/file.txt")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn reads_lines_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "a = 1").unwrap();
        writeln!(file, "b = 2").unwrap();
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["a = 1", "b = 2"]);
    }
}
