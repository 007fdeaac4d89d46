//! File-extension to MIME type lookup.
//!
//! The table is an injected collaborator: the engines consume it
//! read-only, and callers may supply their own (e.g. deserialized from a
//! JSON object of `"ext": "mime"` pairs). The `txt` entry doubles as the
//! fallback for unknown or missing extensions.

use std::collections::HashMap;

use serde::Deserialize;

/// Reserved key whose entry supplies the fallback MIME type.
const DEFAULT_KEY: &str = "txt";

const FALLBACK_MIME: &str = "text/plain";

/// Mapping from lowercase file extension (no leading dot) to MIME type.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct MimeTable {
    entries: HashMap<String, String>,
}

impl MimeTable {
    /// Load a table from a JSON object of `"ext": "mime"` pairs.
    pub fn from_json(json: &str) -> Result<MimeTable, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up the MIME type for a file name.
    ///
    /// The extension is the text after the last `.` of the final path
    /// component, lowercased. An unknown extension, an extensionless name,
    /// or an empty name all yield the `txt` entry.
    pub fn mime_for(&self, file_name: &str) -> &str {
        let base = match file_name.rfind('/') {
            Some(i) => &file_name[i + 1..],
            None => file_name,
        };
        let ext = match base.rfind('.') {
            Some(i) if i > 0 => base[i + 1..].to_ascii_lowercase(),
            _ => return self.default_mime(),
        };
        if ext.is_empty() {
            return self.default_mime();
        }
        self.entries
            .get(&ext)
            .map(String::as_str)
            .unwrap_or_else(|| self.default_mime())
    }

    fn default_mime(&self) -> &str {
        self.entries
            .get(DEFAULT_KEY)
            .map(String::as_str)
            .unwrap_or(FALLBACK_MIME)
    }
}

impl Default for MimeTable {
    fn default() -> MimeTable {
        let entries = [
            ("txt", "text/plain"),
            ("htm", "text/html"),
            ("html", "text/html"),
            ("xhtml", "application/xhtml+xml"),
            ("css", "text/css"),
            ("js", "application/javascript"),
            ("json", "application/json"),
            ("xml", "application/xml"),
            ("csv", "text/csv"),
            ("md", "text/markdown"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("png", "image/png"),
            ("gif", "image/gif"),
            ("svg", "image/svg+xml"),
            ("webp", "image/webp"),
            ("bmp", "image/bmp"),
            ("ico", "image/x-icon"),
            ("woff", "font/woff"),
            ("woff2", "font/woff2"),
            ("ttf", "font/ttf"),
            ("otf", "font/otf"),
            ("eot", "application/vnd.ms-fontobject"),
            ("mp3", "audio/mpeg"),
            ("ogg", "audio/ogg"),
            ("wav", "audio/wav"),
            ("mp4", "video/mp4"),
            ("webm", "video/webm"),
            ("pdf", "application/pdf"),
            ("zip", "application/zip"),
            ("gz", "application/gzip"),
            ("wasm", "application/wasm"),
        ];

        MimeTable {
            entries: entries
                .into_iter()
                .map(|(ext, mime)| (ext.to_string(), mime.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_resolve() {
        let mimes = MimeTable::default();
        assert_eq!(mimes.mime_for("abc.jpg"), "image/jpeg");
        assert_eq!(mimes.mime_for("a/b/style.CSS"), "text/css");
    }

    #[test]
    fn missing_extensions_fall_back_to_default() {
        let mimes = MimeTable::default();
        assert_eq!(mimes.mime_for("abc."), "text/plain");
        assert_eq!(mimes.mime_for("./"), "text/plain");
        assert_eq!(mimes.mime_for(""), "text/plain");
        assert_eq!(mimes.mime_for("Makefile"), "text/plain");
        assert_eq!(mimes.mime_for(".gitignore"), "text/plain");
    }

    #[test]
    fn unknown_extensions_fall_back_to_default() {
        let mimes = MimeTable::default();
        assert_eq!(mimes.mime_for("archive.xyz"), "text/plain");
    }

    #[test]
    fn extension_is_taken_from_the_final_path_component() {
        let mimes = MimeTable::default();
        assert_eq!(mimes.mime_for("dir.v2/file"), "text/plain");
    }

    #[test]
    fn custom_tables_load_from_json() {
        let mimes = MimeTable::from_json(r#"{"txt": "text/x-log", "jpg": "image/jpeg"}"#).unwrap();
        assert_eq!(mimes.mime_for("a.jpg"), "image/jpeg");
        assert_eq!(mimes.mime_for("a.unknown"), "text/x-log");
    }
}
