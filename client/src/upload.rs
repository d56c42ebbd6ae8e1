//! Upload rules shared by the form guard and the server's upload action.
//!
//! DESIGN
//! ======
//! Only the file *name* is ever inspected. The browser guard and the server
//! agree on the accepted set but differ on names without a `.`: the guard
//! treats the whole name as the extension (which then fails the set check),
//! while the server rejects such names outright.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Lower-cased file-name suffixes permitted for upload.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["csv", "json"];

/// Alert shown when a file with a disallowed extension is selected.
pub const INVALID_TYPE_MESSAGE: &str = "Please upload only CSV or JSON files.";

/// Alert shown when the form is submitted with no file selected.
pub const MISSING_FILE_MESSAGE: &str = "Please select a file to upload.";

/// Extension of `file_name` as the browser guard sees it.
///
/// Takes everything after the last `.`, lower-cased. A name with no `.`
/// yields the whole name.
pub fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(_, ext)| ext)
        .to_lowercase()
}

/// Whether `extension` (already lower-cased) is in the accepted set.
pub fn is_accepted_extension(extension: &str) -> bool {
    ACCEPTED_EXTENSIONS.contains(&extension)
}

/// Server-side filename check: requires a `.` and an accepted extension.
pub fn is_allowed_file_name(file_name: &str) -> bool {
    file_name.contains('.') && is_accepted_extension(&extension_of(file_name))
}

/// Result of the native form submission, carried back to the page as
/// `?notice=...` after the server redirects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Received,
    /// The request carried no `file` field at all.
    NoFilePart,
    /// The `file` field was present but no file was chosen.
    Missing,
    Invalid,
    /// The body went past the server's upload limit.
    TooLarge,
}

impl Notice {
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::NoFilePart => "no_file_part",
            Self::Missing => "missing",
            Self::Invalid => "invalid",
            Self::TooLarge => "too_large",
        }
    }

    pub fn from_query(raw: &str) -> Option<Self> {
        match raw {
            "received" => Some(Self::Received),
            "no_file_part" => Some(Self::NoFilePart),
            "missing" => Some(Self::Missing),
            "invalid" => Some(Self::Invalid),
            "too_large" => Some(Self::TooLarge),
            _ => None,
        }
    }

    /// Redirect target carrying this notice.
    pub fn location(self) -> String {
        format!("/?notice={}", self.as_query())
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Received => "File received.",
            Self::NoFilePart => "No file part",
            Self::Missing => "No selected file",
            Self::Invalid => "Invalid file type. Please upload CSV or JSON files only.",
            Self::TooLarge => "File is too large to upload.",
        }
    }

    pub fn is_error(self) -> bool {
        !matches!(self, Self::Received)
    }
}
