//! Client-side checks a file must pass before it is submitted. The service
//! enforces the same limits; these exist so the user hears about a bad pick
//! immediately instead of after the upload.

/// Hard ceiling, matching the service's request size limit (16 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

pub const ALLOWED_MEDIA_TYPES: [&str; 7] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
];

pub const ALLOWED_EXTENSIONS: [&str; 7] = ["pdf", "doc", "docx", "jpg", "jpeg", "png", "gif"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TooLarge,
    UnsupportedType,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::TooLarge => {
                "File size too large. Please select a file smaller than 16MB."
            }
            ValidationError::UnsupportedType => {
                "Invalid file type. Please select a PDF, Word document, or image file."
            }
        }
    }
}

/// Accepts a file when it fits the size ceiling and either the sniffed media
/// type or the filename extension is on the allow list. The extension fallback
/// keeps files with an empty or odd media type usable.
pub fn validate(name: &str, size: u64, media_type: &str) -> Result<(), ValidationError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge);
    }

    if ALLOWED_MEDIA_TYPES.contains(&media_type) || has_allowed_extension(name) {
        return Ok(());
    }

    Err(ValidationError::UnsupportedType)
}

pub fn has_allowed_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, extension)) => {
            let extension = extension.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&extension.as_str())
        }
        None => false,
    }
}
