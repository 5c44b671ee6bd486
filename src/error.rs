//! Error types for the card studio

use thiserror::Error;

/// Result type alias for studio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing, rendering, exporting or storing cards
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// No API credential configured for the text normalization service
    #[error("API key not found")]
    MissingCredentials,

    /// The text normalization service rejected the configured credential
    #[error("API key was rejected: {0}")]
    PermissionDenied(String),

    /// Any other failure talking to a remote service
    #[error("Remote request failed: {0}")]
    Remote(String),

    /// The remote service answered with something that does not fit the schema
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Failed to turn a card into pixels
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Capture/export failed (rasterization, image load, file write)
    #[error("Capture failed: {0}")]
    Capture(String),

    /// Upload larger than the gallery accepts
    #[error("File is {size} bytes, limit is {limit} bytes")]
    SizeExceeded { size: usize, limit: usize },

    /// The local store has no room left for the write
    #[error("Storage quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The local store failed for another reason
    #[error("Storage error: {0}")]
    Storage(String),

    /// A template, gallery item or font that does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A template was requested for a category it does not belong to
    #[error("Template {template} does not belong to category {category}")]
    CategoryMismatch { template: String, category: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether resubmitting the same action may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Remote(_) | Error::InvalidResponse(_) | Error::Capture(_))
    }

    /// The alert shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::MissingCredentials => "API কী পাওয়া যায়নি। অনুগ্রহ করে API কী সেট করুন।",
            Error::PermissionDenied(_) => {
                "API কী পারমিশন সমস্যা। অনুগ্রহ করে একটি বৈধ API কী নির্বাচন করুন।"
            }
            Error::Remote(_) | Error::InvalidResponse(_) => {
                "AI এনালাইসিসে সমস্যা হয়েছে। অনুগ্রহ করে আবার চেষ্টা করুন।"
            }
            Error::Capture(_) | Error::Render(_) => "দুঃখিত, স্ক্রিনশট তৈরিতে সমস্যা হয়েছে।",
            Error::SizeExceeded { .. } => "ফাইল সাইজ অনেক বড়। ৫০০ KB এর নিচে রাখার চেষ্টা করুন।",
            Error::QuotaExceeded(_) => "মেমোরি ফুল! কিছু পুরনো ছবি ডিলিট করুন।",
            _ => "দুঃখিত, একটি সমস্যা হয়েছে।",
        }
    }
}

#[cfg(feature = "remote")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Remote(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_errors_are_not_retryable() {
        assert!(!Error::PermissionDenied("403".into()).is_retryable());
        assert!(!Error::MissingCredentials.is_retryable());
        assert!(Error::Remote("timeout".into()).is_retryable());
    }

    #[test]
    fn size_error_mentions_both_sizes() {
        let e = Error::SizeExceeded { size: 614400, limit: 512000 };
        let msg = e.to_string();
        assert!(msg.contains("614400"));
        assert!(msg.contains("512000"));
        assert!(e.user_message().contains("৫০০ KB"));
    }
}
