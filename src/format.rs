use std::fmt;
use tracing::warn;

/// Output format offered by the directory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryFormat {
    Xml,
    Json,
    /// Fixed-width text
    #[default]
    Text,
}

impl DirectoryFormat {
    /// Value of the `format` query parameter. The service rejects anything not lower-case.
    pub fn query_token(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Json => "json",
            Self::Text => "text",
        }
    }

    /// Extension of the file written for this format.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }

    /// Parses a token case-insensitively, returning `None` when it names no format.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "xml" => Some(Self::Xml),
            "json" => Some(Self::Json),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

impl fmt::Display for DirectoryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Xml => "XML",
            Self::Json => "JSON",
            Self::Text => "TEXT",
        })
    }
}

/// Resolves a user supplied format token.
///
/// Unknown tokens never fail the run: they fall back to [`DirectoryFormat::Text`] with a
/// warning.
pub fn resolve_format(token: &str) -> DirectoryFormat {
    DirectoryFormat::parse(token).unwrap_or_else(|| {
        let fallback = DirectoryFormat::default();
        warn!(
            token = token,
            fallback = %fallback,
            "Return format must be XML, JSON, or TEXT; using default"
        );
        fallback
    })
}
