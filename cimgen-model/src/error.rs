use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for cimgen-model operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A loaded file, kept so errors can point into it.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "cimgen.toml");
/// ctx.validation_error("profile names must not be empty");
/// ctx.validation_error_at("profile 'EQ' is both required and excluded", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Find the span of the first quoted occurrence of `text`.
    pub fn find_quoted(&self, text: &str) -> Option<SourceSpan> {
        let needle = format!("\"{}\"", text);
        self.src
            .find(&needle)
            .map(|offset| SourceSpan::from((offset, needle.len())))
    }

    /// Create a config parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a class map parse error from a JSON error.
    pub fn model_error(&self, source: serde_json::Error) -> Box<Error> {
        // serde_json reports line 0 when no position is known
        let span = (source.line() > 0).then(|| {
            let offset = SourceOffset::from_location(&self.src, source.line(), source.column());
            SourceSpan::new(offset, 0)
        });
        Box::new(Error::ModelParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the --config path and the `model` key in cimgen.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse cimgen.toml")]
    #[diagnostic(code(cimgen::config_parse_error))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse class map")]
    #[diagnostic(
        code(cimgen::model_parse_error),
        help("the class map is a JSON object with a `classes` array")
    )]
    ModelParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(cimgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
