use std::fmt;

use crate::accessor::{validate_segment, SEPARATOR};
use crate::error::{NamingError, NamingResult};

/// Qualifier separator used by the declarations we read.
pub const PATH_SEPARATOR: &str = "::";

/// A fully-qualified function name such as `ns::BarCls::fun`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    /// Parses `outer::inner::name`. Segments are trimmed; empty ones are rejected.
    pub fn parse(path: &str) -> NamingResult<Self> {
        let segments: Vec<String> = path
            .split(PATH_SEPARATOR)
            .map(|s| s.trim().to_string())
            .collect();
        if segments.iter().any(String::is_empty) {
            return Err(NamingError::EmptySegment(path.to_string()));
        }
        Ok(Self { segments })
    }

    pub fn from_segments<I, S>(segments: I) -> NamingResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() || segments.iter().any(String::is_empty) {
            return Err(NamingError::EmptySegment(segments.join(PATH_SEPARATOR)));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The unqualified last segment.
    pub fn base_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn cpp_path(&self) -> String {
        self.segments.join(PATH_SEPARATOR)
    }

    /// Segments joined with the accessor separator (`ns__ns2__bar`).
    ///
    /// Fails when a segment would make the join ambiguous.
    pub fn mangled(&self) -> NamingResult<String> {
        for segment in &self.segments {
            validate_segment(segment).map_err(|_| NamingError::InvalidSegment {
                segment: segment.clone(),
                name: self.cpp_path(),
            })?;
        }
        Ok(self.segments.join(SEPARATOR))
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cpp_path())
    }
}

/// What kind of callable a target is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Free function, possibly inside namespaces.
    Function,
    /// Static member function of a class or struct.
    StaticMethod,
}

/// A callable whose address gets exported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    pub name: QualifiedName,
    /// Declaration-level signature text, e.g. `double (double)`.
    pub signature: String,
    pub kind: TargetKind,
}

impl Target {
    pub fn new(name: QualifiedName, signature: impl Into<String>, kind: TargetKind) -> Self {
        Self {
            name,
            signature: signature.into(),
            kind,
        }
    }

    pub fn function(path: &str, signature: impl Into<String>) -> NamingResult<Self> {
        Ok(Self::new(QualifiedName::parse(path)?, signature, TargetKind::Function))
    }

    pub fn static_method(path: &str, signature: impl Into<String>) -> NamingResult<Self> {
        Ok(Self::new(QualifiedName::parse(path)?, signature, TargetKind::StaticMethod))
    }
}
