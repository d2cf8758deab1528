//! The planning document registry.
//!
//! Each entry pairs a fixed output filename with a markdown template embedded
//! at compile time. Templates are written verbatim — no substitution, no
//! parameterization. The registry order is the generation order.

use serde::{Deserialize, Serialize};

/// Identifies one of the four planning documents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Requirements,
    Roadmap,
    FutureVision,
    RepositorySetup,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requirements => "requirements",
            Self::Roadmap => "roadmap",
            Self::FutureVision => "future_vision",
            Self::RepositorySetup => "repository_setup",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "requirements" => Some(Self::Requirements),
            "roadmap" => Some(Self::Roadmap),
            "future_vision" => Some(Self::FutureVision),
            "repository_setup" => Some(Self::RepositorySetup),
            _ => None,
        }
    }
}

/// An immutable pairing of output filename and embedded template text.
#[derive(Debug, Clone, Copy)]
pub struct DocumentSpec {
    pub kind: DocumentKind,
    /// Name of the file written into the base directory.
    pub filename: &'static str,
    /// Complete markdown content, written verbatim.
    pub template: &'static str,
}

/// Summary of a registry entry without the template body, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentInfo {
    pub kind: DocumentKind,
    pub filename: &'static str,
    pub bytes: usize,
}

impl From<&DocumentSpec> for DocumentInfo {
    fn from(spec: &DocumentSpec) -> Self {
        Self {
            kind: spec.kind,
            filename: spec.filename,
            bytes: spec.template.len(),
        }
    }
}

const REGISTRY: [DocumentSpec; 4] = [
    DocumentSpec {
        kind: DocumentKind::Requirements,
        filename: "REQUIREMENTS.md",
        template: include_str!("templates/REQUIREMENTS.md"),
    },
    DocumentSpec {
        kind: DocumentKind::Roadmap,
        filename: "TODO.md",
        template: include_str!("templates/TODO.md"),
    },
    DocumentSpec {
        kind: DocumentKind::FutureVision,
        filename: "FUTURE.md",
        template: include_str!("templates/FUTURE.md"),
    },
    DocumentSpec {
        kind: DocumentKind::RepositorySetup,
        filename: "GITHUB_SETUP.md",
        template: include_str!("templates/GITHUB_SETUP.md"),
    },
];

/// All documents in generation order.
pub fn all() -> &'static [DocumentSpec] {
    &REGISTRY
}

/// Look up a single document by kind.
pub fn get(kind: DocumentKind) -> &'static DocumentSpec {
    REGISTRY
        .iter()
        .find(|spec| spec.kind == kind)
        .expect("every kind is registered")
}
