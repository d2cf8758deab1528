//! The generation engine.
//!
//! Materializes the document registry on disk: one write per document, in
//! registry order, each file fully truncated and rewritten. There is no
//! retry and no rollback — a failed write aborts the sequence and leaves
//! earlier documents in place.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::docs::{self, DocumentKind, DocumentSpec};

/// Side directory created under the base directory before generation.
///
/// The four documents are written to the base directory itself, not into
/// this subdirectory; it is created empty. See DESIGN.md.
pub const DOCS_SUBDIR: &str = "docs";

/// Filesystem errors raised while generating or checking documents.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where and how the generator writes.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the documents are written into.
    pub base_dir: PathBuf,
    /// Suppress per-document confirmation lines on stdout.
    pub quiet: bool,
}

impl GeneratorConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            quiet: false,
        }
    }
}

/// One successfully written document.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenDocument {
    pub kind: DocumentKind,
    pub filename: &'static str,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Result of a full generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub base_dir: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub documents: Vec<WrittenDocument>,
}

/// Comparison of one on-disk file against its embedded template.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentState {
    /// File exists and is byte-identical to the template.
    Ok,
    /// File exists but its content differs from the template.
    Drifted,
    /// File does not exist.
    Missing,
}

impl DocumentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Drifted => "drifted",
            Self::Missing => "missing",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentCheck {
    pub kind: DocumentKind,
    pub filename: &'static str,
    pub state: DocumentState,
}

/// Result of comparing every document against its template.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub base_dir: PathBuf,
    pub documents: Vec<DocumentCheck>,
}

impl CheckReport {
    pub fn all_ok(&self) -> bool {
        self.documents.iter().all(|d| d.state == DocumentState::Ok)
    }
}

pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Create the `docs/` side directory if it is missing.
    pub fn ensure_docs_dir(&self) -> Result<PathBuf, GeneratorError> {
        let path = self.config.base_dir.join(DOCS_SUBDIR);
        fs::create_dir_all(&path).map_err(|source| GeneratorError::CreateDir {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Write a single document's template verbatim to its target file.
    ///
    /// Existing content is truncated. There is no merge, backup, or
    /// versioning — last writer wins.
    pub fn write_document(&self, spec: &DocumentSpec) -> Result<WrittenDocument, GeneratorError> {
        let path = self.config.base_dir.join(spec.filename);
        fs::write(&path, spec.template).map_err(|source| GeneratorError::WriteDocument {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(
            filename = spec.filename,
            bytes = spec.template.len(),
            "wrote document"
        );

        Ok(WrittenDocument {
            kind: spec.kind,
            filename: spec.filename,
            path,
            bytes: spec.template.len(),
        })
    }

    /// Run the full generation sequence in registry order.
    ///
    /// Prints a confirmation line per document unless the config is quiet.
    /// A write failure aborts the sequence; documents already written stay
    /// on disk.
    pub fn generate_all(&self) -> Result<GenerationReport, GeneratorError> {
        self.ensure_docs_dir()?;

        let mut documents = Vec::with_capacity(docs::all().len());
        for spec in docs::all() {
            let written = self.write_document(spec)?;
            if !self.config.quiet {
                println!("✓ Created {}", written.filename);
            }
            documents.push(written);
        }

        Ok(GenerationReport {
            base_dir: self.config.base_dir.clone(),
            generated_at: Utc::now(),
            documents,
        })
    }

    /// Compare every on-disk document against its embedded template.
    pub fn check_all(&self) -> Result<CheckReport, GeneratorError> {
        let mut documents = Vec::with_capacity(docs::all().len());
        for spec in docs::all() {
            let path = self.config.base_dir.join(spec.filename);
            let state = if path.exists() {
                let on_disk =
                    fs::read_to_string(&path).map_err(|source| GeneratorError::ReadDocument {
                        path: path.clone(),
                        source,
                    })?;
                if on_disk == spec.template {
                    DocumentState::Ok
                } else {
                    DocumentState::Drifted
                }
            } else {
                DocumentState::Missing
            };

            documents.push(DocumentCheck {
                kind: spec.kind,
                filename: spec.filename,
                state,
            });
        }

        Ok(CheckReport {
            base_dir: self.config.base_dir.clone(),
            documents,
        })
    }
}
