//! Planning documentation generator for the AAC Communication App.
//!
//! The AAC app itself (camera capture, object detection, sentence building)
//! lives in a separate codebase; this crate only materializes its planning
//! documents. Four markdown files are embedded as templates at compile time
//! and written verbatim to a target directory:
//!
//! - `REQUIREMENTS.md` — requirements specification
//! - `TODO.md` — development roadmap
//! - `FUTURE.md` — long-term vision
//! - `GITHUB_SETUP.md` — repository setup guide
//!
//! Generation is deterministic and idempotent: re-running the tool produces
//! byte-identical files regardless of prior state.
//!
//! # Modules
//!
//! - [`docs`]: the registry of (filename, template) pairs.
//! - [`generator`]: the engine that writes the registry to disk and checks
//!   on-disk files against the embedded templates.

pub mod docs;
pub mod generator;
