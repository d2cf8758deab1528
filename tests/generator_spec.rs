use std::fs;

use aac_docgen::docs::{self, DocumentKind};
use aac_docgen::generator::{DocumentState, Generator, GeneratorConfig, DOCS_SUBDIR};
use speculate2::speculate;
use tempfile::TempDir;

fn quiet_generator(dir: &TempDir) -> Generator {
    let mut config = GeneratorConfig::new(dir.path());
    config.quiet = true;
    Generator::new(config)
}

speculate! {
    before {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let generator = quiet_generator(&dir);
    }

    describe "generate_all" {
        it "writes all four documents into the base directory" {
            let report = generator.generate_all().expect("Generation failed");

            assert_eq!(report.documents.len(), 4);
            for spec in docs::all() {
                assert!(dir.path().join(spec.filename).is_file(), "{} missing", spec.filename);
            }
        }

        it "writes each template verbatim" {
            generator.generate_all().expect("Generation failed");

            for spec in docs::all() {
                let on_disk = fs::read_to_string(dir.path().join(spec.filename))
                    .expect("Failed to read generated file");
                assert_eq!(on_disk, spec.template, "{} differs from its template", spec.filename);
            }
        }

        it "generates documents in registry order" {
            let report = generator.generate_all().expect("Generation failed");

            let kinds: Vec<DocumentKind> = report.documents.iter().map(|d| d.kind).collect();
            assert_eq!(kinds, vec![
                DocumentKind::Requirements,
                DocumentKind::Roadmap,
                DocumentKind::FutureVision,
                DocumentKind::RepositorySetup,
            ]);
        }

        it "creates the docs subdirectory without writing into it" {
            generator.generate_all().expect("Generation failed");

            let docs_dir = dir.path().join(DOCS_SUBDIR);
            assert!(docs_dir.is_dir());

            let entries: Vec<_> = fs::read_dir(&docs_dir)
                .expect("Failed to read docs dir")
                .collect();
            assert!(entries.is_empty(), "docs subdirectory should receive no files");
        }

        it "is idempotent across runs" {
            generator.generate_all().expect("First run failed");
            let first: Vec<String> = docs::all()
                .iter()
                .map(|s| fs::read_to_string(dir.path().join(s.filename)).expect("read failed"))
                .collect();

            generator.generate_all().expect("Second run failed");
            let second: Vec<String> = docs::all()
                .iter()
                .map(|s| fs::read_to_string(dir.path().join(s.filename)).expect("read failed"))
                .collect();

            assert_eq!(first, second);
        }

        it "fully overwrites a pre-existing file with different content" {
            let target = dir.path().join("TODO.md");
            fs::write(&target, "stale notes that must not survive\n").expect("Seed write failed");

            generator.generate_all().expect("Generation failed");

            let on_disk = fs::read_to_string(&target).expect("Failed to read generated file");
            let template = docs::get(DocumentKind::Roadmap).template;
            assert_eq!(on_disk, template);
            assert!(!on_disk.contains("stale notes"));
        }

        it "reports byte counts matching the templates" {
            let report = generator.generate_all().expect("Generation failed");

            for written in &report.documents {
                let spec = docs::get(written.kind);
                assert_eq!(written.bytes, spec.template.len());
                assert_eq!(written.path, dir.path().join(spec.filename));
            }
        }

        it "serializes the report to JSON" {
            let report = generator.generate_all().expect("Generation failed");

            let json = serde_json::to_string(&report).expect("Serialization failed");
            assert!(json.contains("\"requirements\""));
            assert!(json.contains("REQUIREMENTS.md"));
        }
    }

    describe "write_document" {
        it "writes a single document without touching the others" {
            let spec = docs::get(DocumentKind::FutureVision);
            let written = generator.write_document(spec).expect("Write failed");

            assert_eq!(written.filename, "FUTURE.md");
            assert!(dir.path().join("FUTURE.md").is_file());
            assert!(!dir.path().join("REQUIREMENTS.md").exists());
        }
    }

    describe "check_all" {
        it "reports every document missing before any run" {
            let report = generator.check_all().expect("Check failed");

            assert_eq!(report.documents.len(), 4);
            assert!(report.documents.iter().all(|d| d.state == DocumentState::Missing));
            assert!(!report.all_ok());
        }

        it "reports every document ok after a run" {
            generator.generate_all().expect("Generation failed");

            let report = generator.check_all().expect("Check failed");
            assert!(report.all_ok());
        }

        it "reports drift after a generated file is modified" {
            generator.generate_all().expect("Generation failed");
            fs::write(dir.path().join("FUTURE.md"), "# Rewritten\n").expect("Modify failed");

            let report = generator.check_all().expect("Check failed");

            let future = report
                .documents
                .iter()
                .find(|d| d.kind == DocumentKind::FutureVision)
                .expect("future_vision entry missing");
            assert_eq!(future.state, DocumentState::Drifted);
            assert!(!report.all_ok());
        }

        it "treats a deleted document as missing, not drifted" {
            generator.generate_all().expect("Generation failed");
            fs::remove_file(dir.path().join("GITHUB_SETUP.md")).expect("Delete failed");

            let report = generator.check_all().expect("Check failed");

            let setup = report
                .documents
                .iter()
                .find(|d| d.kind == DocumentKind::RepositorySetup)
                .expect("repository_setup entry missing");
            assert_eq!(setup.state, DocumentState::Missing);
        }
    }

    describe "ensure_docs_dir" {
        it "creates the directory when absent" {
            let path = generator.ensure_docs_dir().expect("Create failed");
            assert!(path.is_dir());
            assert_eq!(path, dir.path().join(DOCS_SUBDIR));
        }

        it "succeeds when the directory already exists" {
            generator.ensure_docs_dir().expect("First create failed");
            generator.ensure_docs_dir().expect("Second create failed");
        }
    }
}
