//! Load, build and write in one pass.

use std::path::{Path, PathBuf};

use crate::Error;
use crate::index::{TopicPlan, build_indexes, plan_topics};
use crate::mkdocs::load_mkdocs;
use crate::writer::IndexWriter;

/// Inputs for [`generate`].
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Path to `mkdocs.yml`.
    pub mkdocs_path: PathBuf,
    /// Root of the docs tree that holds topic directories.
    pub docs_dir: PathBuf,
    /// Build indexes without writing anything.
    pub dry_run: bool,
}

/// Outcome of a [`generate`] run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Index documents written, or that would be written on a dry run.
    pub written: Vec<PathBuf>,
    /// Top-level groups that got no index.
    pub skipped: usize,
}

/// Generate an index document for every eligible topic in `mkdocs.yml`.
///
/// Stops at the first error. Documents written before the error are kept.
pub fn generate(options: &GenerateOptions) -> Result<GenerateReport, Error> {
    let mkdocs = load_mkdocs(&options.mkdocs_path)?;
    let indexes = build_indexes(&mkdocs.pages)?;
    let writer = IndexWriter::new(&options.docs_dir);

    let mut report = GenerateReport {
        written: Vec::with_capacity(indexes.len()),
        skipped: mkdocs.pages.len() - indexes.len(),
    };
    for index in &indexes {
        let path = if options.dry_run {
            writer.destination(&index.topic)
        } else {
            writer.write(index)?
        };
        report.written.push(path);
    }

    tracing::debug!(
        written = report.written.len(),
        skipped = report.skipped,
        dry_run = options.dry_run,
        "Index generation completed"
    );
    Ok(report)
}

/// Load `mkdocs.yml` and report what [`generate`] would do per topic.
pub fn plan(mkdocs_path: &Path) -> Result<Vec<TopicPlan>, Error> {
    let mkdocs = load_mkdocs(mkdocs_path)?;
    Ok(plan_topics(&mkdocs.pages))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::index::SkipReason;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const MKDOCS: &str = r"
site_name: Handbook
pages:
  - Home: index.md
  - Foo:
      - Ch1: foo/ch1.md
      - Intro: foo/index.md
  - Bar:
      - Setup: bar/setup.md
      - Usage: bar/usage.md
  - PL:
      - Hello: pl/hello.md
  - Topics:
      - Baz:
          - One: topics/baz/one.md
";

    fn site() -> (TempDir, GenerateOptions) {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("mkdocs.yml"), MKDOCS).unwrap();
        for dir in ["foo", "bar", "pl", "topics"] {
            fs::create_dir_all(tmp.path().join("docs").join(dir)).unwrap();
        }
        let options = GenerateOptions {
            mkdocs_path: tmp.path().join("mkdocs.yml"),
            docs_dir: tmp.path().join("docs"),
            dry_run: false,
        };
        (tmp, options)
    }

    #[test]
    fn test_generate_writes_eligible_topics() {
        let (tmp, options) = site();
        let docs = tmp.path().join("docs");

        let report = generate(&options).unwrap();

        assert_eq!(
            report.written,
            vec![docs.join("foo/index.md"), docs.join("bar/index.md")]
        );
        assert_eq!(report.skipped, 3);
        assert_eq!(
            fs::read_to_string(docs.join("foo/index.md")).unwrap(),
            "### **Foo**\n\n* [Ch1](ch1.md)"
        );
        assert_eq!(
            fs::read_to_string(docs.join("bar/index.md")).unwrap(),
            "### **Bar**\n\n* [Setup](setup.md)\n* [Usage](usage.md)"
        );
        assert!(!docs.join("pl/index.md").exists());
        assert!(!docs.join("topics/index.md").exists());
    }

    #[test]
    fn test_generate_is_idempotent() {
        let (tmp, options) = site();
        let foo = tmp.path().join("docs/foo/index.md");

        generate(&options).unwrap();
        let first = fs::read(&foo).unwrap();
        generate(&options).unwrap();
        let second = fs::read(&foo).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_dry_run_writes_nothing() {
        let (tmp, options) = site();
        let options = GenerateOptions {
            dry_run: true,
            ..options
        };

        let report = generate(&options).unwrap();

        assert_eq!(report.written.len(), 2);
        assert!(report.written.iter().all(|p| !p.exists()));
        assert!(!tmp.path().join("docs/foo/index.md").exists());
    }

    #[test]
    fn test_generate_missing_topic_directory() {
        let (tmp, options) = site();
        fs::remove_dir(tmp.path().join("docs/bar")).unwrap();

        let err = generate(&options).unwrap_err();

        assert!(matches!(err, Error::Write(_)), "got {err:?}");
        // Earlier topics are already written.
        assert!(tmp.path().join("docs/foo/index.md").exists());
    }

    #[test]
    fn test_generate_missing_mkdocs() {
        let tmp = TempDir::new().unwrap();
        let options = GenerateOptions {
            mkdocs_path: tmp.path().join("mkdocs.yml"),
            docs_dir: tmp.path().join("docs"),
            dry_run: false,
        };
        let err = generate(&options).unwrap_err();
        assert!(matches!(err, Error::MkDocs(_)), "got {err:?}");
    }

    #[test]
    fn test_generate_short_path_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("mkdocs.yml"),
            "pages:\n  - Foo:\n      - Ch1: ch1.md\n",
        )
        .unwrap();
        fs::create_dir_all(tmp.path().join("docs/foo")).unwrap();
        let options = GenerateOptions {
            mkdocs_path: tmp.path().join("mkdocs.yml"),
            docs_dir: tmp.path().join("docs"),
            dry_run: false,
        };

        let err = generate(&options).unwrap_err();

        assert!(matches!(err, Error::Index(_)), "got {err:?}");
        assert!(!tmp.path().join("docs/foo/index.md").exists());
    }

    #[test]
    fn test_generate_skips_irregular_values() {
        let tmp = TempDir::new().unwrap();
        let yaml = r"
pages:
  - PL:
  - Count: 3
  - Foo:
      - A: foo/a.md
  - Topics:
      - Sub:
          - topics/sub/a.md
      - Notes: 7
";
        fs::write(tmp.path().join("mkdocs.yml"), yaml).unwrap();
        fs::create_dir_all(tmp.path().join("docs/foo")).unwrap();
        let options = GenerateOptions {
            mkdocs_path: tmp.path().join("mkdocs.yml"),
            docs_dir: tmp.path().join("docs"),
            dry_run: false,
        };

        let report = generate(&options).unwrap();

        assert_eq!(report.written, vec![tmp.path().join("docs/foo/index.md")]);
        assert_eq!(report.skipped, 3);
        assert_eq!(
            fs::read_to_string(tmp.path().join("docs/foo/index.md")).unwrap(),
            "### **Foo**\n\n* [A](a.md)"
        );
    }

    #[test]
    fn test_plan() {
        let (_tmp, options) = site();
        let plan = plan(&options.mkdocs_path).unwrap();
        let skips: Vec<_> = plan.iter().map(|p| (p.topic.as_str(), p.skip)).collect();
        assert_eq!(
            skips,
            vec![
                ("Home", Some(SkipReason::SinglePage)),
                ("Foo", None),
                ("Bar", None),
                ("PL", Some(SkipReason::Excluded)),
                ("Topics", Some(SkipReason::Excluded)),
            ]
        );
    }
}
