//! Benchmark fixtures, generated at runtime from the AST.
//!
//! Fixtures are generated lazily on first access and cached for the
//! duration of the benchmark run. All generation is deterministic.

use codeowners_resolver_core::generate::{GeneratorConfig, generate, generate_paths};
use std::path::PathBuf;
use std::sync::LazyLock;
use tempfile::TempDir;

static SMALL: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::small()));
static MEDIUM: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::medium()));
static LARGE: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::large()));
static XLARGE: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::xlarge()));
static MAX_SIZE: LazyLock<String> =
    LazyLock::new(|| generate(&GeneratorConfig::target_bytes(3_000_000)));

static PATHS: LazyLock<Vec<String>> = LazyLock::new(|| generate_paths(1_000, 7));

/// Standard fixtures for regular benchmarks.
pub fn fixtures() -> &'static [(&'static str, &'static str)] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
        vec![
            ("small", SMALL.as_str()),
            ("medium", MEDIUM.as_str()),
            ("large", LARGE.as_str()),
        ]
    });
    FIXTURES.as_slice()
}

/// Extended fixtures including a ~3MB stress file.
pub fn fixtures_extended() -> &'static [(&'static str, &'static str)] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
        vec![
            ("small", SMALL.as_str()),
            ("medium", MEDIUM.as_str()),
            ("large", LARGE.as_str()),
            ("xlarge", XLARGE.as_str()),
            ("max_size", MAX_SIZE.as_str()),
        ]
    });
    FIXTURES.as_slice()
}

/// Query paths shared by every resolution benchmark.
pub fn query_paths() -> &'static [String] {
    PATHS.as_slice()
}

/// A repository whose ownership file sits a few levels above the start
/// directory, so locating it has to ascend.
///
/// The temp directory is kept alive as long as this struct exists.
pub struct BenchmarkRepo {
    #[allow(dead_code)] // Kept to maintain temp directory lifetime
    temp_dir: TempDir,
    /// Directory the search starts from.
    pub start: PathBuf,
}

impl BenchmarkRepo {
    /// Creates the repository with the medium fixture as its ownership file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let root = temp_dir.path();

        std::fs::create_dir_all(root.join(".github")).expect("failed to create .github");
        std::fs::write(root.join(".github/CODEOWNERS"), MEDIUM.as_str())
            .expect("failed to write CODEOWNERS");

        let start = root.join("src/internal/deep/module");
        std::fs::create_dir_all(&start).expect("failed to create start directory");

        Self { temp_dir, start }
    }
}

static REPO: LazyLock<BenchmarkRepo> = LazyLock::new(BenchmarkRepo::new);

/// Start directory inside the shared benchmark repository.
pub fn repo_start() -> &'static std::path::Path {
    &REPO.start
}
