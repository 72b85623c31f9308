//! Pattern matching for ownership files.
//!
//! Each gitignore-style pattern is lowered to a single regular expression.
//! The rules follow gitignore with one deliberate difference: `dir/*`
//! matches only direct children of `dir`, never deeper descendants.
//!
//! - `*` matches any run of non-slash characters
//! - `**` matches across directories (`/**/`, leading `**/`, trailing `/**`)
//! - a leading `/` anchors to the ownership root
//! - a trailing `/` matches the directory and everything beneath it
//! - patterns without a leading `/` match at any depth
//! - `\#`, `\!`, `\*` and `?` are literal characters

use log::warn;
use regex::Regex;

/// Stands in for `*` characters that must survive the single-star rewrite.
const MAGIC_STAR: &str = "#$~";

/// A compiled ownership pattern that can match repository paths.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// The pattern as written in the ownership file.
    original: String,
    /// `None` when the lowered expression failed to compile; such a pattern
    /// matches nothing.
    regex: Option<Regex>,
}

impl CompiledPattern {
    /// Compiles an ownership pattern.
    ///
    /// Never fails: a pattern whose expression does not compile degrades to
    /// a matcher that matches nothing, and a warning is logged.
    pub fn new(pattern: &str) -> Self {
        let expr = pattern_to_regex(pattern);
        let regex = match Regex::new(&expr) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!("Pattern {:?} does not compile ({}); it will match nothing", pattern, e);
                None
            }
        };

        Self {
            original: pattern.to_string(),
            regex,
        }
    }

    /// Returns the original pattern string.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Returns the lowered regular expression, if it compiled.
    pub fn regex_str(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }

    /// Returns true if the pattern compiled to a working matcher.
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    /// Returns true if this pattern is anchored to the ownership root.
    pub fn is_anchored(&self) -> bool {
        self.regex_str().is_some_and(|r| r.starts_with("^(|/)"))
    }

    /// Returns true if this pattern names a directory and its contents.
    pub fn is_directory_only(&self) -> bool {
        self.original.ends_with('/')
    }

    /// Checks if this pattern matches the given path.
    ///
    /// The path is relative to the ownership root and uses forward slashes;
    /// a leading slash is accepted.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.as_ref().is_some_and(|r| r.is_match(path))
    }
}

/// Lowers an ownership pattern into a regular expression.
///
/// This is a pure function of the pattern text; the steps run in a fixed
/// order and each one sees the output of the previous.
pub fn pattern_to_regex(pattern: &str) -> String {
    let mut line = pattern.to_string();

    // A leading `\#` or `\!` is a literal character, not a marker.
    if line.starts_with("\\#") || line.starts_with("\\!") {
        line.remove(0);
    }

    // `foo/*.ext` style patterns are anchored to the root.
    if needs_root_anchor(&line) && !line.starts_with('/') {
        line.insert(0, '/');
    }

    line = line.replace('.', "\\.");
    // Braces are literal in paths; the regex engine would read them as a
    // repetition and reject the expression.
    line = line.replace('{', "\\{").replace('}', "\\}");

    if line.starts_with("/**/") {
        line.remove(0);
    }
    line = line.replace("/**/", "(/|/.+/)");
    line = line.replace("**/", &format!("(|.{MAGIC_STAR}/)"));
    line = line.replace("/**", &format!("(|/.{MAGIC_STAR})"));

    line = line.replace("\\*", &format!("\\{MAGIC_STAR}"));
    line = line.replace('*', "([^/]*)");

    line = line.replace('?', "\\?");

    line = line.replace(MAGIC_STAR, "*");

    let expr = if line.ends_with('/') {
        format!("{line}(|.*)$")
    } else {
        format!("{line}$")
    };

    match expr.strip_prefix('/') {
        Some(rest) => format!("^(|/){rest}"),
        None => format!("^(|.*/){expr}"),
    }
}

/// Reports whether a pattern contains a `/`, preceded by a character other
/// than `/` or `+`, that is later followed by `*.`.
///
/// This is exactly the trigger `[^/+]/.*\*\.` and is deliberately narrow.
fn needs_root_anchor(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();
    (1..bytes.len()).any(|i| {
        bytes[i] == b'/'
            && bytes[i - 1] != b'/'
            && bytes[i - 1] != b'+'
            && pattern[i + 1..].contains("*.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matches(pattern: &str, matching: &[&str], non_matching: &[&str]) {
        let compiled = CompiledPattern::new(pattern);
        for path in matching {
            assert!(compiled.matches(path), "`{}` should match `{}`", pattern, path);
        }
        for path in non_matching {
            assert!(!compiled.matches(path), "`{}` should not match `{}`", pattern, path);
        }
    }

    #[test]
    fn lowered_expressions() {
        let cases = [
            ("*", "^(|.*/)([^/]*)$"),
            ("*.js", "^(|.*/)([^/]*)\\.js$"),
            ("/build/logs/", "^(|/)build/logs/(|.*)$"),
            ("docs/*", "^(|.*/)docs/([^/]*)$"),
            ("docs/*.md", "^(|/)docs/([^/]*)\\.md$"),
            ("docs/**", "^(|.*/)docs(|/.*)$"),
            ("**/logs", "^(|.*/)(|.*/)logs$"),
            ("a/**/b", "^(|.*/)a(/|/.+/)b$"),
            ("/**/b", "^(|.*/)(|.*/)b$"),
            ("\\#foo/", "^(|.*/)#foo/(|.*)$"),
            ("foo\\*", "^(|.*/)foo\\*$"),
            ("what?", "^(|.*/)what\\?$"),
            ("\\!important", "^(|.*/)!important$"),
            (
                "{{cookiecutter.name}}/",
                "^(|.*/)\\{\\{cookiecutter\\.name\\}\\}/(|.*)$",
            ),
            ("src/{a}/", "^(|.*/)src/\\{a\\}/(|.*)$"),
        ];

        for (pattern, expected) in cases {
            assert_eq!(pattern_to_regex(pattern), expected, "lowering `{}`", pattern);
        }
    }

    #[test]
    fn root_anchor_trigger() {
        assert!(needs_root_anchor("docs/*.md"));
        assert!(needs_root_anchor("a/b/c*.txt"));
        assert!(!needs_root_anchor("*.md"));
        assert!(!needs_root_anchor("docs/*"));
        assert!(needs_root_anchor("docs//*.md"));
        assert!(!needs_root_anchor("//*.md"));
        assert!(!needs_root_anchor("c++/*.h"));
        assert!(!needs_root_anchor("/*.md"));
    }

    #[test]
    fn single_star_matches_any_depth() {
        assert_matches("*", &["main.rs", "src/main.rs", "a/b/c/d.txt"], &[]);
    }

    #[test]
    fn extension_wildcard() {
        assert_matches(
            "*.rs",
            &["main.rs", "src/lib.rs", "/src/parse/mod.rs"],
            &["main.txt", "main.rsx"],
        );
    }

    #[test]
    fn directory_pattern() {
        assert_matches(
            "foobar/",
            &["foobar/", "foobar/anything", "a/foobar/b/c"],
            &["xfoobar/anything", "foobar"],
        );
    }

    #[test]
    fn anchored_directory_pattern() {
        assert_matches(
            "/build/logs/",
            &["build/logs/foo.go", "/build/logs/foo/bar.go"],
            &["foo/build/logs/foo.go"],
        );
    }

    #[test]
    fn recursive_suffix_matches_directory_and_descendants() {
        assert_matches("docs/**", &["docs", "docs/x", "docs/x/y"], &["mydocs/x"]);
    }

    #[test]
    fn trailing_star_is_one_level() {
        assert_matches("docs/*", &["docs/x", "blah/docs/x"], &["docs/x/y", "docs"]);
    }

    #[test]
    fn slash_star_dot_is_anchored() {
        assert_matches(
            "docs/*.md",
            &["docs/README.md", "/docs/README.md"],
            &["blah/docs/README.md", "docs/api/index.md"],
        );
    }

    #[test]
    fn double_star_between_segments() {
        assert_matches("a/**/b", &["a/b", "a/x/b", "a/x/y/b"], &["a/xb", "ab"]);
    }

    #[test]
    fn leading_double_star() {
        assert_matches("**/logs", &["logs", "x/logs", "x/y/logs"], &["xlogs"]);
    }

    #[test]
    fn escaped_leading_hash_is_literal() {
        assert_matches("\\#foo/", &["#foo/bar.go"], &["foo/bar.go"]);
    }

    #[test]
    fn escaped_leading_bang_is_literal() {
        assert_matches("\\!important", &["!important", "a/!important"], &["important"]);
    }

    #[test]
    fn braces_are_literal() {
        assert_matches(
            "{{cookiecutter.name}}/",
            &["{{cookiecutter.name}}/x.py", "tpl/{{cookiecutter.name}}/a/b.py"],
            &["cookiecutter.name/x.py", "{cookiecutter.name}/x.py"],
        );
        assert_matches("src/{a}/", &["src/{a}/x"], &["src/a/x"]);
        assert_matches("a{1/", &["a{1/x"], &["a/x"]);
        assert!(CompiledPattern::new("a{1/").is_valid());
        assert!(CompiledPattern::new("routes/{id}/*.ts").is_valid());
    }

    #[test]
    fn escaped_star_is_literal() {
        assert_matches("foo\\*", &["foo*"], &["foobar"]);
    }

    #[test]
    fn question_mark_is_literal() {
        assert_matches("what?", &["what?"], &["whats"]);
    }

    #[test]
    fn pattern_with_space() {
        assert_matches(
            "space/test space/",
            &["/space/test space/doc1.txt"],
            &["space/test/doc1.txt"],
        );
    }

    #[test]
    fn degenerate_pattern_matches_nothing() {
        let pattern = CompiledPattern::new("src/(unclosed");
        assert!(!pattern.is_valid());
        assert!(!pattern.matches("src/(unclosed"));
        assert!(!pattern.matches("anything"));
    }

    #[test]
    fn compiling_twice_agrees() {
        let paths = ["a", "a/b", "docs/x", "docs/x/y", "#foo/bar", "x.md", "/a/b/c.md"];
        for pattern in ["*", "docs/*", "docs/**", "/a/", "*.md", "a/**/c.md"] {
            let first = CompiledPattern::new(pattern);
            let second = CompiledPattern::new(pattern);
            for path in paths {
                assert_eq!(first.matches(path), second.matches(path));
            }
        }
    }

    #[test]
    fn pattern_metadata() {
        let anchored = CompiledPattern::new("/src/");
        assert!(anchored.is_anchored());
        assert!(anchored.is_directory_only());
        assert_eq!(anchored.as_str(), "/src/");

        let floating = CompiledPattern::new("*.rs");
        assert!(!floating.is_anchored());
        assert!(!floating.is_directory_only());
    }
}
