//! Slash-separated path arithmetic for `FileSystem` names.
//!
//! Names are relative, use `/` on every platform, and `"."` is the root of
//! the filesystem. These helpers keep them in canonical form.

/// Returns the shortest equivalent form of a slash-separated path.
///
/// Repeated slashes and `.` segments are dropped, `..` segments consume the
/// segment before them, and an empty result becomes `"."`.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|p| *p != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Joins a name onto a directory and cleans the result.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        return clean(name);
    }
    clean(&format!("{dir}/{name}"))
}

/// Returns the directory containing `path`.
///
/// The parent of a single segment is `"."`, and the parent of `"."` or `"/"`
/// is itself.
pub fn parent(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => clean(&path[..=idx]),
        None => ".".to_string(),
    }
}

/// Length of the volume prefix of `path` (`C:` on Windows, nothing elsewhere).
pub fn volume_name_len(path: &str) -> usize {
    let bytes = path.as_bytes();
    if cfg!(windows) && bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        2
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_cases() {
        let cases = [
            ("", "."),
            (".", "."),
            ("src", "src"),
            ("src/", "src"),
            ("./src//foo/.", "src/foo"),
            ("src/foo/../bar", "src/bar"),
            ("../a", "../a"),
            ("/", "/"),
            ("/../a", "/a"),
            ("/a/b/", "/a/b"),
        ];
        for (input, expected) in cases {
            assert_eq!(clean(input), expected, "cleaning `{}`", input);
        }
    }

    #[test]
    fn join_cases() {
        assert_eq!(join(".", "docs"), "docs");
        assert_eq!(join("src", "."), "src");
        assert_eq!(join("src", ".github"), "src/.github");
        assert_eq!(join("", "CODEOWNERS"), "CODEOWNERS");
        assert_eq!(join("/", "docs"), "/docs");
    }

    #[test]
    fn parent_ascends_to_fixed_point() {
        assert_eq!(parent("src/foo/bar"), "src/foo");
        assert_eq!(parent("src"), ".");
        assert_eq!(parent("."), ".");
        assert_eq!(parent("/a"), "/");
        assert_eq!(parent("/"), "/");
    }

    #[test]
    fn relative_names_have_no_volume() {
        assert_eq!(volume_name_len("src/foo"), 0);
    }
}
