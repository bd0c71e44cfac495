// src/scope/path.rs

/// Split a dotted lookup path into its segments.
///
/// Returns `None` for an empty path, an empty segment (leading, trailing or
/// doubled dot) or a segment containing whitespace.
pub fn split_path(path: &str) -> Option<Vec<&str>> {
    if path.is_empty() {
        return None;
    }

    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().all(|s| is_segment(s)) {
        Some(segments)
    } else {
        None
    }
}

fn is_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_well_formed_paths() {
        assert_eq!(split_path("a"), Some(vec!["a"]));
        assert_eq!(split_path("wf.job-1"), Some(vec!["wf", "job-1"]));
    }

    #[test]
    fn rejects_empty_and_blank_segments() {
        for path in ["", ".", "a.", ".a", "a..b", "a. b", "a b", "\t"] {
            assert_eq!(split_path(path), None, "path {path:?}");
        }
    }
}
