//! Page title extraction.

use crate::error::MarkdownError;

/// Return the text of the first `# ` heading line.
///
/// Lines are trimmed before matching, so an indented `# Title` counts.
/// Deeper headings (`## `) are ignored.
pub fn extract_title(markdown: &str) -> Result<String, MarkdownError> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_owned())
        .ok_or(MarkdownError::NoHeadingFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("# Hello").unwrap(), "Hello");
    }

    #[test]
    fn test_extract_title_trims() {
        assert_eq!(extract_title("   #   Spaced out   \nbody").unwrap(), "Spaced out");
    }

    #[test]
    fn test_extract_title_first_h1_wins() {
        let md = "intro\n\n## Sub\n\n# First\n\n# Second";
        assert_eq!(extract_title(md).unwrap(), "First");
    }

    #[test]
    fn test_extract_title_missing() {
        assert_eq!(
            extract_title("## Only a subheading\n\ntext"),
            Err(MarkdownError::NoHeadingFound)
        );
        assert_eq!(extract_title(""), Err(MarkdownError::NoHeadingFound));
        assert_eq!(extract_title("#NoSpace"), Err(MarkdownError::NoHeadingFound));
    }
}
