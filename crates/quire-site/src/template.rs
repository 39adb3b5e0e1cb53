//! Page template substitution.

use std::fs;
use std::io;
use std::path::Path;

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a template from disk.
    pub fn load(path: &Path) -> io::Result<Self> {
        fs::read_to_string(path).map(Self::new)
    }

    /// Fill in the placeholders and prefix root-relative URLs with `base_path`.
    ///
    /// The title is substituted before the content, so a literal
    /// `{{ Content }}` inside the title is replaced as well. Every
    /// `href="/` and `src="/` in the result, including those coming from the
    /// page content, is rewritten to start with `base_path`.
    pub fn render(&self, title: &str, content: &str, base_path: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
            .replace("href=\"/", &format!("href=\"{base_path}"))
            .replace("src=\"/", &format!("src=\"{base_path}"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TEMPLATE: &str = r#"<html><head><title>{{ Title }}</title><link href="/index.css"></head><body>{{ Content }}</body></html>"#;

    #[test]
    fn test_render_substitutes_placeholders() {
        let template = Template::new(TEMPLATE);
        assert_eq!(
            template.render("Home", "<div><p>hi</p></div>", "/"),
            r#"<html><head><title>Home</title><link href="/index.css"></head><body><div><p>hi</p></div></body></html>"#
        );
    }

    #[test]
    fn test_render_rewrites_root_relative_urls() {
        let template = Template::new(TEMPLATE);
        let html = template.render(
            "Home",
            r#"<a href="/blog">blog</a><img src="/logo.png" alt="logo"/><a href="https://x.dev">x</a>"#,
            "/site/",
        );
        assert_eq!(
            html,
            r#"<html><head><title>Home</title><link href="/site/index.css"></head><body><a href="/site/blog">blog</a><img src="/site/logo.png" alt="logo"/><a href="https://x.dev">x</a></body></html>"#
        );
    }

    #[test]
    fn test_render_without_placeholders() {
        let template = Template::new("<p>static</p>");
        assert_eq!(template.render("T", "C", "/"), "<p>static</p>");
    }

    #[test]
    fn test_load_missing_template() {
        let temp = tempfile::tempdir().unwrap();
        assert!(Template::load(&temp.path().join("template.html")).is_err());
    }
}
