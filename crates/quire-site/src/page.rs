//! Single page generation.

use std::fs;
use std::path::PathBuf;

use quire_markdown::{document_to_html, extract_title};

use crate::discover::PageJob;
use crate::error::PageError;
use crate::template::Template;

/// Convert one markdown file into an HTML page on disk.
///
/// Parent directories of the destination are created as needed. Returns the
/// written destination path.
pub fn generate_page(
    job: &PageJob,
    template: &Template,
    base_path: &str,
) -> Result<PathBuf, PageError> {
    let markdown = fs::read_to_string(&job.source).map_err(|source| PageError::Read {
        path: job.source.clone(),
        source,
    })?;

    let markdown_error = |source| PageError::Markdown {
        path: job.source.clone(),
        source,
    };
    let content = document_to_html(&markdown).map_err(markdown_error)?;
    let title = extract_title(&markdown).map_err(markdown_error)?;
    let page = template.render(&title, &content, base_path);

    let write_error = |source| PageError::Write {
        path: job.dest.clone(),
        source,
    };
    if let Some(parent) = job.dest.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(&job.dest, page).map_err(write_error)?;

    tracing::info!(
        source = %job.source.display(),
        dest = %job.dest.display(),
        base_path,
        "Generated page"
    );
    Ok(job.dest.clone())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use quire_markdown::MarkdownError;

    use super::*;

    fn job(root: &Path, name: &str, markdown: &str) -> PageJob {
        let source = root.join("content").join(name);
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        fs::write(&source, markdown).unwrap();
        PageJob {
            source,
            dest: root.join("docs/nested").join(name).with_extension("html"),
        }
    }

    #[test]
    fn test_generate_page() {
        let temp = tempfile::tempdir().unwrap();
        let job = job(temp.path(), "index.md", "# Home\n\nSee [posts](/blog).");
        let template = Template::new("<title>{{ Title }}</title><main>{{ Content }}</main>");

        let dest = generate_page(&job, &template, "/site/").unwrap();

        assert_eq!(dest, job.dest);
        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            r#"<title>Home</title><main><div><h1>Home</h1><p>See <a href="/site/blog">posts</a>.</p></div></main>"#
        );
    }

    #[test]
    fn test_generate_page_without_title() {
        let temp = tempfile::tempdir().unwrap();
        let job = job(temp.path(), "untitled.md", "just text");
        let template = Template::new("{{ Content }}");

        let err = generate_page(&job, &template, "/").unwrap_err();

        assert!(matches!(
            err,
            PageError::Markdown {
                source: MarkdownError::NoHeadingFound,
                ..
            }
        ));
        assert!(!job.dest.exists());
    }

    #[test]
    fn test_generate_page_missing_source() {
        let temp = tempfile::tempdir().unwrap();
        let job = PageJob {
            source: temp.path().join("missing.md"),
            dest: temp.path().join("missing.html"),
        };

        let err = generate_page(&job, &Template::new(""), "/").unwrap_err();

        assert!(matches!(err, PageError::Read { .. }));
    }
}
