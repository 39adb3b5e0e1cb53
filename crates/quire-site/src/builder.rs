//! Whole-site build orchestration.

use std::path::PathBuf;

use quire_config::SiteConfig;
use rayon::prelude::*;

use crate::copy::copy_static;
use crate::discover::discover_pages;
use crate::error::{BuildError, PageError};
use crate::page::generate_page;
use crate::template::Template;

/// Outcome of a site build.
///
/// Page failures don't stop the build: pages that generated successfully are
/// listed in `generated` while the others are collected in `errors`.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Destination paths of copied static files.
    pub copied: Vec<PathBuf>,
    /// Destination paths of generated pages.
    pub generated: Vec<PathBuf>,
    /// Pages that failed to generate.
    pub errors: Vec<PageError>,
}

impl BuildReport {
    /// True when every discovered page was generated.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Builds a static site from resolved configuration.
///
/// ```no_run
/// use quire_config::Config;
/// use quire_site::SiteBuilder;
///
/// let config = Config::load(None, None)?;
/// let report = SiteBuilder::new(config.site_resolved).build()?;
/// println!("generated {} pages", report.generated.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    config: SiteConfig,
}

impl SiteBuilder {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Run the build.
    ///
    /// 1. Reset the output directory and copy static assets into it
    /// 2. Load the page template
    /// 3. Discover markdown pages
    /// 4. Generate pages in parallel on the global rayon pool
    ///
    /// # Errors
    ///
    /// Returns `BuildError` if the copy, template or discovery step fails.
    /// Individual page failures are reported in [`BuildReport::errors`].
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let config = &self.config;

        let copied = copy_static(&config.static_dir, &config.output_dir)?;

        let template = Template::load(&config.template).map_err(|source| BuildError::Template {
            path: config.template.clone(),
            source,
        })?;

        let jobs = discover_pages(&config.content_dir, &config.output_dir).map_err(|source| {
            BuildError::Discover {
                path: config.content_dir.clone(),
                source,
            }
        })?;

        let results: Vec<Result<PathBuf, PageError>> = jobs
            .par_iter()
            .map(|job| generate_page(job, &template, &config.base_path))
            .collect();
        let (generated, errors) = partition_results(results);

        for error in &errors {
            tracing::warn!(path = %error.path().display(), error = %error, "Failed to generate page");
        }
        tracing::info!(
            copied = copied.len(),
            generated = generated.len(),
            failed = errors.len(),
            "Build finished"
        );

        Ok(BuildReport {
            copied,
            generated,
            errors,
        })
    }
}

/// Partition results into successes and failures, keeping job order.
fn partition_results(results: Vec<Result<PathBuf, PageError>>) -> (Vec<PathBuf>, Vec<PageError>) {
    let mut generated = Vec::with_capacity(results.len());
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(path) => generated.push(path),
            Err(error) => errors.push(error),
        }
    }

    (generated, errors)
}
