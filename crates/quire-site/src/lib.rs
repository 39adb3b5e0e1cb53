//! Static site generation for quire.
//!
//! Turns a content directory of markdown files into HTML pages:
//!
//! - [`copy_static`]: reset the output directory and copy static assets
//! - [`discover_pages`]: find markdown sources and their output paths
//! - [`Template`]: fill `{{ Title }}` / `{{ Content }}` and apply the base path
//! - [`generate_page`]: convert and write a single page
//! - [`SiteBuilder`]: run all of the above, generating pages in parallel

mod builder;
mod copy;
mod discover;
mod error;
mod page;
mod template;

pub use builder::{BuildReport, SiteBuilder};
pub use copy::copy_static;
pub use discover::{PageJob, discover_pages};
pub use error::{BuildError, CopyError, PageError};
pub use page::generate_page;
pub use template::Template;
