//! `readmegen_core` is the core library for
//! [readmegen](https://github.com/ifiokjr/readmegen). It turns a saved
//! profile into a GitHub profile README and, when blog feeds are enabled, the
//! GitHub Actions workflow that keeps the README's blog post list current.
//!
//! ## Pipeline
//!
//! ```text
//! profile snapshot / imported template
//!   → ProfileConfig (merged onto the default profile)
//!   → Document assembler (ordered table of gated sections)
//!   → README markdown  →  optional HTML preview
//!   → Workflow builder (feed list from the blog settings)
//! ```
//!
//! ## Modules
//!
//! - [`profile`]: the profile data model and its text helpers.
//! - [`taxonomy`]: the closed list of selectable skills.
//! - [`template`]: JSON template export and import.
//! - [`store`]: the saved profile snapshot and its compatibility check.
//! - [`config`]: configuration loading from `readmegen.toml`.
//!
//! ## Encoding
//!
//! Every user value placed inside a badge or card URL is percent-encoded.
//! Text written into the document itself (quotes, list items, pronouns,
//! `alt` text) is inserted as written.
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use readmegen_core::ProfileConfig;
//! use readmegen_core::generate_markdown_with_rng;
//!
//! let mut profile = ProfileConfig::default();
//! profile.user_name = "Ada".to_string();
//! profile.social.github = "ada".to_string();
//! profile.stats.show_stats = true;
//!
//! let readme = generate_markdown_with_rng(&profile, &mut StdRng::seed_from_u64(7));
//! assert!(readme.contains("api?username=ada"));
//! ```

pub use analytics::enabled_cards;
pub use document::*;
pub use error::*;
pub use preview::*;
pub use profile::*;
pub use workflow::*;

mod analytics;
pub mod config;
mod document;
#[allow(unused_assignments)]
mod error;
mod preview;
pub mod profile;
pub mod store;
pub mod taxonomy;
pub mod template;
mod workflow;

#[cfg(test)]
mod __fixtures;
