//! Suggests stylesheet variables and mixins in place of duplicated literals.
//!
//! Definitions are extracted from one source stylesheet into a [`Registry`],
//! then other documents are scanned for declaration values and blocks that
//! repeat them verbatim:
//!
//! ```
//! use {
//!   css_reminder::{Config, Extractor, PatternExtractor, Validator},
//!   ropey::Rope,
//!   tower_lsp::lsp_types::Url,
//! };
//!
//! let registry = PatternExtractor.extract("$primary: #ff0000;", "/vars.scss");
//!
//! let config = Config {
//!   root: "file:///project".into(),
//!   ..Default::default()
//! };
//!
//! let diagnostics = Validator::new(&registry, &config).validate(
//!   &Url::parse("file:///project/button.scss").unwrap(),
//!   &Rope::from_str("a { color: #ff0000; }"),
//! );
//!
//! assert_eq!(diagnostics[0].message, "'#ff0000' is defined as 'primary'.");
//! ```

use common::*;

pub use crate::{
  capabilities::ClientCapabilities,
  definition::{Mixin, Variable},
  diagnostic::{Diagnostic, SOURCE},
  error::Error,
  extractor::{Extractor, PatternExtractor},
  location::qualify,
  occurrence::{Definition, Occurrence},
  pattern::{escape, Found, Matcher},
  registry::Registry,
  rope_ext::RopeExt,
  scanner::Scanner,
  server::Server,
  settings::{Settings, SECTION},
  source_file::SourceFile,
  validator::{Config, Validator, DEFAULT_MAX_PROBLEMS},
};

mod arguments;
mod capabilities;
mod common;
mod definition;
mod diagnostic;
mod document;
mod error;
mod extractor;
mod location;
mod occurrence;
mod pattern;
mod registry;
mod rope_ext;
mod scanner;
mod server;
mod settings;
mod source_file;
mod subcommand;
mod validator;

/// Parses command line arguments and runs either the language server or a
/// subcommand.
pub async fn run() -> Result {
  Arguments::parse().run().await
}
