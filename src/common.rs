// std
pub(crate) use std::{
  collections::{BTreeMap, HashMap},
  env, fs,
  path::{Component, Path, PathBuf},
  sync::{Arc, LazyLock},
};

// dependencies
pub(crate) use {
  anyhow::{anyhow, bail},
  ariadne::{sources, Color, Label, Report, ReportKind},
  clap::Parser,
  regex::Regex,
  ropey::Rope,
  serde::Deserialize,
  serde_json::Value,
  tower_lsp::{jsonrpc, lsp_types as lsp, Client, LanguageServer, LspService},
};

// structs and enums
pub(crate) use crate::{
  arguments::Arguments,
  capabilities::ClientCapabilities,
  definition::{Mixin, Variable},
  diagnostic::Diagnostic,
  document::Document,
  error::Error,
  extractor::PatternExtractor,
  location::qualify,
  occurrence::{Definition, Occurrence},
  pattern::Matcher,
  registry::Registry,
  scanner::Scanner,
  server::Server,
  settings::{Settings, SECTION},
  source_file::SourceFile,
  subcommand::Subcommand,
  validator::{Config, Validator, DEFAULT_MAX_PROBLEMS},
};

// traits
pub(crate) use crate::{extractor::Extractor, rope_ext::RopeExt};

// type aliases
pub(crate) type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
pub(crate) type Documents = BTreeMap<lsp::Url, Document>;
