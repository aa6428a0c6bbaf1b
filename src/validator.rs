use super::*;

pub const DEFAULT_MAX_PROBLEMS: usize = 1000;

/// Caller supplied knobs for a validation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
  /// Upper bound on diagnostics per document.
  pub max_problems: usize,
  /// Whether the client understands `relatedInformation`.
  pub related_information: bool,
  /// Prefix that turns a registry's source identity into a uri.
  pub root: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      max_problems: DEFAULT_MAX_PROBLEMS,
      related_information: false,
      root: String::new(),
    }
  }
}

#[derive(Debug)]
pub struct Validator<'a> {
  config: &'a Config,
  registry: &'a Registry,
}

impl<'a> Validator<'a> {
  pub fn new(registry: &'a Registry, config: &'a Config) -> Self {
    Self { config, registry }
  }

  pub fn validate(
    &self,
    uri: &lsp::Url,
    content: &Rope,
  ) -> Vec<lsp::Diagnostic> {
    let occurrences =
      Scanner::new(self.registry, &self.config.root, self.config.max_problems)
        .scan(uri, content);

    log::debug!("{} suggestions for {uri}", occurrences.len());

    occurrences
      .iter()
      .map(|occurrence| {
        Diagnostic::build(
          occurrence,
          self.config.related_information,
          &self.config.root,
        )
        .into()
      })
      .collect()
  }
}
