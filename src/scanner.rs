use super::*;

/// Searches target documents for literals that duplicate the definitions in
/// a [`Registry`].
#[derive(Debug)]
pub struct Scanner<'a> {
  max_problems: usize,
  registry: &'a Registry,
  root: &'a str,
}

impl<'a> Scanner<'a> {
  /// Definitions whose source, qualified against `root`, is the scanned
  /// document are never reported against it.
  fn is_self_reference(&self, uri: &lsp::Url, definition: Definition) -> bool {
    qualify(self.root, definition.source())
      .is_ok_and(|qualified| qualified == *uri)
  }

  pub fn new(
    registry: &'a Registry,
    root: &'a str,
    max_problems: usize,
  ) -> Self {
    Self {
      max_problems,
      registry,
      root,
    }
  }

  /// Returns at most `max_problems` occurrences. Variables are scanned
  /// before mixins, each kind in name order, and the matches of a single
  /// definition from left to right. Scanning stops as soon as the budget is
  /// spent.
  pub fn scan(&self, uri: &lsp::Url, content: &Rope) -> Vec<Occurrence<'a>> {
    let registry = self.registry;

    let mut occurrences = Vec::new();

    if self.max_problems == 0 || registry.is_empty() {
      return occurrences;
    }

    let text = content.to_string();

    let variables = registry.variables.values().map(|variable| {
      (Definition::Variable(variable), variable.value.as_str())
    });

    let mixins = registry
      .mixins
      .values()
      .map(|mixin| (Definition::Mixin(mixin), mixin.inner()));

    for (definition, literal) in variables.chain(mixins) {
      if self.is_self_reference(uri, definition) {
        continue;
      }

      let matcher = match definition {
        Definition::Mixin(_) => Matcher::mixin(literal),
        Definition::Variable(_) => Matcher::value(literal),
      };

      let Some(matcher) = matcher else {
        continue;
      };

      for found in matcher.find_iter(&text) {
        occurrences.push(Occurrence {
          context: content
            .byte_range_to_lsp_range(found.context.start, found.context.end),
          definition,
          matched_text: found.text.to_string(),
          range: content
            .byte_range_to_lsp_range(found.literal.start, found.literal.end),
          suggested_replacement: definition.name().to_string(),
          uri: uri.clone(),
        });

        if occurrences.len() >= self.max_problems {
          log::debug!(
            "stopped scanning {uri} after {} matches",
            self.max_problems
          );
          return occurrences;
        }
      }
    }

    occurrences
  }
}
