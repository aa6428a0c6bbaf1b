use super::*;

static MIXIN_HEADER: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"@mixin\s*([^{]+)").expect("mixin header pattern is valid")
});

static VARIABLE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(\$[\w-]+:)\s*([^;\n\r$]*)")
    .expect("variable declaration pattern is valid")
});

/// Turns stylesheet text into a [`Registry`].
pub trait Extractor {
  fn extract(&self, text: &str, source: &str) -> Registry;
}

/// Lexical extractor that finds declarations with regular expressions rather
/// than a stylesheet grammar.
#[derive(Clone, Copy, Debug, Default)]
pub struct PatternExtractor;

impl Extractor for PatternExtractor {
  fn extract(&self, text: &str, source: &str) -> Registry {
    let rope = Rope::from_str(text);

    let mut registry = Registry::new(source);

    for variable in Self::variables(&rope, text, source) {
      registry.insert_variable(variable);
    }

    for mixin in Self::mixins(&rope, text, source) {
      registry.insert_mixin(mixin);
    }

    registry
  }
}

impl PatternExtractor {
  /// Returns the brace-delimited block starting at `start`, outer braces
  /// included. An unbalanced block runs to the end of `text`.
  fn balanced_block(text: &str, start: usize) -> &str {
    let rest = &text[start..];

    if !rest.starts_with('{') {
      return "";
    }

    let mut depth = 0usize;

    for (offset, byte) in rest.bytes().enumerate() {
      match byte {
        b'{' => depth += 1,
        b'}' => depth = depth.saturating_sub(1),
        _ => {}
      }

      if depth == 0 {
        return &rest[..=offset];
      }
    }

    rest
  }

  fn mixins(rope: &Rope, text: &str, source: &str) -> Vec<Mixin> {
    MIXIN_HEADER
      .captures_iter(text)
      .filter_map(|captures| {
        let header = captures.get(0)?;

        let name = captures.get(1)?.as_str().trim();

        if name.is_empty() {
          log::debug!("skipping anonymous mixin at byte {}", header.start());
          return None;
        }

        let body = Self::balanced_block(text, header.end());

        Some(Mixin {
          body: body.to_string(),
          full_content: format!("{}{body}", header.as_str()),
          name: name.to_string(),
          range: rope
            .byte_range_to_lsp_range(header.start(), header.end() + body.len()),
          source: source.to_string(),
        })
      })
      .collect()
  }

  fn variables(rope: &Rope, text: &str, source: &str) -> Vec<Variable> {
    VARIABLE_DECLARATION
      .captures_iter(text)
      .filter_map(|captures| {
        let declaration = captures.get(0)?;

        Some(Variable {
          name: captures.get(1)?.as_str().to_string(),
          origin: declaration.as_str().to_string(),
          range: rope
            .byte_range_to_lsp_range(declaration.start(), declaration.end()),
          source: source.to_string(),
          value: captures.get(2)?.as_str().to_string(),
        })
      })
      .collect()
  }
}
