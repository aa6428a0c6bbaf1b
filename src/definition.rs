use super::*;

/// A `$name: value` declaration found in the source stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
  /// The declared name exactly as matched, sigil and colon included
  /// (`$primary:`).
  pub name: String,
  /// The full matched declaration text.
  pub origin: String,
  pub range: lsp::Range,
  pub source: String,
  pub value: String,
}

impl Variable {
  /// The name without its `$` sigil or trailing colon (`primary`).
  pub fn display_name(&self) -> &str {
    self.reference().trim_start_matches('$')
  }

  /// The text that refers to this variable from another document
  /// (`$primary`).
  pub fn reference(&self) -> &str {
    self.name.trim_end().trim_end_matches(':').trim_end()
  }
}

/// An `@mixin name { ... }` block found in the source stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mixin {
  /// The block including its outer braces. Truncated at end of text when the
  /// braces never balance.
  pub body: String,
  pub full_content: String,
  pub name: String,
  pub range: lsp::Range,
  pub source: String,
}

impl Mixin {
  pub fn display_name(&self) -> String {
    format!("@mixin {}", self.name)
  }

  pub fn include(&self) -> String {
    format!("@include {};", self.name)
  }

  /// The body without its outer braces and surrounding whitespace, which is
  /// what gets searched for in other documents.
  pub fn inner(&self) -> &str {
    let inner = self.body.strip_prefix('{').unwrap_or(&self.body);
    inner.strip_suffix('}').unwrap_or(inner).trim()
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn variable(name: &str) -> Variable {
    Variable {
      name: name.into(),
      origin: String::new(),
      range: lsp::Range::default(),
      source: String::new(),
      value: String::new(),
    }
  }

  fn mixin(body: &str) -> Mixin {
    Mixin {
      body: body.into(),
      full_content: String::new(),
      name: "center".into(),
      range: lsp::Range::default(),
      source: String::new(),
    }
  }

  #[test]
  fn variable_names_strip_declarator_punctuation() {
    let variable = variable("$primary-color:");

    assert_eq!(variable.reference(), "$primary-color");
    assert_eq!(variable.display_name(), "primary-color");
  }

  #[test]
  fn mixin_names_render_keyword_forms() {
    let mixin = mixin("{}");

    assert_eq!(mixin.display_name(), "@mixin center");
    assert_eq!(mixin.include(), "@include center;");
  }

  #[test]
  fn mixin_inner_drops_braces_and_whitespace() {
    assert_eq!(
      mixin("{ display: flex; &:hover { color: red; } }").inner(),
      "display: flex; &:hover { color: red; }"
    );
  }

  #[test]
  fn unterminated_mixin_keeps_trailing_text() {
    assert_eq!(mixin("{ display: flex;").inner(), "display: flex;");
  }

  #[test]
  fn empty_mixin_has_empty_inner() {
    assert_eq!(mixin("").inner(), "");
    assert_eq!(mixin("{   }").inner(), "");
  }
}
