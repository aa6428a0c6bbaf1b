use super::*;

/// The definition an [`Occurrence`] duplicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Definition<'a> {
  Mixin(&'a Mixin),
  Variable(&'a Variable),
}

impl Definition<'_> {
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Mixin(_) => "mixin",
      Self::Variable(_) => "variable",
    }
  }

  /// How the definition is named in messages: `primary` for `$primary:`,
  /// `@mixin center` for a mixin.
  pub fn label(&self) -> String {
    match self {
      Self::Mixin(mixin) => mixin.display_name(),
      Self::Variable(variable) => variable.display_name().to_string(),
    }
  }

  pub fn name(&self) -> &str {
    match self {
      Self::Mixin(mixin) => &mixin.name,
      Self::Variable(variable) => variable.display_name(),
    }
  }

  /// The definition text as written in the source stylesheet.
  pub fn origin(&self) -> &str {
    match self {
      Self::Mixin(mixin) => &mixin.full_content,
      Self::Variable(variable) => &variable.origin,
    }
  }

  pub fn range(&self) -> lsp::Range {
    match self {
      Self::Mixin(mixin) => mixin.range,
      Self::Variable(variable) => variable.range,
    }
  }

  /// The text a quick fix inserts in place of the duplicated literal.
  pub fn replacement(&self) -> String {
    match self {
      Self::Mixin(mixin) => mixin.include(),
      Self::Variable(variable) => variable.reference().to_string(),
    }
  }

  pub fn source(&self) -> &str {
    match self {
      Self::Mixin(mixin) => &mixin.source,
      Self::Variable(variable) => &variable.source,
    }
  }
}

/// A literal in a target document that duplicates a definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrence<'a> {
  /// The whole match, including the `:` prefix required for variables.
  pub context: lsp::Range,
  pub definition: Definition<'a>,
  pub matched_text: String,
  /// The duplicated literal alone.
  pub range: lsp::Range,
  pub suggested_replacement: String,
  /// The document the literal was found in.
  pub uri: lsp::Url,
}

impl Occurrence<'_> {
  pub fn message(&self) -> String {
    format!(
      "'{}' is defined as '{}'.",
      self.matched_text,
      self.definition.label()
    )
  }
}
