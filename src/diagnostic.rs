use super::*;

/// Identifies diagnostics published by this server.
pub const SOURCE: &str = "css-reminder";

#[derive(Debug, PartialEq)]
pub struct Diagnostic {
  /// The kind of definition that was duplicated.
  pub id: String,
  /// A message naming the literal and the definition it duplicates.
  pub message: String,
  /// The duplicated literal in the scanned document.
  pub range: lsp::Range,
  /// Links back to the definition, present only when the client supports
  /// related information.
  pub related_information: Option<Vec<lsp::DiagnosticRelatedInformation>>,
  /// The text a quick fix inserts over `range`.
  pub replacement: String,
  pub severity: lsp::DiagnosticSeverity,
}

impl From<Diagnostic> for lsp::Diagnostic {
  fn from(value: Diagnostic) -> lsp::Diagnostic {
    lsp::Diagnostic {
      code: Some(lsp::NumberOrString::String(value.id)),
      data: Some(Value::String(value.replacement)),
      message: value.message,
      range: value.range,
      related_information: value.related_information,
      severity: Some(value.severity),
      source: Some(SOURCE.to_string()),
      ..Default::default()
    }
  }
}

impl Diagnostic {
  /// Describes `occurrence` as an informational suggestion. With
  /// `related_information` set, the definition's location (qualified against
  /// `root`) is attached, followed for variables by the occurrence itself.
  pub fn build(
    occurrence: &Occurrence,
    related_information: bool,
    root: &str,
  ) -> Self {
    let definition = occurrence.definition;

    let message = occurrence.message();

    let related_information = related_information.then(|| {
      let mut related = Vec::new();

      match qualify(root, definition.source()) {
        Ok(uri) => related.push(lsp::DiagnosticRelatedInformation {
          location: lsp::Location {
            uri,
            range: definition.range(),
          },
          message: definition.origin().to_string(),
        }),
        Err(error) => log::debug!("omitting definition location: {error}"),
      }

      if let Definition::Variable(_) = definition {
        related.push(lsp::DiagnosticRelatedInformation {
          location: lsp::Location {
            uri: occurrence.uri.clone(),
            range: occurrence.context,
          },
          message: message.clone(),
        });
      }

      related
    });

    Self {
      id: definition.kind().to_string(),
      message,
      range: occurrence.range,
      related_information,
      replacement: definition.replacement(),
      severity: lsp::DiagnosticSeverity::INFORMATION,
    }
  }

  /// Returns the quick fix text carried by a diagnostic this server
  /// published, or `None` for anyone else's diagnostics.
  pub fn replacement(diagnostic: &lsp::Diagnostic) -> Option<&str> {
    if diagnostic.source.as_deref() != Some(SOURCE) {
      return None;
    }

    diagnostic.data.as_ref()?.as_str()
  }
}
