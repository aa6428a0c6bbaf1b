use super::*;

/// The parts of the client's advertised capabilities the server acts on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClientCapabilities {
  pub code_action_literals: bool,
  pub configuration: bool,
  pub related_information: bool,
  pub workspace_folders: bool,
}

impl From<&lsp::ClientCapabilities> for ClientCapabilities {
  fn from(capabilities: &lsp::ClientCapabilities) -> Self {
    let workspace = capabilities.workspace.as_ref();

    let text_document = capabilities.text_document.as_ref();

    Self {
      code_action_literals: text_document
        .and_then(|text_document| text_document.code_action.as_ref())
        .is_some_and(|code_action| {
          code_action.code_action_literal_support.is_some()
        }),
      configuration: workspace
        .and_then(|workspace| workspace.configuration)
        .unwrap_or_default(),
      related_information: text_document
        .and_then(|text_document| text_document.publish_diagnostics.as_ref())
        .and_then(|publish| publish.related_information)
        .unwrap_or_default(),
      workspace_folders: workspace
        .and_then(|workspace| workspace.workspace_folders)
        .unwrap_or_default(),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq, serde_json::json};

  #[test]
  fn empty_capabilities_enable_nothing() {
    assert_eq!(
      ClientCapabilities::from(&lsp::ClientCapabilities::default()),
      ClientCapabilities::default()
    );
  }

  #[test]
  fn reads_every_flag() -> Result {
    let capabilities: lsp::ClientCapabilities = serde_json::from_value(json!({
      "workspace": {
        "configuration": true,
        "workspaceFolders": true,
      },
      "textDocument": {
        "publishDiagnostics": { "relatedInformation": true },
        "codeAction": {
          "codeActionLiteralSupport": {
            "codeActionKind": { "valueSet": ["quickfix"] }
          }
        }
      }
    }))?;

    assert_eq!(
      ClientCapabilities::from(&capabilities),
      ClientCapabilities {
        code_action_literals: true,
        configuration: true,
        related_information: true,
        workspace_folders: true,
      }
    );

    Ok(())
  }

  #[test]
  fn explicit_false_stays_false() -> Result {
    let capabilities: lsp::ClientCapabilities = serde_json::from_value(json!({
      "textDocument": {
        "publishDiagnostics": { "relatedInformation": false }
      }
    }))?;

    assert!(!ClientCapabilities::from(&capabilities).related_information);

    Ok(())
  }
}
