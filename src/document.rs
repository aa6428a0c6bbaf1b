use super::*;

#[derive(Debug)]
pub struct Document {
  pub(crate) content: Rope,
  pub(crate) uri: lsp::Url,
  pub(crate) version: i32,
}

impl From<lsp::DidOpenTextDocumentParams> for Document {
  fn from(params: lsp::DidOpenTextDocumentParams) -> Self {
    let lsp::TextDocumentItem {
      text, uri, version, ..
    } = params.text_document;

    Self {
      content: Rope::from_str(&text),
      uri,
      version,
    }
  }
}

impl Document {
  pub(crate) fn apply_change(
    &mut self,
    params: lsp::DidChangeTextDocumentParams,
  ) {
    let lsp::DidChangeTextDocumentParams {
      content_changes,
      text_document: lsp::VersionedTextDocumentIdentifier { version, .. },
      ..
    } = params;

    self.version = version;

    for change in content_changes {
      let edit = self.content.build_edit(&change);
      self.content.apply_edit(&edit);
    }
  }
}
