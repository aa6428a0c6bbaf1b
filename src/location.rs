use super::*;

/// Joins a root uri prefix and a root-relative source identity into a fully
/// qualified uri, e.g. `file:///project` and `/styles/vars.scss`.
pub fn qualify(root: &str, source: &str) -> Result<lsp::Url, Error> {
  let joined = format!(
    "{}/{}",
    root.trim_end_matches('/'),
    source.trim_start_matches('/')
  );

  lsp::Url::parse(&joined).map_err(|_| Error::Url(joined))
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn joins_with_a_single_separator() -> Result {
    for (root, source) in [
      ("file:///project", "/vars.scss"),
      ("file:///project/", "/vars.scss"),
      ("file:///project", "vars.scss"),
    ] {
      assert_eq!(qualify(root, source)?.as_str(), "file:///project/vars.scss");
    }

    Ok(())
  }

  #[test]
  fn nested_sources_keep_their_directories() -> Result {
    assert_eq!(
      qualify("file:///project", "/styles/_vars.scss")?.as_str(),
      "file:///project/styles/_vars.scss"
    );

    Ok(())
  }

  #[test]
  fn missing_root_is_an_error() {
    assert!(matches!(qualify("", "/vars.scss"), Err(Error::Url(_))));
  }
}
