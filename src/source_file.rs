use super::*;

/// A configured source stylesheet, located on disk and named relative to a
/// root uri.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
  pub path: PathBuf,
  /// Uri prefix the `source` identity is relative to.
  pub root: String,
  /// Root-relative identity recorded on every definition, e.g. `/vars.scss`.
  /// Percent-encoded the way clients encode file uris.
  pub source: String,
}

impl SourceFile {
  /// Locates `configured` (relative, optionally `./`-prefixed, or absolute)
  /// against the workspace `root`. Paths outside the root, or resolved
  /// without one, are named relative to their own directory.
  pub fn resolve(
    root: Option<&lsp::Url>,
    configured: &str,
  ) -> Result<Self, Error> {
    let configured = configured.trim();

    let relative =
      Path::new(configured.strip_prefix("./").unwrap_or(configured));

    let workspace = root.and_then(|root| root.to_file_path().ok());

    let path = match &workspace {
      Some(root_path) => root_path.join(relative),
      None if relative.is_absolute() => relative.to_path_buf(),
      None => env::current_dir()
        .map_err(|error| Error::Read {
          path: relative.to_path_buf(),
          source: error,
        })?
        .join(relative),
    };

    if let Some(root_path) = &workspace {
      let inside = path.strip_prefix(root_path).is_ok_and(|stripped| {
        !stripped
          .components()
          .any(|component| component == Component::ParentDir)
      });

      if inside {
        return Self::relative_to(root_path, path);
      }
    }

    let Some(parent) = path.parent().map(Path::to_path_buf) else {
      return Err(Error::Url(path.display().to_string()));
    };

    Self::relative_to(&parent, path)
  }

  /// Names `path` by its uri path below `directory`, so the identity carries
  /// the same percent-encoding as the uri a client sends for the file.
  fn relative_to(directory: &Path, path: PathBuf) -> Result<Self, Error> {
    let root = lsp::Url::from_directory_path(directory)
      .map_err(|()| Error::Url(directory.display().to_string()))?;

    let uri = lsp::Url::from_file_path(&path)
      .map_err(|()| Error::Url(path.display().to_string()))?;

    let source = uri
      .path()
      .strip_prefix(root.path())
      .filter(|relative| !relative.is_empty())
      .map(|relative| format!("/{relative}"))
      .ok_or_else(|| Error::Url(uri.to_string()))?;

    Ok(Self {
      path,
      root: root.to_string(),
      source,
    })
  }

  pub fn load(&self) -> Result<Registry, Error> {
    Registry::load(&self.path, &self.source)
  }

  pub fn uri(&self) -> Result<lsp::Url, Error> {
    qualify(&self.root, &self.source)
  }
}
