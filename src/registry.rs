use super::*;

/// Every definition extracted from one source stylesheet, keyed by name.
///
/// A registry is never updated in place once built. Reloading the source
/// produces a new registry which replaces the old one wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
  pub mixins: BTreeMap<String, Mixin>,
  pub source: String,
  pub variables: BTreeMap<String, Variable>,
}

impl Registry {
  pub fn new(source: impl Into<String>) -> Self {
    Self {
      source: source.into(),
      ..Default::default()
    }
  }

  pub fn insert_mixin(&mut self, mixin: Mixin) {
    if let Some(previous) = self.mixins.insert(mixin.name.clone(), mixin) {
      log::debug!("mixin `{}` redefined, keeping the last one", previous.name);
    }
  }

  pub fn insert_variable(&mut self, variable: Variable) {
    if let Some(previous) =
      self.variables.insert(variable.name.clone(), variable)
    {
      log::debug!(
        "variable `{}` redefined, keeping the last one",
        previous.reference()
      );
    }
  }

  pub fn is_empty(&self) -> bool {
    self.mixins.is_empty() && self.variables.is_empty()
  }

  pub fn len(&self) -> usize {
    self.mixins.len() + self.variables.len()
  }

  /// Reads `path` and extracts its definitions with the default
  /// [`PatternExtractor`], recording `source` as their document identity.
  pub fn load(path: &Path, source: &str) -> Result<Self, Error> {
    Self::load_with(&PatternExtractor, path, source)
  }

  pub fn load_with(
    extractor: &dyn Extractor,
    path: &Path,
    source: &str,
  ) -> Result<Self, Error> {
    let text = fs::read_to_string(path).map_err(|error| Error::Read {
      path: path.to_path_buf(),
      source: error,
    })?;

    let registry = extractor.extract(&text, source);

    log::info!(
      "loaded {} variables and {} mixins from `{}`",
      registry.variables.len(),
      registry.mixins.len(),
      path.display()
    );

    Ok(registry)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq, std::io::Write};

  #[test]
  fn load_reads_definitions_from_disk() -> Result {
    let mut file = tempfile::NamedTempFile::new()?;

    write!(file, "$gap: 4px;\n@mixin pad {{ padding: 4px; }}\n")?;

    let registry = Registry::load(file.path(), "/vars.scss")?;

    assert_eq!(registry.source, "/vars.scss");
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.variables["$gap:"].value, "4px");
    assert_eq!(registry.mixins["pad"].body, "{ padding: 4px; }");

    Ok(())
  }

  #[test]
  fn load_reports_unreadable_sources() -> Result {
    let directory = tempfile::tempdir()?;

    let path = directory.path().join("missing.scss");

    match Registry::load(&path, "/missing.scss") {
      Err(Error::Read { path: reported, .. }) => assert_eq!(reported, path),
      other => panic!("expected read error, got {other:?}"),
    }

    Ok(())
  }

  #[test]
  fn empty_registry() {
    let registry = Registry::new("/vars.scss");

    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
  }
}
