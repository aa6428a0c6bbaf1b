use super::*;

/// The configuration section clients store these settings under.
pub const SECTION: &str = "languageServerReminder";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
  pub max_number_of_problems: usize,
  /// Stylesheets to extract definitions from, relative to the workspace root
  /// or absolute. Only the first entry is used.
  #[serde(alias = "sourceFile")]
  pub source_files: Vec<String>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      max_number_of_problems: DEFAULT_MAX_PROBLEMS,
      source_files: Vec::new(),
    }
  }
}

impl Settings {
  /// Reads the settings nested under [`SECTION`], as sent with
  /// `workspace/didChangeConfiguration`.
  pub fn from_section(value: &Value) -> Result<Option<Self>, Error> {
    value
      .get(SECTION)
      .map(|section| Self::from_value(section.clone()))
      .transpose()
  }

  /// Reads a bare settings object. `null` yields the defaults.
  pub fn from_value(value: Value) -> Result<Self, Error> {
    if value.is_null() {
      return Ok(Self::default());
    }

    Ok(serde_json::from_value(value)?)
  }

  pub fn source_file(&self) -> Option<&str> {
    if self.source_files.len() > 1 {
      log::warn!(
        "{} source files configured, only `{}` is used",
        self.source_files.len(),
        self.source_files[0]
      );
    }

    self
      .source_files
      .first()
      .map(String::as_str)
      .filter(|path| !path.trim().is_empty())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq, serde_json::json};

  #[test]
  fn missing_fields_use_defaults() -> Result {
    assert_eq!(Settings::from_value(json!({}))?, Settings::default());
    assert_eq!(Settings::from_value(Value::Null)?, Settings::default());
    Ok(())
  }

  #[test]
  fn reads_camel_case_fields() -> Result {
    assert_eq!(
      Settings::from_value(json!({
        "maxNumberOfProblems": 5,
        "sourceFiles": ["./styles/vars.scss"],
      }))?,
      Settings {
        max_number_of_problems: 5,
        source_files: vec!["./styles/vars.scss".into()],
      }
    );

    Ok(())
  }

  #[test]
  fn accepts_singular_source_file_key() -> Result {
    let settings =
      Settings::from_value(json!({ "sourceFile": ["./vars.scss"] }))?;

    assert_eq!(settings.source_file(), Some("./vars.scss"));

    Ok(())
  }

  #[test]
  fn only_first_source_file_is_used() {
    let settings = Settings {
      source_files: vec!["./a.scss".into(), "./b.scss".into()],
      ..Default::default()
    };

    assert_eq!(settings.source_file(), Some("./a.scss"));
  }

  #[test]
  fn blank_source_file_is_ignored() {
    let settings = Settings {
      source_files: vec!["  ".into()],
      ..Default::default()
    };

    assert_eq!(settings.source_file(), None);
  }

  #[test]
  fn reads_nested_section() -> Result {
    let value = json!({
      SECTION: { "maxNumberOfProblems": 3 },
    });

    assert_eq!(
      Settings::from_section(&value)?,
      Some(Settings {
        max_number_of_problems: 3,
        ..Default::default()
      })
    );

    assert_eq!(Settings::from_section(&json!({ "other": {} }))?, None);

    Ok(())
  }

  #[test]
  fn rejects_malformed_settings() {
    assert!(matches!(
      Settings::from_value(json!({ "maxNumberOfProblems": "many" })),
      Err(Error::Configuration(_))
    ));
  }
}
