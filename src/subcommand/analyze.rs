use super::*;

#[derive(Debug, clap::Args)]
pub(crate) struct Analyze {
  #[arg(
    long,
    value_name = "PROBLEMS",
    default_value_t = DEFAULT_MAX_PROBLEMS,
    help = "Maximum number of suggestions reported per file"
  )]
  max_problems: usize,
  #[arg(
    value_name = "PATH",
    required = true,
    help = "Stylesheets to check for duplicated literals",
    value_hint = clap::ValueHint::FilePath
  )]
  paths: Vec<PathBuf>,
  #[arg(
    long,
    value_name = "SOURCE",
    help = "Stylesheet that defines the variables and mixins",
    value_hint = clap::ValueHint::FilePath
  )]
  source: PathBuf,
}

impl Analyze {
  pub(crate) fn run(self) -> Result {
    let root = lsp::Url::from_directory_path(env::current_dir()?)
      .map_err(|()| anyhow!("failed to convert current directory to url"))?;

    let source_file =
      SourceFile::resolve(Some(&root), &self.source.to_string_lossy())?;

    let registry = source_file.load()?;

    let config = Config {
      max_problems: self.max_problems,
      related_information: false,
      root: source_file.root.clone(),
    };

    let validator = Validator::new(&registry, &config);

    for path in &self.paths {
      let content = fs::read_to_string(path)?;

      let absolute_path = if path.is_absolute() {
        path.clone()
      } else {
        env::current_dir()?.join(path)
      };

      let uri = lsp::Url::from_file_path(&absolute_path).map_err(|()| {
        anyhow!("failed to convert `{}` to file url", path.display())
      })?;

      let rope = Rope::from_str(&content);

      let diagnostics = validator.validate(&uri, &rope);

      if diagnostics.is_empty() {
        continue;
      }

      let source_id = path.to_string_lossy().to_string();

      let mut cache = sources(vec![(source_id.clone(), content.as_str())]);

      let source_len = rope.len_chars();

      for diagnostic in diagnostics {
        let (severity_label, color) =
          Self::severity_to_style(diagnostic.severity)?;

        let kind = match &diagnostic.code {
          Some(lsp::NumberOrString::String(code)) => code.clone(),
          _ => String::new(),
        };

        let kind_label = format!("{severity_label}[{kind}]");

        let start = rope
          .lsp_position_to_position(diagnostic.range.start)
          .char
          .min(source_len);

        let end = rope
          .lsp_position_to_position(diagnostic.range.end)
          .char
          .min(source_len);

        let span = (source_id.clone(), start.min(end)..start.max(end));

        let replacement = Diagnostic::replacement(&diagnostic).unwrap_or("");

        Report::build(
          ReportKind::Custom(kind_label.as_str(), color),
          span.clone(),
        )
        .with_message(&diagnostic.message)
        .with_label(
          Label::new(span)
            .with_message(format!("replace with `{replacement}`"))
            .with_color(color),
        )
        .finish()
        .print(&mut cache)
        .map_err(|error| anyhow!("failed to render diagnostic: {error}"))?;
      }
    }

    Ok(())
  }

  fn severity_to_style(
    severity: Option<lsp::DiagnosticSeverity>,
  ) -> Result<(&'static str, Color)> {
    match severity {
      Some(lsp::DiagnosticSeverity::ERROR) => Ok(("error", Color::Red)),
      Some(lsp::DiagnosticSeverity::WARNING) => Ok(("warning", Color::Yellow)),
      Some(lsp::DiagnosticSeverity::INFORMATION) => Ok(("info", Color::Blue)),
      Some(lsp::DiagnosticSeverity::HINT) => Ok(("hint", Color::Cyan)),
      _ => bail!("failed to map unknown severity {severity:?}"),
    }
  }
}
