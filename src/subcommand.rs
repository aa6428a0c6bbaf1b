use {super::*, analyze::Analyze};

mod analyze;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  /// Print suggestions for stylesheets without starting the server
  Analyze(Analyze),
}

impl Subcommand {
  pub(crate) fn run(self) -> Result {
    match self {
      Self::Analyze(analyze) => analyze.run(),
    }
  }
}
