use {super::*, std::ops::Range};

/// Prefixes every regex metacharacter in `literal` with a backslash so the
/// result matches `literal` verbatim. Besides the usual operators this covers
/// `#`, `&`, `-` and `~`. A `/` is left as is, since it has no meaning to the
/// regex engine.
pub fn escape(literal: &str) -> String {
  regex::escape(literal)
}

/// A single match produced by a [`Matcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Found<'t> {
  /// Byte range of the whole match, including any required prefix.
  pub context: Range<usize>,
  /// Byte range of the literal itself.
  pub literal: Range<usize>,
  pub text: &'t str,
}

/// Finds occurrences of a definition's literal text in other documents.
#[derive(Clone, Debug)]
pub struct Matcher {
  group: usize,
  regex: Regex,
}

impl Matcher {
  fn compile(pattern: &str, group: usize) -> Option<Self> {
    match Regex::new(pattern) {
      Ok(regex) => Some(Self { group, regex }),
      Err(error) => {
        log::warn!("failed to compile pattern `{pattern}`: {error}");
        None
      }
    }
  }

  /// Matches the literal anywhere, with no surrounding context.
  pub fn mixin(literal: &str) -> Option<Self> {
    if literal.trim().is_empty() {
      return None;
    }

    Self::compile(&escape(literal), 0)
  }

  /// Matches the literal where it follows a `:` and optional whitespace,
  /// i.e. in value position of a declaration.
  pub fn value(literal: &str) -> Option<Self> {
    if literal.trim().is_empty() {
      return None;
    }

    Self::compile(&format!(r"(:\s*)({})", escape(literal)), 2)
  }

  /// Yields non-overlapping matches left to right. Each call starts a fresh
  /// search from the beginning of `haystack`.
  pub fn find_iter<'m, 't>(
    &'m self,
    haystack: &'t str,
  ) -> impl Iterator<Item = Found<'t>> + 'm
  where
    't: 'm,
  {
    self.regex.captures_iter(haystack).filter_map(|captures| {
      let context = captures.get(0)?;
      let literal = captures.get(self.group)?;

      Some(Found {
        context: context.range(),
        literal: literal.range(),
        text: literal.as_str(),
      })
    })
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  const METACHARACTERS: &str = r"\^$.|?*+()[]{}#&-~";

  fn texts(matcher: &Matcher, haystack: &str) -> Vec<String> {
    matcher
      .find_iter(haystack)
      .map(|found| found.text.to_string())
      .collect()
  }

  #[test]
  fn escape_prefixes_every_metacharacter() {
    for character in METACHARACTERS.chars() {
      assert_eq!(escape(&character.to_string()), format!("\\{character}"));
    }
  }

  #[test]
  fn slashes_are_not_escaped() {
    assert_eq!(escape("16px/1.5"), r"16px/1\.5");

    let matcher = Matcher::value("16px/1.5").unwrap();

    assert_eq!(
      texts(&matcher, "font: 16px/1.5;"),
      vec!["16px/1.5".to_string()]
    );
  }

  #[test]
  fn escape_leaves_plain_text_alone() {
    assert_eq!(escape("12px solid #fff"), r"12px solid \#fff");
    assert_eq!(escape("Helvetica, sans-serif"), r"Helvetica, sans\-serif");
    assert_eq!(escape("'é' \"q\" %"), "'é' \"q\" %");
  }

  #[test]
  fn escaped_metacharacters_match_themselves() {
    let literal = METACHARACTERS.to_string();

    let matcher = Matcher::mixin(&literal).unwrap();

    assert_eq!(texts(&matcher, &format!("x{literal}x")), vec![literal]);
  }

  #[test]
  fn every_escaped_metacharacter_compiles_alone() {
    for character in METACHARACTERS.chars() {
      let literal = format!("a{character}b");

      let matcher = Matcher::mixin(&literal).unwrap();

      assert_eq!(texts(&matcher, &literal), vec![literal.clone()]);
    }
  }

  #[test]
  fn arithmetic_value_matches_verbatim_only() {
    let matcher = Matcher::value("1.5 * (2+3)").unwrap();

    assert_eq!(
      texts(&matcher, "width: 1.5 * (2+3);"),
      vec!["1.5 * (2+3)".to_string()]
    );

    assert!(texts(&matcher, "width: 1x5  (223);").is_empty());
    assert!(texts(&matcher, "width: 1.5 (2223);").is_empty());
    assert!(texts(&matcher, "width: 105 * (2+3);").is_empty());
  }

  #[test]
  fn bracket_and_alternation_values_stay_literal() {
    let matcher = Matcher::value("[a|b]").unwrap();

    assert!(texts(&matcher, "grid: a;").is_empty());
    assert!(texts(&matcher, "grid: |;").is_empty());
    assert_eq!(texts(&matcher, "grid: [a|b];"), vec!["[a|b]".to_string()]);
  }

  #[test]
  fn value_matcher_requires_colon_prefix() {
    let matcher = Matcher::value("#ff0000").unwrap();

    assert!(texts(&matcher, "#ff0000").is_empty());
    assert!(texts(&matcher, "background #ff0000;").is_empty());
  }

  #[test]
  fn value_matcher_separates_prefix_from_literal() {
    let matcher = Matcher::value("#ff0000").unwrap();

    assert_eq!(
      matcher.find_iter("a { color:   #ff0000; }").collect::<Vec<_>>(),
      vec![Found {
        context: 9..20,
        literal: 13..20,
        text: "#ff0000",
      }]
    );
  }

  #[test]
  fn value_matcher_accepts_newline_after_colon() {
    let matcher = Matcher::value("red").unwrap();

    assert_eq!(texts(&matcher, "color:\n  red;"), vec!["red".to_string()]);
  }

  #[test]
  fn matches_are_left_to_right_and_non_overlapping() {
    let matcher = Matcher::mixin("aa").unwrap();

    assert_eq!(
      matcher
        .find_iter("aaaaa")
        .map(|found| found.literal)
        .collect::<Vec<_>>(),
      vec![0..2, 2..4]
    );
  }

  #[test]
  fn each_scan_starts_from_the_beginning() {
    let matcher = Matcher::mixin("x").unwrap();

    assert_eq!(matcher.find_iter("x-x").count(), 2);
    assert_eq!(matcher.find_iter("x-x").count(), 2);
  }

  #[test]
  fn degenerate_literals_produce_no_matcher() {
    assert!(Matcher::value("").is_none());
    assert!(Matcher::value("  \t").is_none());
    assert!(Matcher::mixin("").is_none());
    assert!(Matcher::mixin("\n").is_none());
  }
}
