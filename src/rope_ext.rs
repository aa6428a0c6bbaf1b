//! Extensions that bridge `ropey::Rope` with Language Server Protocol
//! positions.
//!
//! Regex matches report byte offsets, while the protocol speaks in lines and
//! UTF-16 code units. [`RopeExt`] converts between the two and applies
//! `textDocument/didChange` edits to open documents.
//!
//! ```
//! use {
//!   css_reminder::RopeExt,
//!   ropey::Rope,
//!   tower_lsp::lsp_types::Position,
//! };
//!
//! let rope = Rope::from_str("a {\n  color: red;\n}");
//!
//! assert_eq!(rope.byte_to_lsp_position(6), Position::new(1, 2));
//! ```

use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
  pub byte: usize,
  pub char: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit<'a> {
  pub end_char: usize,
  pub start_char: usize,
  pub text: &'a str,
}

pub trait RopeExt {
  fn apply_edit(&mut self, edit: &Edit);
  fn build_edit<'a>(
    &self,
    change: &'a lsp::TextDocumentContentChangeEvent,
  ) -> Edit<'a>;
  fn byte_range_to_lsp_range(&self, start: usize, end: usize) -> lsp::Range;
  fn byte_to_lsp_position(&self, offset: usize) -> lsp::Position;
  fn lsp_position_to_position(&self, position: lsp::Position) -> Position;
}

impl RopeExt for Rope {
  /// Applies a previously constructed [`Edit`] to the rope.
  fn apply_edit(&mut self, edit: &Edit) {
    self.remove(edit.start_char..edit.end_char);

    if !edit.text.is_empty() {
      self.insert(edit.start_char, edit.text);
    }
  }

  /// Converts an LSP `textDocument/didChange` event into an [`Edit`]. A
  /// change without a range replaces the whole document.
  fn build_edit<'a>(
    &self,
    change: &'a lsp::TextDocumentContentChangeEvent,
  ) -> Edit<'a> {
    let text = change.text.as_str();

    let range = change.range.unwrap_or_else(|| lsp::Range {
      start: self.byte_to_lsp_position(0),
      end: self.byte_to_lsp_position(self.len_bytes()),
    });

    let (start, old_end) = (
      self.lsp_position_to_position(range.start),
      self.lsp_position_to_position(range.end),
    );

    Edit {
      end_char: old_end.char,
      start_char: start.char,
      text,
    }
  }

  fn byte_range_to_lsp_range(&self, start: usize, end: usize) -> lsp::Range {
    lsp::Range {
      start: self.byte_to_lsp_position(start),
      end: self.byte_to_lsp_position(end),
    }
  }

  /// Maps an absolute byte offset into an LSP line/character pair where the
  /// column is expressed in UTF-16 code units.
  fn byte_to_lsp_position(&self, byte_idx: usize) -> lsp::Position {
    let byte_idx = byte_idx.min(self.len_bytes());

    let line_idx = self.byte_to_line(byte_idx);

    let line_char_idx = self.line_to_char(line_idx);
    let line_utf16_cu_idx = self.char_to_utf16_cu(line_char_idx);

    let char_idx = self.byte_to_char(byte_idx);
    let char_utf16_cu_idx = self.char_to_utf16_cu(char_idx);

    let character = char_utf16_cu_idx - line_utf16_cu_idx;

    lsp::Position::new(
      u32::try_from(line_idx).unwrap_or(u32::MAX),
      u32::try_from(character).unwrap_or(u32::MAX),
    )
  }

  /// Converts an LSP position back into absolute byte and char offsets,
  /// clamping positions past the end of a line or the document.
  fn lsp_position_to_position(&self, position: lsp::Position) -> Position {
    let row_idx = (position.line as usize).min(self.len_lines() - 1);

    let row_char_idx = self.line_to_char(row_idx);

    let row_end_char_idx = if row_idx + 1 < self.len_lines() {
      self.line_to_char(row_idx + 1)
    } else {
      self.len_chars()
    };

    let col_utf16_cu_idx = (self.char_to_utf16_cu(row_char_idx)
      + position.character as usize)
      .min(self.len_utf16_cu());

    let col_char_idx =
      self.utf16_cu_to_char(col_utf16_cu_idx).min(row_end_char_idx);

    Position {
      byte: self.char_to_byte(col_char_idx),
      char: col_char_idx,
    }
  }
}
