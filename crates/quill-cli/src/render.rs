//! Plain-text rendering of the note list and alert banners.

use std::fmt::Write as _;

use quill_core::note::Note;

// ─── Alerts ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
  Success,
  Danger,
}

impl AlertKind {
  fn label(self) -> &'static str {
    match self {
      AlertKind::Success => "success",
      AlertKind::Danger => "danger",
    }
  }
}

/// One alert line, e.g. `[danger] Please fill all the fields`.
pub fn alert(kind: AlertKind, message: &str) -> String {
  format!("[{}] {message}\n", kind.label())
}

// ─── Note table ───────────────────────────────────────────────────────────────

const HEADERS: [&str; 3] = ["ID", "TITLE", "TEXT"];

/// Render `notes` as a padded table with a header row.
pub fn notes_table(notes: &[Note]) -> String {
  if notes.is_empty() {
    return "No notes yet.\n".to_owned();
  }

  let rows: Vec<[String; 3]> = notes
    .iter()
    .map(|n| [n.id().to_string(), one_line(n.title()), one_line(n.text())])
    .collect();

  let mut widths = HEADERS.map(|h| h.chars().count());
  for row in &rows {
    for (width, cell) in widths.iter_mut().zip(row) {
      *width = (*width).max(cell.chars().count());
    }
  }

  let mut out = String::new();
  push_row(&mut out, &HEADERS, &widths);
  for row in &rows {
    push_row(&mut out, row, &widths);
  }
  out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S; 3], widths: &[usize; 3]) {
  let [id, title, text] = cells;
  // The last column is not padded so lines carry no trailing spaces.
  let _ = writeln!(
    out,
    "{:<id_w$}  {:<title_w$}  {}",
    id.as_ref(),
    title.as_ref(),
    text.as_ref(),
    id_w = widths[0],
    title_w = widths[1],
  );
}

/// Collapse embedded line breaks so each note stays on one row.
fn one_line(s: &str) -> String {
  s.split(['\r', '\n']).filter(|p| !p.is_empty()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
  use quill_core::note::{NewNote, NoteId};

  use super::*;

  fn note(id: i64, title: &str, text: &str) -> Note {
    Note::from_parts(NoteId(id), NewNote::new(title, text).unwrap())
  }

  #[test]
  fn empty_list_renders_placeholder() {
    assert_eq!(notes_table(&[]), "No notes yet.\n");
  }

  #[test]
  fn table_pads_columns_to_widest_cell() {
    let out = notes_table(&[note(1, "A", "x"), note(12, "Groceries", "milk")]);
    assert_eq!(
      out,
      "ID  TITLE      TEXT\n\
       1   A          x\n\
       12  Groceries  milk\n"
    );
  }

  #[test]
  fn multiline_text_is_collapsed() {
    let out = notes_table(&[note(1, "A", "line one\nline two")]);
    assert!(out.contains("line one line two"));
    assert_eq!(out.lines().count(), 2);
  }

  #[test]
  fn alert_carries_kind_label() {
    assert_eq!(
      alert(AlertKind::Danger, "Please fill all the fields"),
      "[danger] Please fill all the fields\n"
    );
    assert_eq!(alert(AlertKind::Success, "Note added"), "[success] Note added\n");
  }
}
