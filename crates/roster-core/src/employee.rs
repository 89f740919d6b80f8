//! Employee — the single entity of the directory.

use serde::{Deserialize, Serialize};

/// A persisted employee record.
///
/// The id is store-assigned, immutable once assigned, and never reused
/// after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
  pub id:       i64,
  pub name:     String,
  pub position: String,
  pub email:    String,
}

/// The id-less payload for inserts and updates.
///
/// All three fields may be empty as far as storage is concerned; the HTTP
/// layer rejects empty fields on insert only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
  pub name:     String,
  pub position: String,
  pub email:    String,
}

impl NewEmployee {
  pub fn new(
    name:     impl Into<String>,
    position: impl Into<String>,
    email:    impl Into<String>,
  ) -> Self {
    Self {
      name:     name.into(),
      position: position.into(),
      email:    email.into(),
    }
  }

  /// True when any field is the empty string.
  pub fn has_empty_field(&self) -> bool {
    self.name.is_empty() || self.position.is_empty() || self.email.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn complete_payload_has_no_empty_field() {
    let input = NewEmployee::new("Alice", "Engineer", "a@x.com");
    assert!(!input.has_empty_field());
  }

  #[test]
  fn each_empty_field_is_detected() {
    assert!(NewEmployee::new("", "Engineer", "a@x.com").has_empty_field());
    assert!(NewEmployee::new("Alice", "", "a@x.com").has_empty_field());
    assert!(NewEmployee::new("Alice", "Engineer", "").has_empty_field());
  }

  #[test]
  fn whitespace_is_not_empty() {
    // Only the empty string is rejected; " " passes the check.
    assert!(!NewEmployee::new(" ", "Engineer", "a@x.com").has_empty_field());
  }
}
