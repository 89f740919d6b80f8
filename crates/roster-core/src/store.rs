//! The `EmployeeStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::employee::{Employee, NewEmployee};

/// Abstraction over an employee store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait EmployeeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return every record in storage order.
  ///
  /// An empty store yields an empty vec, not an error.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Insert a record and return the store-assigned id.
  ///
  /// Field emptiness is the caller's concern; the store accepts any strings.
  fn insert(
    &self,
    input: NewEmployee,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Overwrite all three mutable fields of the record with `id`.
  ///
  /// Returns the number of rows affected: 0 when `id` matches nothing, with
  /// no error and no other change.
  fn update_by_id(
    &self,
    id: i64,
    input: NewEmployee,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Delete by id, falling back to name.
  ///
  /// If `token` parses as an id, rows with that id are deleted first. Only
  /// when that affects zero rows is `token` compared against the name
  /// column. The two attempts are independent equality comparisons on their
  /// respective columns, so a numeric-looking name never matches an
  /// unrelated id. Returns the rows affected by whichever attempt matched,
  /// or 0.
  fn delete_by_id_then_name<'a>(
    &'a self,
    token: &'a str,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + 'a;
}
