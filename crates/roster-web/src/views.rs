//! HTML pages and inline fragments.
//!
//! Rendering is deliberately primitive: `format!`-built pages with one table
//! and four forms. The failure paths return bare fragments, not full pages,
//! each with a single "back" form targeting `/display_data`.

use axum::response::Html;
use roster_core::Employee;

/// Minimal entity escaping for values interpolated into markup.
fn escape(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
}

/// The back form attached to every inline failure fragment.
const BACK_FORM: &str = "\n<form action=\"/display_data\" method=\"get\">\n  \
                         <p><input type=\"submit\" value=\"back\"/></p>\n</form>\n";

// ─── Pages ───────────────────────────────────────────────────────────────────

/// GET / — the login form. Posts field `nm` back to `/`.
pub fn login_page() -> Html<String> {
  Html(
    "<!doctype html>\n\
     <html>\n\
     <head><title>Employee Directory</title></head>\n\
     <body>\n\
     <h2>Admin Login</h2>\n\
     <form action=\"/\" method=\"post\">\n\
       <p><label>Name: <input type=\"text\" name=\"nm\"/></label></p>\n\
       <p><input type=\"submit\" value=\"login\"/></p>\n\
     </form>\n\
     </body>\n\
     </html>\n"
      .to_string(),
  )
}

/// The admin page: listing affordance plus the add/update/delete forms.
///
/// `employees` is `None` on `/admin` (the page itself never reads the store)
/// and `Some` on `/display_data`.
pub fn admin_page(employees: Option<&[Employee]>) -> Html<String> {
  let table = match employees {
    Some(employees) => records_table(employees),
    None => String::new(),
  };

  Html(format!(
    "<!doctype html>\n\
     <html>\n\
     <head><title>Employee Directory — Admin</title></head>\n\
     <body>\n\
     <h2>Admin</h2>\n\
     \n\
     <form action=\"/display_data\" method=\"get\">\n\
       <p><input type=\"submit\" value=\"display data\"/></p>\n\
     </form>\n\
     {table}\
     \n\
     <h3>Add employee</h3>\n\
     <form action=\"/add_data\" method=\"post\">\n\
       <p><label>Name: <input type=\"text\" name=\"nme\"/></label></p>\n\
       <p><label>Position: <input type=\"text\" name=\"position\"/></label></p>\n\
       <p><label>Email: <input type=\"text\" name=\"email\"/></label></p>\n\
       <p><input type=\"submit\" value=\"submit\"/></p>\n\
     </form>\n\
     \n\
     <h3>Update employee</h3>\n\
     <form action=\"/update_data\" method=\"post\">\n\
       <p><label>ID: <input type=\"text\" name=\"id_update\"/></label></p>\n\
       <p><label>Name: <input type=\"text\" name=\"name_update\"/></label></p>\n\
       <p><label>Position: <input type=\"text\" name=\"position_update\"/></label></p>\n\
       <p><label>Email: <input type=\"text\" name=\"email_update\"/></label></p>\n\
       <p><input type=\"submit\" value=\"update\"/></p>\n\
     </form>\n\
     \n\
     <h3>Delete employee</h3>\n\
     <form action=\"/delete_data\" method=\"post\">\n\
       <p><label>ID or name: <input type=\"text\" name=\"deleted_employee\"/></label></p>\n\
       <p><input type=\"submit\" value=\"delete\"/></p>\n\
     </form>\n\
     </body>\n\
     </html>\n"
  ))
}

fn records_table(employees: &[Employee]) -> String {
  let mut table = String::from(
    "\n<h3>Employees</h3>\n\
     <table border=\"1\">\n\
     <tr><th>ID</th><th>Name</th><th>Position</th><th>Email</th></tr>\n",
  );
  for e in employees {
    table.push_str(&format!(
      "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
      e.id,
      escape(&e.name),
      escape(&e.position),
      escape(&e.email),
    ));
  }
  table.push_str("</table>\n");
  table
}

// ─── Inline fragments ────────────────────────────────────────────────────────

/// Rejected login. Fixed message, no back form.
pub fn not_admin() -> Html<String> {
  Html("<h3>Oops, sorry you are not an admin</h3>".to_string())
}

/// Insert rejected because a field was empty.
pub fn non_null_notice() -> Html<String> {
  Html(format!("Please input Non Null Data{BACK_FORM}"))
}

/// Delete matched neither an id nor a name.
pub fn not_found_by_id_or_name(token: &str) -> Html<String> {
  Html(format!(
    "No data found with ID or Name: {}{BACK_FORM}",
    escape(token)
  ))
}

/// Update matched no id.
pub fn not_found_by_id(token: &str) -> Html<String> {
  Html(format!("No data found with ID: {}{BACK_FORM}", escape(token)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn admin_page_without_records_has_no_table() {
    let Html(page) = admin_page(None);
    assert!(!page.contains("<table"));
    assert!(page.contains("/add_data"));
    assert!(page.contains("/update_data"));
    assert!(page.contains("/delete_data"));
  }

  #[test]
  fn admin_page_renders_records() {
    let employees = vec![Employee {
      id:       1,
      name:     "Alice".to_string(),
      position: "Engineer".to_string(),
      email:    "a@x.com".to_string(),
    }];
    let Html(page) = admin_page(Some(&employees));
    assert!(page.contains("<td>Alice</td>"));
    assert!(page.contains("<td>a@x.com</td>"));
  }

  #[test]
  fn record_values_are_escaped() {
    let employees = vec![Employee {
      id:       1,
      name:     "<script>".to_string(),
      position: "a & b".to_string(),
      email:    "x@x.com".to_string(),
    }];
    let Html(page) = admin_page(Some(&employees));
    assert!(page.contains("&lt;script&gt;"));
    assert!(page.contains("a &amp; b"));
    assert!(!page.contains("<script>"));
  }

  #[test]
  fn failure_fragments_carry_the_back_form() {
    for Html(fragment) in [
      non_null_notice(),
      not_found_by_id_or_name("x"),
      not_found_by_id("9"),
    ] {
      assert!(fragment.contains("action=\"/display_data\""));
    }
  }
}
