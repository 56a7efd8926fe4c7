//! HTML rendering.
//!
//! Pure functions from data to `Html<String>`. A shared `layout` wraps each
//! page body; there is no template engine and no logic here beyond iteration
//! and interpolation. Every user-supplied string passes through `escape`.

use axum::http::StatusCode;
use axum::response::Html;

use crate::domain::Item;

/// Escape text for safe interpolation into HTML element content or
/// double-quoted attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page chrome. Composition rather than template inheritance: the body
/// is passed in as already-rendered markup.
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} - Itempad</title>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        body = body,
    )
}

/// The list page: one table row per item, with edit and delete controls.
pub fn list_page(items: &[Item]) -> Html<String> {
    let mut body = String::from("<p><a href=\"/add\">Add New Item</a></p>\n");

    if items.is_empty() {
        body.push_str("<p>No items yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>ID</th><th>Name</th><th>Description</th><th></th></tr>\n",
        );
        for item in items {
            body.push_str(&format!(
                "<tr>\
                 <td>{id}</td>\
                 <td>{name}</td>\
                 <td>{description}</td>\
                 <td>\
                 <a href=\"/edit/{id}\">Edit</a> \
                 <form method=\"post\" action=\"/delete/{id}\" style=\"display:inline\">\
                 <button type=\"submit\">Delete</button>\
                 </form>\
                 </td>\
                 </tr>\n",
                id = item.id,
                name = escape(&item.name),
                description = escape(&item.description),
            ));
        }
        body.push_str("</table>\n");
    }

    Html(layout("Items", &body))
}

/// The empty add form.
pub fn add_page() -> Html<String> {
    Html(layout("Add Item", &item_form("/add", "", "")))
}

/// The edit form, pre-filled with the item's current values.
pub fn edit_page(item: &Item) -> Html<String> {
    Html(layout(
        "Edit Item",
        &item_form(
            &format!("/edit/{}", item.id),
            &item.name,
            &item.description,
        ),
    ))
}

/// A minimal error page for the 400/404/500 surfaces.
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!(
        "<p>{}</p>\n<p><a href=\"/\">Back to items</a></p>\n",
        escape(message)
    );
    Html(layout(&title, &body))
}

fn item_form(action: &str, name: &str, description: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <p><label>Name: <input type=\"text\" name=\"name\" value=\"{name}\" required></label></p>\n\
         <p><label>Description: <input type=\"text\" name=\"description\" value=\"{description}\"></label></p>\n\
         <p><button type=\"submit\">Save</button> <a href=\"/\">Cancel</a></p>\n\
         </form>\n",
        action = escape(action),
        name = escape(name),
        description = escape(description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(
            escape("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_list_page_escapes_item_fields() {
        let items = vec![Item {
            id: 1,
            name: "<script>alert(1)</script>".to_string(),
            description: "a<b".to_string(),
        }];
        let Html(html) = list_page(&items);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a&lt;b"));
    }

    #[test]
    fn test_list_page_empty_store() {
        let Html(html) = list_page(&[]);
        assert!(html.contains("No items yet."));
        assert!(html.contains("href=\"/add\""));
    }

    #[test]
    fn test_list_page_links_edit_and_delete_by_id() {
        let items = vec![Item {
            id: 7,
            name: "Widget".to_string(),
            description: String::new(),
        }];
        let Html(html) = list_page(&items);
        assert!(html.contains("href=\"/edit/7\""));
        assert!(html.contains("action=\"/delete/7\""));
    }

    #[test]
    fn test_edit_page_prefills_values() {
        let item = Item {
            id: 3,
            name: "Widget".to_string(),
            description: "Blue".to_string(),
        };
        let Html(html) = edit_page(&item);
        assert!(html.contains("action=\"/edit/3\""));
        assert!(html.contains("value=\"Widget\""));
        assert!(html.contains("value=\"Blue\""));
    }

    #[test]
    fn test_edit_page_escapes_attribute_values() {
        let item = Item {
            id: 3,
            name: "\"><script>".to_string(),
            description: String::new(),
        };
        let Html(html) = edit_page(&item);
        assert!(!html.contains("value=\"\"><script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_error_page_carries_status_and_message() {
        let Html(html) = error_page(StatusCode::NOT_FOUND, "no item with id 42");
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("no item with id 42"));
    }
}
