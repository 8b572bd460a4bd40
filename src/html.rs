//! HTML content for the hellokube page.
//!
//! Exports `render_page`, which builds the landing page around the current
//! background color. Rendering goes through an explicit builder with a
//! minimal escape step instead of raw interpolation; for CSS color strings
//! the escape is the identity.
//!
/// Page `<title>` text
const PAGE_TITLE: &str = "Hello Kubernetes technion course!";

/// Render the landing page with the given background color
///
/// # Arguments
/// * `color` - Resolved CSS background-color value
pub fn render_page(color: &str) -> String {
    let color = escape(color);
    format!(
        r#"<!doctype html>
<html>
    <head><title>{PAGE_TITLE}</title></head>
    <body style="background-color: {color};">
        <h1 style="color: black;">Hello, Kubernetes!</h1>
        <p>The background color is {color}.</p>
    </body>
</html>
"#
    )
}

/// Escape markup metacharacters in a value interpolated into the page.
/// Color names never contain any, but the page must stay well formed for
/// arbitrary environment values.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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
