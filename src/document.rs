//! Standalone HTML document rendering for highlighted output
//!
//! Wraps the mirror's lines in a complete HTML document with an embedded
//! stylesheet for the highlight class, for viewing the output outside the
//! live editing surface.

use crate::highlight::HighlightedLine;

/// Render highlighted lines as a complete HTML document.
///
/// One `<div>` per line, matching the child-per-line structure of the live
/// mirror; blank lines arrive as spacer markup and render as line breaks.
pub fn render_document(lines: &[HighlightedLine], class: &str) -> String {
    let mut body = String::new();
    for line in lines {
        body.push_str("        <div>");
        body.push_str(&line.markup);
        body.push_str("</div>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>{}</style>
</head>
<body>
    <div id="mirror">
{}    </div>
</body>
</html>"#,
        generate_css(class),
        body
    )
}

/// Generate the stylesheet for the document wrapper.
fn generate_css(class: &str) -> String {
    format!(
        r#"
body {{
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 14px;
    line-height: 1.6;
    color: #24292e;
    background: #ffffff;
    padding: 20px;
    max-width: 800px;
    margin: 0 auto;
}}

#mirror div {{
    white-space: pre-wrap;
}}

.{class} {{
    background: #fff3b0;
    border-radius: 3px;
    padding: 0 2px;
}}
"#,
        class = class
    )
}
