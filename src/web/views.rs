//! # HTML Views
//!
//! Server-rendered pages for the task status form, built with `format!`
//! into [`axum::response::Html`]. User-provided values are escaped before
//! interpolation; the status label "Status: " is applied here and nowhere
//! else.

use axum::response::Html;

/// Render the empty query form page
pub fn status_form_page() -> Html<String> {
    Html(render_page("", "", None))
}

/// Render the result page: the form with echoed inputs plus the status block
pub fn status_result_page(student_id: &str, task_id: &str, status: &str) -> Html<String> {
    Html(render_page(student_id, task_id, Some(status)))
}

fn render_page(student_id: &str, task_id: &str, status: Option<&str>) -> String {
    let status_block = match status {
        Some(status) => format!(
            "\n    <div class=\"status-display\">Status: {}</div>",
            escape_html(status)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Task Status Check</title>
</head>
<body>
    <h1>Check Task Status</h1>
    <form action="/checkTaskStatus" method="get">
        <label for="studentId">Student ID:</label>
        <input type="text" id="studentId" name="studentId" value="{}">

        <label for="taskId">Task ID:</label>
        <input type="text" id="taskId" name="taskId" value="{}">

        <input type="submit" value="Check Status">
    </form>{}
</body>
</html>
"#,
        escape_html(student_id),
        escape_html(task_id),
        status_block
    )
}

/// Escape text for interpolation into HTML body and attribute positions
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;") // Must be first to avoid double-escaping
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
