//! HTML views: the landing page, the admin dashboard and the list partials
//! swapped in by the front end after each admin action.
//!
//! All stored text is escaped here, at render time.

use std::fmt::Write;

use crate::models::{Gripes, Submissions};

/// Fragment returned for every visitor submission.
pub const SUBMISSION_CONFIRMATION: &str = r#"<div id="gripe-alert">Thanks for griping.</div>"#;

/// Shown when the gripe collection is empty.
pub const NO_GRIPES_AVAILABLE: &str = "No gripes available.";

/// Shown when the gripe collection cannot be read.
pub const NO_GRIPES: &str = "No gripes.";

const HTMX_SCRIPT: &str = r#"<script src="https://unpkg.com/htmx.org@1.9.12"></script>"#;

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n{}\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        HTMX_SCRIPT,
        body
    )
}

/// Public landing page.
pub fn render_index() -> String {
    page(
        "Gripes",
        r##"<main>
<h1>Gripes</h1>
<div id="gripe" hx-get="/random-gripe" hx-trigger="load">&hellip;</div>
<button hx-get="/random-gripe" hx-target="#gripe">Another gripe</button>
<button hx-post="/submit-a-gripe" hx-prompt="What's bugging you?" hx-target="#gripe-alert" hx-swap="outerHTML">Submit a gripe</button>
<div id="gripe-alert"></div>
</main>"##,
    )
}

/// Gripe list partial, targeted by the add/delete gripe actions.
pub fn render_gripes_list(gripes: &Gripes) -> String {
    let mut out = String::from("<ul id=\"gripes-list\">\n");
    if gripes.is_empty() {
        out.push_str("<li class=\"empty\">No gripes yet.</li>\n");
    }
    for (id, text) in gripes {
        let id = escape_html(id);
        let _ = writeln!(
            out,
            "<li id=\"gripe-{id}\"><code>{id}</code> {text} \
             <button hx-delete=\"/admin/gripes/{id}\" hx-target=\"#gripes-list\" \
             hx-swap=\"outerHTML\">Delete</button></li>",
            id = id,
            text = escape_html(text),
        );
    }
    out.push_str("</ul>");
    out
}

/// Submission list partial, targeted by the delete submission action.
pub fn render_submissions_list(submissions: &Submissions) -> String {
    let mut out = String::from("<ul id=\"submissions-list\">\n");
    if submissions.is_empty() {
        out.push_str("<li class=\"empty\">No pending submissions.</li>\n");
    }
    for (index, submission) in submissions.iter().enumerate() {
        let _ = writeln!(
            out,
            "<li><span class=\"status\">{status}</span> \
             <time>{timestamp}</time> {text} \
             <button hx-delete=\"/admin/submissions/{index}\" hx-target=\"#submissions-list\" \
             hx-swap=\"outerHTML\">Delete</button></li>",
            status = submission.status.as_str(),
            timestamp = escape_html(&submission.timestamp),
            text = escape_html(&submission.text),
            index = index,
        );
    }
    out.push_str("</ul>");
    out
}

/// Admin dashboard with both collections and the add-gripe form.
pub fn render_admin(gripes: &Gripes, submissions: &Submissions) -> String {
    let body = format!(
        "<main>\n<h1>Gripe admin</h1>\n\
         <section>\n<h2>Gripes ({gripe_count})</h2>\n\
         <form hx-post=\"/admin/gripes\" hx-target=\"#gripes-list\" hx-swap=\"outerHTML\">\n\
         <input type=\"text\" name=\"gripe\" placeholder=\"New gripe\" required>\n\
         <button type=\"submit\">Add</button>\n</form>\n{gripes}\n</section>\n\
         <section>\n<h2>Submissions ({submission_count})</h2>\n{submissions}\n</section>\n</main>",
        gripe_count = gripes.len(),
        gripes = render_gripes_list(gripes),
        submission_count = submissions.len(),
        submissions = render_submissions_list(submissions),
    );
    page("Gripe admin", &body)
}
