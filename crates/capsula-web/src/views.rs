//! Server-rendered HTML views: the upload form, the per-file report, and
//! error pages. Guest-supplied text is escaped before interpolation.

use capsula_core::models::{UploadOutcome, UploadReport};

/// Escape text for safe interpolation into HTML.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<style>
  body {{ font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; color: #333; }}
  h1 {{ font-size: 1.4rem; }}
  form label {{ display: block; margin-top: 1rem; }}
  input[type=text], textarea {{ width: 100%; padding: 0.4rem; }}
  button {{ margin-top: 1.2rem; padding: 0.5rem 1.5rem; }}
  ul.report {{ list-style: none; padding: 0; }}
  ul.report li {{ padding: 0.4rem 0; border-bottom: 1px solid #eee; }}
  .accepted {{ color: #1a7f37; }}
  .rejected {{ color: #b42318; }}
  .error {{ color: #b42318; }}
</style>
</head>
<body>
{}
</body>
</html>
"#,
        escape_html(title),
        body
    )
}

/// The upload form page.
pub fn upload_form(max_file_mb: usize, max_files: usize) -> String {
    let body = format!(
        r#"<h1>Wedding Time Capsule</h1>
<p>Share your photos and videos with us. Up to {max_files} files per upload, {max_file_mb} MB each.</p>
<form method="post" action="/upload" enctype="multipart/form-data">
  <label>Your name
    <input type="text" name="guest_name" placeholder="Guest">
  </label>
  <label>Message (optional)
    <textarea name="message" rows="3"></textarea>
  </label>
  <label>Files
    <input type="file" name="files" multiple required>
  </label>
  <label>
    <input type="checkbox" name="consent" value="on">
    I agree that these files are shared with the couple.
  </label>
  <button type="submit">Upload</button>
</form>
"#,
        max_files = max_files,
        max_file_mb = max_file_mb,
    );
    layout("Wedding Time Capsule", &body)
}

fn outcome_item(outcome: &UploadOutcome) -> String {
    match outcome {
        UploadOutcome::Accepted {
            original_filename,
            stored_name,
            web_link,
            ..
        } => {
            let link = match web_link {
                Some(url) => format!(
                    r#" &mdash; <a href="{}">view</a>"#,
                    escape_html(url)
                ),
                None => String::new(),
            };
            format!(
                r#"<li class="accepted">&#10003; {} (stored as {}){}</li>"#,
                escape_html(original_filename),
                escape_html(stored_name),
                link
            )
        }
        UploadOutcome::Rejected {
            original_filename,
            reason,
        } => format!(
            r#"<li class="rejected">&#10007; {} &mdash; {}</li>"#,
            escape_html(original_filename),
            reason
        ),
    }
}

/// The aggregate report page rendered after a processed upload.
pub fn report_page(report: &UploadReport) -> String {
    let items: String = report.outcomes.iter().map(outcome_item).collect();
    let body = format!(
        r#"<h1>Upload report</h1>
<p>Thank you, {}! {} of {} file(s) accepted, {} rejected.</p>
<ul class="report">
{}
</ul>
<p><a href="/upload">Upload more files</a></p>
"#,
        escape_html(&report.guest_name),
        report.accepted,
        report.total(),
        report.rejected,
        items
    );
    layout("Upload report", &body)
}

/// A request-level error page.
pub fn error_page(message: &str) -> String {
    let body = format!(
        r#"<h1>Upload failed</h1>
<p class="error">{}</p>
<p><a href="/upload">Back to the upload form</a></p>
"#,
        escape_html(message)
    );
    layout("Upload failed", &body)
}
