//! Server-rendered HTML pages.
//!
//! Pages load no inline scripts or styles so they work under the
//! `Content-Security-Policy` set by the security headers middleware.

use pdfshelf_core::StoredFile;

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

fn layout(title: &str, body: &str, with_script: bool) -> String {
    let script = if with_script {
        r#"<script src="/static/upload.js" defer></script>"#
    } else {
        ""
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/style.css">
{script}
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        script = script,
        body = body,
    )
}

pub fn login_page(error: Option<&str>) -> String {
    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape_html(e)))
        .unwrap_or_default();
    let body = format!(
        r#"<main class="card narrow">
<h1>Login</h1>
{error}
<form method="post" action="/login">
<label for="password">Password</label>
<input type="password" id="password" name="password" placeholder="Enter password" required autofocus>
<button type="submit">Login</button>
</form>
</main>"#
    );
    layout("Login", &body, false)
}

fn file_entry(file: &StoredFile) -> String {
    let key = escape_html(&file.key);
    let label = match &file.url {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(url),
            key
        ),
        None => format!("<span>{}</span>", key),
    };
    format!(
        r#"<li class="file">{label}<form method="post" action="/api/delete?name={name}" class="inline"><button type="submit" class="link danger">Delete</button></form></li>"#,
        label = label,
        name = escape_html(&urlencoding::encode(&file.key)),
    )
}

/// Home page: upload form and the current bucket listing. `error` replaces the listing.
pub fn home_page(files: &[StoredFile], error: Option<&str>) -> String {
    let mut list = String::new();
    if files.is_empty() {
        list.push_str(r#"<li class="empty">No PDFs found.</li>"#);
    }
    for file in files {
        list.push_str(&file_entry(file));
        list.push('\n');
    }

    let error = error
        .map(|e| format!(r#"<p class="error">Error: {}</p>"#, escape_html(e)))
        .unwrap_or_default();

    let body = format!(
        r#"<main class="card">
<header>
<h1>PDF Upload</h1>
<a href="/logout">Logout</a>
</header>
{error}
<form id="upload-form" method="post" action="/" enctype="multipart/form-data">
<input type="file" name="pdf" accept="application/pdf" required>
<button type="submit" id="upload-button">Upload</button>
<span id="loading-spinner" class="spinner hidden" aria-hidden="true"></span>
</form>
<p id="success-message" class="message hidden" role="status"></p>
<h2>Uploaded PDFs</h2>
<ul id="pdf-list">
{list}</ul>
</main>"#
    );
    layout("PDF Upload", &body, true)
}
