//! Request dispatcher.
//!
//! Routes by method: OPTIONS answers the CORS preflight, POST feeds the
//! form echo, everything else behaves like a plain static file server.

use hyper::Method;

use crate::form::Submission;
use crate::{Req, Res, static_files};

/// Guard against a runaway declared body size. Contact-form posts are
/// tiny; anything past this is a misbehaving client.
const MAX_FORM_BODY: usize = 1024 * 1024;

/// Canned page returned for every accepted submission, pointing the
/// tester back at the form.
const SUCCESS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Form Submitted</title>
    <style>
        body { font-family: Arial, sans-serif; text-align: center; padding: 50px; }
        .success { color: green; font-size: 24px; margin-bottom: 20px; }
        .info { color: #666; margin-bottom: 10px; }
    </style>
</head>
<body>
    <div class="success">Form Submitted Successfully!</div>
    <div class="info">This is a local testing simulation.</div>
    <div class="info">In production, the forms backend will handle this.</div>
    <div class="info">Check your terminal for the submitted data.</div>
    <br>
    <a href="/">&larr; Back to Contact Form</a>
</body>
</html>
"#;

/// Handle one request.
pub async fn dispatch(req: Req) -> Res {
    match *req.method() {
        Method::OPTIONS => preflight(),
        Method::POST => submit(req).await,
        _ => static_files::serve(req.path()).await,
    }
}

/// CORS preflight: 200 with the permissive headers and no body, on any
/// path. Browsers send this before the cross-origin POST.
fn preflight() -> Res {
    Res::new().cors()
}

/// Form echo at `/` and `/index.html`; 404 anywhere else.
async fn submit(mut req: Req) -> Res {
    if req.path() != "/" && req.path() != "/index.html" {
        return Res::status(404);
    }

    let Some(declared_len) = req.content_length() else {
        println!("Rejected POST without a usable Content-Length header");
        return Res::status(400).cors();
    };
    if declared_len > MAX_FORM_BODY {
        println!("Rejected POST with Content-Length {declared_len} (limit {MAX_FORM_BODY})");
        return Res::status(400).cors();
    }

    let content_type = req.content_type().map(str::to_owned);
    match req.read_body(declared_len).await {
        Ok(body) => {
            let submission = Submission::parse(content_type.as_deref(), &body);
            print!("{}", submission.render());
        }
        Err(e) => {
            // Body errors are logged and swallowed; the client still
            // gets the success page, same as parse errors.
            println!("Error reading form data: {e}");
        }
    }

    Res::html(SUCCESS_PAGE).cors()
}
