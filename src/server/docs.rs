//! Hand-rolled HTML documentation page for the API.

/// Render the documentation page.
pub fn render() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Identity Card OCR API</title>
<style>
  body {{ font-family: -apple-system, sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; color: #222; }}
  h1 {{ border-bottom: 2px solid #eee; padding-bottom: .3rem; }}
  code, pre {{ background: #f6f8fa; border-radius: 4px; }}
  code {{ padding: .15rem .35rem; }}
  pre {{ padding: .75rem; overflow-x: auto; }}
  .method {{ display: inline-block; font-weight: bold; padding: .1rem .5rem; border-radius: 4px; color: #fff; margin-right: .5rem; }}
  .get {{ background: #2e7d32; }}
  .post {{ background: #1565c0; }}
  .endpoint {{ margin: 1.5rem 0; }}
</style>
</head>
<body>
<h1>Identity Card OCR API <small>v{version}</small></h1>
<p>Upload identity card PDFs (Aadhaar, PAN, voter ID, driving license). Text is
extracted with Tesseract OCR and structured fields are parsed out and stored.</p>

<div class="endpoint">
<span class="method post">POST</span><code>/api/v1/identity-cards/upload</code>
<p>Multipart form upload. The <code>file</code> part must be a PDF (10 MB default limit).</p>
<pre>curl -F "file=@card.pdf" http://localhost:8000/api/v1/identity-cards/upload</pre>
<p>Response envelope:</p>
<pre>{{
  "success": true,
  "message": "Identity card processed successfully",
  "data": {{ "id": "...", "card_type": "aadhaar", "name": "...", ... }},
  "processing_time": 2.41
}}</pre>
<p>A PDF that yields no readable text returns <code>"success": false</code>
with a 200 status. Non-PDF uploads get <code>415</code>, oversized files
<code>413</code>.</p>
</div>

<div class="endpoint">
<span class="method get">GET</span><code>/api/v1/identity-cards/{{card_id}}</code>
<p>Fetch one processed card by ID. Returns <code>404</code> if unknown.</p>
</div>

<div class="endpoint">
<span class="method get">GET</span><code>/api/v1/identity-cards?skip=0&amp;limit=100</code>
<p>List processed cards, newest first. <code>limit</code> is capped at 1000.</p>
</div>

<div class="endpoint">
<span class="method get">GET</span><code>/api/v1/identity-cards/health/check</code>
<p>Liveness probe. Returns <code>{{"status": "healthy"}}</code>.</p>
</div>
</body>
</html>
"#,
        version = env!("CARGO_PKG_VERSION")
    )
}
