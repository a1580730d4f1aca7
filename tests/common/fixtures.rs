//! Test fixtures - reusable content constants for tests.

/// Entry document loading one script and one stylesheet
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <link rel="stylesheet" href="css/app.css">
    <script src="/app/app.nocache.js"></script>
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

/// Entry document whose only references are external URLs
pub const INDEX_HTML_EXTERNAL_ONLY: &str = r#"<html><head>
<script src="https://cdn.example.com/lib.js"></script>
<link rel="stylesheet" href="//fonts.example.com/font.css">
</head><body></body></html>
"#;

/// Project descriptor declaring two essential assets
pub const PROJECT_FILE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
    <pwa>
        <essential-assets>
            <asset strategy="critical">/images/splash.png</asset>
            <asset>fonts/roboto.woff2</asset>
        </essential-assets>
    </pwa>
</project>
"#;

/// Typical compiled output of a small web application
pub const APP_OUTPUT: &[(&str, &str)] = &[
    ("index.html", INDEX_HTML),
    ("css/app.css", "body { margin: 0; }\n"),
    ("app/app.nocache.js", "window.app = {};\n"),
    ("app/4F2A.cache.js", "function main() {}\n"),
    ("images/splash.png", "PNG-splash"),
    ("images/icon.png", "PNG-icon"),
    ("fonts/roboto.woff2", "WOFF2"),
    ("app/app.js.map", "{\"version\":3}"),
    ("README.txt", "not an asset"),
];
