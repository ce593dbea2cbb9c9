//! HTML template constants for the `HtmlFormatter`.
//!
//! Keeps the page stylesheet out of the formatting logic. The document
//! `<title>` sits between [`HTML_HEAD_OPEN`] and [`HTML_HEAD_CLOSE`].

/// Document start, up to the opening `<title>` tag.
pub const HTML_HEAD_OPEN: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>"#;

/// Closes the title, carries all CSS and opens the page container.
pub const HTML_HEAD_CLOSE: &str = r#"</title>
    <style>
        :root {
            --color-positive: #16a34a;
            --color-negative: #dc2626;
            --color-chart-primary: #6366f1;
            --color-series-1: #6366f1;
            --color-series-2: #f59e0b;
            --color-series-3: #10b981;
            --color-series-4: #ec4899;
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
        }
        @media (prefers-color-scheme: dark) {
            :root {
                --color-bg: #0f172a;
                --color-card: #1e293b;
                --color-border: #334155;
                --color-text: #f1f5f9;
                --color-text-muted: #94a3b8;
            }
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 960px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.25rem; }
        h2 { font-size: 1.25rem; font-weight: 600; margin: 1.5rem 0 1rem; }
        .subtitle { color: var(--color-text-muted); font-size: 0.875rem; margin-bottom: 1.5rem; }
        #highlight { background: var(--color-card); border: 1px solid var(--color-border); border-radius: 0.5rem; padding: 1.5rem; text-align: center; margin-bottom: 1.5rem; }
        #highlight .primary { display: block; font-size: 2.5rem; font-weight: 700; color: var(--color-positive); }
        #highlight .secondary { color: var(--color-text-muted); }
        #kpi-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(170px, 1fr)); gap: 1rem; margin-bottom: 1.5rem; }
        .kpi { background: var(--color-card); border-radius: 0.5rem; padding: 1rem; border: 1px solid var(--color-border); }
        .kpi .label { font-size: 0.8125rem; color: var(--color-text-muted); }
        .kpi .value { font-size: 1.375rem; font-weight: 700; display: block; }
        .kpi .note { font-size: 0.75rem; color: var(--color-text-muted); }
        .kpi.positive .value, tr.positive td { color: var(--color-positive); }
        .kpi.negative .value, tr.negative td { color: var(--color-negative); }
        .chart-container { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1.5rem; }
        .chart-container svg { width: 100%; height: auto; }
        .chart-container svg rect { transition: opacity 0.15s ease; }
        .chart-container svg rect:hover { opacity: 0.85; }
        .table-container { overflow-x: auto; }
        table { width: 100%; border-collapse: collapse; background: var(--color-card); border-radius: 0.5rem; overflow: hidden; border: 1px solid var(--color-border); }
        th, td { padding: 0.625rem 1rem; text-align: right; border-bottom: 1px solid var(--color-border); font-variant-numeric: tabular-nums; }
        th:first-child, td:first-child { text-align: left; }
        th { background: var(--color-bg); font-weight: 600; font-size: 0.8125rem; color: var(--color-text-muted); text-transform: uppercase; letter-spacing: 0.05em; }
        td { font-size: 0.875rem; }
        tr.emphasis td { font-weight: 700; }
        tr:last-child td { border-bottom: none; }
        .notes { margin-top: 1rem; font-size: 0.8125rem; color: var(--color-text-muted); padding-left: 1.25rem; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        @media print {
            body { background: white; color: black; padding: 1rem; }
            .kpi, .chart-container, table, #highlight { border: 1px solid #333; }
        }
    </style>
</head>
<body>
    <div class="container">
"#;

/// Page footer closing the container and document.
pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>reloc-sim</strong>
        </div>
    </div>
</body>
</html>
"#;
