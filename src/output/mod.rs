use crate::dom::Document;
use crate::page::PageOptions;
use crate::report::SalesReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

/// Plain-text table followed by the total line.
pub fn render_text(report: &SalesReport, options: &PageOptions) -> Vec<u8> {
    let header = ["Product Name", "Sales Entries", "Total Sales"];
    let body: Vec<[String; 3]> = report
        .rows
        .iter()
        .map(|r| [r.name.clone(), r.sales_text(), r.total.to_string()])
        .collect();

    let mut widths = header.map(str::len);
    for row in &body {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&options.title);
    out.push('\n');
    out.push_str(&format!(
        "{:<w0$} | {:<w1$} | {:>w2$}\n",
        header[0],
        header[1],
        header[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    ));
    out.push_str(&format!(
        "{}-+-{}-+-{}\n",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    ));
    for row in &body {
        out.push_str(&format!(
            "{:<w0$} | {:<w1$} | {:>w2$}\n",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        ));
    }
    out.push_str(&report.total_sales_text());
    out.push('\n');
    out.into_bytes()
}

pub fn render_json(report: &SalesReport) -> Result<Vec<u8>, String> {
    let mut bytes = serde_json::to_vec_pretty(report)
        .map_err(|e| format!("failed to serialize report: {e}"))?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn render_html(doc: &Document) -> Vec<u8> {
    doc.to_html().into_bytes()
}
