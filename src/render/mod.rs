//! Applies a [`SalesReport`] to a document: rows go into the table body,
//! the grand total into the display element.

use thiserror::Error;
use tracing::debug;

use crate::dataset::Dataset;
use crate::dom::{Document, DomError, NodeId};
use crate::report::{
    build_report, total_sales_text, RenderedRow, ReportError, SalesReport, SALES_SEPARATOR,
};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// One render pass. Prior content of `tbody` is discarded first, so calling
/// this again with the same dataset yields the same rows and total. The
/// report is computed before the document is touched.
pub fn render_table(
    doc: &mut Document,
    dataset: &Dataset,
    tbody: NodeId,
    total_display: NodeId,
) -> Result<SalesReport, RenderError> {
    let report = build_report(dataset)?;
    apply_report(doc, &report, tbody, total_display)?;
    Ok(report)
}

pub fn apply_report(
    doc: &mut Document,
    report: &SalesReport,
    tbody: NodeId,
    total_display: NodeId,
) -> Result<(), DomError> {
    doc.clear_children(tbody)?;
    for row in &report.rows {
        let tr = build_row(doc, row)?;
        doc.append_child(tbody, tr)?;
        debug!(product = %row.name, total = row.total, "appended row");
    }
    update_total_sales(doc, total_display, report.grand_total)
}

pub fn update_total_sales(
    doc: &mut Document,
    display: NodeId,
    total: u64,
) -> Result<(), DomError> {
    doc.set_text_content(display, total_sales_text(total))
}

fn build_row(doc: &mut Document, row: &RenderedRow) -> Result<NodeId, DomError> {
    let tr = doc.create_element("tr");

    let name_cell = doc.create_element("td");
    doc.set_text_content(name_cell, row.name.as_str())?;
    doc.append_child(tr, name_cell)?;

    // one span per value, separators only between values
    let sales_cell = doc.create_element("td");
    for (index, sale) in row.sales.iter().enumerate() {
        let span = doc.create_element("span");
        doc.set_text_content(span, sale.to_string())?;
        doc.append_child(sales_cell, span)?;
        if index + 1 < row.sales.len() {
            let separator = doc.create_text_node(SALES_SEPARATOR);
            doc.append_child(sales_cell, separator)?;
        }
    }
    doc.append_child(tr, sales_cell)?;

    let total_cell = doc.create_element("td");
    doc.set_text_content(total_cell, row.total.to_string())?;
    doc.append_child(tr, total_cell)?;

    Ok(tr)
}
