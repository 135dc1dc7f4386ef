use crate::dom::{Document, DomError, NodeId};

pub const DEFAULT_TABLE_ID: &str = "product-sales";
pub const DEFAULT_TOTAL_ID: &str = "total-sales";
pub const DEFAULT_TITLE: &str = "Product Sales";

const COLUMNS: [&str; 3] = ["Product Name", "Sales Entries", "Total Sales"];

const BASE_STYLE: &str = "body{font-family:system-ui,-apple-system,Segoe UI,Roboto,Arial,sans-serif;margin:24px;}\
table{border-collapse:collapse;min-width:420px}\
td,th{padding:6px 10px;border-bottom:1px solid #ddd;text-align:left}";

fn page_style(options: &PageOptions) -> String {
    format!(
        "{BASE_STYLE}#{}{{margin-top:16px;font-weight:600}}",
        options.total_id
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    pub table_id: String,
    pub total_id: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            table_id: DEFAULT_TABLE_ID.to_string(),
            total_id: DEFAULT_TOTAL_ID.to_string(),
        }
    }
}

impl PageOptions {
    /// Selector for the table body rows are rendered into.
    pub fn table_body_selector(&self) -> String {
        format!("#{} tbody", self.table_id)
    }

    pub fn row_selector(&self) -> String {
        format!("#{} tbody tr", self.table_id)
    }
}

fn element(doc: &mut Document, parent: NodeId, tag: &str) -> Result<NodeId, DomError> {
    let node = doc.create_element(tag);
    doc.append_child(parent, node)
}

fn text_element(
    doc: &mut Document,
    parent: NodeId,
    tag: &str,
    text: &str,
) -> Result<NodeId, DomError> {
    let node = element(doc, parent, tag)?;
    doc.set_text_content(node, text)?;
    Ok(node)
}

/// Host markup: an empty sales table (header row, empty `tbody`) and the
/// total display element.
pub fn build_host_document(options: &PageOptions) -> Result<Document, DomError> {
    let mut doc = Document::new();
    let root = doc.root();

    let html = element(&mut doc, root, "html")?;
    doc.set_attribute(html, "lang", "en")?;

    let head = element(&mut doc, html, "head")?;
    let meta = element(&mut doc, head, "meta")?;
    doc.set_attribute(meta, "charset", "utf-8")?;
    text_element(&mut doc, head, "title", &options.title)?;
    text_element(&mut doc, head, "style", &page_style(options))?;

    let body = element(&mut doc, html, "body")?;
    text_element(&mut doc, body, "h1", &options.title)?;

    let table = element(&mut doc, body, "table")?;
    doc.set_attribute(table, "id", &options.table_id)?;
    let thead = element(&mut doc, table, "thead")?;
    let header_row = element(&mut doc, thead, "tr")?;
    for column in COLUMNS {
        text_element(&mut doc, header_row, "th", column)?;
    }
    element(&mut doc, table, "tbody")?;

    let total = element(&mut doc, body, "div")?;
    doc.set_attribute(total, "id", &options.total_id)?;

    Ok(doc)
}
