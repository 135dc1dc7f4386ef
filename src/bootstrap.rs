use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::console::Console;
use crate::dataset::Dataset;
use crate::dom::{Document, DomError};
use crate::page::PageOptions;
use crate::render::{render_table, RenderError};
use crate::report::SalesReport;

pub const RENDERED_MESSAGE: &str = "Table has been rendered with product data.";
pub const NO_DATA_MESSAGE: &str = "No product data found.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapState {
    Pending,
    Rendered,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("missing structural element: {selector}")]
    MissingElement { selector: String },

    #[error("document-ready signal was dropped before it fired")]
    ReadySignalDropped,

    #[error("table has already been rendered")]
    AlreadyRendered,

    #[error("document operation failed: {source}")]
    Dom {
        #[from]
        source: DomError,
    },

    #[error("render failed: {source}")]
    Render {
        #[from]
        source: RenderError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOutcome {
    pub report: SalesReport,
    pub rows_rendered: usize,
    pub diagnostic: &'static str,
}

/// One-shot initializer: waits for the document-ready signal, renders the
/// table once and reports whether any rows made it into the page.
#[derive(Clone, Debug)]
pub struct Bootstrap {
    options: PageOptions,
    state: BootstrapState,
}

impl Bootstrap {
    pub fn new(options: PageOptions) -> Self {
        Self {
            options,
            state: BootstrapState::Pending,
        }
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }

    pub async fn run<C: Console>(
        &mut self,
        ready: oneshot::Receiver<()>,
        doc: &mut Document,
        dataset: &Dataset,
        console: &mut C,
    ) -> Result<RenderOutcome, BootstrapError> {
        if self.state == BootstrapState::Rendered {
            return Err(BootstrapError::AlreadyRendered);
        }
        ready.await.map_err(|_| BootstrapError::ReadySignalDropped)?;
        debug!("document ready");
        self.render(doc, dataset, console)
    }

    fn render<C: Console>(
        &mut self,
        doc: &mut Document,
        dataset: &Dataset,
        console: &mut C,
    ) -> Result<RenderOutcome, BootstrapError> {
        // both handles resolve before any mutation
        let body_selector = self.options.table_body_selector();
        let tbody = doc
            .query_selector(&body_selector)?
            .ok_or(BootstrapError::MissingElement {
                selector: body_selector,
            })?;
        let total_display = doc.get_element_by_id(&self.options.total_id).ok_or_else(|| {
            BootstrapError::MissingElement {
                selector: format!("#{}", self.options.total_id),
            }
        })?;

        let report = render_table(doc, dataset, tbody, total_display)?;
        self.state = BootstrapState::Rendered;

        let rows_rendered = doc.query_selector_all(&self.options.row_selector())?.len();
        let diagnostic = if rows_rendered >= 1 {
            RENDERED_MESSAGE
        } else {
            NO_DATA_MESSAGE
        };
        console.log(diagnostic);
        info!(
            rows = rows_rendered,
            grand_total = report.grand_total,
            "render pass complete"
        );

        Ok(RenderOutcome {
            report,
            rows_rendered,
            diagnostic,
        })
    }
}
