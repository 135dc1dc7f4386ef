use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

use crate::aggregate::calculate_total;
use crate::dataset::Dataset;

pub const SALES_SEPARATOR: &str = ", ";

/// One table row derived from a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub name: String,
    pub sales: Vec<u64>,
    pub total: u64,
}

impl RenderedRow {
    /// Sales values joined with `", "`; empty when there are no sales.
    pub fn sales_text(&self) -> String {
        self.sales.iter().join(SALES_SEPARATOR)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SalesReport {
    pub rows: Vec<RenderedRow>,
    pub grand_total: u64,
}

impl SalesReport {
    pub fn total_sales_text(&self) -> String {
        total_sales_text(self.grand_total)
    }
}

pub fn total_sales_text(total: u64) -> String {
    format!("Total Sales: {total}")
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("sales total of '{product}' does not fit in a u64")]
    ProductTotalOverflow { product: String },

    #[error("grand total does not fit in a u64")]
    GrandTotalOverflow,
}

/// Compute rows and the grand total for `dataset`, in dataset order.
pub fn build_report(dataset: &Dataset) -> Result<SalesReport, ReportError> {
    let mut grand_total: u64 = 0;
    let mut rows = Vec::with_capacity(dataset.len());
    for product in dataset.products() {
        let total =
            calculate_total(&product.sales).map_err(|_| ReportError::ProductTotalOverflow {
                product: product.name.clone(),
            })?;
        grand_total = grand_total
            .checked_add(total)
            .ok_or(ReportError::GrandTotalOverflow)?;
        rows.push(RenderedRow {
            name: product.name.clone(),
            sales: product.sales.clone(),
            total,
        });
    }
    Ok(SalesReport { rows, grand_total })
}
