use proptest::prelude::*;
use tokio::sync::oneshot;

use crate::aggregate::calculate_total;
use crate::bootstrap::{
    Bootstrap, BootstrapError, BootstrapState, NO_DATA_MESSAGE, RENDERED_MESSAGE,
};
use crate::console::MemoryConsole;
use crate::dataset::{sample_dataset, Dataset, Product};
use crate::dom::Document;
use crate::page::{build_host_document, PageOptions};
use crate::render::RenderError;
use crate::report::{build_report, ReportError};

fn fired() -> oneshot::Receiver<()> {
    let (tx, rx) = oneshot::channel();
    tx.send(()).unwrap();
    rx
}

fn host() -> Document {
    build_host_document(&PageOptions::default()).unwrap()
}

#[tokio::test]
async fn sample_scenario_end_to_end() {
    let mut doc = host();
    let mut console = MemoryConsole::default();
    let mut bootstrap = Bootstrap::new(PageOptions::default());
    assert_eq!(bootstrap.state(), BootstrapState::Pending);

    let outcome = bootstrap
        .run(fired(), &mut doc, &sample_dataset(), &mut console)
        .await
        .unwrap();

    assert_eq!(bootstrap.state(), BootstrapState::Rendered);
    assert_eq!(outcome.rows_rendered, 3);
    assert_eq!(outcome.report.grand_total, 53);
    assert_eq!(outcome.diagnostic, RENDERED_MESSAGE);
    assert_eq!(console.lines(), [RENDERED_MESSAGE.to_string()]);

    let total = doc.get_element_by_id("total-sales").unwrap();
    assert_eq!(doc.text_content(total), "Total Sales: 53");
    let rows = doc.query_selector_all("#product-sales tbody tr").unwrap();
    let totals: Vec<String> = rows
        .iter()
        .map(|tr| doc.text_content(*doc.children(*tr).last().unwrap()))
        .collect();
    assert_eq!(totals, ["23", "10", "20"]);
}

#[tokio::test]
async fn empty_dataset_logs_no_data() {
    let mut doc = host();
    let mut console = MemoryConsole::default();
    let mut bootstrap = Bootstrap::new(PageOptions::default());

    let outcome = bootstrap
        .run(fired(), &mut doc, &Dataset::default(), &mut console)
        .await
        .unwrap();

    assert_eq!(outcome.rows_rendered, 0);
    assert_eq!(console.lines(), [NO_DATA_MESSAGE.to_string()]);
    let total = doc.get_element_by_id("total-sales").unwrap();
    assert_eq!(doc.text_content(total), "Total Sales: 0");
}

#[tokio::test]
async fn nothing_renders_before_ready_signal() {
    let mut doc = host();
    let before = doc.to_html();
    let mut console = MemoryConsole::default();
    let mut bootstrap = Bootstrap::new(PageOptions::default());
    let dataset = sample_dataset();

    let (_tx, rx) = oneshot::channel::<()>();
    {
        let run = bootstrap.run(rx, &mut doc, &dataset, &mut console);
        tokio::pin!(run);
        let polled_to_completion = tokio::select! {
            biased;
            _ = &mut run => true,
            _ = tokio::task::yield_now() => false,
        };
        assert!(!polled_to_completion);
    }

    assert_eq!(bootstrap.state(), BootstrapState::Pending);
    assert!(console.lines().is_empty());
    assert!(doc
        .query_selector_all("#product-sales tbody tr")
        .unwrap()
        .is_empty());
    assert_eq!(doc.to_html(), before);

    let (tx, rx) = oneshot::channel();
    let run = bootstrap.run(rx, &mut doc, &dataset, &mut console);
    let fire = async {
        tokio::task::yield_now().await;
        tx.send(()).unwrap();
    };
    let (outcome, ()) = tokio::join!(run, fire);
    assert_eq!(outcome.unwrap().rows_rendered, 3);
    assert_eq!(console.lines(), [RENDERED_MESSAGE.to_string()]);
    assert_eq!(bootstrap.state(), BootstrapState::Rendered);
}

#[tokio::test]
async fn dropped_ready_signal_never_renders() {
    let mut doc = host();
    let before = doc.to_html();
    let mut console = MemoryConsole::default();
    let mut bootstrap = Bootstrap::new(PageOptions::default());
    let (tx, rx) = oneshot::channel::<()>();
    drop(tx);

    let err = bootstrap
        .run(rx, &mut doc, &sample_dataset(), &mut console)
        .await
        .unwrap_err();

    assert!(matches!(err, BootstrapError::ReadySignalDropped));
    assert_eq!(bootstrap.state(), BootstrapState::Pending);
    assert!(console.lines().is_empty());
    assert_eq!(doc.to_html(), before);
}

#[tokio::test]
async fn second_run_is_rejected() {
    let mut doc = host();
    let mut console = MemoryConsole::default();
    let mut bootstrap = Bootstrap::new(PageOptions::default());
    let dataset = sample_dataset();
    bootstrap
        .run(fired(), &mut doc, &dataset, &mut console)
        .await
        .unwrap();

    let err = bootstrap
        .run(fired(), &mut doc, &dataset, &mut console)
        .await
        .unwrap_err();
    assert!(matches!(err, BootstrapError::AlreadyRendered));
    assert_eq!(console.lines().len(), 1);
    assert_eq!(
        doc.query_selector_all("#product-sales tbody tr").unwrap().len(),
        3
    );
}

#[tokio::test]
async fn missing_table_aborts_without_diagnostic() {
    let mut doc = build_host_document(&PageOptions {
        table_id: "elsewhere".to_string(),
        ..PageOptions::default()
    })
    .unwrap();
    let before = doc.to_html();
    let mut console = MemoryConsole::default();
    let mut bootstrap = Bootstrap::new(PageOptions::default());

    let err = bootstrap
        .run(fired(), &mut doc, &sample_dataset(), &mut console)
        .await
        .unwrap_err();

    match err {
        BootstrapError::MissingElement { selector } => {
            assert_eq!(selector, "#product-sales tbody")
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(console.lines().is_empty());
    assert_eq!(bootstrap.state(), BootstrapState::Pending);
    assert_eq!(doc.to_html(), before);
}

#[tokio::test]
async fn missing_total_display_leaves_table_untouched() {
    let mut doc = build_host_document(&PageOptions {
        total_id: "grand".to_string(),
        ..PageOptions::default()
    })
    .unwrap();
    let mut console = MemoryConsole::default();
    let mut bootstrap = Bootstrap::new(PageOptions::default());

    let err = bootstrap
        .run(fired(), &mut doc, &sample_dataset(), &mut console)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "missing structural element: #total-sales");
    assert!(doc
        .query_selector_all("#product-sales tbody tr")
        .unwrap()
        .is_empty());
    assert!(console.lines().is_empty());
}

#[test]
fn grand_total_is_sum_of_product_totals() {
    let dataset = Dataset::new(vec![
        Product::new("Repeat", vec![2, 2, 2]),
        Product::new("Empty", vec![]),
        Product::new("Large", vec![1_000_000, 2_500_000]),
    ]);
    let report = build_report(&dataset).unwrap();
    let expected: u64 = dataset
        .products()
        .iter()
        .map(|p| calculate_total(&p.sales).unwrap())
        .sum();
    assert_eq!(report.grand_total, expected);
    assert_eq!(report.grand_total, 3_500_006);
    assert_eq!(report.rows.len(), dataset.len());
}

#[tokio::test]
async fn overflowing_dataset_aborts_without_diagnostic() {
    let mut doc = host();
    let before = doc.to_html();
    let mut console = MemoryConsole::default();
    let mut bootstrap = Bootstrap::new(PageOptions::default());
    let dataset = Dataset::new(vec![
        Product::new("Big", vec![u64::MAX]),
        Product::new("One", vec![1]),
    ]);

    let err = bootstrap
        .run(fired(), &mut doc, &dataset, &mut console)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BootstrapError::Render {
            source: RenderError::Report(ReportError::GrandTotalOverflow)
        }
    ));
    assert_eq!(bootstrap.state(), BootstrapState::Pending);
    assert!(console.lines().is_empty());
    assert_eq!(doc.to_html(), before);
}

proptest! {
    #[test]
    fn bootstrap_renders_any_dataset(
        products in proptest::collection::vec(
            ("[A-Za-z][A-Za-z0-9 ]{0,11}", proptest::collection::vec(0..100_000u64, 0..6)),
            0..8,
        )
    ) {
        let dataset = Dataset::new(
            products
                .into_iter()
                .map(|(name, sales)| Product::new(name, sales))
                .collect(),
        );
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let mut doc = host();
        let mut console = MemoryConsole::default();
        let mut bootstrap = Bootstrap::new(PageOptions::default());

        let outcome = rt
            .block_on(bootstrap.run(fired(), &mut doc, &dataset, &mut console))
            .unwrap();

        prop_assert_eq!(outcome.rows_rendered, dataset.len());
        let expected_total: u64 = dataset.products().iter().flat_map(|p| p.sales.iter()).sum();
        prop_assert_eq!(outcome.report.grand_total, expected_total);
        let expected_line = if dataset.is_empty() { NO_DATA_MESSAGE } else { RENDERED_MESSAGE };
        prop_assert_eq!(console.lines(), [expected_line.to_string()]);
        let total = doc.get_element_by_id("total-sales").unwrap();
        prop_assert_eq!(doc.text_content(total), format!("Total Sales: {expected_total}"));
    }
}
