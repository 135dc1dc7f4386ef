use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::oneshot;
use tokio::time::Instant;
use tracing_subscriber::EnvFilter;

use crate::bootstrap::Bootstrap;
use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::console::{format_kv_line, StdoutConsole};
use crate::dataset::sample_dataset;
use crate::output::{self, OutputFormat};
use crate::page::{self, PageOptions};

fn print_banner() {
    println!(
        "{} {}",
        "salestally".bold(),
        concat!("v", env!("CARGO_PKG_VERSION"), " - product sales table")
    );
    println!();
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn format_label(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
        OutputFormat::Html => "html",
    }
}

#[derive(Clone, Debug)]
struct RunConfig {
    output: Option<String>,
    output_format: OutputFormat,
    page: PageOptions,
    no_color: bool,
    verbose: u8,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let output_path = args
        .output
        .or(cfg.output)
        .map(|p| config::expand_tilde_string(p.trim()));

    let output_format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw).ok_or_else(|| {
            format!("invalid output format '{raw}', expected text, json or html")
        })?,
        None => output_path
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    let table_id = args
        .table_id
        .or(cfg.table_id)
        .unwrap_or_else(|| page::DEFAULT_TABLE_ID.to_string());
    if !validation::is_valid_element_id(&table_id) {
        return Err(format!("invalid table id '{table_id}'"));
    }
    let total_id = args
        .total_id
        .or(cfg.total_id)
        .unwrap_or_else(|| page::DEFAULT_TOTAL_ID.to_string());
    if !validation::is_valid_element_id(&total_id) {
        return Err(format!("invalid total id '{total_id}'"));
    }
    if table_id == total_id {
        return Err("table id and total id must differ".to_string());
    }
    let title = args
        .title
        .or(cfg.title)
        .unwrap_or_else(|| page::DEFAULT_TITLE.to_string());

    Ok(RunConfig {
        output: output_path,
        output_format,
        page: PageOptions {
            title,
            table_id,
            total_id,
        },
        no_color,
        verbose: args.verbose,
    })
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }
    print_banner();
    let now = Instant::now();

    let dataset = sample_dataset();
    let mut document = page::build_host_document(&run.page)
        .map_err(|e| format!("failed to build host page: {e}"))?;

    let (ready_tx, ready_rx) = oneshot::channel();
    ready_tx
        .send(())
        .map_err(|_| "document-ready listener went away".to_string())?;

    let mut bootstrap = Bootstrap::new(run.page.clone());
    let mut console = StdoutConsole;
    let outcome = bootstrap
        .run(ready_rx, &mut document, &dataset, &mut console)
        .await
        .map_err(|e| e.to_string())?;

    println!();
    format_kv_line("Products", &dataset.len().to_string());
    format_kv_line("Rows", &outcome.rows_rendered.to_string());
    format_kv_line("Total", &outcome.report.grand_total.to_string());
    format_kv_line("Format", format_label(run.output_format));

    let rendered = match run.output_format {
        OutputFormat::Text => output::render_text(&outcome.report, &run.page),
        OutputFormat::Json => output::render_json(&outcome.report)?,
        OutputFormat::Html => output::render_html(&document),
    };

    match run.output.as_deref() {
        Some(outfile_path) => {
            format_kv_line("Output", outfile_path);
            let mut outfile = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(outfile_path)
                .await
                .map_err(|e| format!("failed to open output file: {e}"))?;
            outfile
                .write_all(&rendered)
                .await
                .map_err(|e| format!("failed to write output file: {e}"))?;
            outfile
                .flush()
                .await
                .map_err(|e| format!("failed to write output file: {e}"))?;
        }
        None => {
            println!();
            print!("{}", String::from_utf8_lossy(&rendered));
        }
    }

    println!();
    println!(
        ":: Completed :: render took {}ms ::",
        now.elapsed().as_millis()
    );

    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));

    if args.init_config {
        let path = user_config_path
            .or_else(config::default_config_path)
            .ok_or_else(|| "could not determine a config path".to_string())?;
        config::ensure_default_config_file(&path)?;
        println!(":: Config :: {}", path.display());
        return Ok(());
    }

    let cfg = match user_config_path.as_ref() {
        Some(path) => config::load_config(path, false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;
    init_logging(run.verbose);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))
}
