use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "salestally",
    version,
    about = "per-product sales totals rendered into an HTML table",
    long_about = "salestally sums the sales of each product in its built-in dataset, renders the rows into an HTML table page and shows the grand total.\n\nExamples:\n  salestally\n  salestally -o sales.html\n  salestally -o sales.json --title \"Q3 Sales\"\n  salestally --config ~/.salestally/config.yml\n\nTip: Use --init-config to write a commented default config file."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the result to FILE instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'F',
        long = "fmt",
        visible_alias = "format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format: text, json or html (inferred from --output when omitted)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.salestally/config.yml when present)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "ic",
        visible_alias = "init-config",
        help_heading = "Input",
        help = "Write a default config file (at --config or the default path) and exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 't',
        long = "ttl",
        visible_alias = "title",
        value_name = "TEXT",
        help_heading = "Page",
        help = "Page title and heading."
    )]
    pub title: Option<String>,

    #[arg(
        long = "tid",
        visible_alias = "table-id",
        value_name = "ID",
        help_heading = "Page",
        help = "Element id of the sales table (default product-sales)."
    )]
    pub table_id: Option<String>,

    #[arg(
        long = "sid",
        visible_alias = "total-id",
        value_name = "ID",
        help_heading = "Page",
        help = "Element id of the total display (default total-sales)."
    )]
    pub total_id: Option<String>,
}
