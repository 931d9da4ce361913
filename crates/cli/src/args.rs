use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use storefront_observability::LogFormat;

#[derive(Parser, Debug, Clone)]
#[command(name = "storefront", version, about = "Browse storefront listing pages")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Root URL for share links (overrides STOREFRONT_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// JSON product catalog replacing the page's built-in dataset.
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Log format on stderr: json|text
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the built-in pages.
    Pages,

    /// Render a page's product grid.
    List {
        /// Page slug (see `storefront pages`).
        page: String,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Open the quick view on one product of the grid.
    Show {
        page: String,

        /// Position in the displayed grid, starting at 0.
        index: usize,

        #[command(flatten)]
        grid: GridArgs,

        #[command(flatten)]
        actions: QuickViewArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct GridArgs {
    /// Category chip label, e.g. "Tops".
    #[arg(long)]
    pub category: Option<String>,

    /// Sort option: label or key (newest|price-asc|price-desc|popular).
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QuickViewArgs {
    /// Step forward this many products before rendering.
    #[arg(long, default_value_t = 0)]
    pub next: usize,

    /// Step back this many products before rendering.
    #[arg(long, default_value_t = 0)]
    pub previous: usize,

    /// Select a size.
    #[arg(long)]
    pub size: Option<String>,

    /// Press "Add to Cart".
    #[arg(long, conflicts_with = "waitlist")]
    pub cart: bool,

    /// Join the waitlist with this email.
    #[arg(long)]
    pub waitlist: Option<String>,
}
