use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use storefront_catalog::{Catalog, SortKey};
use storefront_core::SessionId;
use storefront_listing::{Listing, ListingPage, RecordingIntents, StorefrontConfig, StorefrontContext};

use crate::args::{Cli, Command, GridArgs};

mod list;
mod pages;
mod show;

pub fn dispatch(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Pages => pages::run(&cli, &mut out),
        Command::List { page, grid } => list::run(&cli, page, grid, &mut out),
        Command::Show {
            page,
            index,
            grid,
            actions,
        } => show::run(&cli, page, *index, grid, actions, &mut out),
    }
}

/// Session context from `--base-url`, falling back to the environment.
fn context(cli: &Cli) -> Result<StorefrontContext> {
    let config = match &cli.base_url {
        Some(base_url) => StorefrontConfig {
            base_url: base_url.clone(),
        },
        None => StorefrontConfig::from_env().context("reading storefront configuration")?,
    };
    StorefrontContext::new(SessionId::new(), &config).context("invalid base URL")
}

fn load_page(slug: &str, dataset: Option<&Path>) -> Result<ListingPage> {
    let page = ListingPage::find(slug)
        .with_context(|| format!("unknown page {slug:?}; run `storefront pages` for the list"))?;
    let Some(path) = dataset else {
        return Ok(page);
    };

    let document =
        fs::read_to_string(path).with_context(|| format!("reading dataset {}", path.display()))?;
    let catalog =
        Catalog::from_json(&document).with_context(|| format!("loading dataset {}", path.display()))?;
    tracing::info!(page = slug, products = catalog.len(), dataset = %path.display(), "using custom dataset");
    Ok(page.with_products(catalog.into_products()))
}

fn open_listing(
    cli: &Cli,
    slug: &str,
    grid: &GridArgs,
    session_id: SessionId,
) -> Result<Listing<RecordingIntents>> {
    let page = load_page(slug, cli.dataset.as_deref())?;
    let mut listing = Listing::with_session(page, session_id, RecordingIntents::new());

    if let Some(category) = &grid.category {
        if !listing.page().offers_category(category) {
            tracing::warn!(page = slug, category = %category, "category is not one of the page's chips");
        }
        listing.select_category(category)?;
    }
    if let Some(sort) = &grid.sort {
        let key: SortKey = sort.parse().context("--sort")?;
        listing
            .select_sort(key)
            .with_context(|| format!("--sort {sort}"))?;
    }
    Ok(listing)
}
