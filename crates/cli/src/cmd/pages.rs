use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use storefront_listing::ListingPage;

use crate::args::Cli;
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct PageInfo {
    pub slug: String,
    pub title: String,
    pub products: usize,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PagesOut {
    pub pages: Vec<PageInfo>,
}

impl PagesOut {
    fn builtin() -> Self {
        let pages = ListingPage::builtin()
            .into_iter()
            .map(|page| PageInfo {
                products: page.products.len(),
                slug: page.slug,
                title: page.title,
                categories: page.categories,
            })
            .collect();
        Self { pages }
    }
}

impl Render for PagesOut {
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
        for page in &self.pages {
            writeln!(out, "{:<14} {:<20} {:>2} products", page.slug, page.title, page.products)?;
        }
        Ok(())
    }
}

pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    output::print(cli.json, &PagesOut::builtin(), out)
}
