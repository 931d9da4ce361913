use std::io::{self, Write};

use serde::Serialize;

/// A command result that can be printed either as JSON or as text.
pub trait Render: Serialize {
    fn render_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub fn print<T: Render>(json: bool, value: &T, out: &mut dyn Write) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
    } else {
        value.render_text(out)?;
    }
    out.flush()?;
    Ok(())
}
