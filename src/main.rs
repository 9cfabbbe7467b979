//! Trolley CLI
//!
//! Loads a product catalog and drives a cart widget from a command script,
//! one command per line:
//!
//! - `add <key>` adds one unit of a catalog product
//! - `remove <id>` removes a whole line
//! - `clear` (or `remove-all`) empties the cart
//! - `show` renders the cart

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use trolley::{
    catalog::Catalog,
    commands::Command,
    config::Cli,
    logging::init_subscriber,
    view::CartViewModel,
    widget::CartWidget,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_subscriber(&cli.logging)?;

    let catalog = Catalog::from_path(&cli.catalog)
        .with_context(|| format!("loading catalog {}", cli.catalog.display()))?;

    info!(products = catalog.len(), "catalog ready");

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut widget = CartWidget::attach(catalog.currency());

    for (line_no, line) in input.lines().enumerate() {
        let line = line?;

        if let Err(err) = run_line(&line, &catalog, &mut widget, &mut out) {
            error!(line = line_no + 1, error = %err, "command failed");
        }
    }

    widget.detach();

    Ok(())
}

fn run_line<'a>(
    line: &str,
    catalog: &Catalog<'a>,
    widget: &mut CartWidget<'a>,
    out: &mut impl Write,
) -> Result<()> {
    let Some(command) = Command::parse_line(line)? else {
        return Ok(());
    };

    match command.to_event(catalog)? {
        Some(event) => {
            let view = widget.handle(event)?;
            write_summary(out, &view)?;
        }
        None => widget.render()?.write_to(&mut *out)?,
    }

    Ok(())
}

fn write_summary(out: &mut impl Write, view: &CartViewModel) -> Result<()> {
    let lines = view.lines.len();
    let label = if lines == 1 { "line" } else { "lines" };

    writeln!(out, "{lines} {label}, total {} ({})", view.total, view.state)?;

    Ok(())
}
