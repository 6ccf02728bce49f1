use std::env;
use std::io;

use log::debug;

use crate::app::{rename_file, RenameOutcome, Renamer};
use crate::catalog::Catalog;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Context, Result};
use crate::select::FzfSelector;
use crate::ui::{stdout_is_interactive, write_listing, StdConsole};

/// Entry point used by `main` once arguments are parsed.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_env();

    if !stdout_is_interactive() {
        debug!("stdout is not a terminal; listing catalog");
        let catalog = Catalog::load(&config)?;
        return write_listing(io::stdout().lock(), &catalog.render_lines());
    }

    let Some(path) = cli.file.as_deref() else {
        Cli::print_usage()?;
        return Ok(());
    };

    let catalog = Catalog::load(&config)?;
    let working_dir = env::current_dir().context("failed to resolve working directory")?;
    let renamer = Renamer::new(working_dir).force(cli.force_confirm);
    let mut console = StdConsole::stdio();

    match rename_file(
        &config,
        &catalog,
        FzfSelector::new(),
        &mut console,
        &renamer,
        path,
    )? {
        RenameOutcome::Renamed { to, .. } => debug!("done: {}", to.display()),
        RenameOutcome::Declined => debug!("done: nothing renamed"),
    }
    Ok(())
}
