use clap::{Parser, Subcommand};
use doc_facets::index::{self, Source};
use doc_facets::session::{MemoryLocation, Session};
use doc_facets::view::View;
use doc_facets::{config, logging, output, render};
use std::path::PathBuf;

/// The fragment a command starts from.
#[derive(clap::Args, Clone)]
struct FragmentArgs {
    /// URL fragment holding the current filters, e.g. "version=2.1&module=Core"
    #[arg(long, default_value = "")]
    fragment: String,
}

#[derive(Parser)]
#[command(name = "doc-facets")]
#[command(version)]
#[command(about = "Version, module and tag filtering for documentation indexes")]
#[command(long_about = "\
Version, module and tag filtering for documentation indexes

The source directory holds the generated document list and an optional
config.toml:

  docs/
  ├── documents.json     # { \"latest\": \"2.1\", \"documents\": [ ... ] }
  └── config.toml        # Site title, labels, colors (optional)

Each document has a version, module, title, path and optional tags.
Filters travel in the URL fragment (version=..&module=..&tag=..); a value
the index doesn't offer for the active version resets all filters.

Run 'doc-facets gen-config' to generate a documented config.toml.")]
struct Cli {
    /// Directory holding documents.json and config.toml
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the index and list versions, modules and tags
    Check,
    /// Settle the filters in a fragment and render the listing
    Render {
        #[command(flatten)]
        fragment: FragmentArgs,
        /// Write the HTML page here instead of printing it
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the view model as JSON
        #[arg(long, conflicts_with = "output")]
        json: bool,
    },
    /// Pick a version; module and tag selections are dropped
    SelectVersion {
        version: String,
        #[command(flatten)]
        fragment: FragmentArgs,
    },
    /// Check (or with --off, uncheck) a module
    ToggleModule {
        module: String,
        #[arg(long)]
        off: bool,
        #[command(flatten)]
        fragment: FragmentArgs,
    },
    /// Check (or with --off, uncheck) a tag
    ToggleTag {
        tag: String,
        #[arg(long)]
        off: bool,
        #[command(flatten)]
        fragment: FragmentArgs,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Command::Check => {
            let source = index::load_source(&cli.source)?;
            output::print_check_output(&source.catalog);
            println!("==> Index is valid");
        }
        Command::Render {
            fragment,
            output: target,
            json,
        } => {
            let Source { catalog, config } = index::load_source(&cli.source)?;
            let mut location = MemoryLocation::at(&fragment.fragment);
            let view = Session::new(catalog).settle(&mut location);

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else if let Some(path) = target {
                render::write_page(&view, &config, &path)?;
                output::print_render_output(&view, &location.fragment, &location.writes);
                println!("==> Wrote {}", path.display());
            } else {
                println!("{}", render::render_page(&view, &config).into_string());
            }
        }
        Command::SelectVersion { version, fragment } => {
            run_transition(&cli.source, &fragment, |session, location| {
                session.select_version(&version, location)
            })?;
        }
        Command::ToggleModule {
            module,
            off,
            fragment,
        } => {
            run_transition(&cli.source, &fragment, |session, location| {
                session.toggle_module(&module, !off, location)
            })?;
        }
        Command::ToggleTag { tag, off, fragment } => {
            run_transition(&cli.source, &fragment, |session, location| {
                session.toggle_tag(&tag, !off, location)
            })?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Settle at the given fragment, apply one control change, report the result.
///
/// A bad starting fragment is settled first, so the change always applies to
/// a valid state and only resets caused by the change are reported.
fn run_transition(
    source: &std::path::Path,
    fragment: &FragmentArgs,
    change: impl FnOnce(&mut Session, &mut MemoryLocation) -> View,
) -> Result<(), Box<dyn std::error::Error>> {
    let Source { catalog, .. } = index::load_source(source)?;
    let mut session = Session::new(catalog);
    let mut location = MemoryLocation::at(&fragment.fragment);
    session.settle(&mut location);

    location.writes.clear();
    let view = change(&mut session, &mut location);
    // The first write is the change itself; anything after it is a reset.
    let resets = location.writes.get(1..).unwrap_or_default();
    output::print_render_output(&view, &location.fragment, resets);
    Ok(())
}
