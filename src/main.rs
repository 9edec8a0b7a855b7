use clap::Parser;
use std::process::ExitCode;

use tracing::debug;

use pathlist::cli::{handle_error, Args, CliConfig, CliUtils};
use pathlist::listing::ListingStatistics;
use pathlist::{logging, render_json, write_output, ListingEngine, ListingResult, OutputTarget};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            handle_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> ListingResult<()> {
    let cli = CliConfig::from_args(args)?;
    debug!(
        input = %cli.input_description(),
        output = %cli.target.description(),
        "Starting listing"
    );

    let engine = ListingEngine::new(cli.listing_config.clone());
    let spinner = CliUtils::create_spinner(cli.is_quiet());

    let result = engine.collect_with_progress(|count| {
        if let Some(pb) = &spinner {
            pb.set_message(format!("{} files", count));
        }
    });
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let mut listing = result?;

    // Nothing is written until the whole tree has been walked
    let content = render_json(&listing.files, &cli.output_config)?;
    let written = write_output(&cli.target, &content)?;
    listing.stats.record_output(written);

    if let OutputTarget::File(path) = &cli.target {
        CliUtils::show_success(
            &format!("Wrote {} paths to: {}", listing.files.len(), path.display()),
            cli.is_quiet(),
        );
    }

    if cli.want_stats() || cli.want_stats_json() {
        output_statistics(&listing.stats, cli.want_stats_json(), cli.is_quiet())?;
    }

    Ok(())
}

fn output_statistics(stats: &ListingStatistics, as_json: bool, quiet: bool) -> ListingResult<()> {
    if as_json {
        eprintln!("{}", stats.to_json()?);
        return Ok(());
    }

    if quiet {
        return Ok(());
    }

    eprintln!("\nListing Statistics:");
    eprintln!("{}", stats.summary());
    Ok(())
}
