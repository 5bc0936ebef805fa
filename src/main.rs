//! sqlsplit - split multi-statement SQL scripts and classify their result shape.

mod cli;

use cli::Cli;
use db_sqlsplit::config::Config;
use db_sqlsplit::error::{Result, SplitError};
use db_sqlsplit::logging;
use db_sqlsplit::output::ScriptOutput;
use db_sqlsplit::script::{ScriptProcessor, ScriptSummary};
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse_args();

    logging::init_stderr_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Load configuration file
    let config_path = cli.config_path();
    debug!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let format = cli.resolve_format(&config)?;
    let output = ScriptOutput::new(format, cli.resolve_pretty(&config));
    let processor = ScriptProcessor::new(config.build_classifier(&cli.extra_prefixes));

    let script = cli.read_script()?;
    let statements = processor.process(&script);
    info!(
        "Processed {}: {} statements",
        cli.input_label(),
        statements.len()
    );

    let rendered = if cli.summary {
        output.format_summary(&ScriptSummary::from_statements(&statements))?
    } else {
        output.format_statements(&statements)?
    };

    match &cli.output_file {
        Some(path) => std::fs::write(path, rendered).map_err(|e| {
            SplitError::output(format!("Failed to write {}: {e}", path.display()))
        })?,
        None => print!("{rendered}"),
    }

    Ok(())
}
