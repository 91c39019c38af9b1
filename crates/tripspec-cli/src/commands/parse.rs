//! Parse command - turn one travel request into a trip spec.

use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use tripspec_core::TripParser;

use super::{FormatArg, build_parser, load_config, render, write_output};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Request text (read from stdin when omitted)
    text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Date treated as today for year-less dates (YYYY-MM-DD)
    #[arg(long)]
    reference_date: Option<String>,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let parser = build_parser(&config, args.reference_date.as_deref())?;

    let text = match args.text {
        Some(text) => text,
        None => read_stdin()?,
    };

    info!("Parsing request of {} characters", text.len());

    let response = parser.parse_response(&text);

    let format = args.format.map(Into::into).unwrap_or(config.output.format);
    let output = render(&response, format, args.pretty || config.output.pretty)?;

    if let Some(output_path) = &args.output {
        write_output(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn read_stdin() -> anyhow::Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("No request text given. Pass it as an argument or pipe it on stdin.");
    }

    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(text)
}
