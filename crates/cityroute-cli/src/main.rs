mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cityroute_cli::args::{parse_location_list, parse_segment_list};
use cityroute_cli::output::OutputFormat;
use cityroute_lib::{LocationId, Segment};

use commands::batch::{handle_batch_command, BatchCommandArgs, DEFAULT_OUTPUT};
use commands::eco::{handle_eco_command, EcoCommandArgs};
use commands::restricted::{handle_restricted_command, RestrictedCommandArgs};
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "City route planning: driving, restricted and park-and-walk routes")]
struct Cli {
    /// Directory containing Locations.csv and Distances.csv.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format for reports.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fastest driving route and an alternative sharing only the endpoints.
    Route {
        /// Source location id.
        #[arg(long = "from")]
        from: LocationId,
        /// Destination location id.
        #[arg(long = "to")]
        to: LocationId,
        /// Only compute the fastest route.
        #[arg(long)]
        no_alternative: bool,
    },
    /// Fastest driving route avoiding locations and segments.
    Restricted {
        /// Source location id.
        #[arg(long = "from")]
        from: LocationId,
        /// Destination location id.
        #[arg(long = "to")]
        to: LocationId,
        /// Comma separated location ids to avoid, e.g. `2,5`.
        #[arg(long, value_parser = parse_location_list, default_value = "")]
        avoid_nodes: ::std::vec::Vec<LocationId>,
        /// Directed segments to avoid, e.g. `(1,2),(3,4)`.
        #[arg(long, value_parser = parse_segment_list, default_value = "")]
        avoid_segments: ::std::vec::Vec<Segment>,
        /// Location the route must pass through.
        #[arg(long)]
        include: Option<LocationId>,
    },
    /// Drive to a parking location, then walk to the destination.
    Eco {
        /// Source location id.
        #[arg(long = "from")]
        from: LocationId,
        /// Destination location id.
        #[arg(long = "to")]
        to: LocationId,
        /// Longest acceptable walk, in minutes.
        #[arg(long)]
        max_walk: f64,
        /// Comma separated location ids to avoid.
        #[arg(long, value_parser = parse_location_list, default_value = "")]
        avoid_nodes: ::std::vec::Vec<LocationId>,
        /// Directed segments to avoid.
        #[arg(long, value_parser = parse_segment_list, default_value = "")]
        avoid_segments: ::std::vec::Vec<Segment>,
    },
    /// Answer a `Label:value` query file and write the result to a file.
    Batch {
        /// Query file to read.
        input: PathBuf,
        /// Answer file to write.
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Command::Route {
            from,
            to,
            no_alternative,
        } => handle_route_command(
            data_dir,
            cli.format,
            &RouteCommandArgs {
                from,
                to,
                no_alternative,
            },
        ),
        Command::Restricted {
            from,
            to,
            avoid_nodes,
            avoid_segments,
            include,
        } => handle_restricted_command(
            data_dir,
            cli.format,
            &RestrictedCommandArgs {
                from,
                to,
                avoid_nodes,
                avoid_segments,
                include,
            },
        ),
        Command::Eco {
            from,
            to,
            max_walk,
            avoid_nodes,
            avoid_segments,
        } => handle_eco_command(
            data_dir,
            cli.format,
            &EcoCommandArgs {
                from,
                to,
                max_walk,
                avoid_nodes,
                avoid_segments,
            },
        ),
        Command::Batch { input, output } => {
            handle_batch_command(data_dir, cli.format, &BatchCommandArgs { input, output })
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
