use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campus_route_cli::output::{render_menu, OutputFormat};
use campus_route_cli::session::{Session, SessionOptions};
use campus_route_lib::{
    default_map_path, load_campus_map, plan_route, CampusMap, Error as RouteError, RouteRequest,
    RouteSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest walking routes across a campus map")]
struct Cli {
    /// Campus map description to load. Defaults to the platform data directory.
    #[arg(long, env = "CAMPUS_ROUTE_MAP")]
    map: Option<PathBuf>,

    /// Output format for routes.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two location names.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
    },
    /// List every location with its vertex id.
    Locations,
    /// Prompt for locations repeatedly, suggesting matches for unknown names.
    Interactive {
        /// Stop after this many searches.
        #[arg(long)]
        max_searches: Option<usize>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let map_path = match cli.map.clone() {
        Some(path) => path,
        None => default_map_path().context("failed to resolve the default campus map path")?,
    };
    let mut map = load_map(&map_path)?;

    match cli.command {
        Some(Command::Route { from, to }) => handle_route(&mut map, cli.format, &from, &to),
        Some(Command::Locations) => render_menu(&map.directory, &mut io::stdout().lock()),
        Some(Command::Interactive { max_searches }) => {
            handle_interactive(&mut map, cli.format, max_searches)
        }
        None => handle_interactive(&mut map, cli.format, None),
    }
}

fn load_map(path: &Path) -> Result<CampusMap> {
    load_campus_map(path)
        .with_context(|| format!("failed to load campus map from {}", path.display()))
}

fn handle_route(
    map: &mut CampusMap,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let request = RouteRequest::new(from, to);
    let plan = plan_route(map, &request).map_err(handle_route_failure)?;
    let summary = RouteSummary::from_plan(map, &plan)
        .context("failed to build route summary for display")?;

    let mut stdout = io::stdout().lock();
    format.render_route(&summary, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn handle_interactive(
    map: &mut CampusMap,
    format: OutputFormat,
    max_searches: Option<usize>,
) -> Result<()> {
    let options = SessionOptions {
        max_searches,
        format,
    };
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Session::new(map, stdin, stdout, options).run()?;
    Ok(())
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownLocation { name, suggestion } => {
            anyhow::anyhow!(format_unknown_location_message(&name, suggestion.as_deref()))
        }
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!("No route found between {} and {}.", start, goal)
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_location_message(name: &str, suggestion: Option<&str>) -> String {
    let mut message = format!("Unknown location '{}'.", name);
    if let Some(suggestion) = suggestion {
        message.push_str(&format!(" Did you mean '{suggestion}'?"));
    }
    message
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
