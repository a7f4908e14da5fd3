use std::error::Error;
use std::net::SocketAddr;
use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use route_server::config::{
    DEFAULT_ADDR, DEFAULT_LOG_FILTER, DEFAULT_MAX_DISTANCE, DEFAULT_MAX_STOPS, EdgeListSource,
    ServerConfig,
};
use route_server::demo;
use route_server::planner::RoutePlanner;
use route_server::web::{AppState, create_router};

/// Route queries over a network of terminals.
///
/// INPUT is an edge list such as "AB5, BC4, CD8", or the path of a file
/// holding one.
#[derive(Debug, Parser)]
#[command(name = "route-server", version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    demo: DemoArgs,
}

#[derive(Debug, Args)]
struct DemoArgs {
    /// Edge list, or a file containing one
    input: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve route queries over HTTP
    Serve {
        /// Edge list, or a file containing one
        input: String,

        /// Address to listen on
        #[arg(long, env = "ROUTE_SERVER_ADDR", default_value = DEFAULT_ADDR)]
        addr: SocketAddr,

        /// Largest stop bound a route listing may ask for
        #[arg(long, env = "ROUTE_SERVER_MAX_STOPS", default_value_t = DEFAULT_MAX_STOPS)]
        max_stops: u64,

        /// Largest distance bound a route listing may ask for
        #[arg(long, env = "ROUTE_SERVER_MAX_DISTANCE", default_value_t = DEFAULT_MAX_DISTANCE)]
        max_distance: u64,
    },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_planner(input: &str) -> Result<RoutePlanner, Box<dyn Error>> {
    let text = EdgeListSource::detect(input).read()?;
    Ok(RoutePlanner::from_edge_list(&text)?)
}

async fn serve(planner: RoutePlanner, config: ServerConfig) -> Result<(), Box<dyn Error>> {
    let graph = planner.graph();
    info!(
        terminals = graph.node_count(),
        edges = graph.edge_count(),
        "Loaded route network"
    );

    info!(
        max_stops = config.max_stops,
        max_distance = config.max_distance,
        "Route listing limits"
    );

    let addr = config.addr;
    let app = create_router(AppState::new(planner, config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Route planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  GET  /network         - Terminals and connections");
    println!("  GET  /route/distance  - Distance of an exact route (?stops=A,B,C)");
    println!("  GET  /route/shortest  - Shortest route (?start=A&end=C)");
    println!("  GET  /routes          - Routes under a stop or distance limit");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("Failed to listen for shutdown signal: {e}");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Some(Command::Serve {
            input,
            addr,
            max_stops,
            max_distance,
        }) => match load_planner(&input) {
            Ok(planner) => {
                let config = ServerConfig::new(addr).with_limits(max_stops, max_distance);
                serve(planner, config).await
            }
            Err(e) => Err(e),
        },
        None => {
            let Some(input) = cli.demo.input else {
                Cli::command()
                    .error(ErrorKind::MissingRequiredArgument, "INPUT is required")
                    .exit();
            };
            load_planner(&input).map(|planner| print!("{}", demo::run(&planner)))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
