#![forbid(unsafe_code)]

mod cmd;
mod fetch;
mod output;

use clap::{Parser, Subcommand};
use output::{OutputMode, resolve_output_mode};
use ppinet_core::config::load_config;
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ppinet: protein-protein interaction network analysis",
    long_about = None
)]
struct Cli {
    /// Enable debug logging for ppinet (overridden by PPINET_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (default: pretty on a TTY, text when piped).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Config file (default: <config dir>/ppinet/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Fetch and analyze a protein's interaction network",
        long_about = "Retrieve interactions for one protein from BioGRID or STRING, build the \
                      interaction graph, and compute its centrality metrics.",
        after_help = "EXAMPLES:\n    # Query STRING for TP53\n    ppinet query TP53 --db string\n\n    # Keep every interaction and export the graph\n    ppinet query TP53 --db biogrid --all --dot tp53.dot\n\n    # Emit machine-readable output\n    ppinet query TP53 --db string --format json"
    )]
    Query(cmd::query::QueryArgs),

    #[command(
        about = "Analyze a saved interaction payload",
        long_about = "Run the analysis over a BioGRID or STRING JSON payload read from a file or stdin.",
        after_help = "EXAMPLES:\n    # Analyze a saved STRING response\n    ppinet analyze --db string --input tp53.json\n\n    # Read from stdin\n    curl -s \"$URL\" | ppinet analyze --db biogrid"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Show the effective configuration",
        after_help = "EXAMPLES:\n    # Show configuration\n    ppinet config\n\n    # Print the config file location\n    ppinet config --path"
    )]
    Config(cmd::config::ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("PPINET_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "ppinet=debug,info"
        } else {
            "ppinet=info,warn"
        })
    });

    let format = env::var("PPINET_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    debug!(
        preview_limit = config.analysis.preview_limit,
        species = config.string.species,
        "configuration loaded"
    );
    let output = resolve_output_mode(cli.format);

    match &cli.command {
        Commands::Query(args) => cmd::query::run_query(args, &config, output),
        Commands::Analyze(args) => cmd::analyze::run_analyze(args, &config, output),
        Commands::Config(args) => {
            cmd::config::run_config(args, cli.config.as_deref(), &config, output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppinet_core::SourceSchema;

    #[test]
    fn query_parses_with_defaults() {
        let cli = Cli::parse_from(["ppinet", "query", "TP53"]);
        let Commands::Query(args) = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.protein, "TP53");
        assert_eq!(args.db, SourceSchema::BioGrid);
        assert!(args.network.limit.is_none());
        assert!(!args.network.all);
    }

    #[test]
    fn db_flag_accepts_string_aliases() {
        for name in ["string", "STRING", "string-db"] {
            let cli = Cli::parse_from(["ppinet", "query", "TP53", "--db", name]);
            let Commands::Query(args) = cli.command else {
                panic!("expected query");
            };
            assert_eq!(args.db, SourceSchema::StringDb);
        }
    }

    #[test]
    fn unknown_db_is_rejected() {
        assert!(Cli::try_parse_from(["ppinet", "query", "TP53", "--db", "intact"]).is_err());
    }

    #[test]
    fn limit_conflicts_with_all() {
        assert!(
            Cli::try_parse_from(["ppinet", "query", "TP53", "--limit", "5", "--all"]).is_err()
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "ppinet",
            "analyze",
            "--db",
            "string",
            "--format",
            "json",
            "--config",
            "ppinet.toml",
        ]);
        assert_eq!(cli.format, Some(OutputMode::Json));
        assert_eq!(cli.config, Some(PathBuf::from("ppinet.toml")));
        assert!(matches!(cli.command, Commands::Analyze(_)));
    }

    #[test]
    fn analyze_requires_db() {
        assert!(Cli::try_parse_from(["ppinet", "analyze"]).is_err());
    }
}
