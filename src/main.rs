use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forge::cli::{project, read};
use forge::config::Config;
use forge::store::ProjectStore;

#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Project scaffolding and metadata tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "forge.yaml")]
    config: String,

    /// Projects root, overriding the config file
    #[arg(short, long)]
    root: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project
    Create {
        /// Project id (lowercase letters, numbers, hyphens)
        id: String,
        /// Display name
        name: String,
        /// Short description, seeded into the summary and index
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List projects, most recent first
    List,

    /// Open a project (updates its last opened time)
    Open {
        /// Project id
        id: String,
    },

    /// Show project metadata without opening it
    Show {
        /// Project id
        id: String,
    },

    /// Read a project's conversation
    Read {
        /// Project id
        id: String,
    },

    /// Report required files missing from a project
    Check {
        /// Project id
        id: String,
    },

    /// Print the effective configuration
    Config,
}

/// Log to stderr so stdout only carries command output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "forge=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::load(&cli.config)?;
    if let Some(root) = cli.root {
        config.projects.root = root;
    }

    let store = ProjectStore::from_config(&config);

    match cli.command {
        Commands::Create {
            id,
            name,
            description,
        } => {
            project::create(&store, id, name, description)?;
        }
        Commands::List => {
            project::list(&store)?;
        }
        Commands::Open { id } => {
            project::open(&store, id)?;
        }
        Commands::Show { id } => {
            project::show(&store, id)?;
        }
        Commands::Read { id } => {
            read::run(&store, &id)?;
        }
        Commands::Check { id } => {
            project::check(&store, id)?;
        }
        Commands::Config => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
    }

    Ok(())
}
