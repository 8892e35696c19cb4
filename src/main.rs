use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use conduit::config::AppSettings;
use conduit::core::types::{ChatMessage, ChatRequest};
use conduit::{ModelCatalog, ModelResolver, ModelServiceParams, ServiceRegistry};

#[derive(Parser, Debug)]
#[command(name = "conduit")]
#[command(author, version, about = "Resolve model configurations and talk to the result", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a configuration file and send a single prompt
    Chat {
        /// JSON file holding a model service configuration
        #[arg(short, long)]
        params: PathBuf,

        /// The user message to send
        prompt: String,
    },
    /// List registered model service types
    Services,
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigSubcommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigSubcommands {
    Init,
    Where,
}

#[tokio::main]
async fn main() {
    let _log_guard = conduit::logging::init();
    let cli = Cli::parse();

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Chat { params, prompt } => {
            let content = std::fs::read_to_string(&params)?;
            let params: ModelServiceParams = serde_json::from_str(&content)?;

            let resolver = build_resolver();
            let model = resolver.resolve(&params).await?;

            let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);
            let response = model.complete(request).await?;
            println!("{}", response.text());
        }
        Commands::Services => {
            let resolver = build_resolver();
            for service_type in resolver.registry().service_types() {
                println!("{service_type}");
            }
        }
        Commands::Config { command } => match command {
            ConfigSubcommands::Init => match AppSettings::init_default() {
                Ok(path) => println!("Created config at {}", path.display()),
                Err(e) => return Err(e.into()),
            },
            ConfigSubcommands::Where => {
                if let Some(path) = AppSettings::config_path() {
                    println!("{}", path.display());
                } else {
                    println!("Could not determine config directory");
                }
            }
        },
    }

    Ok(())
}

fn build_resolver() -> ModelResolver {
    let settings = Arc::new(AppSettings::load());
    let catalog = Arc::new(ModelCatalog::load());
    ModelResolver::new(ServiceRegistry::builtin(settings, catalog))
}
