//! Blender Agent - Entry Point
//!
//! Reads requests from the terminal, has an OpenAI-compatible model turn
//! each one into a typed action, and drives Blender to carry it out.

mod agent;
mod llm;
mod prompts;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use blender_bridge_core::{BlenderClient, BlenderConfig, NameRegistry, Session};
use clap::Parser;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use agent::{Agent, TurnOutcome};
use llm::{parse_user_request, LlmConfig, OpenAiClient};
use ui::Console;

#[derive(Parser, Debug)]
#[command(name = "blender_agent")]
#[command(about = "Build and edit a Blender scene with natural-language requests")]
struct Args {
    /// Blender executable (overrides BLENDER_PATH)
    #[arg(long)]
    blender_path: Option<PathBuf>,

    /// Directory for session scene and render files (overrides BLENDER_OUTPUT_DIR)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Chat model name (overrides OPENAI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// OpenAI-compatible API base URL (overrides OPENAI_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Keep the object registry in this JSON file between runs
    #[arg(long)]
    registry_file: Option<PathBuf>,

    /// Continue an earlier session instead of starting a new one
    #[arg(long)]
    session_id: Option<i64>,

    /// Debug logging
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

const DEFAULT_LOG_FILTER: &str = "blender_agent=info,blender_bridge_core=info";
const VERBOSE_LOG_FILTER: &str = "blender_agent=debug,blender_bridge_core=debug";

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();
    init_tracing(args.verbose);

    let mut console = Console::stdio();

    let mut llm_config = LlmConfig::from_env();
    if let Some(model) = args.model {
        llm_config.model = model;
    }
    if let Some(base_url) = args.base_url {
        llm_config.base_url = base_url;
    }
    if !llm_config.has_api_key() {
        console.say("OpenAI API key not found in environment")?;
        let key = console.prompt("Enter OpenAI API key: ")?.unwrap_or_default();
        if key.is_empty() {
            console.say("API key required")?;
            return Ok(());
        }
        llm_config.api_key = key;
    }

    let mut blender_config = BlenderConfig::from_env();
    if let Some(path) = args.blender_path {
        blender_config.blender_path = path;
    }
    if let Some(dir) = args.output_dir {
        blender_config.output_dir = dir;
    }
    std::fs::create_dir_all(&blender_config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            blender_config.output_dir.display()
        )
    })?;

    let session = match args.session_id {
        Some(id) => Session::with_id(id, &blender_config.output_dir),
        None => Session::start(&blender_config),
    };
    console.say(format!("Session ID: {}", session.id()))?;
    console.say(format!("Scene file: {}", session.scene_file().display()))?;
    console.say(format!("Render file: {}", session.render_file().display()))?;

    let registry = args
        .registry_file
        .as_ref()
        .map(NameRegistry::load)
        .unwrap_or_default();

    let llm = OpenAiClient::new(llm_config).context("Failed to build HTTP client")?;
    let rt = Runtime::new().context("Failed to start async runtime")?;
    let mut agent = Agent::new(
        BlenderClient::new(blender_config, session),
        registry,
        args.registry_file,
    );

    tracing::info!("Blender agent ready (model {})", llm.model());
    console.say(prompts::BANNER)?;

    loop {
        let Some(input) = console.prompt("\n> ")? else {
            break;
        };

        if matches!(input.to_lowercase().as_str(), "quit" | "exit" | "q") {
            console.say("Goodbye!")?;
            break;
        }
        if input.is_empty() {
            continue;
        }

        console.say("Parsing your request...")?;
        let action = match rt.block_on(parse_user_request(&llm, &input, agent.registry())) {
            Ok(action) => action,
            Err(e) => {
                tracing::error!("Error parsing request: {}", e);
                console.say("Failed to parse your request. Try being more specific.")?;
                continue;
            }
        };

        if let TurnOutcome::Failed(reason) = agent.handle(action, &input, &mut console)? {
            tracing::warn!("Turn failed: {}", reason);
        }
    }

    Ok(())
}
