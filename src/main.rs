use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use huebox::api;
use huebox::models::AppConfig;
use huebox::server;

#[derive(Parser)]
#[command(name = "huebox")]
#[command(about = "Color palette session service with harmony-rule generation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Generate a palette and print it (no server needed)
    Generate {
        /// Harmony mode: analogous, complementary, triadic or random
        #[arg(short, long, default_value = "analogous")]
        mode: String,

        /// Base color as "#RRGGBB"; random when omitted
        #[arg(short, long)]
        base: Option<String>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Huebox API",
        description = "Color palette session service with harmony-rule generation",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_create_session,
        api::handle_get_session,
        api::handle_delete_session,
        api::handle_generate,
        api::handle_lock,
        api::handle_reorder,
        api::handle_save_palette,
        api::handle_delete_palette,
        api::handle_export,
    ),
    components(schemas(
        api::CreateSessionRequest,
        api::SessionResponse,
        api::DeleteSessionResponse,
        api::GenerateRequest,
        api::LockRequest,
        api::ReorderRequest,
        api::SavedPaletteResponse,
        api::DeletePaletteResponse,
    )),
    tags(
        (name = "Session", description = "Session lifecycle"),
        (name = "Palette", description = "Working palette generation and editing"),
        (name = "Collection", description = "Saved palettes")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { mode, base }) => run_generate_command(&mode, base.as_deref()),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Generate a palette and print the five hex codes (no server needed)
fn run_generate_command(mode: &str, base: Option<&str>) -> anyhow::Result<()> {
    use color_harmony::{HarmonyMode, Rgb};

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huebox=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mode = HarmonyMode::parse(mode);
    let mut rng = rand::thread_rng();

    let base = match base {
        Some(raw) => raw
            .parse::<Rgb>()
            .map_err(|e| anyhow::anyhow!("Invalid base color {raw:?}: {e}"))?,
        None => Rgb::random(&mut rng),
    };

    let colors = mode.derive(base, &mut rng);

    println!("{mode} palette from {base}:");
    for color in colors {
        println!("  {color}");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Huebox v{VERSION}");
    println!("Color palette session service\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Config source section
    let config_source = if let Some(ref path) = config_file {
        if PathBuf::from(path).exists() {
            path.to_string()
        } else {
            "defaults (file not found)".to_string()
        }
    } else {
        "defaults".to_string()
    };
    println!("\nConfig: {config_source}");

    let config = AppConfig::load(config_file.as_deref().map(std::path::Path::new));
    println!("  default_mode = {}", config.default_mode());

    // Commands section
    println!("\nCommands:");
    println!("  huebox serve       Start the HTTP server");
    println!("  huebox generate    Generate a palette and print it");
    println!("\nRun 'huebox --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huebox=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!(
        config = %config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string()),
        "Configuration source"
    );

    let config = AppConfig::load(config_file.as_deref());
    let state = server::create_app_state(config);

    // Build router: shared API routes plus OpenAPI documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Huebox server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
