use clap::Parser;
use directories::ProjectDirs;
use sprout::api::{ConfigAction, GardenApi};
use sprout::config::GardenConfig;
use sprout::error::{Result, SproutError};
use sprout::persistence::KvPersistence;
use sprout::registry::Registry;
use sprout::status::Status;
use sprout::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::args::{Cli, Commands};
use cli::render::{print_config, print_messages, print_plants, EMPTY_GARDEN};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout only carries listings and messages.
fn init_tracing(verbose: bool) {
    let default = if verbose { "sprout=debug" } else { "sprout=warn" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("SPROUT_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

struct AppContext {
    api: GardenApi<KvPersistence<FileStore>>,
    config: GardenConfig,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { name, every }) => handle_add(&mut ctx, name, every),
        Some(Commands::Water { plants }) => handle_water(&mut ctx, plants),
        Some(Commands::Delete { plants }) => handle_delete(&mut ctx, plants),
        Some(Commands::List { status }) => handle_list(&ctx, status.map(Status::from)),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("SPROUT_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "sprout", "sprout")
        .ok_or_else(|| SproutError::Config("Could not determine data directory".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    let config = GardenConfig::load_or_default(&dir);

    let store = FileStore::new(dir.clone());
    let persistence = KvPersistence::with_key(store, config.storage_key.clone());
    let registry = Registry::open(persistence);
    let api = GardenApi::new(registry, dir);

    Ok(AppContext { api, config })
}

fn handle_add(ctx: &mut AppContext, name: Vec<String>, every: Option<i64>) -> Result<()> {
    let name = name.join(" ");
    let frequency = every
        .unwrap_or_else(|| i64::from(ctx.config.default_frequency))
        .max(1);

    let result = ctx.api.create_plant(&name, frequency)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_water(ctx: &mut AppContext, plants: Vec<String>) -> Result<()> {
    let result = ctx.api.water_plants(plants.as_slice())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, plants: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_plants(plants.as_slice())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, status: Option<Status>) -> Result<()> {
    let result = ctx.api.list_plants(status)?;

    if result.listed_plants.is_empty() {
        match status {
            Some(s) if !ctx.api.registry().is_empty() => println!("No {} plants.", s),
            _ => println!("{}", EMPTY_GARDEN),
        }
    } else {
        print_plants(&result.listed_plants);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
