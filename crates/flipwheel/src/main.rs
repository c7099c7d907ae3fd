use anyhow::Context;
use carousel::WheelLayout;
use clap::{Parser, Subcommand};
use flipwheel::config;
use flipwheel::content::EntityList;
use flipwheel::events::AppEvent;
use flipwheel::session::Session;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flipwheel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Entity list (.json or .toml), overrides `content` from the config
    #[arg(short = 'c', long, global = true)]
    content: Option<PathBuf>,

    /// Neighbours drawn on each side of the active entry
    #[arg(short = 'r', long, global = true)]
    window_radius: Option<usize>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Draw a single frame.
    Show {
        /// Entity index to select first
        #[arg(short, long)]
        select: Option<usize>,
        /// Show the back of the card
        #[arg(short, long)]
        flip: bool,
    },
    /// Print the placement of every entity as JSON.
    Layout {
        #[arg(short, long, default_value_t = 0)]
        active: usize,
    },
    /// Read commands from stdin and redraw on every change.
    Run,
    /// Write the default config file.
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.clone() {
        Commands::Init => {
            let path =
                config::write_default_config().context("Failed to write default config")?;
            println!("{}", path.display());
        }
        Commands::Show { select, flip } => {
            let (entities, layout) = load(&cli)?;
            let mut session = Session::new(entities.as_slice(), layout);
            if let Some(index) = select {
                session.handle(&AppEvent::Select(index));
            }
            if flip {
                session.handle(&AppEvent::Flip);
            }
            print!("{}", session.frame());
        }
        Commands::Layout { active } => {
            let (entities, layout) = load(&cli)?;
            let placements = layout.project_all(entities.len(), active);
            println!("{}", serde_json::to_string_pretty(&placements)?);
        }
        Commands::Run => {
            let (entities, layout) = load(&cli)?;
            let mut session = Session::new(entities.as_slice(), layout);
            session.run(io::stdin().lock(), io::stdout().lock())?;
        }
    }
    Ok(())
}

fn load(cli: &Cli) -> anyhow::Result<(EntityList, WheelLayout)> {
    let config = match &cli.config {
        Some(path) => config::load_config(Some(path.as_path()))
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::load_or_default(None),
    };

    let mut layout = config.layout;
    if let Some(radius) = cli.window_radius {
        layout = layout.with_window_radius(radius);
    }

    let Some(content_path) = cli.content.clone().or(config.content) else {
        anyhow::bail!("No entity list given; pass --content or set `content` in the config file");
    };
    let entities = EntityList::load(&content_path)
        .with_context(|| format!("Failed to load entities from {}", content_path.display()))?;

    Ok((entities, layout))
}
