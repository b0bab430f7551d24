//! Terminal previewer for marktree documents
use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use marktree_config::{Config, RenderConfig};
use marktree_engine::tokens::{from_json, to_json};
use marktree_engine::{Document, PipelineOptions, ResolveOptions, Token, TokenizeOptions, tokenize};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Read, Stdout};
use std::path::{Path, PathBuf};

mod app;
mod render;

use app::{App, ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DumpFormat {
    /// Debug view of the resolved tree
    Tree,
    /// The resolved tree as JSON
    Json,
    /// The token stream as JSON
    Tokens,
}

#[derive(Parser, Debug)]
#[command(name = "marktree")]
#[command(about = "Resolve markdown into a document tree and preview it in the terminal")]
struct Args {
    /// Markdown file to open (reads stdin when omitted or `-`)
    file: Option<PathBuf>,

    /// Treat the input as a JSON token dump instead of markdown
    #[arg(long)]
    tokens: bool,

    /// Print instead of opening the viewer
    #[arg(long, value_enum)]
    dump: Option<DumpFormat>,

    /// Config file (defaults to ~/.config/marktree/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let options = pipeline_options(&config.render);

    let source = read_source(args.file.as_deref())?;
    let tokens = if args.tokens {
        from_json(&source).context("Failed to decode token dump")?
    } else {
        tokenize(&source, &options.tokenize)
    };
    let document = Document::from_tokens_with(&tokens, &options.resolve);
    log::info!(
        "resolved {} tokens into {} blocks",
        tokens.len(),
        document.blocks.len()
    );

    match args.dump {
        Some(format) => {
            println!("{}", dump(format, &tokens, &document)?);
            Ok(())
        }
        None => view(title_for(args.file.as_deref()), &document),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        log::info!("Config path: {}", Config::config_path().display());
        return Ok(Config::load()?.unwrap_or_default());
    };

    let config_path = Config::expand_path(path);
    log::info!("Config path: {}", config_path.display());
    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None => bail!("Config file '{}' does not exist", config_path.display()),
    }
}

fn pipeline_options(render: &RenderConfig) -> PipelineOptions {
    PipelineOptions {
        tokenize: TokenizeOptions {
            lift_standalone_images: render.lift_standalone_images,
        },
        resolve: ResolveOptions {
            image_placeholder: render.image_placeholder.clone(),
            soft_break: render.soft_breaks,
        },
    }
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

fn title_for(file: Option<&Path>) -> String {
    file.filter(|path| *path != Path::new("-"))
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdin".to_string())
}

fn dump(format: DumpFormat, tokens: &[Token], document: &Document) -> Result<String> {
    Ok(match format {
        DumpFormat::Tree => format!("{:#?}", document.blocks),
        DumpFormat::Json => serde_json::to_string_pretty(document)?,
        DumpFormat::Tokens => to_json(tokens)?,
    })
}

fn view(title: String, document: &Document) -> Result<()> {
    let mut app = App::new(title, render::render_document(document));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && app.handle_key(key)
        {
            return Ok(());
        }
    }
}
