//! CLI entry point for hi-there

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hi-there")]
#[command(version)]
#[command(about = "Query a manifest-driven Markdown blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories, posts or routes
    #[command(alias = "ls")]
    List {
        /// Type of content (category, post, route)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Print the sorted post index as JSON
    Index {
        /// Only index one category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Resolve a post and print it as JSON
    Show { category: String, slug: String },

    /// Print page head metadata as JSON
    Meta {
        category: String,
        slug: Option<String>,
    },

    /// Check the manifest against the content tree
    Check,

    /// Display version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type, category } => {
            let blog = hithere::Blog::new(&base_dir)?;
            hithere::commands::list::run(&blog, &r#type, category.as_deref())?;
        }

        Commands::Index { category } => {
            let blog = hithere::Blog::new(&base_dir)?;
            hithere::commands::list::index_json(&blog, category.as_deref())?;
        }

        Commands::Show { category, slug } => {
            let blog = hithere::Blog::new(&base_dir)?;
            hithere::commands::show::run(&blog, &category, &slug)?;
        }

        Commands::Meta { category, slug } => {
            let blog = hithere::Blog::new(&base_dir)?;
            hithere::commands::show::meta(&blog, &category, slug.as_deref())?;
        }

        Commands::Check => {
            let blog = hithere::Blog::new(&base_dir)?;
            tracing::info!("Checking {:?}", blog.content_dir());
            if !hithere::commands::check::run(&blog)? {
                std::process::exit(1);
            }
        }

        Commands::Version => {
            println!("hi-there version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
