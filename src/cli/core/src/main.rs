/* src/cli/core/src/main.rs */

mod config;
mod export;
mod logging;
mod serve;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quire_server::{DraftContext, PageService, QuireServer};

use config::{QuireConfig, find_quire_config, load_quire_config};

#[derive(Parser)]
#[command(name = "quire", about = "Quire CMS page server", version)]
struct Cli {
  /// Path to quire.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  /// Log at debug level (RUST_LOG takes precedence)
  #[arg(short, long, global = true)]
  verbose: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve pages over HTTP
  Serve {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    host: Option<String>,
    /// Port to bind (overrides server.port and PORT)
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// List the slugs of all published pages
  Paths {
    /// Print a JSON array instead of one slug per line
    #[arg(long)]
    json: bool,
  },
  /// Print the head metadata of a page as JSON
  Meta {
    /// Page slug (defaults to home)
    slug: Option<String>,
    #[command(flatten)]
    draft: DraftArgs,
  },
  /// Render a page to HTML
  Render {
    /// Page slug (defaults to home)
    slug: Option<String>,
    #[command(flatten)]
    draft: DraftArgs,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Render every page to a static site
  Export {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    out: PathBuf,
  },
}

#[derive(clap::Args)]
struct DraftArgs {
  /// Include unpublished drafts
  #[arg(long)]
  draft: bool,
  /// CMS token sent with draft requests
  #[arg(long, requires = "draft")]
  token: Option<String>,
}

impl DraftArgs {
  fn context(&self) -> DraftContext {
    if self.draft { DraftContext::enabled(self.token.clone()) } else { DraftContext::disabled() }
  }
}

/// Explicit path must exist; otherwise search upward and fall back to
/// defaults when nothing is found.
fn resolve_config(explicit: Option<PathBuf>) -> Result<QuireConfig> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      match find_quire_config(&cwd) {
        Ok(p) => p,
        Err(_) => {
          tracing::debug!("no quire.toml found, using defaults");
          let config = QuireConfig::default();
          config.validate()?;
          return Ok(config);
        }
      }
    }
  };
  tracing::debug!(path = %path.display(), "loading config");
  load_quire_config(&path)
}

fn build_server(config: &QuireConfig) -> Result<QuireServer> {
  QuireServer::new()
    .site(config.site.clone())
    .cms(&config.cms)
    .context("failed to set up the content source")
}

fn page_service(config: &QuireConfig) -> Result<std::sync::Arc<PageService>> {
  Ok(build_server(config)?.into_parts().pages)
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  logging::init(cli.verbose);

  let mut config = resolve_config(cli.config)?;
  config.apply_port_env(std::env::var("PORT").ok().as_deref())?;

  match cli.command {
    Command::Serve { host, port } => {
      if let Some(host) = host {
        config.server.host = host;
      }
      if let Some(port) = port {
        config.server.port = port;
      }
      ui::banner("serve");
      serve::run_serve(build_server(&config)?, &config).await?;
    }
    Command::Paths { json } => {
      let paths = page_service(&config)?.static_params().await;
      if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
      } else {
        for path in &paths {
          println!("{path}");
        }
      }
    }
    Command::Meta { slug, draft } => {
      let meta = page_service(&config)?.metadata(slug.as_deref(), &draft.context()).await;
      println!("{}", serde_json::to_string_pretty(&meta)?);
    }
    Command::Render { slug, draft, out } => {
      let page = page_service(&config)?.render(slug.as_deref(), &draft.context()).await?;
      match out {
        Some(out) => {
          std::fs::write(&out, &page.html)
            .with_context(|| format!("failed to write {}", out.display()))?;
          let size = ui::format_size(page.html.len() as u64);
          ui::ok(&format!("{} ({:?} layout)  {size}", out.display(), page.layout));
        }
        None => println!("{}", page.html),
      }
    }
    Command::Export { out } => {
      ui::banner("export");
      let pages = page_service(&config)?;
      let summary = export::export_site(&pages, &out).await?;
      for (path, size) in &summary.written {
        ui::detail(&format!("{}  {}", path.display(), ui::format_size(*size)));
      }
      let public_dir = config.site.public_dir.as_deref().map(std::path::Path::new);
      if let Some(public_dir) = public_dir.filter(|d| d.is_dir()) {
        let copied = export::copy_dir(public_dir, &out.join("static"))?;
        ui::arrow(&format!("copied {copied} static files"));
      }
      for slug in &summary.skipped {
        ui::warn(&format!("skipped {slug}"));
      }
      ui::ok(&format!(
        "exported {} files ({}) to {}",
        summary.written.len(),
        ui::format_size(summary.total_bytes()),
        out.display()
      ));
    }
  }
  Ok(())
}
