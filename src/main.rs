use clap::{Parser, Subcommand};
use film_epk::project::Project;
use film_epk::{assets, batch, config, generate, output, template};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("EPK_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("EPK_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "film-epk")]
#[command(about = "Build a self-contained Electronic Press Kit for a film")]
#[command(long_about = "\
Build a self-contained Electronic Press Kit for a film

A project directory holds the film record and its images:

  my-film/
  ├── film_config.json             # Film record (run 'film-epk template')
  ├── epk.toml                     # Engine settings (optional)
  ├── assets/images/posters/       # First image by name is the poster
  ├── assets/images/stills/        # Production stills, gallery order by name
  ├── assets/images/cast/          # Team photos, matched to members by name
  ├── assets/images/crew/
  └── output/html/                 # Generated press kits

The press kit is one HTML file with its stylesheet and every image embedded,
ready to email, open offline, or print to PDF from a browser.

Run 'film-epk gen-config' to generate a documented epk.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project directory
    #[arg(long, default_value = ".", global = true)]
    project: PathBuf,

    /// Film record, relative to the project directory
    #[arg(long, default_value = template::FILM_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Log engine diagnostics to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the project folder layout
    Init {
        /// Also write a starter film_config.json
        #[arg(long)]
        template: bool,
    },
    /// Print a starter film_config.json with every field filled in
    Template,
    /// Validate the film record and images without generating
    Check,
    /// Validate, then write the press kit
    Generate {
        /// Output file (default: output/html/<title>_epk.html in the project)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate press kits for every project under ROOT
    Batch {
        /// Directory whose subdirectories are film projects
        root: PathBuf,
    },
    /// Print a stock epk.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Init {
            template: with_template,
        } => {
            assets::setup_project(&cli.project)?;
            println!("==> Project folders ready in {}", cli.project.display());
            for folder in assets::PROJECT_FOLDERS {
                println!("    {}", folder);
            }
            if with_template {
                match template::write_template(&cli.project)? {
                    Some(path) => println!("==> Wrote {}", path.display()),
                    None => println!("==> Kept existing {}", template::FILM_CONFIG_FILE),
                }
            }
        }
        Command::Template => {
            println!("{}", template::film_config_template_json()?);
        }
        Command::Check => {
            let project = Project::load(&cli.project, &cli.config)?;
            output::print_project(&project, &cli.project.join(&cli.config));
            println!();
            let result = project.validate();
            output::print_validation(&result);
            if !result.is_valid() {
                std::process::exit(1);
            }
        }
        Command::Generate { output: out } => {
            let project = Project::load(&cli.project, &cli.config)?;
            let result = project.validate();
            output::print_validation(&result);
            if !result.is_valid() {
                std::process::exit(1);
            }

            let html = project.generate();
            let path = match out {
                Some(file) => write_to(&file, &html)?,
                None => generate::write_artifact(&project.output_dir(), project.title(), &html)?,
            };
            output::print_generate_summary(
                project.title().unwrap_or_default(),
                &path,
                html.len(),
                &generate::artifact_digest(&html),
            );
        }
        Command::Batch { root } => {
            let settings = config::load_config(&root)?;
            init_thread_pool(&settings.processing);
            println!("==> Processing films in {}", root.display());
            let results = batch::process_all(&root)?;
            let report = batch::write_results(&root, &results)?;
            output::print_batch_summary(&results, &root);
            println!("==> Results saved to {}", report.display());
            if results.iter().any(|r| !r.success) {
                std::process::exit(1);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Route diagnostics to stderr so stdout stays clean for `template` and
/// `gen-config` output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "film_epk=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; config can lower it, not raise it.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}

fn write_to(file: &Path, html: &str) -> std::io::Result<PathBuf> {
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file, html)?;
    Ok(file.to_path_buf())
}
