//! BDD Templates CLI
//!
//! Usage:
//!   bdd-templates [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list                          List templates with their descriptions
//!   show <NAME>                   Print a template's description and body
//!   placeholders <NAME>           Print a template's placeholders, one per line
//!   render <NAME> [KEY=VALUE]...  Render a template to stdout
//!
//! Options:
//!   -c, --catalog <FILE>     Extra catalog file (TOML format), repeatable
//!   --no-builtin             Do not load the built-in JUnit 5 catalog
//!   -k, --keep-unresolved    Leave placeholders without a binding as-is
//!   -d, --debug              Debug logging on stderr
//!   -h, --help               Print help

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bdd_templates::{
    Bindings, Catalog, CatalogError, RenderConfig, TemplateError, TemplateRegistry,
};

#[derive(Parser)]
#[command(name = "bdd-templates")]
#[command(about = "JUnit 5 BDD code templates with placeholder substitution")]
struct Cli {
    /// Extra catalog file (TOML format), loaded after the built-in catalog
    #[arg(short, long, global = true)]
    catalog: Vec<PathBuf>,

    /// Do not load the built-in JUnit 5 catalog
    #[arg(long, global = true)]
    no_builtin: bool,

    /// Leave placeholders without a binding verbatim instead of failing
    #[arg(short, long, global = true)]
    keep_unresolved: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List templates with their descriptions
    List,

    /// Print a template's description and body
    Show {
        /// Template name
        name: String,
    },

    /// Print a template's placeholders, one per line
    Placeholders {
        /// Template name
        name: String,
    },

    /// Render a template to stdout
    Render {
        /// Template name
        name: String,

        /// Placeholder values as KEY=VALUE
        bindings: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let registry = match load_registry(&cli) {
        Ok(registry) => registry,
        Err(e) => fail_catalog(e),
    };

    match cli.command {
        Command::List => {
            let width = registry.names().map(str::len).max().unwrap_or(0);
            for template in registry.iter() {
                match template.description() {
                    Some(description) => {
                        println!("{:width$}  {}", template.name(), description, width = width)
                    }
                    None => println!("{}", template.name()),
                }
            }
        }
        Command::Show { name } => {
            let template = registry.get(&name).unwrap_or_else(|e| fail(e));
            if let Some(description) = template.description() {
                println!("# {}", description);
            }
            println!("{}", template.body());
        }
        Command::Placeholders { name } => {
            let template = registry.get(&name).unwrap_or_else(|e| fail(e));
            for placeholder in template.placeholders() {
                println!("{}", placeholder);
            }
        }
        Command::Render { name, bindings } => {
            let bindings = match Bindings::from_pairs(&bindings) {
                Ok(bindings) => bindings,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };
            match registry.render(&name, &bindings) {
                Ok(text) => println!("{}", text),
                Err(e) => fail(e),
            }
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the registry from the built-in catalog and any extra catalog files
fn load_registry(cli: &Cli) -> Result<TemplateRegistry, CatalogError> {
    let config = if cli.keep_unresolved {
        RenderConfig::lenient()
    } else {
        RenderConfig::strict()
    };

    let mut registry = TemplateRegistry::with_config(config);
    if !cli.no_builtin {
        registry.extend_from_catalog(&Catalog::default())?;
    }

    for path in &cli.catalog {
        tracing::debug!(path = %path.display(), "loading catalog");
        registry.load_file(path)?;
    }

    Ok(registry)
}

fn fail_catalog(err: CatalogError) -> ! {
    match err {
        CatalogError::Template(e) => fail(e),
        other => {
            eprintln!("Error: {}", other);
            process::exit(1);
        }
    }
}

fn fail(err: TemplateError) -> ! {
    match err.diagnostic() {
        Some(report) => eprint!("{}", report),
        None => eprintln!("Error: {}", err),
    }
    process::exit(1);
}
