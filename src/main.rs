//! tldify - find a TLD for your beloved hostname
//!
//! Interactive by default: suggestions update as you type. Pass a hostname
//! for a one-shot answer.

use std::env;
use std::process;
use std::sync::Arc;

use tldify::{
    catalog::CatalogLoader,
    config::Settings,
    lookup::{DnsExistenceChecker, ExistenceCheck},
    matcher::InputValidator,
    prompt::{catalog_footer, check_candidates, render_candidates, spinner, InteractivePrompt},
    session::Session,
    Result, TldifyError,
};
use tracing_subscriber::EnvFilter;

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    hostname: Option<String>,
    json: bool,
    check: bool,
    help: bool,
    version: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = tldify::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(2);
        }
    };

    if options.help {
        print_help();
        return Ok(());
    }
    if options.version {
        println!("tldify {}", tldify::VERSION);
        return Ok(());
    }

    if let Err(e) = run(options).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr so they never mix with suggestions; `RUST_LOG` overrides the level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-V" | "--version" => options.version = true,
            "--json" => options.json = true,
            "--check" => options.check = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(TldifyError::cli(format!("Unknown option: {}", flag)));
            }
            value => {
                if options.hostname.is_some() {
                    return Err(TldifyError::cli("Only one hostname can be given"));
                }
                options.hostname = Some(value.to_string());
            }
        }
    }

    if options.json && options.hostname.is_none() {
        return Err(TldifyError::cli("--json needs a hostname"));
    }

    Ok(options)
}

async fn run(options: Options) -> Result<()> {
    let mut settings = Settings::from_env()?;
    if options.check {
        settings.check.enabled = true;
    }

    // Validate before touching the network
    let hostname = options
        .hostname
        .as_deref()
        .map(|h| InputValidator::new().validate(h))
        .transpose()?;

    let loader = CatalogLoader::from_config(&settings.catalog);
    let interactive = hostname.is_none();

    let pb = interactive.then(|| spinner(format!("Loading TLD list from {}", loader.source())));
    let (catalog, load_error) = loader.load_or_empty().await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    if let Some(e) = load_error {
        eprintln!("{}", e.user_message());
    }

    let session = Session::shared(catalog);
    let checker: Option<Arc<dyn ExistenceCheck>> = settings
        .check
        .enabled
        .then(|| Arc::new(DnsExistenceChecker::with_config(settings.check.clone())) as Arc<dyn ExistenceCheck>);

    match hostname {
        Some(hostname) => {
            session.write().set_input(&hostname);
            if let Some(checker) = &checker {
                check_candidates(&session, checker.as_ref(), None).await;
            }

            let state = session.read();
            if options.json {
                println!("{}", serde_json::to_string_pretty(state.candidates())?);
            } else {
                print!("{}", render_candidates(state.candidates(), &settings.registrar));
                println!();
                println!("{}", catalog_footer(state.catalog().last_updated()));
            }
            Ok(())
        }
        None => {
            println!("🌐 tldify - enter your beloved hostname and we will find a TLD for you");
            println!("══════════════════════════════════════════════════════════════════════");
            println!();

            let mut prompt = InteractivePrompt::new(Arc::clone(&session), settings);
            if let Some(checker) = checker {
                prompt = prompt.with_checker(checker);
            }
            prompt.run().await
        }
    }
}

/// Print help information
fn print_help() {
    println!("🌐 tldify - find a TLD for your beloved hostname");
    println!("═══════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    tldify [OPTIONS] [HOSTNAME]");
    println!();
    println!("EXAMPLES:");
    println!("    tldify                    # Interactive, suggestions as you type");
    println!("    tldify googlecom          # -> google.com");
    println!("    tldify google --json      # -> g.oogle, as JSON");
    println!();
    println!("OPTIONS:");
    println!("    --json         Print candidates as JSON (needs HOSTNAME)");
    println!("    --check        Resolve each candidate; resolvable names are shown as taken");
    println!("    -h, --help     Show this help");
    println!("    -V, --version  Show version");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    TLDIFY_TLD_URL              TLD list URL (default: IANA list)");
    println!("    TLDIFY_CATALOG_FILE         Read the TLD list from a file instead");
    println!("    TLDIFY_TIMEOUT_SECS         TLD list request timeout (default: 10)");
    println!("    TLDIFY_RETRIES              Extra attempts for the TLD list (default: 2)");
    println!("    TLDIFY_RETRY_DELAY_MS       Delay between attempts (default: 500)");
    println!("    TLDIFY_REGISTRAR            Registrar host for links (default: godaddy.com)");
    println!("    TLDIFY_CHECK                Same as --check when true");
    println!("    TLDIFY_LOOKUP_TIMEOUT_SECS  Per-name lookup timeout (default: 5)");
    println!("    TLDIFY_CONCURRENCY          Parallel lookups (default: 10)");
    println!("    RUST_LOG                    Log level (default: warn)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_hostname_and_flags() {
        let options = parse_args(&args(&["googlecom", "--json", "--check"])).unwrap();
        assert_eq!(options.hostname.as_deref(), Some("googlecom"));
        assert!(options.json);
        assert!(options.check);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["one", "two"])).is_err());
        assert!(parse_args(&args(&["--json"])).is_err());
    }

    #[test]
    fn test_parse_interactive() {
        let options = parse_args(&[]).unwrap();
        assert!(options.hostname.is_none());
        assert!(!options.help);
    }
}
