//! Declsig driver
//!
//! Prints the canonical signature of each built-in shape, one per line.

mod catalogue;

use declsig_render::{QualifierPlacement, RenderConfig, SignatureRenderer};

/// Initialize tracing for debug output.
///
/// Only installs a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=declsig_render=trace`.
fn init_tracing() {
    use tracing_subscriber::{prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
            .init();
    }
}

fn print_usage() {
    eprintln!("Usage: declsig [--max-depth <n>] [--west]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --max-depth <n>   Nesting budget per signature");
    eprintln!("  --west            Write cv-qualifiers before named types");
}

fn parse_config(args: &[String]) -> Result<RenderConfig, String> {
    let mut config = RenderConfig::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--max-depth" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--max-depth needs a value".to_string())?;
                config.max_depth = value
                    .parse()
                    .map_err(|_| format!("invalid depth `{value}`"))?;
                i += 2;
            }
            "--west" => {
                config.qualifier_placement = QualifierPlacement::West;
                i += 1;
            }
            other => return Err(format!("unknown option `{other}`")),
        }
    }
    Ok(config)
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return;
    }

    let config = match parse_config(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            print_usage();
            std::process::exit(1);
        }
    };

    let shapes = match catalogue::shapes() {
        Ok(shapes) => shapes,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let renderer = SignatureRenderer::new(config);
    for result in renderer.render_many(&shapes) {
        match result {
            Ok(signature) => println!("{signature}"),
            Err(err) => eprintln!("error: {err}"),
        }
    }
}
