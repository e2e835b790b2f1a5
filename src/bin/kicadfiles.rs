// kicadfiles command-line front end.
// Usage: kicadfiles [--strictness strict|failsafe|silent] <check|format|roundtrip|tree> ...

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    kicadfiles::cli::run();
}
