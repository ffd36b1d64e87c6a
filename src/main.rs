use tracing_subscriber::EnvFilter;

const NOTICE: &str = "specfit is a library; it cannot be run by itself.";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "invoked directly");
    println!("{}", NOTICE);
}
