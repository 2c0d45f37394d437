mod envfile;
mod header;

use std::path::PathBuf;

use header::Outcome;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .without_time()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "env_header=warn".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let root = match args.next() {
        Some(root) => PathBuf::from(root),
        None => anyhow::bail!("Usage: env-header <project-root>"),
    };

    match header::generate(&root)? {
        Outcome::Skipped { env_path } => println!(
            "No .env file found at {}, skipping header generation.",
            env_path.display()
        ),
        Outcome::Generated { header_path } => {
            println!("Generated header at {}", header_path.display())
        }
    }

    Ok(())
}
