use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes the global logger.
///
/// With a log file, info and above are written there (debug too when
/// `verbose`). Without one only warnings reach stderr, whatever `verbose`
/// says, since the game owns the terminal. `RUST_LOG` overrides the level
/// either way.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = default_level(verbose, log_file.is_some());

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
    Ok(())
}

/// Level used when `RUST_LOG` is unset
fn default_level(verbose: bool, has_file: bool) -> LevelFilter {
    match (has_file, verbose) {
        (true, true) => LevelFilter::Debug,
        (true, false) => LevelFilter::Info,
        (false, _) => LevelFilter::Warn,
    }
}
