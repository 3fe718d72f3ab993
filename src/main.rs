//! MIST Host — plugin runner
//!
//! Main entry point that loads a plugin shared library, invokes its
//! entry point with the arguments given on the command line, and exits
//! with the status byte the plugin returned.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use mist_plugin::{DynamicLoader, ErrorCode, PluginError};

mod config;

use crate::config::{HostConfig, PluginConfig};

/// Loads a MIST plugin and invokes its entry point.
#[derive(Debug, Parser)]
#[command(name = "mist-host", version)]
struct Cli {
    /// Path to the plugin shared library (.so / .dll / .dylib).
    ///
    /// A bare file name is looked up in the configured plugin directory.
    plugin: PathBuf,

    /// Plugin index to resolve the entry symbol for.
    #[arg(long, default_value_t = 0)]
    index: u32,

    /// Arguments passed through to the plugin.
    #[arg(trailing_var_arg = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let host_config = match HostConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&host_config);

    match run(&cli, &host_config) {
        Ok(code) => {
            if !code.is_success() {
                tracing::warn!(
                    status = u8::from(code),
                    code = code.as_str(),
                    "Plugin reported failure"
                );
            }
            ExitCode::from(u8::from(code))
        }
        Err(e) => {
            tracing::error!("Host error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing/logging
fn init_logging(host_config: &HostConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&host_config.logging.level));

    match host_config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Load the plugin and dispatch one call.
fn run(cli: &Cli, host_config: &HostConfig) -> Result<ErrorCode, PluginError> {
    let path = resolve_plugin_path(&cli.plugin, &host_config.plugin);

    tracing::info!(
        path = %path.display(),
        index = cli.index,
        "Starting mist-host v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mut loader = DynamicLoader::new();

    // SAFETY: the library to load was named explicitly on the command
    // line; running it is the whole point of the host.
    let entry = unsafe { loader.load_from_path(&path, cli.index) }?;

    Ok(entry.invoke(&cli.args))
}

/// Resolves a bare plugin file name against the configured directory.
///
/// Paths with directory components, absolute paths, and names that
/// already exist in the working directory are used as given.
fn resolve_plugin_path(given: &Path, plugin_config: &PluginConfig) -> PathBuf {
    if given.is_absolute() || given.components().count() > 1 || given.exists() {
        given.to_path_buf()
    } else {
        Path::new(&plugin_config.directory).join(given)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name_resolves_into_plugin_directory() {
        let plugin_config = PluginConfig {
            directory: "/opt/mist/plugins".to_string(),
        };
        let resolved = resolve_plugin_path(Path::new("libgreeter.so"), &plugin_config);
        assert_eq!(resolved, PathBuf::from("/opt/mist/plugins/libgreeter.so"));
    }

    #[test]
    fn test_explicit_paths_are_used_as_given() {
        let plugin_config = PluginConfig {
            directory: "/opt/mist/plugins".to_string(),
        };

        let absolute = resolve_plugin_path(Path::new("/tmp/libgreeter.so"), &plugin_config);
        assert_eq!(absolute, PathBuf::from("/tmp/libgreeter.so"));

        let relative = resolve_plugin_path(Path::new("./build/libgreeter.so"), &plugin_config);
        assert_eq!(relative, PathBuf::from("./build/libgreeter.so"));
    }
}
