//! ReactTestApp host harness: entry point.
//!
//! Drives the developer-settings controller from the command line, the same
//! way the in-app developer menu does.  The runtime framework is replaced by
//! the recording host, so every command prints what would have been applied
//! to the runtime.
//!
//! # Usage
//!
//! ```text
//! testapp-host [OPTIONS] <COMMAND>
//!
//! Commands:
//!   show                      Print developer settings and the embedded bundle
//!   set <PREFERENCE> <VALUE>  Persist a preference and reload
//!   toggle <PREFERENCE>       Flip a preference and reload
//!   load <SOURCE>             Load from dev-server, embedded, or auto
//!   probe                     Check whether the dev server is reachable
//!   reload                    Reload with the current settings
//!
//! Options:
//!   --settings-file <PATH>    Settings TOML file [env: TESTAPP_SETTINGS_FILE]
//!   --ephemeral               Keep settings in memory only
//!   --bundle-root <DIR>       Directory containing Bundle/ [env: TESTAPP_BUNDLE_ROOT]
//!   --dev-server-url <URL>    Status endpoint to probe [env: TESTAPP_DEV_SERVER_URL]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use testapp_core::{BundleSource, Preference, DEV_SERVER_STATUS_URL};
use testapp_host::application::instance::{BundleLocator, ReactInstance};
use testapp_host::application::startup;
use testapp_host::infrastructure::bundle::FsBundleLocator;
use testapp_host::infrastructure::config::{HarnessConfig, SettingsLocation};
use testapp_host::infrastructure::dev_server::HttpDevServerProbe;
use testapp_host::infrastructure::runtime_host::RecordingRuntimeHost;
use testapp_host::infrastructure::ui_bridge::{self, CommandResult, DevSettingsDto};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// ReactTestApp native host harness.
#[derive(Debug, Parser)]
#[command(
    name = "testapp-host",
    about = "Developer settings and bundle selection for the ReactTestApp host",
    version
)]
struct Cli {
    /// Settings TOML file.  Defaults to the platform config directory.
    #[arg(long, env = "TESTAPP_SETTINGS_FILE")]
    settings_file: Option<PathBuf>,

    /// Keep settings in memory only.  Takes precedence over `--settings-file`.
    #[arg(long)]
    ephemeral: bool,

    /// Directory containing `Bundle/`.  Defaults to the working directory.
    #[arg(long, env = "TESTAPP_BUNDLE_ROOT")]
    bundle_root: Option<PathBuf>,

    /// Dev-server status endpoint.
    #[arg(long, env = "TESTAPP_DEV_SERVER_URL", default_value = DEV_SERVER_STATUS_URL)]
    dev_server_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print developer settings and the embedded bundle name.
    Show,
    /// Persist a preference and reload.
    Set {
        /// e.g. `fast-refresh` or `useFastRefresh`.
        preference: Preference,
        /// on/off, true/false, yes/no, 1/0.
        #[arg(
            value_parser = clap::builder::BoolishValueParser::new(),
            action = clap::ArgAction::Set
        )]
        value: bool,
    },
    /// Flip a preference and reload.
    Toggle { preference: Preference },
    /// Load the bundle from a source and reload.
    Load {
        #[arg(value_enum)]
        source: LoadTarget,
    },
    /// Check whether the dev server is reachable.
    Probe,
    /// Reload with the current settings.
    Reload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LoadTarget {
    DevServer,
    Embedded,
    /// Dev server if it answers, otherwise the embedded bundle.
    Auto,
}

impl Cli {
    fn harness_config(&self) -> HarnessConfig {
        let settings = match (&self.settings_file, self.ephemeral) {
            (_, true) => SettingsLocation::Ephemeral,
            (Some(path), false) => SettingsLocation::File(path.clone()),
            (None, false) => SettingsLocation::PlatformDefault,
        };
        HarnessConfig {
            settings,
            bundle_root: self.bundle_root.clone().unwrap_or_default(),
            dev_server_url: self.dev_server_url.clone(),
        }
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_settings(dto: &DevSettingsDto) {
    println!("breakOnFirstLine   {}", dto.break_on_first_line);
    println!("useDirectDebugger  {}", dto.use_direct_debugger);
    println!("useFastRefresh     {}", dto.use_fast_refresh);
    println!("useWebDebugger     {}", dto.use_web_debugger);
    println!("debugger           {}", dto.debugger_mode);
}

fn print_runtime(host: &RecordingRuntimeHost) {
    let applied = host.applied_settings();
    println!(
        "runtime: module={:?} bundle={:?} web={} direct={} fastRefresh={} liveReload={} reloads={}",
        host.main_module_name().unwrap_or_default(),
        host.bundle_file().unwrap_or_default(),
        applied.use_web_debugger,
        applied.use_direct_debugger,
        applied.use_fast_refresh,
        applied.use_live_reload,
        host.reload_count(),
    );
}

fn expect_ok<T: serde::Serialize>(result: CommandResult<T>) -> anyhow::Result<T> {
    match (result.success, result.data) {
        (true, Some(data)) => Ok(data),
        _ => Err(anyhow::anyhow!(
            result.error.unwrap_or_else(|| "command failed".to_string())
        )),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.harness_config();

    let settings = config
        .open_settings_store()
        .context("failed to open the settings store")?;
    let host = Arc::new(RecordingRuntimeHost::new());
    let locator = Arc::new(FsBundleLocator::new(config.bundle_root.clone()));
    let instance = ReactInstance::new(Arc::clone(&host) as _, settings, locator.clone());
    let probe = HttpDevServerProbe::new(config.dev_server_url.clone())
        .context("failed to set up the dev-server probe")?;

    match cli.command {
        Command::Show => {
            print_settings(&expect_ok(ui_bridge::get_dev_settings(&instance))?);
            let bundle = locator.bundle_name();
            if bundle.is_empty() {
                println!("embedded bundle    <none>");
            } else {
                println!("embedded bundle    {bundle}");
            }
        }
        Command::Set { preference, value } => {
            let dto = expect_ok(ui_bridge::set_preference(&instance, preference.key(), value))?;
            print_settings(&dto);
            print_runtime(&host);
        }
        Command::Toggle { preference } => {
            let dto = expect_ok(ui_bridge::toggle_preference(&instance, preference.key()))?;
            print_settings(&dto);
            print_runtime(&host);
        }
        Command::Load { source } => {
            let loaded = match source {
                LoadTarget::DevServer => {
                    expect_ok(ui_bridge::load_bundle(&instance, BundleSource::DevServer))?
                }
                LoadTarget::Embedded => {
                    expect_ok(ui_bridge::load_bundle(&instance, BundleSource::Embedded))?
                }
                LoadTarget::Auto => startup::start(&instance, &probe).await,
            };
            println!("loaded from {loaded:?}");
            print_runtime(&host);
        }
        Command::Probe => {
            let running = expect_ok(ui_bridge::check_dev_server(&probe).await)?;
            info!("probed {}", probe.url());
            println!("dev server running: {running}");
        }
        Command::Reload => {
            expect_ok(ui_bridge::reload(&instance))?;
            print_runtime(&host);
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
