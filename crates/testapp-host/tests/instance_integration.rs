//! Integration tests for the instance controller wired to real adapters.
//!
//! These tests build a [`ReactInstance`] the way `main.rs` does: a TOML
//! settings file in a temp directory, a filesystem bundle locator, and the
//! recording runtime host.  They cover:
//!
//! - Preference defaults, write-then-read, and persistence across a restart
//!   (a second controller opened on the same file).
//! - Debugger exclusivity in both directions.
//! - What `load_js_bundle_from` pushes into the runtime for each source.
//! - Startup bundle selection against a live (and a dead) status endpoint.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use testapp_core::BundleSource;
use testapp_host::application::instance::ReactInstance;
use testapp_host::application::startup;
use testapp_host::infrastructure::bundle::FsBundleLocator;
use testapp_host::infrastructure::dev_server::HttpDevServerProbe;
use testapp_host::infrastructure::runtime_host::{HostCall, RecordingRuntimeHost};
use testapp_host::infrastructure::storage::TomlSettingsStore;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use uuid::Uuid;

// ── Fixtures ──────────────────────────────────────────────────────────────────

struct Fixture {
    root: PathBuf,
}

impl Fixture {
    fn new(bundles: &[&str]) -> Self {
        let root = std::env::temp_dir().join(format!("testapp_it_{}", Uuid::new_v4()));
        std::fs::create_dir_all(root.join("Bundle")).unwrap();
        for name in bundles {
            std::fs::write(root.join("Bundle").join(name), b"// bundle").unwrap();
        }
        Self { root }
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join("settings.toml")
    }

    /// A fresh controller over this fixture, as if the app had just started.
    fn instance(&self) -> (ReactInstance, Arc<RecordingRuntimeHost>) {
        open_instance(&self.settings_path(), &self.root)
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.root).ok();
    }
}

fn open_instance(settings: &Path, bundle_root: &Path) -> (ReactInstance, Arc<RecordingRuntimeHost>) {
    let host = Arc::new(RecordingRuntimeHost::new());
    let instance = ReactInstance::new(
        Arc::clone(&host) as _,
        Arc::new(TomlSettingsStore::new(settings)),
        Arc::new(FsBundleLocator::new(bundle_root)),
    );
    (instance, host)
}

/// Serves `status_line` to one request; returns the status URL.
async fn serve_status_once(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        let response =
            format!("HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });
    format!("http://{addr}/status")
}

// ── Preferences ───────────────────────────────────────────────────────────────

#[test]
fn test_fresh_settings_file_yields_documented_defaults() {
    let fixture = Fixture::new(&[]);
    let (instance, _) = fixture.instance();

    assert!(!instance.break_on_first_line());
    assert!(!instance.use_direct_debugger());
    assert!(instance.use_fast_refresh());
    assert!(!instance.use_web_debugger());
}

#[test]
fn test_preferences_survive_restart() {
    // Arrange
    let fixture = Fixture::new(&[]);
    {
        let (instance, _) = fixture.instance();
        instance.set_break_on_first_line(true);
        instance.set_use_fast_refresh(false);
        instance.set_use_web_debugger(true);
    }

    // Act: a new controller over the same file
    let (restarted, _) = fixture.instance();

    // Assert
    assert!(restarted.break_on_first_line());
    assert!(!restarted.use_fast_refresh());
    assert!(restarted.use_web_debugger());
    assert!(!restarted.use_direct_debugger());
}

#[test]
fn test_debugger_exclusivity_in_both_directions() {
    let fixture = Fixture::new(&[]);
    let (instance, _) = fixture.instance();

    instance.set_use_web_debugger(true);
    instance.set_use_direct_debugger(true);
    assert!(instance.use_direct_debugger());
    assert!(!instance.use_web_debugger());

    instance.set_use_web_debugger(true);
    assert!(instance.use_web_debugger());
    assert!(!instance.use_direct_debugger());
}

#[test]
fn test_setter_persists_before_reloading() {
    // Arrange
    let fixture = Fixture::new(&[]);
    let (instance, host) = fixture.instance();

    // Act
    instance.set_use_direct_debugger(true);

    // Assert: the reload saw the new value, and live reload follows fast refresh
    assert_eq!(
        host.calls(),
        vec![
            HostCall::UseWebDebugger(false),
            HostCall::UseDirectDebugger(true),
            HostCall::UseFastRefresh(true),
            HostCall::UseLiveReload(true),
            HostCall::Reload,
        ]
    );
}

// ── Bundle loading ────────────────────────────────────────────────────────────

#[test]
fn test_load_from_dev_server_sets_index_and_clears_bundle() {
    let fixture = Fixture::new(&["index.bundle"]);
    let (instance, host) = fixture.instance();

    instance.load_js_bundle_from(BundleSource::DevServer);

    assert_eq!(host.main_module_name().as_deref(), Some("index"));
    assert_eq!(host.bundle_file().as_deref(), Some(""));
    assert_eq!(host.reload_count(), 1);
}

#[test]
fn test_load_embedded_uses_discovered_bundle_and_keeps_module() {
    // Arrange: the module name was set by an earlier dev-server load
    let fixture = Fixture::new(&["main.native.bundle", "main.bundle"]);
    let (instance, host) = fixture.instance();
    instance.load_js_bundle_from(BundleSource::DevServer);

    // Act
    instance.load_js_bundle_from(BundleSource::Embedded);

    // Assert
    assert_eq!(host.bundle_file().as_deref(), Some("main.native"));
    assert_eq!(host.main_module_name().as_deref(), Some("index"));
    assert_eq!(host.reload_count(), 2);
}

#[test]
fn test_load_embedded_without_bundle_sets_empty_path() {
    let fixture = Fixture::new(&[]);
    let (instance, host) = fixture.instance();

    instance.load_js_bundle_from(BundleSource::Embedded);

    assert_eq!(host.bundle_file().as_deref(), Some(""));
    assert_eq!(host.main_module_name(), None);
    assert_eq!(host.reload_count(), 1);
}

// ── Startup ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_startup_loads_from_dev_server_when_it_answers() {
    // Arrange
    let fixture = Fixture::new(&["index.windows.bundle"]);
    let (instance, host) = fixture.instance();
    let probe = HttpDevServerProbe::new(serve_status_once("200 OK").await).unwrap();

    // Act
    let source = startup::start(&instance, &probe).await;

    // Assert
    assert_eq!(source, BundleSource::DevServer);
    assert_eq!(host.main_module_name().as_deref(), Some("index"));
}

#[tokio::test]
async fn test_startup_falls_back_to_embedded_on_error_status() {
    let fixture = Fixture::new(&["index.windows.bundle", "index.bundle"]);
    let (instance, host) = fixture.instance();
    let probe =
        HttpDevServerProbe::new(serve_status_once("500 Internal Server Error").await).unwrap();

    let source = startup::start(&instance, &probe).await;

    assert_eq!(source, BundleSource::Embedded);
    assert_eq!(host.bundle_file().as_deref(), Some("index.windows"));
}

#[tokio::test]
async fn test_startup_falls_back_to_embedded_when_nothing_listens() {
    // Arrange: reserve a port, then free it
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let fixture = Fixture::new(&["main.bundle"]);
    let (instance, host) = fixture.instance();
    let probe = HttpDevServerProbe::new(format!("http://{addr}/status")).unwrap();

    // Act
    let source = startup::start(&instance, &probe).await;

    // Assert
    assert_eq!(source, BundleSource::Embedded);
    assert_eq!(host.bundle_file().as_deref(), Some("main"));
}
