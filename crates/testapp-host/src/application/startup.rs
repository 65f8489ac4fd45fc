//! Startup: choose where the first bundle comes from.
//!
//! When the app launches, a running dev server wins: the developer is
//! presumably iterating on the JavaScript.  Otherwise the embedded bundle is
//! loaded so the app still starts offline.

use async_trait::async_trait;
use testapp_core::BundleSource;
use tracing::info;

use super::instance::ReactInstance;

/// Answers "is the dev server up right now?".
///
/// The probe is advisory: implementations resolve to `false` on any failure
/// instead of returning an error.
#[async_trait]
pub trait DevServerProbe: Send + Sync {
    async fn is_running(&self) -> bool;
}

/// Picks [`BundleSource::DevServer`] when the probe sees a server, otherwise
/// [`BundleSource::Embedded`].
pub async fn choose_bundle_source(probe: &dyn DevServerProbe) -> BundleSource {
    if probe.is_running().await {
        BundleSource::DevServer
    } else {
        BundleSource::Embedded
    }
}

/// Chooses a bundle source and loads it into `instance`.
///
/// Returns the source that was loaded.
pub async fn start(instance: &ReactInstance, probe: &dyn DevServerProbe) -> BundleSource {
    let source = choose_bundle_source(probe).await;
    info!("startup bundle source: {source:?}");
    instance.load_js_bundle_from(source);
    source
}
