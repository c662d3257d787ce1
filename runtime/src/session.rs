//! App session: config, shared resources and the running browse screen.
//!
//! Screens never reach into each other. Everything shared (catalog, auth,
//! appearance, preferences) sits on the [`Bus`] and screens read it from there.

use crate::browse::{BrowseHandle, BrowseScreen};
use agromarket_core::auth::{AuthProvider, AuthSnapshot, Role};
use agromarket_core::config::{AppConfig, Preference, Preferences};
use agromarket_core::telemetry::init_tracing;
use agromarket_core::{Bus, Catalog, ColorScheme, seed};
use agromarket_flow::TransactionsScreen;
use agromarket_flow::faq::HelpScreen;
use agromarket_flow::profile::UserProfile;
use agromarket_flow::publish::PublishForm;
use anyhow::Context;
use std::path::Path;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub struct Session {
    config: AppConfig,
    bus: Bus,
    auth: AuthProvider,
    browse: BrowseHandle,
    browse_task: JoinHandle<()>,
}

impl Session {
    /// Boots a session from `config` with the seed catalog.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: AppConfig) -> anyhow::Result<Self> {
        Self::with_catalog(config, seed::catalog())
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config = AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?;
        Self::start(config)
    }

    pub fn with_catalog(config: AppConfig, catalog: Catalog) -> anyhow::Result<Self> {
        if let Err(e) = init_tracing(&config.telemetry) {
            debug!(error = %e, "tracing already installed");
        }

        let mut auth = AuthProvider::new();
        auth.mark_ready();

        let bus = Bus::new()
            .with(catalog.clone())
            .with(auth.snapshot())
            .with(ColorScheme::default())
            .with(config.preferences.clone());

        let (browse, browse_task) = BrowseScreen::spawn(catalog, config.search.debounce());
        info!(
            listings = bus.require::<Catalog>()?.len(),
            debounce_ms = config.search.debounce_ms,
            "session started"
        );

        Ok(Self {
            config,
            bus,
            auth,
            browse,
            browse_task,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn browse(&self) -> &BrowseHandle {
        &self.browse
    }

    pub fn auth(&self) -> anyhow::Result<AuthSnapshot> {
        Ok(self.bus.snapshot::<AuthSnapshot>()?)
    }

    pub fn sign_in(&mut self, role: Role) -> AuthSnapshot {
        let snapshot = self.auth.sign_in(role);
        self.bus.insert(snapshot.clone());
        snapshot
    }

    pub fn sign_out(&mut self) -> AuthSnapshot {
        let snapshot = self.auth.sign_out();
        self.bus.insert(snapshot.clone());
        snapshot
    }

    /// For the sign-in form. Call [`Session::publish_auth`] afterwards.
    pub fn auth_provider(&mut self) -> &mut AuthProvider {
        &mut self.auth
    }

    /// Copies the provider's current state onto the bus.
    pub fn publish_auth(&mut self) {
        self.bus.insert(self.auth.snapshot());
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.bus.get::<ColorScheme>().copied().unwrap_or_default()
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.bus.insert(scheme);
    }

    pub fn preferences(&self) -> anyhow::Result<&Preferences> {
        Ok(self.bus.require::<Preferences>()?)
    }

    pub fn toggle_preference(&mut self, key: Preference) -> anyhow::Result<bool> {
        let prefs = self
            .bus
            .get_mut::<Preferences>()
            .context("preferences missing from bus")?;
        Ok(prefs.toggle(key))
    }

    pub fn transactions(&self) -> anyhow::Result<TransactionsScreen> {
        let catalog = self.bus.require::<Catalog>()?;
        Ok(TransactionsScreen::new(catalog, &self.auth()?))
    }

    pub fn publish_form(&self) -> PublishForm {
        PublishForm::new()
    }

    pub fn help(&self) -> HelpScreen {
        HelpScreen::new()
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile::new()
    }

    /// Closes the browse screen and waits for its task.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        drop(self.browse);
        self.browse_task.await.context("browse task failed")?;
        info!("session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agromarket_flow::transactions::MainTab;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_bus_is_populated() {
        let session = Session::start(AppConfig::default()).unwrap();
        assert!(session.bus().contains::<Catalog>());
        assert!(session.auth().unwrap().is_ready);
        assert!(!session.auth().unwrap().is_signed_in());
        assert_eq!(session.color_scheme(), ColorScheme::Light);
        session.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_sign_in_updates_bus_snapshot() {
        let mut session = Session::start(AppConfig::default()).unwrap();
        session.sign_in(Role::Seller);
        assert!(session.auth().unwrap().is_seller());
        assert_eq!(session.transactions().unwrap().tab(), MainTab::Sales);

        session.sign_out();
        assert_eq!(session.transactions().unwrap().tab(), MainTab::Purchases);
    }

    #[tokio::test]
    async fn test_preferences_toggle() {
        let mut session = Session::start(AppConfig::default()).unwrap();
        assert!(!session.preferences().unwrap().price_alerts);
        assert!(session.toggle_preference(Preference::PriceAlerts).unwrap());
        assert!(session.preferences().unwrap().price_alerts);
        assert!(session.preferences().unwrap().notifications);
    }

    #[tokio::test]
    async fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[search]\ndebounce_ms = 250").unwrap();
        let session = Session::from_path(file.path()).unwrap();
        assert_eq!(session.config().search.debounce_ms, 250);

        assert!(Session::from_path("/nonexistent/agromarket.toml").is_err());
    }

    #[tokio::test]
    async fn test_color_scheme() {
        let mut session = Session::start(AppConfig::default()).unwrap();
        session.set_color_scheme(ColorScheme::Dark);
        assert!(session.color_scheme().is_dark());
    }
}
