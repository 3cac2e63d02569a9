//! Notification provider: owns the store, the timers and the colour mode.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{debug, info, trace, warn};

use crate::application::services::{
    CornerStack, EXIT_ANIMATION, LifecycleScheduler, NotificationList, NotificationStore,
    Transition, present,
};
use crate::domain::{
    AppearancePort, ColorMode, Notification, NotificationId, NotificationRequest, NotifyConfig,
    NotifyError, PartialConfig, ThemePalette, ThemePreferencePort,
};

/// Per-provider settings on top of [`NotifyConfig`].
#[derive(Clone, Default)]
pub struct ProviderOptions {
    /// Fixed initial mode. Disables persistence and system following.
    pub default_mode: Option<ColorMode>,
    /// Replaces the configured light palette.
    pub light_theme: Option<ThemePalette>,
    /// Replaces the configured dark palette.
    pub dark_theme: Option<ThemePalette>,
    /// Where explicit mode choices are remembered.
    pub preference: Option<Arc<dyn ThemePreferencePort>>,
    /// Source of the system light/dark preference.
    pub appearance: Option<Arc<dyn AppearancePort>>,
}

impl ProviderOptions {
    /// Starts in `mode` when neither the preference nor the system decides.
    #[must_use]
    pub fn with_default_mode(mut self, mode: ColorMode) -> Self {
        self.default_mode = Some(mode);
        self
    }

    /// Replaces the light palette.
    #[must_use]
    pub fn with_light_theme(mut self, palette: ThemePalette) -> Self {
        self.light_theme = Some(palette);
        self
    }

    /// Replaces the dark palette.
    #[must_use]
    pub fn with_dark_theme(mut self, palette: ThemePalette) -> Self {
        self.dark_theme = Some(palette);
        self
    }

    /// Remembers explicit mode choices in `preference`.
    #[must_use]
    pub fn with_preference(mut self, preference: Arc<dyn ThemePreferencePort>) -> Self {
        self.preference = Some(preference);
        self
    }

    /// Follows the system light/dark setting reported by `appearance`.
    #[must_use]
    pub fn with_appearance(mut self, appearance: Arc<dyn AppearancePort>) -> Self {
        self.appearance = Some(appearance);
        self
    }
}

impl fmt::Debug for ProviderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderOptions")
            .field("default_mode", &self.default_mode)
            .field("light_theme", &self.light_theme.is_some())
            .field("dark_theme", &self.dark_theme.is_some())
            .field("preference", &self.preference.is_some())
            .field("appearance", &self.appearance.is_some())
            .finish()
    }
}

struct ProviderInner {
    config: RwLock<NotifyConfig>,
    store: NotificationStore,
    scheduler: LifecycleScheduler,
    mode: watch::Sender<ColorMode>,
    pinned_mode: Option<ColorMode>,
    light_theme: Option<ThemePalette>,
    dark_theme: Option<ThemePalette>,
    preference: Option<Arc<dyn ThemePreferencePort>>,
}

impl ProviderInner {
    fn notify(self: &Arc<Self>, request: NotificationRequest) -> NotificationId {
        let id = NotificationId::new();
        let notification = {
            let config = self.config.read();
            Notification::resolve(id, request, &config)
        };
        let kind = notification.kind;
        let duration = notification.duration;

        self.store.prepend(notification);
        debug!(%id, %kind, duration_ms = duration.as_millis(), "Notification shown");

        if let Some(delay) = duration.delay() {
            let weak = Arc::downgrade(self);
            self.scheduler
                .schedule(id, Transition::AutoExit, delay, move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.exit_notification(id);
                    }
                });
        }
        id
    }

    fn exit_notification(self: &Arc<Self>, id: NotificationId) {
        if !self.store.mark_exiting(id) {
            trace!(%id, "Exit ignored for unknown or exiting notification");
            return;
        }
        self.scheduler.cancel(id, Transition::AutoExit);
        debug!(%id, "Notification exiting");

        let weak: Weak<Self> = Arc::downgrade(self);
        self.scheduler
            .schedule(id, Transition::Removal, EXIT_ANIMATION, move || {
                if let Some(inner) = weak.upgrade() {
                    inner.remove_notification(id);
                }
            });
    }

    fn remove_notification(&self, id: NotificationId) {
        if self.store.remove(id) {
            debug!(%id, "Notification removed");
        }
    }

    fn mode(&self) -> ColorMode {
        *self.mode.borrow()
    }

    fn set_mode(&self, mode: ColorMode) {
        self.mode.send_replace(mode);
        debug!(%mode, "Colour mode set");
        self.persist_mode(mode);
    }

    fn toggle_mode(&self) -> ColorMode {
        self.mode.send_modify(|mode| *mode = mode.toggled());
        let mode = self.mode();
        debug!(%mode, "Colour mode toggled");
        self.persist_mode(mode);
        mode
    }

    fn persist_mode(&self, mode: ColorMode) {
        if self.pinned_mode.is_some() {
            return;
        }
        if let Some(preference) = &self.preference
            && let Err(e) = preference.store(mode)
        {
            warn!(error = %e, "Failed to persist colour mode");
        }
    }

    fn has_explicit_choice(&self) -> bool {
        let Some(preference) = &self.preference else {
            return false;
        };
        match preference.load() {
            Ok(choice) => choice.is_some(),
            Err(e) => {
                warn!(error = %e, "Failed to read colour mode preference");
                false
            }
        }
    }

    fn system_mode_changed(&self, mode: ColorMode) -> bool {
        if self.pinned_mode.is_some() || self.has_explicit_choice() {
            trace!(%mode, "System colour mode change ignored");
            return false;
        }
        let changed = self.mode.send_if_modified(|current| {
            let changed = *current != mode;
            *current = mode;
            changed
        });
        if changed {
            debug!(%mode, "Following system colour mode");
        }
        changed
    }

    fn light_theme(&self) -> ThemePalette {
        self.light_theme
            .unwrap_or_else(|| self.config.read().light_theme)
    }

    fn dark_theme(&self) -> ThemePalette {
        self.dark_theme.unwrap_or_else(|| self.config.read().dark_theme)
    }

    fn palette(&self) -> ThemePalette {
        match self.mode() {
            ColorMode::Light => self.light_theme(),
            ColorMode::Dark => self.dark_theme(),
        }
    }

    fn present(&self) -> Vec<CornerStack> {
        let palette = self.palette();
        let max_visible = self.config.read().max_visible;
        present(&self.store.snapshot(), max_visible, &palette)
    }
}

fn detect_initial_mode(options: &ProviderOptions, config: &NotifyConfig) -> ColorMode {
    if let Some(mode) = options.default_mode {
        return mode;
    }

    if let Some(preference) = &options.preference {
        match preference.load() {
            Ok(Some(mode)) => return mode,
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Failed to read colour mode preference"),
        }
    }

    options
        .appearance
        .as_ref()
        .and_then(|appearance| appearance.detect())
        .unwrap_or(config.default_mode)
}

/// Owns the active notifications and their lifecycle.
///
/// Dropping the provider cancels every pending timer; handles obtained from
/// [`NotificationsProvider::handle`] then report
/// [`NotifyError::ProviderUnavailable`].
pub struct NotificationsProvider {
    inner: Arc<ProviderInner>,
}

impl NotificationsProvider {
    /// Creates a provider on the current tokio runtime.
    ///
    /// # Errors
    /// Returns [`NotifyError::NoRuntime`] when called outside a tokio runtime.
    pub fn new(config: NotifyConfig, options: ProviderOptions) -> Result<Self, NotifyError> {
        let runtime = Handle::try_current().map_err(|_| NotifyError::NoRuntime)?;
        let mode = detect_initial_mode(&options, &config);
        let (mode_tx, _) = watch::channel(mode);

        info!(%mode, pinned = options.default_mode.is_some(), "Notifications provider started");

        Ok(Self {
            inner: Arc::new(ProviderInner {
                config: RwLock::new(config),
                store: NotificationStore::new(),
                scheduler: LifecycleScheduler::new(runtime),
                mode: mode_tx,
                pinned_mode: options.default_mode,
                light_theme: options.light_theme,
                dark_theme: options.dark_theme,
                preference: options.preference,
            }),
        })
    }

    /// Returns a cloneable handle for code that does not own the provider.
    #[must_use]
    pub fn handle(&self) -> NotificationsHandle {
        NotificationsHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Shows a notification, filling unset fields from the configuration.
    pub fn notify(&self, request: NotificationRequest) -> NotificationId {
        self.inner.notify(request)
    }

    /// Starts the exit animation; the notification is removed once it ends.
    ///
    /// Unknown or already exiting ids are ignored.
    pub fn exit_notification(&self, id: NotificationId) {
        self.inner.exit_notification(id);
    }

    /// Current notifications, newest first.
    #[must_use]
    pub fn notifications(&self) -> NotificationList {
        self.inner.store.snapshot()
    }

    /// Watches the notification list.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<NotificationList> {
        self.inner.store.subscribe()
    }

    /// Merges `partial` into the configuration used by later `notify` calls.
    pub fn setup_config(&self, partial: PartialConfig) {
        self.inner.config.write().merge(partial);
        debug!("Notification config updated");
    }

    /// Current notification defaults.
    #[must_use]
    pub fn config(&self) -> NotifyConfig {
        self.inner.config.read().clone()
    }

    /// Current colour mode.
    #[must_use]
    pub fn mode(&self) -> ColorMode {
        self.inner.mode()
    }

    /// Watches the colour mode.
    #[must_use]
    pub fn subscribe_mode(&self) -> watch::Receiver<ColorMode> {
        self.inner.mode.subscribe()
    }

    /// Sets the mode as an explicit user choice.
    pub fn set_mode(&self, mode: ColorMode) {
        self.inner.set_mode(mode);
    }

    /// Flips the mode as an explicit user choice and returns the new one.
    pub fn toggle_mode(&self) -> ColorMode {
        self.inner.toggle_mode()
    }

    /// Follows a system light/dark change unless the user chose a mode.
    ///
    /// Returns whether the mode changed.
    pub fn system_mode_changed(&self, mode: ColorMode) -> bool {
        self.inner.system_mode_changed(mode)
    }

    /// Palette used in light mode.
    #[must_use]
    pub fn light_theme(&self) -> ThemePalette {
        self.inner.light_theme()
    }

    /// Palette used in dark mode.
    #[must_use]
    pub fn dark_theme(&self) -> ThemePalette {
        self.inner.dark_theme()
    }

    /// Palette for the current mode.
    #[must_use]
    pub fn palette(&self) -> ThemePalette {
        self.inner.palette()
    }

    /// Per-corner render model of the current notifications.
    #[must_use]
    pub fn present(&self) -> Vec<CornerStack> {
        self.inner.present()
    }

    /// Number of lifecycle timers not yet fired.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.inner.scheduler.pending_count()
    }

    /// Cancels pending timers and drops every notification.
    pub fn shutdown(self) {
        let cancelled = self.inner.scheduler.cancel_all();
        self.inner.store.clear();
        info!(cancelled, "Notifications provider shut down");
    }
}

impl Drop for NotificationsProvider {
    fn drop(&mut self) {
        self.inner.scheduler.cancel_all();
    }
}

impl fmt::Debug for NotificationsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationsProvider")
            .field("notifications", &self.inner.store.len())
            .field("mode", &self.inner.mode())
            .field("scheduler", &self.inner.scheduler)
            .finish_non_exhaustive()
    }
}

/// Weak, cloneable access to a [`NotificationsProvider`].
#[derive(Clone, Default)]
pub struct NotificationsHandle {
    inner: Weak<ProviderInner>,
}

impl NotificationsHandle {
    fn inner(&self) -> Result<Arc<ProviderInner>, NotifyError> {
        self.inner
            .upgrade()
            .ok_or_else(|| NotifyError::unavailable("used outside a live notifications provider"))
    }

    /// See [`NotificationsProvider::notify`].
    ///
    /// # Errors
    /// Returns [`NotifyError::ProviderUnavailable`] once the provider is gone.
    pub fn notify(&self, request: NotificationRequest) -> Result<NotificationId, NotifyError> {
        Ok(self.inner()?.notify(request))
    }

    /// See [`NotificationsProvider::exit_notification`].
    ///
    /// # Errors
    /// Returns [`NotifyError::ProviderUnavailable`] once the provider is gone.
    pub fn exit_notification(&self, id: NotificationId) -> Result<(), NotifyError> {
        self.inner()?.exit_notification(id);
        Ok(())
    }

    /// # Errors
    /// Returns [`NotifyError::ProviderUnavailable`] once the provider is gone.
    pub fn notifications(&self) -> Result<NotificationList, NotifyError> {
        Ok(self.inner()?.store.snapshot())
    }

    /// # Errors
    /// Returns [`NotifyError::ProviderUnavailable`] once the provider is gone.
    pub fn mode(&self) -> Result<ColorMode, NotifyError> {
        Ok(self.inner()?.mode())
    }

    /// # Errors
    /// Returns [`NotifyError::ProviderUnavailable`] once the provider is gone.
    pub fn toggle_mode(&self) -> Result<ColorMode, NotifyError> {
        Ok(self.inner()?.toggle_mode())
    }

    /// Returns whether the provider is still alive.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl fmt::Debug for NotificationsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationsHandle")
            .field("available", &self.is_available())
            .finish()
    }
}
