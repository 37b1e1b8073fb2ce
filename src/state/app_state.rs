//! Application context shared by every open window.
//!
//! `AppState` replaces process-wide globals: it counts open top-level
//! surfaces, tracks the active icon theme name, and fans state change
//! events out to subscribed views.

use std::sync::Arc;

use {
    async_channel::{Receiver, Sender, unbounded},
    parking_lot::RwLock,
    tracing::debug,
};

use crate::config::UserSettings;

/// Application state change events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppStateEvent {
    /// The active icon theme name changed.
    IconThemeChanged(String),
    /// Views should re-evaluate their visual style.
    StyleChanged,
    /// Settings were saved; views should re-read what they display.
    SettingsApplied(UserSettings),
    /// The last open top-level surface went away.
    LastWindowClosed,
}

/// Central application context with thread-safe access.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Icon theme currently in use, if one was forced.
    icon_theme_name: Arc<RwLock<Option<String>>>,
    /// Number of open top-level surfaces.
    window_count: Arc<RwLock<usize>>,
    /// List of active subscribers for manual broadcast fan-out.
    subscribers: Arc<RwLock<Vec<Sender<AppStateEvent>>>>,
}

impl AppState {
    /// Creates a new application state instance.
    ///
    /// When icon theme detection is known to fail, the stored fallback theme
    /// becomes the active icon theme right away.
    ///
    /// # Arguments
    ///
    /// * `settings` - Settings loaded at startup.
    ///
    /// # Returns
    ///
    /// A new `AppState` instance.
    pub fn new(settings: &UserSettings) -> Self {
        let icon_theme_name = settings
            .use_fallback_icon_theme
            .then(|| settings.fallback_icon_theme.clone());
        debug!("AppState: Initial icon theme {:?}", icon_theme_name);

        Self {
            icon_theme_name: Arc::new(RwLock::new(icon_theme_name)),
            window_count: Arc::new(RwLock::new(0)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Helper to broadcast an event to all subscribers.
    /// Cleans up closed channels.
    fn broadcast_event(&self, event: &AppStateEvent) -> usize {
        let mut subscribers = self.subscribers.write();
        subscribers.retain(|tx| tx.try_send(event.clone()).is_ok());
        subscribers.len()
    }

    /// Registers a newly opened top-level surface.
    ///
    /// # Returns
    ///
    /// The number of open surfaces including the new one.
    pub fn add_window(&self) -> usize {
        let mut count = self.window_count.write();
        *count += 1;
        debug!("AppState: Window opened, {} open", *count);
        *count
    }

    /// Unregisters a closed top-level surface.
    ///
    /// Publishes `LastWindowClosed` when the count drops from one to zero.
    ///
    /// # Returns
    ///
    /// The number of surfaces still open.
    pub fn remove_window(&self) -> usize {
        let remaining = {
            let mut count = self.window_count.write();
            if *count == 0 {
                debug!("AppState: remove_window called with no open windows");
                return 0;
            }
            *count -= 1;
            *count
        };

        debug!("AppState: Window closed, {} open", remaining);
        if remaining == 0 {
            self.broadcast_event(&AppStateEvent::LastWindowClosed);
        }
        remaining
    }

    /// Gets the number of open top-level surfaces.
    #[must_use]
    pub fn window_count(&self) -> usize {
        *self.window_count.read()
    }

    /// Gets the active icon theme name.
    #[must_use]
    pub fn icon_theme_name(&self) -> Option<String> {
        self.icon_theme_name.read().clone()
    }

    /// Switches the active icon theme and notifies subscribers.
    ///
    /// `IconThemeChanged` is published even when `name` is already active,
    /// so views that loaded icons before the switch reload them.
    ///
    /// # Arguments
    ///
    /// * `name` - Theme directory name to activate.
    pub fn set_icon_theme_name(&self, name: &str) {
        *self.icon_theme_name.write() = Some(name.to_string());

        let notified = self.broadcast_event(&AppStateEvent::IconThemeChanged(name.to_string()));
        debug!(
            "AppState: Icon theme set to '{}', {} subscribers notified",
            name, notified
        );
    }

    /// Asks every open view to re-evaluate its style.
    pub fn request_style_refresh(&self) {
        let notified = self.broadcast_event(&AppStateEvent::StyleChanged);
        debug!("AppState: Style refresh sent to {} subscribers", notified);
    }

    /// Tells every open view to apply freshly saved settings.
    ///
    /// # Arguments
    ///
    /// * `settings` - The settings views should now reflect.
    pub fn apply_settings(&self, settings: &UserSettings) {
        let notified =
            self.broadcast_event(&AppStateEvent::SettingsApplied(settings.clone()));
        debug!("AppState: Settings applied to {} subscribers", notified);
    }

    /// Subscribes to application state changes.
    ///
    /// # Returns
    ///
    /// A receiver for state change events. Dropping it unsubscribes.
    pub fn subscribe(&self) -> Receiver<AppStateEvent> {
        debug!("AppState: New subscription created");

        let (tx, rx) = unbounded();
        self.subscribers.write().push(tx);

        rx
    }
}

/// Trait for views that react to application state changes.
///
/// Each view decides for itself how to re-render; the state only tells it
/// what happened.
pub trait StateObserver {
    /// Handles a state change event.
    ///
    /// # Arguments
    ///
    /// * `event` - The state change event to handle.
    fn handle_state_change(&mut self, event: AppStateEvent);

    /// Handles every event already queued on `receiver` without blocking.
    ///
    /// # Returns
    ///
    /// The number of events handled.
    fn process_pending(&mut self, receiver: &Receiver<AppStateEvent>) -> usize {
        let mut handled = 0;
        while let Ok(event) = receiver.try_recv() {
            self.handle_state_change(event);
            handled += 1;
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{Color, UserSettings},
        state::{AppState, AppStateEvent, StateObserver},
    };

    #[derive(Default)]
    struct RecordingView {
        background: Option<Color>,
        style_refreshes: usize,
        icon_themes: Vec<String>,
    }

    impl StateObserver for RecordingView {
        fn handle_state_change(&mut self, event: AppStateEvent) {
            match event {
                AppStateEvent::IconThemeChanged(name) => self.icon_themes.push(name),
                AppStateEvent::StyleChanged => self.style_refreshes += 1,
                AppStateEvent::SettingsApplied(settings) => {
                    self.background = Some(settings.background_for(false));
                }
                AppStateEvent::LastWindowClosed => {}
            }
        }
    }

    #[test]
    fn test_app_state_creation() {
        let app_state = AppState::new(&UserSettings::default());

        assert_eq!(app_state.window_count(), 0);
        assert!(app_state.icon_theme_name().is_none());
    }

    #[test]
    fn test_fallback_theme_seeds_icon_theme_name() {
        let settings = UserSettings {
            use_fallback_icon_theme: true,
            fallback_icon_theme: "Papirus".to_string(),
            ..UserSettings::default()
        };

        let app_state = AppState::new(&settings);
        assert_eq!(app_state.icon_theme_name().as_deref(), Some("Papirus"));
    }

    #[test]
    fn test_window_counting() {
        let app_state = AppState::new(&UserSettings::default());
        let receiver = app_state.subscribe();

        assert_eq!(app_state.add_window(), 1);
        assert_eq!(app_state.add_window(), 2);
        assert_eq!(app_state.remove_window(), 1);
        assert!(receiver.try_recv().is_err());

        assert_eq!(app_state.remove_window(), 0);
        assert_eq!(receiver.try_recv(), Ok(AppStateEvent::LastWindowClosed));

        // Extra removals saturate and stay silent
        assert_eq!(app_state.remove_window(), 0);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_set_icon_theme_name_notifies_every_time() {
        let app_state = AppState::new(&UserSettings::default());
        let receiver = app_state.subscribe();

        app_state.set_icon_theme_name("Faenza");
        app_state.set_icon_theme_name("Faenza");

        assert_eq!(app_state.icon_theme_name().as_deref(), Some("Faenza"));
        for _ in 0..2 {
            assert_eq!(
                receiver.try_recv(),
                Ok(AppStateEvent::IconThemeChanged("Faenza".to_string()))
            );
        }
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_broadcast_reaches_every_observer() {
        let app_state = AppState::new(&UserSettings::default());

        let first = app_state.subscribe();
        let second = app_state.subscribe();
        let mut first_view = RecordingView::default();
        let mut second_view = RecordingView::default();

        app_state.set_icon_theme_name("Crisp");
        app_state.request_style_refresh();
        app_state.apply_settings(&UserSettings::default());

        assert_eq!(first_view.process_pending(&first), 3);
        assert_eq!(second_view.process_pending(&second), 3);
        assert_eq!(first_view.icon_themes, vec!["Crisp".to_string()]);
        assert_eq!(second_view.style_refreshes, 1);
        assert_eq!(second_view.background, Some(Color::WHITE));
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let app_state = AppState::new(&UserSettings::default());

        let kept = app_state.subscribe();
        drop(app_state.subscribe());

        app_state.request_style_refresh();
        assert_eq!(app_state.subscribers.read().len(), 1);
        assert_eq!(kept.try_recv(), Ok(AppStateEvent::StyleChanged));
    }
}
