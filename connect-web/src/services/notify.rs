//! User-facing notices

/// Shows an informational message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `window.alert` notifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::warn!("[NOTIFY] alert failed: {:?}", e);
                }
            }
            None => log::info!("[NOTIFY] {}", message),
        }
    }
}
