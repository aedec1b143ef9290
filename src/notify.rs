//! Desktop notification for the end of a speaker's time.
//!
//! Everything here is best effort: browsers without the Notification API,
//! or users who deny permission, simply get no notification.

use crate::config::{NOTIFICATION_BODY, NOTIFICATION_ICON, NOTIFICATION_TITLE};
use log::{debug, info, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationOptions, NotificationPermission};

fn is_supported() -> bool {
    js_sys::Reflect::has(&gloo_utils::window(), &JsValue::from_str("Notification"))
        .unwrap_or(false)
}

/// Ask for permission if the user has not decided yet, and report whether
/// notifications may be shown.
pub async fn request_permission() -> bool {
    if !is_supported() {
        debug!("Notification API not available");
        return false;
    }

    if Notification::permission() == NotificationPermission::Default {
        match Notification::request_permission() {
            Ok(promise) => {
                if let Err(e) = JsFuture::from(promise).await {
                    warn!("Notification permission request failed: {:?}", e);
                }
            }
            Err(e) => warn!("Could not request notification permission: {:?}", e),
        }
    }

    let granted = Notification::permission() == NotificationPermission::Granted;
    info!("Notifications {}", if granted { "enabled" } else { "disabled" });
    granted
}

pub fn notify_time_up() {
    let options = NotificationOptions::new();
    options.set_body(NOTIFICATION_BODY);
    options.set_icon(NOTIFICATION_ICON);

    if let Err(e) = Notification::new_with_options(NOTIFICATION_TITLE, &options) {
        warn!("Failed to show notification: {:?}", e);
    }
}
