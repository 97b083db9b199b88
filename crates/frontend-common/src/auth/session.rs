//! Global session-expired handler
//!
//! The client invokes this when a token refresh fails, so unrelated
//! in-flight UI does not need to detect logout individually. An application
//! shell can register its own callback (e.g. to show a re-auth dialog);
//! without one, the browser hard-navigates to the login page.

use crate::config::AuthConfig;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static SESSION_EXPIRED_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Register the callback run when the session expires
pub fn set_session_expired_callback(callback: Rc<dyn Fn()>) {
    SESSION_EXPIRED_CALLBACK.with(|cell| {
        *cell.borrow_mut() = Some(callback);
    });
}

/// Remove the registered callback (falls back to the login redirect)
pub fn clear_session_expired_callback() {
    SESSION_EXPIRED_CALLBACK.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Run the registered callback, or redirect to the login page if none is
/// registered
pub fn notify_session_expired() {
    let handled = SESSION_EXPIRED_CALLBACK.with(|cell| {
        if let Some(callback) = cell.borrow().as_ref() {
            callback();
            true
        } else {
            false
        }
    });

    if !handled {
        redirect_to_login();
    }
}

/// Hard navigation to the login entry point
pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(AuthConfig::LOGIN_PATH).is_err() {
            tracing::warn!("failed to navigate to login page");
        }
    }
}
