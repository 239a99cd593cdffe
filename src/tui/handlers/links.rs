//! Link actions: open in the system browser, copy to the clipboard.

use crate::tui::app::App;

/// Open `url` with the system handler and report the outcome in the status line.
pub(super) fn open_link(app: &mut App, url: &str) {
    match opener::open_browser(url) {
        Ok(()) => {
            log::info!("Opened {}", url);
            app.set_status(format!("Opened {}", url));
        }
        Err(e) => {
            log::warn!("Failed to open {}: {}", url, e);
            app.set_error(format!("Could not open link: {}", e));
        }
    }
}

/// Copy the selected link, if any, to the clipboard.
pub(super) fn copy_selected_link(app: &mut App) {
    let Some(url) = app.page().selected_link().map(str::to_string) else {
        app.set_error("Select a link to copy");
        return;
    };
    match arboard::Clipboard::new().and_then(|mut c| c.set_text(url.clone())) {
        Ok(()) => app.set_status(format!("Copied {}", url)),
        Err(e) => {
            log::warn!("Clipboard unavailable: {}", e);
            app.set_error(format!("Could not copy: {}", e));
        }
    }
}
