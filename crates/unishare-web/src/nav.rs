//! Mobile navigation toggle

use log::{debug, error};

use crate::config::NavConfig;
use crate::dom::{DomDocument, DomElement};
use crate::error::{WebError, WebResult};

/// Attach the click handler to the toggle control, if the page has one.
///
/// Returns whether a handler was attached. The menu is looked up on each
/// click, not here.
pub fn attach_nav_toggle<P>(page: &P, config: &NavConfig) -> bool
where
    P: DomDocument + Clone + 'static,
{
    let Some(toggle) = page.element_by_id(&config.toggle_id) else {
        debug!("No #{} on this page, navigation toggle not attached", config.toggle_id);
        return false;
    };

    let page = page.clone();
    let menu_id = config.menu_id.clone();
    let active_class = config.active_class.clone();
    toggle.on_click(Box::new(move || {
        if let Err(e) = toggle_menu(&page, &menu_id, &active_class) {
            error!("Navigation toggle failed: {e}");
        }
    }));
    true
}

/// Flip `active_class` on the menu and return whether it is now present.
pub fn toggle_menu<D: DomDocument>(
    document: &D,
    menu_id: &str,
    active_class: &str,
) -> WebResult<bool> {
    let menu = document
        .element_by_id(menu_id)
        .ok_or_else(|| WebError::MissingElement(menu_id.to_string()))?;
    menu.toggle_class(active_class)
}
