//! Auto-dismiss for flash banners
//!
//! Banners present when the page is initialised fade out and are removed on
//! independent timers. Banners inserted later are not tracked.

use log::{debug, warn};

use crate::config::AlertConfig;
use crate::dom::{DomDocument, DomElement, TimerScheduler};
use crate::error::WebResult;

/// Schedule the fade and removal of every banner matching the configured
/// selector. Returns the number of banners scheduled.
pub fn schedule_alert_dismissal<P>(page: &P, config: &AlertConfig) -> WebResult<usize>
where
    P: DomDocument + TimerScheduler + Clone + 'static,
{
    let alerts = page.query_selector_all(&config.selector)?;
    debug!(
        "Dismissing {} banner(s) matching {:?} after {}ms",
        alerts.len(),
        config.selector,
        config.dismiss_after_ms
    );

    for alert in &alerts {
        let scheduler = page.clone();
        let alert = alert.clone();
        let fade_out_ms = config.fade_out_ms;
        page.schedule(
            config.dismiss_after_ms,
            Box::new(move || {
                if let Err(e) = alert.set_style("opacity", "0") {
                    warn!("Failed to fade banner: {e}");
                }
                scheduler.schedule(fade_out_ms, Box::new(move || alert.remove()));
            }),
        );
    }

    Ok(alerts.len())
}
