//! Explicit page initialisation
//!
//! Nothing runs when the module is loaded. The page starts a
//! [`PageLifecycle`] once, which wires the behaviours that act on their own
//! (the banner timers and the navigation toggle) as soon as the document has
//! been parsed. The confirmation gate and the image preview are called from
//! markup event attributes instead.

use std::cell::Cell;

use log::{error, info};

use crate::alerts::schedule_alert_dismissal;
use crate::config::BehaviorConfig;
use crate::dom::{DomDocument, ReadySignal, TimerScheduler};
use crate::error::{WebError, WebResult};
use crate::nav::attach_nav_toggle;

/// What `init_page` wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSetup {
    /// Banners scheduled for dismissal.
    pub alerts_scheduled: usize,
    /// Whether the navigation toggle received a click handler.
    pub nav_toggle_attached: bool,
}

/// Wire the self-running behaviours onto `page`.
///
/// Wiring twice attaches a second click handler; use [`PageLifecycle`] to
/// guard against repeated initialisation.
pub fn init_page<P>(page: &P, config: &BehaviorConfig) -> WebResult<PageSetup>
where
    P: DomDocument + TimerScheduler + Clone + 'static,
{
    config.validate()?;
    wire(page, config)
}

fn wire<P>(page: &P, config: &BehaviorConfig) -> WebResult<PageSetup>
where
    P: DomDocument + TimerScheduler + Clone + 'static,
{
    let setup = PageSetup {
        alerts_scheduled: schedule_alert_dismissal(page, &config.alerts)?,
        nav_toggle_attached: attach_nav_toggle(page, &config.nav),
    };
    info!(
        "Page behaviours ready: {} banner(s) scheduled, nav toggle {}",
        setup.alerts_scheduled,
        if setup.nav_toggle_attached { "attached" } else { "absent" }
    );
    Ok(setup)
}

/// Whether the page behaviours have been started.
#[derive(Debug, Default)]
pub struct PageLifecycle {
    started: Cell<bool>,
}

impl PageLifecycle {
    /// A lifecycle that has not started yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `start` has succeeded.
    pub fn is_started(&self) -> bool {
        self.started.get()
    }

    /// Validate `config` and wire the page once the document is parsed.
    ///
    /// Returns `Some(setup)` when wiring ran immediately and `None` when it
    /// was deferred to `DOMContentLoaded`; failures in deferred wiring are
    /// logged. Only the first successful call wires anything; later calls
    /// fail with a configuration error.
    pub fn start<P>(&self, page: &P, config: BehaviorConfig) -> WebResult<Option<PageSetup>>
    where
        P: DomDocument + TimerScheduler + ReadySignal + Clone + 'static,
    {
        config.validate()?;
        if self.started.replace(true) {
            return Err(WebError::Config(
                "page behaviours are already initialised".to_string(),
            ));
        }

        if page.is_ready() {
            return wire(page, &config).map(Some);
        }

        let ready_page = page.clone();
        page.on_content_loaded(Box::new(move || {
            if let Err(e) = wire(&ready_page, &config) {
                error!("Page initialisation failed: {e}");
            }
        }));
        Ok(None)
    }
}
