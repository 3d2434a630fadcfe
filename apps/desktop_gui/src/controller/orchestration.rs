//! Click queue between the painted sidebar and view-model dispatch.

use std::borrow::Cow;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use sidebar_core::{
    dispatch_action, render, DispatchOutcome, SidebarClick, SidebarTree, SidebarViewModel,
};

pub fn enqueue_click(
    clicks: &Sender<SidebarClick>,
    click: SidebarClick,
    status: &mut Option<String>,
) {
    let action = click.action.name();
    match clicks.try_send(click) {
        Ok(()) => tracing::debug!(action, "queued sidebar click"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(action, "sidebar click queue full; dropping click");
            *status = Some("Sidebar is busy; please retry the click".to_string());
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(action, "sidebar click queue disconnected");
            *status = Some("Sidebar click handling stopped; restart the app".to_string());
        }
    }
}

/// Dispatches every queued click, the first against `tree`, the tree they were
/// made on. After a click changes state the tree is re-rendered, so a click
/// queued behind one that opened the profile form lands on disabled buttons.
/// Returns how many clicks changed state.
pub fn drain_clicks<V>(
    clicks: &Receiver<SidebarClick>,
    tree: &SidebarTree,
    platform: &str,
    vm: &mut V,
) -> usize
where
    V: SidebarViewModel + ?Sized,
{
    let mut current = Cow::Borrowed(tree);
    let mut applied = 0;
    for click in clicks.try_iter() {
        let mut event = click.event();
        let outcome = dispatch_action(&current, &click.action, &mut event, vm);
        tracing::debug!(action = click.action.name(), ?outcome, "dispatched sidebar click");
        if outcome == DispatchOutcome::Applied {
            applied += 1;
            current = Cow::Owned(render(&*vm, platform));
        }
    }
    applied
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
