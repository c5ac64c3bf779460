//! Display watch background task

use tokio::sync::watch;
use tracing::{debug, info};

use crate::{countdown::Unit, display::DisplaySnapshot};

/// Background task that logs every change written to the page display.
///
/// Returns once the countdown has ended or the display is dropped.
pub async fn display_watch_task(mut display_rx: watch::Receiver<DisplaySnapshot>) {
    info!("Starting display watch task");

    while display_rx.changed().await.is_ok() {
        let snapshot = display_rx.borrow_and_update().clone();

        if snapshot.ended {
            info!("Countdown display replaced with the ended message");
            return;
        }

        debug!(
            "Countdown display: {}d {}h {}m {}s",
            snapshot.slot(Unit::Days),
            snapshot.slot(Unit::Hours),
            snapshot.slot(Unit::Minutes),
            snapshot.slot(Unit::Seconds),
        );
    }

    debug!("Display closed, stopping display watch task");
}
