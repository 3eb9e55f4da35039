//! Delete telemetry for a single device over a date/time window.

use tracing::info;
use uuid::Uuid;

use crate::thingsboard::ThingsBoardClient;
use crate::timerange::{to_epoch_millis, DeletionWindow};
use crate::Result;

/// Parameters for one deletion run.
#[derive(Debug, Clone)]
pub struct DeleteRequest<'a> {
    pub device_name: &'a str,
    /// Start date, DD/MM/YYYY.
    pub start_date: &'a str,
    /// Start time, HH:MM (24-hour).
    pub start_time: &'a str,
    /// End date, DD/MM/YYYY.
    pub end_date: &'a str,
    /// End time, HH:MM (24-hour).
    pub end_time: &'a str,
    pub dry_run: bool,
}

/// Outcome of a deletion run.
#[derive(Debug, Clone)]
pub struct DeletionOutcome {
    pub device_id: Uuid,
    pub window: DeletionWindow,
    pub deleted: bool,
}

/// Log in, resolve the device, compute the window and delete its telemetry.
///
/// Steps run strictly in sequence and any failure aborts the rest. With
/// `dry_run` everything up to the deletion call still runs, so the
/// resolved device and range can be inspected.
pub async fn run(client: &ThingsBoardClient, request: DeleteRequest<'_>) -> Result<DeletionOutcome> {
    let token = client.login().await?;
    let device_id = client.get_device_id(&token, request.device_name).await?;

    let window = DeletionWindow::new(
        to_epoch_millis(request.start_date, Some(request.start_time))?,
        to_epoch_millis(request.end_date, Some(request.end_time))?,
    )?;

    if request.dry_run {
        info!(
            device = request.device_name,
            id = %device_id,
            "Dry run, skipping deletion"
        );
        return Ok(DeletionOutcome {
            device_id,
            window,
            deleted: false,
        });
    }

    client.delete_timeseries(&token, device_id, window).await?;

    Ok(DeletionOutcome {
        device_id,
        window,
        deleted: true,
    })
}
