use crate::error::{fetch_error, parse_error, ReportResult};
use crate::report::models::RawCalendarItem;
use serde::Deserialize;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info};

/// Top-level shape of the calendar payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CalendarPayload {
    body: PayloadBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PayloadBody {
    items: Vec<RawCalendarItem>,
}

/// Run the configured fetch command and parse its stdout as the calendar
/// payload. The subprocess is bounded by a timeout so a stuck fetch fails the
/// run instead of hanging it.
pub async fn fetch_calendar_items(
    command: &str,
    timeout_secs: u64,
) -> ReportResult<Vec<RawCalendarItem>> {
    debug!("Running calendar fetch command: {}", command);

    let output = tokio::time::timeout(
        Duration::from_secs(timeout_secs),
        Command::new("sh").arg("-c").arg(command).output(),
    )
    .await
    .map_err(|_| fetch_error(&format!("Fetch command timed out after {}s", timeout_secs)))?
    .map_err(|e| fetch_error(&format!("Failed to run fetch command: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(fetch_error(&format!(
            "Fetch command exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|_| fetch_error("Fetch command produced non-UTF-8 output"))?;

    let items = parse_payload(&stdout)?;
    info!("Fetched {} calendar items", items.len());
    Ok(items)
}

/// Parse the JSON payload `{Body: {Items: [...]}}`. A missing or malformed
/// shape is fatal; individual malformed items are handled later in the
/// filter, not here.
pub fn parse_payload(payload: &str) -> ReportResult<Vec<RawCalendarItem>> {
    let payload: CalendarPayload = serde_json::from_str(payload)
        .map_err(|e| parse_error(&format!("Invalid calendar payload: {}", e)))?;
    Ok(payload.body.items)
}
