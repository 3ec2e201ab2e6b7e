use crate::actions::{neutralize_id, Outcome};
use crate::client::ActivityClient;
use crate::errors::ActionError;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

pub const PARSE_FAILED: &str = "Could not parse file!";
pub const SOME_FAILED: &str = "Failed to load some entries!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub submitted: usize,
    /// Requests answered with 200.
    pub inserted: usize,
    /// Requests answered with any other status.
    pub rejected: usize,
    /// Requests that never completed.
    pub network_failures: usize,
}

impl ImportReport {
    pub fn settled(&self) -> usize {
        self.inserted + self.rejected + self.network_failures
    }
}

fn parse_entries(bytes: &[u8]) -> Result<Vec<Value>, ActionError> {
    serde_json::from_slice::<Vec<Value>>(bytes).map_err(|err| ActionError::Decode(err.to_string()))
}

/// Posts every element of a JSON array file concurrently and waits for all of
/// them to settle.
pub async fn bulk_import(client: &ActivityClient, bytes: &[u8]) -> Result<ImportReport, ActionError> {
    let entries = parse_entries(bytes)?;
    let mut report = ImportReport {
        submitted: entries.len(),
        ..ImportReport::default()
    };

    let mut tasks = JoinSet::new();
    for mut entry in entries {
        neutralize_id(&mut entry);
        let client = client.clone();
        tasks.spawn(async move { client.create(&entry).await.map(|response| response.status()) });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(StatusCode::OK)) => report.inserted += 1,
            Ok(Ok(status)) => {
                debug!(%status, "import entry rejected");
                report.rejected += 1;
            }
            Ok(Err(err)) => {
                warn!("import entry failed: {err}");
                report.network_failures += 1;
            }
            Err(err) => {
                error!("import task did not finish: {err}");
                report.network_failures += 1;
            }
        }
    }

    info!(
        submitted = report.submitted,
        inserted = report.inserted,
        rejected = report.rejected,
        network_failures = report.network_failures,
        "bulk import settled"
    );
    Ok(report)
}

pub async fn import_file(client: &ActivityClient, bytes: &[u8]) -> Outcome {
    match bulk_import(client, bytes).await {
        Ok(report) => import_outcome(&report),
        Err(err) => {
            info!("import file rejected: {err}");
            Outcome::failure(PARSE_FAILED)
        }
    }
}

pub fn import_outcome(report: &ImportReport) -> Outcome {
    let added = format!("Added {} entries.", report.inserted);
    if report.network_failures == 0 {
        Outcome::success(format!("Bulk addition was successful! {added}"))
    } else {
        Outcome {
            refresh: true,
            ..Outcome::failure(format!("{SOME_FAILED} {added}"))
        }
    }
}
