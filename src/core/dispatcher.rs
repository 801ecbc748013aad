//! Sequential batch dispatch with per-job error isolation
//!
//! Jobs are processed strictly in order, one awaited API call at a time.
//! In tolerant mode a failing job is captured as a failure record and the
//! batch continues; otherwise the first failure aborts the batch.

use crate::conversion::request_builder::build_api_request;
use crate::core::transport::Transport;
use crate::models::job::ScrapeJob;
use crate::models::record::ResultRecord;
use anyhow::Result;
use tracing::{debug, warn};

/// Process a batch of scrape jobs against the given transport
///
/// Returns one record per job, in input order. `continue_on_fail` decides
/// the error policy: when true, a failing job becomes a
/// `{success: false, error}` record and processing continues; when false,
/// the error propagates immediately and no records are returned.
pub async fn process_jobs(
    transport: &dyn Transport,
    jobs: &[ScrapeJob],
    continue_on_fail: bool,
) -> Result<Vec<ResultRecord>> {
    let mut records = Vec::with_capacity(jobs.len());

    for (index, job) in jobs.iter().enumerate() {
        match run_job(transport, job).await {
            Ok(record) => records.push(record),
            Err(e) if continue_on_fail => {
                warn!(index, action = job.action.name(), "job failed: {e}");
                records.push(ResultRecord::failed(e.to_string()));
            }
            Err(e) => {
                return Err(e.context(format!("job {index} ({}) failed", job.action.name())));
            }
        }
    }

    Ok(records)
}

/// Build and execute a single job
async fn run_job(transport: &dyn Transport, job: &ScrapeJob) -> Result<ResultRecord> {
    let request = build_api_request(job)?;
    debug!(
        action = job.action.name(),
        endpoint = request.endpoint,
        url = %job.url,
        "dispatching request"
    );

    let body = transport.fetch(&request).await?;
    Ok(ResultRecord::ok(body))
}
