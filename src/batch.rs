//! Concurrent probing of many files.
//!
//! Each probe is blocking file I/O, so it runs on tokio's blocking pool. At
//! most `jobs` probes are in flight at once; reports come back in input order.

use std::path::PathBuf;

use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::probe::probe_path_limited;
use crate::report::ProbeReport;

/// Probe every path, reading at most `max_bytes` from each.
pub async fn probe_paths(paths: &[PathBuf], max_bytes: u64, jobs: usize) -> Vec<ProbeReport> {
    let jobs = jobs.max(1);

    // Placeholders for tasks that never report back (panics)
    let mut reports: Vec<ProbeReport> = paths
        .iter()
        .map(|path| ProbeReport::failed(path, "probe task did not complete"))
        .collect();

    let mut in_flight: JoinSet<(usize, ProbeReport)> = JoinSet::new();

    for (index, path) in paths.iter().enumerate() {
        if in_flight.len() >= jobs {
            if let Some(done) = in_flight.join_next().await {
                record(&mut reports, done);
            }
        }

        let path = path.clone();
        in_flight.spawn_blocking(move || {
            let result = probe_path_limited(&path, max_bytes);
            if let Err(ref e) = result {
                debug!(path = %path.display(), error = %e, "Probe failed");
            }
            (index, ProbeReport::new(&path, result))
        });
    }

    while let Some(done) = in_flight.join_next().await {
        record(&mut reports, done);
    }

    reports
}

fn record(
    reports: &mut [ProbeReport],
    done: Result<(usize, ProbeReport), tokio::task::JoinError>,
) {
    match done {
        Ok((index, report)) => reports[index] = report,
        Err(e) => error!("Probe task failed: {}", e),
    }
}
