//! Background worker thread: record fetches run here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The UI
//! never blocks on the network; it keeps drawing the loading notice until
//! `RecordsLoaded` arrives.

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use revchart_core::config::SourceConfig;
use revchart_core::data::{fetch_logged, SourceError};
use revchart_core::domain::RevenueRecord;

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    FetchRecords { source: SourceConfig },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    RecordsLoaded {
        source: String,
        result: Result<Vec<RevenueRecord>, SourceError>,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("revchart-worker".into())
        .spawn(move || worker_loop(rx, tx))
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::FetchRecords { source }) => {
                let response = handle_fetch(&source);
                if tx.send(response).is_err() {
                    // UI has gone away.
                    break;
                }
            }
        }
    }
    debug!("worker stopped");
}

fn handle_fetch(config: &SourceConfig) -> WorkerResponse {
    let source = config.build();
    let result = fetch_logged(source.as_ref());
    info!(
        source = source.name(),
        ok = result.is_ok(),
        "fetch finished"
    );
    WorkerResponse::RecordsLoaded {
        source: source.name().to_string(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn fetch_sample_round_trip_through_worker() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_worker(cmd_rx, resp_tx).unwrap();

        cmd_tx
            .send(WorkerCommand::FetchRecords {
                source: SourceConfig::Sample,
            })
            .unwrap();

        let WorkerResponse::RecordsLoaded { source, result } =
            resp_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(source, "built-in M7 sample");
        assert_eq!(result.unwrap().len(), 35);

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn failing_source_is_reported_not_fatal() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_worker(cmd_rx, resp_tx).unwrap();

        cmd_tx
            .send(WorkerCommand::FetchRecords {
                source: SourceConfig::Json {
                    path: "/definitely/not/here.json".into(),
                },
            })
            .unwrap();

        let WorkerResponse::RecordsLoaded { result, .. } =
            resp_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(result, Err(SourceError::Io(_))));

        drop(cmd_tx);
        handle.join().unwrap();
    }
}
