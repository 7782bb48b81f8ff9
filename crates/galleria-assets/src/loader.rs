//! The resource loading pipeline
//!
//! `load_all` fans one tokio task out per descriptor and collects
//! completions over a channel, so progress updates and observer
//! notifications are serialized even though the loads themselves run
//! concurrently. The first failure resolves the whole call; sibling loads
//! are not cancelled, their eventual results are simply discarded.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::descriptor::{ResourceDescriptor, ResourceKind};
use crate::error::LoadError;
use crate::fetch::Transport;
use crate::progress::LoadProgress;
use crate::table::{Asset, ResourceTable};
use crate::{audio, font, model, texture};

type ProgressObserver = Box<dyn FnMut(&LoadProgress) + Send>;
type LoadOutcome = Result<(ResourceDescriptor, Asset), LoadError>;

/// Loads a batch of heterogeneous resources and owns the resulting table.
///
/// An owned instance with an explicit lifecycle: construct, `load_all`
/// once, read via `get`/`has`, `dispose` when torn down. Intended to be
/// invoked once per application lifetime; calling `load_all` again resets
/// the progress counters for the new batch.
pub struct ResourceLoader {
    transport: Arc<Transport>,
    table: ResourceTable,
    progress: LoadProgress,
    observer: Option<ProgressObserver>,
}

impl ResourceLoader {
    /// Create a loader resolving relative locations against `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self::with_transport(Transport::new(base_path))
    }

    /// Create a loader with an injected transport.
    pub fn with_transport(transport: Transport) -> Self {
        Self {
            transport: Arc::new(transport),
            table: ResourceTable::new(),
            progress: LoadProgress::empty(),
            observer: None,
        }
    }

    /// Register the single-slot progress observer, invoked synchronously on
    /// every item completion. It must not block: every later completion in
    /// the batch waits behind it.
    pub fn set_progress_observer(&mut self, observer: impl FnMut(&LoadProgress) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Load every descriptor concurrently. Resolves once all have decoded,
    /// or with the first failure; on failure the table keeps only the items
    /// that completed before the error was observed.
    pub async fn load_all(
        &mut self,
        descriptors: &[ResourceDescriptor],
    ) -> Result<(), LoadError> {
        let total = descriptors.len();
        self.progress = LoadProgress::start(total);
        info!("loading {total} resources");

        let (tx, rx) = mpsc::channel(total.max(1));
        for descriptor in descriptors {
            let transport = Arc::clone(&self.transport);
            let descriptor = descriptor.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = load_one(&transport, &descriptor)
                    .await
                    .map(|asset| (descriptor, asset));
                // Receiver may already be gone if a sibling failed first.
                let _ = tx.send(result).await;
            });
        }
        drop(tx);

        self.drain_completions(rx).await?;

        info!("all {total} resources loaded");
        Ok(())
    }

    /// Fan-in: apply completions one at a time until the batch is done.
    /// The channel closing before that means a task died without reporting
    /// (a panic before its send); that is a failed load, never a success.
    async fn drain_completions(
        &mut self,
        mut rx: mpsc::Receiver<LoadOutcome>,
    ) -> Result<(), LoadError> {
        while !self.progress.is_done() {
            let Some(outcome) = rx.recv().await else {
                error!(
                    "resource channel closed after {}/{} completions",
                    self.progress.loaded, self.progress.total
                );
                return Err(LoadError::Aborted {
                    loaded: self.progress.loaded,
                    total: self.progress.total,
                });
            };
            let (descriptor, asset) = outcome?;
            self.table.insert(descriptor.name.clone(), asset);
            self.progress.complete(&descriptor.name);
            info!(
                "loaded '{}' ({}/{})",
                descriptor.name, self.progress.loaded, self.progress.total
            );
            if let Some(observer) = self.observer.as_mut() {
                observer(&self.progress);
            }
        }
        Ok(())
    }

    /// The stored asset for `name`, or `None` if its load has not completed.
    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.table.get(name)
    }

    /// Whether `name` has been loaded.
    pub fn has(&self, name: &str) -> bool {
        self.table.has(name)
    }

    /// The kind `name` was loaded as, if present.
    pub fn kind_of(&self, name: &str) -> Option<ResourceKind> {
        self.table.kind_of(name)
    }

    /// The populated resource table.
    pub fn table(&self) -> &ResourceTable {
        &self.table
    }

    /// Snapshot of the current progress.
    pub fn progress(&self) -> &LoadProgress {
        &self.progress
    }

    /// Clear the table and reset progress. Does not cancel in-flight loads;
    /// callers must not dispose while a `load_all` is unresolved.
    pub fn dispose(&mut self) {
        self.table.clear();
        self.progress = LoadProgress::empty();
    }
}

/// Fetch and decode a single resource.
async fn load_one(
    transport: &Transport,
    descriptor: &ResourceDescriptor,
) -> Result<Asset, LoadError> {
    let bytes = transport.fetch(&descriptor.location).await.map_err(|e| {
        error!(
            "transport failed for '{}' at '{}': {e}",
            descriptor.name, descriptor.location
        );
        LoadError::Transport {
            name: descriptor.name.clone(),
            kind: descriptor.kind,
            source: e,
        }
    })?;

    match descriptor.kind {
        ResourceKind::Model => model::decode(descriptor, &bytes).map(Asset::Model),
        ResourceKind::Texture => texture::decode(descriptor, &bytes).map(Asset::Texture),
        ResourceKind::Audio => audio::decode(descriptor, bytes).map(Asset::Audio),
        ResourceKind::Font => font::decode(descriptor, &bytes).map(Asset::Font),
        ResourceKind::Document => serde_json::from_slice(&bytes)
            .map(Asset::Document)
            .map_err(|e| LoadError::Decode {
                name: descriptor.name.clone(),
                kind: descriptor.kind,
                detail: e.to_string(),
            }),
    }
}
