//! Image asset seam. Loads are fire-and-forget: a request eventually
//! resolves to a cached handle or fails permanently, and the simulation
//! never waits on either. A missing handle only degrades visuals; the
//! renderer substitutes a colored placeholder.

use std::collections::HashMap;

use log::warn;

/// Opaque reference to a decoded image owned by the render backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);

pub trait ImageStore {
    /// Begin loading. Idempotent; re-requesting a failed path does not
    /// retry it.
    fn request(&mut self, path: &str);

    /// The cached handle, if the load has completed successfully.
    fn get(&self, path: &str) -> Option<ImageHandle>;
}

/// Store with no backing loader; every lookup misses. Keeps headless
/// runs honest about the absent-handle path.
#[derive(Debug, Default)]
pub struct NullImages;

impl ImageStore for NullImages {
    fn request(&mut self, _path: &str) {}

    fn get(&self, _path: &str) -> Option<ImageHandle> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Pending,
    Ready(ImageHandle),
    Failed,
}

/// In-memory store where completions are driven by the host (or a test)
/// calling [`MemoryImages::resolve`] / [`MemoryImages::fail`].
#[derive(Debug, Default)]
pub struct MemoryImages {
    entries: HashMap<String, LoadState>,
    next_handle: u64,
}

impl MemoryImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete a pending load with a fresh handle.
    pub fn resolve(&mut self, path: &str) -> ImageHandle {
        let handle = ImageHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.insert(path.to_string(), LoadState::Ready(handle));
        handle
    }

    /// Mark a load permanently failed. Logged once; later requests for
    /// the path stay failed.
    pub fn fail(&mut self, path: &str) {
        let state = self
            .entries
            .entry(path.to_string())
            .or_insert(LoadState::Pending);
        if *state != LoadState::Failed {
            warn!("image load failed, using placeholder: {path}");
            *state = LoadState::Failed;
        }
    }
}

impl ImageStore for MemoryImages {
    fn request(&mut self, path: &str) {
        self.entries
            .entry(path.to_string())
            .or_insert(LoadState::Pending);
    }

    fn get(&self, path: &str) -> Option<ImageHandle> {
        match self.entries.get(path) {
            Some(LoadState::Ready(handle)) => Some(*handle),
            _ => None,
        }
    }
}
