use crate::wire::{LlmRequest, LlmResponse};
use fs_err as fs;
use serde_json::to_string_pretty;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: Option<PathBuf>,
    pub response: Option<PathBuf>,
}

pub fn tx_dir(root: &Path, tx: Uuid) -> PathBuf {
    root.join(".webwiz").join("tx").join(tx.to_string())
}

/// Where provider calls of one run are recorded, and which halves to keep.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub root: PathBuf,
    pub tx: Uuid,
    pub save_request: bool,
    pub save_response: bool,
}

impl Transcript {
    pub fn new(root: impl Into<PathBuf>, tx: Uuid, save_request: bool, save_response: bool) -> Self {
        Self {
            root: root.into(),
            tx,
            save_request,
            save_response,
        }
    }

    pub fn enabled(&self) -> bool {
        self.save_request || self.save_response
    }

    pub fn dir(&self) -> PathBuf {
        tx_dir(&self.root, self.tx)
    }

    pub fn save_stage(&self, stage: &str, req: &LlmRequest, resp: &LlmResponse) -> anyhow::Result<SavedPaths> {
        let dir = self.dir();
        if self.enabled() {
            fs::create_dir_all(&dir)?;
        }

        let mut request_path = None;
        let mut response_path = None;

        if self.save_request {
            let p = dir.join(format!("{stage}.request.json"));
            fs::write(&p, to_string_pretty(req)?)?;
            request_path = Some(p);
        }

        if self.save_response {
            let p = dir.join(format!("{stage}.response.json"));
            fs::write(&p, to_string_pretty(resp)?)?;
            response_path = Some(p);
        }

        Ok(SavedPaths { dir, request: request_path, response: response_path })
    }
}

pub fn log_saved_paths(stage: &str, saved: &SavedPaths) {
    log::debug!("[{stage}] artifacts directory: {}", saved.dir.display());
    match &saved.request {
        Some(p) => log::debug!("[{stage}] request saved at: {}", p.display()),
        None => log::debug!("[{stage}] request not saved (flag off)"),
    }
    match &saved.response {
        Some(p) => log::debug!("[{stage}] response saved at: {}", p.display()),
        None => log::debug!("[{stage}] response not saved (flag off)"),
    }
}
