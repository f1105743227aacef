use thiserror::Error;
use web_sys::{window, Storage};

use crate::config;
use crate::funnel::lead_form::QuoteDraft;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("window is not available")]
    NoWindow,
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
    #[error("draft is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

fn local_storage() -> Result<Storage, StorageError> {
    window()
        .ok_or(StorageError::NoWindow)?
        .local_storage()
        .map_err(|e| StorageError::Js(format!("{:?}", e)))?
        .ok_or(StorageError::Unavailable)
}

pub fn load_draft() -> Result<Option<QuoteDraft>, StorageError> {
    let raw = local_storage()?
        .get_item(config::DRAFT_STORAGE_KEY)
        .map_err(|e| StorageError::Js(format!("{:?}", e)))?;
    match raw {
        Some(raw) => Ok(Some(QuoteDraft::from_json(&raw)?)),
        None => Ok(None),
    }
}

/// Blank drafts are not written so a fresh visit leaves storage untouched.
pub fn save_draft(draft: &QuoteDraft) -> Result<(), StorageError> {
    if draft.is_blank() {
        return Ok(());
    }
    let json = draft.to_json()?;
    local_storage()?
        .set_item(config::DRAFT_STORAGE_KEY, &json)
        .map_err(|e| StorageError::Js(format!("{:?}", e)))
}

pub fn clear_draft() -> Result<(), StorageError> {
    local_storage()?
        .remove_item(config::DRAFT_STORAGE_KEY)
        .map_err(|e| StorageError::Js(format!("{:?}", e)))
}
