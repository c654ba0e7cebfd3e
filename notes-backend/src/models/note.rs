use serde::{Deserialize, Serialize};

/// A single note record. Ids are decimal strings assigned by the store,
/// never supplied by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
    pub important: bool,
}

/// Request body for POST /api/notes. Both fields are optional in the wire
/// format; validation and defaulting happen in the store.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}
