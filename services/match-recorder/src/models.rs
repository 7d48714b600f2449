use crate::store::MatchRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveMatchResponse {
    pub ok: bool,
    pub stored: MatchRecord,
    pub count: usize,
}
