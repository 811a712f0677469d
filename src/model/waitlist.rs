use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for joining the waitlist.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct JoinWaitlistDto {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tools: Option<String>,
    #[serde(default)]
    pub consent: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JoinWaitlistResponseDto {
    pub success: bool,
    pub message: String,
    pub id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntryDto {
    pub id: i32,
    pub email: String,
    pub tools: Option<String>,
    pub consent: bool,
    pub created_at: DateTime<Utc>,
}

impl WaitlistEntryDto {
    pub fn from_entity(entity: entity::waitlist_entry::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            tools: entity.tools,
            consent: entity.consent,
            created_at: entity.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WaitlistListDto {
    pub success: bool,
    pub count: usize,
    pub entries: Vec<WaitlistEntryDto>,
}
