use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Paid service level for a listing.
///
/// Integer-backed so that `ORDER BY tier DESC` sorts featured above pro above
/// standard above free without a custom case expression.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[sea_orm(num_value = 0)]
    Free,
    #[sea_orm(num_value = 1)]
    Standard,
    #[sea_orm(num_value = 2)]
    Pro,
    #[sea_orm(num_value = 3)]
    Featured,
}

impl Tier {
    /// Whether this tier unlocks the premium listing features
    /// (custom profile, lead generation, analytics).
    pub fn is_premium(self) -> bool {
        matches!(self, Tier::Pro | Tier::Featured)
    }

    /// Parses the lowercase wire name of a tier.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "free" => Some(Tier::Free),
            "standard" => Some(Tier::Standard),
            "pro" => Some(Tier::Pro),
            "featured" => Some(Tier::Featured),
            _ => None,
        }
    }

    /// Lowercase wire name of the tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Standard => "standard",
            Tier::Pro => "pro",
            Tier::Featured => "featured",
        }
    }
}

/// Lifecycle status of an ACP server listing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "active")]
    Active,
}

/// Lifecycle status of a job posting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[sea_orm(string_value = "payment_pending")]
    PaymentPending,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "published")]
    Published,
}

/// Whether a paid listing has a completed payment behind it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "unpaid")]
    Unpaid,
    #[sea_orm(string_value = "paid")]
    Paid,
}

/// Review status of an ACP submission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
}
