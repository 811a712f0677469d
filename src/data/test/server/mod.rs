use crate::{
    data::server::AcpServerRepository,
    model::server::{CreateServerParams, ServerFilter},
};
use entity::sea_orm_active_enums::{ServerStatus, Tier};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod search;

/// Baseline parameters for an active free-tier listing.
fn active_server_params(slug: &str, name: &str, category_id: i32) -> CreateServerParams {
    CreateServerParams {
        slug: slug.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        website: None,
        github_url: None,
        logo_url: None,
        primary_category_id: category_id,
        tags: Vec::new(),
        protocol_support: vec!["ACP v0.3".to_string()],
        api_endpoint: None,
        api_key_required: false,
        submitter_name: None,
        submitter_email: None,
        submitter_company: None,
        status: ServerStatus::Active,
        tier: Tier::Free,
        featured: false,
        verified: false,
        stars: 0,
        downloads: 0,
        custom_profile: false,
        lead_generation: false,
        analytics_enabled: false,
        published_at: Some(chrono::Utc::now()),
    }
}
