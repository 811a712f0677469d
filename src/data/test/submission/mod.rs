use crate::{data::submission::SubmissionRepository, model::submission::CreateSubmissionParams};
use entity::sea_orm_active_enums::{PaymentStatus, SubmissionStatus, Tier};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod approve;
mod create;

fn pro_submission_params(name: &str, email: &str, category_id: i32) -> CreateSubmissionParams {
    CreateSubmissionParams {
        submitter_name: "Ada".to_string(),
        submitter_email: email.to_string(),
        submitter_company: Some("Acme".to_string()),
        name: name.to_string(),
        description: format!("{} description", name),
        website: None,
        github_url: "https://github.com/example/acp".to_string(),
        category_id,
        tags: vec!["payments".to_string()],
        protocol_support: vec!["ACP v0.3".to_string()],
        selected_tier: Tier::Pro,
    }
}
