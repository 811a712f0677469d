//! Seeds the category taxonomy and a handful of sample ACP server listings.
//!
//! Safe to re-run: categories and sample servers are upserted by slug, so
//! reseeding refreshes display metadata without duplicating rows.

use chrono::Utc;
use entity::sea_orm_active_enums::{ServerStatus, Tier};
use migration::{Migrator, MigratorTrait, OnConflict};
use sea_orm::{ActiveValue, ConnectOptions, Database, DatabaseConnection, EntityTrait};
use thiserror::Error;

#[derive(Error, Debug)]
enum SeedError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

struct CategorySeed {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
    sort_order: i32,
}

struct ServerSeed {
    slug: &'static str,
    name: &'static str,
    description: &'static str,
    website: &'static str,
    github_url: &'static str,
    category_slug: &'static str,
    tags: &'static [&'static str],
    protocol_support: &'static [&'static str],
    tier: Tier,
    featured: bool,
    stars: i32,
    downloads: i32,
}

const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: "Agent Infrastructure & APIs",
        slug: "agent-infrastructure-apis",
        description: "Core infrastructure for building and deploying AI agents, including APIs, frameworks, and foundational tools.",
        icon: "⚙️",
        color: "#3b82f6",
        sort_order: 1,
    },
    CategorySeed {
        name: "Data, Intelligence & Automation",
        slug: "data-intelligence-automation",
        description: "Data processing, machine learning, and automation tools for intelligent agent behavior.",
        icon: "🧠",
        color: "#8b5cf6",
        sort_order: 2,
    },
    CategorySeed {
        name: "Security, Identity & Trust",
        slug: "security-identity-trust",
        description: "Security frameworks, identity management, and trust mechanisms for secure agent interactions.",
        icon: "🔒",
        color: "#ef4444",
        sort_order: 3,
    },
    CategorySeed {
        name: "Commerce & Transaction Layer",
        slug: "commerce-transaction-layer",
        description: "Payment processing, transaction management, and commerce-specific agent capabilities.",
        icon: "💳",
        color: "#10b981",
        sort_order: 4,
    },
    CategorySeed {
        name: "CMS & Content Agents",
        slug: "cms-content-agents",
        description: "Content management systems and agents for content creation, curation, and publishing.",
        icon: "📝",
        color: "#f59e0b",
        sort_order: 5,
    },
    CategorySeed {
        name: "Design, Marketing & Creative Agents",
        slug: "design-marketing-creative-agents",
        description: "Design tools, marketing automation, and creative AI agents for visual and creative tasks.",
        icon: "🎨",
        color: "#ec4899",
        sort_order: 6,
    },
    CategorySeed {
        name: "Productivity & Workflow Agents",
        slug: "productivity-workflow-agents",
        description: "Productivity tools and workflow automation agents for business processes.",
        icon: "⚡",
        color: "#06b6d4",
        sort_order: 7,
    },
    CategorySeed {
        name: "Collaboration & Governance",
        slug: "collaboration-governance",
        description: "Collaboration platforms, governance frameworks, and team coordination agents.",
        icon: "🤝",
        color: "#84cc16",
        sort_order: 8,
    },
    CategorySeed {
        name: "Banking & Financial Agents",
        slug: "banking-financial-agents",
        description: "Specialized agents for banking, financial services, and fintech applications.",
        icon: "🏦",
        color: "#6366f1",
        sort_order: 9,
    },
    CategorySeed {
        name: "Insurance & Risk Agents",
        slug: "insurance-risk-agents",
        description: "Insurance processing, risk assessment, and actuarial agents.",
        icon: "🛡️",
        color: "#f97316",
        sort_order: 10,
    },
    CategorySeed {
        name: "E-Commerce & Retail Agents",
        slug: "ecommerce-retail-agents",
        description: "E-commerce platforms, retail automation, and commerce-specific agents.",
        icon: "🛒",
        color: "#14b8a6",
        sort_order: 11,
    },
    CategorySeed {
        name: "Legal & Compliance Agents",
        slug: "legal-compliance-agents",
        description: "Legal research, compliance monitoring, and regulatory agents.",
        icon: "⚖️",
        color: "#64748b",
        sort_order: 12,
    },
];

const SERVERS: &[ServerSeed] = &[
    ServerSeed {
        slug: "stripe-acp-server",
        name: "Stripe ACP Server",
        description: "Official Stripe integration for Agentic Commerce Protocol. Process payments, manage subscriptions, and handle commerce transactions through AI agents.",
        website: "https://stripe.com",
        github_url: "https://github.com/stripe/acp-server",
        category_slug: "commerce-transaction-layer",
        tags: &["payments", "subscriptions", "commerce", "api"],
        protocol_support: &["ACP v0.3", "MCP"],
        tier: Tier::Featured,
        featured: true,
        stars: 2847,
        downloads: 15420,
    },
    ServerSeed {
        slug: "openai-whisper-acp",
        name: "OpenAI Whisper ACP",
        description: "Speech-to-text agent using OpenAI's Whisper model. Convert audio files and real-time speech to text with high accuracy.",
        website: "https://openai.com/research/whisper",
        github_url: "https://github.com/openai/whisper",
        category_slug: "data-intelligence-automation",
        tags: &["speech-to-text", "audio", "ml", "transcription"],
        protocol_support: &["ACP v0.3", "MCP", "LangGraph"],
        tier: Tier::Pro,
        featured: true,
        stars: 45672,
        downloads: 89234,
    },
    ServerSeed {
        slug: "github-copilot-acp",
        name: "GitHub Copilot ACP",
        description: "AI-powered coding assistant integrated with ACP. Get intelligent code suggestions, refactoring, and debugging assistance.",
        website: "https://github.com/features/copilot",
        github_url: "https://github.com/github/copilot-acp",
        category_slug: "agent-infrastructure-apis",
        tags: &["coding", "ai-assistant", "development", "ide"],
        protocol_support: &["ACP v0.3", "MCP"],
        tier: Tier::Pro,
        featured: true,
        stars: 12345,
        downloads: 67890,
    },
    ServerSeed {
        slug: "anthropic-claude-acp",
        name: "Anthropic Claude ACP",
        description: "Advanced AI assistant for complex reasoning, analysis, and creative tasks. Built for safety and helpfulness.",
        website: "https://anthropic.com/claude",
        github_url: "https://github.com/anthropics/claude-acp",
        category_slug: "data-intelligence-automation",
        tags: &["llm", "reasoning", "analysis", "safety"],
        protocol_support: &["ACP v0.3", "MCP", "LangGraph"],
        tier: Tier::Pro,
        featured: true,
        stars: 9876,
        downloads: 54321,
    },
    ServerSeed {
        slug: "slack-bot-acp",
        name: "Slack Bot ACP",
        description: "Enterprise communication agent for Slack. Automate workflows, manage notifications, and integrate with business tools.",
        website: "https://api.slack.com/bot-users",
        github_url: "https://github.com/slackapi/slack-bot-acp",
        category_slug: "collaboration-governance",
        tags: &["slack", "communication", "automation", "workflow"],
        protocol_support: &["ACP v0.3", "MCP"],
        tier: Tier::Free,
        featured: false,
        stars: 5432,
        downloads: 32109,
    },
];

#[tokio::main]
async fn main() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| SeedError::MissingEnvVar("DATABASE_URL".to_string()))?;

    let mut opt = ConnectOptions::new(&database_url);
    opt.sqlx_logging(false);
    let db = Database::connect(opt).await?;
    Migrator::up(&db, None).await?;

    tracing::info!("Starting database seed");

    for category in CATEGORIES {
        upsert_category(&db, category).await?;
        tracing::info!("Created category: {}", category.name);
    }

    for server in SERVERS {
        if upsert_server(&db, server).await? {
            tracing::info!("Created ACP server: {}", server.name);
        } else {
            tracing::warn!(
                "Skipping server {}: category {} not found",
                server.name,
                server.category_slug
            );
        }
    }

    tracing::info!("Database seeding completed");
    Ok(())
}

async fn upsert_category(
    db: &DatabaseConnection,
    seed: &CategorySeed,
) -> Result<(), sea_orm::DbErr> {
    entity::prelude::Category::insert(entity::category::ActiveModel {
        slug: ActiveValue::Set(seed.slug.to_string()),
        name: ActiveValue::Set(seed.name.to_string()),
        description: ActiveValue::Set(seed.description.to_string()),
        icon: ActiveValue::Set(seed.icon.to_string()),
        color: ActiveValue::Set(seed.color.to_string()),
        sort_order: ActiveValue::Set(seed.sort_order),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::column(entity::category::Column::Slug)
            .update_columns([
                entity::category::Column::Name,
                entity::category::Column::Description,
                entity::category::Column::Icon,
                entity::category::Column::Color,
                entity::category::Column::SortOrder,
            ])
            .to_owned(),
    )
    .exec(db)
    .await?;

    Ok(())
}

/// Upserts a sample server; returns false when its category is missing.
async fn upsert_server(
    db: &DatabaseConnection,
    seed: &ServerSeed,
) -> Result<bool, sea_orm::DbErr> {
    use sea_orm::{ColumnTrait, QueryFilter};

    let Some(category) = entity::prelude::Category::find()
        .filter(entity::category::Column::Slug.eq(seed.category_slug))
        .one(db)
        .await?
    else {
        return Ok(false);
    };

    entity::prelude::AcpServer::insert(entity::acp_server::ActiveModel {
        slug: ActiveValue::Set(seed.slug.to_string()),
        name: ActiveValue::Set(seed.name.to_string()),
        description: ActiveValue::Set(seed.description.to_string()),
        website: ActiveValue::Set(Some(seed.website.to_string())),
        github_url: ActiveValue::Set(Some(seed.github_url.to_string())),
        logo_url: ActiveValue::Set(None),
        primary_category_id: ActiveValue::Set(category.id),
        tags: ActiveValue::Set(serde_json::json!(seed.tags)),
        protocol_support: ActiveValue::Set(serde_json::json!(seed.protocol_support)),
        api_endpoint: ActiveValue::Set(None),
        api_key_required: ActiveValue::Set(false),
        submitter_name: ActiveValue::Set(None),
        submitter_email: ActiveValue::Set(None),
        submitter_company: ActiveValue::Set(None),
        status: ActiveValue::Set(ServerStatus::Active),
        tier: ActiveValue::Set(seed.tier),
        featured: ActiveValue::Set(seed.featured),
        verified: ActiveValue::Set(true),
        stars: ActiveValue::Set(seed.stars),
        downloads: ActiveValue::Set(seed.downloads),
        custom_profile: ActiveValue::Set(seed.tier.is_premium()),
        lead_generation: ActiveValue::Set(seed.tier.is_premium()),
        analytics_enabled: ActiveValue::Set(seed.tier.is_premium()),
        published_at: ActiveValue::Set(Some(Utc::now())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::column(entity::acp_server::Column::Slug)
            .update_columns([
                entity::acp_server::Column::Name,
                entity::acp_server::Column::Description,
                entity::acp_server::Column::Website,
                entity::acp_server::Column::GithubUrl,
                entity::acp_server::Column::PrimaryCategoryId,
                entity::acp_server::Column::Tags,
                entity::acp_server::Column::ProtocolSupport,
                entity::acp_server::Column::Tier,
                entity::acp_server::Column::Featured,
                entity::acp_server::Column::Stars,
                entity::acp_server::Column::Downloads,
            ])
            .to_owned(),
    )
    .exec(db)
    .await?;

    Ok(true)
}
