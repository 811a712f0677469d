//! Slug derivation and allocation.
//!
//! Display names become URL-safe slugs. Server listings resolve collisions by
//! appending an incrementing counter checked against the store; job postings
//! append a short random suffix instead and accept it on first attempt.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{data::server::AcpServerRepository, error::AppError};

/// Number of random characters appended to job slugs.
const JOB_SUFFIX_LEN: usize = 6;

/// Upper bound on counter probes when allocating a server slug.
const MAX_SLUG_PROBES: u32 = 100;

/// Derives a URL-safe slug from a display name.
///
/// Lowercases the input, strips characters outside `[a-z0-9\s-]`, collapses
/// whitespace and hyphen runs into single hyphens, and trims leading and
/// trailing hyphens. Returns an empty string when nothing survives.
pub fn slugify(input: &str) -> String {
    let cleaned: String = input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    cleaned
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Generates a short random suffix of lowercase alphanumerics.
pub fn random_suffix(len: usize) -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();

    (0..len)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Builds a job slug from the title and company name.
///
/// The base slug is `slugify("{title}-{company}")` with a random suffix
/// appended; collision probability is treated as acceptably low and not
/// re-verified.
///
/// # Returns
/// - `Ok(String)` - Slug of the form `engineer-acme-x7k2pq`
/// - `Err(AppError::BadRequest)` - Nothing slug-worthy in the input
pub fn job_slug(title: &str, company: &str) -> Result<String, AppError> {
    let base = slugify(&format!("{} {}", title, company));
    if base.is_empty() {
        return Err(AppError::BadRequest(
            "Job title and company name must contain letters or digits".to_string(),
        ));
    }

    Ok(format!("{}-{}", base, random_suffix(JOB_SUFFIX_LEN)))
}

/// Allocates unique server slugs against the entity store.
pub struct SlugAllocator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlugAllocator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Allocates a free slug for a server listing.
    ///
    /// Starts from `slugify(name)` and appends `-1`, `-2`, … until the store
    /// reports the candidate free. A concurrent insert can still win the
    /// race; callers catch the uniqueness violation and re-allocate.
    ///
    /// # Returns
    /// - `Ok(String)` - Unclaimed slug at the time of the check
    /// - `Err(AppError::BadRequest)` - Name normalizes to an empty slug
    /// - `Err(AppError)` - Database error or probe bound exhausted
    pub async fn allocate_server_slug(&self, name: &str) -> Result<String, AppError> {
        let base = slugify(name);
        if base.is_empty() {
            return Err(AppError::BadRequest(
                "Name must contain letters or digits".to_string(),
            ));
        }

        let repo = AcpServerRepository::new(self.db);

        if !repo.slug_exists(&base).await? {
            return Ok(base);
        }

        for counter in 1..=MAX_SLUG_PROBES {
            let candidate = format!("{}-{}", base, counter);
            if !repo.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(AppError::InternalError(format!(
            "Could not allocate a slug for '{}' after {} attempts",
            name, MAX_SLUG_PROBES
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn is_valid_slug(slug: &str) -> bool {
        !slug.is_empty()
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    #[test]
    fn slugify_normalizes_display_names() {
        assert_eq!(slugify("Stripe ACP Server"), "stripe-acp-server");
        assert_eq!(slugify("  Weird -- Name!! v2  "), "weird-name-v2");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn slugify_output_has_no_stray_hyphens() {
        for input in ["A&B  Tools", "--lead--", "x", "Ops: On-Call!"] {
            let slug = slugify(input);
            assert!(is_valid_slug(&slug), "bad slug {:?} from {:?}", slug, input);
        }
    }

    #[test]
    fn job_slug_prefixes_title_and_company() {
        let slug = job_slug("Engineer", "Acme").unwrap();
        assert!(slug.starts_with("engineer-acme-"));
        assert_eq!(slug.len(), "engineer-acme-".len() + 6);
        assert!(is_valid_slug(&slug));
    }

    #[test]
    fn job_slug_rejects_unusable_names() {
        assert!(job_slug("!!!", "???").is_err());
    }

    #[test]
    fn random_suffixes_differ() {
        let a = random_suffix(6);
        let b = random_suffix(6);
        assert_eq!(a.len(), 6);
        // Two identical 6-char draws would indicate a broken generator.
        assert_ne!(a, b);
    }

    /// Verifies that colliding base slugs resolve to distinct values.
    ///
    /// Expected: first allocation returns the base, later ones append an
    /// incrementing counter.
    #[tokio::test]
    async fn allocates_distinct_slugs_on_collision() -> Result<(), crate::error::AppError> {
        let test = TestBuilder::new()
            .with_market_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let category = factory::category::create_category(db).await?;

        let allocator = SlugAllocator::new(db);
        assert_eq!(
            allocator.allocate_server_slug("Stripe ACP Server").await?,
            "stripe-acp-server"
        );

        factory::acp_server::AcpServerFactory::new(db, category.id)
            .slug("stripe-acp-server")
            .build()
            .await?;
        assert_eq!(
            allocator.allocate_server_slug("Stripe ACP Server").await?,
            "stripe-acp-server-1"
        );

        factory::acp_server::AcpServerFactory::new(db, category.id)
            .slug("stripe-acp-server-1")
            .build()
            .await?;
        assert_eq!(
            allocator.allocate_server_slug("Stripe ACP Server").await?,
            "stripe-acp-server-2"
        );

        Ok(())
    }
}
