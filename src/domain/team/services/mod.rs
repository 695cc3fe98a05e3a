// src/domain/team/services/mod.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::team::repository::TeamRepository;
use crate::domain::team::value_objects::{TeamName, TeamSlug};
use crate::domain::tenant::TenantSlug;
use crate::domain::tenant::value_objects::{MAX_SLUG_LEN, truncate_slug};

/// Domain service responsible for producing slugs that are unique within a tenant.
pub struct TeamSlugService {
    repo: Arc<dyn TeamRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl TeamSlugService {
    pub fn new(repo: Arc<dyn TeamRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    pub async fn generate_unique_slug(
        &self,
        tenant: &TenantSlug,
        name: &TeamName,
    ) -> DomainResult<TeamSlug> {
        let base = self.generator.slugify_trimmed(name.as_str());
        let base_slug = if base.is_empty() {
            let random = Uuid::new_v4().simple().to_string();
            format!("team-{}", &random[..8])
        } else {
            truncate_slug(&base, MAX_SLUG_LEN).to_string()
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = TeamSlug::new(candidate)?;
            if self.repo.find_by_slug(tenant, &slug).await?.is_none() {
                return Ok(slug);
            }
            // The suffix must fit inside the length cap, so the base shrinks.
            let suffix = format!("-{counter}");
            let head = truncate_slug(&base_slug, MAX_SLUG_LEN - suffix.len());
            candidate = format!("{head}{suffix}");
            counter += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::NewTeam;
    use crate::domain::user::UserId;
    use crate::infrastructure::repositories::InMemoryTeamRepository;
    use crate::infrastructure::util::{TransliteratingSlugGenerator, UnicodeSlugGenerator};
    use chrono::Utc;

    fn tenant(slug: &str) -> TenantSlug {
        TenantSlug::new(slug).unwrap()
    }

    async fn seed(repo: &InMemoryTeamRepository, tenant_slug: &str, slug: &str) {
        repo.insert(NewTeam {
            tenant: tenant(tenant_slug),
            name: TeamName::new("Seeded").unwrap(),
            slug: TeamSlug::new(slug).unwrap(),
            created_by: UserId::new(Uuid::new_v4()).unwrap(),
            created_at: Utc::now(),
        })
        .await
        .unwrap();
    }

    fn service(repo: Arc<InMemoryTeamRepository>) -> TeamSlugService {
        TeamSlugService::new(repo, Arc::new(UnicodeSlugGenerator))
    }

    #[tokio::test]
    async fn free_slug_is_used_as_is() {
        let repo = Arc::new(InMemoryTeamRepository::default());
        let slug = service(repo)
            .generate_unique_slug(&tenant("acme"), &TeamName::new("Équipe Données").unwrap())
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "equipe-donnees");
    }

    #[tokio::test]
    async fn taken_slugs_get_numeric_suffixes() {
        let repo = Arc::new(InMemoryTeamRepository::default());
        seed(&repo, "acme", "platform").await;
        seed(&repo, "acme", "platform-1").await;

        let slug = service(Arc::clone(&repo))
            .generate_unique_slug(&tenant("acme"), &TeamName::new("Platform").unwrap())
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "platform-2");
    }

    #[tokio::test]
    async fn uniqueness_is_scoped_to_the_tenant() {
        let repo = Arc::new(InMemoryTeamRepository::default());
        seed(&repo, "globex", "platform").await;

        let slug = service(repo)
            .generate_unique_slug(&tenant("acme"), &TeamName::new("Platform").unwrap())
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "platform");
    }

    #[tokio::test]
    async fn names_without_slug_characters_fall_back_to_random_slug() {
        let repo = Arc::new(InMemoryTeamRepository::default());
        let slug = service(repo)
            .generate_unique_slug(&tenant("acme"), &TeamName::new("!!!").unwrap())
            .await
            .unwrap();
        assert!(slug.as_str().starts_with("team-"));
        assert_eq!(slug.as_str().len(), "team-".len() + 8);
    }

    #[tokio::test]
    async fn edge_hyphens_are_trimmed_from_the_base() {
        let repo = Arc::new(InMemoryTeamRepository::default());
        let slug = service(repo)
            .generate_unique_slug(&tenant("acme"), &TeamName::new("- Ops -").unwrap())
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "ops");
    }

    fn transliterating_service(repo: Arc<InMemoryTeamRepository>) -> TeamSlugService {
        TeamSlugService::new(repo, Arc::new(TransliteratingSlugGenerator))
    }

    #[tokio::test]
    async fn long_transliterated_names_are_cut_to_the_slug_limit() {
        let repo = Arc::new(InMemoryTeamRepository::default());
        let name = TeamName::new("北京".repeat(20)).unwrap();

        let slug = transliterating_service(repo)
            .generate_unique_slug(&tenant("acme"), &name)
            .await
            .unwrap();
        assert!(slug.as_str().len() <= MAX_SLUG_LEN);
        assert!(slug.as_str().starts_with("bei-jing-"));
        assert!(!slug.as_str().ends_with('-'));
    }

    #[tokio::test]
    async fn suffixes_fit_when_the_base_is_at_the_limit() {
        let repo = Arc::new(InMemoryTeamRepository::default());
        let slugs = transliterating_service(Arc::clone(&repo));
        let name = TeamName::new("北京".repeat(20)).unwrap();

        let first = slugs.generate_unique_slug(&tenant("acme"), &name).await.unwrap();
        seed(&repo, "acme", first.as_str()).await;
        let second = slugs.generate_unique_slug(&tenant("acme"), &name).await.unwrap();

        assert_ne!(first, second);
        assert!(second.as_str().len() <= MAX_SLUG_LEN);
        assert!(second.as_str().ends_with("-1"));
        let head = second.as_str().strip_suffix("-1").unwrap();
        assert!(first.as_str().starts_with(head));
    }
}
