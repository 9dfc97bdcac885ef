//! Shared test harness: an app wired with in-memory adapters and a real
//! hasher and token service, driven through the router.
//!
//! Each integration test binary compiles this module separately and uses a
//! different slice of it.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;

use skillaid_backend::adapters::auth::{Argon2PasswordHasher, JwtConfig, JwtTokenService};
use skillaid_backend::adapters::email::MockMailer;
use skillaid_backend::adapters::http::{api_router, AppState};
use skillaid_backend::domain::content::{BlogPost, MediaItem, PageContent, Video};
use skillaid_backend::domain::foundation::{
    DomainError, ErrorCode, MediaId, PageContentId, PostId, Timestamp, UserId, VideoId,
};
use skillaid_backend::domain::membership::Plan;
use skillaid_backend::domain::user::{Account, EmailAddress};
use skillaid_backend::ports::{
    BlogPostUpdate, BlogRepository, FileStorage, MediaRepository, PageContentRepository,
    PlanRepository, PlanUpsert, StoredFile, UserRepository, VideoRepository,
};

// ════════════════════════════════════════════════════════════════════════════
// In-memory repositories
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct InMemoryUserRepository {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryUserRepository {
    pub fn get(&self, id: &UserId) -> Option<Account> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.id == id)
            .cloned()
    }

    pub fn insert(&self, account: Account) {
        self.accounts.lock().unwrap().push(account);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, account: &Account) -> Result<(), DomainError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(DomainError::new(ErrorCode::EmailTaken, "User already exists"));
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), DomainError> {
        let mut accounts = self.accounts.lock().unwrap();
        let Some(pos) = accounts.iter().position(|a| a.id == account.id) else {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        };
        accounts[pos] = account.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<Account>, DomainError> {
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, DomainError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Account>, DomainError> {
        Ok(self.accounts.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryPlanRepository {
    plans: Mutex<Vec<Plan>>,
}

impl InMemoryPlanRepository {
    pub fn count(&self) -> usize {
        self.plans.lock().unwrap().len()
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn upsert(&self, upsert: PlanUpsert) -> Result<Plan, DomainError> {
        let mut plans = self.plans.lock().unwrap();
        let now = Timestamp::now();
        if let Some(existing) = plans.iter_mut().find(|p| p.plan_type == upsert.plan_type) {
            existing.name = upsert.name;
            existing.price = upsert.price;
            existing.duration_months = upsert.duration_months;
            existing.features = upsert.features;
            existing.is_popular = upsert.is_popular;
            existing.is_active = upsert.is_active;
            existing.updated_at = now;
            return Ok(existing.clone());
        }
        let plan = Plan::new(
            upsert.plan_type,
            upsert.name,
            upsert.price,
            upsert.duration_months,
            upsert.features,
            upsert.is_popular,
            upsert.is_active,
            now,
        );
        plans.push(plan.clone());
        Ok(plan)
    }

    async fn list_active(&self) -> Result<Vec<Plan>, DomainError> {
        let mut active: Vec<Plan> = self
            .plans
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        active.sort_by_key(|p| p.price);
        Ok(active)
    }
}

#[derive(Default)]
pub struct InMemoryBlogRepository {
    posts: Mutex<Vec<BlogPost>>,
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn create(&self, post: &BlogPost) -> Result<(), DomainError> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &PostId,
        update: BlogPostUpdate,
        now: Timestamp,
    ) -> Result<BlogPost, DomainError> {
        let mut posts = self.posts.lock().unwrap();
        let Some(post) = posts.iter_mut().find(|p| &p.id == id) else {
            return Err(DomainError::new(ErrorCode::PostNotFound, "Blog not found"));
        };
        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(author) = update.author {
            post.author = author;
        }
        if let Some(cover) = update.cover_image {
            post.cover_image = cover;
        }
        if let Some(tags) = update.tags {
            post.tags = skillaid_backend::domain::content::normalize_tags(tags);
        }
        post.updated_at = now;
        Ok(post.clone())
    }

    async fn delete(&self, id: &PostId) -> Result<(), DomainError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| &p.id != id);
        if posts.len() == before {
            return Err(DomainError::new(ErrorCode::PostNotFound, "Blog not found"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<BlogPost>, DomainError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}

#[derive(Default)]
pub struct InMemoryMediaRepository {
    items: Mutex<Vec<MediaItem>>,
}

#[async_trait]
impl MediaRepository for InMemoryMediaRepository {
    async fn create(&self, item: &MediaItem) -> Result<(), DomainError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &MediaId) -> Result<Option<MediaItem>, DomainError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| &i.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<MediaItem>, DomainError> {
        Ok(self.items.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryVideoRepository {
    videos: Mutex<Vec<Video>>,
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn create(&self, video: &Video) -> Result<(), DomainError> {
        self.videos.lock().unwrap().push(video.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &VideoId,
        update: skillaid_backend::ports::VideoUpdate,
        now: Timestamp,
    ) -> Result<Video, DomainError> {
        let mut videos = self.videos.lock().unwrap();
        let Some(video) = videos.iter_mut().find(|v| &v.id == id) else {
            return Err(DomainError::new(ErrorCode::VideoNotFound, "Video not found"));
        };
        if let Some(title) = update.title {
            video.title = title;
        }
        if let Some(url) = update.url {
            video.url = url;
        }
        if let Some(description) = update.description {
            video.description = description;
        }
        video.updated_at = now;
        Ok(video.clone())
    }

    async fn delete(&self, id: &VideoId) -> Result<(), DomainError> {
        let mut videos = self.videos.lock().unwrap();
        let before = videos.len();
        videos.retain(|v| &v.id != id);
        if videos.len() == before {
            return Err(DomainError::new(ErrorCode::VideoNotFound, "Video not found"));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Video>, DomainError> {
        Ok(self.videos.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryPageContentRepository {
    revisions: Mutex<Vec<PageContent>>,
}

#[async_trait]
impl PageContentRepository for InMemoryPageContentRepository {
    async fn create(&self, content: &PageContent) -> Result<(), DomainError> {
        self.revisions.lock().unwrap().push(content.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &PageContentId,
        intro: String,
        now: Timestamp,
    ) -> Result<PageContent, DomainError> {
        let mut revisions = self.revisions.lock().unwrap();
        let Some(content) = revisions.iter_mut().find(|c| &c.id == id) else {
            return Err(DomainError::new(
                ErrorCode::PageContentNotFound,
                "Content not found",
            ));
        };
        content.intro = intro;
        content.updated_at = now;
        Ok(content.clone())
    }

    async fn latest(&self) -> Result<Option<PageContent>, DomainError> {
        let revisions = self.revisions.lock().unwrap();
        Ok(revisions.iter().max_by_key(|c| c.updated_at).cloned())
    }
}

/// File storage that keeps bytes in memory.
#[derive(Default)]
pub struct InMemoryFileStorage {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

#[async_trait]
impl FileStorage for InMemoryFileStorage {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, DomainError> {
        let mut files = self.files.lock().unwrap();
        let filename = format!("{}-{}", files.len(), original_name);
        files.push((filename.clone(), bytes.to_vec()));
        Ok(StoredFile {
            url: format!("/uploads/{}", filename),
            filename,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// App harness
// ════════════════════════════════════════════════════════════════════════════

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub plans: Arc<InMemoryPlanRepository>,
    pub mailer: Arc<MockMailer>,
}

pub fn test_app() -> TestApp {
    let users = Arc::new(InMemoryUserRepository::default());
    let plans = Arc::new(InMemoryPlanRepository::default());
    let mailer = Arc::new(MockMailer::new());

    let state = AppState {
        users: users.clone(),
        plans: plans.clone(),
        blog: Arc::new(InMemoryBlogRepository::default()),
        media: Arc::new(InMemoryMediaRepository::default()),
        videos: Arc::new(InMemoryVideoRepository::default()),
        pages: Arc::new(InMemoryPageContentRepository::default()),
        hasher: Arc::new(Argon2PasswordHasher::new()),
        tokens: Arc::new(JwtTokenService::new(JwtConfig::new(
            "integration-test-secret",
            Duration::from_secs(3600),
        ))),
        mailer: mailer.clone(),
        storage: Arc::new(InMemoryFileStorage::default()),
    };

    TestApp {
        router: api_router(state),
        users,
        plans,
        mailer,
    }
}

impl TestApp {
    /// Registers an admin directly in the repository and returns a login
    /// token for it.
    pub async fn seed_admin(&self, email: &str, password: &str) -> String {
        let hasher = Argon2PasswordHasher::new();
        use skillaid_backend::ports::PasswordHasher as _;
        let mut account = Account::register(
            EmailAddress::parse(email).unwrap(),
            hasher.hash(password).unwrap(),
            Timestamp::now(),
        );
        account.promote(Timestamp::now());
        self.users.insert(account);

        let response = self
            .post_json(
                "/api/auth/login",
                &serde_json::json!({ "email": email, "password": password }),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await["token"].as_str().unwrap().to_string()
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<&serde_json::Value>,
        token: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.request("GET", uri, None, token).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: &serde_json::Value,
        token: Option<&str>,
    ) -> Response<Body> {
        self.request("POST", uri, Some(body), token).await
    }

    pub async fn put_json(
        &self,
        uri: &str,
        body: &serde_json::Value,
        token: Option<&str>,
    ) -> Response<Body> {
        self.request("PUT", uri, Some(body), token).await
    }

    pub async fn put_empty(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.request("PUT", uri, None, token).await
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
