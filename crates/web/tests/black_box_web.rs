use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};
use reqwest::{header::LOCATION, redirect::Policy, StatusCode};
use serde_json::Value;

use talentnav_auth::{AuthorizationRole, Hs256JwtValidator, SessionClaims};
use talentnav_core::UserId;
use talentnav_web::{app, MemoryNoticeSink, WebConfig};

const JWT_SECRET: &str = "test-secret";

struct TestServer {
    base_url: String,
    notices: Arc<MemoryNoticeSink>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let config = WebConfig::for_tests(JWT_SECRET);
        let notices = Arc::new(MemoryNoticeSink::new());
        let app = app::build_app_with_notices(&config, notices.clone());

        let listener = tokio::net::TcpListener::bind(config.bind_addr)
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            notices,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap()
}

fn mint_jwt(user: UserId, roles: &[AuthorizationRole]) -> String {
    let now = Utc::now();
    let claims = SessionClaims {
        sub: user,
        roles: roles.to_vec(),
        issued_at: now - ChronoDuration::seconds(5),
        expires_at: now + ChronoDuration::minutes(10),
    };
    Hs256JwtValidator::new(JWT_SECRET)
        .encode(&claims)
        .expect("failed to encode jwt")
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let res = client().get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn anonymous_visitor_is_sent_to_login() {
    let srv = TestServer::spawn().await;

    let res = client()
        .get(srv.url("/en/admin/pool-candidates"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.headers()[LOCATION].to_str().unwrap(),
        "/login?from=%2Fen%2Fadmin%2Fpool-candidates"
    );
}

#[tokio::test]
async fn personality_survives_the_login_redirect() {
    let srv = TestServer::spawn().await;

    let res = client()
        .get(srv.url("/en/browse/pools/p1/create-application?personality=iap"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = res.headers()[LOCATION].to_str().unwrap();
    assert!(location.ends_with("&personality=iap"), "{location}");
}

#[tokio::test]
async fn public_pages_render_without_a_token() {
    let srv = TestServer::spawn().await;

    let res = client().get(srv.url("/fr/search")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["page"], "search");
    assert_eq!(body["locale"], "fr");
    assert_eq!(body["nav_role"], "guest");
}

#[tokio::test]
async fn recruiter_sees_community_navigation() {
    let srv = TestServer::spawn().await;
    let user = UserId::new();
    let token = mint_jwt(
        user,
        &[AuthorizationRole::BaseUser, AuthorizationRole::CommunityRecruiter],
    );

    let res = client()
        .get(srv.url("/en/admin/pool-candidates"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["page"], "all_pool_candidates");
    assert_eq!(body["nav_role"], "community");

    // The session remembers it.
    let res = client()
        .get(srv.url("/nav"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let menu: Value = res.json().await.unwrap();
    assert_eq!(menu["nav_role"], "community");
    assert_eq!(menu["show_role_switcher"], true);
}

#[tokio::test]
async fn recruiter_can_open_the_community_dashboard() {
    let srv = TestServer::spawn().await;
    let token = mint_jwt(UserId::new(), &[AuthorizationRole::CommunityRecruiter]);
    let client = client();

    let res = client
        .get(srv.url("/en/admin/pool-candidates"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let dashboard = body["menu"]["dashboard"].as_str().unwrap().to_string();
    assert_eq!(dashboard, "/en/admin");

    let res = client
        .get(srv.url(&dashboard))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["page"], "admin_dashboard");
    assert_eq!(body["nav_role"], "community");
}

#[tokio::test]
async fn logout_ends_the_nav_session() {
    let srv = TestServer::spawn().await;
    let token = mint_jwt(UserId::new(), &[AuthorizationRole::CommunityRecruiter]);
    let client = client();

    client
        .get(srv.url("/en/admin/pool-candidates"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let menu: Value = client
        .get(srv.url("/nav"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(menu["nav_role"], "community");

    let res = client
        .post(srv.url("/logout"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["ended"], true);

    let menu: Value = client
        .get(srv.url("/nav"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(menu["nav_role"], "guest");

    // Nothing left to end.
    let body: Value = client
        .post(srv.url("/logout"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["ended"], false);
}

#[tokio::test]
async fn nav_role_is_stable_across_pages_that_allow_it() {
    let srv = TestServer::spawn().await;
    let token = mint_jwt(
        UserId::new(),
        &[AuthorizationRole::PlatformAdmin, AuthorizationRole::PoolOperator],
    );
    let client = client();

    let get_role = |path: &'static str| {
        let client = client.clone();
        let url = srv.url(path);
        let token = token.clone();
        async move {
            let body: Value = client
                .get(url)
                .bearer_auth(token)
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            body["nav_role"].as_str().unwrap().to_string()
        }
    };

    assert_eq!(get_role("/en/admin/settings/skills").await, "admin");
    // Pools admit pool operators and platform admins: admin stays.
    assert_eq!(get_role("/en/admin/pools").await, "admin");
    // Creating a pool only admits pool operators.
    assert_eq!(get_role("/en/admin/pools/create").await, "community");
    assert_eq!(get_role("/en/admin/pools").await, "community");
}

#[tokio::test]
async fn applicant_on_admin_page_is_unauthorized() {
    let srv = TestServer::spawn().await;
    let token = mint_jwt(UserId::new(), &[AuthorizationRole::Applicant]);

    let res = client()
        .get(srv.url("/en/admin/settings/skills"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "unauthorized");

    let events = srv.notices.events();
    assert!(events
        .iter()
        .any(|e| e.message == "Unauthorized access attempt" && e.pathname == "/en/admin/settings/skills"));
}

#[tokio::test]
async fn invalid_token_is_rejected() {
    let srv = TestServer::spawn().await;

    let res = client()
        .get(srv.url("/en/applicant"))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_page_is_not_found() {
    let srv = TestServer::spawn().await;

    let res = client().get(srv.url("/en/nowhere")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(srv.notices.events()[0].pathname, "/en/nowhere");
}

#[tokio::test]
async fn whoami_reports_roles() {
    let srv = TestServer::spawn().await;
    let user = UserId::new();
    let token = mint_jwt(user, &[AuthorizationRole::Manager]);

    let body: Value = client()
        .get(srv.url("/whoami"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["user_id"], user.to_string());
    assert_eq!(body["roles"], serde_json::json!(["manager"]));

    let body: Value = client().get(srv.url("/whoami")).send().await.unwrap().json().await.unwrap();
    assert_eq!(body["logged_in"], false);
}
