//! Mock GitHub API for the repository lookup tests

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Sample repositories in the shape GitHub returns
pub fn sample_repos() -> Value {
    json!([
        { "id": 1, "name": "hello-world", "html_url": "https://github.com/octocat/hello-world", "stargazers_count": 10 },
        { "id": 2, "name": "spoon-knife", "html_url": "https://github.com/octocat/spoon-knife", "stargazers_count": 3 }
    ])
}

/// Mock server answering `GET /users/{username}/repos` with `sample_repos()`
pub async fn create_mock_github_server(username: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/users/{}/repos", username)))
        .and(query_param("per_page", "5"))
        .and(query_param("sort", "created:asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_repos()))
        .mount(&server)
        .await;

    server
}
