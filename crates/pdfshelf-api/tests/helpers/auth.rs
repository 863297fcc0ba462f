use axum_test::{TestResponse, TestServer};

/// Submit the login form.
pub async fn login(client: &TestServer, password: &str) -> TestResponse {
    client
        .post("/login")
        .form(&serde_json::json!({ "password": password }))
        .await
}

/// All `Set-Cookie` header values of a response.
pub fn set_cookies(response: &TestResponse) -> Vec<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(String::from)
        .collect()
}

/// `name=value` part of the session cookie set by a response, if any.
pub fn session_cookie_pair(response: &TestResponse) -> Option<String> {
    set_cookies(response)
        .into_iter()
        .find(|c| c.starts_with("session="))
        .and_then(|c| c.split(';').next().map(|s| s.trim().to_string()))
}

pub fn location(response: &TestResponse) -> Option<String> {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}
