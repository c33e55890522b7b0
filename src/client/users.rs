//! Users API facade
//!
//! One method per CRUD verb on the server's `/users` collection. Each call
//! forwards to [`ApiClient`] as exactly one outbound request; payloads pass
//! through opaquely as JSON and failures propagate to the caller unmodified.

use crate::client::http::ApiClient;
use crate::config::Config;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Collection path for user records on the server
const USERS_PATH: &str = "/users";

/// Client for the UserHub users API
///
/// Holds the server address injected at construction; no other state. A
/// single client may serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct UsersClient {
    api: ApiClient,
}

impl UsersClient {
    /// Create a client for the given server base address
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(base_url)?,
        })
    }

    /// Create a client from CLI configuration (address and timeout)
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            api: ApiClient::with_timeout(&config.api_url, config.timeout_secs)?,
        })
    }

    /// The server address this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    /// Fetch all users: GET `/users`
    pub async fn list<U: DeserializeOwned>(&self) -> Result<Vec<U>> {
        self.api.get(USERS_PATH).await
    }

    /// Create a user: POST `/users` with the payload as JSON body
    ///
    /// Returns the server's acknowledgement decoded as `R` (see
    /// [`CreateAck`] for the default shape).
    pub async fn create<U: Serialize, R: DeserializeOwned>(&self, user: &U) -> Result<R> {
        self.api.post(USERS_PATH, user).await
    }

    /// Update a user: PUT `/users/{id}` with the payload as JSON body
    pub async fn update<U: Serialize>(&self, id: impl Display, user: &U) -> Result<()> {
        self.api.put(&format!("{USERS_PATH}/{id}"), user).await
    }

    /// Delete a user: DELETE `/users/{id}`, no body
    pub async fn remove(&self, id: impl Display) -> Result<()> {
        self.api.delete(&format!("{USERS_PATH}/{id}")).await
    }
}

/// A user record as the server returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Age in years
    pub age: u32,
}

/// Request body for creating or updating a user (the server assigns the id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Age in years
    pub age: u32,
}

/// Acknowledgement body the server sends on create
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAck {
    /// Human-readable confirmation message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> UsersClient {
        UsersClient::new(&server.uri()).unwrap()
    }

    fn draft() -> UserDraft {
        UserDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            age: 36,
        }
    }

    #[tokio::test]
    async fn test_list_issues_single_get() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Alice"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let users: Vec<serde_json::Value> = client(&server).list().await.unwrap();
        assert_eq!(users, vec![json!({"id": 1, "name": "Alice"})]);
    }

    #[tokio::test]
    async fn test_list_decodes_user_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!([{"id": 7, "name": "Ada Lovelace", "email": "ada@example.com", "age": 36}]),
            ))
            .mount(&server)
            .await;

        let users: Vec<User> = client(&server).list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 7);
        assert_eq!(users[0].name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_create_posts_payload_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users"))
            .and(body_json(json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "age": 36
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"message": "User created successfully"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let ack: CreateAck = client(&server).create(&draft()).await.unwrap();
        assert_eq!(ack.message, "User created successfully");
    }

    #[tokio::test]
    async fn test_update_puts_payload_to_id_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/users/42"))
            .and(body_json(json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "age": 36
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).update(42, &draft()).await.unwrap();
    }

    #[tokio::test]
    async fn test_remove_deletes_id_path_with_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/users/42"))
            .and(body_string(String::new()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).remove(42).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_propagates_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({"error": "Failed to create user"})),
            )
            .mount(&server)
            .await;

        let err = client(&server)
            .create::<UserDraft, CreateAck>(&draft())
            .await
            .unwrap_err();
        match err {
            crate::error::CliError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to create user");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_base_url_prefixes_every_operation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "ok"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/users/1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/users/1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        let _: Vec<serde_json::Value> = client.list().await.unwrap();
        let _: CreateAck = client.create(&draft()).await.unwrap();
        client.update(1, &draft()).await.unwrap();
        client.remove(1).await.unwrap();
        // MockServer verifies the expected request counts on drop
    }

    #[tokio::test]
    async fn test_string_ids_pass_through_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/users/u-abc"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).remove("u-abc").await.unwrap();
    }
}
