//! Handler tests for the records crate
//!
//! Requests go through the real router with `tower::ServiceExt::oneshot`.

#[cfg(test)]
mod support {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use docstore::{
        DocumentStore, Filter, InMemoryDocumentStore, RawDocument, StoreError, StoreResult,
    };
    use serde_json::{Map, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::records_router;

    pub fn app<S>(store: S) -> Router
    where
        S: DocumentStore + Clone + Send + Sync + 'static,
    {
        Router::new().nest("/api", records_router(store))
    }

    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// Every call fails as if the database were unreachable
    #[derive(Clone, Default)]
    pub struct UnavailableStore;

    fn unavailable<T>() -> StoreResult<T> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    impl DocumentStore for UnavailableStore {
        async fn find(&self, _: &str, _: &Filter) -> StoreResult<Vec<RawDocument>> {
            unavailable()
        }

        async fn find_one(&self, _: &str, _: &Filter) -> StoreResult<Option<RawDocument>> {
            unavailable()
        }

        async fn find_by_id(&self, _: &str, _: Uuid) -> StoreResult<Option<RawDocument>> {
            unavailable()
        }

        async fn create(&self, _: &str, _: Map<String, Value>) -> StoreResult<RawDocument> {
            unavailable()
        }

        async fn save(&self, _: &str, _: &RawDocument) -> StoreResult<RawDocument> {
            unavailable()
        }

        async fn find_by_id_and_delete(&self, _: &str, _: Uuid) -> StoreResult<Option<RawDocument>> {
            unavailable()
        }
    }

    /// Reads and inserts work; whole-document saves fail
    #[derive(Clone, Default)]
    pub struct ReadOnlySaveStore {
        pub inner: InMemoryDocumentStore,
    }

    impl DocumentStore for ReadOnlySaveStore {
        async fn find(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<RawDocument>> {
            self.inner.find(collection, filter).await
        }

        async fn find_one(
            &self,
            collection: &str,
            filter: &Filter,
        ) -> StoreResult<Option<RawDocument>> {
            self.inner.find_one(collection, filter).await
        }

        async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<RawDocument>> {
            self.inner.find_by_id(collection, id).await
        }

        async fn create(
            &self,
            collection: &str,
            body: Map<String, Value>,
        ) -> StoreResult<RawDocument> {
            self.inner.create(collection, body).await
        }

        async fn save(&self, _: &str, _: &RawDocument) -> StoreResult<RawDocument> {
            unavailable()
        }

        async fn find_by_id_and_delete(
            &self,
            collection: &str,
            id: Uuid,
        ) -> StoreResult<Option<RawDocument>> {
            self.inner.find_by_id_and_delete(collection, id).await
        }
    }
}

#[cfg(test)]
mod composer_tests {
    use super::support::*;
    use axum::http::{Method, StatusCode};
    use docstore::InMemoryDocumentStore;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_list_empty_collection() {
        let app = app(InMemoryDocumentStore::new());

        let (status, body) = send(&app, Method::GET, "/api/composers", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_round_trips_fields_with_id() {
        let app = app(InMemoryDocumentStore::new());

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/composers",
            Some(json!({ "firstName": "Johann Sebastian", "lastName": "Bach" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["firstName"], "Johann Sebastian");
        assert_eq!(created["lastName"], "Bach");
        let id = created["_id"].as_str().unwrap();

        let (status, found) = send(&app, Method::GET, &format!("/api/composers/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found, created);

        let (_, all) = send(&app, Method::GET, "/api/composers", None).await;
        assert_eq!(all, json!([created]));
    }

    #[tokio::test]
    async fn test_get_unknown_or_malformed_id_is_null() {
        let app = app(InMemoryDocumentStore::new());
        let unknown = uuid::Uuid::new_v4();

        let (status, body) =
            send(&app, Method::GET, &format!("/api/composers/{unknown}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);

        let (status, body) = send(&app, Method::GET, "/api/composers/not-an-id", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_update_replaces_names() {
        let app = app(InMemoryDocumentStore::new());
        let (_, created) = send(
            &app,
            Method::POST,
            "/api/composers",
            Some(json!({ "firstName": "Wolfgang", "lastName": "Mozart" })),
        )
        .await;
        let id = created["_id"].as_str().unwrap();

        let (status, saved) = send(
            &app,
            Method::PUT,
            &format!("/api/composers/{id}"),
            Some(json!({ "firstName": "Wolfgang Amadeus", "lastName": "Mozart" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["_id"], created["_id"]);
        assert_eq!(saved["firstName"], "Wolfgang Amadeus");

        let (_, found) = send(&app, Method::GET, &format!("/api/composers/{id}"), None).await;
        assert_eq!(found["firstName"], "Wolfgang Amadeus");
    }

    #[tokio::test]
    async fn test_update_unknown_composer_is_501() {
        let app = app(InMemoryDocumentStore::new());
        let body = json!({ "firstName": "A", "lastName": "B" });
        let expected = json!({
            "message": "Store Exception: This composer does not exist in the database."
        });

        let unknown = uuid::Uuid::new_v4();
        let (status, response) = send(
            &app,
            Method::PUT,
            &format!("/api/composers/{unknown}"),
            Some(body.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(response, expected);

        let (status, response) =
            send(&app, Method::PUT, "/api/composers/garbage", Some(body)).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn test_delete_returns_document_then_401() {
        let app = app(InMemoryDocumentStore::new());
        let (_, created) = send(
            &app,
            Method::POST,
            "/api/composers",
            Some(json!({ "firstName": "Clara", "lastName": "Schumann" })),
        )
        .await;
        let uri = format!("/api/composers/{}", created["_id"].as_str().unwrap());

        let (status, deleted) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted, created);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "message": "Invalid composerId" }));

        let (_, found) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(found, Value::Null);
    }

    #[tokio::test]
    async fn test_delete_malformed_id_is_401() {
        let app = app(InMemoryDocumentStore::new());

        let (status, body) = send(&app, Method::DELETE, "/api/composers/123", None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "message": "Invalid composerId" }));
    }

    #[tokio::test]
    async fn test_store_failure_is_501() {
        let app = app(UnavailableStore);

        let (status, body) = send(&app, Method::GET, "/api/composers", None).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Store Exception: ")
        );

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/composers",
            Some(json!({ "firstName": "A", "lastName": "B" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn test_malformed_body_is_500() {
        let app = app(InMemoryDocumentStore::new());

        let (status, body) = send_raw(&app, Method::POST, "/api/composers", "{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Server Exception: ")
        );

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/composers",
            Some(json!({ "firstName": "Only" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}

#[cfg(test)]
mod person_tests {
    use super::support::*;
    use axum::http::{Method, StatusCode};
    use docstore::InMemoryDocumentStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_keeps_nested_sequences() {
        let app = app(InMemoryDocumentStore::new());
        let request = json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "roles": [{ "text": "Mathematician" }, { "text": "Writer" }],
            "dependents": [{ "firstName": "Byron", "lastName": "King" }],
            "birthDate": "1815-12-10"
        });

        let (status, created) = send(&app, Method::POST, "/api/persons", Some(request)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(created["_id"].is_string());
        assert_eq!(
            created["roles"],
            json!([{ "text": "Mathematician" }, { "text": "Writer" }])
        );
        assert_eq!(created["dependents"][0]["firstName"], "Byron");
        assert_eq!(created["birthDate"], "1815-12-10");

        let (status, all) = send(&app, Method::GET, "/api/persons", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all, json!([created]));
    }

    #[tokio::test]
    async fn test_list_empty_and_store_failure() {
        let (status, body) = send(
            &app(InMemoryDocumentStore::new()),
            Method::GET,
            "/api/persons",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, _) = send(&app(UnavailableStore), Method::GET, "/api/persons", None).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    }
}

#[cfg(test)]
mod team_tests {
    use super::support::*;
    use axum::Router;
    use axum::http::{Method, StatusCode};
    use docstore::InMemoryDocumentStore;
    use serde_json::{Value, json};

    async fn create_team(app: &Router) -> Value {
        let (status, team) = send(
            app,
            Method::POST,
            "/api/teams",
            Some(json!({ "name": "Bears", "mascot": "Grizzly" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        team
    }

    #[tokio::test]
    async fn test_create_starts_with_empty_roster() {
        let app = app(InMemoryDocumentStore::new());

        let team = create_team(&app).await;

        assert_eq!(team["name"], "Bears");
        assert_eq!(team["players"], json!([]));
    }

    #[tokio::test]
    async fn test_players_append_in_order() {
        let app = app(InMemoryDocumentStore::new());
        let team = create_team(&app).await;
        let uri = format!("/api/teams/{}/players", team["_id"].as_str().unwrap());

        let first = json!({ "firstName": "Walter", "lastName": "Payton", "salary": 100.0 });
        let second = json!({ "firstName": "Dick", "lastName": "Butkus", "salary": 90.5 });

        let (status, added) = send(&app, Method::POST, &uri, Some(first.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(added, first);

        send(&app, Method::POST, &uri, Some(second.clone())).await;

        let (status, players) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(players, json!([first, second]));

        let (_, teams) = send(&app, Method::GET, "/api/teams", None).await;
        assert_eq!(teams[0]["players"], players);
    }

    #[tokio::test]
    async fn test_unknown_team_is_401() {
        let app = app(InMemoryDocumentStore::new());
        let expected = json!({ "message": "Invalid teamId" });
        let unknown = uuid::Uuid::new_v4();
        let player = json!({ "firstName": "A", "lastName": "B", "salary": 1.0 });

        for uri in [
            format!("/api/teams/{unknown}/players"),
            "/api/teams/not-an-id/players".to_string(),
        ] {
            let (status, body) = send(&app, Method::GET, &uri, None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, expected);

            let (status, body) = send(&app, Method::POST, &uri, Some(player.clone())).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, expected);
        }

        let (status, body) =
            send(&app, Method::DELETE, &format!("/api/teams/{unknown}"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn test_delete_team() {
        let app = app(InMemoryDocumentStore::new());
        let team = create_team(&app).await;
        let id = team["_id"].as_str().unwrap();

        let (status, deleted) = send(&app, Method::DELETE, &format!("/api/teams/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted, team);

        let (status, _) = send(
            &app,
            Method::GET,
            &format!("/api/teams/{id}/players"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_failed_roster_save_is_500() {
        let app = app(ReadOnlySaveStore::default());
        let team = create_team(&app).await;
        let uri = format!("/api/teams/{}/players", team["_id"].as_str().unwrap());

        let (status, body) = send(
            &app,
            Method::POST,
            &uri,
            Some(json!({ "firstName": "A", "lastName": "B", "salary": 1.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Store Exception: ")
        );

        let (_, players) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(players, json!([]));
    }

    #[tokio::test]
    async fn test_lookup_failure_is_501() {
        let app = app(UnavailableStore);
        let uri = format!("/api/teams/{}/players", uuid::Uuid::new_v4());

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);

        let (status, _) = send(
            &app,
            Method::POST,
            &uri,
            Some(json!({ "firstName": "A", "lastName": "B", "salary": 1.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    }
}

#[cfg(test)]
mod customer_tests {
    use super::support::*;
    use axum::Router;
    use axum::http::{Method, StatusCode};
    use docstore::InMemoryDocumentStore;
    use serde_json::{Value, json};

    async fn create_customer(app: &Router, username: &str) -> Value {
        let (status, customer) = send(
            app,
            Method::POST,
            "/api/customers",
            Some(json!({ "firstName": "Jane", "lastName": "Doe", "username": username })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        customer
    }

    fn invoice(subtotal: f64) -> Value {
        json!({
            "subtotal": subtotal,
            "tax": 1.5,
            "dateShipped": "2023-05-01",
            "lineItems": [{ "name": "pen", "price": 2.0, "quantity": 3.0 }]
        })
    }

    #[tokio::test]
    async fn test_create_starts_without_invoices() {
        let app = app(InMemoryDocumentStore::new());

        let customer = create_customer(&app, "jdoe").await;

        assert!(customer["_id"].is_string());
        assert_eq!(customer["username"], "jdoe");
        assert_eq!(customer["invoices"], json!([]));

    }

    #[tokio::test]
    async fn test_customer_without_invoices_is_501() {
        let app = app(InMemoryDocumentStore::new());
        create_customer(&app, "jdoe").await;

        let (status, body) =
            send(&app, Method::GET, "/api/customers/jdoe/invoices", None).await;

        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(
            body,
            json!({ "message": "Store Exception: Customer has no invoices." })
        );
    }

    #[tokio::test]
    async fn test_add_invoice_then_list() {
        let app = app(InMemoryDocumentStore::new());
        create_customer(&app, "jdoe").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/customers/jdoe/invoices",
            Some(invoice(10.0)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Invoice added to customer." }));

        let mut dated = invoice(20.0);
        dated["dateCreated"] = json!("2023-04-13T09:30:00.000Z");
        send(&app, Method::POST, "/api/customers/jdoe/invoices", Some(dated)).await;

        let (status, invoices) =
            send(&app, Method::GET, "/api/customers/jdoe/invoices", None).await;
        assert_eq!(status, StatusCode::OK);

        let invoices = invoices.as_array().unwrap();
        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0]["subtotal"], 10.0);
        assert!(invoices[0]["dateCreated"].as_str().unwrap().ends_with('Z'));
        assert_eq!(invoices[0]["lineItems"][0]["quantity"], 3.0);
        assert_eq!(invoices[1]["dateCreated"], "2023-04-13T09:30:00.000Z");
    }

    #[tokio::test]
    async fn test_unknown_username_creates_nothing() {
        let store = InMemoryDocumentStore::new();
        let app = app(store.clone());
        let expected = json!({ "message": "Store Exception: Customer not found" });

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/customers/ghost/invoices",
            Some(invoice(10.0)),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body, expected);
        assert_eq!(store.count("customers").await, 0);

        let (status, body) =
            send(&app, Method::GET, "/api/customers/ghost/invoices", None).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn test_invoices_are_per_customer() {
        let app = app(InMemoryDocumentStore::new());
        create_customer(&app, "alice").await;
        create_customer(&app, "bob").await;

        send(
            &app,
            Method::POST,
            "/api/customers/alice/invoices",
            Some(invoice(5.0)),
        )
        .await;

        let (status, bob) = send(&app, Method::GET, "/api/customers/bob/invoices", None).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(
            bob,
            json!({ "message": "Store Exception: Customer has no invoices." })
        );

        let (_, alice) = send(&app, Method::GET, "/api/customers/alice/invoices", None).await;
        assert_eq!(alice.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_invoice_save_is_500() {
        let app = app(ReadOnlySaveStore::default());
        create_customer(&app, "jdoe").await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/customers/jdoe/invoices",
            Some(invoice(10.0)),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_missing_invoice_field_is_500() {
        let app = app(InMemoryDocumentStore::new());
        create_customer(&app, "jdoe").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/customers/jdoe/invoices",
            Some(json!({ "subtotal": 1.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Server Exception: ")
        );
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::RecordsError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use docstore::StoreError;

    #[test]
    fn test_error_into_response_status_codes() {
        let cases = [
            (
                RecordsError::Store(StoreError::Database(sqlx::Error::PoolTimedOut)),
                StatusCode::NOT_IMPLEMENTED,
            ),
            (
                RecordsError::AppendSave(StoreError::Database(sqlx::Error::PoolClosed)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                RecordsError::Server("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (RecordsError::ComposerNotFound, StatusCode::NOT_IMPLEMENTED),
            (RecordsError::InvalidComposerId, StatusCode::UNAUTHORIZED),
            (RecordsError::InvalidTeamId, StatusCode::UNAUTHORIZED),
            (RecordsError::CustomerNotFound, StatusCode::NOT_IMPLEMENTED),
            (RecordsError::NoInvoices, StatusCode::NOT_IMPLEMENTED),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status_code(), expected);
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_codec_errors_become_server_exceptions() {
        let codec = StoreError::NotAnObject;
        assert!(matches!(RecordsError::from(codec), RecordsError::Server(_)));

        let db = StoreError::Database(sqlx::Error::PoolTimedOut);
        assert!(matches!(RecordsError::from(db), RecordsError::Store(_)));
    }

    #[test]
    fn test_store_errors_keep_their_source() {
        use kernel::error::app_error::AppError;
        use std::error::Error;

        let app_error = AppError::from(RecordsError::Store(StoreError::Database(
            sqlx::Error::PoolTimedOut,
        )));
        assert!(app_error.source().is_some());
        assert_eq!(app_error.status_code(), 501);

        let app_error = AppError::from(RecordsError::InvalidTeamId);
        assert!(app_error.source().is_none());
        assert_eq!(app_error.message(), "Invalid teamId");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            RecordsError::Server("bad".to_string()).to_string(),
            "Server Exception: bad"
        );
        assert_eq!(
            RecordsError::CustomerNotFound.to_string(),
            "Store Exception: Customer not found"
        );
    }
}
