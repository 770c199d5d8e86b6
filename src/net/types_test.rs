use super::*;

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_serialize_as_login_body() {
    let body = serde_json::to_value(Credentials::new("ash", "pikachu")).unwrap();
    assert_eq!(body, serde_json::json!({ "username": "ash", "password": "pikachu" }));
}

#[test]
fn credentials_debug_redacts_password() {
    let rendered = format!("{:?}", Credentials::new("ash", "hunter2"));
    assert!(rendered.contains("ash"));
    assert!(!rendered.contains("hunter2"));
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_ignores_extra_fields() {
    let raw = r#"{"token": "abc123", "id": 1, "username": "ash", "refreshToken": "r"}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "abc123");
}

#[test]
fn login_response_without_token_is_rejected() {
    assert!(serde_json::from_str::<LoginResponse>(r#"{"id": 1}"#).is_err());
}

// =============================================================
// Pokemon
// =============================================================

#[test]
fn pokemon_page_reads_results() {
    let raw = r#"{"count": 2, "next": null, "results": [
        {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
        {"name": "ivysaur"}
    ]}"#;
    let page: PokemonPage = serde_json::from_str(raw).unwrap();
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].name, "bulbasaur");
    assert_eq!(page.results[1].url, "");
}

#[test]
fn pokemon_page_missing_results_is_empty() {
    let page: PokemonPage = serde_json::from_str("{}").unwrap();
    assert!(page.results.is_empty());
}

// =============================================================
// Users
// =============================================================

#[test]
fn user_list_accepts_bare_array() {
    let raw = r#"[{"id": 1, "username": "ash"}, {"id": 2, "name": "misty", "email": "m@cerulean.gym"}]"#;
    let users = serde_json::from_str::<UserList>(raw).unwrap().into_users();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].username, "misty");
    assert_eq!(users[1].email.as_deref(), Some("m@cerulean.gym"));
}

#[test]
fn user_list_accepts_wrapped_object() {
    let raw = r#"{"users": [{"id": 7, "username": "brock"}], "total": 1}"#;
    let users = serde_json::from_str::<UserList>(raw).unwrap().into_users();
    assert_eq!(users, vec![User { id: Some(7), username: "brock".to_owned(), email: None }]);
}
