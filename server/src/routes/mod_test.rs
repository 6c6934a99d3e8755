use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn server_error_display_names_the_cause() {
    let err = ServerError::LeptosConfig("missing metadata".into());
    assert_eq!(err.to_string(), "leptos configuration: missing metadata");
}

#[test]
fn public_dir_falls_back_into_the_repo() {
    if std::env::var("PUBLIC_DIR").is_err() {
        assert!(public_dir().ends_with("public"));
    }
}
