pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Extraction API
        .route("/api/v1/resumes/parse", post(handlers::handle_parse_resume))
        .route("/api/v1/profile", get(handlers::handle_get_profile))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::extraction::models::SkillStrategy;
    use crate::extraction::tokens::LanguageResources;
    use crate::extraction::{ExtractionProfile, ResumeParser};

    const BOUNDARY: &str = "resume-boundary";

    fn app(max_upload_bytes: usize) -> Router {
        let parser =
            ResumeParser::new(ExtractionProfile::default(), LanguageResources::english()).unwrap();
        build_router(AppState {
            parser: Arc::new(parser),
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                skill_strategy: SkillStrategy::Vocabulary,
                skills_vocabulary_path: None,
                education_keywords_path: None,
                stopwords_path: None,
                max_upload_bytes,
            },
        })
    }

    fn multipart_body(filename: &str, contents: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(contents);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn text_part(name: &str, value: &str) -> String {
        format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
    }

    fn parse_request(body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/parse")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = app(1024)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_parse_plain_text_upload() {
        let text = b"Skills\nTypography, Communication\nExperience\n6 years freelance\nEducation\nMBA";
        let response = app(1024 * 1024)
            .oneshot(parse_request(multipart_body("cv.txt", text)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["skills"][0], "communication");
        assert_eq!(json["skills"][1], "typography");
        assert_eq!(json["education"][0], "mba");
        assert_eq!(json["experience"], 6);
        assert_eq!(json["skill_strategy"], "vocabulary");
    }

    #[tokio::test]
    async fn test_invalid_utf8_upload_is_422() {
        let response = app(1024 * 1024)
            .oneshot(parse_request(multipart_body("cv.txt", &[0xff, 0xfe, 0xfd])))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(response).await["error"]["code"], "DECODE_ERROR");
    }

    #[tokio::test]
    async fn test_missing_file_part_is_400() {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{BOUNDARY}--\r\n"
        );
        let response = app(1024 * 1024)
            .oneshot(parse_request(body.into_bytes()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_part_filename_wins_over_filename_field() {
        let mut body = text_part("filename", "upload.pdf").into_bytes();
        body.extend(multipart_body("cv.txt", b"Skills\nTypography\nWork\n2 years"));
        let response = app(1024 * 1024)
            .oneshot(parse_request(body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["skills"][0], "typography");
        assert_eq!(json["experience"], 2);
    }

    #[tokio::test]
    async fn test_filename_field_used_when_part_has_none() {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(b"not a pdf at all\r\n");
        body.extend(text_part("filename", "upload.pdf").into_bytes());
        body.extend(format!("--{BOUNDARY}--\r\n").into_bytes());

        let response = app(1024 * 1024)
            .oneshot(parse_request(body))
            .await
            .unwrap();
        // The fallback name routes the bytes down the PDF path, which rejects them.
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_oversized_upload_is_413() {
        let response = app(64)
            .oneshot(parse_request(multipart_body("cv.txt", &[b'a'; 4096])))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_profile_lists_vocabulary() {
        let response = app(1024)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/profile")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["profile"]["skill_strategy"], "vocabulary");
        assert_eq!(json["profile"]["vocabulary"]["phrases"][2], "typography");
    }
}
