use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON body extractor that also runs `validator` rules.
///
/// Malformed bodies and rule violations are both rejected as
/// `AppError::BadRequest` before the handler runs.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::BadRequest(describe(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

// Собираем сообщения валидатора в одну строку, в стабильном порядке
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    struct Probe {
        #[validate(length(min = 1, message = "userId must not be empty"))]
        user_id: String,
    }

    fn json_request(body: &str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        let ValidatedJson(probe) =
            ValidatedJson::<Probe>::from_request(json_request(r#"{"userId":"alice"}"#), &())
                .await
                .unwrap();
        assert_eq!(probe.user_id, "alice");
    }

    #[tokio::test]
    async fn rejects_rule_violation_with_message() {
        let err = ValidatedJson::<Probe>::from_request(json_request(r#"{"userId":""}"#), &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "userId must not be empty"));
    }

    #[tokio::test]
    async fn rejects_missing_field() {
        let err = ValidatedJson::<Probe>::from_request(json_request("{}"), &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("userId")));
    }
}
