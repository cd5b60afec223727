//! Request extractors with the API's error envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use prefab_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

const INVALID_ID: &str = "ID inválido";

/// JSON body whose rejections become `400 {"error": ...}`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(format!("Datos inválidos: {}", rejection.body_text()))
}

/// The `N` numeric path parameters of a route, in path order.
///
/// Every segment must be a positive integer; anything else is rejected with
/// `400 "ID inválido"` before the handler runs.
///
/// ```ignore
/// async fn get(Ids([empresa_id, id]): Ids<2>) { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ids<const N: usize>(pub [DbId; N]);

impl<S, const N: usize> FromRequestParts<S> for Ids<N>
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_ID.into()))?;

        if params.len() != N {
            return Err(AppError::InternalError(format!(
                "route declares {} path parameters, handler expects {N}",
                params.len()
            )));
        }

        let mut ids = [0; N];
        for (slot, (_, raw)) in ids.iter_mut().zip(&params) {
            *slot = parse_id(raw)?;
        }
        Ok(Ids(ids))
    }
}

/// Parse one path segment as a positive id.
pub fn parse_id(raw: &str) -> Result<DbId, AppError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(INVALID_ID.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_integers_parse() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn zero_negative_and_garbage_are_rejected() {
        for raw in ["0", "-3", "abc", "", "1.5", "99999999999999999999"] {
            assert!(parse_id(raw).is_err(), "{raw} should be rejected");
        }
    }
}
