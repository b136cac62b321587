pub mod models;

use actix_web::http::header;
use actix_web::HttpRequest;

use crate::db;
use crate::errors::ServiceError;
use crate::gamers::Gamer;

use models::User;

/// get the bearer token from the Authorization header
/// returns Unauthorized when the header is missing or malformed
pub fn bearer_token(req: &HttpRequest) -> Result<String, ServiceError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(ServiceError::Unauthorized)?;

    let header = header.to_str().map_err(|_| ServiceError::Unauthorized)?;

    match header.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(ServiceError::Unauthorized),
    }
}

/// resolve a validated credential to the gamer profile it belongs to
///
/// An unknown token is Unauthorized. A known token without a gamer profile
/// is NotFound, the external account exists but onboarding never completed.
pub fn identify(token: &str, conn: &db::Conn) -> Result<Gamer, ServiceError> {
    let user = User::find_by_token(token, conn).map_err(|error| match error {
        ServiceError::NotFound => ServiceError::Unauthorized,
        _ => error,
    })?;

    Gamer::find_by_user(user.id, conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn missing_header_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        assert_eq!(bearer_token(&req), Err(ServiceError::Unauthorized));
    }

    #[test]
    fn other_schemes_are_unauthorized() {
        let req = TestRequest::with_header("Authorization", "Basic dXNlcjpodW50ZXIy")
            .to_http_request();

        assert_eq!(bearer_token(&req), Err(ServiceError::Unauthorized));
    }

    #[test]
    fn empty_token_is_unauthorized() {
        let req = TestRequest::with_header("Authorization", "Bearer ").to_http_request();

        assert_eq!(bearer_token(&req), Err(ServiceError::Unauthorized));
    }

    #[test]
    fn bearer_token_is_extracted() {
        let req = TestRequest::with_header("Authorization", "Bearer sometoken").to_http_request();

        assert_eq!(bearer_token(&req), Ok("sometoken".to_string()));
    }
}
