use actix_web::error::BlockingError;
use actix_web::{error::ResponseError, HttpResponse};
use derive_more::Display;
use diesel::result::{DatabaseErrorKind, Error as DBError};
use std::convert::From;

#[derive(Debug, Display, PartialEq)]
pub enum ServiceError {
    #[display(fmt = "Internal Server Error")]
    InternalServerError,

    #[display(fmt = "BadRequest: {}", _0)]
    BadRequest(String),

    #[display(fmt = "Conflict: {}", _0)]
    Conflict(String),

    #[display(fmt = "Unauthorized")]
    Unauthorized,

    #[display(fmt = "Not Found")]
    NotFound,
}

// impl ResponseError trait allows to convert our errors into http responses with appropriate data
impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::InternalServerError => {
                HttpResponse::InternalServerError().json("Internal Server Error, Please try later")
            }
            ServiceError::BadRequest(ref message) => HttpResponse::BadRequest().json(message),
            ServiceError::Unauthorized => HttpResponse::Unauthorized().json("Unauthorized"),
            ServiceError::NotFound => HttpResponse::NotFound().json("Not Found"),
            ServiceError::Conflict(ref message) => HttpResponse::Conflict().json(message),
        }
    }
}

impl From<DBError> for ServiceError {
    fn from(error: DBError) -> ServiceError {
        match error {
            DBError::NotFound => ServiceError::NotFound,
            DBError::DatabaseError(kind, info) => {
                if let DatabaseErrorKind::UniqueViolation = kind {
                    let message = info.details().unwrap_or_else(|| info.message()).to_string();
                    return ServiceError::Conflict(message);
                }
                error!("db error: {}", info.message());
                ServiceError::InternalServerError
            }
            _ => {
                error!("db error: {}", error);
                ServiceError::InternalServerError
            }
        }
    }
}

impl From<r2d2::Error> for ServiceError {
    fn from(error: r2d2::Error) -> ServiceError {
        error!("r2d2 connection pool error: {}", error);
        ServiceError::InternalServerError
    }
}

// the inner error has to be kept, otherwise a not-found row inside a
// blocking closure would surface as a 500 instead of a 404
impl From<BlockingError<ServiceError>> for ServiceError {
    fn from(error: BlockingError<ServiceError>) -> ServiceError {
        match error {
            BlockingError::Error(error) => error,
            BlockingError::Canceled => {
                error!("the thread pool canceled the request");
                ServiceError::InternalServerError
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn not_found_rows_map_to_http_404() {
        let error = ServiceError::from(DBError::NotFound);

        assert_eq!(error, ServiceError::NotFound);
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unique_violations_map_to_http_409() {
        let error = ServiceError::from(DBError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate signup".to_string()),
        ));

        assert_eq!(error, ServiceError::Conflict("duplicate signup".to_string()));
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn blocking_errors_keep_the_inner_error() {
        let error = ServiceError::from(BlockingError::Error(ServiceError::NotFound));

        assert_eq!(error, ServiceError::NotFound);
    }

    #[test]
    fn response_status_codes() {
        let bad_request = ServiceError::BadRequest("nope".to_string());
        let conflict = ServiceError::Conflict("duplicate".to_string());

        assert_eq!(
            bad_request.error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(conflict.error_response().status(), StatusCode::CONFLICT);
        assert_eq!(
            ServiceError::Unauthorized.error_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::InternalServerError.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
