//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// Note: cancellation business outcomes (`ReservationNotFound`,
    /// `AmbiguousMatch`) are normally reported in-payload with a 200 by the
    /// cancel handler; the mapping here only applies when they escape
    /// through the generic error path.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange => StatusCode::BAD_REQUEST,

            // 404 Not Found
            Self::NotFound | Self::ReservationNotFound => StatusCode::NOT_FOUND,

            // 422 Unprocessable Entity
            Self::AmbiguousMatch => StatusCode::UNPROCESSABLE_ENTITY,

            // 502 Bad Gateway - the external store failed mid-request
            Self::StoreReadFailed | Self::StoreWriteFailed => StatusCode::BAD_GATEWAY,

            // 503 Service Unavailable
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::Unknown | Self::SchemaMismatch | Self::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::ReservationNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::AmbiguousMatch.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::StoreWriteFailed.http_status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ErrorCode::SchemaMismatch.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::StoreUnavailable.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
