//! Unified error codes for the RentifyTech API
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: User errors
//! - 4xxx: Gadget errors
//! - 5xxx: Rental errors (cart, wish list)
//! - 6xxx: Payment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can match on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// No credential was presented
    NotAuthenticated = 1001,
    /// Credential failed signature or expiry verification
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Authenticated but lacking the required role
    PermissionDenied = 2001,
    /// Path or query identity differs from the token identity
    IdentityMismatch = 2002,
    /// Record belongs to another user
    NotOwner = 2003,

    // ==================== 3xxx: User ====================
    /// User not found
    UserNotFound = 3001,
    /// A user with this email already exists
    UserAlreadyExists = 3002,

    // ==================== 4xxx: Gadget ====================
    /// Gadget not found
    GadgetNotFound = 4001,

    // ==================== 5xxx: Rental ====================
    /// Cart item not found
    CartItemNotFound = 5001,
    /// Wish-list item not found
    WishlistItemNotFound = 5101,
    /// Gadget already on the wish list
    WishlistItemExists = 5102,

    // ==================== 6xxx: Payment ====================
    /// Amount must be positive
    PaymentInvalidAmount = 6001,
    /// Payment provider rejected or failed the request
    PaymentGatewayFailed = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::NotAuthenticated => "Forbidden Access",
            ErrorCode::TokenInvalid => "Invalid or Expired Token",

            // Permission
            ErrorCode::PermissionDenied => "forbidden access",
            ErrorCode::IdentityMismatch => "Unauthorized access",
            ErrorCode::NotOwner => "Record belongs to another user",

            // User
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserAlreadyExists => "User already exists",

            // Gadget
            ErrorCode::GadgetNotFound => "Gadget not found",

            // Rental
            ErrorCode::CartItemNotFound => "Cart item not found",
            ErrorCode::WishlistItemNotFound => "Wish list item not found",
            ErrorCode::WishlistItemExists => "Gadget is already on the wish list",

            // Payment
            ErrorCode::PaymentInvalidAmount => "Payment amount must be positive",
            ErrorCode::PaymentGatewayFailed => "Payment provider request failed",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::AlreadyExists,
            5 => ErrorCode::InvalidRequest,

            1001 => ErrorCode::NotAuthenticated,
            1004 => ErrorCode::TokenInvalid,

            2001 => ErrorCode::PermissionDenied,
            2002 => ErrorCode::IdentityMismatch,
            2003 => ErrorCode::NotOwner,

            3001 => ErrorCode::UserNotFound,
            3002 => ErrorCode::UserAlreadyExists,

            4001 => ErrorCode::GadgetNotFound,

            5001 => ErrorCode::CartItemNotFound,
            5101 => ErrorCode::WishlistItemNotFound,
            5102 => ErrorCode::WishlistItemExists,

            6001 => ErrorCode::PaymentInvalidAmount,
            6002 => ErrorCode::PaymentGatewayFailed,

            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::DatabaseError,
            9005 => ErrorCode::ConfigError,

            _ => return Err(InvalidErrorCode(value)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::TokenInvalid.code(), 1004);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::UserAlreadyExists.code(), 3002);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(2002), Ok(ErrorCode::IdentityMismatch));
        assert_eq!(ErrorCode::try_from(5102), Ok(ErrorCode::WishlistItemExists));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(7777), Err(InvalidErrorCode(7777)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::TokenInvalid).unwrap();
        assert_eq!(json, "1004");
        let code: ErrorCode = serde_json::from_str("2001").unwrap();
        assert_eq!(code, ErrorCode::PermissionDenied);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::GadgetNotFound.to_string(), "E4001");
    }

    #[test]
    fn test_gate_messages() {
        assert_eq!(ErrorCode::NotAuthenticated.message(), "Forbidden Access");
        assert_eq!(ErrorCode::TokenInvalid.message(), "Invalid or Expired Token");
        assert_eq!(ErrorCode::PermissionDenied.message(), "forbidden access");
        assert_eq!(ErrorCode::IdentityMismatch.message(), "Unauthorized access");
    }
}
