//! Unified error codes for the Fonda platform
//!
//! Error codes are shared between the client crates and any frontend that
//! consumes them, organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Sale errors
//! - 4xxx: Reservation errors
//! - 5xxx: Product errors
//! - 6xxx: Table errors
//! - 7xxx: Customer errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
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
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// Attempted state change violates the entity lifecycle
    InvalidTransition = 9,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account requires a password change before continuing
    PasswordChangeRequired = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Staff-only operation
    StaffOnly = 2003,

    // ==================== 3xxx: Sale ====================
    /// Sale not found
    SaleNotFound = 3001,
    /// Sale has already been finalized
    SaleAlreadyFinalized = 3002,
    /// Sale has already been cancelled
    SaleAlreadyCancelled = 3003,
    /// Sale is no longer editable
    SaleNotEditable = 3004,
    /// Sale has no line items
    SaleEmpty = 3005,
    /// Sale has no customer assigned
    SaleNoCustomer = 3006,

    // ==================== 4xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 4001,
    /// Reservation is not pending
    ReservationNotPending = 4002,
    /// Reservation is not scheduled for today
    ReservationNotToday = 4003,
    /// Reservation is inside the confirmation lead-time window
    ReservationLeadTimeExpired = 4004,
    /// Reservation cannot be cancelled from its current status
    ReservationNotCancellable = 4005,

    // ==================== 5xxx: Product ====================
    /// Product not found
    ProductNotFound = 5001,
    /// Product has invalid price
    ProductInvalidPrice = 5002,
    /// Product is inactive
    ProductInactive = 5003,
    /// Category not found
    CategoryNotFound = 5101,

    // ==================== 6xxx: Table ====================
    /// Table not found
    TableNotFound = 6001,
    /// Table number already exists
    TableNumberTaken = 6002,

    // ==================== 7xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 7001,
    /// Customer account is inactive
    CustomerInactive = 7002,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee account is inactive
    EmployeeInactive = 8002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Operation timeout
    TimeoutError = 9003,
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
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::InvalidTransition => "Invalid state transition",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::PasswordChangeRequired => "Password change is required",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::StaffOnly => "Operation restricted to staff accounts",

            // Sale
            ErrorCode::SaleNotFound => "Sale not found",
            ErrorCode::SaleAlreadyFinalized => "Sale has already been finalized",
            ErrorCode::SaleAlreadyCancelled => "Sale has already been cancelled",
            ErrorCode::SaleNotEditable => "Sale is no longer editable",
            ErrorCode::SaleEmpty => "Sale has no line items",
            ErrorCode::SaleNoCustomer => "Sale has no customer assigned",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::ReservationNotPending => "Reservation is not pending",
            ErrorCode::ReservationNotToday => "Only same-day reservations can be confirmed",
            ErrorCode::ReservationLeadTimeExpired => {
                "Reservation must be confirmed more than 15 minutes in advance"
            }
            ErrorCode::ReservationNotCancellable => {
                "Reservation cannot be cancelled from its current status"
            }

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::ProductInactive => "Product is inactive",
            ErrorCode::CategoryNotFound => "Category not found",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableNumberTaken => "Table number already exists",

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::CustomerInactive => "Customer account is inactive",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeInactive => "Employee account is inactive",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }

    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::SaleNotFound
            | Self::ReservationNotFound
            | Self::ProductNotFound
            | Self::CategoryNotFound
            | Self::TableNotFound
            | Self::CustomerNotFound
            | Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::InvalidTransition
            | Self::SaleAlreadyFinalized
            | Self::SaleAlreadyCancelled
            | Self::ReservationNotCancellable
            | Self::TableNumberTaken => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::PasswordChangeRequired => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied | Self::RoleRequired | Self::StaffOnly => {
                StatusCode::FORBIDDEN
            }

            // 422 Unprocessable Entity (business rules)
            Self::SaleNotEditable
            | Self::SaleEmpty
            | Self::SaleNoCustomer
            | Self::ReservationNotPending
            | Self::ReservationNotToday
            | Self::ReservationLeadTimeExpired
            | Self::ProductInactive
            | Self::CustomerInactive
            | Self::EmployeeInactive => StatusCode::UNPROCESSABLE_ENTITY,

            // 400 Bad Request
            Self::Unknown
            | Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::ProductInvalidPrice => StatusCode::BAD_REQUEST,

            // 5xx
            Self::InternalError | Self::NetworkError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::TimeoutError => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.message())
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
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::InvalidTransition),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::PasswordChangeRequired),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::StaffOnly),

            // Sale
            3001 => Ok(ErrorCode::SaleNotFound),
            3002 => Ok(ErrorCode::SaleAlreadyFinalized),
            3003 => Ok(ErrorCode::SaleAlreadyCancelled),
            3004 => Ok(ErrorCode::SaleNotEditable),
            3005 => Ok(ErrorCode::SaleEmpty),
            3006 => Ok(ErrorCode::SaleNoCustomer),

            // Reservation
            4001 => Ok(ErrorCode::ReservationNotFound),
            4002 => Ok(ErrorCode::ReservationNotPending),
            4003 => Ok(ErrorCode::ReservationNotToday),
            4004 => Ok(ErrorCode::ReservationLeadTimeExpired),
            4005 => Ok(ErrorCode::ReservationNotCancellable),

            // Product
            5001 => Ok(ErrorCode::ProductNotFound),
            5002 => Ok(ErrorCode::ProductInvalidPrice),
            5003 => Ok(ErrorCode::ProductInactive),
            5101 => Ok(ErrorCode::CategoryNotFound),

            // Table
            6001 => Ok(ErrorCode::TableNotFound),
            6002 => Ok(ErrorCode::TableNumberTaken),

            // Customer
            7001 => Ok(ErrorCode::CustomerNotFound),
            7002 => Ok(ErrorCode::CustomerInactive),

            // Employee
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeInactive),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::TimeoutError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}
