//! Typed API services, one per backend resource
//!
//! Every service borrows the transport; services whose status endpoints
//! are not idempotent also take the in-flight guard. Mutating calls
//! re-check the relevant lifecycle capability against the last-fetched
//! entity before issuing the request, since local copies are server
//! state fetched at an earlier time.

pub mod assignments;
pub mod auth;
pub mod categories;
pub mod customers;
pub mod employees;
pub mod products;
pub mod reservations;
pub mod sales;
pub mod tables;

pub use assignments::{Assignment, AssignmentCreate, AssignmentsApi};
pub use auth::{
    AssistedRegisterRequest, AuthApi, LoginResponse, RegisterRequest, TemporaryPassword,
};
pub use categories::CategoriesApi;
pub use customers::{CustomerSearchField, CustomersApi};
pub use employees::{EmployeeQuery, EmployeesApi};
pub use products::ProductsApi;
pub use reservations::ReservationsApi;
pub use sales::SalesApi;
pub use tables::TablesApi;
