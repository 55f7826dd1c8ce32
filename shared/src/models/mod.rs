//! Domain models
//!
//! Entity structs plus their `Create`/`Update` payloads. All entities are
//! owned and persisted by the backend; these are the transient copies the
//! client works with.

pub mod customer;
pub mod dining_table;
pub mod employee;
pub mod product;
pub mod product_category;
pub mod reservation;
pub mod sale;

pub use customer::{Customer, CustomerCreate, CustomerUpdate};
pub use dining_table::{
    DiningTable, DiningTableCreate, DiningTableUpdate, TableStats, TableStatus,
    validate_unique_number,
};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
pub use product::{Product, ProductCreate, ProductFilter, ProductUpdate};
pub use product_category::{ProductCategory, ProductCategoryCreate, ProductCategoryUpdate};
pub use reservation::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};
pub use sale::{Sale, SaleLine, SaleLineUpsert, SaleStatus, SaleUpsert};
