//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! They are also the only place where the ledger append and the balance
//! update are combined, always inside one database transaction.

pub mod account_code;
pub mod approval;
pub mod budget_request;
pub mod category;
pub mod movement;
pub mod product;
pub mod supplier;

pub use account_code::AccountCodeRepository;
pub use approval::{ApprovalRepository, ApprovalWithRequest, DecisionInput};
pub use budget_request::BudgetRequestRepository;
pub use category::{CategoryError, CategoryRepository, CreateCategoryInput, UpdateCategoryInput};
pub use movement::{MovementRepository, MovementWithProduct};
pub use product::{
    CreateProductInput, ProductError, ProductRepository, ProductWithRefs, UpdateProductInput,
};
pub use supplier::{CreateSupplierInput, SupplierError, SupplierRepository, UpdateSupplierInput};
