//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Statements are parameterized
//! throughout; the only interpolated identifier is the quoted table name in
//! the catalog dump.

pub mod action_repo;
pub mod assignment_repo;
pub mod audit_repo;
pub mod catalog_repo;
pub mod complaint_repo;
pub mod evidence_repo;
pub mod feedback_repo;
pub mod officer_repo;
pub mod summary_repo;
pub mod user_repo;

pub use action_repo::ActionRepo;
pub use assignment_repo::AssignmentRepo;
pub use audit_repo::AuditRepo;
pub use catalog_repo::CatalogRepo;
pub use complaint_repo::ComplaintRepo;
pub use evidence_repo::EvidenceRepo;
pub use feedback_repo::FeedbackRepo;
pub use officer_repo::OfficerRepo;
pub use summary_repo::SummaryRepo;
pub use user_repo::UserRepo;
