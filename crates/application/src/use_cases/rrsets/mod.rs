pub mod add_rrset;
pub mod delete_records;
pub mod delete_rrset;

pub use add_rrset::AddRRSetUseCase;
pub use delete_records::DeleteRRSetRecordsUseCase;
pub use delete_rrset::DeleteRRSetUseCase;
