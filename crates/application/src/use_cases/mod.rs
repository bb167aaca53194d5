pub mod rrsets;
pub mod zones;

pub use rrsets::{AddRRSetUseCase, DeleteRRSetRecordsUseCase, DeleteRRSetUseCase};
pub use zones::GetZoneNameserversUseCase;
