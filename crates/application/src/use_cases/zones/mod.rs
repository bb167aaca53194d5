pub mod get_nameservers;

pub use get_nameservers::GetZoneNameserversUseCase;
