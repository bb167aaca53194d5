//! zonectl application layer: ports to the record-management API and the
//! use cases built on top of the record-content codec.
pub mod ports;
pub mod use_cases;
