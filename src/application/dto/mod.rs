//! Data Transfer Objects
//!
//! Request bodies (deserialized and validated at the HTTP boundary) and
//! response bodies (serialized from domain entities).

pub mod request;
pub mod response;
