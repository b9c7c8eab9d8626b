//! bookdb - a minimal, self-hostable book catalog service backed by a
//! flat JSON file.
//!
//! Two components: a file-backed record store owning the collection, and
//! an HTTP router exposing CRUD endpoints over it.

pub mod http_server;
pub mod storage;
