//! Contains the byte-level building blocks of mvtinfo: the [`Blob`] type, protobuf value readers and
//! the compression adapter used to unwrap zlib or gzip framed tiles.

pub mod compression;

pub mod io;

pub mod types;

pub use types::Blob;
