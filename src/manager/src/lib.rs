// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Upload artifacts to Amazon S3 with versioning and encryption at rest.
//!
//! This crate contains a small helper to store build artifacts in
//! [Amazon S3]. Most applications will use
//! [ArtifactManager][client::ArtifactManager]. Its single operation uploads a
//! local file and, on success, guarantees that:
//!
//! * the destination bucket exists,
//! * the bucket keeps a version history for its objects, and
//! * the stored artifact is encrypted at rest with server-managed keys.
//!
//! The operation returns the version id the service assigned to the upload,
//! so callers can address this exact write among all versions of the object.
//!
//! Authentication, transport, and retries are owned by the
//! [AWS SDK for Rust] client supplied by the application.
//!
//! [Amazon S3]: https://aws.amazon.com/s3/
//! [AWS SDK for Rust]: https://docs.rs/aws-sdk-s3

pub mod client;
pub mod error;
pub mod model;
pub mod stub;
mod transport;

pub use crate::error::Error;

/// A `Result` alias where the `Err` case is [Error].
pub type Result<T> = std::result::Result<T, Error>;
