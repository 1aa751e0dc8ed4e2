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

//! The request and response types exchanged with the storage service.

use std::path::PathBuf;

/// A request to store the contents of a local file as an object.
///
/// The request captures the destination, the data source, and the encryption
/// directives that travel with the write. It carries no connection or
/// credential state; those belong to the client executing the request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PutObjectRequest {
    /// The name of the destination bucket.
    pub bucket: String,

    /// The object key under which the contents are stored.
    pub key: String,

    /// The local file providing the object contents.
    pub source: PathBuf,

    /// The server-managed encryption algorithm applied to the object at rest.
    pub server_side_encryption: Option<SseAlgorithm>,

    /// A customer-supplied encryption key (SSE-C), base64-encoded.
    ///
    /// Mutually exclusive with server-managed encryption. The artifact
    /// manager never sets this field.
    pub sse_customer_key: Option<String>,
}

impl PutObjectRequest {
    pub fn new<B, K, S>(bucket: B, key: K, source: S) -> Self
    where
        B: Into<String>,
        K: Into<String>,
        S: Into<PathBuf>,
    {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            source: source.into(),
            ..Self::default()
        }
    }

    /// Sets the value of [server_side_encryption][PutObjectRequest::server_side_encryption].
    pub fn set_server_side_encryption(mut self, v: SseAlgorithm) -> Self {
        self.server_side_encryption = Some(v);
        self
    }

    /// Sets the value of [sse_customer_key][PutObjectRequest::sse_customer_key].
    pub fn set_sse_customer_key<T: Into<String>>(mut self, v: T) -> Self {
        self.sse_customer_key = Some(v.into());
        self
    }
}

/// The result of a successful object write.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PutObjectResponse {
    /// The version id the service assigned to this write.
    ///
    /// Only present when the destination bucket has versioning enabled.
    pub version_id: Option<String>,

    /// The entity tag of the stored object.
    pub etag: Option<String>,
}

impl PutObjectResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [version_id][PutObjectResponse::version_id].
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.version_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [version_id][PutObjectResponse::version_id].
    pub fn set_or_clear_version_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.version_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [etag][PutObjectResponse::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets or clears the value of [etag][PutObjectResponse::etag].
    pub fn set_or_clear_etag<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.etag = v.map(|x| x.into());
        self
    }
}

/// The versioning state of a bucket.
///
/// Buckets start with versioning disabled. Once enabled, versioning can only
/// be suspended, never fully removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BucketVersioningStatus {
    /// Every write to a key creates a new, independently addressable version.
    Enabled,
    /// New writes overwrite the `null` version; existing versions remain.
    Suspended,
}

impl BucketVersioningStatus {
    /// The wire representation of the versioning state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Suspended => "Suspended",
        }
    }
}

impl std::fmt::Display for BucketVersioningStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A server-managed encryption algorithm.
///
/// The service owns the encryption keys; callers select an algorithm by
/// name and never supply key material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SseAlgorithm {
    /// AES-256 with keys managed by the storage service (SSE-S3).
    Aes256,
    /// Keys managed through the provider's key-management service (SSE-KMS).
    AwsKms,
}

impl SseAlgorithm {
    /// The algorithm identifier as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aes256 => "AES256",
            Self::AwsKms => "aws:kms",
        }
    }
}

impl std::fmt::Display for SseAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
