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

//! Contains the artifact manager client and related types.

use crate::Result;
use crate::error::{Error, UploadError};
use crate::model::{BucketVersioningStatus, PutObjectRequest, SseAlgorithm};
use crate::stub;
use aws_sdk_s3::config::Region;
use std::path::Path;
use std::sync::Arc;

/// The encryption applied to every artifact. Not caller-configurable.
const ENCRYPTION_ALGORITHM: SseAlgorithm = SseAlgorithm::Aes256;

/// Implements a client to upload artifacts to Amazon S3.
///
/// # Example
/// ```no_run
/// # use s3_artifact_manager::client::ArtifactManager;
/// # use aws_sdk_s3::config::Region;
/// # async fn example() -> s3_artifact_manager::Result<()> {
/// let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
/// let client = aws_sdk_s3::Client::new(&config);
/// let manager = ArtifactManager::new(client, Region::new("us-east-1"));
/// let version = manager
///     .upload("my-bucket", "releases/artifact.tar.gz", "artifact.tar.gz")
///     .await?;
/// println!("stored artifact as version {version}");
/// # Ok(()) }
/// ```
///
/// # Guarantees
///
/// When [upload()][ArtifactManager::upload] returns successfully, the
/// destination bucket exists, the bucket has versioning enabled, and the
/// stored object is encrypted at rest with server-managed keys. The returned
/// version id addresses this exact write among all versions of the object.
///
/// # Pooling and Cloning
///
/// `ArtifactManager` wraps the connection pool of the `aws_sdk_s3::Client` it
/// was created from. You do not need to wrap `ArtifactManager` in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct ArtifactManager {
    inner: Arc<dyn stub::dynamic::ObjectStore>,
}

impl ArtifactManager {
    /// Creates a new manager from a pre-configured S3 client.
    ///
    /// The client owns authentication, transport, and retries. The manager
    /// rebinds the client's configuration to `region` for its lifetime:
    /// buckets are created in that region, and all requests are sent to it.
    pub fn new(client: aws_sdk_s3::Client, region: Region) -> Self {
        Self {
            inner: Arc::new(crate::transport::S3Transport::new(client, region)),
        }
    }

    /// Creates a new manager from an [ObjectStore][stub::ObjectStore]
    /// implementation.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// storage service.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: stub::ObjectStore + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    /// Uploads a local file to `bucket` under `key` and returns the version
    /// id assigned by the service.
    ///
    /// The manager creates the bucket if it does not exist, then asserts the
    /// bucket's versioning configuration on every call, even when the bucket
    /// pre-existed with versioning already enabled. The write always carries
    /// the server-managed encryption directive.
    ///
    /// Any failure aborts the call immediately. There is no compensation for
    /// completed steps: a bucket that was just created, or a versioning
    /// configuration that was just asserted, stays in place.
    ///
    /// # Parameters
    /// * `bucket` - the destination bucket name. Need not pre-exist.
    /// * `key` - the object key under which to store the file.
    /// * `file` - the path of a readable local file; its full contents become
    ///   the object body.
    ///
    /// # Example
    /// ```
    /// # use s3_artifact_manager::client::ArtifactManager;
    /// async fn example(manager: &ArtifactManager) -> s3_artifact_manager::Result<()> {
    ///     let version = manager.upload("my-bucket", "my-object", "artifact.tar.gz").await?;
    ///     println!("stored artifact as version {version}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn upload<B, K>(&self, bucket: B, key: K, file: impl AsRef<Path>) -> Result<String>
    where
        B: Into<String>,
        K: Into<String>,
    {
        let bucket = bucket.into();
        let key = key.into();
        if !self.inner.bucket_exists(bucket.clone()).await? {
            self.inner.create_bucket(bucket.clone()).await?;
            tracing::debug!("created bucket {bucket}");
        }
        self.inner
            .set_bucket_versioning(bucket.clone(), BucketVersioningStatus::Enabled)
            .await?;
        let request = PutObjectRequest::new(&bucket, &key, file.as_ref())
            .set_server_side_encryption(ENCRYPTION_ALGORITHM);
        let response = self.inner.put_object(request).await?;
        tracing::debug!(
            "stored {key} in {bucket} as version {:?}",
            response.version_id
        );
        response
            .version_id
            .ok_or_else(|| Error::client(UploadError::MissingVersionId))
    }
}
