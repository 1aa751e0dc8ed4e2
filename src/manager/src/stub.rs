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

//! The interface of the object-storage service consumed by the manager.

use crate::Result;
use crate::model::{BucketVersioningStatus, PutObjectRequest, PutObjectResponse};

/// Defines the trait used to implement [crate::client::ArtifactManager].
///
/// Application developers may need to implement this trait to mock
/// `client::ArtifactManager`. In other use-cases, application developers only
/// use `client::ArtifactManager` and need not be concerned with this trait or
/// its implementations.
///
/// The trait may gain new methods as the manager grows. To avoid breaking
/// implementations, every method provides a default implementation. These
/// default implementations panic with an unimplemented message.
pub trait ObjectStore: std::fmt::Debug + Send + Sync {
    /// Queries whether the bucket exists.
    fn bucket_exists(
        &self,
        _bucket: String,
    ) -> impl std::future::Future<Output = Result<bool>> + Send {
        unimplemented_stub::<bool>()
    }

    /// Creates the bucket in the region the store is bound to.
    fn create_bucket(
        &self,
        _bucket: String,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Sets the bucket's versioning configuration.
    fn set_bucket_versioning(
        &self,
        _bucket: String,
        _status: BucketVersioningStatus,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Stores the contents of a local file as a new object version.
    fn put_object(
        &self,
        _request: PutObjectRequest,
    ) -> impl std::future::Future<Output = Result<PutObjectResponse>> + Send {
        unimplemented_stub::<PutObjectResponse>()
    }
}

async fn unimplemented_stub<T>() -> Result<T> {
    unimplemented!("the default implementations in this trait always panic");
}

/// The dyn-compatible version of [ObjectStore].
pub mod dynamic {
    use super::{BucketVersioningStatus, PutObjectRequest, PutObjectResponse, Result};
    use futures::future::BoxFuture;

    /// Runtime-dispatch version of [ObjectStore](super::ObjectStore).
    ///
    /// This is used by [crate::client::ArtifactManager] to hold any
    /// implementation of the stub trait behind a single pointer. A blanket
    /// implementation covers all implementations of the static trait, so
    /// applications never implement this trait directly.
    pub trait ObjectStore: std::fmt::Debug + Send + Sync {
        /// Implements [super::ObjectStore::bucket_exists].
        fn bucket_exists<'a>(&'a self, bucket: String) -> BoxFuture<'a, Result<bool>>;

        /// Implements [super::ObjectStore::create_bucket].
        fn create_bucket<'a>(&'a self, bucket: String) -> BoxFuture<'a, Result<()>>;

        /// Implements [super::ObjectStore::set_bucket_versioning].
        fn set_bucket_versioning<'a>(
            &'a self,
            bucket: String,
            status: BucketVersioningStatus,
        ) -> BoxFuture<'a, Result<()>>;

        /// Implements [super::ObjectStore::put_object].
        fn put_object<'a>(
            &'a self,
            request: PutObjectRequest,
        ) -> BoxFuture<'a, Result<PutObjectResponse>>;
    }

    impl<T: super::ObjectStore> ObjectStore for T {
        fn bucket_exists<'a>(&'a self, bucket: String) -> BoxFuture<'a, Result<bool>> {
            Box::pin(super::ObjectStore::bucket_exists(self, bucket))
        }

        fn create_bucket<'a>(&'a self, bucket: String) -> BoxFuture<'a, Result<()>> {
            Box::pin(super::ObjectStore::create_bucket(self, bucket))
        }

        fn set_bucket_versioning<'a>(
            &'a self,
            bucket: String,
            status: BucketVersioningStatus,
        ) -> BoxFuture<'a, Result<()>> {
            Box::pin(super::ObjectStore::set_bucket_versioning(
                self, bucket, status,
            ))
        }

        fn put_object<'a>(
            &'a self,
            request: PutObjectRequest,
        ) -> BoxFuture<'a, Result<PutObjectResponse>> {
            Box::pin(super::ObjectStore::put_object(self, request))
        }
    }
}
