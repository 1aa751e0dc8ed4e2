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

//! Implements the [ObjectStore] stub over the AWS SDK for Rust.

use crate::Result;
use crate::error::{Error, ServiceStatus};
use crate::model::{BucketVersioningStatus, PutObjectRequest, PutObjectResponse, SseAlgorithm};
use crate::stub::ObjectStore;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types;
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;

/// An [ObjectStore] backed by `aws_sdk_s3::Client`.
#[derive(Debug)]
pub(crate) struct S3Transport {
    client: aws_sdk_s3::Client,
    region: Region,
}

impl S3Transport {
    /// Rebinds `client` to `region` and wraps it as an [ObjectStore].
    pub(crate) fn new(client: aws_sdk_s3::Client, region: Region) -> Self {
        let config = client.config().to_builder().region(region.clone()).build();
        Self {
            client: aws_sdk_s3::Client::from_conf(config),
            region,
        }
    }

    fn location_constraint(&self) -> Option<types::BucketLocationConstraint> {
        // us-east-1 is the default location and rejects an explicit
        // constraint.
        match self.region.as_ref() {
            "us-east-1" => None,
            region => Some(types::BucketLocationConstraint::from(region)),
        }
    }
}

impl ObjectStore for S3Transport {
    async fn bucket_exists(&self, bucket: String) -> Result<bool> {
        match self.client.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(SdkError::ServiceError(context)) if context.err().is_not_found() => Ok(false),
            Err(e) => Err(map_sdk_error(e)),
        }
    }

    async fn create_bucket(&self, bucket: String) -> Result<()> {
        let mut request = self.client.create_bucket().bucket(bucket);
        if let Some(constraint) = self.location_constraint() {
            request = request.create_bucket_configuration(
                types::CreateBucketConfiguration::builder()
                    .location_constraint(constraint)
                    .build(),
            );
        }
        request.send().await.map_err(map_sdk_error)?;
        Ok(())
    }

    async fn set_bucket_versioning(
        &self,
        bucket: String,
        status: BucketVersioningStatus,
    ) -> Result<()> {
        let configuration = types::VersioningConfiguration::builder()
            .status(versioning_status(status))
            .build();
        self.client
            .put_bucket_versioning()
            .bucket(bucket)
            .versioning_configuration(configuration)
            .send()
            .await
            .map_err(map_sdk_error)?;
        Ok(())
    }

    async fn put_object(&self, request: PutObjectRequest) -> Result<PutObjectResponse> {
        let body = ByteStream::from_path(&request.source)
            .await
            .map_err(Error::client)?;
        let mut put = self
            .client
            .put_object()
            .bucket(request.bucket)
            .key(request.key)
            .body(body);
        if let Some(algorithm) = request.server_side_encryption {
            put = put.server_side_encryption(sse_algorithm(algorithm));
        }
        if let Some(key) = request.sse_customer_key {
            put = put
                .sse_customer_algorithm(SseAlgorithm::Aes256.as_str())
                .sse_customer_key(key);
        }
        let output = put.send().await.map_err(map_sdk_error)?;
        Ok(PutObjectResponse::new()
            .set_or_clear_version_id(output.version_id)
            .set_or_clear_etag(output.e_tag))
    }
}

fn versioning_status(status: BucketVersioningStatus) -> types::BucketVersioningStatus {
    match status {
        BucketVersioningStatus::Enabled => types::BucketVersioningStatus::Enabled,
        BucketVersioningStatus::Suspended => types::BucketVersioningStatus::Suspended,
    }
}

fn sse_algorithm(algorithm: SseAlgorithm) -> types::ServerSideEncryption {
    match algorithm {
        SseAlgorithm::Aes256 => types::ServerSideEncryption::Aes256,
        SseAlgorithm::AwsKms => types::ServerSideEncryption::AwsKms,
    }
}

/// Maps SDK failures to the crate error, preserving the service/client split.
pub(crate) fn map_sdk_error<E>(error: SdkError<E, HttpResponse>) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match error {
        SdkError::ServiceError(context) => {
            let http_status_code = context.raw().status().as_u16();
            let source = context.into_err();
            let mut status = ServiceStatus::new().set_http_status_code(http_status_code);
            if let Some(code) = source.code() {
                status = status.set_code(code);
            }
            if let Some(message) = source.message() {
                status = status.set_message(message);
            }
            Error::service_with_source(status, source)
        }
        other => Error::client(other),
    }
}
