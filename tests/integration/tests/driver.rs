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

#[cfg(all(test, feature = "run-integration-tests"))]
mod driver {
    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn run_upload_creates_bucket_with_versioning() -> integration_tests::Result<()> {
        let _guard = integration_tests::enable_tracing();
        integration_tests::manager::upload_creates_bucket_with_versioning()
            .await
            .map_err(integration_tests::report_error)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn run_upload_enables_versioning_on_existing_bucket() -> integration_tests::Result<()> {
        let _guard = integration_tests::enable_tracing();
        integration_tests::manager::upload_enables_versioning_on_existing_bucket()
            .await
            .map_err(integration_tests::report_error)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn run_upload_adds_encrypted_object_to_bucket() -> integration_tests::Result<()> {
        let _guard = integration_tests::enable_tracing();
        integration_tests::manager::upload_adds_encrypted_object_to_bucket()
            .await
            .map_err(integration_tests::report_error)
    }
}
