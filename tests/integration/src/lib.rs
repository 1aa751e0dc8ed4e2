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

//! Integration tests for the artifact manager.
//!
//! These tests run against a live S3 (or S3-compatible) endpoint and are
//! disabled unless the `run-integration-tests` feature is enabled. The
//! endpoint, region, and credentials come from the ambient AWS environment.

use std::io::Write;

pub type Result<T> = anyhow::Result<T>;


/// A common prefix for resource ids.
///
/// Where possible, we use this prefix for randomly generated resource ids.
pub const PREFIX: &str = "rust-artifact-testing-";

/// The maximum length for a bucket id.
const BUCKET_ID_LENGTH: usize = 63;

const LOWERCASE_ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// The contents of every sample file uploaded by these tests.
pub const SAMPLE_CONTENTS: &str = "unit and integration testing of artifact uploads\n";

pub fn report_error(e: anyhow::Error) -> anyhow::Error {
    eprintln!("\n\nERROR {e:?}\n");
    tracing::error!("ERROR {e:?}");
    e
}

/// Generate a random bucket id.
pub fn random_bucket_id() -> String {
    let id = random_lowercase_alphanumeric(BUCKET_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

/// Generate a random object key.
pub fn random_object_key() -> String {
    format!("artifact-{}", random_lowercase_alphanumeric(16))
}

fn random_lowercase_alphanumeric(n: usize) -> String {
    use rand::Rng;
    let mut rng = rand::rng();
    (0..n)
        .map(|_| {
            let index = rng.random_range(0..LOWERCASE_ALPHANUMERIC.len());
            LOWERCASE_ALPHANUMERIC[index] as char
        })
        .collect()
}

/// Create a temporary file with well-known contents.
pub fn sample_file() -> Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(SAMPLE_CONTENTS.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Enables tracing for the test run.
pub fn enable_tracing() -> tracing::subscriber::DefaultGuard {
    use tracing_subscriber::fmt::format::FmtSpan;
    #[cfg(feature = "log-integration-tests")]
    let max_level = tracing::Level::INFO;
    #[cfg(not(feature = "log-integration-tests"))]
    let max_level = tracing::Level::WARN;
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_max_level(max_level)
        .finish();

    tracing::subscriber::set_default(subscriber)
}
