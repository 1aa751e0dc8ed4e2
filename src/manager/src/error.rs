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

//! The errors returned by the artifact manager.

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The error returned by all operations in this crate.
///
/// Failures come from two sources. The service may reject or fail a request
/// (authorization failures, conflicting bucket names, malformed versioning
/// requests), or the request may fail before a service response is received
/// (connection problems, timeouts, an unreadable source file, a response the
/// client cannot interpret). The two kinds map to the distinction made by the
/// underlying SDK, and callers that need to branch on the failure cause can
/// use the predicates and accessors on this type. Deeper information is
/// available through the error [source][std::error::Error::source].
///
/// # Example
/// ```
/// use s3_artifact_manager::error::Error;
/// match example_function() {
///     Err(e) if e.is_service() => {
///         println!("the service rejected the request {e}, code={:?}", e.code());
///     }
///     Err(e) => { println!("local failure {e}"); }
///     Ok(_) => { println!("success, how boring"); }
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use s3_artifact_manager::error::ServiceStatus;
///     # Err(Error::service(ServiceStatus::new().set_code("NoSuchBucket").set_message("NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use s3_artifact_manager::error::{Error, ServiceStatus};
    /// let status = ServiceStatus::new().set_code("AccessDenied").set_message("Access Denied");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: ServiceStatus) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(status)),
            source: None,
        }
    }

    /// Creates a service error preserving the originating SDK error.
    pub(crate) fn service_with_source<T: Into<BoxError>>(status: ServiceStatus, source: T) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(status)),
            source: Some(source.into()),
        }
    }

    /// Creates an error for failures detected on the client side.
    ///
    /// These include request construction problems, connection and timeout
    /// failures, and responses the client cannot interpret. The request may
    /// or may not have reached the service.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use s3_artifact_manager::error::Error;
    /// let error = Error::client("simulated connection reset");
    /// assert!(error.is_client());
    /// assert!(error.source().is_some());
    /// ```
    pub fn client<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Client,
            source: Some(source.into()),
        }
    }

    /// The service rejected or failed the request.
    ///
    /// The failure details reported by the service are available through
    /// [status()][Error::status] and its shorthand accessors.
    pub fn is_service(&self) -> bool {
        matches!(self.kind, ErrorKind::Service(_))
    }

    /// The request failed before a service response was received, or the
    /// response could not be interpreted.
    pub fn is_client(&self) -> bool {
        matches!(self.kind, ErrorKind::Client)
    }

    /// The [ServiceStatus] payload associated with this error, if any.
    ///
    /// # Example
    /// ```
    /// use s3_artifact_manager::error::{Error, ServiceStatus};
    /// let error = Error::service(ServiceStatus::new().set_code("NoSuchBucket"));
    /// if let Some(status) = error.status() {
    ///     if status.code.as_deref() == Some("NoSuchBucket") {
    ///         println!("cannot find the bucket, more details in {status:?}");
    ///     }
    /// }
    /// ```
    pub fn status(&self) -> Option<&ServiceStatus> {
        match &self.kind {
            ErrorKind::Service(status) => Some(status.as_ref()),
            _ => None,
        }
    }

    /// The error code reported by the service, if any.
    pub fn code(&self) -> Option<&str> {
        self.status().and_then(|s| s.code.as_deref())
    }

    /// The human-readable message reported by the service, if any.
    pub fn message(&self) -> Option<&str> {
        self.status().and_then(|s| s.message.as_deref())
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        self.status().and_then(|s| s.http_status_code)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Service(status), _) => {
                let code = status.code.as_deref().unwrap_or("unknown");
                let message = status.message.as_deref().unwrap_or("no message");
                write!(
                    f,
                    "the service reports an error with code {code} described as: {message}"
                )
            }
            (ErrorKind::Client, Some(e)) => {
                write!(f, "the client reports an error making the request: {e}")
            }
            (ErrorKind::Client, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Service(Box<ServiceStatus>),
    Client,
}

/// The failure details reported by the service.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceStatus {
    /// The machine-readable error code, e.g. `AccessDenied` or `NoSuchBucket`.
    pub code: Option<String>,

    /// A developer-facing description of the failure.
    pub message: Option<String>,

    /// The HTTP status code of the response carrying the failure.
    pub http_status_code: Option<u16>,
}

impl ServiceStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [code][ServiceStatus::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = Some(v.into());
        self
    }

    /// Sets the value of [message][ServiceStatus::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets the value of [http_status_code][ServiceStatus::http_status_code].
    pub fn set_http_status_code<T: Into<u16>>(mut self, v: T) -> Self {
        self.http_status_code = Some(v.into());
        self
    }
}

/// Problems detected while completing an otherwise successful upload.
///
/// These are reported as the `source()` of a client-side [Error].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum UploadError {
    /// The service stored the object but did not assign a version id.
    ///
    /// The upload itself succeeded, so this does not indicate data loss. It
    /// does mean the write cannot be addressed among the other versions of
    /// the object, which defeats the purpose of the returned id.
    #[error("the service did not assign a version id to the stored object")]
    MissingVersionId,
}
