//! Upload handle and job request value objects

use std::fmt;

/// URL returned by the remote service identifying uploaded audio.
/// Only meaningful for the lifetime of the remote job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UploadHandle(String);

impl UploadHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UploadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UploadHandle {
    fn from(url: String) -> Self {
        Self(url)
    }
}

/// Request registering a transcription job for uploaded content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    content_handle: UploadHandle,
}

impl JobRequest {
    pub fn new(content_handle: UploadHandle) -> Self {
        Self { content_handle }
    }

    pub fn content_handle(&self) -> &UploadHandle {
        &self.content_handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_displays_url() {
        let handle = UploadHandle::new("https://cdn.example/abc");
        assert_eq!(handle.to_string(), "https://cdn.example/abc");
        assert_eq!(handle.as_str(), "https://cdn.example/abc");
    }

    #[test]
    fn request_wraps_handle() {
        let handle = UploadHandle::from("https://cdn.example/abc".to_string());
        let request = JobRequest::new(handle.clone());
        assert_eq!(request.content_handle(), &handle);
    }
}
