//! Shared fixtures for the posts test suite.
//!
//! # Design
//! Pure value constructors, evaluated fresh per test so no mutable state is
//! ever shared between cases. `existing_post_id` is known to pre-exist on
//! the service; `non_existent_post_id` is known to be absent.

use crate::types::NewPost;

/// Content type sent with every JSON-body request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Base address of the service under test.
pub fn base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

/// Default request headers for JSON payloads.
pub fn headers() -> Vec<(String, String)> {
    vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())]
}

/// A valid creation payload with fixed sample values.
pub fn sample_post() -> NewPost {
    NewPost {
        title: "Test Post Title".to_string(),
        body: "This is a test post body content for API testing".to_string(),
        user_id: 1,
    }
}

/// An id guaranteed to exist on the service.
pub fn existing_post_id() -> u64 {
    1
}

/// An id guaranteed to be absent from the service.
pub fn non_existent_post_id() -> u64 {
    999
}
