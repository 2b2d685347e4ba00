use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Request;

use crate::credential::EncodedCredential;

const APPLICATION_JSON: &str = "application/json";

/// Attach the auth and JSON content headers every Jira call carries.
///
/// Existing values are replaced, so repeated calls never accumulate headers.
pub fn set_common_headers(request: &mut Request, credential: &EncodedCredential) {
    let headers = request.headers_mut();
    headers.insert(AUTHORIZATION, credential.authorization());
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
}
