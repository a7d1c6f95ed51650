//! Manages the gateway's connections to external collaborators.
//!
//! Every feature handler goes through `CoreApi`: it holds the single
//! `ApiClient` and `Uploader` instances and resolves the browser's cookie
//! jar into the bearer token a given role requires.

use axum_extra::extract::cookie::CookieJar;

use adapters::{ApiClient, Uploader};

use crate::auth::{AuthError, TokenRole};
use crate::config::Config;

#[derive(Clone, Debug)]
pub struct CoreApi {
    client: ApiClient,
    uploader: Uploader,
}

impl CoreApi {
    pub fn new(config: &Config) -> Self {
        let client = ApiClient::new(config.api_base_url.clone());
        let uploader = Uploader::new(client.clone());
        Self { client, uploader }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn uploader(&self) -> &Uploader {
        &self.uploader
    }

    /// Reads the bearer token for `role` out of the cookie jar. Proxy
    /// handlers call this before every upstream request; a missing cookie
    /// is a 401, never a panic or a silent anonymous call.
    pub fn bearer(&self, jar: &CookieJar, role: TokenRole) -> Result<String, AuthError> {
        jar.get(role.cookie_name())
            .map(|cookie| cookie.value().to_string())
            .ok_or(AuthError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Cookie;

    fn service() -> CoreApi {
        CoreApi::new(&Config::for_tests("http://localhost:9"))
    }

    #[test]
    fn bearer_reads_the_role_cookie() {
        let jar = CookieJar::new().add(Cookie::new("userToken", "abc"));
        assert_eq!(service().bearer(&jar, TokenRole::User).unwrap(), "abc");
    }

    #[test]
    fn bearer_is_role_scoped() {
        let jar = CookieJar::new().add(Cookie::new("userToken", "abc"));
        assert_eq!(
            service().bearer(&jar, TokenRole::Admin).unwrap_err(),
            AuthError::MissingToken
        );
    }
}
