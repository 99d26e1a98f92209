//! Wrapped client that handles auth errors automatically
//!
//! Every authenticated call goes through [`WrappedAuthClient`]; a 401 from
//! the server means the token is dead, so the wrapper performs the full
//! logout side effect instead of handing the response to the caller.

use stockroom_http::client::{AuthenticatedStockClient, ClientError};

/// What to do with a received response, given its status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    /// 401: clear the session and redirect; the caller gets nothing
    ForceLogout,
    /// Anything else: hand the response over uninterpreted
    PassThrough,
}

fn disposition(status: u16) -> Disposition {
    if status == 401 {
        Disposition::ForceLogout
    } else {
        Disposition::PassThrough
    }
}

/// Wrapper around [`AuthenticatedStockClient`] that handles auth errors
#[derive(Clone)]
pub struct WrappedAuthClient {
    inner: AuthenticatedStockClient,
}

impl WrappedAuthClient {
    /// Create a new wrapped client
    pub fn new(client: AuthenticatedStockClient) -> Self {
        Self { inner: client }
    }

    /// Create a request builder carrying the bearer header
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.inner.request(method, path)
    }

    /// Send a request and return the raw response.
    ///
    /// A 401 triggers the forced logout and resolves to `Ok(None)`; any other
    /// status (2xx, other 4xx, 5xx) resolves to `Ok(Some(response))` with no
    /// storage mutation and no redirect, interpretation is the caller's
    /// business. Transport failures propagate untranslated.
    pub async fn send_raw(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Option<reqwest::Response>, ClientError> {
        let response = self.inner.send(request).await?;
        match disposition(response.status().as_u16()) {
            Disposition::ForceLogout => {
                log::warn!("server rejected the session token, logging out");
                crate::session::expired::trigger_auth_expired();
                Ok(None)
            }
            Disposition::PassThrough => Ok(Some(response)),
        }
    }

    /// Execute a request, decoding a JSON body, with auth-error handling.
    ///
    /// Used by the typed services; on a rejected token the logout side effect
    /// runs before the error is returned.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        match self.inner.execute(request).await {
            Ok(result) => Ok(result),
            Err(error) => {
                if error.is_auth_expired() {
                    log::warn!("server rejected the session token, logging out");
                    crate::session::expired::trigger_auth_expired();
                }
                Err(error)
            }
        }
    }

    /// Get a reference to the inner client (use sparingly - prefer wrapped methods)
    pub fn inner(&self) -> &AuthenticatedStockClient {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_401_forces_logout() {
        assert_eq!(disposition(401), Disposition::ForceLogout);
        for status in [200u16, 201, 204, 400, 403, 404, 422, 500, 502] {
            assert_eq!(disposition(status), Disposition::PassThrough);
        }
    }
}
