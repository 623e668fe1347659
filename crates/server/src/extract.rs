//! Request extractors.
//!
//! Every wishlist route is scoped to a tenant/client pair supplied as
//! request headers. The [`CallerContext`] extractor validates both before
//! the handler runs; requests missing either header are rejected with a
//! bad-request outcome.

use axum::{extract::FromRequestParts, http::request::Parts};
use wishlist_core::{ClientId, Tenant};

use crate::error::AppError;

/// Header carrying the tenant identifier.
pub const HEADER_TENANT: &str = "hybris-tenant";

/// Header carrying the client identifier.
pub const HEADER_CLIENT: &str = "hybris-client";

/// Validated caller metadata extracted from request headers.
#[derive(Debug, Clone)]
pub struct CallerContext {
    /// The tenant whose data the request operates on.
    pub tenant: Tenant,
    /// The calling application within the tenant.
    pub client: ClientId,
}

impl<S> FromRequestParts<S> for CallerContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let tenant = header_value(parts, HEADER_TENANT)?;
        let client = header_value(parts, HEADER_CLIENT)?;

        let tenant = Tenant::parse(tenant)
            .map_err(|e| AppError::BadRequest(format!("invalid {HEADER_TENANT} header: {e}")))?;
        let client = ClientId::parse(client)
            .map_err(|e| AppError::BadRequest(format!("invalid {HEADER_CLIENT} header: {e}")))?;

        Ok(Self { tenant, client })
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, AppError> {
    parts
        .headers
        .get(name)
        .ok_or_else(|| AppError::BadRequest(format!("missing {name} header")))?
        .to_str()
        .map_err(|_| AppError::BadRequest(format!("invalid {name} header")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{
        extract::FromRequestParts,
        http::Request,
    };

    async fn extract(request: Request<()>) -> Result<CallerContext, AppError> {
        let (mut parts, ()) = request.into_parts();
        CallerContext::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_valid_headers() {
        let request = Request::builder()
            .header(HEADER_TENANT, "acme")
            .header(HEADER_CLIENT, "acme.wishlist")
            .body(())
            .unwrap();

        let caller = extract(request).await.unwrap();
        assert_eq!(caller.tenant.as_str(), "acme");
        assert_eq!(caller.client.as_str(), "acme.wishlist");
    }

    #[tokio::test]
    async fn test_missing_tenant_header_is_rejected() {
        let request = Request::builder()
            .header(HEADER_CLIENT, "acme.wishlist")
            .body(())
            .unwrap();

        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_malformed_tenant_is_rejected() {
        let request = Request::builder()
            .header(HEADER_TENANT, "Not A Tenant")
            .header(HEADER_CLIENT, "acme.wishlist")
            .body(())
            .unwrap();

        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
