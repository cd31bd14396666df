// =====================================================
// FILE: src/server/middleware.rs - LOCALE REDIRECT MIDDLEWARE
// =====================================================

use crate::server::resolver::{LocaleResolver, Resolution};
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{ACCEPT_LANGUAGE, LOCATION, VARY},
    Error, HttpMessage, HttpResponse,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::sync::Arc;

/// Redirects unprefixed page requests to `/{locale}/...` and stores the
/// resolved `Locale` in the request extensions for prefixed ones.
pub struct LocaleRedirect {
    resolver: Arc<LocaleResolver>,
}

impl LocaleRedirect {
    pub fn new(resolver: Arc<LocaleResolver>) -> Self {
        Self { resolver }
    }
}

impl<S, B> Transform<S, ServiceRequest> for LocaleRedirect
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = LocaleRedirectService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LocaleRedirectService {
            service,
            resolver: Arc::clone(&self.resolver),
        }))
    }
}

pub struct LocaleRedirectService<S> {
    service: S,
    resolver: Arc<LocaleResolver>,
}

impl<S, B> Service<ServiceRequest> for LocaleRedirectService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let accept_language = req
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());

        match self.resolver.resolve(req.path(), accept_language) {
            Resolution::Redirect { locale, location } => {
                let location = match req.query_string() {
                    "" => location,
                    query => format!("{}?{}", location, query),
                };
                log::debug!("Locale redirect ({}): {} -> {}", locale, req.path(), location);

                let response = HttpResponse::TemporaryRedirect()
                    .insert_header((LOCATION, location))
                    .insert_header((VARY, "Accept-Language"))
                    .finish()
                    .map_into_right_body();

                let (request, _payload) = req.into_parts();
                Box::pin(async move { Ok(ServiceResponse::new(request, response)) })
            }
            resolution => {
                if let Resolution::Localized(locale) = resolution {
                    req.extensions_mut().insert(locale);
                }
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
        }
    }
}
