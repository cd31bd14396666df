// =====================================================
// FILE: src/server/extract.rs - REQUEST LOCALE EXTRACTOR
// =====================================================

use crate::i18n::{locale_from_path, Locale};
use crate::server::handlers::not_found_response;
use actix_web::{dev::Payload, error::InternalError, FromRequest, HttpMessage, HttpRequest};
use futures::future::{ready, Ready};

/// Locale of a page request: set by `LocaleRedirect`, else read from the
/// path. Requests without one get the not-found page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLocale(pub Locale);

impl FromRequest for PageLocale {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let locale = req
            .extensions()
            .get::<Locale>()
            .copied()
            .or_else(|| locale_from_path(req.path()));

        ready(match locale {
            Some(locale) => Ok(PageLocale(locale)),
            None => Err(InternalError::from_response(
                "unsupported locale",
                not_found_response(req),
            )
            .into()),
        })
    }
}
