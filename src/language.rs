use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

/// Languages the client asked for, ordered by Accept-Language quality.
pub struct UserLanguage(Vec<String>);

impl UserLanguage {
    pub fn preferred_languages(&self) -> &[String] {
        &self.0
    }
}

impl<S: Sync> FromRequestParts<S> for UserLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let mut languages = header
            .split(',')
            .filter_map(|entry| {
                let mut pieces = entry.trim().split(';');
                let tag = pieces.next()?.trim();
                if tag.is_empty() || tag == "*" {
                    return None;
                }

                let quality = pieces
                    .find_map(|piece| piece.trim().strip_prefix("q="))
                    .and_then(|quality| quality.parse::<f32>().ok())
                    .unwrap_or(1.0);

                Some((tag.to_owned(), quality))
            })
            .collect::<Vec<_>>();

        languages.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(Self(languages.into_iter().map(|(tag, _)| tag).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(value: &str) -> UserLanguage {
        let (mut parts, _) = Request::builder()
            .header(header::ACCEPT_LANGUAGE, value)
            .body(())
            .unwrap()
            .into_parts();

        UserLanguage::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn orders_by_quality() {
        let languages = extract("en;q=0.5, es, fr;q=0.8").await;

        assert_eq!(languages.preferred_languages(), ["es", "fr", "en"]);
    }

    #[tokio::test]
    async fn skips_wildcard() {
        let languages = extract("*, es-MX;q=0.9").await;

        assert_eq!(languages.preferred_languages(), ["es-MX"]);
    }
}
