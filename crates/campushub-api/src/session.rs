//! Session cookie transport.
//!
//! Binds the signed session token to an HTTP-only cookie. The frontend
//! runs on a separate origin, so the cookie is `SameSite=None` (which
//! requires `Secure` in production). The clearing cookie must carry the
//! same attributes as the setting cookie or browsers will not drop it.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use campushub_core::config::auth::AuthConfig;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Build the session cookie carrying a freshly issued token.
pub fn session_cookie(token: String, config: &AuthConfig) -> Cookie<'static> {
    base_cookie(token, config)
        .max_age(time::Duration::days(config.token_ttl_days))
        .build()
}

/// Build the cookie that clears the session.
///
/// Same attributes as [`session_cookie`], empty value, zero max-age.
pub fn expired_session_cookie(config: &AuthConfig) -> Cookie<'static> {
    base_cookie(String::new(), config)
        .max_age(time::Duration::ZERO)
        .build()
}

/// Extract the session token from a request's cookie jar.
pub fn token_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

fn base_cookie(value: String, config: &AuthConfig) -> cookie::CookieBuilder<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::None)
        .path("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secure: bool) -> AuthConfig {
        AuthConfig {
            cookie_secure: secure,
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("signed.token.value".into(), &config(true));

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "signed.token.value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(7)));
    }

    #[test]
    fn test_clear_cookie_matches_set_attributes() {
        let cfg = config(true);
        let set = session_cookie("t".into(), &cfg);
        let clear = expired_session_cookie(&cfg);

        assert_eq!(clear.name(), set.name());
        assert_eq!(clear.http_only(), set.http_only());
        assert_eq!(clear.secure(), set.secure());
        assert_eq!(clear.same_site(), set.same_site());
        assert_eq!(clear.path(), set.path());
        assert_eq!(clear.value(), "");
        assert_eq!(clear.max_age(), Some(time::Duration::ZERO));
    }

    #[test]
    fn test_secure_flag_follows_config() {
        let cookie = session_cookie("t".into(), &config(false));
        assert_ne!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_token_from_jar() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "abc"));
        assert_eq!(token_from_jar(&jar), Some("abc".to_string()));

        let empty = CookieJar::new();
        assert_eq!(token_from_jar(&empty), None);
    }
}
