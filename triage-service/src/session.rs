//! Signed session-cookie handling for the two-leg form flow.
//!
//! The POST handler stores the submission server-side under a random token
//! and hands the browser only the token, HMAC-SHA256 signed with the
//! configured secret. Format: `"{token}.{hmac_hex}"`.

use axum::http::{HeaderMap, header};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const SESSION_COOKIE: &str = "triage_session";

/// Sign a session token with the configured secret.
pub fn sign_token(secret: &str, token: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(token.as_bytes());
    format!("{}.{}", token, hex::encode(mac.finalize().into_bytes()))
}

/// Verify a signed value and return the bare token, or `None` when the
/// signature does not match.
pub fn verify_token(secret: &str, value: &str) -> Option<String> {
    let (token, sig_hex) = value.rsplit_once('.')?;
    let sig = hex::decode(sig_hex).ok()?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(token.as_bytes());
    mac.verify_slice(&sig).ok()?;

    Some(token.to_string())
}

/// Build the Set-Cookie value carrying the signed token.
pub fn build_cookie(secret: &str, token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly",
        SESSION_COOKIE,
        sign_token(secret, token)
    )
}

/// Extract and verify the session token from the request's Cookie header.
pub fn token_from_headers(headers: &HeaderMap, secret: &str) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').map(str::trim).find_map(|pair| {
        let value = pair.strip_prefix(SESSION_COOKIE)?.strip_prefix('=')?;
        verify_token(secret, value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn sign_verify_round_trip() {
        let signed = sign_token("secret", "token-123");
        assert_eq!(verify_token("secret", &signed).as_deref(), Some("token-123"));
    }

    #[test]
    fn tampered_token_fails_verification() {
        let signed = sign_token("secret", "token-123");
        let tampered = signed.replacen("token-123", "token-456", 1);

        assert!(verify_token("secret", &tampered).is_none());
        assert!(verify_token("other-secret", &signed).is_none());
        assert!(verify_token("secret", "no-signature").is_none());
    }

    #[test]
    fn token_extracted_from_cookie_header() {
        let mut headers = HeaderMap::new();
        let cookie = format!("other=1; {}={}", SESSION_COOKIE, sign_token("secret", "abc"));
        headers.insert(header::COOKIE, HeaderValue::from_str(&cookie).unwrap());

        assert_eq!(
            token_from_headers(&headers, "secret").as_deref(),
            Some("abc")
        );
        assert!(token_from_headers(&headers, "wrong").is_none());
        assert!(token_from_headers(&HeaderMap::new(), "secret").is_none());
    }
}
