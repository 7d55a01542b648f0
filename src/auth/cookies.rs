// Authentication cookie construction

use crate::config::AppConfig;
use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Settings shared by both auth cookies
#[derive(Debug, Clone)]
pub struct CookieSettings {
    domain: String,
    same_site: SameSite,
    access_max_age: Duration,
    refresh_max_age: Duration,
}

impl CookieSettings {
    /// Build cookie settings from application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let same_site = match config.cookie_same_site.to_lowercase().as_str() {
            "lax" => SameSite::Lax,
            "none" => SameSite::None,
            _ => SameSite::Strict,
        };

        Self {
            domain: config.cookie_domain.clone(),
            same_site,
            access_max_age: Duration::seconds(config.access_token_ttl_secs),
            refresh_max_age: Duration::seconds(config.refresh_token_ttl_secs),
        }
    }

    /// Cookie carrying the access token (max-age one hour by default)
    pub fn access_cookie(&self, token: String) -> Cookie<'static> {
        self.build(ACCESS_TOKEN_COOKIE, token, self.access_max_age)
    }

    /// Cookie carrying the refresh token (max-age one year by default)
    pub fn refresh_cookie(&self, token: String) -> Cookie<'static> {
        self.build(REFRESH_TOKEN_COOKIE, token, self.refresh_max_age)
    }

    fn build(&self, name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
        let mut cookie = Cookie::new(name, value);
        cookie.set_http_only(true);
        cookie.set_same_site(self.same_site);
        cookie.set_domain(self.domain.clone());
        cookie.set_path("/");
        cookie.set_max_age(max_age);
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_settings() -> CookieSettings {
        CookieSettings::from_config(&AppConfig::for_tests())
    }

    #[test]
    fn test_access_cookie_max_age_is_one_hour() {
        let cookie = default_settings().access_cookie("token-value".to_string());
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    }

    #[test]
    fn test_refresh_cookie_max_age_is_one_year() {
        let cookie = default_settings().refresh_cookie("token-value".to_string());
        assert_eq!(cookie.max_age(), Some(Duration::seconds(31_536_000)));
    }

    #[test]
    fn test_cookies_are_http_only_and_strict() {
        let settings = default_settings();
        for cookie in [
            settings.access_cookie("a".to_string()),
            settings.refresh_cookie("r".to_string()),
        ] {
            assert_eq!(cookie.http_only(), Some(true));
            assert_eq!(cookie.same_site(), Some(SameSite::Strict));
            assert_eq!(cookie.domain(), Some("localhost"));
            assert_eq!(cookie.path(), Some("/"));
        }
    }

    #[test]
    fn test_cookie_names() {
        let settings = default_settings();
        assert_eq!(settings.access_cookie("a".to_string()).name(), "accessToken");
        assert_eq!(
            settings.refresh_cookie("r".to_string()).name(),
            "refreshToken"
        );
    }

    #[test]
    fn test_same_site_policy_is_configurable() {
        let mut config = AppConfig::for_tests();
        config.cookie_same_site = "lax".to_string();
        let cookie = CookieSettings::from_config(&config).access_cookie("a".to_string());
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
