//! Backend endpoints and publishable API keys.
//!
//! Resolved at compile time from `SPROUT_*` environment variables, with
//! local dev-stack defaults so a checkout builds without any setup. A build
//! that ships with placeholder keys complains at startup instead of failing
//! silently on the first request.

/// One remote backend: a PostgREST-style base URL plus its publishable key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Backend {
    pub base_url: &'static str,
    pub api_key: &'static str,
}

const DEV_TABLES_URL: &str = "http://127.0.0.1:54321/rest/v1";
const DEV_PLANS_URL: &str = "http://127.0.0.1:54322/rest/v1";

/// The hosted table store (check-ins, profiles, achievements, wishes, admins).
pub fn tables() -> Backend {
    Backend {
        base_url: option_env!("SPROUT_TABLES_URL").unwrap_or(DEV_TABLES_URL),
        api_key: option_env!("SPROUT_TABLES_KEY").unwrap_or(""),
    }
}

/// The relational store holding study-plan scheduling metadata.
pub fn plans() -> Backend {
    Backend {
        base_url: option_env!("SPROUT_PLANS_URL").unwrap_or(DEV_PLANS_URL),
        api_key: option_env!("SPROUT_PLANS_KEY").unwrap_or(""),
    }
}

/// Log an error when the build carries no real backend keys.
pub fn warn_if_unconfigured() {
    if tables().api_key.is_empty() || plans().api_key.is_empty() {
        log::error!(
            "backend keys not configured; set SPROUT_TABLES_URL/SPROUT_TABLES_KEY and \
             SPROUT_PLANS_URL/SPROUT_PLANS_KEY at build time"
        );
    }
}
