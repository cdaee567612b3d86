use super::*;
use crate::net::config::Backend;

const BACKEND: Backend = Backend {
    base_url: "https://example.test/rest/v1",
    api_key: "k",
};

#[test]
fn render_query_with_no_filters_selects_all() {
    assert_eq!(render_query(&[], None), "select=*");
}

#[test]
fn render_query_renders_eq_and_gte_filters_in_order() {
    let filters = [
        Filter::eq("is_active", "true"),
        Filter::gte("created_at", "2026-08-06T00:00:00.000Z"),
    ];
    assert_eq!(
        render_query(&filters, None),
        "select=*&is_active=eq.true&created_at=gte.2026-08-06T00:00:00.000Z"
    );
}

#[test]
fn render_query_appends_order_last() {
    let filters = [Filter::eq("status", "active")];
    assert_eq!(
        render_query(&filters, Some(Order::asc("sort_order"))),
        "select=*&status=eq.active&order=sort_order.asc"
    );
    assert_eq!(
        render_query(&[], Some(Order::desc("created_at"))),
        "select=*&order=created_at.desc"
    );
}

#[test]
fn table_url_joins_base_table_and_query() {
    assert_eq!(
        table_url(&BACKEND, "check_ins", "select=*"),
        "https://example.test/rest/v1/check_ins?select=*"
    );
    assert_eq!(table_url(&BACKEND, "profiles", ""), "https://example.test/rest/v1/profiles");
}

#[test]
fn errors_carry_enough_context_to_log() {
    let status = ApiError::Status {
        method: "GET",
        url: "https://example.test/rest/v1/profiles".to_owned(),
        status: 500,
    };
    assert_eq!(
        status.to_string(),
        "GET https://example.test/rest/v1/profiles returned status 500"
    );

    let missing = ApiError::NotFound {
        table: "profiles".to_owned(),
        id: "p1".to_owned(),
    };
    assert_eq!(missing.to_string(), "no row in profiles with id p1");
}
