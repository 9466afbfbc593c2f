//! Pagination response headers
//!
//! Listing endpoints return the items as the body and describe the page in
//! headers: `X-Total-Count`, `X-Page-Number`, `X-Page-Size`,
//! `X-Total-Pages` and an RFC 8288 `Link` header with `first`, `prev`,
//! `next` and `last` relations.

use axum::http::{header::LINK, HeaderMap, HeaderName, HeaderValue, Uri};

use core_kernel::Page;

pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");
pub const X_PAGE_NUMBER: HeaderName = HeaderName::from_static("x-page-number");
pub const X_PAGE_SIZE: HeaderName = HeaderName::from_static("x-page-size");
pub const X_TOTAL_PAGES: HeaderName = HeaderName::from_static("x-total-pages");

const PAGE_NUMBER_PARAM: &str = "pageNumber";
const PAGE_SIZE_PARAM: &str = "pageSize";

/// Builds the pagination headers for `page`, linking relative to `uri`
pub fn pagination_headers<T>(page: &Page<T>, uri: &Uri) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(X_TOTAL_COUNT, HeaderValue::from(page.total));
    headers.insert(X_PAGE_NUMBER, HeaderValue::from(page.page_number));
    headers.insert(X_PAGE_SIZE, HeaderValue::from(page.page_size));
    headers.insert(X_TOTAL_PAGES, HeaderValue::from(page.total_pages()));

    if let Ok(link) = HeaderValue::from_str(&link_header(page, uri)) {
        headers.insert(LINK, link);
    }

    headers
}

/// Renders the `Link` header value
///
/// Query parameters other than the page number and size are kept as sent.
pub fn link_header<T>(page: &Page<T>, uri: &Uri) -> String {
    let retained: Vec<&str> = uri
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split('=').next().unwrap_or_default();
            key != PAGE_NUMBER_PARAM && key != PAGE_SIZE_PARAM
        })
        .collect();

    let link = |number: u32, rel: &str| {
        let mut query: Vec<String> = retained.iter().map(|pair| pair.to_string()).collect();
        query.push(format!("{}={}", PAGE_NUMBER_PARAM, number));
        query.push(format!("{}={}", PAGE_SIZE_PARAM, page.page_size));
        format!("<{}?{}>; rel=\"{}\"", uri.path(), query.join("&"), rel)
    };

    let last = page.total_pages();
    let mut links = vec![link(1, "first")];
    if page.has_previous_page() {
        links.push(link(page.page_number.saturating_sub(1).min(last), "prev"));
    }
    if page.has_next_page() {
        links.push(link(page.page_number + 1, "next"));
    }
    links.push(link(last, "last"));

    links.join(", ")
}
