use super::*;

#[test]
fn page_id_takes_last_segment() {
    assert_eq!(page_id("https://fit.test/app/stats.html"), "stats.html");
    assert_eq!(page_id("/dashboard.html"), "dashboard.html");
    assert_eq!(page_id("dashboard.html"), "dashboard.html");
}

#[test]
fn page_id_ignores_query_and_fragment() {
    assert_eq!(page_id("https://fit.test/stats.html?range=week#chart"), "stats.html");
    assert_eq!(page_id("/login.html#access_token=abc/def"), "login.html");
}

#[test]
fn page_id_of_root_is_empty() {
    assert_eq!(page_id("https://fit.test/"), "");
    assert_eq!(page_id(""), "");
}

#[test]
fn origin_keeps_scheme_host_and_port() {
    assert_eq!(origin("https://fit.test/dashboard.html"), Some("https://fit.test".to_owned()));
    assert_eq!(origin("http://localhost:3000/x?y"), Some("http://localhost:3000".to_owned()));
}

#[test]
fn origin_of_relative_href_is_none() {
    assert_eq!(origin("/dashboard.html"), None);
    assert_eq!(origin("dashboard.html"), None);
}

#[test]
fn page_url_joins_origin_and_page() {
    assert_eq!(page_url("https://fit.test/login.html", "dashboard.html"), "https://fit.test/dashboard.html");
    assert_eq!(page_url("login.html", "settings.html"), "/settings.html");
}
