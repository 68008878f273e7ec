//! Page Navigation
//!
//! Each page is its own HTML entry point; the bundle picks the view from
//! `location.pathname` and moves between pages with `location.href`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

/// The four entry points
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    TicketList,
    TicketDetail,
    NewTicket,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Login => "login.html",
            Page::TicketList => "index.html",
            Page::TicketDetail => "ticket.html",
            Page::NewTicket => "create.html",
        }
    }

    /// Resolve a pathname; unknown documents fall back to the ticket list.
    pub fn from_path(pathname: &str) -> Page {
        let file = pathname.rsplit('/').next().unwrap_or("");
        match file {
            "login.html" => Page::Login,
            "ticket.html" => Page::TicketDetail,
            "create.html" => Page::NewTicket,
            _ => Page::TicketList,
        }
    }

    /// Pages that need a session before doing anything
    pub fn requires_session(self) -> bool {
        !matches!(self, Page::Login)
    }
}

/// Detail page URL for a ticket
pub fn ticket_url(id: u32) -> String {
    let id = id.to_string();
    format!("{}?id={}", Page::TicketDetail.path(), utf8_percent_encode(&id, NON_ALPHANUMERIC))
}

/// Result of reading `?id=` on the detail page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TicketIdParam {
    Missing,
    Invalid(String),
    Id(u32),
}

/// Read a query parameter from a `location.search` string
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            percent_decode_str(&value).decode_utf8_lossy().into_owned()
        })
}

pub fn ticket_id_param(search: &str) -> TicketIdParam {
    match query_param(search, "id") {
        None => TicketIdParam::Missing,
        Some(raw) if raw.trim().is_empty() => TicketIdParam::Missing,
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(id) => TicketIdParam::Id(id),
            Err(_) => TicketIdParam::Invalid(raw),
        },
    }
}

// ========================
// Browser location access
// ========================

pub fn current_page() -> Page {
    let pathname = web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_default();
    Page::from_path(&pathname)
}

pub fn current_search() -> String {
    web_sys::window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

/// Navigate to a relative URL
pub fn go_to(url: &str) {
    log::debug!("[NAV] -> {}", url);
    let Some(win) = web_sys::window() else {
        return;
    };
    if win.location().set_href(url).is_err() {
        log::error!("[NAV] failed to navigate to {}", url);
    }
}

pub fn go_to_page(page: Page) {
    go_to(page.path());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_an_entry_document() {
        let index = include_str!("../index.html");
        let entries = [
            (Page::Login, include_str!("../login.html")),
            (Page::TicketDetail, include_str!("../ticket.html")),
            (Page::NewTicket, include_str!("../create.html")),
        ];
        assert!(index.contains(r#"data-bin="ticket-desk-ui""#));
        assert_eq!(Page::from_path("/index.html"), Page::TicketList);

        for (page, html) in entries {
            assert_eq!(Page::from_path(&format!("/{}", page.path())), page);
            assert!(html.contains("./ticket-desk-ui.js"), "{} does not load the bundle", page.path());
            // Shipped alongside the bundle in the Trunk output
            assert!(index.contains(&format!(r#"rel="copy-file" href="{}""#, page.path())));
        }
    }

    #[test]
    fn resolves_pages_from_pathname() {
        assert_eq!(Page::from_path("/app/login.html"), Page::Login);
        assert_eq!(Page::from_path("/ticket.html"), Page::TicketDetail);
        assert_eq!(Page::from_path("/create.html"), Page::NewTicket);
        assert_eq!(Page::from_path("/"), Page::TicketList);
        assert_eq!(Page::from_path(""), Page::TicketList);
    }

    #[test]
    fn only_login_skips_session_check() {
        assert!(!Page::Login.requires_session());
        assert!(Page::TicketDetail.requires_session());
    }

    #[test]
    fn ticket_url_round_trips_through_query() {
        let url = ticket_url(42);
        assert_eq!(url, "ticket.html?id=42");
        let search = url.split_once('?').map(|(_, q)| q).unwrap();
        assert_eq!(ticket_id_param(search), TicketIdParam::Id(42));
    }

    #[test]
    fn missing_or_blank_id() {
        assert_eq!(ticket_id_param(""), TicketIdParam::Missing);
        assert_eq!(ticket_id_param("?other=1"), TicketIdParam::Missing);
        assert_eq!(ticket_id_param("?id="), TicketIdParam::Missing);
    }

    #[test]
    fn non_numeric_id_is_invalid() {
        assert_eq!(ticket_id_param("?id=abc%20d"), TicketIdParam::Invalid("abc d".to_string()));
    }

    #[test]
    fn query_param_decodes_values() {
        assert_eq!(query_param("?a=1&name=J%C3%BCrgen+K", "name").as_deref(), Some("Jürgen K"));
        assert_eq!(query_param("?flag", "flag").as_deref(), Some(""));
    }
}
