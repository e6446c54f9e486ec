/// HTTP endpoint serving the kayak conditions page.
///
/// Endpoints:
/// - GET /            - Fetches fresh USGS data and serves the rendered page
/// - GET /health      - Service health check
///
/// Each page request performs one full fetch → extract → classify →
/// render cycle; there is no caching and no shared mutable state, so
/// requests are independent.

use crate::config::SiteConfig;
use crate::fetch;
use crate::report;
use std::error::Error;
use std::io::Cursor;

/// Starts the blocking HTTP server. Runs until the process exits.
pub fn start_endpoint_server(port: u16, config: SiteConfig) -> Result<(), Box<dyn Error>> {
    let server = tiny_http::Server::http(("0.0.0.0", port))
        .map_err(|e| format!("Failed to bind port {}: {}", port, e))?;
    let client = reqwest::blocking::Client::new();

    println!("   Serving conditions for site {}", config.site_code);

    for request in server.incoming_requests() {
        let url = request.url().to_string();

        let response = match url.as_str() {
            "/" | "/index.html" => handle_page(&client, &config),
            "/health" => handle_health(&config),
            _ => create_json_response(
                404,
                serde_json::json!({ "error": "not found", "path": url }),
            ),
        };

        if let Err(e) = request.respond(response) {
            eprintln!("   ✗ Failed to send response: {}", e);
        }
    }

    Ok(())
}

/// Handle / - one fetch per page load, error report on any failure.
fn handle_page(
    client: &reqwest::blocking::Client,
    config: &SiteConfig,
) -> tiny_http::Response<Cursor<Vec<u8>>> {
    let fragment = match fetch::fetch_conditions(client, &config.site_code) {
        Ok(doc) => report::render_report(&doc),
        Err(e) => {
            eprintln!("   ✗ Fetch failed for site {}: {}", config.site_code, e);
            report::render_error_report()
        }
    };

    create_html_response(200, &wrap_page(&fragment))
}

/// Handle /health endpoint
fn handle_health(config: &SiteConfig) -> tiny_http::Response<Cursor<Vec<u8>>> {
    create_json_response(
        200,
        serde_json::json!({
            "status": "ok",
            "service": "kayakcast_service",
            "version": "0.1.0",
            "site_code": config.site_code,
        }),
    )
}

/// Wraps the rendered fragment in a minimal standalone page.
fn wrap_page(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <title>River Kayak Conditions</title>\n\
         </head>\n<body>\n<div id=\"main\">\n{}</div>\n</body>\n</html>\n",
        fragment
    )
}

/// Create HTTP response with HTML body
fn create_html_response(status_code: u16, body: &str) -> tiny_http::Response<Cursor<Vec<u8>>> {
    tiny_http::Response::from_data(body.as_bytes().to_vec())
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..])
                .unwrap(),
        )
}

/// Create HTTP response with JSON body
fn create_json_response(
    status_code: u16,
    json: serde_json::Value,
) -> tiny_http::Response<Cursor<Vec<u8>>> {
    let body = serde_json::to_string_pretty(&json).unwrap();

    tiny_http::Response::from_data(body.into_bytes())
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
