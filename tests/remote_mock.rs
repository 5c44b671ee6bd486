#![cfg(feature = "remote")]

use std::sync::mpsc;

use bkcards::normalize::{Mode, NormalizeClient};
use bkcards::stock::StockImageClient;
use bkcards::{Category, Editor, Error, KeyState, StudioConfig};
use tiny_http::{Header, Response, Server};

struct Seen {
    url: String,
    key: Option<String>,
    body: String,
}

/// Serve one canned response and report what the client sent.
fn serve_once(status: u16, body: &'static str, content_type: &'static str) -> (String, mpsc::Receiver<Seen>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        if let Ok(mut request) = server.recv() {
            let mut sent = String::new();
            let _ = request.as_reader().read_to_string(&mut sent);
            let key = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("x-goog-api-key"))
                .map(|h| h.value.to_string());
            let _ = tx.send(Seen { url: request.url().to_string(), key, body: sent });
            let header = Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes()).unwrap();
            let _ = request.respond(Response::from_string(body).with_status_code(status).with_header(header));
        }
    });
    (format!("http://{}", addr), rx)
}

fn config(base: &str) -> StudioConfig {
    StudioConfig {
        api_key: Some("test-key".into()),
        api_base_url: base.to_string(),
        stock_base_url: base.to_string(),
        timeout_ms: 5000,
        load_system_fonts: false,
        ..Default::default()
    }
}

const GENERATED: &str = r#"{"candidates":[{"content":{"parts":[{"text":"{\"headline\":\"নতুন শিরোনাম\",\"body\":\"\",\"caption\":\"বিস্তারিত বিশ্লেষণ\"}"}]}}]}"#;

#[test]
fn normalize_posts_to_model_endpoint() {
    let (base, seen) = serve_once(200, GENERATED, "application/json");
    let client = NormalizeClient::new(&config(&base)).unwrap();

    let content = client.normalize("ঢাকায় আজ বৃষ্টি হয়েছে", Mode::News).unwrap();
    assert_eq!(content.headline, "নতুন শিরোনাম");
    assert_eq!(content.caption, "বিস্তারিত বিশ্লেষণ");

    let seen = seen.recv().unwrap();
    assert_eq!(seen.url, "/v1beta/models/gemini-2.5-flash:generateContent");
    assert_eq!(seen.key.as_deref(), Some("test-key"));
    let sent: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(sent["contents"][0]["parts"][0]["text"], "ঢাকায় আজ বৃষ্টি হয়েছে");
}

#[test]
fn forbidden_is_permission_denied() {
    let (base, _seen) = serve_once(403, r#"{"error":{"status":"FORBIDDEN"}}"#, "application/json");
    let client = NormalizeClient::new(&config(&base)).unwrap();
    assert!(matches!(client.normalize("খবর", Mode::Quote), Err(Error::PermissionDenied(_))));
}

#[test]
fn permission_denied_marker_in_body() {
    let (base, _seen) = serve_once(400, r#"{"error":{"status":"PERMISSION_DENIED"}}"#, "application/json");
    let client = NormalizeClient::new(&config(&base)).unwrap();
    assert!(matches!(client.normalize("খবর", Mode::News), Err(Error::PermissionDenied(_))));
}

#[test]
fn permission_token_in_generated_text_is_not_a_rejection() {
    let (base, _seen) = serve_once(
        200,
        r#"{"candidates":[{"content":{"parts":[{"text":"{\"headline\":\"h\",\"body\":\"\",\"caption\":\"server returned PERMISSION_DENIED to users\"}"}]}}]}"#,
        "application/json",
    );
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config(&base);
    cfg.download_dir = dir.path().to_path_buf();
    let mut editor = Editor::open(cfg).unwrap();

    let content = editor.analyze("খবর").unwrap();
    assert_eq!(content.caption, "server returned PERMISSION_DENIED to users");
    assert_eq!(editor.key_state(), KeyState::Configured);
}

#[test]
fn server_error_is_remote_and_retryable() {
    let (base, _seen) = serve_once(500, "oops", "text/plain");
    let client = NormalizeClient::new(&config(&base)).unwrap();
    let err = client.normalize("খবর", Mode::News).unwrap_err();
    assert!(matches!(err, Error::Remote(_)));
    assert!(err.is_retryable());
}

#[test]
fn missing_caption_is_invalid_response() {
    let (base, _seen) = serve_once(
        200,
        r#"{"candidates":[{"content":{"parts":[{"text":"{\"headline\":\"h\",\"body\":\"b\"}"}]}}]}"#,
        "application/json",
    );
    let client = NormalizeClient::new(&config(&base)).unwrap();
    assert!(matches!(client.normalize("খবর", Mode::News), Err(Error::InvalidResponse(_))));
}

#[test]
fn editor_fills_story_and_flags_rejected_key() {
    let dir = tempfile::tempdir().unwrap();
    let (base, _seen) = serve_once(200, GENERATED, "application/json");
    let mut cfg = config(&base);
    cfg.download_dir = dir.path().to_path_buf();
    let mut editor = Editor::open(cfg).unwrap();
    assert_eq!(editor.key_state(), KeyState::Configured);

    editor.analyze("কাঁচা লেখা").unwrap();
    let card = editor.preview();
    assert!(card.contains_text("নতুন"));

    let (base, _seen) = serve_once(403, "denied", "text/plain");
    let mut cfg = config(&base);
    cfg.download_dir = dir.path().to_path_buf();
    let mut editor = Editor::open(cfg).unwrap();
    editor.switch_category(Category::Quote);
    assert!(matches!(editor.analyze("উক্তি"), Err(Error::PermissionDenied(_))));
    assert_eq!(editor.key_state(), KeyState::NeedsReselection);

    editor.set_api_key(Some("another".into()));
    assert_eq!(editor.key_state(), KeyState::Configured);
}

#[test]
fn stock_image_becomes_data_uri() {
    let (base, seen) = serve_once(200, "not really an image", "image/jpeg");
    let client = StockImageClient::new(&config(&base)).unwrap();
    let uri = client.fetch("soft clouds", 7).unwrap();
    assert!(uri.starts_with("data:image/jpeg;base64,"));

    let seen = seen.recv().unwrap();
    assert_eq!(seen.url, "/prompt/soft%20clouds?width=1080&height=1080&nologo=true&seed=7");
}

#[test]
fn entering_hadith_fetches_a_background() {
    let dir = tempfile::tempdir().unwrap();
    let (base, _seen) = serve_once(200, "jpeg bytes", "image/jpeg");
    let mut cfg = config(&base);
    cfg.download_dir = dir.path().to_path_buf();
    let mut editor = Editor::open(cfg).unwrap();

    editor.switch_category(Category::Hadith);
    assert_eq!(editor.fields().images().len(), 1);
    assert!(editor.fields().images()[0].starts_with("data:image/jpeg;base64,"));
}
