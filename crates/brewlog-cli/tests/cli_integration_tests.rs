//! CLI integration tests
//!
//! Drive the `brewlog` binary end to end against a temporary database and
//! a local stub in place of the remote beer endpoint.

use rusqlite::Connection;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const PAYLOAD: &str = r#"{"id":77,"uid":"c0ffee","brand":"Guinness","name":"Draught","style":"Stout","hop":"Fuggle","yeast":"1084 - Irish Ale","malts":"Roasted barley","ibu":"45 IBU","alcohol":"4.2%","blg":"10.4°Blg"}"#;

/// Serve `count` identical responses, one per connection
fn serve(status_line: &'static str, body: &'static str, count: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/api/beer/random_beer", listener.local_addr().unwrap());
    std::thread::spawn(move || {
        for _ in 0..count {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });
    url
}

fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

fn brewlog(dir: &Path, db: &Path, endpoint: &str, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brewlog"));
    cmd.current_dir(dir)
        .env_remove("BREWLOG_DB")
        .env_remove("BREWLOG_ENDPOINT")
        .env_remove("BREWLOG_TIMEOUT_SECS")
        .env_remove("BREWLOG_LOG_FORMAT")
        .env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .args(["--db", db.to_str().unwrap(), "--endpoint", endpoint, "--timeout-secs", "5"])
        .args(args);
    cmd
}

fn run(dir: &Path, db: &Path, endpoint: &str, args: &[&str]) -> Output {
    brewlog(dir, db, endpoint, args)
        .output()
        .expect("Failed to execute CLI")
}

fn setup() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("data").join("beers.db");
    (temp_dir, db_path)
}

fn row_count(db: &Path) -> i64 {
    let conn = Connection::open(db).unwrap();
    conn.query_row("SELECT COUNT(*) FROM beers", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn test_history_on_fresh_database() {
    let (temp_dir, db) = setup();

    let output = run(temp_dir.path(), &db, &refused_url(), &["history"]);

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fetch history:"));
    assert!(stdout.contains("(no beers fetched yet)"));
    assert_eq!(row_count(&db), 0, "history creates the table");
}

#[test]
fn test_fetch_records_beer_and_prints_history() {
    let (temp_dir, db) = setup();
    let endpoint = serve("200 OK", PAYLOAD, 2);

    let first = run(temp_dir.path(), &db, &endpoint, &["fetch"]);
    let second = run(temp_dir.path(), &db, &endpoint, &["fetch"]);

    assert!(first.status.success());
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("Saved beer #2 (2 in history)"), "stdout: {}", stdout);
    assert!(stdout.contains("Brand: Guinness\nName: Draught\nStyle: Stout"));
    assert!(stdout.contains("#1 Brand: Guinness | Name: Draught | Style: Stout"));
    assert_eq!(row_count(&db), 2);
}

#[test]
fn test_fetch_failure_is_reported_not_fatal() {
    let (temp_dir, db) = setup();
    let endpoint = serve("200 OK", PAYLOAD, 1);
    run(temp_dir.path(), &db, &endpoint, &["fetch"]);

    let output = run(temp_dir.path(), &db, &refused_url(), &["fetch"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fetch failed: [ERR_NETWORK]"), "stdout: {}", stdout);
    assert!(stdout.contains("#1 Brand: Guinness"), "prior history is still shown");
    assert_eq!(row_count(&db), 1);
}

#[test]
fn test_fetch_malformed_payload_writes_nothing() {
    let (temp_dir, db) = setup();
    let endpoint = serve("200 OK", r#"{"brand":"Guinness"}"#, 1);

    let output = run(temp_dir.path(), &db, &endpoint, &["fetch"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[ERR_MALFORMED_RESPONSE]"), "stdout: {}", stdout);
    assert_eq!(row_count(&db), 0);
}

#[test]
fn test_show_selects_record_by_id() {
    let (temp_dir, db) = setup();
    let endpoint = serve("200 OK", PAYLOAD, 1);
    run(temp_dir.path(), &db, &endpoint, &["fetch"]);

    let output = run(temp_dir.path(), &db, &endpoint, &["show", "--id", "1"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Beer #1\nBrand: Guinness\nName: Draught\nStyle: Stout\n"
    );
}

#[test]
fn test_show_unknown_id_fails() {
    let (temp_dir, db) = setup();

    let output = run(temp_dir.path(), &db, &refused_url(), &["show", "--id", "5"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Record not found in history: 5"), "stderr: {}", stderr);
}

#[test]
fn test_session_over_stdin() {
    let (temp_dir, db) = setup();
    let endpoint = serve("200 OK", PAYLOAD, 1);

    let mut child = brewlog(temp_dir.path(), &db, &endpoint, &["session"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"fetch\nselect 1\nquit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Saved beer #1 (1 in history)"), "stdout: {}", stdout);
    assert!(stdout.contains("Beer #1\nBrand: Guinness"));
    assert_eq!(row_count(&db), 1);
}

#[test]
fn test_json_logs_go_to_stderr() {
    let (temp_dir, db) = setup();

    let output = run(
        temp_dir.path(),
        &db,
        &refused_url(),
        &["--log-format", "json", "history"],
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.lines().any(|l| l.starts_with('{') && l.contains("history_list")),
        "stderr: {}",
        stderr
    );
    assert!(!String::from_utf8_lossy(&output.stdout).contains("history_list"));
}
