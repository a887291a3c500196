use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{Duration, SystemTime};

use plist::{Dictionary, Value};
use serde_json::Value as Json;

pub const READING_LIST_TITLE: &str = "com.apple.ReadingList";

/// Path of the bookmarks file under a fake home directory.
pub fn bookmarks_path(home: &Path) -> PathBuf {
    home.join("Library/Safari/Bookmarks.plist")
}

/// Path of the diagnostic log under a fake home directory.
pub fn log_path(home: &Path) -> PathBuf {
    home.join("Desktop/safari_reading_list.log")
}

fn dict<const N: usize>(entries: [(&str, Value); N]) -> Value {
    let mut dict = Dictionary::new();
    for (key, value) in entries {
        dict.insert(key.to_string(), value);
    }
    Value::Dictionary(dict)
}

fn string(s: &str) -> Value {
    Value::String(s.to_string())
}

/// A reading list entry as Safari stores it.
pub fn entry(url: &str, title: &str) -> Value {
    let added = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    dict([
        ("URLString", string(url)),
        ("WebBookmarkType", string("WebBookmarkTypeLeaf")),
        ("URIDictionary", dict([("title", string(title))])),
        ("ReadingList", dict([("DateAdded", Value::Date(added.into()))])),
    ])
}

/// A bookmarks tree with the given reading list entries, or none at all.
pub fn bookmarks(reading_list: Option<Vec<Value>>) -> Value {
    let mut children = vec![dict([
        ("Title", string("BookmarksBar")),
        ("WebBookmarkType", string("WebBookmarkTypeList")),
        ("Children", Value::Array(Vec::new())),
    ])];
    if let Some(entries) = reading_list {
        children.push(dict([
            ("Title", string(READING_LIST_TITLE)),
            ("WebBookmarkType", string("WebBookmarkTypeList")),
            ("Children", Value::Array(entries)),
        ]));
    }
    dict([
        ("WebBookmarkFileVersion", Value::Integer(1.into())),
        ("Children", Value::Array(children)),
    ])
}

/// Write a binary bookmarks file under `home`.
pub fn write_bookmarks(home: &Path, value: &Value) {
    let path = bookmarks_path(home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    value.to_file_binary(&path).unwrap();
}

/// Read the bookmarks file back as a property list.
pub fn read_bookmarks(home: &Path) -> Value {
    Value::from_file(bookmarks_path(home)).unwrap()
}

/// Encode messages as native-endian length-prefixed frames.
pub fn frames(messages: &[Json]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for message in messages {
        let body = serde_json::to_vec(message).unwrap();
        bytes.extend_from_slice(&(body.len() as u32).to_ne_bytes());
        bytes.extend_from_slice(&body);
    }
    bytes
}

/// Split framed output back into JSON messages.
pub fn parse_frames(mut bytes: &[u8]) -> Vec<Json> {
    let mut messages = Vec::new();
    while !bytes.is_empty() {
        assert!(bytes.len() >= 4, "truncated header in output");
        let (header, rest) = bytes.split_at(4);
        let length = u32::from_ne_bytes(header.try_into().unwrap()) as usize;
        assert!(rest.len() >= length, "truncated body in output");
        let (body, rest) = rest.split_at(length);
        messages.push(serde_json::from_slice(body).unwrap());
        bytes = rest;
    }
    messages
}

/// Run the host with `input` on stdin and a custom HOME, then wait for it to exit.
pub fn run_host(home: &Path, input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_safari-reading-list"))
        // Browsers pass the manifest path and extension origin; both are ignored.
        .arg("chrome-extension://abcdefghijklmnop/")
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start host");

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(input).unwrap();
    drop(stdin);

    child.wait_with_output().expect("Failed to wait for host")
}

/// Run the host, expect a clean exit, and return the responses.
pub fn exchange(home: &Path, requests: &[Json]) -> Vec<Json> {
    let output = run_host(home, &frames(requests));
    if !output.status.success() {
        panic!(
            "host exited with {}\nstderr: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    parse_frames(&output.stdout)
}
