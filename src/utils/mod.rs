use std::path::{Component, Path, PathBuf};
use url::Url;

pub fn sanitize_filename(filename: &str) -> String {
    // Characters rejected by common filesystems; '/' stays so templates can name sub-directories
    filename
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '\\' | '|' | '?' | '*' => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// True when `input` is an absolute URL with both a scheme and a host.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Expands a leading `~` to the home directory and normalizes the path lexically.
///
/// Only the current user's `~` is expanded; `~user/...` is kept as written.
///
/// The result uses `/` separators, matching what yt-dlp accepts on every platform.
pub fn expand_path(path: &str) -> String {
    let expanded = expand_home(path);
    let normalized = normalize(&expanded);
    let rendered = normalized.to_string_lossy().into_owned();
    if cfg!(windows) {
        rendered.replace('\\', "/")
    } else {
        rendered
    }
}

fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
            .or_else(|| path.strip_prefix("~\\"))
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}
