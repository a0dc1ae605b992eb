use crate::track::model::TrackInfo;

/// Caption used when no custom template is configured.
pub const DEFAULT_CAPTION_TEMPLATE: &str = "\u{1F3A7} <b>Now playing:</b> {track} \u{2014} {artist}\n\
     \u{1F517} <b><a href='{soundcloud_url}'>SoundCloud</a></b>";

/// HTML caption with `{track}`, `{artist}`, `{soundcloud_url}`, `{progress}` and
/// `{duration}` placeholders.
///
/// Title and artist are HTML-escaped. Unknown placeholders are left as written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptionTemplate {
    template: String,
}

impl Default for CaptionTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTION_TEMPLATE)
    }
}

impl CaptionTemplate {
    /// Wrap a template string.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Raw template text.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Substitute placeholders for `track`.
    pub fn render(&self, track: &TrackInfo) -> String {
        let mut out = String::with_capacity(self.template.len() + 64);
        let mut rest = self.template.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                rest = "";
                break;
            };
            let key = &after[..close];
            if key.contains('{') {
                out.push('{');
                rest = after;
                continue;
            }
            match placeholder(key, track) {
                Some(value) => out.push_str(&value),
                None => {
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                }
            }
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        out
    }
}

fn placeholder(key: &str, track: &TrackInfo) -> Option<String> {
    Some(match key {
        "track" => escape_html(&track.title),
        "artist" => escape_html(&track.artist),
        "soundcloud_url" => track.permalink_url.clone(),
        "progress" => track.progress_label(),
        "duration" => track.duration_label(),
        _ => return None,
    })
}

/// Escape text for inclusion in chat HTML markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/reply/caption.rs"]
mod tests;
