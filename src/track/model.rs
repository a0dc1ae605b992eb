use crate::foundation::error::CardResult;
use crate::foundation::time::format_clock_short;
use crate::render::compositor::BannerRequest;

/// Track metadata as handed to the card renderer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrackInfo {
    /// Service-side track identifier.
    pub id: u64,
    /// Track title.
    pub title: String,
    /// Uploader's display name.
    pub artist: String,
    /// Track length in milliseconds.
    pub duration_ms: u64,
    /// Playback position, when the service reports one.
    #[serde(default)]
    pub progress_ms: Option<u64>,
    /// Canonical track page.
    pub permalink_url: String,
    /// Cover art, falling back to the uploader's avatar.
    #[serde(default)]
    pub artwork_url: Option<String>,
}

/// Track object as returned by the music API.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApiTrack {
    /// Track identifier.
    pub id: u64,
    /// Track title.
    pub title: String,
    /// Track length in milliseconds; absent for some private uploads.
    #[serde(default)]
    pub duration: Option<u64>,
    /// Canonical track page.
    pub permalink_url: String,
    /// Track artwork, often null.
    #[serde(default)]
    pub artwork_url: Option<String>,
    /// Uploader.
    pub user: ApiUser,
}

/// Uploader object nested in [`ApiTrack`].
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApiUser {
    /// Display name.
    pub username: String,
    /// Profile picture.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl From<ApiTrack> for TrackInfo {
    fn from(t: ApiTrack) -> Self {
        Self {
            id: t.id,
            title: t.title,
            artist: t.user.username,
            duration_ms: t.duration.unwrap_or(0),
            progress_ms: None,
            permalink_url: t.permalink_url,
            artwork_url: t.artwork_url.or(t.user.avatar_url),
        }
    }
}

impl TrackInfo {
    /// Parse an API track object.
    pub fn from_api_json(json: &str) -> CardResult<Self> {
        let api: ApiTrack = serde_json::from_str(json)?;
        Ok(api.into())
    }

    /// Playback position bounded by the duration; `0` when unknown.
    pub fn clamped_progress_ms(&self) -> u64 {
        self.progress_ms.unwrap_or(0).min(self.duration_ms)
    }

    /// Duration as `M:SS`.
    pub fn duration_label(&self) -> String {
        format_clock_short(self.duration_ms)
    }

    /// Position as `M:SS`; `0:00` when unknown.
    pub fn progress_label(&self) -> String {
        format_clock_short(self.clamped_progress_ms())
    }

    /// Banner inputs for this track with fetched cover and font bytes.
    pub fn banner_request<'a>(&'a self, cover: &'a [u8], font: &'a [u8]) -> BannerRequest<'a> {
        BannerRequest {
            title: &self.title,
            artist: &self.artist,
            duration_ms: self.duration_ms,
            progress_ms: self.clamped_progress_ms(),
            cover,
            font,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/model.rs"]
mod tests;
