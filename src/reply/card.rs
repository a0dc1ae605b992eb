use crate::foundation::error::CardResult;
use crate::layout::config::LayoutConfig;
use crate::render::compositor::{BannerImage, render_banner};
use crate::reply::caption::{CaptionTemplate, DEFAULT_CAPTION_TEMPLATE};
use crate::track::model::TrackInfo;

/// Font fetched by hosts that have no local font configured.
pub const DEFAULT_FONT_URL: &str =
    "https://raw.githubusercontent.com/kamekuro/assets/master/fonts/Onest-Bold.ttf";

/// User-facing settings for the now-playing reply.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardConfig {
    /// Attach a rendered banner when cover and font are available.
    pub show_banner: bool,
    /// Caption template, see [`CaptionTemplate`].
    pub caption_template: String,
    /// Where the host should download the banner font from.
    pub font_url: String,
    /// Banner geometry.
    pub layout: LayoutConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            caption_template: DEFAULT_CAPTION_TEMPLATE.to_string(),
            font_url: DEFAULT_FONT_URL.to_string(),
            layout: LayoutConfig::full(),
        }
    }
}

impl CardConfig {
    /// Parse and validate a JSON config. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> CardResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.layout.validate()?;
        Ok(cfg)
    }

    /// Compiled caption template.
    pub fn caption(&self) -> CaptionTemplate {
        CaptionTemplate::new(self.caption_template.as_str())
    }
}

/// Caption plus optional banner for one track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NowPlayingReply {
    /// HTML caption.
    pub caption: String,
    /// Rendered banner; `None` means send the caption alone.
    pub banner: Option<BannerImage>,
}

impl NowPlayingReply {
    /// Whether a banner is attached.
    pub fn has_banner(&self) -> bool {
        self.banner.is_some()
    }
}

/// Build the reply for `track`.
///
/// Never fails: a disabled banner, missing artwork or font, and any render error all
/// degrade to a caption-only reply.
#[tracing::instrument(skip_all, fields(track_id = track.id))]
pub fn build_reply(
    track: &TrackInfo,
    artwork: Option<&[u8]>,
    font: Option<&[u8]>,
    cfg: &CardConfig,
) -> NowPlayingReply {
    let caption = cfg.caption().render(track);
    if !cfg.show_banner {
        return NowPlayingReply {
            caption,
            banner: None,
        };
    }

    let banner = match (artwork, font) {
        (Some(cover), Some(font)) => {
            match render_banner(&track.banner_request(cover, font), &cfg.layout) {
                Ok(banner) => Some(banner),
                Err(err) => {
                    tracing::warn!(error = %err, "banner render failed, sending caption only");
                    None
                }
            }
        }
        (None, _) => {
            tracing::debug!("no artwork");
            None
        }
        (_, None) => {
            tracing::debug!("no font");
            None
        }
    };
    NowPlayingReply { caption, banner }
}

#[cfg(test)]
#[path = "../../tests/unit/reply/card.rs"]
mod tests;
