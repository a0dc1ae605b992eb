use crate::track::model::TrackInfo;

/// Single-slot memory of the most recent track seen.
///
/// The service's notion of "currently playing" is unreliable, so a failed or empty
/// lookup falls back to the last track that was found.
#[derive(Clone, Debug, Default)]
pub struct LastTrack {
    slot: Option<TrackInfo>,
}

impl LastTrack {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached track, if any.
    pub fn get(&self) -> Option<&TrackInfo> {
        self.slot.as_ref()
    }

    /// Store `fresh` when present and return the best known track.
    pub fn refresh(&mut self, fresh: Option<TrackInfo>) -> Option<&TrackInfo> {
        match fresh {
            Some(track) => {
                tracing::debug!(track_id = track.id, "last track updated");
                self.slot = Some(track);
            }
            None if self.slot.is_some() => {
                tracing::debug!("lookup empty, keeping last track");
            }
            None => {}
        }
        self.slot.as_ref()
    }

    /// Forget the cached track and return it.
    pub fn invalidate(&mut self) -> Option<TrackInfo> {
        self.slot.take()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/cache.rs"]
mod tests;
