// HTTP client for the automation software's control API. Every query is one
// GET with the action in the query string and an XML (or bare-string) body
// back. Requests run on a throwaway worker thread and the caller waits with
// a deadline, so a wedged server can never hold the host's event loop
// hostage longer than `fetch_timeout`.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use super::xml::{all_tag_attributes, tag_attribute, tag_attributes};
use super::{MetadataError, TrackDetail};
use crate::config::ApiConfig;
use crate::log::debug;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(7);
const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A control API query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Microphone state as a bare "0"/"1" body.
    MicStatus,
    /// Playback position, length and playlist remainder, plus the current
    /// track's attributes.
    PlaybackInfo,
    /// Attributes of the playlist track at a 1-based position.
    TrackInfo { position: u32 },
    /// The whole playlist, one TRACK element per entry.
    Playlist,
}

impl Action {
    fn query(&self) -> String {
        match self {
            Action::MicStatus => "mic".to_string(),
            Action::PlaybackInfo => "playbackinfo".to_string(),
            Action::TrackInfo { position } => format!("trackinfo&pos={position}"),
            Action::Playlist => "getplaylist2".to_string(),
        }
    }
}

/// Microphone state reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicStatus {
    Off,
    On,
}

/// Client for one configured API endpoint.
pub struct MetadataClient {
    config: ApiConfig,
    agent: ureq::Agent,
    fetch_timeout: Duration,
}

impl MetadataClient {
    pub fn new(config: ApiConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(TRANSFER_TIMEOUT)
            .timeout_write(TRANSFER_TIMEOUT)
            .build();
        Self {
            config,
            agent,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Replace the overall per-request deadline.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn build_url(&self, action: Action) -> String {
        format!(
            "{protocol}://{host}:{port}/?pass={password}&action={action}",
            protocol = self.config.protocol.as_str(),
            host = self.config.host,
            port = self.config.port,
            password = self.config.password,
            action = action.query(),
        )
    }

    /// Run one query on a worker thread and wait at most `fetch_timeout` for
    /// the body. On timeout the worker is abandoned; its socket timeouts
    /// reap it shortly after.
    fn fetch(&self, action: Action) -> Result<String, MetadataError> {
        let url = self.build_url(action);
        let agent = self.agent.clone();
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let outcome = agent
                .get(&url)
                .call()
                .map_err(MetadataError::from)
                .and_then(|response| Ok(response.into_string()?));
            // the receiver may have given up already; nothing left to do then
            let _ = sender.send(outcome);
        });
        match receiver.recv_timeout(self.fetch_timeout) {
            Ok(outcome) => outcome,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                debug!(?action, "API request missed its deadline");
                Err(MetadataError::Timeout(self.fetch_timeout))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(MetadataError::WorkerFailed),
        }
    }

    pub fn mic_status(&self) -> Result<MicStatus, MetadataError> {
        let body = self.fetch(Action::MicStatus)?;
        match body.trim() {
            "0" => Ok(MicStatus::Off),
            "1" => Ok(MicStatus::On),
            other => Err(MetadataError::UnexpectedResponse(other.to_string())),
        }
    }

    /// Time already played of the current track.
    pub fn song_elapsed(&self) -> Result<Duration, MetadataError> {
        let body = self.fetch(Action::PlaybackInfo)?;
        let pos = parse_millis(&tag_attribute(&body, &["Playback"], "pos")?)?;
        Ok(Duration::from_millis(pos))
    }

    /// Time left of the current track.
    pub fn song_remaining(&self) -> Result<Duration, MetadataError> {
        let body = self.fetch(Action::PlaybackInfo)?;
        let pos = parse_millis(&tag_attribute(&body, &["Playback"], "pos")?)?;
        let len = parse_millis(&tag_attribute(&body, &["Playback"], "len")?)?;
        Ok(Duration::from_millis(len.saturating_sub(pos)))
    }

    /// Remaining playlist time, verbatim as the API formats it.
    pub fn playlist_remaining(&self) -> Result<String, MetadataError> {
        let body = self.fetch(Action::PlaybackInfo)?;
        tag_attribute(&body, &["Playback"], "playlistremain")
    }

    /// One detail of the track playing right now.
    pub fn current_track_detail(&self, detail: TrackDetail) -> Result<String, MetadataError> {
        let body = self.fetch(Action::PlaybackInfo)?;
        tag_attribute(&body, &["CurrentTrack", "TRACK"], detail.attr_name())
    }

    /// Every detail the API reports for the track playing right now.
    pub fn current_track_details(
        &self,
    ) -> Result<std::collections::BTreeMap<String, String>, MetadataError> {
        let body = self.fetch(Action::PlaybackInfo)?;
        tag_attributes(&body, &["CurrentTrack", "TRACK"])
    }

    /// One detail of the playlist track at a 1-based position.
    pub fn track_detail_at(
        &self,
        position: u32,
        detail: TrackDetail,
    ) -> Result<String, MetadataError> {
        let body = self.fetch(Action::TrackInfo { position })?;
        tag_attribute(&body, &["Track", "TRACK"], detail.attr_name())
    }

    /// Every detail of the playlist track at a 1-based position.
    pub fn track_details_at(
        &self,
        position: u32,
    ) -> Result<std::collections::BTreeMap<String, String>, MetadataError> {
        let body = self.fetch(Action::TrackInfo { position })?;
        tag_attributes(&body, &["Track", "TRACK"])
    }

    /// Every playlist entry's attributes, in playlist order. An entry's
    /// 1-based playlist position is its index here plus one.
    pub fn playlist_tracks(
        &self,
    ) -> Result<Vec<std::collections::BTreeMap<String, String>>, MetadataError> {
        let body = self.fetch(Action::Playlist)?;
        all_tag_attributes(&body, &["TRACK"])
    }

    /// 1-based playlist position of the first entry whose `detail` equals
    /// `value`, or `None` when no entry matches.
    pub fn playlist_position_of(
        &self,
        detail: TrackDetail,
        value: &str,
    ) -> Result<Option<u32>, MetadataError> {
        let tracks = self.playlist_tracks()?;
        Ok(tracks
            .iter()
            .position(|attrs| detail.extract(attrs) == Some(value))
            .map(|index| index as u32 + 1))
    }
}

fn parse_millis(raw: &str) -> Result<u64, MetadataError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|millis| millis.is_finite())
        .map(|millis| millis.max(0.0) as u64)
        .ok_or_else(|| MetadataError::UnexpectedResponse(raw.to_string()))
}

/// Render a millisecond count as MM:SS for speech output. Minutes are not
/// wrapped at an hour; a 90-minute mix reads as "90:00".
pub fn format_track_time(millis: u64) -> String {
    let total_seconds = millis / 1000;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Protocol;

    fn client_with(config: ApiConfig) -> MetadataClient {
        MetadataClient::new(config)
    }

    #[test]
    fn url_carries_scheme_endpoint_password_and_action() {
        let client = client_with(ApiConfig {
            protocol: Protocol::Http,
            host: "127.0.0.1".to_string(),
            port: 9000,
            password: "hunter2".to_string(),
        });
        assert_eq!(
            client.build_url(Action::PlaybackInfo),
            "http://127.0.0.1:9000/?pass=hunter2&action=playbackinfo"
        );
    }

    #[test]
    fn trackinfo_url_includes_the_position() {
        let client = client_with(ApiConfig::default());
        assert_eq!(
            client.build_url(Action::TrackInfo { position: 7 }),
            "http://127.0.0.1:9000/?pass=&action=trackinfo&pos=7"
        );
    }

    #[test]
    fn playlist_url_uses_the_getplaylist2_action() {
        let client = client_with(ApiConfig::default());
        assert_eq!(
            client.build_url(Action::Playlist),
            "http://127.0.0.1:9000/?pass=&action=getplaylist2"
        );
    }

    #[test]
    fn https_endpoints_use_the_https_scheme() {
        let client = client_with(ApiConfig {
            protocol: Protocol::Https,
            ..ApiConfig::default()
        });
        assert!(client.build_url(Action::MicStatus).starts_with("https://"));
    }

    #[test]
    fn track_time_formats_as_minutes_and_seconds() {
        assert_eq!(format_track_time(0), "00:00");
        assert_eq!(format_track_time(61_500), "01:01");
        assert_eq!(format_track_time(183_000), "03:03");
    }

    #[test]
    fn track_time_minutes_do_not_wrap_at_an_hour() {
        assert_eq!(format_track_time(90 * 60 * 1000), "90:00");
    }

    #[test]
    fn millis_parsing_tolerates_fractions_and_rejects_garbage() {
        assert_eq!(parse_millis("61500").ok(), Some(61_500));
        assert_eq!(parse_millis("61500.75").ok(), Some(61_500));
        assert!(matches!(
            parse_millis("soon"),
            Err(MetadataError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn millis_parsing_rejects_non_finite_values() {
        // f64::parse accepts these spellings; they must not read as 00:00
        for raw in ["NaN", "nan", "inf", "-inf", "infinity"] {
            assert!(
                matches!(
                    parse_millis(raw),
                    Err(MetadataError::UnexpectedResponse(_))
                ),
                "{raw} must be rejected"
            );
        }
    }
}
