// Track-detail vocabulary. The control API reports every detail as one
// attribute of a TRACK element, so a detail is just its canonical attribute
// name plus a lookup table — one generic extractor covers all of them
// instead of a synthesized accessor per field.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;

/// A detail the API reports about one track, in the order the automation
/// software documents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrackDetail {
    Artist,
    Title,
    Album,
    Year,
    Genre,
    Comment,
    Filename,
    Duration,
    PlayCount,
    LastPlayed,
    Intro,
    Outro,
    Language,
    Rating,
    Bpm,
    Tags,
    Publisher,
    AlbumArtist,
    Composer,
    Copyright,
    TrackNumber,
    F1,
    F2,
    F3,
    F4,
    F5,
    CastTitle,
    Listeners,
    Lyrics,
    ItemTitle,
}

impl TrackDetail {
    pub const ALL: [TrackDetail; 30] = [
        TrackDetail::Artist,
        TrackDetail::Title,
        TrackDetail::Album,
        TrackDetail::Year,
        TrackDetail::Genre,
        TrackDetail::Comment,
        TrackDetail::Filename,
        TrackDetail::Duration,
        TrackDetail::PlayCount,
        TrackDetail::LastPlayed,
        TrackDetail::Intro,
        TrackDetail::Outro,
        TrackDetail::Language,
        TrackDetail::Rating,
        TrackDetail::Bpm,
        TrackDetail::Tags,
        TrackDetail::Publisher,
        TrackDetail::AlbumArtist,
        TrackDetail::Composer,
        TrackDetail::Copyright,
        TrackDetail::TrackNumber,
        TrackDetail::F1,
        TrackDetail::F2,
        TrackDetail::F3,
        TrackDetail::F4,
        TrackDetail::F5,
        TrackDetail::CastTitle,
        TrackDetail::Listeners,
        TrackDetail::Lyrics,
        TrackDetail::ItemTitle,
    ];

    /// The attribute name carrying this detail on a TRACK element.
    pub fn attr_name(&self) -> &'static str {
        match self {
            TrackDetail::Artist => "ARTIST",
            TrackDetail::Title => "TITLE",
            TrackDetail::Album => "ALBUM",
            TrackDetail::Year => "YEAR",
            TrackDetail::Genre => "GENRE",
            TrackDetail::Comment => "COMMENT",
            TrackDetail::Filename => "FILENAME",
            TrackDetail::Duration => "DURATION",
            TrackDetail::PlayCount => "PLAYCOUNT",
            TrackDetail::LastPlayed => "LASTPLAYED",
            TrackDetail::Intro => "INTRO",
            TrackDetail::Outro => "OUTRO",
            TrackDetail::Language => "LANGUAGE",
            TrackDetail::Rating => "RATING",
            TrackDetail::Bpm => "BPM",
            TrackDetail::Tags => "TAGS",
            TrackDetail::Publisher => "PUBLISHER",
            TrackDetail::AlbumArtist => "ALBUMARTIST",
            TrackDetail::Composer => "COMPOSER",
            TrackDetail::Copyright => "COPYRIGHT",
            TrackDetail::TrackNumber => "TRACKNUMBER",
            TrackDetail::F1 => "F1",
            TrackDetail::F2 => "F2",
            TrackDetail::F3 => "F3",
            TrackDetail::F4 => "F4",
            TrackDetail::F5 => "F5",
            TrackDetail::CastTitle => "CASTTITLE",
            TrackDetail::Listeners => "LISTENERS",
            TrackDetail::Lyrics => "LYRICS",
            TrackDetail::ItemTitle => "ITEMTITLE",
        }
    }

    /// Reverse lookup by canonical attribute name (case-sensitive).
    pub fn from_attr_name(name: &str) -> Option<TrackDetail> {
        static BY_NAME: Lazy<BTreeMap<&'static str, TrackDetail>> = Lazy::new(|| {
            TrackDetail::ALL
                .into_iter()
                .map(|detail| (detail.attr_name(), detail))
                .collect()
        });
        BY_NAME.get(name).copied()
    }

    /// Pull this detail out of a parsed TRACK attribute map.
    pub fn extract<'a>(&self, attrs: &'a BTreeMap<String, String>) -> Option<&'a str> {
        attrs.get(self.attr_name()).map(String::as_str)
    }
}

impl fmt::Display for TrackDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attr_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_names_roundtrip_through_lookup() {
        for detail in TrackDetail::ALL {
            assert_eq!(TrackDetail::from_attr_name(detail.attr_name()), Some(detail));
        }
    }

    #[test]
    fn unknown_attr_name_is_none() {
        assert_eq!(TrackDetail::from_attr_name("WAVEFORM"), None);
        assert_eq!(TrackDetail::from_attr_name("artist"), None);
    }

    #[test]
    fn extract_reads_the_matching_attribute() {
        let mut attrs = BTreeMap::new();
        attrs.insert("ARTIST".to_string(), "Miles Davis".to_string());
        assert_eq!(TrackDetail::Artist.extract(&attrs), Some("Miles Davis"));
        assert_eq!(TrackDetail::Title.extract(&attrs), None);
    }
}
