pub mod config;
pub mod direction;
pub mod element;
pub mod geometry;
pub mod log;
pub mod metadata;
pub mod search;
pub mod tracker;

pub use config::{ApiConfig, ConfigError, Protocol};
pub use direction::{Direction, DirectionSet};
pub use element::{
    ContainerKind, ElementProxy, LabelCandidate, TextContainer, UiHost,
    DEFAULT_MIN_HORIZONTAL_WHITESPACE,
};
pub use geometry::{Point, Rect};
pub use search::{
    CandidateMatch, ControlCenterExplorer, LabelResolver, ResolvedLabel, RunMatch, SearchConfig,
    TextRunExplorer, DEFAULT_MAX_HORIZONTAL,
};
pub use tracker::{ForegroundKind, WindowTracker};
