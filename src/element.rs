// Host-boundary traits. The resolver never talks to a UI toolkit directly;
// the embedding screen reader implements these over its own element handles
// and the resolver stays a pure consumer of rectangles, text runs, and
// candidate lists.

use crate::geometry::{Point, Rect};

/// Fallback for hosts whose text system exposes no whitespace heuristic.
pub const DEFAULT_MIN_HORIZONTAL_WHITESPACE: i32 = 8;

/// Flattened text rendered by a single element, with per-character geometry.
///
/// "Flattened" means one linear string with one rectangle per character, in
/// mapping order — the shape display-model text extraction produces. The
/// text must exclude descendant elements, otherwise a container would offer
/// the target's own content as its label.
pub trait TextContainer {
    fn text(&self) -> &str;

    /// One rectangle per character of `text()`, in mapping order. Queried
    /// fresh on every call; implementations must not serve stale geometry.
    fn char_rects(&self) -> Vec<Rect>;

    /// Start and end character offsets of the display chunk (typically one
    /// visual line) enclosing `offset`.
    fn display_chunk(&self, offset: usize) -> (usize, usize);

    /// The text system's minimum horizontal whitespace: the smallest pixel
    /// gap treated as a word separator. Used as the default horizontal
    /// search threshold.
    fn min_horizontal_whitespace(&self) -> i32 {
        DEFAULT_MIN_HORIZONTAL_WHITESPACE
    }
}

/// An opaque handle to one live UI element.
///
/// Handles are cheap to clone and compare; all accessors are synchronous
/// reads of already-materialized screen state. Equality is handle identity:
/// two proxies compare equal when they refer to the same live element.
pub trait ElementProxy: Clone + PartialEq {
    /// Identity of the underlying window an element belongs to. Two elements
    /// share a `WindowId` exactly when they belong to the same window.
    type WindowId: Copy + PartialEq;
    type Text: TextContainer;

    /// Bounding rectangle in screen pixels.
    fn bounds(&self) -> Rect;

    /// Parent element, or `None` at the root.
    fn parent(&self) -> Option<Self>;

    fn window_id(&self) -> Self::WindowId;

    /// This element's own rendered text, excluding descendants. `None` when
    /// the element renders no text of its own.
    fn own_text(&self) -> Option<Self::Text>;

    /// Ask the element to repaint before its text is re-read. Workaround for
    /// toolkits that leave stale display-model text behind; no-op by default
    /// and only invoked when the caller opts in via
    /// [`SearchConfig::refresh_stale_text`](crate::search::SearchConfig).
    fn request_redraw(&self) {}
}

/// Focus, foreground, and window-enumeration queries supplied by the host.
pub trait UiHost {
    type Element: ElementProxy;

    /// The currently focused element, if any.
    fn focused_element(&self) -> Option<Self::Element>;

    /// The current foreground window, as an element.
    fn foreground_element(&self) -> Option<Self::Element>;

    /// Visible, enabled, static-text-classed descendants of `window`, each
    /// reduced to a name and a center point. An empty list means the window
    /// exposes no enumerable label controls and the resolver falls back to
    /// ancestor-text search.
    fn labelled_controls(&self, window: &Self::Element) -> Vec<LabelCandidate>;
}

/// A label-bearing control discovered by window enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCandidate {
    pub name: String,
    pub center: Point,
}

impl LabelCandidate {
    pub fn new(name: impl Into<String>, center: Point) -> Self {
        Self {
            name: name.into(),
            center,
        }
    }
}

/// Which label source a resolution call settled on.
pub enum ContainerKind<T: TextContainer> {
    /// The foreground window exposes enumerable static-text controls.
    EnumeratedControls(Vec<LabelCandidate>),
    /// Fallback: a text-bearing ancestor of the target.
    AncestorText(T),
}
