// Label resolution. Per call, probe the environment once: windows that
// expose enumerable static-text controls get the control-center explorer,
// everything else falls back to character-level search over a text-bearing
// ancestor. Absence of a label is a normal outcome at every step — this
// module never fails loudly, the control simply stays unnamed.

mod control_center;
mod text_run;

pub use control_center::{CandidateMatch, ControlCenterExplorer};
pub use text_run::{RunMatch, TextRunExplorer};

use crate::direction::DirectionSet;
use crate::element::{ContainerKind, ElementProxy, TextContainer, UiHost};
use crate::log::debug;

/// Horizontal threshold for the enumeration branch, where no text system is
/// around to supply its whitespace heuristic. Label controls sit farther
/// from their targets than glyphs do, hence the generous default.
pub const DEFAULT_MAX_HORIZONTAL: i32 = 100;

/// A discovered label and the pixel distance it won at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLabel {
    pub label: String,
    pub distance: i32,
}

/// Caller-supplied knobs for one resolution. Every field is optional;
/// defaults are resolved against the host at call time.
#[derive(Debug, Clone)]
pub struct SearchConfig<E: ElementProxy> {
    /// Element to label. Default: the host's focused element.
    pub target: Option<E>,
    /// Explicit text container; set, it skips both the enumeration probe and
    /// the ancestor walk.
    pub text_container: Option<E>,
    /// Upper bound for the ancestor walk, inclusive. Default: the host's
    /// foreground element.
    pub break_ancestor: Option<E>,
    /// Default: top + left.
    pub directions: DirectionSet,
    /// Default: the container's minimum horizontal whitespace in the
    /// ancestor-text branch, [`DEFAULT_MAX_HORIZONTAL`] in the enumeration
    /// branch.
    pub max_horizontal: Option<i32>,
    /// Default: one character's height (ancestor-text branch) or the
    /// target's height (enumeration branch).
    pub max_vertical: Option<i32>,
    /// Ask containers to repaint before their text is read. Workaround for
    /// toolkits that leave stale display text behind; off by default.
    pub refresh_stale_text: bool,
}

impl<E: ElementProxy> Default for SearchConfig<E> {
    fn default() -> Self {
        Self {
            target: None,
            text_container: None,
            break_ancestor: None,
            directions: DirectionSet::default(),
            max_horizontal: None,
            max_vertical: None,
            refresh_stale_text: false,
        }
    }
}

/// Per-snapshot label discovery over one host environment.
///
/// Cheap to construct and stateless between calls; resolution runs to
/// completion inside the host's event handler with nothing but synchronous
/// reads of already-materialized geometry.
pub struct LabelResolver<'h, H: UiHost> {
    host: &'h H,
}

impl<'h, H: UiHost> LabelResolver<'h, H> {
    pub fn new(host: &'h H) -> Self {
        Self { host }
    }

    /// Best-guess label for the configured target, or `None` when nothing
    /// qualifies.
    pub fn find_label(&self, config: &SearchConfig<H::Element>) -> Option<String> {
        self.resolve(config).map(|resolved| resolved.label)
    }

    /// Like [`find_label`](Self::find_label) but keeps the winning distance.
    pub fn resolve(&self, config: &SearchConfig<H::Element>) -> Option<ResolvedLabel> {
        let target = config
            .target
            .clone()
            .or_else(|| self.host.focused_element())?;
        match self.probe(&target, config)? {
            ContainerKind::EnumeratedControls(candidates) => {
                let explorer = ControlCenterExplorer::new(
                    target.bounds(),
                    config.directions,
                    config.max_horizontal.unwrap_or(DEFAULT_MAX_HORIZONTAL),
                    config.max_vertical,
                );
                explorer
                    .scan(&candidates)
                    .map(|matched| ResolvedLabel {
                        label: matched.label,
                        distance: matched.distance,
                    })
            }
            ContainerKind::AncestorText(container) => {
                self.resolve_from_text(&target, &container, config)
            }
        }
    }

    /// Decide which label source this snapshot offers.
    fn probe(
        &self,
        target: &H::Element,
        config: &SearchConfig<H::Element>,
    ) -> Option<ContainerKind<<H::Element as ElementProxy>::Text>> {
        if let Some(container) = &config.text_container {
            return self
                .own_text_of(container, config)
                .map(ContainerKind::AncestorText);
        }
        if let Some(foreground) = self.host.foreground_element() {
            let candidates = self.host.labelled_controls(&foreground);
            if !candidates.is_empty() {
                debug!(count = candidates.len(), "using enumerated label controls");
                return Some(ContainerKind::EnumeratedControls(candidates));
            }
        }
        self.find_text_container(target, config)
            .map(ContainerKind::AncestorText)
    }

    /// Walk the target's ancestors in root-to-target order and keep the
    /// first with non-empty own text. Ancestors inside the target's own
    /// window are skipped — they would offer the target's content as its
    /// label.
    fn find_text_container(
        &self,
        target: &H::Element,
        config: &SearchConfig<H::Element>,
    ) -> Option<<H::Element as ElementProxy>::Text> {
        let boundary = config
            .break_ancestor
            .clone()
            .or_else(|| self.host.foreground_element());
        let chain = ancestor_chain(target, boundary.as_ref());
        let target_window = target.window_id();
        for ancestor in &chain {
            if ancestor.window_id() == target_window {
                continue;
            }
            if let Some(text) = self.own_text_of(ancestor, config) {
                return Some(text);
            }
        }
        debug!("no text container among ancestors");
        None
    }

    fn own_text_of(
        &self,
        element: &H::Element,
        config: &SearchConfig<H::Element>,
    ) -> Option<<H::Element as ElementProxy>::Text> {
        if config.refresh_stale_text {
            element.request_redraw();
        }
        element
            .own_text()
            .filter(|container| !container.text().is_empty())
    }

    fn resolve_from_text(
        &self,
        target: &H::Element,
        container: &<H::Element as ElementProxy>::Text,
        config: &SearchConfig<H::Element>,
    ) -> Option<ResolvedLabel> {
        let max_horizontal = config
            .max_horizontal
            .unwrap_or_else(|| container.min_horizontal_whitespace());
        let explorer = TextRunExplorer::new(
            target.bounds(),
            config.directions,
            max_horizontal,
            config.max_vertical,
        );
        let char_rects = container.char_rects();
        let matched = explorer.scan(&char_rects)?;
        // Average the tied offsets to sidestep spurious single-glyph hits,
        // then widen to the enclosing display chunk so the label is a run of
        // text rather than one character.
        let mean_offset = matched.offsets.iter().sum::<usize>() / matched.offsets.len();
        let (start, end) = container.display_chunk(mean_offset);
        let label = slice_chars(container.text(), start, end).trim();
        if label.is_empty() {
            return None;
        }
        debug!(label, distance = matched.distance, "label resolved from text run");
        Some(ResolvedLabel {
            label: label.to_string(),
            distance: matched.distance,
        })
    }
}

/// Ancestors of `target` in root-to-target order, clipped at `boundary`
/// (inclusive) when one is given.
fn ancestor_chain<E: ElementProxy>(target: &E, boundary: Option<&E>) -> Vec<E> {
    let mut chain = Vec::new();
    let mut cursor = target.parent();
    while let Some(element) = cursor {
        let at_boundary = boundary.is_some_and(|b| *b == element);
        cursor = element.parent();
        chain.push(element);
        if at_boundary {
            break;
        }
    }
    chain.reverse();
    chain
}

/// Slice `text` by character offsets, clamped to the text's bounds.
fn slice_chars(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let mut indices = text.char_indices().map(|(byte, _)| byte);
    let begin = indices.nth(start).unwrap_or(text.len());
    let finish = if end > start {
        text.char_indices()
            .map(|(byte, _)| byte)
            .nth(end)
            .unwrap_or(text.len())
    } else {
        begin
    };
    &text[begin..finish]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_chars_handles_multibyte_text() {
        let text = "héllo wörld";
        assert_eq!(slice_chars(text, 0, 5), "héllo");
        assert_eq!(slice_chars(text, 6, 11), "wörld");
    }

    #[test]
    fn slice_chars_clamps_out_of_range_offsets() {
        assert_eq!(slice_chars("abc", 1, 100), "bc");
        assert_eq!(slice_chars("abc", 5, 9), "");
        assert_eq!(slice_chars("abc", 2, 2), "");
    }
}
