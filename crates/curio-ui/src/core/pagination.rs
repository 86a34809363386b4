//! Page window calculation and delegated click routing for the pagination control.
//!
//! # Design
//! - Everything here is DOM-free so the windowing rules are tested natively.
//! - The window is recomputed from `(active_page, total_pages)` on every render.
//! - Clicks are resolved through [`ControlTagResolver`] so a single container
//!   listener can serve every control, whatever the rendering tree looks like.

use std::ops::RangeInclusive;

/// Maximum number of page entries shown in the sliding window.
pub const WINDOW_SIZE: u32 = 5;
/// Pages kept on each side of the active page when the window can slide.
const WINDOW_RADIUS: u32 = 2;
/// Distance from an edge after which the jump shortcut for that edge appears.
const EDGE_THRESHOLD: u32 = 3;
/// Page targeted when an activation cannot be resolved to a page tag.
pub const FALLBACK_PAGE: u32 = 1;

/// Inclusive range of page numbers painted between the previous/next controls.
///
/// An empty window is represented as `start = 1, end = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    start: u32,
    end: u32,
}

impl PageWindow {
    /// First page number in the window.
    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    /// Last page number in the window (below `start` when empty).
    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }

    /// Number of page entries to paint.
    #[must_use]
    pub const fn len(self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// True when no page entries should be painted.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.end < self.start
    }

    /// Page numbers in display order.
    #[must_use]
    pub const fn pages(self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

/// Visibility of the jump-to-first and jump-to-last shortcuts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShortcutFlags {
    /// Show the control jumping to page 1.
    pub show_first: bool,
    /// Show the control jumping to the last page.
    pub show_last: bool,
}

/// Compute the sliding page window around `active_page`.
///
/// The window is anchored two pages past the active page, never narrower than
/// [`WINDOW_SIZE`] when enough pages exist, and never past `total_pages`.
#[must_use]
pub fn page_window(active_page: u32, total_pages: u32) -> PageWindow {
    let anchored = active_page.saturating_add(WINDOW_RADIUS).min(total_pages);
    let end = anchored.max(total_pages.min(WINDOW_SIZE));
    let start = end.saturating_sub(WINDOW_SIZE - 1).max(1);
    PageWindow { start, end }
}

/// Decide which edge shortcuts are shown for the active page.
#[must_use]
pub const fn shortcut_flags(active_page: u32, total_pages: u32) -> ShortcutFlags {
    let paged = total_pages > WINDOW_SIZE;
    ShortcutFlags {
        show_first: paged && active_page > EDGE_THRESHOLD,
        show_last: paged && active_page.saturating_add(EDGE_THRESHOLD) < total_pages,
    }
}

/// Compute both the page window and the shortcut flags.
#[must_use]
pub fn compute(active_page: u32, total_pages: u32) -> (PageWindow, ShortcutFlags) {
    (
        page_window(active_page, total_pages),
        shortcut_flags(active_page, total_pages),
    )
}

/// Inputs supplied by the listing that owns the pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationRequest {
    /// Currently displayed page (1-based).
    pub active_page: u32,
    /// Number of pages available.
    pub total_pages: u32,
    /// Optional number of results, used only for the summary text.
    pub result_count: Option<u64>,
}

impl PaginationRequest {
    /// Build a request without a result count.
    #[must_use]
    pub const fn new(active_page: u32, total_pages: u32) -> Self {
        Self {
            active_page,
            total_pages,
            result_count: None,
        }
    }

    /// Attach a result count for the summary text.
    #[must_use]
    pub const fn with_result_count(mut self, count: u64) -> Self {
        self.result_count = Some(count);
        self
    }

    /// Derive everything the renderer needs for this request.
    #[must_use]
    pub fn layout(&self) -> PaginationLayout {
        let (window, shortcuts) = compute(self.active_page, self.total_pages);
        PaginationLayout {
            window,
            shortcuts,
            controls: controls(self.active_page, self.total_pages),
            summary: results_summary(self.result_count),
        }
    }
}

/// Render-ready description of the pagination control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationLayout {
    /// Windowed page numbers.
    pub window: PageWindow,
    /// Edge shortcut visibility.
    pub shortcuts: ShortcutFlags,
    /// Controls in display order.
    pub controls: Vec<PageControl>,
    /// Optional "N results" text.
    pub summary: Option<String>,
}

/// Role of a rendered control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Jump to page 1.
    First,
    /// Step back one page.
    Previous,
    /// A page inside the window.
    Page,
    /// Step forward one page.
    Next,
    /// Jump to the last page.
    Last,
}

impl ControlKind {
    /// Accessible label for the control; windowed pages use their number instead.
    #[must_use]
    pub const fn aria_label(self) -> &'static str {
        match self {
            Self::First => "First page",
            Self::Previous => "Previous page",
            Self::Page => "Page",
            Self::Next => "Next page",
            Self::Last => "Last page",
        }
    }
}

/// A single interactive element tagged with the page it leads to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageControl {
    /// Role of the control.
    pub kind: ControlKind,
    /// Page carried in the control's tag.
    pub page: u32,
    /// Marks the windowed page equal to the active page.
    pub active: bool,
    /// Disabled controls are never hit-tested.
    pub disabled: bool,
}

impl PageControl {
    const fn new(kind: ControlKind, page: u32) -> Self {
        Self {
            kind,
            page,
            active: false,
            disabled: false,
        }
    }

    /// Tag value attached to the rendered element.
    #[must_use]
    pub fn tag(&self) -> String {
        self.page.to_string()
    }

    /// Visible text of the control.
    #[must_use]
    pub fn label(&self) -> String {
        match self.kind {
            ControlKind::First => "«".to_string(),
            ControlKind::Previous => "‹".to_string(),
            ControlKind::Page => self.page.to_string(),
            ControlKind::Next => "›".to_string(),
            ControlKind::Last => "»".to_string(),
        }
    }
}

/// Build the ordered control list: first, previous, window, next, last.
#[must_use]
pub fn controls(active_page: u32, total_pages: u32) -> Vec<PageControl> {
    let (window, shortcuts) = compute(active_page, total_pages);
    let mut out = Vec::with_capacity(window.len() as usize + 4);

    if shortcuts.show_first {
        out.push(PageControl::new(ControlKind::First, 1));
    }
    out.push(PageControl {
        disabled: active_page <= 1,
        ..PageControl::new(ControlKind::Previous, active_page.saturating_sub(1))
    });
    out.extend(window.pages().map(|page| PageControl {
        active: page == active_page,
        ..PageControl::new(ControlKind::Page, page)
    }));
    out.push(PageControl {
        disabled: active_page >= total_pages,
        ..PageControl::new(ControlKind::Next, active_page.saturating_add(1))
    });
    if shortcuts.show_last {
        out.push(PageControl::new(ControlKind::Last, total_pages));
    }
    out
}

/// Summary text shown next to the control when a non-zero count is known.
#[must_use]
pub fn results_summary(result_count: Option<u64>) -> Option<String> {
    result_count
        .filter(|count| *count > 0)
        .map(|count| format!("{count} results"))
}

/// Looks up the page tag of the control an activation event landed on.
///
/// Implementations return the tag of the nearest ancestor-or-self control,
/// or `None` when the event did not land inside a tagged control.
pub trait ControlTagResolver<E: ?Sized> {
    /// Resolve the raw tag value for `event`.
    fn resolve_control_tag(&self, event: &E) -> Option<String>;
}

impl<E: ?Sized, F> ControlTagResolver<E> for F
where
    F: Fn(&E) -> Option<String>,
{
    fn resolve_control_tag(&self, event: &E) -> Option<String> {
        self(event)
    }
}

/// Parse a page tag using leading-digit rules, falling back to page 1.
///
/// Leading whitespace and a `+` sign are skipped, then the longest run of
/// ASCII digits is read; trailing characters are ignored.
#[must_use]
pub fn parse_page_tag(tag: Option<&str>) -> u32 {
    let Some(raw) = tag else {
        return FALLBACK_PAGE;
    };
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_len]
        .parse::<u32>()
        .unwrap_or(FALLBACK_PAGE)
}

/// Map a resolved tag to the page to navigate to, or `None` for the active page.
#[must_use]
pub fn target_page(tag: Option<&str>, active_page: u32) -> Option<u32> {
    let page = parse_page_tag(tag);
    (page != active_page).then_some(page)
}

/// Routes delegated activation events to page changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickRouter<R> {
    resolver: R,
}

impl<R> ClickRouter<R> {
    /// Wrap a tag resolver supplied by the renderer.
    #[must_use]
    pub const fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Resolve the target page for `event`, or `None` when it is the active page.
    #[must_use]
    pub fn route<E: ?Sized>(&self, event: &E, active_page: u32) -> Option<u32>
    where
        R: ControlTagResolver<E>,
    {
        let tag = self.resolver.resolve_control_tag(event);
        target_page(tag.as_deref(), active_page)
    }

    /// Route `event` and invoke `on_page_change` when the page differs.
    pub fn dispatch<E: ?Sized, F>(&self, event: &E, active_page: u32, on_page_change: F)
    where
        R: ControlTagResolver<E>,
        F: FnOnce(u32),
    {
        if let Some(page) = self.route(event, active_page) {
            on_page_change(page);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_pages(active: u32, total: u32) -> Vec<u32> {
        page_window(active, total).pages().collect()
    }

    #[test]
    fn window_centres_on_active_page() {
        assert_eq!(window_pages(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(
            shortcut_flags(5, 10),
            ShortcutFlags {
                show_first: true,
                show_last: true
            }
        );
    }

    #[test]
    fn window_stays_five_wide_at_edges() {
        assert_eq!(window_pages(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(window_pages(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(window_pages(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(window_pages(9, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn window_shrinks_for_few_pages() {
        assert_eq!(window_pages(1, 3), vec![1, 2, 3]);
        assert_eq!(shortcut_flags(1, 3), ShortcutFlags::default());
        assert_eq!(window_pages(2, 1), vec![1]);
    }

    #[test]
    fn zero_pages_yield_empty_window() {
        let (window, flags) = compute(1, 0);
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert_eq!(window.pages().count(), 0);
        assert_eq!((window.start(), window.end()), (1, 0));
        assert_eq!(flags, ShortcutFlags::default());
    }

    #[test]
    fn last_page_of_six_shows_only_first_shortcut() {
        assert_eq!(window_pages(6, 6), vec![2, 3, 4, 5, 6]);
        let flags = shortcut_flags(6, 6);
        assert!(flags.show_first);
        assert!(!flags.show_last);
    }

    #[test]
    fn active_page_past_total_is_not_recentred() {
        let window = page_window(40, 12);
        assert_eq!((window.start(), window.end()), (8, 12));
        assert!(!window.pages().contains(&40));
    }

    #[test]
    fn huge_active_page_does_not_overflow() {
        let window = page_window(u32::MAX, u32::MAX);
        assert_eq!(window.end(), u32::MAX);
        assert_eq!(window.len(), WINDOW_SIZE);
        assert!(!shortcut_flags(u32::MAX, u32::MAX).show_last);
    }

    #[test]
    fn controls_follow_display_order() {
        let kinds: Vec<ControlKind> = controls(5, 10).iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ControlKind::First,
                ControlKind::Previous,
                ControlKind::Page,
                ControlKind::Page,
                ControlKind::Page,
                ControlKind::Page,
                ControlKind::Page,
                ControlKind::Next,
                ControlKind::Last,
            ]
        );
    }

    #[test]
    fn controls_carry_expected_tags() {
        let list = controls(5, 10);
        let tags: Vec<String> = list.iter().map(PageControl::tag).collect();
        assert_eq!(tags, ["1", "4", "3", "4", "5", "6", "7", "6", "10"]);
        let active: Vec<u32> = list
            .iter()
            .filter(|control| control.active)
            .map(|control| control.page)
            .collect();
        assert_eq!(active, vec![5]);
    }

    #[test]
    fn previous_and_next_disable_at_edges() {
        let first = controls(1, 4);
        assert!(first.iter().any(|c| c.kind == ControlKind::Previous && c.disabled && c.page == 0));
        assert!(first.iter().any(|c| c.kind == ControlKind::Next && !c.disabled));

        let last = controls(4, 4);
        assert!(last.iter().any(|c| c.kind == ControlKind::Previous && !c.disabled));
        assert!(last.iter().any(|c| c.kind == ControlKind::Next && c.disabled && c.page == 5));
    }

    #[test]
    fn empty_listing_renders_only_disabled_steppers() {
        let list = controls(1, 0);
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|control| control.disabled));
    }

    #[test]
    fn labels_use_arrows_and_numbers() {
        let list = controls(5, 10);
        let labels: Vec<String> = list.iter().map(PageControl::label).collect();
        assert_eq!(labels.first().map(String::as_str), Some("«"));
        assert_eq!(labels.get(4).map(String::as_str), Some("5"));
        assert_eq!(labels.last().map(String::as_str), Some("»"));
        assert_eq!(ControlKind::Next.aria_label(), "Next page");
    }

    #[test]
    fn summary_only_for_positive_counts() {
        assert_eq!(results_summary(Some(42)).as_deref(), Some("42 results"));
        assert_eq!(results_summary(Some(0)), None);
        assert_eq!(results_summary(None), None);
    }

    #[test]
    fn request_layout_bundles_all_outputs() {
        let layout = PaginationRequest::new(3, 3).with_result_count(57).layout();
        assert_eq!(layout.window.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(layout.shortcuts, ShortcutFlags::default());
        assert_eq!(layout.controls.len(), 5);
        assert_eq!(layout.summary.as_deref(), Some("57 results"));
    }

    #[test]
    fn page_tags_parse_leading_digits() {
        assert_eq!(parse_page_tag(Some("9")), 9);
        assert_eq!(parse_page_tag(Some("  12")), 12);
        assert_eq!(parse_page_tag(Some("+7")), 7);
        assert_eq!(parse_page_tag(Some("3px")), 3);
        assert_eq!(parse_page_tag(Some("0")), 0);
    }

    #[test]
    fn malformed_page_tags_fall_back_to_first_page() {
        assert_eq!(parse_page_tag(None), FALLBACK_PAGE);
        assert_eq!(parse_page_tag(Some("")), FALLBACK_PAGE);
        assert_eq!(parse_page_tag(Some("next")), FALLBACK_PAGE);
        assert_eq!(parse_page_tag(Some("-4")), FALLBACK_PAGE);
        assert_eq!(parse_page_tag(Some("99999999999")), FALLBACK_PAGE);
    }

    #[test]
    fn target_page_ignores_active_page() {
        assert_eq!(target_page(Some("5"), 5), None);
        assert_eq!(target_page(Some("6"), 5), Some(6));
        assert_eq!(target_page(None, 1), None);
        assert_eq!(target_page(None, 4), Some(1));
    }

    #[test]
    fn router_dispatches_through_closure_resolver() {
        let router = ClickRouter::new(|tag: &&str| Some((*tag).to_string()));
        let mut fired = Vec::new();
        router.dispatch(&"9", 5, |page| fired.push(page));
        router.dispatch(&"5", 5, |page| fired.push(page));
        assert_eq!(fired, vec![9]);
        assert_eq!(router.route(&"5", 5), None);
    }
}
