//! Modal container state and layout
//!
//! The container draws a full-screen backdrop behind a centred card. The
//! card hosts an ordered list of content widgets, optionally pinning the
//! first one as a floating title.

pub const DEFAULT_PADDING: f32 = 24.0;
pub const DEFAULT_MAX_WIDTH: f32 = 380.0;
/// Space kept above and below the card.
pub const OUTER_INSET: f32 = 50.0;
pub const ITEM_SPACING: f32 = 10.0;
pub const CARD_RADIUS: f32 = 14.0;
pub const BACKDROP_ALPHA: u8 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Insets {
    pub fn uniform(v: f32) -> Self {
        Self {
            top: v,
            bottom: v,
            left: v,
            right: v,
        }
    }

    pub fn vertical(v: f32) -> Self {
        Self {
            top: v,
            bottom: v,
            left: 0.0,
            right: 0.0,
        }
    }

    pub fn height(&self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone)]
pub struct ModalState {
    is_loading: bool,
    is_cancelable: bool,
    is_disabled: bool,
    float_title: bool,
    show_scrollbar: bool,
    padding: f32,
    max_width: f32,
    backdrop_click: bool,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            is_loading: false,
            is_cancelable: true,
            is_disabled: false,
            float_title: false,
            show_scrollbar: false,
            padding: DEFAULT_PADDING,
            max_width: DEFAULT_MAX_WIDTH,
            backdrop_click: false,
        }
    }
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Modal whose first content widget is pinned as the title.
    pub fn float_title() -> Self {
        Self {
            float_title: true,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_cancelable(&self) -> bool {
        self.is_cancelable
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    pub fn has_float_title(&self) -> bool {
        self.float_title
    }

    pub fn shows_scrollbar(&self) -> bool {
        self.show_scrollbar
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    /// Loading implies disabled.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.set_disabled(loading);
    }

    pub fn set_cancelable(&mut self, cancelable: bool) {
        self.is_cancelable = cancelable;
    }

    /// Cannot re-enable a loading modal.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled || self.is_loading;
        if self.is_disabled {
            self.backdrop_click = false;
        }
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding.max(0.0);
    }

    pub fn set_max_width(&mut self, max_width: f32) {
        self.max_width = max_width;
    }

    pub fn show_scrollbar(&mut self, show: bool) {
        self.show_scrollbar = show;
    }

    /// Records a click on the backdrop. Inert while disabled.
    pub fn register_backdrop_click(&mut self) {
        if !self.is_disabled {
            self.backdrop_click = true;
        }
    }

    /// True when the backdrop was clicked since the last call and the modal
    /// may be cancelled. The pending click is consumed either way.
    pub fn backdrop_clicked(&mut self, cancelable: bool) -> bool {
        let clicked = std::mem::take(&mut self.backdrop_click);
        cancelable && clicked
    }

    /// Inset around the pinned title.
    pub fn title_inset(&self) -> Insets {
        if self.padding == 0.0 {
            Insets::uniform(self.padding)
        } else {
            Insets::vertical(ITEM_SPACING)
        }
    }

    /// Inset around each content widget.
    pub fn item_inset(&self) -> Insets {
        if self.padding == 0.0 {
            Insets::uniform(ITEM_SPACING)
        } else {
            Insets::vertical(ITEM_SPACING)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    Plain,
    Scroll,
}

/// Card geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalLayout {
    pub card: Size,
    /// Height left for the content list inside the card.
    pub content_max_height: f32,
    pub content_mode: ContentMode,
    pub title_inset: Insets,
    pub item_inset: Insets,
    pub padding: f32,
}

impl ModalLayout {
    /// Lays out a card for content of `content_height` (its natural height,
    /// insets included) inside `available`.
    pub fn compute(state: &ModalState, available: Size, content_height: f32) -> Self {
        let padding = state.padding();
        let width = available.width.min(state.max_width()).max(0.0);
        let max_card_height = (available.height - 2.0 * OUTER_INSET).max(0.0);
        let content_max_height = (max_card_height - 2.0 * padding).max(0.0);

        let overflows = content_height > content_max_height;
        let content_mode = if overflows && state.shows_scrollbar() {
            ContentMode::Scroll
        } else {
            ContentMode::Plain
        };
        let height = (content_height + 2.0 * padding).min(max_card_height);

        Self {
            card: Size::new(width, height),
            content_max_height,
            content_mode,
            title_inset: state.title_inset(),
            item_inset: state.item_inset(),
            padding,
        }
    }

    /// Natural content height for a list of widget heights.
    pub fn content_height(state: &ModalState, title: Option<f32>, items: &[f32]) -> f32 {
        let item_inset = state.item_inset().height();
        let body: f32 = items.iter().map(|h| h + item_inset).sum();
        let title = match title {
            Some(h) if state.has_float_title() => h + state.title_inset().height(),
            _ => 0.0,
        };
        title + body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_requires_cancelable() {
        let mut modal = ModalState::new();
        modal.register_backdrop_click();
        assert!(!modal.backdrop_clicked(false));
        // consumed by the previous call
        assert!(!modal.backdrop_clicked(true));

        modal.register_backdrop_click();
        assert!(modal.backdrop_clicked(true));
        assert!(!modal.backdrop_clicked(true));
    }

    #[test]
    fn loading_disables_and_blocks_backdrop() {
        let mut modal = ModalState::new();
        modal.set_loading(true);
        assert!(modal.is_disabled());
        modal.register_backdrop_click();
        assert!(!modal.backdrop_clicked(true));

        modal.set_loading(false);
        assert!(!modal.is_disabled());
    }

    #[test]
    fn loading_modal_stays_disabled() {
        let mut modal = ModalState::new();
        modal.set_loading(true);
        modal.set_disabled(false);
        assert!(modal.is_loading());
        assert!(modal.is_disabled());
        modal.register_backdrop_click();
        assert!(!modal.backdrop_clicked(true));
    }

    #[test]
    fn disabling_drops_pending_click() {
        let mut modal = ModalState::new();
        modal.register_backdrop_click();
        modal.set_disabled(true);
        modal.set_disabled(false);
        assert!(!modal.backdrop_clicked(true));
    }

    #[test]
    fn card_width_is_capped() {
        let modal = ModalState::new();
        let wide = ModalLayout::compute(&modal, Size::new(1200.0, 800.0), 100.0);
        assert_eq!(wide.card.width, DEFAULT_MAX_WIDTH);
        let narrow = ModalLayout::compute(&modal, Size::new(300.0, 800.0), 100.0);
        assert_eq!(narrow.card.width, 300.0);
    }

    #[test]
    fn card_height_is_content_plus_padding() {
        let modal = ModalState::new();
        let layout = ModalLayout::compute(&modal, Size::new(800.0, 800.0), 200.0);
        assert_eq!(layout.card.height, 200.0 + 2.0 * DEFAULT_PADDING);
        assert_eq!(layout.content_mode, ContentMode::Plain);
    }

    #[test]
    fn overflow_scrolls_only_when_enabled() {
        let mut modal = ModalState::new();
        let available = Size::new(800.0, 400.0);
        let plain = ModalLayout::compute(&modal, available, 1000.0);
        assert_eq!(plain.content_mode, ContentMode::Plain);
        assert_eq!(plain.card.height, 400.0 - 2.0 * OUTER_INSET);

        modal.show_scrollbar(true);
        let scrolled = ModalLayout::compute(&modal, available, 1000.0);
        assert_eq!(scrolled.content_mode, ContentMode::Scroll);

        let fits = ModalLayout::compute(&modal, available, 50.0);
        assert_eq!(fits.content_mode, ContentMode::Plain);
    }

    #[test]
    fn zero_padding_switches_insets() {
        let mut modal = ModalState::float_title();
        assert_eq!(modal.title_inset(), Insets::vertical(ITEM_SPACING));
        assert_eq!(modal.item_inset(), Insets::vertical(ITEM_SPACING));

        modal.set_padding(0.0);
        assert_eq!(modal.title_inset(), Insets::uniform(0.0));
        assert_eq!(modal.item_inset(), Insets::uniform(ITEM_SPACING));
    }

    #[test]
    fn content_height_counts_title_only_when_floating() {
        let plain = ModalState::new();
        let floating = ModalState::float_title();
        let items = [30.0, 40.0];
        assert_eq!(ModalLayout::content_height(&plain, Some(20.0), &items), 110.0);
        assert_eq!(ModalLayout::content_height(&floating, Some(20.0), &items), 150.0);
    }

    #[test]
    fn inset_wrapped_body_measures_its_rendered_height() {
        let mut flush = ModalState::new();
        flush.set_padding(0.0);
        for state in [ModalState::new(), flush] {
            let inset = state.item_inset();
            let rendered = 120.0 + inset.height();
            let measured = rendered - inset.height();
            assert_eq!(
                ModalLayout::content_height(&state, None, &[measured]),
                rendered
            );
        }
    }
}
