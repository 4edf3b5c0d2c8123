//! Input controls shared by every modal and page.
//!
//! Controls hold their own pending events (edits, submits, clicks) the way an
//! immediate-mode widget does: the renderer records what happened while
//! drawing, and the owning controller drains the events in its `handle` pass.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    SingleLine,
    MultiLine,
    Password,
}

/// Text input paired with an error slot.
#[derive(Debug, Clone, Default)]
pub struct FormField {
    label: String,
    kind: FieldKind,
    submit: bool,
    text: String,
    error: Option<String>,
    focused: bool,
    focus_requested: bool,
    edited: bool,
    submitted: bool,
}

impl FormField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Enter inside the field submits the form.
    pub fn submit_on_enter(mut self, submit: bool) -> Self {
        self.submit = submit;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn field_kind(&self) -> FieldKind {
        self.kind
    }

    pub fn submits(&self) -> bool {
        self.submit
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replaces the text programmatically. Clears the error but does not
    /// raise an edit event.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.error = None;
    }

    /// Records a user edit: new text, error cleared, edit event pending.
    pub fn input(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.mark_edited();
    }

    /// Buffer handed to the text widget. Call [`FormField::mark_edited`]
    /// when the widget reports a change.
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn mark_edited(&mut self) {
        self.error = None;
        self.edited = true;
    }

    /// Records a submit key press. Ignored for fields that do not submit.
    pub fn press_submit(&mut self) {
        if self.submit {
            self.submitted = true;
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.error = if message.is_empty() { None } else { Some(message) };
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.focus_requested = true;
    }

    /// Keeps the focus flag in sync with what the renderer observed.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    fn take_events(&mut self) -> (bool, bool) {
        (
            std::mem::take(&mut self.submitted),
            std::mem::take(&mut self.edited),
        )
    }
}

/// Drains pending events from `fields`, returning `(submitted, changed)`.
pub fn handle_field_events(fields: &mut [&mut FormField]) -> (bool, bool) {
    let mut submit = false;
    let mut changed = false;
    for field in fields.iter_mut() {
        let (s, c) = field.take_events();
        submit |= s;
        changed |= c;
    }
    (submit, changed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    /// Cancels the top modal, like a backdrop click.
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

/// Moves focus to the next field (previous on Shift+Tab), wrapping at the
/// ends. Returns false when the key is not Tab or no field is focused.
pub fn switch_focus(key: KeyPress, fields: &mut [&mut FormField]) -> bool {
    if key.key != Key::Tab || fields.is_empty() {
        return false;
    }
    let Some(current) = fields.iter().position(|f| f.is_focused()) else {
        return false;
    };
    let len = fields.len();
    let next = if key.shift {
        (current + len - 1) % len
    } else {
        (current + 1) % len
    };
    fields[current].set_focused(false);
    fields[next].focus();
    true
}

#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    enabled: bool,
    pending_clicks: u32,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            pending_clicks: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending_clicks = 0;
        }
    }

    /// Records a click. Disabled buttons do not register clicks.
    pub fn click(&mut self) {
        if self.enabled {
            self.pending_clicks += 1;
        }
    }

    /// Consumes one pending click.
    pub fn clicked(&mut self) -> bool {
        if self.pending_clicks > 0 {
            self.pending_clicks -= 1;
            true
        } else {
            false
        }
    }
}
