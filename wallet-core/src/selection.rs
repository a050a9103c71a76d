/// A row in a single choice list, e.g. the local currency or language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOption<T> {
    pub text: String,
    pub is_selected: bool,
    pub data: Option<T>,
    pub hide_checkboxes: bool,
}

/// What the host draws for a [`SelectionOption`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRow<'a> {
    /// Radio button state, `None` when checkboxes are hidden.
    pub radio: Option<bool>,
    pub text: &'a str,
}

impl<T> SelectionOption<T> {
    pub fn new(text: impl Into<String>, is_selected: bool) -> Self {
        Self {
            text: text.into(),
            is_selected,
            data: None,
            hide_checkboxes: false,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn hide_checkboxes(mut self) -> Self {
        self.hide_checkboxes = true;
        self
    }

    pub fn row(&self) -> SelectionRow<'_> {
        SelectionRow {
            radio: (!self.hide_checkboxes).then_some(self.is_selected),
            text: &self.text,
        }
    }

    /// Hand the row's text and payload to the selection handler.
    pub fn press<F>(&self, on_select: F)
    where
        F: FnOnce(&str, Option<&T>),
    {
        on_select(&self.text, self.data.as_ref());
    }
}
