use super::TooltipAnchor;

/// Floating tooltip element owned by one chart instance.
///
/// Implementations position the element at client coordinates. `remove`
/// detaches it from the surrounding document; no method is called after it.
pub trait Tooltip {
    fn show(&mut self, text: &str, anchor: TooltipAnchor);
    fn move_to(&mut self, anchor: TooltipAnchor);
    fn hide(&mut self);
    fn remove(&mut self);
}

/// In-memory tooltip for tests and headless hosts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessTooltip {
    pub visible: bool,
    pub text: String,
    pub anchor: Option<TooltipAnchor>,
    pub removed: bool,
    pub show_count: usize,
}

impl Tooltip for HeadlessTooltip {
    fn show(&mut self, text: &str, anchor: TooltipAnchor) {
        self.visible = true;
        text.clone_into(&mut self.text);
        self.anchor = Some(anchor);
        self.show_count += 1;
    }

    fn move_to(&mut self, anchor: TooltipAnchor) {
        self.anchor = Some(anchor);
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn remove(&mut self) {
        self.visible = false;
        self.removed = true;
    }
}

impl<T: Tooltip + ?Sized> Tooltip for Box<T> {
    fn show(&mut self, text: &str, anchor: TooltipAnchor) {
        (**self).show(text, anchor);
    }

    fn move_to(&mut self, anchor: TooltipAnchor) {
        (**self).move_to(anchor);
    }

    fn hide(&mut self) {
        (**self).hide();
    }

    fn remove(&mut self) {
        (**self).remove();
    }
}
