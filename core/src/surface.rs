/// The slice of the document the controllers are allowed to touch.
///
/// Lookups that fail (no match, invalid selector) come back as `None`; writes
/// are fire-and-forget, the implementation decides how to report DOM errors.
pub trait Surface {
    type Node: Clone + 'static;

    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn query_in(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    /// Hostname the node resolves to when it is a link.
    fn link_hostname(&self, node: &Self::Node) -> Option<String>;
    /// Top-left corner of the node's bounding box in viewport coordinates.
    fn client_origin(&self, node: &Self::Node) -> (f64, f64);

    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    /// Returns whether the class is present afterwards.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool;
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    fn scroll_into_view(&self, node: &Self::Node);
    fn page_hostname(&self) -> String;
    fn navigate(&self, href: &str);
}

/// One-shot delayed tasks. Cancelling a handle guarantees its task never runs.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}
