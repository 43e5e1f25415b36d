#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use karmakazi_core::{Scheduler, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Default)]
struct FakeNode {
    matches: Vec<String>,
    parent: Option<NodeId>,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    attrs: BTreeMap<String, String>,
    hostname: Option<String>,
    origin: (f64, f64),
}

/// In-memory document: nodes answer to the selectors they were registered with.
pub struct FakeSurface {
    nodes: RefCell<Vec<FakeNode>>,
    body: Option<NodeId>,
    hostname: String,
    scrolled_to: RefCell<Vec<NodeId>>,
    navigations: RefCell<Vec<String>>,
}

impl FakeSurface {
    pub fn new(hostname: &str) -> Self {
        let mut surface = Self {
            nodes: RefCell::new(Vec::new()),
            body: None,
            hostname: hostname.to_string(),
            scrolled_to: RefCell::new(Vec::new()),
            navigations: RefCell::new(Vec::new()),
        };
        surface.body = Some(surface.add(&["body"]));
        surface
    }

    pub fn without_body(hostname: &str) -> Self {
        Self {
            nodes: RefCell::new(Vec::new()),
            body: None,
            hostname: hostname.to_string(),
            scrolled_to: RefCell::new(Vec::new()),
            navigations: RefCell::new(Vec::new()),
        }
    }

    pub fn add(&self, matches: &[&str]) -> NodeId {
        self.insert(matches, None)
    }

    pub fn add_child(&self, parent: NodeId, matches: &[&str]) -> NodeId {
        self.insert(matches, Some(parent))
    }

    fn insert(&self, matches: &[&str], parent: Option<NodeId>) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            matches: matches.iter().map(|s| s.to_string()).collect(),
            parent,
            ..FakeNode::default()
        });
        NodeId(nodes.len() - 1)
    }

    pub fn set_attr(&self, node: NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_hostname(&self, node: NodeId, hostname: &str) {
        self.nodes.borrow_mut()[node.0].hostname = Some(hostname.to_string());
    }

    pub fn set_origin(&self, node: NodeId, left: f64, top: f64) {
        self.nodes.borrow_mut()[node.0].origin = (left, top);
    }

    pub fn body_id(&self) -> NodeId {
        self.body.expect("fake body")
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0].classes.contains(class)
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node.0].styles.get(property).cloned()
    }

    pub fn scrolled_to(&self) -> Vec<NodeId> {
        self.scrolled_to.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl Surface for FakeSurface {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.matches.iter().any(|m| m == selector))
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn query_in(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .find(|(_, node)| node.parent == Some(*scope) && node.matches.iter().any(|m| m == selector))
            .map(|(index, _)| NodeId(index))
    }

    fn body(&self) -> Option<NodeId> {
        self.body
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attrs.get(name).cloned()
    }

    fn link_hostname(&self, node: &NodeId) -> Option<String> {
        self.nodes.borrow()[node.0].hostname.clone()
    }

    fn client_origin(&self, node: &NodeId) -> (f64, f64) {
        self.nodes.borrow()[node.0].origin
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].classes.insert(class.to_string());
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].classes.remove(class);
    }

    fn toggle_class(&self, node: &NodeId, class: &str) -> bool {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[node.0].classes;
        if classes.remove(class) {
            false
        } else {
            classes.insert(class.to_string());
            true
        }
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn scroll_into_view(&self, node: &NodeId) {
        self.scrolled_to.borrow_mut().push(*node);
    }

    fn page_hostname(&self) -> String {
        self.hostname.clone()
    }

    fn navigate(&self, href: &str) {
        self.navigations.borrow_mut().push(href.to_string());
    }
}

struct ScheduledTask {
    id: u64,
    due: u64,
    task: Box<dyn FnOnce()>,
}

/// Virtual clock; tasks run only from `advance`.
pub struct ManualScheduler {
    now: Cell<u64>,
    next_id: Cell<u64>,
    tasks: RefCell<Vec<ScheduledTask>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            now: Cell::new(0),
            next_id: Cell::new(1),
            tasks: RefCell::new(Vec::new()),
        }
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let mut tasks = self.tasks.borrow_mut();
                let due = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.id))
                    .map(|(index, _)| index);
                due.map(|index| tasks.remove(index))
            };
            let Some(task) = next else {
                break;
            };
            self.now.set(task.due);
            (task.task)();
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.tasks.borrow_mut().push(ScheduledTask {
            id,
            due: self.now.get() + u64::from(delay_ms),
            task,
        });
        id
    }

    fn cancel(&self, handle: u64) {
        self.tasks.borrow_mut().retain(|task| task.id != handle);
    }
}

pub fn rc_pair(surface: FakeSurface) -> (Rc<FakeSurface>, Rc<ManualScheduler>) {
    (Rc::new(surface), Rc::new(ManualScheduler::new()))
}
