use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// The element whose class list signals the active theme to the stylesheet.
pub trait StyleRoot {
    fn set_class(&self, class: &str, present: bool);
    fn has_class(&self, class: &str) -> bool;
}

/// Class list kept in memory, for targets without a DOM the app can reach.
#[derive(Clone, Debug, Default)]
pub struct DetachedRoot {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl DetachedRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl StyleRoot for DetachedRoot {
    fn set_class(&self, class: &str, present: bool) {
        let mut classes = self.classes.borrow_mut();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

/// `document.documentElement` of the hosting page.
#[derive(Clone, Debug)]
pub struct DocumentRoot {
    element: web_sys::Element,
}

impl DocumentRoot {
    pub fn attach() -> Option<Self> {
        let element = web_sys::window()?.document()?.document_element()?;
        Some(Self { element })
    }
}

impl StyleRoot for DocumentRoot {
    fn set_class(&self, class: &str, present: bool) {
        if let Err(e) = self.element.class_list().toggle_with_force(class, present) {
            log::error!("Failed to update root class '{}': {:?}", class, e);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_root_add_remove() {
        let root = DetachedRoot::new();
        root.set_class("dark", true);
        root.set_class("dark", true);
        assert_eq!(root.classes(), vec!["dark".to_string()]);

        root.set_class("dark", false);
        assert!(!root.has_class("dark"));
        assert!(root.classes().is_empty());
    }
}
