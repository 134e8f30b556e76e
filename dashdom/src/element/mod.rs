mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children.iter_mut() {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the element whose direct child has `id`.
pub fn find_parent_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.child_elements().iter().any(|c| c.id == id) {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children.iter_mut() {
            if let Some(found) = find_parent_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element matching `pred`, in document order.
pub fn find_all<'a>(root: &'a Element, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
    let mut out = Vec::new();
    collect_matching(root, pred, &mut out);
    out
}

fn collect_matching<'a>(
    element: &'a Element,
    pred: &dyn Fn(&Element) -> bool,
    out: &mut Vec<&'a Element>,
) {
    if pred(element) {
        out.push(element);
    }
    for child in element.child_elements() {
        collect_matching(child, pred, out);
    }
}

/// Visit every element mutably, parents before children.
pub fn walk_mut(root: &mut Element, f: &mut dyn FnMut(&mut Element)) {
    f(root);
    if let Content::Children(children) = &mut root.content {
        for child in children.iter_mut() {
            walk_mut(child, f);
        }
    }
}
