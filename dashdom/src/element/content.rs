#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    /// Concatenated text of this content and all descendants, in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        match self {
            Self::None => {}
            Self::Text(s) => out.push_str(s),
            Self::Children(children) => {
                for child in children {
                    child.content.collect_text(out);
                }
            }
        }
    }
}
