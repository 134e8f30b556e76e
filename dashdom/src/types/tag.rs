use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    Html,
    Body,
    #[default]
    Div,
    Span,
    A,
    Button,
    Form,
    Input,
    Label,
    Table,
    THead,
    TBody,
    Tr,
    Th,
    Td,
    Other(String),
}

impl Tag {
    pub fn name(&self) -> &str {
        match self {
            Tag::Html => "html",
            Tag::Body => "body",
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::A => "a",
            Tag::Button => "button",
            Tag::Form => "form",
            Tag::Input => "input",
            Tag::Label => "label",
            Tag::Table => "table",
            Tag::THead => "thead",
            Tag::TBody => "tbody",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
            Tag::Other(name) => name,
        }
    }

    /// Table cells, either header or data.
    pub fn is_cell(&self) -> bool {
        matches!(self, Tag::Th | Tag::Td)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "html" => Tag::Html,
            "body" => Tag::Body,
            "div" => Tag::Div,
            "span" => Tag::Span,
            "a" => Tag::A,
            "button" => Tag::Button,
            "form" => Tag::Form,
            "input" | "textarea" | "select" => Tag::Input,
            "label" => Tag::Label,
            "table" => Tag::Table,
            "thead" => Tag::THead,
            "tbody" => Tag::TBody,
            "tr" => Tag::Tr,
            "th" => Tag::Th,
            "td" => Tag::Td,
            other => Tag::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
