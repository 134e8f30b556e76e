pub mod animation;
pub mod clipboard;
pub mod dashboard;
pub mod debounce;
pub mod forms;
pub mod loader;
pub mod logging;
pub mod paths;
pub mod reveal;
pub mod settings;
pub mod sidebar;
pub mod table;
pub mod theme;
pub mod toast;

pub use dashdom;

pub mod prelude {
    pub use crate::animation::{CounterAnimation, format_number};
    pub use crate::clipboard::{Clipboard, ClipboardError, copy_text};
    pub use crate::dashboard::Dashboard;
    pub use crate::debounce::Debouncer;
    pub use crate::forms::{FieldError, SubmitLock, ValidationResult};
    pub use crate::loader::{LoadingOverlay, PageLoader};
    pub use crate::reveal::{Intersection, ScrollReveal};
    pub use crate::settings::{SettingsBackend, SettingsError, SettingsProvider};
    pub use crate::sidebar::Sidebar;
    pub use crate::table::{Column, Row, SortDirection, TableOptions, TableView};
    pub use crate::theme::{ThemeManager, ThemeMode};
    pub use crate::toast::{Notify, Toast, ToastCenter, ToastLevel};

    pub use dashdom::{Document, Element, Tag};
}
