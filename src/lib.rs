//! Folio Behaviors - interactive layer for a static portfolio page
//!
//! Core modules:
//! - `theme`: Light/dark theme state and icon presentation
//! - `nav`: Mobile navigation menu open/close state
//! - `rotator`: Rotating hero title timeline
//! - `reveal`: One-way reveal-on-scroll tracking
//! - `scroll`: Sticky header and scroll-to-top visibility
//! - `contact`: Contact form submission against a form endpoint
//! - `persistence`: Theme preference storage
//! - `settings`: Page configuration (element ids, titles, messages)
//! - `platform`: Browser bindings (wasm32 only)

pub mod contact;
pub mod nav;
pub mod persistence;
pub mod platform;
pub mod reveal;
pub mod rotator;
pub mod scroll;
pub mod settings;
pub mod theme;

pub use contact::{ContactForm, ContactHandler, FormTransport, Notice, SubmitError};
pub use nav::NavMenu;
pub use persistence::{MemoryStore, PreferenceStore};
pub use reveal::RevealTracker;
pub use rotator::{RotatorStep, TitleRotator};
pub use scroll::{ScrollPresenter, ScrollView};
pub use settings::SiteConfig;
pub use theme::{Theme, ThemePresenter, ThemeView};

/// Page behavior constants
pub mod consts {
    /// Delay before the first title rotation (lets the typing animation finish), ms
    pub const TITLE_START_DELAY_MS: u32 = 3500;
    /// Period between title rotations, ms
    pub const TITLE_PERIOD_MS: u32 = 4000;
    /// Fade-out duration before the title text is swapped, ms
    pub const TITLE_FADE_MS: u32 = 500;

    /// Scroll offset past which the header becomes sticky
    pub const STICKY_HEADER_OFFSET: f64 = 50.0;
    /// Scroll offset past which the scroll-to-top button shows
    pub const SCROLL_TOP_OFFSET: f64 = 300.0;

    /// Fraction of an element that must be visible before it is revealed
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    /// Observer root margin for reveal-on-scroll
    pub const REVEAL_ROOT_MARGIN: &str = "0px";

    /// LocalStorage key for the theme preference
    pub const THEME_STORAGE_KEY: &str = "theme";
    /// Document attribute carrying the active theme
    pub const THEME_ATTRIBUTE: &str = "data-theme";

    /// CSS classes toggled by the page
    pub const CLASS_OPEN: &str = "open";
    pub const CLASS_STICKY: &str = "sticky";
    pub const CLASS_VISIBLE: &str = "visible";
}
