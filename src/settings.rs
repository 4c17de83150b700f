//! Page configuration
//!
//! Element selectors, the hero title list, and the contact notification texts.
//! Defaults match the shipped page; a page can override any of them with a JSON
//! block in `<script type="application/json" id="folio-config">`.

use serde::{Deserialize, Serialize};

/// Placeholder replaced with the sender's name in the success message
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Where each behavior finds its elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    // === Theme ===
    /// Id of the theme toggle button
    pub theme_toggle: String,
    /// Sun icon, searched inside the theme toggle
    pub sun_icon: String,
    /// Moon icon, searched inside the theme toggle
    pub moon_icon: String,

    // === Navigation ===
    /// Id of the mobile menu button
    pub menu_toggle: String,
    /// Container of the nav links
    pub nav_links: String,
    /// Menu glyph, searched inside the menu button
    pub menu_icon: String,
    /// Close glyph, searched inside the menu button
    pub close_icon: String,

    // === Hero / scroll ===
    /// Id of the rotating title element
    pub dynamic_title: String,
    /// Class selector for reveal-on-scroll elements
    pub reveal: String,
    /// Id of the page header
    pub header: String,
    /// Id of the scroll-to-top button
    pub scroll_top: String,

    // === Contact ===
    /// Id of the contact form
    pub contact_form: String,
    /// `name` attribute of the sender's name field
    pub name_field: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: "theme-toggle".to_string(),
            sun_icon: ".sun-icon".to_string(),
            moon_icon: ".moon-icon".to_string(),

            menu_toggle: "menu-toggle".to_string(),
            nav_links: ".nav-links".to_string(),
            menu_icon: ".menu-icon".to_string(),
            close_icon: ".close-icon".to_string(),

            dynamic_title: "dynamic-title".to_string(),
            reveal: ".animate-scroll-reveal".to_string(),
            header: "header".to_string(),
            scroll_top: "scroll-to-top".to_string(),

            contact_form: "contact-form".to_string(),
            name_field: "name".to_string(),
        }
    }
}

/// Page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub selectors: Selectors,
    /// Hero titles, in rotation order
    pub titles: Vec<String>,
    /// Contact success text; `{name}` is replaced with the sender's name
    pub success_message: String,
    /// Contact failure text
    pub failure_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            titles: [
                "Front-End Developer",
                "AI Enthusiast",
                "AI Agent Builder",
                "Web Developer",
                "Canva Expert",
                "Generative AI Explorer",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            success_message: "Transmission Success! Thank you for reaching out, {name}! \
                Your message has been sent to the command center. \
                Raghav will connect with you soon."
                .to_string(),
            failure_message: "CRITICAL ERROR: Failed to initiate transmission. \
                Please check system logs and try again later."
                .to_string(),
        }
    }
}

impl SiteConfig {
    /// Element id of the inline config block
    pub const CONFIG_ELEMENT_ID: &'static str = "folio-config";

    /// Parse an override block. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Success message for a given sender
    pub fn success_notice(&self, name: &str) -> String {
        self.success_message.replace(NAME_PLACEHOLDER, name)
    }

    /// Load overrides from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded page config overrides");
                    return config;
                }
                Err(e) => log::warn!("Ignoring malformed page config: {}", e),
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
