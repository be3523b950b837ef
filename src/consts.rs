//! Shared constants for the portfolio client.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query for the OS/browser dark-mode signal.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Media query for the reduced-motion accessibility signal.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Navigation ──────────────────────────────────────────────────

/// Scroll offset past which the navbar switches to its `scrolled` style.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// A section counts as current this many pixels before its top edge.
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 100.0;

/// Space left above an anchor target so the fixed header does not cover it.
pub const ANCHOR_HEADER_CLEARANCE_PX: f64 = 80.0;

/// Viewports narrower than this skip scroll-reveal animations.
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

// ── Reveal triggers ─────────────────────────────────────────────

/// Delay before a skill bar starts its width transition.
pub const SKILL_BAR_DELAY_MS: u32 = 200;

/// Fraction of a skill bar that must be visible to trigger it.
pub const SKILL_BAR_THRESHOLD: f64 = 0.5;

/// Bottom bias so bars trigger a little after entering the viewport.
pub const SKILL_BAR_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Contact form ────────────────────────────────────────────────

/// How long the success banner stays visible after a valid submission.
pub const SUCCESS_BANNER_HIDE_MS: u32 = 5_000;

pub const BORDER_VALID: &str = "#10b981";
pub const BORDER_INVALID: &str = "#ef4444";

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";

// ── Misc ────────────────────────────────────────────────────────

pub const CV_UNAVAILABLE_MESSAGE: &str = "CV download feature coming soon. Please contact me directly for my CV.";

/// Inline SVG used when the profile photo fails to load.
pub const PROFILE_PLACEHOLDER_SRC: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"400\"%3E%3Crect fill=\"%23e2e8f0\" width=\"400\" height=\"400\"/%3E%3Ctext fill=\"%2394a3b8\" font-family=\"sans-serif\" font-size=\"48\" dy=\"10.5\" font-weight=\"bold\" x=\"50%25\" y=\"50%25\" text-anchor=\"middle\"%3EIA%3C/text%3E%3C/svg%3E";
