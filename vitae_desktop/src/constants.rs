// Animation timing
pub const TICK_INTERVAL_MS: u64 = 16;
pub const SPINNER_SPEED: f32 = 0.004;

// Window
pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

// Page geometry. Every block below is laid out at a fixed height so the
// scroll spy and the reveal tracker see the same boxes that get drawn.
pub const NAV_BAR_HEIGHT: f32 = 64.0;
pub const PAGE_PADDING: f32 = 24.0;
pub const CONTENT_MAX_WIDTH: f32 = 820.0;
pub const SECTION_HEADER_HEIGHT: f32 = 56.0;
pub const SECTION_GAP: f32 = 16.0;
pub const SECTION_BODY_PADDING: f32 = 16.0;
pub const CHILD_SPACING: f32 = 12.0;
pub const CATEGORY_LABEL_HEIGHT: f32 = 28.0;

// Child block heights per section kind
pub const PROFILE_CARD_HEIGHT: f32 = 220.0;
pub const CONTACT_ROW_HEIGHT: f32 = 44.0;
pub const EXPERIENCE_CARD_HEIGHT: f32 = 168.0;
pub const EDUCATION_CARD_HEIGHT: f32 = 104.0;
pub const SKILL_ROW_HEIGHT: f32 = 40.0;
pub const CERTIFICATION_CARD_HEIGHT: f32 = 92.0;
pub const ADDITIONAL_ROW_HEIGHT: f32 = 48.0;

// Reveal offsets
pub const REVEAL_SHIFT: f32 = 24.0;
pub const ZOOM_INSET: f32 = 10.0;

// UI Dimensions
pub const MENU_BUTTON_SIZE: f32 = 44.0;
pub const MOBILE_MENU_ROW_HEIGHT: f32 = 44.0;
pub const AVATAR_SIZE: f32 = 96.0;
pub const BUTTON_BORDER_RADIUS: f32 = 6.0;
pub const CARD_BORDER_RADIUS: f32 = 16.0;
pub const LOADER_SIZE: f32 = 48.0;
pub const TILT_PERSPECTIVE: f32 = 900.0;
