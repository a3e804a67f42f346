use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::animation::Rgba;
use crate::content::{
    AdditionalInfo, Certification, Education, Experience, Personal, SkillCategory,
};
use crate::utils::error::{ResultExt, VitaeError, VitaeResult};

/// Résumé shipped with the binary; used when no user file is present.
const BUNDLED_RESUME: &str = include_str!("../../assets/resume.toml");

/// Complete static configuration: content, feature toggles, theme and tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub personal: Personal,
    pub sections: Vec<SectionConfig>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub additional: Vec<AdditionalInfo>,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub theme: ThemeTokens,
    #[serde(default)]
    pub navigation: NavigationTuning,
    #[serde(default)]
    pub particles: ParticleTuning,
    #[serde(default)]
    pub effects: EffectTuning,
}

/// What a section renders; decides its child elements and reveal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Profile,
    Experience,
    Education,
    Skills,
    Certifications,
    Additional,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub title: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    pub order: u32,
    pub kind: SectionKind,
}

fn default_icon() -> String {
    "circle".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub particles: bool,
    pub typewriter: bool,
    pub tilt: bool,
    pub ripple: bool,
    pub shine: bool,
    pub scroll_to_top: bool,
    pub loader: bool,
    pub mobile_menu: bool,
    /// Forces the reduced-motion gate regardless of the host preference.
    pub reduced_motion: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            particles: true,
            typewriter: true,
            tilt: true,
            ripple: true,
            shine: true,
            scroll_to_top: true,
            loader: true,
            mobile_menu: true,
            reduced_motion: false,
        }
    }
}

/// Optional hex color overrides applied on top of the base palette.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTokens {
    pub mode: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<String>,
}

impl ThemeTokens {
    /// Parsed accent override; an unparsable value is logged and ignored.
    pub fn accent_color(&self) -> Option<Rgba> {
        parse_token("theme.accent", self.accent.as_deref())
    }

    pub fn background_color(&self) -> Option<Rgba> {
        parse_token("theme.background", self.background.as_deref())
    }

    pub fn surface_color(&self) -> Option<Rgba> {
        parse_token("theme.surface", self.surface.as_deref())
    }

    pub fn text_color(&self) -> Option<Rgba> {
        parse_token("theme.text", self.text.as_deref())
    }
}

fn parse_token(name: &str, value: Option<&str>) -> Option<Rgba> {
    let value = value?;
    let parsed = Rgba::from_hex(value);
    if parsed.is_none() {
        warn!(token = name, value, "ignoring unparsable theme color");
    }
    parsed
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationTuning {
    /// Section shown when the fragment is empty or unknown; first by order when unset.
    pub default_section: Option<String>,
    /// Viewport width in pixels at and below which the mobile menu is used.
    pub breakpoint: f32,
    pub scroll_lookahead: f32,
    pub scroll_throttle_ms: u64,
    pub resize_debounce_ms: u64,
    pub stagger_delay_ms: u64,
    pub entry_duration_ms: u64,
    pub scroll_spy_cooldown_ms: u64,
    pub reveal_threshold: f32,
    pub scroll_top_threshold: f32,
    pub announce_prefix: String,
}

impl Default for NavigationTuning {
    fn default() -> Self {
        Self {
            default_section: None,
            breakpoint: 768.0,
            scroll_lookahead: 100.0,
            scroll_throttle_ms: 100,
            resize_debounce_ms: 250,
            stagger_delay_ms: 100,
            entry_duration_ms: 600,
            scroll_spy_cooldown_ms: 800,
            reveal_threshold: 0.1,
            scroll_top_threshold: 300.0,
            announce_prefix: "Sección activa:".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    pub cap: usize,
    /// Viewport width divided by this gives the uncapped particle count.
    pub divisor: f32,
    pub initial_speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    pub pointer_radius: f32,
    pub attraction: f32,
    pub max_speed: f32,
    pub link_distance: f32,
    pub link_opacity: f32,
    pub link_width: f32,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            cap: 80,
            divisor: 15.0,
            initial_speed: 0.5,
            radius_min: 1.0,
            radius_max: 3.0,
            opacity_min: 0.1,
            opacity_max: 0.5,
            pointer_radius: 150.0,
            attraction: 0.03,
            max_speed: 2.0,
            link_distance: 100.0,
            link_opacity: 0.2,
            link_width: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectTuning {
    pub typewriter_char_ms: u64,
    pub ripple_ms: u64,
    pub shine_ms: u64,
    pub tilt_max_deg: f32,
    pub skill_fill_ms: u64,
    pub loader_ms: u64,
}

impl Default for EffectTuning {
    fn default() -> Self {
        Self {
            typewriter_char_ms: 80,
            ripple_ms: 600,
            shine_ms: 700,
            tilt_max_deg: 10.0,
            skill_fill_ms: 1200,
            loader_ms: 800,
        }
    }
}

impl Config {
    /// Parses and validates a résumé from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, VitaeError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> VitaeResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = fs::read_to_string(path).with_file_context(&display)?;
        Self::from_toml_str(&content).with_config_context(&display)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> VitaeResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The résumé compiled into the binary.
    pub fn bundled() -> VitaeResult<Self> {
        Self::from_toml_str(BUNDLED_RESUME).with_config_context("bundled resume")
    }

    pub fn get_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".vitae")
            .join("resume.toml")
    }

    /// Loads the user's résumé when present and valid, otherwise the bundled one.
    pub fn load_or_default() -> VitaeResult<Self> {
        let config_path = Self::get_config_path();
        if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => {
                    info!(path = %config_path.display(), "loaded résumé");
                    return Ok(config);
                }
                Err(e) => warn!("falling back to bundled résumé: {:#}", e),
            }
        }
        Self::bundled()
    }

    /// Checks the structural invariants the navigation controller relies on.
    pub fn validate(&self) -> Result<(), VitaeError> {
        if self.sections.is_empty() {
            return Err(VitaeError::EmptySections);
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(VitaeError::Config("section id must not be empty".into()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(VitaeError::DuplicateSection(section.id.clone()));
            }
        }

        if let Some(default) = &self.navigation.default_section {
            if !seen.contains(default.as_str()) {
                return Err(VitaeError::UnknownDefaultSection(default.clone()));
            }
        }

        let finite = [
            ("particles.divisor", self.particles.divisor),
            ("particles.initial_speed", self.particles.initial_speed),
            ("particles.radius_min", self.particles.radius_min),
            ("particles.radius_max", self.particles.radius_max),
            ("particles.opacity_min", self.particles.opacity_min),
            ("particles.opacity_max", self.particles.opacity_max),
            ("particles.pointer_radius", self.particles.pointer_radius),
            ("particles.attraction", self.particles.attraction),
            ("particles.max_speed", self.particles.max_speed),
            ("particles.link_distance", self.particles.link_distance),
            ("particles.link_opacity", self.particles.link_opacity),
            ("particles.link_width", self.particles.link_width),
            ("navigation.breakpoint", self.navigation.breakpoint),
            ("navigation.reveal_threshold", self.navigation.reveal_threshold),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(VitaeError::NonFinite { field });
            }
        }

        let positive = [
            ("particles.divisor", self.particles.divisor),
            ("particles.max_speed", self.particles.max_speed),
            ("particles.pointer_radius", self.particles.pointer_radius),
            ("particles.link_distance", self.particles.link_distance),
            ("navigation.breakpoint", self.navigation.breakpoint),
            ("navigation.reveal_threshold", self.navigation.reveal_threshold),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(VitaeError::NonPositive { field });
            }
        }
        if self.particles.radius_min > self.particles.radius_max {
            return Err(VitaeError::Config(
                "particles.radius_min exceeds particles.radius_max".into(),
            ));
        }
        if self.particles.opacity_min > self.particles.opacity_max {
            return Err(VitaeError::Config(
                "particles.opacity_min exceeds particles.opacity_max".into(),
            ));
        }
        Ok(())
    }

    /// Sections sorted by their configured order.
    pub fn ordered_sections(&self) -> Vec<&SectionConfig> {
        let mut sections: Vec<&SectionConfig> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    /// Identifier of the section shown when no fragment applies.
    pub fn default_section_id(&self) -> &str {
        self.navigation
            .default_section
            .as_deref()
            .or_else(|| {
                self.sections
                    .iter()
                    .min_by_key(|s| s.order)
                    .map(|s| s.id.as_str())
            })
            .unwrap_or_default()
    }

    /// Number of animated child elements a section of this kind renders.
    pub fn child_count(&self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::Profile => 1 + self.personal.contact_links().len(),
            SectionKind::Experience => self.experience.len(),
            SectionKind::Education => self.education.len(),
            SectionKind::Skills => self.skills.iter().map(|c| c.items.len()).sum(),
            SectionKind::Certifications => self.certifications.len(),
            SectionKind::Additional => self.additional.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = r#"
        [personal]
        name = "Test Person"
        title = "Engineer"

        [[sections]]
        id = "perfil"
        title = "Perfil"
        order = 0
        kind = "profile"

        [[sections]]
        id = "experiencia"
        title = "Experiencia"
        order = 1
        kind = "experience"
    "#;

    #[test]
    fn bundled_resume_is_valid() {
        let config = Config::bundled().unwrap();
        assert!(config.sections.len() >= 5);
        assert!(config.sections.iter().any(|s| s.id == "educacion"));
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = Config::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.default_section_id(), "perfil");
        assert_eq!(config.particles.cap, 80);
        assert_eq!(config.navigation.breakpoint, 768.0);
        assert!(config.features.particles);
        assert!(!config.features.reduced_motion);
    }

    #[test]
    fn rejects_duplicate_sections() {
        let duplicated = format!(
            "{}\n[[sections]]\nid = \"perfil\"\ntitle = \"Otra\"\norder = 2\nkind = \"skills\"\n",
            MINIMAL
        );
        let err = toml::from_str::<Config>(&duplicated)
            .unwrap()
            .validate()
            .unwrap_err();
        assert_matches!(err, VitaeError::DuplicateSection(id) if id == "perfil");
    }

    #[test]
    fn rejects_unknown_default_section() {
        let mut config: Config = toml::from_str(MINIMAL).unwrap();
        config.navigation.default_section = Some("nope".into());
        assert_matches!(config.validate(), Err(VitaeError::UnknownDefaultSection(_)));
    }

    #[test]
    fn rejects_non_positive_tuning() {
        let mut config: Config = toml::from_str(MINIMAL).unwrap();
        config.particles.max_speed = 0.0;
        assert_matches!(
            config.validate(),
            Err(VitaeError::NonPositive { field: "particles.max_speed" })
        );
    }

    #[test]
    fn rejects_non_finite_particle_ranges() {
        let mut config: Config = toml::from_str(MINIMAL).unwrap();
        config.particles.radius_max = f32::INFINITY;
        assert_matches!(
            config.validate(),
            Err(VitaeError::NonFinite { field: "particles.radius_max" })
        );

        let mut config: Config = toml::from_str(MINIMAL).unwrap();
        config.particles.initial_speed = f32::NAN;
        assert_matches!(
            config.validate(),
            Err(VitaeError::NonFinite { field: "particles.initial_speed" })
        );

        let mut config: Config = toml::from_str(MINIMAL).unwrap();
        config.particles.opacity_min = f32::NEG_INFINITY;
        assert_matches!(
            config.validate(),
            Err(VitaeError::NonFinite { field: "particles.opacity_min" })
        );
    }

    #[test]
    fn ordered_sections_follow_order_field() {
        let mut config: Config = toml::from_str(MINIMAL).unwrap();
        config.sections[0].order = 5;
        let ids: Vec<&str> = config.ordered_sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["experiencia", "perfil"]);
    }

    #[test]
    fn invalid_theme_token_is_ignored() {
        let tokens = ThemeTokens {
            accent: Some("not-a-color".into()),
            text: Some("#ffffff".into()),
            ..Default::default()
        };
        assert_eq!(tokens.accent_color(), None);
        assert_eq!(tokens.text_color(), Some(Rgba::WHITE));
    }
}
