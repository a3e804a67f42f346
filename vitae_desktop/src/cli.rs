use std::path::PathBuf;

use clap::Parser;

use crate::theme::ThemeMode;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "vitae")]
#[command(about = "Animated single-page résumé viewer", long_about = None)]
pub struct Args {
    /// Résumé file to show instead of ~/.vitae/resume.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Section to open, e.g. `experiencia`
    #[arg(short, long, conflicts_with = "fragment")]
    pub section: Option<String>,

    /// Initial location fragment, e.g. `#educacion`
    pub fragment: Option<String>,

    /// Disable decorative motion (also VITAE_REDUCED_MOTION=1)
    #[arg(long)]
    pub reduced_motion: bool,

    /// Base palette: light, dark or black
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ThemeMode>,
}

impl Args {
    /// The fragment the page loads with, `#` included.
    pub fn initial_fragment(&self) -> Option<String> {
        match (&self.section, &self.fragment) {
            (Some(section), _) => Some(format!("#{}", section.trim_start_matches('#'))),
            (None, Some(fragment)) if fragment.starts_with('#') => Some(fragment.clone()),
            (None, Some(fragment)) => Some(format!("#{}", fragment)),
            (None, None) => None,
        }
    }
}

fn parse_theme(value: &str) -> Result<ThemeMode, String> {
    ThemeMode::from_name(value).ok_or_else(|| format!("unknown theme '{}' (light, dark, black)", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn section_flag_becomes_fragment() {
        let args = Args::parse_from(["vitae", "--section", "experiencia"]);
        assert_eq!(args.initial_fragment().as_deref(), Some("#experiencia"));
    }

    #[test]
    fn positional_fragment_accepts_both_forms() {
        let args = Args::parse_from(["vitae", "#educacion"]);
        assert_eq!(args.initial_fragment().as_deref(), Some("#educacion"));
        let args = Args::parse_from(["vitae", "educacion"]);
        assert_eq!(args.initial_fragment().as_deref(), Some("#educacion"));
    }

    #[test]
    fn theme_and_motion_flags() {
        let args = Args::parse_from(["vitae", "--theme", "Black", "--reduced-motion"]);
        assert_eq!(args.theme, Some(ThemeMode::Black));
        assert!(args.reduced_motion);
        assert!(Args::try_parse_from(["vitae", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn no_location_by_default() {
        let args = Args::parse_from(["vitae"]);
        assert_eq!(args.initial_fragment(), None);
        assert_eq!(args.config, None);
    }
}
