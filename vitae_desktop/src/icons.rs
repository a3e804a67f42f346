use iced::widget::Text;
use iced_fonts::bootstrap;
use vitae_core::content::ContactKind;

/// Bootstrap glyph for a section's configured icon name.
pub fn section_icon<'a>(name: &str) -> Text<'a> {
    match name {
        "person" => bootstrap::person(),
        "briefcase" => bootstrap::briefcase(),
        "mortarboard" => bootstrap::mortarboard(),
        "tools" => bootstrap::tools(),
        "award" => bootstrap::award(),
        "info_circle" => bootstrap::info_circle(),
        "translate" => bootstrap::translate(),
        "star" => bootstrap::star(),
        _ => bootstrap::circle(),
    }
}

pub fn contact_icon<'a>(kind: ContactKind) -> Text<'a> {
    match kind {
        ContactKind::Email => bootstrap::envelope(),
        ContactKind::Website => bootstrap::globe(),
        ContactKind::LinkedIn => bootstrap::linkedin(),
        ContactKind::GitHub => bootstrap::github(),
    }
}

pub fn contact_label(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "Correo",
        ContactKind::Website => "Sitio web",
        ContactKind::LinkedIn => "LinkedIn",
        ContactKind::GitHub => "GitHub",
    }
}
