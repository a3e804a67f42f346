mod button;
mod container;

pub use button::{contact_button_style, icon_button_style, nav_link_style, scroll_top_button_style};
pub use container::{
    avatar_style, card_style, nav_bar_style, page_style, section_header_style, skill_bar_style,
    status_style, transparent_style,
};
