pub mod home;
pub mod landing;
pub mod signup;

use egui_taffy::taffy;
use egui_taffy::taffy::prelude::{auto, length, percent};

/// Centered page column shared by every screen.
pub(crate) fn page_style() -> taffy::Style {
    taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(12.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        max_size: taffy::Size {
            width: length(420.0),
            height: auto(),
        },
        ..Default::default()
    }
}
