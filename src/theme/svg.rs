use iced::widget::svg::{Catalog, Status, Style, StyleFn};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(|_theme, _status| Style { color: None })
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

/// Recolors a monochrome svg with the given color. Logos keep their own
/// colors by not setting any style.
pub fn tint(color: iced::Color) -> Box<dyn Fn(&Theme, Status) -> Style> {
    Box::new(move |_theme: &Theme, _status: Status| Style { color: Some(color) })
}
