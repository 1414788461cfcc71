use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::{palette::TextInputPalette, Theme};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

// The form never disables its inputs, so a single appearance covers every
// status; validity only changes the outline.
pub fn primary(theme: &Theme, _status: Status) -> Style {
    text_input(&theme.colors.text_inputs.primary)
}

pub fn invalid(theme: &Theme, _status: Status) -> Style {
    text_input(&theme.colors.text_inputs.invalid)
}

fn text_input(c: &TextInputPalette) -> Style {
    Style {
        background: Background::Color(c.background),
        border: if let Some(color) = c.border {
            Border {
                radius: 25.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border::default()
        },
        icon: c.icon,
        placeholder: c.placeholder,
        value: c.value,
        selection: c.selection,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color;

    #[test]
    fn validity_only_changes_the_outline() {
        let theme = <Theme as Default>::default();
        for status in [Status::Active, Status::Hovered, Status::Disabled] {
            assert_eq!(primary(&theme, status).border.color, color::GREY_7);
            assert_eq!(invalid(&theme, status).border.color, color::RED);
            assert_eq!(
                primary(&theme, status).value,
                invalid(&theme, status).value
            );
        }
    }
}
