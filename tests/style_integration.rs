// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use iced_flix::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_flix::ui::styles::{button, container};

    #[test]
    fn all_button_styles_are_callable() {
        let theme = Theme::Dark;
        for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
            let _ = button::play(&theme, status);
            let _ = button::secondary(&theme, status);
            let _ = button::round(&theme, status);
            let _ = button::row_arrow(&theme, status);
            let _ = button::link(&theme, status);
            let _ = button::dot(false)(&theme, status);
        }
    }

    #[test]
    fn all_container_styles_are_callable() {
        let theme = Theme::Dark;
        let _ = container::page(&theme);
        let _ = container::hero_scrim(&theme);
        let _ = container::modal_panel(&theme);
        let _ = container::placeholder(&theme);
        let _ = container::card_overlay(&theme);
        let _ = container::badge(&theme);
        let _ = container::avatar(&theme);
        let _ = container::menu_panel(&theme);
    }

    #[test]
    fn design_tokens_are_coherent() {
        assert!(palette::PAGE_900.r < palette::SURFACE_850.r);
        assert!(palette::BRAND_RED.r > palette::BRAND_RED.g);
        assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);
        assert!(spacing::XXL > spacing::XL);
        assert!(sizing::MODAL_WIDTH > sizing::CARD_WIDTH);
    }
}
