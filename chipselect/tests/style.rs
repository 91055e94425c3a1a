use std::time::Duration;

use chipselect::{
    Border, Color, Easing, Edges, Error, MultiSelectConfig, MultiSelectStyles, Rect, Rgb, Style,
    TextAlign, TextStyle, Theme,
};

// =============================================================================
// Style Merge
// =============================================================================

#[test]
fn test_merge_override_wins_per_field() {
    let base = Style::new()
        .background(Color::var("surface"))
        .foreground(Color::var("foreground"))
        .bold();
    let over = Style::new().foreground(Color::rgb(255, 0, 0));

    let merged = base.merge(&over);
    assert_eq!(merged.foreground, Some(Color::rgb(255, 0, 0)));
    assert_eq!(merged.background, Some(Color::var("surface")));
    assert_eq!(merged.bold, Some(true));
}

#[test]
fn test_merge_with_empty_is_identity() {
    let base = Style::new().border(Border::Single).padding(Edges::all(1));
    assert_eq!(base.merge(&Style::new()), base);
    assert_eq!(Style::new().merge(&base), base);
}

#[test]
fn test_merge_can_turn_attribute_off() {
    let base = Style::new().bold();
    let over = Style {
        bold: Some(false),
        ..Style::default()
    };
    assert_eq!(base.merge(&over).bold, Some(false));
}

#[test]
fn test_cascade_last_wins() {
    let a = Style::new().foreground(Color::var("muted"));
    let b = Style::new().foreground(Color::var("primary")).italic();
    let c = Style::new().background(Color::var("surface"));

    let merged = Style::cascade([&a, &b, &c]);
    assert_eq!(merged.foreground, Some(Color::var("primary")));
    assert_eq!(merged.background, Some(Color::var("surface")));
    assert_eq!(merged.italic, Some(true));
}

#[test]
fn test_text_style_inherits_unset_attributes() {
    let inherited = TextStyle::new().bold();
    let resolved = Style::new().italic().text_style(inherited);
    assert!(resolved.bold);
    assert!(resolved.italic);
    assert!(!resolved.underline);
}

#[test]
fn test_content_rect_removes_border_and_padding() {
    let style = Style::new()
        .border(Border::Rounded)
        .padding(Edges::horizontal(1));
    assert_eq!(style.chrome(), (4, 2));
    assert_eq!(
        style.content_rect(Rect::new(0, 0, 20, 3)),
        Rect::new(2, 1, 16, 1)
    );
}

// =============================================================================
// Widget Style Slots
// =============================================================================

#[test]
fn test_styles_merge_is_slot_wise() {
    let defaults = MultiSelectStyles::defaults();
    let overrides = MultiSelectStyles {
        dropdown: Style::new().background(Color::rgb(10, 20, 30)),
        ..MultiSelectStyles::default()
    };

    let merged = defaults.merge(&overrides);
    assert_eq!(merged.dropdown.background, Some(Color::rgb(10, 20, 30)));
    assert_eq!(merged.input, defaults.input);
    assert_eq!(merged.label, defaults.label);
}

#[test]
fn test_config_style_setters_land_in_slots() {
    let config = MultiSelectConfig::new()
        .input_style(Style::new().border(Border::Double))
        .label_style(Style::new().underline());
    let resolved = config.resolved_styles();

    assert_eq!(resolved.input.border, Some(Border::Double));
    // Untouched default fields of the slot survive.
    assert_eq!(resolved.input.border_color, Some(Color::var("border")));
    assert_eq!(resolved.label.underline, Some(true));
    assert_eq!(resolved.label.bold, Some(true));
}

// =============================================================================
// Config Defaults
// =============================================================================

#[test]
fn test_config_defaults() {
    let config = MultiSelectConfig::default();
    assert_eq!(config.menu_height, 200.0);
    assert_eq!(config.label, "");
    assert!(config.label_shown);
    assert_eq!(config.text_align, TextAlign::Center);
    assert_eq!(config.remove_icon_color, None);
    assert_eq!(config.placeholder, "Select...");
    assert_eq!(config.animation_duration, Duration::from_millis(500));
    assert_eq!(config.easing, Easing::EaseInOut);
    assert_eq!(config.units_per_row, 20.0);
    assert!(!config.reduced_motion);
    assert_eq!(config.styles, MultiSelectStyles::default());
}

#[test]
fn test_label_hidden_when_empty_or_disabled() {
    assert!(!MultiSelectConfig::new().shows_label());
    assert!(MultiSelectConfig::new().label("Fruit").shows_label());
    assert!(!MultiSelectConfig::new()
        .label("Fruit")
        .label_shown(false)
        .shows_label());
}

#[test]
fn test_icon_color_defaults_to_danger() {
    assert_eq!(MultiSelectConfig::new().icon_color(), Color::var("danger"));
    assert_eq!(
        MultiSelectConfig::new()
            .remove_icon_color(Color::rgb(1, 2, 3))
            .icon_color(),
        Color::rgb(1, 2, 3)
    );
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_parse_text_align() {
    assert_eq!("left".parse::<TextAlign>().unwrap(), TextAlign::Left);
    assert_eq!("Center".parse::<TextAlign>().unwrap(), TextAlign::Center);
    assert_eq!(" right ".parse::<TextAlign>().unwrap(), TextAlign::Right);
    assert_eq!(TextAlign::Right.to_string(), "right");
}

#[test]
fn test_parse_text_align_rejects_unknown() {
    let err = "justify".parse::<TextAlign>().unwrap_err();
    assert!(matches!(err, Error::InvalidTextAlign(ref s) if s == "justify"));
}

#[test]
fn test_parse_hex_colors() {
    assert_eq!("#ff0000".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
    assert_eq!("#0f8".parse::<Color>().unwrap(), Color::rgb(0, 255, 136));
}

#[test]
fn test_parse_functional_colors() {
    assert_eq!(
        "rgb(10, 20, 30)".parse::<Color>().unwrap(),
        Color::rgb(10, 20, 30)
    );
    assert_eq!(
        "oklch(0.5, 0.1, 200)".parse::<Color>().unwrap(),
        Color::oklch(0.5, 0.1, 200.0)
    );
}

#[test]
fn test_parse_theme_name() {
    assert_eq!("danger".parse::<Color>().unwrap(), Color::var("danger"));
}

#[test]
fn test_parse_color_rejects_garbage() {
    for input in ["#12", "#gggggg", "rgb(1, 2)", "rgb(300, 0, 0)", "12abc", ""] {
        let err = input.parse::<Color>().unwrap_err();
        assert!(matches!(err, Error::InvalidColor(_)), "accepted {input:?}");
    }
}

#[test]
fn test_color_display_round_trips_hex() {
    assert_eq!(Color::rgb(255, 0, 136).to_string(), "#ff0088");
}

#[test]
fn test_error_messages() {
    let err = Error::InvalidColor("nope!".to_string());
    assert!(err.to_string().contains("nope!"));
}

// =============================================================================
// Theme Resolution
// =============================================================================

#[test]
fn test_theme_resolves_concrete_colors_directly() {
    let theme = Theme::default();
    assert_eq!(theme.resolve(&Color::rgb(1, 2, 3)), Rgb::new(1, 2, 3));
}

#[test]
fn test_theme_resolves_variables() {
    let theme = Theme::default();
    assert_eq!(
        theme.resolve(&Color::var("danger")),
        theme.resolve(&theme.danger)
    );
}

#[test]
fn test_theme_unknown_variable_falls_back_to_foreground() {
    let theme = Theme::default();
    assert_eq!(
        theme.resolve(&Color::var("no-such-color")),
        theme.resolve(&theme.foreground)
    );
}

#[test]
fn test_oklch_black_and_white() {
    assert_eq!(Color::oklch(0.0, 0.0, 0.0).to_rgb(), Some(Rgb::new(0, 0, 0)));
    let white = Color::oklch(1.0, 0.0, 0.0).to_rgb().unwrap();
    assert!(white.r >= 250 && white.g >= 250 && white.b >= 250);
}
