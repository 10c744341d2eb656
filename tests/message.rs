use chat_card_notify::delivery::render_message;
use chat_card_notify::{Config, new_message};
use serde_json::json;

fn to_json(config: &Config, build_succeeded: bool) -> serde_json::Value {
    let message = new_message(config, build_succeeded).unwrap();
    serde_json::to_value(&message).unwrap()
}

#[test]
fn header_text_and_button_card() {
    let config = Config {
        webhook_url: "https://chat.example.org/hook".into(),
        title: "T".into(),
        subtitle: "S".into(),
        image_url: "I".into(),
        image_style: "square".into(),
        text: "X".into(),
        buttons: "text|L|https://u".into(),
        ..Default::default()
    };

    assert_eq!(
        to_json(&config, true),
        json!({
            "text": "T",
            "cards": [{
                "header": {"title": "T", "subtitle": "S", "imageUrl": "I", "imageStyle": "IMAGE"},
                "sections": [
                    {"widgets": [{"textParagraph": {"text": "X"}}]},
                    {"widgets": [{"buttons": [
                        {"textButton": {"text": "L", "onClick": {"openLink": {"url": "https://u"}}}}
                    ]}]}
                ]
            }]
        })
    );
}

#[test]
fn failed_build_card_with_key_values() {
    let config = Config {
        webhook_url: "https://chat.example.org/hook".into(),
        title: "Build passed".into(),
        title_on_error: "Build *failed*".into(),
        image_style: "square".into(),
        image_style_on_error: "circular".into(),
        image_url: "https://example.org/ok.png".into(),
        image_url_on_error: "https://example.org/fail.png".into(),
        key_value_on_error: r#"[
            {"topLabel": "Workflow", "content": "primary", "icon": "DESCRIPTION"},
            {"content": "see logs", "multiline": true,
             "button": {"icon": "BOOKMARK", "onClick": "https://ci.example.org/build/1"}}
        ]"#
        .into(),
        buttons_on_error: "builtin-icon|EMAIL|mailto:team@example.org\ncustom-icon|https://example.org/i.png|https://ci.example.org".into(),
        convert_simple_to_advanced_format: true,
        ..Default::default()
    };

    assert_eq!(
        to_json(&config, false),
        json!({
            "text": "Build *failed*",
            "cards": [{
                "header": {
                    "title": "Build <b>failed</b>",
                    "imageUrl": "https://example.org/fail.png",
                    "imageStyle": "AVATAR"
                },
                "sections": [
                    {"widgets": [
                        {"keyValue": {
                            "topLabel": "Workflow",
                            "content": "primary",
                            "contentMultiline": "false",
                            "icon": "DESCRIPTION"
                        }},
                        {"keyValue": {
                            "content": "see logs",
                            "contentMultiline": "true",
                            "button": {"imageButton": {
                                "icon": "BOOKMARK",
                                "onClick": {"openLink": {"url": "https://ci.example.org/build/1"}}
                            }}
                        }}
                    ]},
                    {"widgets": [{"buttons": [
                        {"imageButton": {"icon": "EMAIL", "onClick": {"openLink": {"url": "mailto:team@example.org"}}}},
                        {"imageButton": {"iconUrl": "https://example.org/i.png", "onClick": {"openLink": {"url": "https://ci.example.org"}}}}
                    ]}]}
                ]
            }]
        })
    );
}

#[test]
fn card_without_content_fields_has_no_sections() {
    let config = Config {
        title: "Only a title".into(),
        ..Default::default()
    };

    assert_eq!(
        to_json(&config, true),
        json!({
            "text": "Only a title",
            "cards": [{"header": {"title": "Only a title"}, "sections": []}]
        })
    );
}

#[test]
fn rendered_payload_is_valid_json() {
    let config = Config {
        text: "hello".into(),
        ..Default::default()
    };
    let message = new_message(&config, true).unwrap();
    let rendered = render_message(&message).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed["text"], "hello");
}
