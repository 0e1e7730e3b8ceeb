//! Argument parsers for the built-in tags.
//!
//! Every parser returns `None` for arguments it cannot accept; the caller then
//! keeps the tag as literal text. Arguments that are themselves markup are
//! parsed through the context and compacted.

use crate::markup::color::parse_text_color;
use crate::markup::component::color::parse_hex_digits;
use crate::markup::component::{
    compact_child, BlockPos, ClickEvent, Component, Content, DataComponentValue, HeadProfile,
    HoverEvent, Key, NbtSource, ObjectContents, ShadowColor, TextColor, Uuid,
};
use crate::markup::resolver::TagContext;

fn deserialize_child(context: &TagContext<'_>, markup: &str) -> Component {
    compact_child(context.deserialize(markup))
}

/// `<click:action:value>`
pub fn parse_click(args: &[String]) -> Option<ClickEvent> {
    let [action, value, ..] = args else {
        return None;
    };
    let value = value.clone();
    match action.to_ascii_lowercase().as_str() {
        "open_url" => Some(ClickEvent::OpenUrl(value)),
        "open_file" => Some(ClickEvent::OpenFile(value)),
        "run_command" => Some(ClickEvent::RunCommand(value)),
        "suggest_command" => Some(ClickEvent::SuggestCommand(value)),
        "change_page" => value.parse().ok().map(ClickEvent::ChangePage),
        "copy_to_clipboard" => Some(ClickEvent::CopyToClipboard(value)),
        _ => None,
    }
}

/// `<hover:show_text:markup>`, `<hover:show_item:item[:count[:key=value...]]>`
/// or `<hover:show_entity:type:uuid[:name]>`.
pub fn parse_hover(args: &[String], context: &TagContext<'_>) -> Option<HoverEvent> {
    let [action, first, rest @ ..] = args else {
        return None;
    };
    match action.to_ascii_lowercase().as_str() {
        "show_text" => Some(HoverEvent::ShowText(deserialize_child(context, first))),
        "show_item" => {
            let item = Key::parse(first)?;
            let count = rest
                .first()
                .and_then(|count| count.parse().ok())
                .unwrap_or(1);
            let components = match rest.get(1..) {
                Some(entries) if !entries.is_empty() => parse_data_components(entries, context)?,
                _ => Vec::new(),
            };
            Some(HoverEvent::ShowItem {
                item,
                count,
                components,
            })
        }
        "show_entity" => {
            let kind = Key::parse(first)?;
            let id = Uuid::parse(rest.first()?)?;
            let name = rest.get(1).map(|name| deserialize_child(context, name));
            Some(HoverEvent::ShowEntity { kind, id, name })
        }
        _ => None,
    }
}

/// Resolves `key=value` pairs through the context's data resolver.
fn parse_data_components(
    entries: &[String],
    context: &TagContext<'_>,
) -> Option<Vec<(Key, DataComponentValue)>> {
    let Some(resolver) = context.data_resolver() else {
        log::debug!(target: "quickmm.resolver", "item data given without a data resolver");
        return None;
    };
    let mut components: Vec<(Key, DataComponentValue)> = Vec::with_capacity(entries.len());
    for entry in entries {
        let (key, value) = entry.split_once('=')?;
        if key.is_empty() || value.is_empty() {
            return None;
        }
        let key = Key::parse(key)?;
        let value = resolver.resolve(&key, value, context)?;
        match components.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => components.push((key, value)),
        }
    }
    Some(components)
}

/// `<selector:pattern[:separator]>`
pub fn parse_selector(args: &[String], context: &TagContext<'_>) -> Option<Component> {
    let pattern = args.first()?;
    let separator = args.get(1).map(|markup| deserialize_child(context, markup));
    Some(Component::selector(pattern.as_str(), separator))
}

/// `<score:name:objective>`
pub fn parse_score(args: &[String]) -> Option<Component> {
    let [name, objective, ..] = args else {
        return None;
    };
    Some(Component::score(name.as_str(), objective.as_str()))
}

/// `<key:name>`
pub fn parse_keybind(args: &[String]) -> Option<Component> {
    args.first().map(|key| Component::keybind(key.as_str()))
}

/// `<lang:key[:arg...]>`, or with a `fallback` taken from the second argument
/// for `<lang_or:key:fallback[:arg...]>`.
pub fn parse_translatable(
    args: &[String],
    fallback: Option<&str>,
    context: &TagContext<'_>,
) -> Option<Component> {
    let key = args.first()?;
    let start = if fallback.is_some() { 2 } else { 1 };
    let arguments = args
        .iter()
        .skip(start)
        .map(|markup| deserialize_child(context, markup))
        .collect();
    Some(Component::translatable(
        key.as_str(),
        fallback.map(str::to_string),
        arguments,
    ))
}

/// `<nbt:block|entity|storage:source:path[:separator][:interpret]>`
pub fn parse_nbt(args: &[String], context: &TagContext<'_>) -> Option<Component> {
    let [kind, source, path, ..] = args else {
        return None;
    };
    let mut end = args.len();
    let interpret = end > 3 && args[end - 1].eq_ignore_ascii_case("interpret");
    if interpret {
        end -= 1;
    }
    let source = match kind.to_ascii_lowercase().as_str() {
        "block" => NbtSource::Block(BlockPos::parse(source)?),
        "entity" => NbtSource::Entity(source.clone()),
        "storage" => NbtSource::Storage(Key::parse(source)?),
        _ => return None,
    };
    let separator = if end > 3 {
        Some(Box::new(deserialize_child(context, &args[3])))
    } else {
        None
    };
    Some(Component::new(Content::Nbt {
        path: path.clone(),
        interpret,
        separator,
        source,
    }))
}

/// `<sprite:sprite>` or `<sprite:atlas:sprite>`
pub fn parse_sprite(args: &[String]) -> Option<Component> {
    let contents = match args {
        [] => return None,
        [sprite] => ObjectContents::Sprite {
            atlas: None,
            sprite: Key::parse(sprite)?,
        },
        [atlas, sprite, ..] => ObjectContents::Sprite {
            atlas: Some(Key::parse(atlas)?),
            sprite: Key::parse(sprite)?,
        },
    };
    Some(Component::object(contents))
}

/// `<head:uuid|texture|name[:false]>`
///
/// A UUID selects a profile by id, anything containing `/` or `:` is a
/// texture key, and everything else is a player name.
pub fn parse_head(args: &[String]) -> Option<Component> {
    let input = args.first()?;
    let hat = !args
        .get(1)
        .is_some_and(|flag| flag.eq_ignore_ascii_case("false"));
    let profile = if let Some(id) = Uuid::parse(input) {
        HeadProfile::Id(id)
    } else if input.contains(['/', ':']) {
        HeadProfile::Texture(Key::parse(input)?)
    } else {
        HeadProfile::Name(input.clone())
    };
    Some(Component::object(ObjectContents::PlayerHead { profile, hat }))
}

/// Converts an alpha in `[0, 1]` to a byte, clamping and rounding.
pub fn clamp_shadow_alpha(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// `<shadow>`, `<shadow:alpha>`, `<shadow:color[:alpha]>`, `<shadow:#RRGGBBAA>`
/// and the disabling forms `<shadow:false>` and `<!shadow>`.
pub fn parse_shadow(args: &[String], negated: bool, default_alpha: f32) -> Option<ShadowColor> {
    if negated || args.first().is_some_and(|first| first.eq_ignore_ascii_case("false")) {
        return Some(ShadowColor::NONE);
    }
    let Some(first) = args.first() else {
        return Some(ShadowColor::from_color(
            TextColor::BLACK,
            clamp_shadow_alpha(default_alpha),
        ));
    };
    if args.len() == 1 {
        if let Ok(alpha) = first.parse::<f32>() {
            return Some(ShadowColor::from_color(TextColor::BLACK, clamp_shadow_alpha(alpha)));
        }
    }
    let alpha = args.get(1).and_then(|alpha| alpha.parse::<f32>().ok());
    let alpha = clamp_shadow_alpha(alpha.unwrap_or(default_alpha));
    if let Some(digits) = first.strip_prefix('#') {
        return parse_shadow_hex(digits, alpha);
    }
    let color = parse_text_color(first)?;
    Some(ShadowColor::from_color(color, alpha))
}

fn parse_shadow_hex(digits: &str, alpha: u8) -> Option<ShadowColor> {
    match digits.len() {
        6 => Some(ShadowColor::from_color(
            TextColor::new(parse_hex_digits(digits)?),
            alpha,
        )),
        8 => {
            let rgb = parse_hex_digits(digits.get(..6)?)?;
            let alpha = parse_hex_digits(digits.get(6..)?)?;
            Some(ShadowColor::new((alpha << 24) | rgb))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::config::ParserConfig;
    use crate::markup::resolver::{EmptyResolver, RawDataResolver};
    use rstest::rstest;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[rstest(
        input,
        expected,
        case::url(&["open_url", "https://x.y"], Some(ClickEvent::OpenUrl("https://x.y".into()))),
        case::upper_action(&["RUN_COMMAND", "/spawn"], Some(ClickEvent::RunCommand("/spawn".into()))),
        case::page(&["change_page", "3"], Some(ClickEvent::ChangePage(3))),
        case::bad_page(&["change_page", "three"], None),
        case::unknown(&["teleport", "x"], None),
        case::missing_value(&["open_url"], None)
    )]
    fn test_click(input: &[&str], expected: Option<ClickEvent>) {
        assert_eq!(parse_click(&args(input)), expected);
    }

    #[rstest(
        input,
        negated,
        expected,
        case::default_alpha(&[], false, Some(0x4000_0000)),
        case::negated(&[], true, Some(0)),
        case::disabled(&["FALSE"], false, Some(0)),
        case::alpha_only(&["0.5"], false, Some(0x8000_0000)),
        case::alpha_clamped(&["4"], false, Some(0xff00_0000)),
        case::named(&["red"], false, Some(0x40ff_5555)),
        case::named_alpha(&["red", "1"], false, Some(0xffff_5555)),
        case::hex(&["#112233"], false, Some(0x4011_2233)),
        case::hex_alpha_arg(&["#112233", "0"], false, Some(0x0011_2233)),
        case::hex_embedded_alpha(&["#11223380", "1"], false, Some(0x8011_2233)),
        case::odd_hex(&["#1122334"], false, None),
        case::unknown(&["nope"], false, None)
    )]
    fn test_shadow(input: &[&str], negated: bool, expected: Option<u32>) {
        assert_eq!(
            parse_shadow(&args(input), negated, 0.25).map(ShadowColor::argb),
            expected
        );
    }

    #[test]
    fn test_head_profiles() {
        let uuid = "f84c6a79-0a4e-45e0-879b-cd49ebd4c4e2";
        let by_id = parse_head(&args(&[uuid])).unwrap();
        assert!(matches!(
            by_id.content,
            Content::Object(ObjectContents::PlayerHead {
                profile: HeadProfile::Id(_),
                hat: true
            })
        ));
        let textured = parse_head(&args(&["entity/player/wide/steve", "false"])).unwrap();
        assert!(matches!(
            textured.content,
            Content::Object(ObjectContents::PlayerHead {
                profile: HeadProfile::Texture(_),
                hat: false
            })
        ));
        let named = parse_head(&args(&["Notch"])).unwrap();
        assert_eq!(
            named.content,
            Content::Object(ObjectContents::PlayerHead {
                profile: HeadProfile::Name("Notch".into()),
                hat: true
            })
        );
        assert!(parse_head(&args(&["Bad:Key"])).is_none());
        assert!(parse_head(&[]).is_none());
    }

    #[test]
    fn test_sprite() {
        let single = parse_sprite(&args(&["item/apple"])).unwrap();
        assert_eq!(
            single.content,
            Content::Object(ObjectContents::Sprite {
                atlas: None,
                sprite: Key::parse("minecraft:item/apple").unwrap()
            })
        );
        let with_atlas = parse_sprite(&args(&["blocks", "stone"])).unwrap();
        assert!(matches!(
            with_atlas.content,
            Content::Object(ObjectContents::Sprite { atlas: Some(_), .. })
        ));
        assert!(parse_sprite(&args(&["Not Valid"])).is_none());
    }

    #[test]
    fn test_nbt_variants() {
        let config = ParserConfig::default();
        let context = TagContext::new(&EmptyResolver, &config);

        let block = parse_nbt(&args(&["block", "~1 2 ~-3", "Items"]), &context).unwrap();
        match block.content {
            Content::Nbt {
                path,
                interpret,
                separator,
                source: NbtSource::Block(_),
            } => {
                assert_eq!(path, "Items");
                assert!(!interpret);
                assert!(separator.is_none());
            }
            other => panic!("Expected block nbt, got {:?}", other),
        }

        let entity = parse_nbt(&args(&["entity", "@s", "Name", ", ", "INTERPRET"]), &context).unwrap();
        match entity.content {
            Content::Nbt {
                interpret,
                separator,
                source: NbtSource::Entity(selector),
                ..
            } => {
                assert!(interpret);
                assert_eq!(selector, "@s");
                assert_eq!(separator.map(|s| *s), Some(Component::text(", ")));
            }
            other => panic!("Expected entity nbt, got {:?}", other),
        }

        assert!(parse_nbt(&args(&["storage", "ns:store", "path"]), &context).is_some());
        assert!(parse_nbt(&args(&["storage", "Bad Key", "path"]), &context).is_none());
        assert!(parse_nbt(&args(&["block", "1 2", "path"]), &context).is_none());
        assert!(parse_nbt(&args(&["chunk", "x", "path"]), &context).is_none());
        assert!(parse_nbt(&args(&["entity", "@s"]), &context).is_none());
    }

    #[test]
    fn test_translatable_arguments() {
        let config = ParserConfig::default();
        let context = TagContext::new(&EmptyResolver, &config);
        let lang = parse_translatable(&args(&["chat.type", "<red>a", "b"]), None, &context).unwrap();
        match lang.content {
            Content::Translatable { key, fallback, args } => {
                assert_eq!(key, "chat.type");
                assert_eq!(fallback, None);
                assert_eq!(args.len(), 2);
                // the red wrapper collapses into its only child
                assert_eq!(args[0].as_text(), Some("a"));
                assert!(args[0].style.color.is_some());
                assert_eq!(args[1], Component::text("b"));
            }
            other => panic!("Expected translatable, got {:?}", other),
        }

        let lang_or = parse_translatable(&args(&["k", "fb", "x"]), Some("fb"), &context).unwrap();
        assert!(matches!(
            lang_or.content,
            Content::Translatable { fallback: Some(_), ref args, .. } if args.len() == 1
        ));
    }

    #[test]
    fn test_hover_show_text_compacts() {
        let config = ParserConfig::default();
        let context = TagContext::new(&EmptyResolver, &config);
        let hover = parse_hover(&args(&["show_text", "hi"]), &context).unwrap();
        assert_eq!(hover, HoverEvent::ShowText(Component::text("hi")));
        assert!(parse_hover(&args(&["show_text"]), &context).is_none());
        assert!(parse_hover(&args(&["show_other", "x"]), &context).is_none());
    }

    #[test]
    fn test_hover_show_item() {
        let config = ParserConfig::default();
        let plain = TagContext::new(&EmptyResolver, &config);
        let item = parse_hover(&args(&["show_item", "diamond"]), &plain).unwrap();
        assert_eq!(
            item,
            HoverEvent::ShowItem {
                item: Key::parse("minecraft:diamond").unwrap(),
                count: 1,
                components: Vec::new(),
            }
        );
        let counted = parse_hover(&args(&["show_item", "stone", "x"]), &plain).unwrap();
        assert!(matches!(counted, HoverEvent::ShowItem { count: 1, .. }));

        // data pairs need a resolver
        let data = args(&["show_item", "stone", "2", "custom_name=hi"]);
        assert!(parse_hover(&data, &plain).is_none());

        let resolver = RawDataResolver;
        let with_data = plain.with_data_resolver(&resolver);
        let hover = parse_hover(&data, &with_data).unwrap();
        assert_eq!(
            hover,
            HoverEvent::ShowItem {
                item: Key::parse("stone").unwrap(),
                count: 2,
                components: vec![(
                    Key::parse("custom_name").unwrap(),
                    DataComponentValue::Raw("hi".into())
                )],
            }
        );
        let malformed = args(&["show_item", "stone", "2", "=hi"]);
        assert!(parse_hover(&malformed, &with_data).is_none());
        let empty_value = args(&["show_item", "stone", "2", "lore="]);
        assert!(parse_hover(&empty_value, &with_data).is_none());
    }

    #[test]
    fn test_hover_show_entity() {
        let config = ParserConfig::default();
        let context = TagContext::new(&EmptyResolver, &config);
        let uuid = "f84c6a79-0a4e-45e0-879b-cd49ebd4c4e2";
        let hover = parse_hover(&args(&["show_entity", "zombie", uuid, "Bob"]), &context).unwrap();
        match hover {
            HoverEvent::ShowEntity { kind, id, name } => {
                assert_eq!(kind.to_string(), "minecraft:zombie");
                assert_eq!(id.to_string(), uuid);
                assert_eq!(name, Some(Component::text("Bob")));
            }
            other => panic!("Expected entity hover, got {:?}", other),
        }
        assert!(parse_hover(&args(&["show_entity", "zombie"]), &context).is_none());
        assert!(parse_hover(&args(&["show_entity", "zombie", "not-a-uuid"]), &context).is_none());
    }

    #[test]
    fn test_selector_and_score() {
        let config = ParserConfig::default();
        let context = TagContext::new(&EmptyResolver, &config);
        assert_eq!(
            parse_selector(&args(&["@a"]), &context),
            Some(Component::selector("@a", None))
        );
        assert_eq!(
            parse_selector(&args(&["@a", ", "]), &context),
            Some(Component::selector("@a", Some(Component::text(", "))))
        );
        assert!(parse_selector(&[], &context).is_none());
        assert_eq!(
            parse_score(&args(&["@p", "kills"])),
            Some(Component::score("@p", "kills"))
        );
        assert!(parse_score(&args(&["@p"])).is_none());
        assert_eq!(parse_keybind(&args(&["key.jump"])), Some(Component::keybind("key.jump")));
    }
}
