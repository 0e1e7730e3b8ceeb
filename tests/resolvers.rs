//! Custom tags, the reusable parser and its context.

use quickmm::markup::component::{
    Component, DataComponentValue, Decoration, HoverEvent, Key, Style, TextColor,
};
use quickmm::markup::config::ParserConfig;
use quickmm::markup::resolver::{
    Addressee, ArgumentTagResolver, ContextError, JsonDataResolver, RawDataResolver, Tag,
    TagContext, TagResolver,
};
use quickmm::markup::testing::assert_component;
use quickmm::markup::{deserialize_with, MarkupParser};
use std::any::Any;

/// Resolves a handful of fixed names.
struct Fixed;

impl TagResolver for Fixed {
    fn has(&self, name: &str) -> bool {
        matches!(name, "warn" | "badge" | "frame" | "loop" | "red" | "echo" | "where")
    }

    fn resolve(&self, name: &str, args: &[String], context: &TagContext<'_>) -> Option<Tag> {
        match name {
            "warn" => Some(Tag::preprocess("<gold><b>!</b>")),
            "badge" => Some(Tag::self_closing_inserting(Component::text("[B]"))),
            "frame" => Some(Tag::inserting(Component::keybind("key.frame"))),
            "loop" => Some(Tag::preprocess("<loop>")),
            "red" => Some(Tag::styling(Style::with_color(TextColor::new(0x123456)))),
            "echo" => args
                .first()
                .map(|markup| Tag::self_closing_inserting(context.deserialize(markup))),
            "where" => context
                .locale()
                .map(|locale| Tag::self_closing_inserting(Component::text(locale))),
            _ => None,
        }
    }
}

#[test]
fn preprocess_feeds_markup_back() {
    let parsed = deserialize_with("<warn>x", &Fixed);
    assert_component(&parsed)
        .color(TextColor::new(0xffaa00))
        .child_count(2)
        .child(0, |bold| {
            bold.decoration(Decoration::Bold, Some(true)).child(0, |mark| {
                mark.text("!");
            });
        })
        .child(1, |x| {
            x.text("x");
        });
}

#[test]
fn custom_names_shadow_builtins() {
    let parsed = deserialize_with("<red>x</red>", &Fixed);
    assert_component(&parsed).color(TextColor::new(0x123456));
}

#[test]
fn self_closing_inserting_ignores_body_scope() {
    let parsed = deserialize_with("<badge>x", &Fixed);
    assert_eq!(
        parsed,
        Component::empty()
            .append(Component::text("[B]"))
            .append(Component::text("x"))
    );
}

#[test]
fn inserting_with_children_scopes_content() {
    let parsed = deserialize_with("<frame>x</frame>y", &Fixed);
    assert_component(&parsed)
        .child_count(2)
        .child(0, |frame| {
            frame.kind("Keybind").child_count(1).child(0, |x| {
                x.text("x");
            });
        })
        .child(1, |y| {
            y.text("y");
        });
}

#[test]
fn self_referencing_preprocess_stops_at_depth_limit() {
    let parser = MarkupParser::builder()
        .resolver(Fixed)
        .config(ParserConfig {
            max_depth: 4,
            ..ParserConfig::default()
        })
        .build()
        .unwrap();
    assert_eq!(parser.deserialize("<loop>"), Component::text("<loop>"));
}

#[test]
fn nested_deserialize_stops_at_depth_limit() {
    let parser = MarkupParser::builder()
        .resolver(Fixed)
        .config(ParserConfig {
            max_depth: 1,
            ..ParserConfig::default()
        })
        .build()
        .unwrap();
    let parsed = parser.deserialize("<echo:'<echo:\"<b>x\">'>");
    // The innermost markup is past the limit and stays literal.
    assert_eq!(parsed, Component::text("<b>x"));
}

#[test]
fn argument_resolver_answers_positions() {
    let arguments = ArgumentTagResolver::new(vec![
        Tag::preprocess("<b>bold</b>"),
        Tag::self_closing_inserting(Component::keybind("key.jump")),
    ]);
    let parsed = deserialize_with("<arg:0> then <argument:1>", &arguments);
    assert_component(&parsed)
        .child_count(3)
        .child(0, |bold| {
            bold.decoration(Decoration::Bold, Some(true));
        })
        .child(1, |text| {
            text.text(" then ");
        })
        .child(2, |key| {
            key.kind("Keybind");
        });

    assert_eq!(
        deserialize_with("<arg:7>", &arguments),
        Component::text("<arg:7>")
    );
}

#[test]
fn composed_resolvers_ask_in_order() {
    let first = ArgumentTagResolver::new(vec![Tag::preprocess("first")]);
    let second = ArgumentTagResolver::new(vec![
        Tag::preprocess("second"),
        Tag::preprocess("second only"),
    ]);
    let resolvers = vec![first, second];
    assert_eq!(deserialize_with("<arg:0>", &resolvers), Component::text("first"));
    assert_eq!(
        deserialize_with("<arg:1>", &resolvers),
        Component::text("second only")
    );
}

struct Player {
    name: &'static str,
    locale: Option<&'static str>,
}

impl Addressee for Player {
    fn locale(&self) -> Option<&str> {
        self.locale
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct Greeting;

impl TagResolver for Greeting {
    fn has(&self, name: &str) -> bool {
        name == "player"
    }

    fn resolve(&self, _name: &str, _args: &[String], context: &TagContext<'_>) -> Option<Tag> {
        let player = context.addressee()?.as_any().downcast_ref::<Player>()?;
        Some(Tag::self_closing_inserting(Component::text(player.name)))
    }
}

#[test]
fn addressee_reaches_resolvers() {
    let parser = MarkupParser::builder().resolver(Greeting).build().unwrap();
    let steve = Player {
        name: "Steve",
        locale: None,
    };
    let parsed = parser.deserialize_for("Hi <player>", &steve).unwrap();
    assert_eq!(
        parsed,
        Component::empty()
            .append(Component::text("Hi "))
            .append(Component::text("Steve"))
    );
    assert_eq!(parser.deserialize("<player>"), Component::text("<player>"));
}

#[test]
fn locale_comes_from_parser_or_addressee() {
    let parser = MarkupParser::builder()
        .resolver(Fixed)
        .locale("en_us")
        .build()
        .unwrap();
    assert_eq!(parser.deserialize("<where>"), Component::text("en_us"));

    let plain = MarkupParser::builder().resolver(Fixed).build().unwrap();
    let alex = Player {
        name: "Alex",
        locale: Some("de_de"),
    };
    assert_eq!(
        plain.deserialize_for("<where>", &alex),
        Ok(Component::text("de_de"))
    );
    assert_eq!(
        parser.deserialize_for("<where>", &alex),
        Err(ContextError::ConflictingLocale)
    );
}

#[test]
fn item_data_goes_through_the_data_resolver() {
    let raw = MarkupParser::builder()
        .data_resolver(RawDataResolver)
        .build()
        .unwrap();
    let parsed = raw.deserialize("<hover:show_item:diamond:1:custom_name=shiny:lore=!>x");
    let Some(HoverEvent::ShowItem { components, .. }) = parsed.style.hover.as_deref() else {
        panic!("Expected a show_item hover");
    };
    assert_eq!(
        components,
        &vec![
            (
                Key::parse("custom_name").unwrap(),
                DataComponentValue::Raw("shiny".to_string())
            ),
            (Key::parse("lore").unwrap(), DataComponentValue::Removed),
        ]
    );

    let json = MarkupParser::builder()
        .data_resolver(JsonDataResolver)
        .build()
        .unwrap();
    let markup = "<hover:show_item:diamond:1:custom_name=shiny>x";
    assert_eq!(json.deserialize(markup), Component::text(markup));
}

#[test]
fn duplicate_builder_attributes_fail() {
    let result = MarkupParser::builder()
        .config(ParserConfig::default())
        .config(ParserConfig::default())
        .build();
    assert_eq!(result.err(), Some(ContextError::DuplicateAttribute("config")));
}
