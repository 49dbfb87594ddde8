use strum::IntoEnumIterator;
use wacloud_core::{InlinePayload, MediaKind, MediaObject, MediaReference, MediaSource};

#[test]
fn inline_relabels_to_identifier_and_link() {
    for kind in MediaKind::iter() {
        let inline = MediaReference::inline(kind, "payload-1");

        let id = inline.to_identifier().unwrap();
        assert!(id.is_identifier());
        assert_eq!(id.file(), "payload-1");
        assert_eq!(*id.kind(), kind);

        let link = inline.to_link().unwrap();
        assert!(link.is_link());
        assert_eq!(link.file(), "payload-1");
        assert_eq!(*link.kind(), kind);
    }
}

#[test]
fn inline_identifier_relabels_the_same_way() {
    let inline = MediaReference::inline_identifier(MediaKind::Audio, "42");
    assert_eq!(
        inline.to_identifier(),
        Some(MediaReference::identifier(MediaKind::Audio, "42"))
    );
    assert_eq!(
        inline.to_link(),
        Some(MediaReference::link(MediaKind::Audio, "42"))
    );
}

#[test]
fn to_inline_remembers_provenance() {
    let from_id = MediaReference::identifier(MediaKind::Image, "m1").to_inline();
    assert_eq!(
        from_id.source(),
        &MediaSource::Inline(InlinePayload::Identifier("m1".to_string()))
    );

    let from_link = MediaReference::link(MediaKind::Image, "https://x/y").to_inline();
    assert_eq!(
        from_link.source(),
        &MediaSource::Inline(InlinePayload::Content("https://x/y".to_string()))
    );
}

#[test]
fn relabeling_round_trip_keeps_string_and_kind() {
    for kind in MediaKind::iter() {
        let values = [
            MediaReference::identifier(kind, "id-7"),
            MediaReference::link(kind, "https://lookaside.example/7"),
        ];
        for value in values {
            let round = value.to_inline().to_identifier().unwrap().to_inline();
            assert_eq!(round.file(), value.file());
            assert_eq!(*round.kind(), kind);
        }
    }
}

#[test]
fn network_conversions_are_not_relabelings() {
    let id = MediaReference::identifier(MediaKind::Video, "v1");
    assert!(id.to_link().is_none());
    assert_eq!(id.to_identifier(), Some(id.clone()));

    let link = MediaReference::link(MediaKind::Video, "https://x/v1");
    assert!(link.to_identifier().is_none());
    assert_eq!(link.to_link(), Some(link.clone()));
}

#[test]
fn to_inline_is_idempotent() {
    let inline = MediaReference::inline(MediaKind::Document, "doc");
    assert_eq!(inline.to_inline(), inline);
}

#[test]
fn wire_object_shapes() {
    let id = MediaReference::inline_identifier(MediaKind::Sticker, "s1").to_object();
    assert_eq!(id, MediaObject::Id { id: "s1".to_string() });
    assert_eq!(serde_json::to_string(&id).unwrap(), r#"{"id":"s1"}"#);

    let link = MediaReference::inline(MediaKind::Image, "https://x/i").to_object();
    assert_eq!(
        serde_json::to_string(&link).unwrap(),
        r#"{"link":"https://x/i"}"#
    );
}

#[test]
fn media_kind_parses_and_displays() {
    for kind in MediaKind::iter() {
        let parsed: MediaKind = kind.to_string().parse().unwrap();
        assert_eq!(parsed, kind);
        assert_eq!(kind.as_str(), kind.to_string());
    }
    assert!("gif".parse::<MediaKind>().is_err());
    assert_eq!(
        serde_json::to_string(&MediaKind::Document).unwrap(),
        r#""document""#
    );
}

#[test]
fn media_kind_names_agree_everywhere() {
    for kind in MediaKind::iter() {
        let name = kind.as_str();
        assert_eq!(name.parse::<MediaKind>().unwrap(), kind);
        assert_eq!(format!("{}", kind), name);
        assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{}\"", name));
        let decoded: MediaKind = serde_json::from_str(&format!("\"{}\"", name)).unwrap();
        assert_eq!(decoded, kind);
    }
    assert_eq!(
        "Video".parse::<MediaKind>().unwrap_err(),
        "Unknown media kind: Video"
    );
}
