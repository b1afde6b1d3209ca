//! Translator configuration loaded from JSON, as a host server stores it.

use codec::{CodecLimits, ConnectionContext, ItemCatalog, LegacyDictionary, StackableItems, Translator};
use payload::ClientPayload;
use wire::{ProtocolVersion, RawPacket};

#[test]
fn partial_limits_keep_defaults() {
    let limits: CodecLimits = serde_json::from_str(r#"{ "max_box_text": 512 }"#).unwrap();
    assert_eq!(limits.max_box_text, 512);
    assert_eq!(limits.max_list_count, CodecLimits::default().max_list_count);
    assert_eq!(limits.fatigue_scale, 200);
}

#[test]
fn catalog_is_a_plain_id_list() {
    let catalog: StackableItems = serde_json::from_str("[10, 33, 10]").unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.is_stackable(33));
    assert_eq!(serde_json::to_string(&catalog).unwrap(), "[10,33]");
}

#[test]
fn dictionary_from_json_drives_legacy_chat() {
    let dictionary: LegacyDictionary = serde_json::from_str(
        r#"{ "words": ["hello", "kill"], "blacklist": ["kill"] }"#,
    )
    .unwrap();
    let translator = Translator::builder().with_dictionary(dictionary).build();
    let ctx = ConnectionContext::new(ProtocolVersion::V115);
    let message = translator.parse(&RawPacket::new(3, vec![91]), &ctx).unwrap();
    let ClientPayload::Chat(chat) = message.payload() else {
        panic!("unexpected payload {message:?}");
    };
    assert_eq!(chat.message, "**** ");
}
