//! Tests for field edits.

use super::{EditError, EditValue, Field, OptionKey, PartialSettings, Protocol, SettingsRecord};

fn record() -> SettingsRecord {
    SettingsRecord::default()
}

mod field_names {
    use super::*;

    #[test]
    fn option_names_resolve_to_option_fields() {
        for key in OptionKey::ALL {
            assert_eq!(Field::parse(key.name()), Field::Option(key));
        }
    }

    #[test]
    fn top_level_names_resolve() {
        assert_eq!(Field::parse("protocol"), Field::Protocol);
        assert_eq!(Field::parse("address"), Field::Address);
        assert_eq!(Field::parse("username"), Field::Username);
        assert_eq!(Field::parse("password"), Field::Password);
    }

    #[test]
    fn unknown_names_become_other() {
        assert_eq!(Field::parse("label"), Field::Other("label".to_string()));
        assert_eq!(Field::from("label").to_string(), "label");
    }
}

mod top_level {
    use super::*;

    #[test]
    fn set_address() {
        let next = record()
            .with_edit(&Field::Address, EditValue::text("host/app"))
            .unwrap();

        assert_eq!(next.address, "host/app");
    }

    #[test]
    fn set_protocol() {
        let next = record()
            .with_edit(&Field::Protocol, EditValue::text("http://"))
            .unwrap();

        assert_eq!(next.protocol, Protocol::Http);
    }

    #[test]
    fn reject_unknown_protocol() {
        let result = record().with_edit(&Field::Protocol, EditValue::text("rtmp://"));

        assert_eq!(
            result,
            Err(EditError::InvalidProtocol {
                value: "rtmp://".to_string()
            })
        );
    }

    #[test]
    fn reject_list_for_text_field() {
        let result = record().with_edit(&Field::Username, EditValue::List(vec![]));

        assert!(matches!(
            result,
            Err(EditError::UnexpectedValue { ref field, .. }) if field == "username"
        ));
    }

    #[test]
    fn unknown_field_stored_verbatim() {
        let next = record()
            .with_edit(&Field::parse("label"), EditValue::text("main"))
            .unwrap();

        assert_eq!(next.extra.get("label"), Some(&serde_json::json!("main")));
    }

    #[test]
    fn options_name_is_reserved() {
        let result = record().with_edit(&Field::parse("options"), EditValue::text("x"));

        assert_eq!(
            result,
            Err(EditError::ReservedField {
                field: "options".to_string()
            })
        );
    }

    #[test]
    fn edited_record_survives_json_round_trip() {
        let mut next = record();
        for name in ["options", "label"] {
            if let Ok(edited) = next.with_edit(&Field::parse(name), EditValue::text("x")) {
                next = edited;
            }
        }

        let json = serde_json::to_string(&next).unwrap();
        let partial = PartialSettings::from_json(&json).unwrap();

        assert_eq!(SettingsRecord::merge(Some(&partial)), next);
    }

    #[test]
    fn edit_leaves_original_untouched() {
        let original = record();
        let _ = original
            .with_edit(&Field::Password, EditValue::text("secret"))
            .unwrap();

        assert_eq!(original, SettingsRecord::default());
    }
}

mod options {
    use super::*;

    #[test]
    fn set_text_option() {
        let next = record()
            .with_edit(&OptionKey::WritePrft.into(), EditValue::text("pts"))
            .unwrap();

        assert_eq!(next.options.write_prft, "pts");
    }

    #[test]
    fn set_numeric_option_from_text() {
        let next = record()
            .with_edit(&OptionKey::FragSize.into(), EditValue::text(" 500000 "))
            .unwrap();

        assert_eq!(next.options.frag_size, Some(500_000));
    }

    #[test]
    fn empty_text_unsets_numeric_option() {
        let next = record()
            .with_edit(&OptionKey::MovieTimescale.into(), EditValue::text(""))
            .unwrap();

        assert_eq!(next.options.movie_timescale, None);
    }

    #[test]
    fn reject_non_numeric_text() {
        let result = record().with_edit(&OptionKey::FragDuration.into(), EditValue::text("2s"));

        assert_eq!(
            result,
            Err(EditError::InvalidNumber {
                field: "frag_duration",
                value: "2s".to_string()
            })
        );
    }

    #[test]
    fn set_movflags_from_list() {
        let flags = vec!["skip_sidx".to_string(), "rtphint".to_string()];
        let next = record()
            .with_edit(&OptionKey::Movflags.into(), EditValue::List(flags.clone()))
            .unwrap();

        assert_eq!(next.options.movflags, flags);
    }

    #[test]
    fn set_movflags_from_text() {
        let next = record()
            .with_edit(
                &OptionKey::Movflags.into(),
                EditValue::text("+frag_keyframe, skip_sidx+"),
            )
            .unwrap();

        assert_eq!(next.options.movflags, vec!["frag_keyframe", "skip_sidx"]);
    }

    #[test]
    fn set_boolean_explicitly() {
        let next = record()
            .with_edit(&OptionKey::EmptyHdlrName.into(), EditValue::Flag(true))
            .unwrap();
        assert!(next.options.empty_hdlr_name);

        let next = next
            .with_edit(&OptionKey::EmptyHdlrName.into(), EditValue::text("false"))
            .unwrap();
        assert!(!next.options.empty_hdlr_name);
    }

    #[test]
    fn reject_garbage_boolean_text() {
        let result = record().with_edit(&OptionKey::EmptyHdlrName.into(), EditValue::text("maybe"));

        assert!(matches!(result, Err(EditError::UnexpectedValue { .. })));
    }
}

mod toggle {
    use super::*;

    #[test]
    fn toggle_twice_restores_value() {
        let original = record();
        let once = original.with_toggled(OptionKey::EmptyHdlrName).unwrap();
        let twice = once.with_toggled(OptionKey::EmptyHdlrName).unwrap();

        assert!(once.options.empty_hdlr_name);
        assert_eq!(twice, original);
    }

    #[test]
    fn toggle_rejects_non_boolean_option() {
        let result = record().with_toggled(OptionKey::WriteBtrt);

        assert!(matches!(result, Err(EditError::UnexpectedValue { .. })));
    }
}
