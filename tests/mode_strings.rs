//! Mode string parsing, rendering and manipulation through the public API.

use slirc_objects::{
    ChannelMode, ChannelModeString, ClientModeString, Isupport, Mode, ModeConfig, ModeParseError,
    ProtocolError, UserMode,
};

fn parse_cause(err: ProtocolError) -> ModeParseError {
    match err {
        ProtocolError::InvalidModeString { cause, .. } => cause,
        other => panic!("Expected InvalidModeString, got {:?}", other),
    }
}

#[test]
fn parameters_follow_flag_order() {
    let modes = ChannelModeString::parse("+ov-b alice bob ban!mask", "b", "o").unwrap();
    assert_eq!(
        modes.modes(),
        &[
            Mode::plus('o', Some("alice")),
            Mode::plus('v', Some("bob")),
            Mode::minus('b', Some("ban!mask")),
        ]
    );
}

#[test]
fn canonical_form_groups_signs() {
    let modes = ChannelModeString::parse("-b+o-k+l *!*@x alice key 10", "bk", "l").unwrap();
    assert_eq!(modes.to_string(), "+ol-bk alice 10 *!*@x key");

    // Rendering is stable once canonical
    let again = ChannelModeString::parse(modes.as_str(), "bk", "l").unwrap();
    assert_eq!(again.as_str(), modes.as_str());
    assert_eq!(again, ChannelModeString::new(again.modes().to_vec()).unwrap());
}

#[test]
fn add_only_parameter_is_skipped_on_removal() {
    let modes = ChannelModeString::parse("+l-k 25", "", "l").unwrap();
    assert_eq!(modes.get(0).and_then(Mode::parameter), Some("25"));
    assert_eq!(modes.get(1).and_then(Mode::parameter), None);
}

#[test]
fn parse_failures() {
    let err = ChannelModeString::parse("", "b", "l").unwrap_err();
    assert!(err.is_format_error());
    assert_eq!(parse_cause(err), ModeParseError::NoModes);
    assert_eq!(
        parse_cause(ChannelModeString::parse("+-", "", "").unwrap_err()),
        ModeParseError::NoModes
    );
    assert_eq!(
        parse_cause(ChannelModeString::parse("+b", "b", "").unwrap_err()),
        ModeParseError::MissingParameter { mode: 'b', index: 0 }
    );
    assert_eq!(
        parse_cause(ChannelModeString::parse("+n extra", "", "").unwrap_err()),
        ModeParseError::UnusedParameters { count: 1 }
    );
}

#[test]
fn duplicates_rejected_except_member_modes() {
    let repeated = vec![Mode::plus('o', Some("alice")), Mode::plus('o', Some("bob"))];
    assert!(ChannelModeString::new(repeated.clone()).is_ok());
    assert_eq!(
        ClientModeString::new(repeated),
        Err(ProtocolError::DuplicateMode { mode: 'o' })
    );

    let keys = vec![Mode::plus('k', Some("one")), Mode::minus('k', Some("two"))];
    assert_eq!(
        ChannelModeString::new(keys),
        Err(ProtocolError::DuplicateMode { mode: 'k' })
    );

    assert_eq!(
        ClientModeString::parse("+ii", "", ""),
        Err(ProtocolError::DuplicateMode { mode: 'i' })
    );
}

#[test]
fn rank_modes_without_nickname_rejected() {
    let err = ChannelModeString::new(vec![Mode::plus('v', None)]).unwrap_err();
    assert_eq!(
        parse_cause(err),
        ModeParseError::InvalidParameter { mode: 'v' }
    );

    let op: ChannelModeString = "+o alice".parse().unwrap();
    assert!(op.with_mode(Mode::minus('h', None)).is_err());

    // Everything that builds renders to text that parses back
    let built = ChannelModeString::new(vec![Mode::plus('v', Some("bob")), Mode::plus('n', None)])
        .unwrap();
    assert_eq!(ChannelModeString::parse(built.as_str(), "", "").unwrap(), built);
}

#[test]
fn combine_and_identity() {
    let a: ChannelModeString = "+o alice".parse().unwrap();
    let b: ChannelModeString = "+v bob".parse().unwrap();

    let ab = a.combine(&b).unwrap();
    assert_eq!(ab.to_string(), "+ov alice bob");
    // Inputs are untouched
    assert_eq!(a.len(), 1);

    assert_eq!(ChannelModeString::combine_optional(Some(&a), None).unwrap(), Some(a.clone()));
    assert_eq!(ChannelModeString::combine_optional(None, Some(&b)).unwrap(), Some(b.clone()));
    assert_eq!(ChannelModeString::combine_optional(None, None).unwrap(), None);

    let n: ChannelModeString = "+n".parse().unwrap();
    assert_eq!(
        n.combine(&n),
        Err(ProtocolError::DuplicateMode { mode: 'n' })
    );
}

#[test]
fn remove_ranges() {
    let modes: ChannelModeString = "+ntk-l key".parse().unwrap();

    let trimmed = modes.remove(1, 2).unwrap().unwrap();
    assert_eq!(trimmed.to_string(), "+n-l");

    assert_eq!(modes.remove(0, modes.len()).unwrap(), None);
    assert_eq!(
        modes.remove(3, 2),
        Err(ProtocolError::OutOfRange { start: 3, count: 2, len: 4 })
    );
    assert!(modes.remove(usize::MAX, 2).is_err());
}

#[test]
fn split_for_server_limit() {
    let modes: ChannelModeString = "+ooov a b c d".parse().unwrap();
    let chunks = modes.split_chunks(3);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].to_string(), "+ooo a b c");
    assert_eq!(chunks[1].to_string(), "+v d");
}

#[test]
fn decoding_and_unknown_modes() {
    let modes: ChannelModeString = "+nX".parse().unwrap();
    assert_eq!(modes.modes()[0].decode::<ChannelMode>(), ChannelMode::NoExternalMessages);
    assert!(modes.validate_known().is_err());

    let user: ClientModeString = "+iw".parse().unwrap();
    assert!(user.validate_known().is_ok());
    assert_eq!(user.modes()[0].decode::<UserMode>(), UserMode::Invisible);
}

#[test]
fn config_from_isupport() {
    let isupport = Isupport::parse_params(&["CHANMODES=beI,k,fl,imnpst", "PREFIX=(ov)@+"]);
    let config = ModeConfig::from_isupport(&isupport);

    let modes = ChannelModeString::parse_with("+fo-l 5:10 alice", &config).unwrap();
    assert_eq!(modes.to_string(), "+fo-l 5:10 alice");
    assert!(config.takes_param('e', false));
    assert!(!config.takes_param('l', false));
}

#[test]
fn mode_equality_helpers() {
    let a = Mode::plus('o', Some("alice"));
    let b = Mode::minus('o', None);
    assert!(a.same_mode(&b));
    assert_ne!(a, b);
    assert_eq!(a.to_string(), "+o alice");
}
