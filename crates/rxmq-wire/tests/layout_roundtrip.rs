//! Property tests for the fixed binary layouts.

use proptest::prelude::*;

use rxmq_wire::layout::{
    CompactTrigger, TriggerMessage, build_md, build_tm, build_tmc2, parse_md, parse_tm,
    parse_tmc2,
};
use rxmq_wire::{ByteOrder, MessageDescriptor, fixed};

fn order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::Little), Just(ByteOrder::Big)]
}

proptest! {
    #[test]
    fn md_integers_survive(
        order in order(),
        version in 1i32..=2,
        priority in -1i32..10,
        expiry in any::<i32>(),
        seq in any::<i32>(),
        msg_id in proptest::collection::vec(any::<u8>(), 24),
    ) {
        let md = MessageDescriptor {
            version,
            priority,
            expiry,
            msg_seq_number: if version >= 2 { seq } else { 1 },
            msg_id: fixed(&msg_id, 0),
            ..MessageDescriptor::default()
        };
        let bytes = build_md(&md, order);
        prop_assert_eq!(parse_md(&bytes, order).unwrap(), md);
    }

    #[test]
    fn tm_to_compact_keeps_text(
        q_name in "[A-Z.]{1,48}",
        appl_type in 0i32..100,
        qmgr in "[A-Z0-9]{0,48}",
    ) {
        let tm = TriggerMessage {
            q_name: fixed(q_name.as_bytes(), b' '),
            appl_type,
            ..TriggerMessage::default()
        };
        let tm = parse_tm(&build_tm(&tm, ByteOrder::Native), ByteOrder::Native).unwrap();
        let compact = parse_tmc2(&build_tmc2(&CompactTrigger::from_tm(&tm, qmgr.as_bytes()))).unwrap();
        prop_assert_eq!(compact.q_name, tm.q_name);
        prop_assert_eq!(compact.qmgr_name, fixed::<48>(qmgr.as_bytes(), b' '));
        let text = String::from_utf8_lossy(&compact.appl_type).trim().to_string();
        prop_assert_eq!(text.parse::<i32>().unwrap(), appl_type);
    }
}
