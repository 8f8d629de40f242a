//! Entry points driven the way a script calls them.

use rxmq_core::{
    ConnectionContext, Engine, EngineOptions, MemoryStore, Outcome, VariableStore,
};
use rxmq_wire::constants::{MQCFT_EVENT, MQCMD_PERFM_EVENT};
use rxmq_wire::layout::{
    CompactTrigger, DeadLetterHeader, PcfBuilder, PcfHeader, TriggerMessage, build_dlh, build_tm,
    build_tmc2,
};
use rxmq_wire::{ByteOrder, fixed};

const ORDER: ByteOrder = ByteOrder::Little;

fn engine() -> Engine<'static> {
    Engine::new(EngineOptions {
        byte_order: ORDER,
        ..EngineOptions::default()
    })
    .unwrap()
}

fn args<'a>(values: &[&'a str]) -> Vec<Option<&'a [u8]>> {
    values.iter().map(|value| Some(value.as_bytes())).collect()
}

/// Store holding `data` under `IN.0` / `IN.1`.
fn input(data: &[u8]) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set_str("IN.0", &data.len().to_string());
    store.set("IN.1", data);
    store
}

fn output_vars(store: &MemoryStore) -> usize {
    store.with_prefix("OUT.").count()
}

fn assert_status(store: &MemoryStore, outcome: &Outcome) {
    for prefix in ["RXMQ.", "RXMQN."] {
        assert_eq!(
            store.get_str(&format!("{prefix}LASTRC")).unwrap(),
            outcome.status.rc.to_string()
        );
        assert_eq!(
            store.get_str(&format!("{prefix}LASTMSG")).unwrap(),
            outcome.return_string
        );
    }
}

#[test]
fn hxt_splits_dead_letter_message() {
    let dlh = DeadLetterHeader {
        reason: 2053,
        dest_q_name: fixed(b"APP.INPUT", b' '),
        ..DeadLetterHeader::default()
    };
    let mut message = build_dlh(&dlh, ORDER);
    message.extend_from_slice(b"order 42");
    let mut store = input(&message);

    let outcome = engine().hxt(&mut store, &args(&["IN.", "OUT."]));
    assert!(outcome.is_ok());
    assert_eq!(outcome.return_string, "0 0 0 RXMQHXT OK");
    assert_status(&store, &outcome);
    assert_eq!(store.get_str("OUT.0").unwrap(), "8");
    assert_eq!(store.get_str("OUT.1").unwrap(), "order 42");
    assert_eq!(store.get_str("OUT.REA").unwrap(), "2053");
    insta::assert_snapshot!(
        store.get_str("OUT.ZLIST").unwrap(),
        @"0 1 TYPE NAME REA DQM DQN ENC CCSI FORM PAT PAN PD PT"
    );
}

#[test]
fn hxt_unknown_header_leaves_output_untouched() {
    let mut store = input(b"RFH2 and then some data");
    let before = store.len();

    let outcome = engine().hxt(&mut store, &args(&["IN.", "OUT."]));
    assert_eq!(outcome.status.rc, -10);
    assert_eq!(outcome.return_string, "-10 0 0 RXMQHXT Unknown Header");
    assert_eq!(output_vars(&store), 0);
    // Only the five status variables under each prefix were added.
    assert_eq!(store.len(), before + 10);
    assert_status(&store, &outcome);
}

#[test]
fn hxt_length_cross_check() {
    let mut store = MemoryStore::new();
    store.set_str("IN.0", "300");
    store.set_str("IN.1", "DLH too short");

    let outcome = engine().hxt(&mut store, &args(&["IN.", "OUT."]));
    assert_eq!(
        outcome.return_string,
        "-14 0 0 RXMQHXT Data length is not equal to specified value"
    );

    let outcome = engine().hxt(&mut MemoryStore::new(), &args(&["IN.", "OUT."]));
    assert_eq!(outcome.return_string, "-6 0 0 RXMQHXT No input data");
}

#[test]
fn hxt_rejects_payload_longer_than_declared() {
    let mut data = build_dlh(&DeadLetterHeader::default(), ORDER);
    data.extend_from_slice(b"payload");
    let mut store = input(&data);
    store.set_str("IN.0", &(data.len() - 6).to_string());
    let before = store.len();

    let outcome = engine().hxt(&mut store, &args(&["IN.", "OUT."]));
    assert_eq!(
        outcome.return_string,
        "-14 0 0 RXMQHXT Data length is not equal to specified value"
    );
    assert_eq!(output_vars(&store), 0);
    assert_eq!(store.len(), before + 10);
}

#[test]
fn arguments_checked_before_input() {
    let engine = engine();
    let mut store = MemoryStore::new();

    let outcome = engine.event(&mut store, &args(&["IN."]));
    assert_eq!(outcome.return_string, "-1 0 0 RXMQEVNT Bad number of parms");

    let outcome = engine.event(&mut store, &[None, Some(b"OUT.".as_slice())]);
    assert_eq!(outcome.return_string, "-2 0 0 RXMQEVNT Null input stem var");

    let outcome = engine.hxt(&mut store, &args(&["IN.", ""]));
    assert_eq!(outcome.return_string, "-5 0 0 RXMQHXT Zero output stem var");
}

#[test]
fn event_decodes_queue_full() {
    let message = PcfBuilder::new(
        PcfHeader::new(MQCFT_EVENT, MQCMD_PERFM_EVENT, 2053),
        ORDER,
    )
    .string(2016, b"APP.INPUT")
    .integer(1013, 3)
    .finish();
    let mut store = input(&message);

    let outcome = engine().event(&mut store, &args(&["IN.", "OUT."]));
    assert_eq!(outcome.return_string, "0 0 0 RXMQEVNT OK");
    assert_eq!(store.get_str("OUT.TYPE").unwrap(), "EVENT");
    assert_eq!(store.get_str("OUT.NAME").unwrap(), "Q_FULL");
    assert_eq!(store.get_str("OUT.Q_NAME").unwrap(), "APP.INPUT");
    insta::assert_snapshot!(
        store.get_str("OUT.ZLIST").unwrap(),
        @"TYPE NAME REA Q_NAME ERROR_IDENTIFIER"
    );
}

#[test]
fn event_short_buffer_is_format_error() {
    let mut header = ORDER.i32_to(MQCFT_EVENT).to_vec();
    header.extend_from_slice(&[20, 0]);
    let mut store = input(&header);

    let outcome = engine().event(&mut store, &args(&["IN.", "OUT."]));
    assert_eq!(outcome.return_string, "-11 0 0 RXMQEVNT Too short for an Event");
    assert_eq!(output_vars(&store), 0);
}

#[test]
fn event_decoding_is_repeatable() {
    let message = PcfBuilder::new(
        PcfHeader::new(MQCFT_EVENT, MQCMD_PERFM_EVENT, 2053),
        ORDER,
    )
    .string(2016, b"APP.INPUT")
    .finish();

    let engine = engine();
    let mut first = input(&message);
    let mut second = input(&message);
    engine.event(&mut first, &args(&["IN.", "OUT."]));
    engine.event(&mut second, &args(&["IN.", "OUT."]));
    let first: Vec<_> = first.iter().collect();
    let second: Vec<_> = second.iter().collect();
    assert_eq!(first, second);
}

fn trigger_message() -> TriggerMessage {
    TriggerMessage {
        q_name: fixed(b"APP.INITQ", b' '),
        process_name: fixed(b"APP.PROC", b' '),
        appl_type: 6,
        ..TriggerMessage::default()
    }
}

#[test]
fn tm_from_stem_lists_seven_fields() {
    let mut store = input(&build_tm(&trigger_message(), ORDER));
    let ctx = ConnectionContext::connected("QM1");

    let outcome = engine().tm(&mut store, Some(&ctx), &args(&["IN.", "OUT."]));
    assert_eq!(outcome.return_string, "0 0 0 RXMQTM OK");
    insta::assert_snapshot!(store.get_str("OUT.ZLIST").unwrap(), @"QN PN TD AT AID ED UD");
    let compact = store.get("OUT.PL").unwrap();
    assert_eq!(compact.len(), 732);
    assert_eq!(&compact[684..687], b"QM1");
}

#[test]
fn tm_from_argument_string() {
    let compact = build_tmc2(&CompactTrigger::from_tm(&trigger_message(), b"QM2"));
    let mut store = MemoryStore::new();

    let outcome = engine().tm(
        &mut store,
        None,
        &[Some(compact.as_slice()), Some(b"OUT.".as_slice())],
    );
    assert!(outcome.is_ok());
    insta::assert_snapshot!(store.get_str("OUT.ZLIST").unwrap(), @"QN PN TD AID ED UD QM");
    assert!(store.get_str("OUT.QM").unwrap().starts_with("QM2"));
    assert!(!store.contains("OUT.PL"));
}

#[test]
fn tm_wrong_convention() {
    let mut store = MemoryStore::new();
    let tm = build_tm(&trigger_message(), ORDER);

    let outcome = engine().tm(&mut store, None, &[Some(tm.as_slice()), Some(b"OUT.".as_slice())]);
    assert_eq!(outcome.return_string, "-16 0 0 RXMQTM Header mismatch (2<>C)");
}

#[test]
fn constants_published_with_maps() {
    let mut store = MemoryStore::new();
    let outcome = engine().publish_constants(&mut store);

    assert_eq!(outcome.return_string, "0 0 0 RXMQCONS OK");
    assert!(outcome.inventory.is_none());
    assert_eq!(store.get_str("MQOO_OUTPUT").unwrap(), "16");
    assert_eq!(store.get_str("RXMQ.RCMAP.2053").unwrap(), "MQRC_Q_FULL");
    assert_eq!(store.get_str("RXMQN.CCMAP.0").unwrap(), "MQCC_OK");
    assert_eq!(store.get_str("RXMQ.CAMAP.2016").unwrap(), "Q_NAME");
}
