use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use imesync_core::editor::{EditorAttributes, TextInputType};
use imesync_session::{
    key, AdapterConfig, AdapterInputConnection, FullTextSync, InputMethodSession, KeyEvent,
    NativeTextOwner, SelectionUpdate,
};

struct CountingSession(usize);

impl InputMethodSession for CountingSession {
    fn update_selection(&mut self, _update: SelectionUpdate) {
        self.0 += 1;
    }

    fn restart_input(&mut self) {}

    fn is_active(&self) -> bool {
        true
    }
}

struct AcceptingOwner;

impl NativeTextOwner for AcceptingOwner {
    fn check_composition_queue(&mut self, _text: &str, _cursor: i32, _is_commit: bool) -> bool {
        true
    }

    fn delete_surrounding_text(&mut self, _before: usize, _after: usize) -> bool {
        true
    }

    fn set_selection_offsets(&mut self, _start: usize, _end: usize) -> bool {
        true
    }

    fn set_composing_region(&mut self, _start: usize, _end: usize) -> bool {
        true
    }

    fn finish_composing_text(&mut self) -> bool {
        true
    }

    fn forward_key_event(&mut self, _event: &KeyEvent) -> bool {
        true
    }
}

fn connection() -> AdapterInputConnection<CountingSession, AcceptingOwner> {
    let config = AdapterConfig {
        normalize_nbsp: true,
        dedup_notifications: true,
        depth_warning: 16,
        synthesize_tab_on_next: true,
        forward_printable_release: true,
    };
    AdapterInputConnection::with_config(
        CountingSession(0),
        AcceptingOwner,
        EditorAttributes::for_input_type(TextInputType::TextArea),
        config,
    )
}

/// Type each phrase kana by kana, commit it, then backspace the last
/// character, the way a soft keyboard drives a field.
fn type_phrases(phrases: &[(&str, &str)]) -> usize {
    let mut conn = connection();
    for &(reading, surface) in phrases {
        let mut composing = String::new();
        for c in reading.chars() {
            composing.push(c);
            conn.begin_batch_edit();
            conn.set_composing_text(&composing, 1);
            conn.end_batch_edit();
        }
        conn.commit_text(surface, 1);
        conn.send_key_event(&KeyEvent::down(key::DEL));
        conn.send_key_event(&KeyEvent::up(key::DEL));
    }
    conn.text_state().len() + conn.ime().0
}

static INPUTS: &[(&str, &[(&str, &str)])] = &[
    ("short", &[("きょう", "今日")]),
    (
        "medium",
        &[
            ("きょうは", "今日は"),
            ("いいてんき", "いい天気"),
            ("ですね", "ですね"),
        ],
    ),
    (
        "long",
        &[
            ("わたしは", "私は"),
            ("きょうは", "今日は"),
            ("いいてんきだと", "いい天気だと"),
            ("おもいます", "思います"),
            ("けど", "けど"),
            ("がんばります", "頑張ります"),
        ],
    ),
];

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay/typing");
    for &(label, phrases) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, phrases.len()), &phrases, |b, &phrases| {
            b.iter(|| type_phrases(phrases));
        });
    }
    group.finish();
}

fn bench_full_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay/full_sync");
    for &len in &[64usize, 1024, 16384] {
        let text: String = "あいう\u{00A0}abc".chars().cycle().take(len).collect();
        let sync = FullTextSync {
            text,
            selection_start: (len / 2) as i32,
            selection_end: (len / 2) as i32,
            composition_start: -1,
            composition_end: -1,
            require_ack: true,
        };
        group.bench_with_input(BenchmarkId::from_parameter(len), &sync, |b, sync| {
            b.iter(|| {
                let mut conn = connection();
                conn.update_state(sync);
                conn.ime().0
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_typing, bench_full_sync);
criterion_main!(benches);
