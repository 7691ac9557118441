// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows through the public API: settings file to store, and a
//! renderer that redraws whenever the snapshot changes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tempfile::tempdir;
use toast_store::config::{self, Settings, StoreSection, TransitionSection};
use toast_store::diagnostics::DiagnosticsCollector;
use toast_store::domain::diagnostics::EventCapacity;
use toast_store::{
    ConfigPatch, DismissReason, Dismissal, Snapshot, ToastId, ToastKind, ToastOptions, ToastPatch,
    ToastPhase, ToastStore, ToastStoreConfig, Urgency,
};

async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

async fn advance(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle().await;
}

/// Minimal renderer: redraws on every notification and remembers each
/// frame as a list of `(title, phase)` pairs.
struct Renderer {
    frames: Arc<Mutex<Vec<Vec<(String, ToastPhase)>>>>,
}

impl Renderer {
    fn attach(store: &ToastStore) -> Self {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&frames);
        let source = store.clone();
        store.subscribe(move || {
            let frame = source
                .get_snapshot()
                .iter()
                .map(|t| (t.title().unwrap_or_default().to_string(), t.phase()))
                .collect();
            sink.lock().unwrap().push(frame);
        });
        Self { frames }
    }

    fn frames(&self) -> Vec<Vec<(String, ToastPhase)>> {
        self.frames.lock().unwrap().clone()
    }
}

#[tokio::test(start_paused = true)]
async fn settings_file_drives_store_and_exit_transition() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("toasts").join("settings.toml");
    let settings = Settings {
        store: StoreSection {
            max: 2,
            default_duration_ms: 1000,
        },
        transition: TransitionSection {
            exit_ms: 200,
            reduced_motion: false,
        },
    };
    config::save_to_path(&settings, &path).expect("failed to save settings");

    let loaded = config::load_from_path(&path).expect("failed to load settings");
    let store = ToastStore::new(loaded.store_config()).expect("inside runtime");
    let renderer = Renderer::attach(&store);

    store.add(ToastOptions::success("Saved"));
    settle().await;

    // Timer fires at 1000ms, exit transition ends at 1200ms.
    advance(1000).await;
    assert_eq!(
        renderer.frames().last().cloned(),
        Some(vec![("Saved".to_string(), ToastPhase::Leaving)])
    );

    advance(199).await;
    assert_eq!(store.len(), 1);
    advance(1).await;
    assert!(store.is_empty());

    assert_eq!(
        renderer.frames(),
        vec![
            vec![("Saved".to_string(), ToastPhase::Active)],
            vec![("Saved".to_string(), ToastPhase::Leaving)],
            vec![],
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn reduced_motion_removes_without_leaving_frame() {
    let settings = Settings::from_toml_str(
        "[store]\ndefault_duration_ms = 500\n[transition]\nreduced_motion = true\n",
    )
    .expect("valid settings");
    let store = ToastStore::new(settings.store_config()).expect("inside runtime");
    let renderer = Renderer::attach(&store);

    store.add(ToastOptions::info("Copied"));
    settle().await;
    advance(500).await;

    assert!(store.is_empty());
    assert_eq!(renderer.frames().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn progress_toast_is_updated_then_dismissed() {
    let store = ToastStore::new(ToastStoreConfig::new(5, Duration::from_secs(60)))
        .expect("inside runtime");
    let id = store.add(
        ToastOptions::info("Exporting")
            .id("export")
            .description("0%"),
    );

    for percent in [25, 50, 75] {
        assert!(store.update(&id, ToastPatch::new().description(format!("{percent}%"))));
    }
    assert!(store.update(
        &id,
        ToastPatch::new()
            .title("Export finished")
            .description("100%")
            .kind(ToastKind::Success)
            .duration(Duration::from_millis(1500)),
    ));

    let record = store.get(&ToastId::new("export")).expect("toast is active");
    assert_eq!(record.title(), Some("Export finished"));
    assert_eq!(record.kind().urgency(), Urgency::Polite);

    advance(1499).await;
    assert_eq!(store.len(), 1);
    advance(1).await;
    assert!(store.is_empty());
}

#[tokio::test]
async fn renderer_only_redraws_on_real_changes() {
    let store = ToastStore::new(ToastStoreConfig::default()).expect("inside runtime");
    let last_seen: Arc<Mutex<Option<Snapshot>>> = Arc::new(Mutex::new(None));
    let redraws = Arc::new(AtomicUsize::new(0));
    let (seen, hits, source) = (Arc::clone(&last_seen), Arc::clone(&redraws), store.clone());
    store.subscribe(move || {
        let snapshot = source.get_snapshot();
        let mut seen = seen.lock().unwrap();
        let changed = seen
            .as_ref()
            .map_or(true, |previous| !Arc::ptr_eq(previous, &snapshot));
        if changed {
            hits.fetch_add(1, Ordering::SeqCst);
            *seen = Some(snapshot);
        }
    });

    let id = store.add(ToastOptions::error("Disk full"));
    store.set_config(ConfigPatch::new().default_duration(Duration::from_secs(2)));
    store.update(&ToastId::new("missing"), ToastPatch::new().title("ghost"));
    store.dismiss(&id);

    assert_eq!(redraws.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn hook_sees_reasons_and_diagnostics_record_everything() {
    let mut collector = DiagnosticsCollector::new(EventCapacity::default());
    let reasons = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&reasons);
    let hook = toast_store::BeforeDismiss::from_async(move |id, reason| {
        sink.lock().unwrap().push((id.clone(), reason));
        let deadline = tokio::time::Instant::now() + Duration::from_millis(100);
        async move {
            tokio::time::sleep_until(deadline).await;
            Ok(())
        }
    });
    let store = ToastStore::new(
        ToastStoreConfig::new(3, Duration::from_millis(1000)).with_before_dismiss(hook),
    )
    .expect("inside runtime");
    store.set_diagnostics(collector.handle());

    let clicked = store.add(ToastOptions::warning("Low battery").duration(Duration::from_secs(30)));
    let timed = store.add(ToastOptions::info("Synced"));
    settle().await;

    let dismissal = store.dismiss(&clicked);
    assert!(matches!(dismissal, Dismissal::Pending(_)));
    dismissal.settled().await;

    // The timed toast expires at 1000ms and leaves 100ms later.
    advance(900).await;
    assert_eq!(store.len(), 1);
    advance(100).await;

    assert!(store.is_empty());
    assert_eq!(
        *reasons.lock().unwrap(),
        vec![(clicked, DismissReason::Manual), (timed, DismissReason::Auto)]
    );

    collector.process_pending();
    let counts = collector.counts();
    assert_eq!(counts.get("added"), Some(&2));
    assert_eq!(counts.get("dismissing"), Some(&2));
    assert_eq!(counts.get("removed"), Some(&2));
}

#[tokio::test]
async fn stores_are_independent() {
    let first = ToastStore::new(ToastStoreConfig::default()).expect("inside runtime");
    let second = ToastStore::new(ToastStoreConfig::new(1, Duration::from_secs(1)))
        .expect("inside runtime");

    first.add(ToastOptions::info("a"));
    second.add(ToastOptions::info("b"));
    second.add(ToastOptions::info("c"));
    first.dismiss_all();

    assert!(first.is_empty());
    assert_eq!(second.len(), 1);
}
