use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use dyntitle::app::action::Action;
use dyntitle::app::effect_runner::EffectRunner;
use dyntitle::app::ports::{Host, Renderer, SharedDocument};
use dyntitle::app::reducer::reduce;
use dyntitle::app::settings::{MissingTargetPolicy, RotatorSettings};
use dyntitle::app::state::AppState;
use dyntitle::app::test_support::ManualHost;
use dyntitle::app::ticker::{TitleTicker, install};
use dyntitle::domain::ElementId;
use dyntitle::infra::host::TokioHost;

#[derive(Default)]
struct CountingRenderer {
    frames: usize,
}

impl Renderer for CountingRenderer {
    fn draw(&mut self, _state: &AppState) -> Result<()> {
        self.frames += 1;
        Ok(())
    }
}

fn shared_page(settings: &RotatorSettings) -> SharedDocument {
    Arc::new(Mutex::new(settings.build_document().unwrap()))
}

fn displayed(document: &SharedDocument, id: &ElementId) -> Option<String> {
    document.lock().unwrap().text_of(id).map(str::to_string)
}

#[test]
fn ready_signal_from_reducer_starts_rotation() {
    let settings = RotatorSettings::default();
    let document = shared_page(&settings);
    let (tx, mut rx) = mpsc::channel(16);
    let host = Arc::new(ManualHost::new());
    install(
        host.as_ref(),
        TitleTicker::new(&settings, Arc::clone(&document)).report_to(tx),
        settings.interval,
    );
    let runner = EffectRunner::new(Arc::clone(&host) as _);
    let mut state = AppState::new("dyntitle", &settings, Arc::clone(&document));
    let mut renderer = CountingRenderer::default();
    let now = Instant::now();

    let effects = reduce(&mut state, Action::DocumentReady, now);
    runner.run(effects, &mut renderer, &state).unwrap();

    assert!(host.is_ready());
    assert_eq!(host.timer_count(), 1);
    assert_eq!(renderer.frames, 1);

    for expected in ["My Love", "My Heartbeat", "My Everything", "My Love"] {
        host.advance(settings.interval);
        let action = rx.try_recv().unwrap();
        reduce(&mut state, action, now);

        assert_eq!(state.page.last_title.as_deref(), Some(expected));
        assert_eq!(
            displayed(&document, &settings.target).as_deref(),
            Some(expected)
        );
    }
    assert_eq!(state.page.ticks, 4);
    assert!(rx.try_recv().is_err());
}

#[test]
fn failing_target_keeps_first_title_pending() {
    let settings = RotatorSettings {
        target: ElementId::new("subtitle").unwrap(),
        on_missing_target: MissingTargetPolicy::Fail,
        page_elements: vec![ElementId::default()],
        ..Default::default()
    };
    let document = shared_page(&settings);
    let (tx, mut rx) = mpsc::channel(16);
    let host = ManualHost::new();
    install(
        &host,
        TitleTicker::new(&settings, Arc::clone(&document)).report_to(tx),
        settings.interval,
    );
    let mut state = AppState::new("dyntitle", &settings, Arc::clone(&document));
    host.mark_ready();

    host.advance(settings.interval * 2);

    for _ in 0..2 {
        let action = rx.try_recv().unwrap();
        assert_eq!(
            action,
            Action::TickFailed("Display target not found: #subtitle".to_string())
        );
        reduce(&mut state, action, Instant::now());
    }
    assert_eq!(state.page.ticks, 2);
    assert!(state.page.last_title.is_none());
    assert_eq!(displayed(&document, &ElementId::default()).as_deref(), Some(""));
}

#[test]
fn single_title_never_changes() {
    let settings = RotatorSettings {
        titles: dyntitle::domain::TitleList::new(["Only"]).unwrap(),
        ..Default::default()
    };
    let document = shared_page(&settings);
    let host = ManualHost::new();
    install(
        &host,
        TitleTicker::new(&settings, Arc::clone(&document)),
        settings.interval,
    );
    host.mark_ready();

    for _ in 0..5 {
        host.advance(settings.interval);
        assert_eq!(
            displayed(&document, &settings.target).as_deref(),
            Some("Only")
        );
    }
}

#[tokio::test(start_paused = true)]
async fn tokio_host_rotates_every_three_seconds() {
    let settings = RotatorSettings::default();
    let document = shared_page(&settings);
    let (tx, mut rx) = mpsc::channel(16);
    let host = TokioHost::new(Handle::current());
    install(
        &host,
        TitleTicker::new(&settings, Arc::clone(&document)).report_to(tx),
        settings.interval,
    );

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(rx.try_recv().is_err());

    host.mark_ready();
    let mut titles = Vec::new();
    for _ in 0..3 {
        match rx.recv().await {
            Some(Action::TitleTicked(report)) => titles.push(report.title),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    assert_eq!(titles, vec!["My Love", "My Heartbeat", "My Everything"]);
    assert_eq!(
        displayed(&document, &settings.target).as_deref(),
        Some("My Everything")
    );
    host.shutdown();
}
