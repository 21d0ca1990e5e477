use std::sync::Arc;
use std::time::Duration;

use clipstack_lib::bootstrap::AppContext;
use clipstack_lib::shell::run_shell;
use cs_app::HistoryStoreDeps;
use cs_core::ports::ClipboardPollHandler;
use cs_core::testing::{text_snapshot, InMemoryClipboard, InMemoryFiles, RecordingKeystroke};
use cs_core::AppConfig;

struct Fixture {
    clipboard: Arc<InMemoryClipboard>,
    keystroke: Arc<RecordingKeystroke>,
    context: AppContext,
}

fn fixture() -> Fixture {
    let clipboard = Arc::new(InMemoryClipboard::new());
    let keystroke = Arc::new(RecordingKeystroke::new());
    let deps = HistoryStoreDeps {
        clipboard: clipboard.clone(),
        keystroke: keystroke.clone(),
        files: Arc::new(InMemoryFiles::new()),
    };
    let context = AppContext::from_deps(deps, &AppConfig::default()).unwrap();
    Fixture {
        clipboard,
        keystroke,
        context,
    }
}

async fn run(context: &AppContext, input: &str) -> String {
    let mut out = Vec::new();
    run_shell(context, input.as_bytes(), &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test(start_paused = true)]
async fn list_shows_most_recent_first() {
    let f = fixture();
    f.clipboard.copy_text("first");
    f.context.store.poll_once().await.unwrap();
    f.clipboard.copy_text("second");
    f.context.store.poll_once().await.unwrap();

    let out = run(&f.context, "list\n").await;

    let second = out.find(" 1  text    second").expect("slot 1 listed");
    let first = out.find(" 2  text    first").expect("slot 2 listed");
    assert!(second < first);
}

#[tokio::test(start_paused = true)]
async fn digit_pastes_and_quit_restores() {
    let f = fixture();
    f.clipboard.copy_text("older");
    f.context.store.poll_once().await.unwrap();
    f.clipboard.copy_text("newer");
    f.context.store.poll_once().await.unwrap();

    run(&f.context, "2\nquit\n").await;

    assert_eq!(f.keystroke.sent(), 1);
    assert_eq!(f.clipboard.writes()[0], text_snapshot("older"));

    tokio::time::sleep(Duration::from_millis(1_301)).await;
    assert_eq!(f.clipboard.current(), text_snapshot("newer"));
}

#[tokio::test(start_paused = true)]
async fn empty_slot_reports_failure_and_keeps_going() {
    let f = fixture();

    let out = run(&f.context, "5\nls\n").await;

    assert!(out.contains("paste failed"));
    assert!(out.contains("(history is empty)"));
    assert_eq!(f.keystroke.sent(), 0);
}

#[tokio::test]
async fn unknown_commands_are_reported() {
    let f = fixture();

    let out = run(&f.context, "frobnicate\nbindings\n").await;

    assert!(out.contains("unknown command `frobnicate`"));
    assert!(out.contains("cmd+shift+9"));
}

#[tokio::test]
async fn json_dumps_typed_entries() {
    let f = fixture();
    f.clipboard.copy_text("hello");
    f.context.store.poll_once().await.unwrap();

    let out = run(&f.context, "json\n").await;

    assert!(out.contains(r#""type": "text""#));
    assert!(out.contains(r#""data": "hello""#));
}
