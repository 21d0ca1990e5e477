mod common;

use mockall::mock;
use std::sync::Arc;

use common::store_with;
use cs_app::usecases::{ListHistoryPreviews, PasteHistorySlot};
use cs_app::PasteError;
use cs_core::ports::{ClipboardPollHandler, PasteKeystrokePort};
use cs_core::testing::{InMemoryClipboard, InMemoryFiles};
use cs_core::PasteSlot;

mock! {
    Keystroke {}

    impl PasteKeystrokePort for Keystroke {
        fn send_paste(&self) -> anyhow::Result<()>;
    }
}

#[tokio::test(start_paused = true)]
async fn slot_pastes_the_matching_history_entry() {
    let clipboard = Arc::new(InMemoryClipboard::new());
    let mut keystroke = MockKeystroke::new();
    keystroke.expect_send_paste().times(1).returning(|| Ok(()));
    let store = store_with(clipboard.clone(), Arc::new(keystroke), Arc::new(InMemoryFiles::new()));
    for text in ["third", "second", "first"] {
        clipboard.copy_text(text);
        store.poll_once().await.unwrap();
    }

    PasteHistorySlot::new(store.clone())
        .execute(PasteSlot::new(2).unwrap())
        .await
        .unwrap();

    assert_eq!(
        clipboard.writes().last(),
        Some(&cs_core::testing::text_snapshot("second"))
    );
}

#[tokio::test(start_paused = true)]
async fn empty_slot_never_sends_a_keystroke() {
    let clipboard = Arc::new(InMemoryClipboard::new());
    let mut keystroke = MockKeystroke::new();
    keystroke.expect_send_paste().never();
    let store = store_with(clipboard.clone(), Arc::new(keystroke), Arc::new(InMemoryFiles::new()));
    clipboard.copy_text("only");
    store.poll_once().await.unwrap();

    let err = PasteHistorySlot::new(store)
        .execute(PasteSlot::new(9).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, PasteError::InvalidIndex { index: 8, len: 1 }));
    assert!(clipboard.writes().is_empty());
}

#[tokio::test(start_paused = true)]
async fn previews_follow_history_order() {
    let clipboard = Arc::new(InMemoryClipboard::new());
    let store = store_with(
        clipboard.clone(),
        Arc::new(MockKeystroke::new()),
        Arc::new(InMemoryFiles::new()),
    );
    clipboard.copy_text("older");
    store.poll_once().await.unwrap();
    clipboard.copy_text("newer");
    store.poll_once().await.unwrap();

    let previews = ListHistoryPreviews::new(store).execute();

    let titles: Vec<_> = previews.iter().map(|p| (p.index, p.title.as_str())).collect();
    assert_eq!(titles, vec![(0, "newer"), (1, "older")]);
}
