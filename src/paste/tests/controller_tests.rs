use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::core::settings::Settings;
use crate::core::slots::SlotTable;
use crate::paste::{Activation, Clipboard, PasteController, PasteError, PasteInjector};
use crate::vault::{InMemoryVault, SecretVault, VaultError};

/// Records every write; the last entry is the current clipboard content.
#[derive(Debug, Default)]
struct FakeClipboard {
    history: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl FakeClipboard {
    fn current(&self) -> Option<String> {
        self.history.lock().unwrap().last().cloned()
    }

    fn clear_count(&self) -> usize {
        self.history.lock().unwrap().iter().filter(|s| s.is_empty()).count()
    }

    fn write_count(&self) -> usize {
        self.history.lock().unwrap().len()
    }
}

impl Clipboard for FakeClipboard {
    fn write(&self, text: &str) -> Result<(), PasteError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(PasteError::ClipboardWrite("simulated failure".to_string()));
        }
        self.history.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct FakeInjector {
    pastes: AtomicUsize,
    fail: AtomicBool,
}

impl PasteInjector for FakeInjector {
    fn send_paste(&self) -> Result<(), PasteError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(PasteError::Injection("simulated failure".to_string()));
        }
        self.pastes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Vault whose every operation fails, simulating an unreachable keystore.
struct BrokenVault;

impl SecretVault for BrokenVault {
    fn get(&self, _key: &str) -> Result<Option<String>, VaultError> {
        Err(VaultError::Unavailable("keystore offline".to_string()))
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), VaultError> {
        Err(VaultError::Unavailable("keystore offline".to_string()))
    }
    fn delete(&self, _key: &str) -> Result<(), VaultError> {
        Err(VaultError::Unavailable("keystore offline".to_string()))
    }
}

struct Harness {
    controller: PasteController,
    clipboard: Arc<FakeClipboard>,
    injector: Arc<FakeInjector>,
    vault: Arc<InMemoryVault>,
}

fn harness(clear_after: Duration) -> Harness {
    let settings = Settings {
        slot_count: 3,
        clear_after,
        // No real OS clipboard to settle in tests
        settle_delay: Duration::ZERO,
    };
    let table = Arc::new(SlotTable::with_count(settings.slot_count).unwrap());
    let vault = Arc::new(InMemoryVault::new());
    let clipboard = Arc::new(FakeClipboard::default());
    let injector = Arc::new(FakeInjector::default());

    let controller = PasteController::new(
        table,
        vault.clone(),
        clipboard.clone(),
        injector.clone(),
        &settings,
    );

    Harness {
        controller,
        clipboard,
        injector,
        vault,
    }
}

#[test]
fn test_absent_secret_touches_nothing() {
    let h = harness(Duration::ZERO);

    let outcome = h.controller.activate(1).unwrap();

    assert_eq!(outcome, Activation::SecretAbsent);
    assert_eq!(h.clipboard.write_count(), 0);
    assert_eq!(h.injector.pastes.load(Ordering::SeqCst), 0);
}

#[test]
fn test_empty_secret_treated_as_absent() {
    let h = harness(Duration::ZERO);
    h.vault.set("str1", "").unwrap();

    let outcome = h.controller.activate(1).unwrap();

    assert_eq!(outcome, Activation::SecretAbsent);
    assert_eq!(h.clipboard.write_count(), 0);
}

#[test]
fn test_vault_failure_treated_as_absent() {
    let settings = Settings {
        slot_count: 1,
        clear_after: Duration::ZERO,
        settle_delay: Duration::ZERO,
    };
    let table = Arc::new(SlotTable::with_count(1).unwrap());
    let clipboard = Arc::new(FakeClipboard::default());
    let injector = Arc::new(FakeInjector::default());
    let controller = PasteController::new(
        table,
        Arc::new(BrokenVault),
        clipboard.clone(),
        injector.clone(),
        &settings,
    );

    let outcome = controller.activate(1).unwrap();

    assert_eq!(outcome, Activation::SecretAbsent);
    assert_eq!(clipboard.write_count(), 0);
    assert_eq!(injector.pastes.load(Ordering::SeqCst), 0);
}

#[test]
fn test_paste_places_secret_on_clipboard() {
    let h = harness(Duration::ZERO);
    h.vault.set("str1", "hello").unwrap();

    let outcome = h.controller.activate(1).unwrap();

    assert_eq!(outcome, Activation::Pasted);
    assert_eq!(h.clipboard.current().as_deref(), Some("hello"));
    assert_eq!(h.injector.pastes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_secret_refetched_on_every_activation() {
    let h = harness(Duration::ZERO);
    h.vault.set("str1", "first").unwrap();
    h.controller.activate(1).unwrap();

    // Vault mutation takes effect without restart
    h.vault.set("str1", "second").unwrap();
    h.controller.activate(1).unwrap();

    assert_eq!(h.clipboard.current().as_deref(), Some("second"));
}

#[test]
fn test_unknown_slot_rejected() {
    let h = harness(Duration::ZERO);

    assert!(matches!(
        h.controller.activate(9),
        Err(PasteError::UnknownSlot(9))
    ));
}

#[test]
fn test_clipboard_cleared_after_delay_and_not_before() {
    let h = harness(Duration::from_millis(300));
    h.vault.set("str1", "hello").unwrap();

    h.controller.activate(1).unwrap();

    thread::sleep(Duration::from_millis(100));
    assert_eq!(
        h.clipboard.current().as_deref(),
        Some("hello"),
        "cleared materially before the configured delay"
    );

    thread::sleep(Duration::from_millis(600));
    assert_eq!(h.clipboard.current().as_deref(), Some(""));
    assert_eq!(h.clipboard.clear_count(), 1);
}

#[test]
fn test_rapid_activations_clear_once_after_the_last() {
    // Mirrors the two-slot scenario: second activation before the first
    // clear fires must leave the second secret intact at the moment the
    // first timer would have fired, and clear exactly once afterwards.
    let h = harness(Duration::from_millis(500));
    h.vault.set("str1", "alpha").unwrap();
    h.vault.set("str2", "beta").unwrap();

    h.controller.activate(1).unwrap();
    thread::sleep(Duration::from_millis(200));
    h.controller.activate(2).unwrap();

    // Past the first timer's deadline but short of the second's; the first
    // firing must have been a generation-mismatch no-op.
    thread::sleep(Duration::from_millis(400));
    assert_eq!(
        h.clipboard.current().as_deref(),
        Some("beta"),
        "first clear timer scrubbed the second secret"
    );

    thread::sleep(Duration::from_millis(600));
    assert_eq!(h.clipboard.current().as_deref(), Some(""));
    assert_eq!(h.clipboard.clear_count(), 1, "must clear exactly once");
}

#[test]
fn test_zero_clear_after_never_clears() {
    let h = harness(Duration::ZERO);
    h.vault.set("str1", "hello").unwrap();

    h.controller.activate(1).unwrap();

    thread::sleep(Duration::from_millis(200));
    assert_eq!(h.clipboard.current().as_deref(), Some("hello"));
    assert_eq!(h.clipboard.clear_count(), 0);
}

#[test]
fn test_clipboard_failure_aborts_without_arming_timer() {
    let h = harness(Duration::from_millis(50));
    h.vault.set("str1", "hello").unwrap();
    h.clipboard.fail.store(true, Ordering::SeqCst);

    assert!(matches!(
        h.controller.activate(1),
        Err(PasteError::ClipboardWrite(_))
    ));
    assert_eq!(h.injector.pastes.load(Ordering::SeqCst), 0);

    // No timer was armed by the failed sequence
    h.clipboard.fail.store(false, Ordering::SeqCst);
    thread::sleep(Duration::from_millis(200));
    assert_eq!(h.clipboard.clear_count(), 0);
}

#[test]
fn test_injection_failure_aborts_without_arming_timer() {
    let h = harness(Duration::from_millis(50));
    h.vault.set("str1", "hello").unwrap();
    h.injector.fail.store(true, Ordering::SeqCst);

    assert!(matches!(
        h.controller.activate(1),
        Err(PasteError::Injection(_))
    ));

    thread::sleep(Duration::from_millis(200));
    assert_eq!(h.clipboard.clear_count(), 0);
}

#[test]
fn test_controller_usable_after_failure() {
    let h = harness(Duration::ZERO);
    h.vault.set("str1", "hello").unwrap();

    h.injector.fail.store(true, Ordering::SeqCst);
    assert!(h.controller.activate(1).is_err());

    h.injector.fail.store(false, Ordering::SeqCst);
    assert_eq!(h.controller.activate(1).unwrap(), Activation::Pasted);
    assert_eq!(h.clipboard.current().as_deref(), Some("hello"));
}

#[test]
fn test_cancel_pending_clear_abandons_scrub() {
    let h = harness(Duration::from_millis(80));
    h.vault.set("str1", "hello").unwrap();

    h.controller.activate(1).unwrap();
    h.controller.cancel_pending_clear();

    thread::sleep(Duration::from_millis(300));
    assert_eq!(h.clipboard.current().as_deref(), Some("hello"));
    assert_eq!(h.clipboard.clear_count(), 0);
}
