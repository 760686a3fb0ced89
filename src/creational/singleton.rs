//! Singleton Pattern
//!
//! Six ways to guarantee a single instance, from the simplest to the one the
//! standard library hands you for free:
//!
//! 1. Eager: built at start-up, before anyone asks (`lazy_static` forced by
//!    `EagerSingleton::init`).
//! 2. Lazy, unsynchronized: only sound when the instance never leaves its
//!    thread, so here it is a `thread_local!` and every thread gets its own.
//! 3. Locked: a `Mutex` taken on every single access.
//! 4. Double-checked locking: an atomic fast path, and the lock only while
//!    the instance does not exist yet.
//! 5. Holder: a function-local `OnceLock`, the runtime does the work.
//! 6. Enum: a one-variant enum whose initializer runs once via `Once`.
//!
//! Every variant counts its constructions so callers can check the contract:
//! one instance per process (per thread for the lazy variant).

use std::cell::{Cell, OnceCell};
use std::io::{self, Write};
use std::ptr;
use std::rc::Rc;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};
use std::sync::{Mutex, Once, OnceLock, PoisonError};

use lazy_static::lazy_static;
use tracing::info;

/// A singleton that knows how often it has been constructed.
pub trait Counted {
    /// Line announcing a fresh construction.
    const CREATED: &'static str;

    fn creations() -> usize;
}

thread_local! {
    // Set by the thread that actually runs a constructor.
    static BUILT_HERE: Cell<bool> = const { Cell::new(false) };
}

fn next_serial(counter: &AtomicUsize, variant: &'static str) -> usize {
    let serial = counter.fetch_add(1, Ordering::SeqCst) + 1;
    BUILT_HERE.with(|built| built.set(true));
    info!(variant, serial, "singleton constructed");
    serial
}

// ============================================================================
// 1. Eager initialization
// ============================================================================

static EAGER_CREATIONS: AtomicUsize = AtomicUsize::new(0);

pub struct EagerSingleton {
    serial: usize,
}

lazy_static! {
    static ref EAGER: EagerSingleton = EagerSingleton {
        serial: next_serial(&EAGER_CREATIONS, "eager"),
    };
}

impl EagerSingleton {
    /// Forces construction. Call once during start-up.
    pub fn init() {
        lazy_static::initialize(&EAGER);
    }

    pub fn instance() -> &'static EagerSingleton {
        &EAGER
    }

    pub fn serial(&self) -> usize {
        self.serial
    }
}

impl Counted for EagerSingleton {
    const CREATED: &'static str = "Eager Singleton Created!";

    fn creations() -> usize {
        EAGER_CREATIONS.load(Ordering::SeqCst)
    }
}

// ============================================================================
// 2. Lazy initialization, thread-confined
// ============================================================================

static LAZY_CREATIONS: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static LAZY: OnceCell<Rc<LazySingleton>> = const { OnceCell::new() };
}

/// `Rc` is `!Send`, so the compiler refuses to let this instance cross a
/// thread boundary. A second thread gets a second instance.
pub struct LazySingleton {
    serial: usize,
}

impl LazySingleton {
    pub fn instance() -> Rc<LazySingleton> {
        LAZY.with(|cell| {
            let instance = cell.get_or_init(|| {
                Rc::new(LazySingleton {
                    serial: next_serial(&LAZY_CREATIONS, "lazy"),
                })
            });
            Rc::clone(instance)
        })
    }

    pub fn serial(&self) -> usize {
        self.serial
    }
}

impl Counted for LazySingleton {
    const CREATED: &'static str = "Lazy Singleton Created!";

    fn creations() -> usize {
        LAZY_CREATIONS.load(Ordering::SeqCst)
    }
}

// ============================================================================
// 3. Lock on every access
// ============================================================================

static THREAD_SAFE_CREATIONS: AtomicUsize = AtomicUsize::new(0);
static THREAD_SAFE: Mutex<Option<&'static ThreadSafeSingleton>> = Mutex::new(None);

pub struct ThreadSafeSingleton {
    serial: usize,
}

impl ThreadSafeSingleton {
    pub fn instance() -> &'static ThreadSafeSingleton {
        // Construction cannot panic halfway through, so a poisoned slot is still consistent.
        let mut slot = THREAD_SAFE.lock().unwrap_or_else(PoisonError::into_inner);
        *slot.get_or_insert_with(|| {
            let leaked: &'static ThreadSafeSingleton = Box::leak(Box::new(ThreadSafeSingleton {
                serial: next_serial(&THREAD_SAFE_CREATIONS, "thread-safe"),
            }));
            leaked
        })
    }

    pub fn serial(&self) -> usize {
        self.serial
    }
}

impl Counted for ThreadSafeSingleton {
    const CREATED: &'static str = "Thread-Safe Singleton Created!";

    fn creations() -> usize {
        THREAD_SAFE_CREATIONS.load(Ordering::SeqCst)
    }
}

// ============================================================================
// 4. Double-checked locking
// ============================================================================

static DOUBLE_CHECKED_CREATIONS: AtomicUsize = AtomicUsize::new(0);
static DOUBLE_CHECKED: AtomicPtr<DoubleCheckedSingleton> = AtomicPtr::new(ptr::null_mut());
static DOUBLE_CHECKED_LOCK: Mutex<()> = Mutex::new(());

pub struct DoubleCheckedSingleton {
    serial: usize,
}

impl DoubleCheckedSingleton {
    pub fn instance() -> &'static DoubleCheckedSingleton {
        let mut instance = DOUBLE_CHECKED.load(Ordering::Acquire);
        if instance.is_null() {
            let _guard = DOUBLE_CHECKED_LOCK
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            instance = DOUBLE_CHECKED.load(Ordering::Acquire);
            if instance.is_null() {
                instance = Box::into_raw(Box::new(DoubleCheckedSingleton {
                    serial: next_serial(&DOUBLE_CHECKED_CREATIONS, "double-checked"),
                }));
                DOUBLE_CHECKED.store(instance, Ordering::Release);
            }
        }
        // SAFETY: the pointer is non-null, came from `Box::into_raw`, and is
        // never freed. The Release store pairs with the Acquire loads, so the
        // pointee is fully initialized before any reader can observe it.
        unsafe { &*instance }
    }

    pub fn serial(&self) -> usize {
        self.serial
    }
}

impl Counted for DoubleCheckedSingleton {
    const CREATED: &'static str = "Double-Checked Singleton Created!";

    fn creations() -> usize {
        DOUBLE_CHECKED_CREATIONS.load(Ordering::SeqCst)
    }
}

// ============================================================================
// 5. Holder idiom (deferred static initialization)
// ============================================================================

static HOLDER_CREATIONS: AtomicUsize = AtomicUsize::new(0);

pub struct HolderSingleton {
    serial: usize,
}

impl HolderSingleton {
    pub fn instance() -> &'static HolderSingleton {
        static INSTANCE: OnceLock<HolderSingleton> = OnceLock::new();
        INSTANCE.get_or_init(|| HolderSingleton {
            serial: next_serial(&HOLDER_CREATIONS, "holder"),
        })
    }

    pub fn serial(&self) -> usize {
        self.serial
    }
}

impl Counted for HolderSingleton {
    const CREATED: &'static str = "Bill Pugh Singleton Created!";

    fn creations() -> usize {
        HOLDER_CREATIONS.load(Ordering::SeqCst)
    }
}

// ============================================================================
// 6. Enum singleton
// ============================================================================

static ENUM_CREATIONS: AtomicUsize = AtomicUsize::new(0);
static ENUM_INIT: Once = Once::new();

#[derive(Debug, PartialEq, Eq)]
pub enum EnumSingleton {
    Instance,
}

impl EnumSingleton {
    pub fn instance() -> &'static EnumSingleton {
        ENUM_INIT.call_once(|| {
            next_serial(&ENUM_CREATIONS, "enum");
        });
        &EnumSingleton::Instance
    }

    pub fn show_message(&self) -> String {
        "Enum Singleton Method Called!".to_string()
    }
}

impl Counted for EnumSingleton {
    const CREATED: &'static str = "Enum Singleton Created!";

    fn creations() -> usize {
        ENUM_CREATIONS.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Runs `access` and announces the construction if this call performed it.
///
/// Threads that lose the first-access race see the instance appear but never
/// run the constructor themselves, so they stay silent.
fn announce<T: Counted, R>(out: &mut dyn Write, access: impl FnOnce() -> R) -> io::Result<R> {
    BUILT_HERE.with(|built| built.set(false));
    let instance = access();
    if BUILT_HERE.with(|built| built.replace(false)) {
        writeln!(out, "{}", T::CREATED)?;
    }
    Ok(instance)
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Testing Different Singleton Implementations:")?;
    writeln!(out)?;

    announce::<EagerSingleton, _>(out, EagerSingleton::init)?;
    announce::<LazySingleton, _>(out, LazySingleton::instance)?;
    announce::<ThreadSafeSingleton, _>(out, ThreadSafeSingleton::instance)?;
    announce::<DoubleCheckedSingleton, _>(out, DoubleCheckedSingleton::instance)?;
    announce::<HolderSingleton, _>(out, HolderSingleton::instance)?;
    let enum_instance = announce::<EnumSingleton, _>(out, EnumSingleton::instance)?;

    writeln!(out, "{}", enum_instance.show_message())?;
    Ok(())
}
