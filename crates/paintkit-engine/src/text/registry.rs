use std::borrow::Cow;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock, TryLockError};

use state::InitCell;

use super::typeface::{FontLoadError, LoadTypeface, Typeface};

/// Resolves a font name to its raw bytes.
///
/// Implementations own where fonts live (embedded in the binary, on disk,
/// in an asset bundle). Lookups may block.
pub trait FontProvider: Send + Sync {
    fn open(&self, name: &str) -> Result<Cow<'static, [u8]>, FontLoadError>;
}

/// Fonts compiled into the binary, addressed by resource name.
///
/// Lookups prepend `prefix` to the requested name, so generated code can ask
/// for `"Body.ttf"` while the table stores `"Fonts.Body.ttf"`.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedFonts {
    prefix: String,
    fonts: HashMap<String, &'static [u8]>,
}

impl EmbeddedFonts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), fonts: HashMap::new() }
    }

    /// Registers font bytes under their full resource name.
    pub fn with_font(mut self, resource_name: impl Into<String>, bytes: &'static [u8]) -> Self {
        self.fonts.insert(resource_name.into(), bytes);
        self
    }
}

impl FontProvider for EmbeddedFonts {
    fn open(&self, name: &str) -> Result<Cow<'static, [u8]>, FontLoadError> {
        let resource = format!("{}{}", self.prefix, name);
        self.fonts
            .get(&resource)
            .map(|bytes| Cow::Borrowed(*bytes))
            .ok_or(FontLoadError::NotFound(resource))
    }
}

/// Fonts read from files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryFonts {
    root: PathBuf,
}

impl DirectoryFonts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FontProvider for DirectoryFonts {
    fn open(&self, name: &str) -> Result<Cow<'static, [u8]>, FontLoadError> {
        let path = self.root.join(name);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Cow::Owned(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FontLoadError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(FontLoadError::Io { name: name.to_owned(), message: e.to_string() }),
        }
    }
}

/// Per-name load slot. `None` until a load succeeds.
type FaceSlot<T> = Arc<RwLock<Option<Arc<T>>>>;

/// Name → typeface map, loaded lazily and never evicted.
///
/// Thread-safe. Each distinct name is loaded at most once: concurrent first
/// lookups of the same name serialize on that name's slot and later callers
/// observe the first caller's face. The map lock is only held to find or
/// insert a slot, never across font I/O, so lookups of other names proceed
/// while a font loads. Failed loads leave the slot empty and a later lookup
/// retries.
pub struct TypefaceRegistry<T = Typeface> {
    provider: Box<dyn FontProvider>,
    faces: RwLock<HashMap<String, FaceSlot<T>>>,
}

impl<T: LoadTypeface> TypefaceRegistry<T> {
    pub fn new(provider: impl FontProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            faces: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the face for `name`, loading it on first use.
    pub fn get(&self, name: &str) -> Result<Arc<T>, FontLoadError> {
        let slot = self.slot(name);
        if let Some(face) = slot.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
            return Ok(Arc::clone(face));
        }

        let mut face = slot.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have finished loading it while we waited.
        if let Some(face) = face.as_ref() {
            return Ok(Arc::clone(face));
        }

        let bytes = self.provider.open(name)?;
        let loaded = Arc::new(T::load(name, &bytes)?);
        log::debug!("typeface '{}' loaded ({} bytes)", name, bytes.len());

        *face = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Returns true when `name` has finished loading.
    pub fn contains(&self, name: &str) -> bool {
        let faces = self.faces.read().unwrap_or_else(PoisonError::into_inner);
        faces.get(name).is_some_and(|slot| is_loaded(slot))
    }

    /// Number of loaded faces.
    pub fn len(&self) -> usize {
        let faces = self.faces.read().unwrap_or_else(PoisonError::into_inner);
        faces.values().filter(|slot| is_loaded(slot)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, name: &str) -> FaceSlot<T> {
        {
            let faces = self.faces.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = faces.get(name) {
                return Arc::clone(slot);
            }
        }

        let mut faces = self.faces.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(faces.entry(name.to_owned()).or_default())
    }
}

/// A slot locked by an in-flight load counts as not loaded yet.
fn is_loaded<T>(slot: &RwLock<Option<Arc<T>>>) -> bool {
    match slot.try_read() {
        Ok(face) => face.is_some(),
        Err(TryLockError::Poisoned(e)) => e.into_inner().is_some(),
        Err(TryLockError::WouldBlock) => false,
    }
}

static REGISTRY: InitCell<TypefaceRegistry> = InitCell::new();

/// Installs the provider backing the process-wide typeface registry.
///
/// Only the first call takes effect; returns `false` if a provider was
/// already installed. Intended usage is early in `main`, before any drawing.
pub fn install_typeface_provider(provider: impl FontProvider + 'static) -> bool {
    let installed = REGISTRY.set(TypefaceRegistry::new(provider));
    if !installed {
        log::warn!("install_typeface_provider: provider already installed; ignoring");
    }
    installed
}

/// Looks up a typeface in the process-wide registry.
///
/// Fails with [`FontLoadError::NoProvider`] before
/// [`install_typeface_provider`] has been called.
pub fn typeface(name: &str) -> Result<Arc<Typeface>, FontLoadError> {
    REGISTRY.try_get().ok_or(FontLoadError::NoProvider)?.get(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Mutex};

    /// Stand-in face that records what it was parsed from.
    #[derive(Debug)]
    struct FakeFace {
        name: String,
        len: usize,
    }

    impl LoadTypeface for FakeFace {
        fn load(name: &str, bytes: &[u8]) -> Result<Self, FontLoadError> {
            if bytes.is_empty() {
                return Err(FontLoadError::Parse { name: name.into(), message: "empty".into() });
            }
            Ok(FakeFace { name: name.into(), len: bytes.len() })
        }
    }

    struct CountingProvider {
        inner: EmbeddedFonts,
        opens: Arc<AtomicUsize>,
    }

    impl FontProvider for CountingProvider {
        fn open(&self, name: &str) -> Result<Cow<'static, [u8]>, FontLoadError> {
            self.opens.fetch_add(1, Ordering::SeqCst);
            self.inner.open(name)
        }
    }

    fn registry() -> (TypefaceRegistry<FakeFace>, Arc<AtomicUsize>) {
        let opens = Arc::new(AtomicUsize::new(0));
        let inner = EmbeddedFonts::with_prefix("Fonts.")
            .with_font("Fonts.Body.ttf", b"body-bytes")
            .with_font("Fonts.Empty.ttf", b"");
        let provider = CountingProvider { inner, opens: Arc::clone(&opens) };
        (TypefaceRegistry::new(provider), opens)
    }

    // ── providers ─────────────────────────────────────────────────────────

    #[test]
    fn embedded_lookup_uses_prefix() {
        let fonts = EmbeddedFonts::with_prefix("Fonts.").with_font("Fonts.A.ttf", b"a");
        assert_eq!(&*fonts.open("A.ttf").unwrap(), b"a");
        assert_eq!(
            fonts.open("B.ttf").unwrap_err(),
            FontLoadError::NotFound("Fonts.B.ttf".into())
        );
    }

    #[test]
    fn directory_missing_file_is_not_found() {
        let fonts = DirectoryFonts::new(std::env::temp_dir().join("paintkit-no-such-dir"));
        assert!(matches!(fonts.open("Body.ttf"), Err(FontLoadError::NotFound(_))));
    }

    // ── registry ──────────────────────────────────────────────────────────

    #[test]
    fn loads_once_per_name() {
        let (reg, opens) = registry();
        let a = reg.get("Body.ttf").unwrap();
        let b = reg.get("Body.ttf").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(opens.load(Ordering::SeqCst), 1);
        assert_eq!(a.name, "Body.ttf");
        assert_eq!(a.len, b"body-bytes".len());
        assert!(reg.contains("Body.ttf"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn missing_font_is_an_error_and_not_cached() {
        let (reg, opens) = registry();
        assert!(matches!(reg.get("Title.ttf"), Err(FontLoadError::NotFound(_))));
        assert!(reg.get("Title.ttf").is_err());
        assert_eq!(opens.load(Ordering::SeqCst), 2);
        assert!(reg.is_empty());
    }

    #[test]
    fn parse_failure_propagates() {
        let (reg, _) = registry();
        assert!(matches!(reg.get("Empty.ttf"), Err(FontLoadError::Parse { .. })));
        assert!(!reg.contains("Empty.ttf"));
    }

    #[test]
    fn concurrent_first_lookups_load_once() {
        let (reg, opens) = registry();
        let reg = &reg;
        let faces: Vec<Arc<FakeFace>> = std::thread::scope(|s| {
            let handles: Vec<_> =
                (0..8).map(|_| s.spawn(move || reg.get("Body.ttf").unwrap())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(opens.load(Ordering::SeqCst), 1);
        assert!(faces.iter().all(|f| Arc::ptr_eq(f, &faces[0])));
    }

    #[test]
    fn loaded_faces_stay_reachable_while_another_loads() {
        struct Gated {
            inner: EmbeddedFonts,
            started: Mutex<mpsc::Sender<()>>,
            proceed: Mutex<mpsc::Receiver<()>>,
        }

        impl FontProvider for Gated {
            fn open(&self, name: &str) -> Result<Cow<'static, [u8]>, FontLoadError> {
                if name == "Slow.ttf" {
                    let _ = self.started.lock().unwrap().send(());
                    let _ = self.proceed.lock().unwrap().recv();
                }
                self.inner.open(name)
            }
        }

        let (started_tx, started_rx) = mpsc::channel();
        let (proceed_tx, proceed_rx) = mpsc::channel();
        let reg: TypefaceRegistry<FakeFace> = TypefaceRegistry::new(Gated {
            inner: EmbeddedFonts::new()
                .with_font("Body.ttf", b"body")
                .with_font("Slow.ttf", b"slow")
                .with_font("Title.ttf", b"title"),
            started: Mutex::new(started_tx),
            proceed: Mutex::new(proceed_rx),
        });
        reg.get("Body.ttf").unwrap();

        std::thread::scope(|s| {
            let slow = s.spawn(|| reg.get("Slow.ttf"));
            started_rx.recv().unwrap();

            // "Slow.ttf" is mid-load: other names still resolve and load.
            assert!(reg.get("Body.ttf").is_ok());
            assert!(reg.get("Title.ttf").is_ok());
            assert!(!reg.contains("Slow.ttf"));
            assert_eq!(reg.len(), 2);

            proceed_tx.send(()).unwrap();
            assert_eq!(slow.join().unwrap().unwrap().name, "Slow.ttf");
        });
        assert!(reg.contains("Slow.ttf"));
        assert_eq!(reg.len(), 3);
    }

    // ── process-wide registry ─────────────────────────────────────────────

    #[test]
    fn global_registry_first_install_wins() {
        install_typeface_provider(EmbeddedFonts::with_prefix("Fonts."));
        assert!(!install_typeface_provider(EmbeddedFonts::new()));
        assert!(matches!(typeface("Nope.ttf"), Err(FontLoadError::NotFound(_))));
    }
}
