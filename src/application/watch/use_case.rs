//! Asset watcher state machine

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

use notify::event::ModifyKind;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::generate::{GenerateOptions, GenerateUseCase};
use crate::config::GeneratorConfig;
use crate::domain::ports::{ManifestChecker, OutputWriter};
use crate::error::{AssetGenError, AssetGenResult};
use crate::infrastructure::{LocalOutputWriter, PubspecManifest};

use super::debounce::Debouncer;
use super::event::WatchEvent;
use super::filter::EventFilter;

/// Callback receiving watch events, possibly from the worker thread
pub type EventCallback = Arc<dyn Fn(WatchEvent) + Send + Sync>;

enum WatchMessage {
    Fs(notify::Result<Event>),
    Stop,
}

enum WatchState {
    Idle,
    Watching {
        watchers: Vec<RecommendedWatcher>,
        tx: Sender<WatchMessage>,
        stopping: Arc<AtomicBool>,
        worker: JoinHandle<()>,
    },
}

/// Regenerates output whenever files under the configured roots change.
///
/// `start` and `stop` are both idempotent. Errors raised by a triggered
/// regeneration are reported as [`WatchEvent::Error`] and never end the
/// session.
pub struct AssetWatcher<M, W>
where
    M: ManifestChecker + Send + Sync + 'static,
    W: OutputWriter + Send + Sync + 'static,
{
    generator: Arc<GenerateUseCase<M, W>>,
    config: Arc<GeneratorConfig>,
    on_event: EventCallback,
    state: WatchState,
}

impl AssetWatcher<PubspecManifest, LocalOutputWriter> {
    pub fn local<F>(project_root: impl Into<PathBuf>, config: GeneratorConfig, on_event: F) -> Self
    where
        F: Fn(WatchEvent) + Send + Sync + 'static,
    {
        Self::new(GenerateUseCase::local(project_root), config, on_event)
    }
}

impl<M, W> AssetWatcher<M, W>
where
    M: ManifestChecker + Send + Sync + 'static,
    W: OutputWriter + Send + Sync + 'static,
{
    /// Create an idle watcher. The configuration is switched to watch mode.
    pub fn new<F>(generator: GenerateUseCase<M, W>, config: GeneratorConfig, on_event: F) -> Self
    where
        F: Fn(WatchEvent) + Send + Sync + 'static,
    {
        Self {
            generator: Arc::new(generator),
            config: Arc::new(config.with_watch_mode(true)),
            on_event: Arc::new(on_event),
            state: WatchState::Idle,
        }
    }

    pub fn is_watching(&self) -> bool {
        matches!(self.state, WatchState::Watching { .. })
    }

    /// Run one generation, then subscribe to every existing root.
    ///
    /// Returns an error only if a subscription cannot be created.
    pub fn start(&mut self) -> AssetGenResult<()> {
        if self.is_watching() {
            return Ok(());
        }

        regenerate(&self.generator, &self.config, &self.on_event);

        let project_root = self.generator.project_root().to_path_buf();
        let output = self.generator.output_path(&self.config);
        let filter = EventFilter::new(&self.config, &project_root, &output)?;

        let (tx, rx) = channel();
        let mut watchers = Vec::new();
        let mut watched = Vec::new();

        for root in &self.config.roots {
            let dir = project_root.join(root);
            if !dir.is_dir() {
                (self.on_event)(WatchEvent::RootSkipped { root: root.clone() });
                continue;
            }

            let sender = tx.clone();
            let mut watcher = RecommendedWatcher::new(
                move |res: notify::Result<Event>| {
                    let _ = sender.send(WatchMessage::Fs(res));
                },
                Config::default(),
            )?;
            watcher.watch(&dir, RecursiveMode::Recursive)?;
            watchers.push(watcher);
            watched.push(root.clone());
        }

        (self.on_event)(WatchEvent::WatchStarted { roots: watched });

        let generator = Arc::clone(&self.generator);
        let config = Arc::clone(&self.config);
        let on_event = Arc::clone(&self.on_event);
        let stopping = Arc::new(AtomicBool::new(false));
        let worker_stopping = Arc::clone(&stopping);
        let worker = std::thread::Builder::new()
            .name("assetgen-watch".to_string())
            .spawn(move || run_loop(rx, worker_stopping, filter, generator, config, on_event))
            .map_err(|e| AssetGenError::Watch(e.to_string()))?;

        self.state = WatchState::Watching {
            watchers,
            tx,
            stopping,
            worker,
        };
        Ok(())
    }

    /// Cancel subscriptions and any pending regeneration.
    ///
    /// A regeneration already running is allowed to finish. A pending one is
    /// dropped, even if its deadline has passed while events were queued.
    pub fn stop(&mut self) {
        let WatchState::Watching {
            watchers,
            tx,
            stopping,
            worker,
        } = std::mem::replace(&mut self.state, WatchState::Idle)
        else {
            return;
        };

        stopping.store(true, Ordering::Release);
        drop(watchers);
        let _ = tx.send(WatchMessage::Stop);
        if worker.join().is_err() {
            (self.on_event)(WatchEvent::error("watch worker panicked"));
        }
        (self.on_event)(WatchEvent::Shutdown);
    }
}

impl<M, W> Drop for AssetWatcher<M, W>
where
    M: ManifestChecker + Send + Sync + 'static,
    W: OutputWriter + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop<M, W>(
    rx: Receiver<WatchMessage>,
    stopping: Arc<AtomicBool>,
    filter: EventFilter,
    generator: Arc<GenerateUseCase<M, W>>,
    config: Arc<GeneratorConfig>,
    on_event: EventCallback,
) where
    M: ManifestChecker,
    W: OutputWriter,
{
    let mut debouncer = Debouncer::default();

    loop {
        let message = match debouncer.remaining(Instant::now()) {
            Some(wait) => rx.recv_timeout(wait),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match message {
            Ok(WatchMessage::Fs(Ok(event))) => {
                if is_noise(&event.kind) {
                    continue;
                }
                for path in event.paths.iter().filter(|p| filter.accepts(p)) {
                    on_event(WatchEvent::FileChanged {
                        path: path.display().to_string(),
                    });
                    debouncer.touch(Instant::now());
                }
            }
            Ok(WatchMessage::Fs(Err(e))) => on_event(WatchEvent::error(e)),
            Ok(WatchMessage::Stop) | Err(RecvTimeoutError::Disconnected) => {
                debouncer.cancel();
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        // Stop may still be queued behind file events.
        if stopping.load(Ordering::Acquire) {
            debouncer.cancel();
            break;
        }

        if debouncer.fire_if_due(Instant::now()) {
            regenerate(&generator, &config, &on_event);
        }
    }
}

/// Access and metadata-only events do not change asset content or names.
fn is_noise(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Access(_) | EventKind::Modify(ModifyKind::Metadata(_))
    )
}

fn regenerate<M, W>(
    generator: &GenerateUseCase<M, W>,
    config: &GeneratorConfig,
    on_event: &EventCallback,
) where
    M: ManifestChecker,
    W: OutputWriter,
{
    on_event(WatchEvent::GenerationStarted);
    match generator.generate(config, &GenerateOptions::default()) {
        Ok(result) => on_event(WatchEvent::completed(&result)),
        Err(e) => on_event(WatchEvent::error(e)),
    }
}
