//! The session coordinator.
//!
//! Owns the aggregate and is its only writer. Editors report whole-section
//! values, which the coordinator folds in at one sync point. Collaborator work
//! (location lookup, photo ingestion, export) runs on worker threads that never
//! see the aggregate; their results come back as [`Event`]s over a channel and
//! are applied by [`Coordinator::pump`], interleaved with user input.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use export::Exporter;
use layout::{LayoutId, Surface};
use resume::{FieldValue, LOCATION, PROFILE_PICTURE, ResumeAggregate, SectionKey, SectionValue};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mount::MountedEditor;
use crate::notify::Notification;
use crate::sequencer::StepSequencer;

/// Longest single wait on the event channel before checking on workers
const WORKER_POLL: Duration = Duration::from_millis(50);

/// How a completed location lookup is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationPolicy {
    /// Always write the detected location, even over user input
    Overwrite,
    /// Write only if the user has not touched the field and it is still empty
    #[default]
    FillIfUntouched,
}

impl LocationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::FillIfUntouched => "fill-if-untouched",
        }
    }
}

/// Outcome of [`Coordinator::request_download`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadRequest {
    /// Export started in the background
    Started,
    /// An export is already pending; nothing was started
    Ignored,
}

/// Completion of background work.
#[derive(Debug)]
enum Event {
    Location(locate::Result<String>),
    Photo(resume::Result<String>),
    Export(export::Result<PathBuf>),
}

/// Owns one wizard session.
pub struct Coordinator {
    aggregate: ResumeAggregate,
    steps: StepSequencer<SectionKey>,
    mounted: MountedEditor,
    layout: LayoutId,

    locator: Option<Arc<locate::Client>>,
    policy: LocationPolicy,
    location_started: bool,
    location_touched: bool,

    exporter: Arc<dyn Exporter>,
    export_worker: Option<JoinHandle<()>>,

    tx: Sender<Event>,
    rx: Receiver<Event>,
    pending_location: bool,
    pending_photos: usize,
    pending_export: bool,

    notifications: Vec<Notification>,
}

impl Coordinator {
    /// Start a session over `aggregate` with the default step order.
    ///
    /// No location lookup is configured; see [`Coordinator::with_locator`].
    pub fn new(aggregate: ResumeAggregate, exporter: Box<dyn Exporter>) -> Self {
        let steps = StepSequencer::default();
        let mounted = MountedEditor::mount(*steps.current(), &aggregate);
        let (tx, rx) = mpsc::channel();

        Self {
            aggregate,
            steps,
            mounted,
            layout: LayoutId::default(),
            locator: None,
            policy: LocationPolicy::default(),
            location_started: false,
            location_touched: false,
            exporter: Arc::from(exporter),
            export_worker: None,
            tx,
            rx,
            pending_location: false,
            pending_photos: 0,
            pending_export: false,
            notifications: Vec::new(),
        }
    }

    /// Use a custom step order; the first step is mounted.
    #[must_use]
    pub fn with_steps(mut self, steps: StepSequencer<SectionKey>) -> Self {
        self.steps = steps;
        self.remount();
        self
    }

    /// Enable location lookup through `client`.
    #[must_use]
    pub fn with_locator(mut self, client: locate::Client) -> Self {
        self.locator = Some(Arc::new(client));
        self
    }

    /// Set how detected locations are applied.
    #[must_use]
    pub fn with_location_policy(mut self, policy: LocationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the initial preview layout.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutId) -> Self {
        self.layout = layout;
        self
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The resume as persisted so far
    pub fn aggregate(&self) -> &ResumeAggregate {
        &self.aggregate
    }

    /// End the session and keep the resume
    pub fn into_aggregate(self) -> ResumeAggregate {
        self.aggregate
    }

    /// Step cursor
    pub fn steps(&self) -> &StepSequencer<SectionKey> {
        &self.steps
    }

    /// The editor for the active step
    pub fn mounted(&self) -> &MountedEditor {
        &self.mounted
    }

    /// Section of the active step
    pub fn current_section(&self) -> SectionKey {
        *self.steps.current()
    }

    /// Active preview layout
    pub fn layout(&self) -> LayoutId {
        self.layout
    }

    /// Switch the preview layout.
    pub fn set_layout(&mut self, layout: LayoutId) {
        log::debug!("Layout set to {layout}");
        self.layout = layout;
    }

    /// Render the current aggregate with the active layout.
    pub fn preview(&self) -> Surface {
        layout::render(&self.aggregate, &self.layout.descriptor())
    }

    /// Drain queued notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Replace one section wholesale; last write wins.
    pub fn on_section_update(&mut self, value: SectionValue) {
        self.aggregate.replace(value);
    }

    /// Edit one field of the mounted section and fold the report in.
    pub fn update_field(&mut self, index: usize, field: &str, value: FieldValue) -> Result<()> {
        let report = self.mounted.update_field(index, field, value)?;
        if self
            .mounted
            .personal_info()
            .is_some_and(resume::PersonalInfoEditor::location_touched)
        {
            self.location_touched = true;
        }
        self.on_section_update(report);
        Ok(())
    }

    /// Add a blank entry to the mounted section; nothing is persisted yet.
    pub fn add_entry(&mut self) -> Result<usize> {
        self.mounted.add_entry()
    }

    /// Remove an entry from the mounted section.
    ///
    /// Returns false when the entry was kept because it is the last one.
    pub fn remove_entry(&mut self, index: usize) -> Result<bool> {
        match self.mounted.remove_entry(index)? {
            Some(report) => {
                self.on_section_update(report);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Read a photo file in the background and attach it to personal info.
    pub fn upload_photo(&mut self, path: &Path) -> Result<()> {
        let mounted = self.mounted.key();
        if mounted != SectionKey::PersonalInfo {
            return Err(Error::WrongStep {
                operation: "photo upload",
                expected: SectionKey::PersonalInfo,
                mounted,
            });
        }

        let path = path.to_path_buf();
        let tx = self.tx.clone();
        self.pending_photos += 1;
        std::thread::spawn(move || {
            let _ = tx.send(Event::Photo(resume::photo::ingest_file(&path)));
        });
        Ok(())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Validate the mounted section and move to the next step.
    ///
    /// Returns `Ok(false)` at the last step. Missing required fields come back
    /// as an advisory error and the step does not change.
    pub fn submit(&mut self) -> Result<bool> {
        self.mounted.submit()?;
        Ok(self.advance())
    }

    /// Move to the next step without validation.
    pub fn advance(&mut self) -> bool {
        let moved = self.steps.advance();
        if moved {
            self.remount();
        }
        moved
    }

    /// Move to the previous step.
    pub fn retreat(&mut self) -> bool {
        let moved = self.steps.retreat();
        if moved {
            self.remount();
        }
        moved
    }

    fn remount(&mut self) {
        self.mounted = MountedEditor::mount(*self.steps.current(), &self.aggregate);
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// Start the one location lookup of this session.
    ///
    /// Returns false if no locator is configured or a lookup already ran.
    pub fn start_location_lookup(&mut self) -> bool {
        if self.location_started {
            return false;
        }
        let Some(client) = self.locator.clone() else {
            return false;
        };

        self.location_started = true;
        self.pending_location = true;
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            let _ = tx.send(Event::Location(client.locate()));
        });
        true
    }

    /// Snapshot the preview now and export it in the background.
    pub fn request_download(&mut self) -> DownloadRequest {
        if self.pending_export {
            log::debug!("Download already in progress; ignoring request");
            return DownloadRequest::Ignored;
        }

        let surface = self.preview();
        let exporter = Arc::clone(&self.exporter);
        let tx = self.tx.clone();
        self.pending_export = true;
        self.export_worker = Some(std::thread::spawn(move || {
            let _ = tx.send(Event::Export(exporter.export(&surface)));
        }));
        DownloadRequest::Started
    }

    /// True while an export is pending
    pub fn is_busy(&self) -> bool {
        self.pending_export
    }

    /// True while a location lookup is pending
    pub fn is_locating(&self) -> bool {
        self.pending_location
    }

    fn has_pending(&self) -> bool {
        self.pending_location || self.pending_export || self.pending_photos > 0
    }

    /// Apply every completed background event; returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = self.drain();
        if self.reap_export_worker() {
            applied += 1;
        }
        applied
    }

    fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Settle an export whose worker exited without reporting.
    ///
    /// Returns true when a lost export was turned into a failure.
    fn reap_export_worker(&mut self) -> bool {
        if !self
            .export_worker
            .as_ref()
            .is_some_and(JoinHandle::is_finished)
        {
            return false;
        }
        let worker = self.export_worker.take();

        // A finished worker has already sent whatever it was going to send
        self.drain();
        if !self.pending_export {
            return false;
        }

        if let Some(worker) = worker
            && worker.join().is_err()
        {
            log::error!("Export worker panicked");
        }
        self.pending_export = false;
        self.notifications
            .push(Notification::error("Error", "Failed to generate the document."));
        true
    }

    /// Block until the pending export has been applied or `timeout` passes.
    ///
    /// Returns true when no export is pending.
    pub fn wait_export(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        self.pump();
        while self.pending_export {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match self.rx.recv_timeout(remaining.min(WORKER_POLL)) {
                Ok(event) => self.apply(event),
                Err(RecvTimeoutError::Timeout) => {
                    self.reap_export_worker();
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        !self.pending_export
    }

    /// Block until all background work has been applied or `timeout` passes.
    ///
    /// Returns true when nothing is left pending.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        self.pump();
        while self.has_pending() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match self.rx.recv_timeout(remaining.min(WORKER_POLL)) {
                Ok(event) => self.apply(event),
                Err(RecvTimeoutError::Timeout) => {
                    self.reap_export_worker();
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        !self.has_pending()
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::Location(result) => {
                self.pending_location = false;
                self.apply_location(result);
            }
            Event::Photo(result) => {
                self.pending_photos = self.pending_photos.saturating_sub(1);
                self.apply_photo(result);
            }
            Event::Export(result) => {
                self.pending_export = false;
                self.apply_export(result);
            }
        }
    }

    fn apply_location(&mut self, result: locate::Result<String>) {
        let location = match result {
            Ok(location) => location,
            Err(e) => {
                log::warn!("Location detection failed: {e}");
                self.notifications.push(Notification::warning(
                    "Location detection failed",
                    "Could not automatically detect your location",
                ));
                return;
            }
        };

        if self.policy == LocationPolicy::FillIfUntouched {
            let current = self.aggregate.personal_info.location.trim();
            if self.location_touched || !current.is_empty() {
                log::info!("Keeping user-entered location; detected '{location}' not applied");
                return;
            }
        }

        self.aggregate.personal_info.location.clone_from(&location);
        if let Some(editor) = self.mounted.personal_info_mut()
            && let Err(e) = editor.apply_external(LOCATION, FieldValue::text(location.clone()))
        {
            log::warn!("Could not update the personal info draft: {e}");
        }

        self.notifications.push(Notification::info(
            "Location detected",
            format!("Your location has been automatically set to: {location}"),
        ));
    }

    fn apply_photo(&mut self, result: resume::Result<String>) {
        let uri = match result {
            Ok(uri) => uri,
            Err(e) => {
                log::warn!("Photo upload failed: {e}");
                self.notifications
                    .push(Notification::error("Photo upload failed", e.to_string()));
                return;
            }
        };

        self.aggregate.personal_info.profile_picture = Some(uri.clone());
        if let Some(editor) = self.mounted.personal_info_mut()
            && let Err(e) = editor.apply_external(PROFILE_PICTURE, FieldValue::text(uri))
        {
            log::warn!("Could not update the personal info draft: {e}");
        }
        self.notifications
            .push(Notification::success("Photo added", "Your profile picture has been updated"));
    }

    fn apply_export(&mut self, result: export::Result<PathBuf>) {
        match result {
            Ok(path) => {
                self.notifications.push(Notification::success(
                    "Success",
                    format!("Resume saved to {}", path.display()),
                ));
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                self.notifications
                    .push(Notification::error("Error", "Failed to generate the document."));
            }
        }
    }
}
