//! # wizard
//!
//! Session orchestration for the vitae resume wizard.
//!
//! - [`StepSequencer`]: a 1-based cursor over an ordered, non-empty list of
//!   steps with clamped navigation and per-step status
//! - [`MountedEditor`]: the single section editor the active step shows
//! - [`Coordinator`]: owns the [`resume::ResumeAggregate`], folds editor
//!   reports into it, and runs the location and export collaborators in the
//!   background
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use export::MockExporter;
//! use locate::{Client, GeoLocation, MockBackend};
//! use resume::{ResumeAggregate, SectionKey};
//! use wizard::Coordinator;
//!
//! let backend = MockBackend::succeeding(GeoLocation::new("Lima", "Lima", "Peru"));
//! let mut session = Coordinator::new(ResumeAggregate::new(), Box::new(MockExporter::new()))
//!     .with_locator(Client::with_backend(Box::new(backend)));
//!
//! session.start_location_lookup();
//! session.update_field(0, "fullName", "Ana".into()).unwrap();
//! session.wait_idle(Duration::from_secs(5));
//!
//! assert_eq!(session.aggregate().personal_info.location, "Lima, Lima, Peru");
//! session.advance();
//! assert_eq!(session.current_section(), SectionKey::Education);
//! ```

#![warn(clippy::all)]

pub mod coordinator;
pub mod error;
pub mod mount;
pub mod notify;
pub mod sequencer;

pub use coordinator::{Coordinator, DownloadRequest, LocationPolicy};
pub use error::{Error, Result};
pub use mount::MountedEditor;
pub use notify::{Notification, NotificationLevel};
pub use sequencer::{DEFAULT_STEPS, StepIndicator, StepSequencer, StepStatus};
