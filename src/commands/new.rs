//! The interactive resume wizard.

use anyhow::{Context as _, Result};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use layout::LayoutId;
use resume::{FieldKind, FieldSpec, FieldValue, MAX_LEVEL, ResumeAggregate, SectionKey};
use std::path::PathBuf;
use std::time::Duration;
use wizard::{Coordinator, DownloadRequest};

use crate::Context;
use crate::cli::NewArgs;
use crate::commands::{load_resume, terminal_width};
use crate::{progress, ui};

/// How long to wait for background work when leaving the wizard
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// How long the download spinner waits before handing control back
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Action {
    EditField,
    AddEntry,
    RemoveEntry,
    UploadPhoto,
    Next,
    Previous,
    Preview,
    ChangeLayout,
    Download,
    Save,
    Quit,
}

impl Action {
    fn label(self) -> &'static str {
        match self {
            Self::EditField => "Edit a field",
            Self::AddEntry => "Add entry",
            Self::RemoveEntry => "Remove entry",
            Self::UploadPhoto => "Upload photo",
            Self::Next => "Next step",
            Self::Previous => "Previous step",
            Self::Preview => "Show preview",
            Self::ChangeLayout => "Change layout",
            Self::Download => "Download",
            Self::Save => "Save progress (JSON)",
            Self::Quit => "Quit",
        }
    }
}

/// Run the wizard
pub fn run(ctx: &Context, args: NewArgs) -> Result<()> {
    let config = &ctx.config;

    let aggregate = match &args.from {
        Some(path) => load_resume(path)?,
        None => ResumeAggregate::new(),
    };
    let layout = args.layout.map_or(config.preview.layout, LayoutId::from);
    let exporter = export::for_format(
        config.export.format,
        config.export.options(args.output.as_deref()),
    );

    let mut session = Coordinator::new(aggregate, exporter)
        .with_steps(config.wizard.sequencer()?)
        .with_layout(layout)
        .with_location_policy(config.location.policy);

    if config.location.enabled && !args.no_locate {
        let client =
            locate::Client::with_endpoint(&config.location.endpoint, config.location.timeout());
        session = session.with_locator(client);
        session.start_location_lookup();
    }

    if !ctx.quiet {
        ui::banner();
    }
    if ctx.verbose > 0 {
        ui::kv("Layout", layout.display_name());
        ui::kv("Location policy", config.location.policy.as_str());
    }

    let mut saved_to = args.from.clone();
    let mut dirty = false;

    loop {
        flush_notifications(&mut session);
        ui::progress(session.steps());
        show_draft(&session);

        let actions = available_actions(&session);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let default = actions.iter().position(|a| *a == Action::EditField).unwrap_or(0);
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(default)
            .interact()
            .context("Failed to read action")?;

        // Events that finished while the prompt was open
        session.pump();

        match actions[choice] {
            Action::EditField => dirty |= edit_field(&mut session)?,
            Action::AddEntry => {
                let index = session.add_entry()?;
                let noun = session.current_section().entry_noun();
                ui::info(&format!("Added {noun} #{}; fill it in to keep it", index + 1));
            }
            Action::RemoveEntry => dirty |= remove_entry(&mut session)?,
            Action::UploadPhoto => {
                let path: String = Input::new()
                    .with_prompt("Image file")
                    .interact_text()
                    .context("Failed to read photo path")?;
                session.upload_photo(&crate::paths::expand(path.trim()))?;
                dirty = true;
            }
            Action::Next => match session.submit() {
                Ok(_) => {}
                Err(e) if e.is_advisory() => {
                    ui::warn("Please fill in the required fields:");
                    let noun = session.current_section().entry_noun();
                    let repeatable = session.current_section().is_repeatable();
                    for missing in e.missing_fields() {
                        if repeatable {
                            ui::dim(&format!("{noun} #{}: {}", missing.index + 1, missing.label));
                        } else {
                            ui::dim(missing.label);
                        }
                    }
                }
                Err(e) => return Err(e.into()),
            },
            Action::Previous => {
                session.retreat();
            }
            Action::Preview => show_preview(&session),
            Action::ChangeLayout => change_layout(&mut session)?,
            Action::Download => download(&mut session),
            Action::Save => {
                if let Some(path) = save(&session, saved_to.as_ref())? {
                    saved_to = Some(path);
                    dirty = false;
                }
            }
            Action::Quit => {
                if dirty
                    && Confirm::new()
                        .with_prompt("Save your resume before quitting?")
                        .default(true)
                        .interact()
                        .context("Failed to read confirmation")?
                {
                    save(&session, saved_to.as_ref())?;
                }
                break;
            }
        }
    }

    if !session.wait_idle(SHUTDOWN_GRACE) {
        log::warn!("Background work still running at exit");
    }
    flush_notifications(&mut session);
    Ok(())
}

fn available_actions(session: &Coordinator) -> Vec<Action> {
    let key = session.current_section();
    let steps = session.steps();
    let mut actions = vec![Action::EditField];

    if key.is_repeatable() {
        actions.push(Action::AddEntry);
        if session.mounted().can_remove() {
            actions.push(Action::RemoveEntry);
        }
    } else {
        actions.push(Action::UploadPhoto);
    }
    if !steps.is_last() {
        actions.push(Action::Next);
    }
    if !steps.is_first() {
        actions.push(Action::Previous);
    }
    actions.extend([
        Action::Preview,
        Action::ChangeLayout,
        Action::Download,
        Action::Save,
        Action::Quit,
    ]);
    actions
}

fn flush_notifications(session: &mut Coordinator) {
    session.pump();
    for note in session.take_notifications() {
        ui::notify(&note);
    }
}

/// Short label for one draft entry: "Skill #2 (Rust)"
fn entry_label(session: &Coordinator, index: usize) -> String {
    let key = session.current_section();
    let mounted = session.mounted();
    let first = mounted
        .fields()
        .first()
        .and_then(|spec| mounted.field(index, spec.name).ok())
        .filter(|v| !v.is_empty());

    match first {
        Some(value) => format!("{} #{} ({value})", key.entry_noun(), index + 1),
        None => format!("{} #{}", key.entry_noun(), index + 1),
    }
}

fn field_line(spec: &FieldSpec, value: Option<&FieldValue>) -> String {
    let marker = if spec.required { "*" } else { " " };
    let shown = match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => spec.placeholder.dimmed().to_string(),
    };
    format!("{marker} {}: {shown}", spec.label)
}

fn show_draft(session: &Coordinator) {
    let key = session.current_section();
    let mounted = session.mounted();
    ui::header(key.title());

    for index in 0..mounted.len() {
        if key.is_repeatable() {
            ui::section(&entry_label(session, index));
        }
        for spec in mounted.fields() {
            let value = mounted.field(index, spec.name).ok();
            println!("  {}", field_line(spec, value.as_ref()));
        }
    }

    if key == SectionKey::PersonalInfo {
        let has_photo = session.aggregate().personal_info.profile_picture.is_some();
        ui::kv("  Photo", if has_photo { "attached" } else { "none" });
    }
    if session.is_locating() {
        ui::dim("Detecting location...");
    }
}

fn pick_entry(session: &Coordinator, prompt: &str) -> Result<usize> {
    let len = session.mounted().len();
    if len == 1 {
        return Ok(0);
    }
    let labels: Vec<String> = (0..len).map(|i| entry_label(session, i)).collect();
    Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .context("Failed to read entry selection")
}

/// Returns true when the aggregate changed
fn edit_field(session: &mut Coordinator) -> Result<bool> {
    let index = pick_entry(session, "Which entry?")?;

    let fields = session.mounted().fields();
    let labels: Vec<String> = fields
        .iter()
        .map(|spec| {
            let value = session.mounted().field(index, spec.name).ok();
            field_line(spec, value.as_ref())
        })
        .collect();
    let field = Select::new()
        .with_prompt("Which field?")
        .items(&labels)
        .default(0)
        .interact()
        .context("Failed to read field selection")?;
    let spec = &fields[field];

    let current = session.mounted().field(index, spec.name)?;
    let value = match spec.kind {
        FieldKind::Text | FieldKind::LongText => {
            let text: String = Input::new()
                .with_prompt(spec.label)
                .with_initial_text(current.as_text().unwrap_or_default())
                .allow_empty(true)
                .interact_text()
                .with_context(|| format!("Failed to read {}", spec.label))?;
            FieldValue::Text(text)
        }
        FieldKind::Level { max } => {
            let max = max.min(MAX_LEVEL);
            let levels: Vec<String> = (0..=max).map(|n| format!("{n}/{max}")).collect();
            let selected = match current {
                FieldValue::Level(n) => usize::from(n.min(max)),
                FieldValue::Text(_) => 0,
            };
            let choice = Select::new()
                .with_prompt(spec.label)
                .items(&levels)
                .default(selected)
                .interact()
                .with_context(|| format!("Failed to read {}", spec.label))?;
            FieldValue::Level(u8::try_from(choice).unwrap_or(max))
        }
    };

    session.update_field(index, spec.name, value)?;
    Ok(true)
}

fn remove_entry(session: &mut Coordinator) -> Result<bool> {
    let index = pick_entry(session, "Remove which entry?")?;
    let label = entry_label(session, index);
    if session.remove_entry(index)? {
        ui::success(&format!("Removed {label}"));
        Ok(true)
    } else {
        ui::warn("At least one entry is required");
        Ok(false)
    }
}

fn show_preview(session: &Coordinator) {
    let surface = session.preview();
    ui::section(&format!("Preview ({})", session.layout().display_name()));
    println!();
    print!("{}", layout::text::write(&surface, terminal_width()));
}

fn change_layout(session: &mut Coordinator) -> Result<()> {
    let labels: Vec<&str> = LayoutId::ALL.iter().map(|l| l.display_name()).collect();
    let current = LayoutId::ALL
        .iter()
        .position(|l| *l == session.layout())
        .unwrap_or(0);
    let choice = Select::new()
        .with_prompt("Layout")
        .items(&labels)
        .default(current)
        .interact()
        .context("Failed to read layout")?;
    session.set_layout(LayoutId::ALL[choice]);
    Ok(())
}

fn download(session: &mut Coordinator) {
    match session.request_download() {
        DownloadRequest::Ignored => ui::dim("A download is already in progress"),
        DownloadRequest::Started => {
            let pb = progress::spinner("Generating document...");
            let finished = session.wait_export(DOWNLOAD_TIMEOUT);
            progress::finish_clear(&pb);
            if !finished {
                ui::warn("The document is still being generated; you will be notified when it is ready");
            }
        }
    }
}

/// Ask for a path and write the aggregate; returns the path written
fn save(session: &Coordinator, previous: Option<&PathBuf>) -> Result<Option<PathBuf>> {
    let initial = previous.map_or_else(|| "resume.json".to_string(), |p| p.display().to_string());
    let path: String = Input::new()
        .with_prompt("Save to")
        .with_initial_text(initial)
        .interact_text()
        .context("Failed to read save path")?;
    let path = crate::paths::expand(path.trim());

    match session.aggregate().save(&path) {
        Ok(()) => {
            ui::success(&format!("Saved {}", path.display()));
            Ok(Some(path))
        }
        Err(e) => {
            ui::error(&format!("Could not save: {e}"));
            Ok(None)
        }
    }
}
