//! Root application component
//!
//! The App struct implements the Component trait, acting as the root that
//! delegates event handling and rendering to child components. The scaffold
//! submission flow lives here: generate a plan, materialize it through the
//! vault, record history, and give the drawing-tool bridge its chance.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, HelpDialog, HomeComponent, HomeRenderContext, LectureDialog, QuitDialog,
    ResultDialog, ScaffoldSummary, SettingsDialog, SetupComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{AppMode, ScaffoldHistoryEntry, ScaffoldStatus};
use crate::model::history::ScaffoldHistory;
use crate::services::{
    build_scaffold_plan, find_tool, launch_tool, materialize, CommandIntent, DiskVault,
    DocumentStamp,
};
use anyhow::Result;
use chrono::Local;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use tracing::{error, warn};

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Loaded configuration, threaded into every generator call
    pub config: Config,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Recent scaffolds, newest first
    pub history: Vec<ScaffoldHistoryEntry>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message shown on the home screen
    pub status_message: Option<String>,

    // Child components
    pub home: HomeComponent,
    pub lecture_dialog: LectureDialog,
    pub settings_dialog: SettingsDialog,
    pub setup: SetupComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub result_dialog: ResultDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance, entering setup when no config exists
    pub fn new() -> App {
        let (mode, config) = match Config::load() {
            Some(config) => (AppMode::Running, config),
            None => (AppMode::Setup, Config::default()),
        };

        App {
            mode,
            config,
            modals: ModalStack::new(),
            history: ScaffoldHistory::load(),
            should_quit: false,
            status_message: None,
            home: HomeComponent::new(),
            lecture_dialog: LectureDialog::default(),
            settings_dialog: SettingsDialog::default(),
            setup: SetupComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            result_dialog: ResultDialog::default(),
        }
    }

    /// Handle a submitted lecture request end to end.
    ///
    /// Failures anywhere in the write sequence surface as a single generic
    /// status message; files already written stay in place and a re-run
    /// completes the scaffold.
    fn create_scaffold(&mut self) {
        let request = self.lecture_dialog.request();

        // The dialog blocks invalid requests; re-check anyway
        if let Some(problem) = request.validate() {
            self.status_message = Some(problem);
            return;
        }

        let stamp = DocumentStamp::now();
        let result = build_scaffold_plan(
            &request,
            &self.config.layout,
            &self.config.vault_root,
            &stamp,
        )
        .and_then(|plan| {
            let vault = DiskVault::new(".");
            materialize(&vault, &plan).map(|outcome| (plan, outcome))
        });

        match result {
            Ok((plan, outcome)) => {
                let mut summary = ScaffoldSummary {
                    folder: plan.folder.display().to_string(),
                    written: outcome
                        .written
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect(),
                    skipped: outcome
                        .skipped
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect(),
                    drawing_tool: None,
                    warning: None,
                };

                // Best-effort: hand the drawing to an external tool. A fresh
                // scene is opened; a pre-existing one goes to a converter so
                // the user's tool can migrate it to its current format.
                let intent = if outcome.skipped.contains(&plan.drawing.path) {
                    CommandIntent::ConvertDrawing
                } else {
                    CommandIntent::OpenDrawing
                };
                match find_tool(&self.config.external_tools, intent) {
                    Some(tool) => match launch_tool(tool, &plan.drawing.path) {
                        Ok(()) => summary.drawing_tool = Some(tool.name.clone()),
                        Err(e) => {
                            warn!(tool = %tool.name, error = %e, "external tool failed to launch");
                            summary.warning = Some(format!("Could not launch {}", tool.name));
                        }
                    },
                    None => {
                        if self.config.warn_missing_drawing_tool {
                            summary.warning = Some(
                                "No drawing tool configured; files were still created".to_string(),
                            );
                        }
                    }
                }

                let status = if outcome.skipped.is_empty() {
                    ScaffoldStatus::Created
                } else {
                    ScaffoldStatus::Partial
                };
                self.record_history(&request.course, &request.title, &summary.folder, status);

                self.status_message = Some(format!("Created {}", summary.folder));
                self.result_dialog.set(summary);
                self.modals.push(Modal::ScaffoldResult);
            }
            Err(e) => {
                error!(error = %e, course = %request.course, title = %request.title,
                       "scaffold creation failed");
                let folder = format!("{}/{}", self.config.vault_root, request.course);
                self.record_history(
                    &request.course,
                    &request.title,
                    &folder,
                    ScaffoldStatus::Failed,
                );
                self.status_message = Some("Failed to create lecture scaffold".to_string());
            }
        }
    }

    fn record_history(&mut self, course: &str, title: &str, folder: &str, status: ScaffoldStatus) {
        let entry = ScaffoldHistoryEntry {
            timestamp: Local::now(),
            course: course.to_string(),
            title: title.to_string(),
            folder: folder.to_string(),
            status,
        };
        self.history.insert(0, entry);
        if self.history.len() > ScaffoldHistory::MAX_ENTRIES {
            self.history.truncate(ScaffoldHistory::MAX_ENTRIES);
        }
        if let Err(e) = ScaffoldHistory::save(&self.history) {
            warn!(error = %e, "failed to persist scaffold history");
        }
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Setup => self.setup.handle_key_event(key),
            AppMode::Running => match self.modals.top() {
                Some(Modal::NewLecture) => self.lecture_dialog.handle_key_event(key),
                Some(Modal::Settings) => self.settings_dialog.handle_key_event(key),
                Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
                Some(Modal::ScaffoldResult) => self.result_dialog.handle_key_event(key),
                Some(Modal::Help) => self.help_dialog.handle_key_event(key),
                None => self.home.handle_key_event(key),
            },
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => self.should_quit = true,
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenNewLecture => {
                self.lecture_dialog.open(&self.config);
                self.status_message = None;
                self.modals.push(Modal::NewLecture);
            }
            Action::OpenSettings => {
                self.settings_dialog.open(&self.config);
                self.modals.push(Modal::Settings);
            }
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::NextEntry => self.home.select_next(self.history.len()),
            Action::PrevEntry => self.home.select_prev(self.history.len()),
            Action::LectureSubmitted => {
                self.modals.pop();
                self.create_scaffold();
            }
            Action::SettingsSaved => {
                if let Some(mut staged) = self.settings_dialog.take_staged() {
                    // The dialog does not edit external tools; keep them
                    staged.external_tools = self.config.external_tools.clone();
                    match staged.save() {
                        Ok(()) => {
                            self.config = staged;
                            self.status_message = Some("Settings saved".to_string());
                        }
                        Err(e) => {
                            error!(error = %e, "failed to save config");
                            self.status_message = Some("Failed to save settings".to_string());
                        }
                    }
                }
                self.modals.pop();
            }
            Action::SetupConfirm => {
                if let Some(config) = self.setup.get_config() {
                    self.config = config.clone();
                }
                self.mode = AppMode::Running;
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Setup => self.setup.draw(frame, area)?,
            AppMode::Running => {
                let ctx = HomeRenderContext {
                    config: &self.config,
                    history: &self.history,
                    status_message: self.status_message.as_deref(),
                };
                draw_home_screen(frame, area, &mut self.home, &ctx);

                // Modals render bottom to top
                let stack: Vec<Modal> = self.modals.iter().cloned().collect();
                for modal in stack {
                    match modal {
                        Modal::NewLecture => self.lecture_dialog.draw(frame, area)?,
                        Modal::Settings => self.settings_dialog.draw(frame, area)?,
                        Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                        Modal::ScaffoldResult => self.result_dialog.draw(frame, area)?,
                        Modal::Help => self.help_dialog.draw(frame, area)?,
                    }
                }
            }
        }
        Ok(())
    }
}
