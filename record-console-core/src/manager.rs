//! The per-view record manager.

use record_console_services::{RecordFields, RecordService, ServiceError};

use crate::state::{Mode, StatusMessage};

/// Controller for one record view.
///
/// Owns everything the view shows: the table collection, the active form
/// record, the lookup/create mode, and the status line. State changes go
/// through the command methods below; the query methods expose it read-only.
///
/// Failures never escalate out of a command. Transport errors and service
/// rejections both land in the status message (or only in the log, for the
/// background listing path), and the view stays interactive.
///
/// Commands that await the network make no ordering promise against each
/// other: if a caller interleaves two fetches, the last one to resolve wins.
pub struct RecordManager<S: RecordService> {
    service: S,
    collection: Vec<S::Record>,
    active: S::Record,
    mode: Mode,
    message: Option<StatusMessage>,
}

impl<S: RecordService> RecordManager<S> {
    /// Create a manager over the given service. The collection starts empty;
    /// call [`load_all`](Self::load_all) to populate it.
    pub fn new(service: S) -> Self {
        Self {
            service,
            collection: Vec::new(),
            active: S::Record::default(),
            mode: Mode::Lookup,
            message: None,
        }
    }

    // ---- Queries ----

    /// The current table collection.
    pub fn records(&self) -> &[S::Record] {
        &self.collection
    }

    /// The record currently bound to the form.
    pub fn active_record(&self) -> &S::Record {
        &self.active
    }

    /// The current view mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The current status line, if any.
    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    // ---- Commands ----

    /// Fetch the collection and replace it wholesale.
    ///
    /// On failure the collection is left as it was and the condition is only
    /// logged; this path never writes the status line.
    pub async fn load_all(&mut self) {
        match self.service.list_records().await {
            Ok(records) => self.collection = records,
            Err(e) if e.is_expected() => log::warn!("Listing failed: {e}"),
            Err(e) => log::error!("Listing failed: {e}"),
        }
    }

    /// Overwrite one field of the active record. No validation.
    pub fn set_field(&mut self, name: &str, value: &str) {
        self.active.set_field(name, value);
    }

    /// Switch to create mode with an empty template, from any prior state.
    pub fn enter_create_mode(&mut self) {
        self.active = S::Record::default();
        self.mode = Mode::Create;
        self.message = Some(StatusMessage::CreatePrompt);
    }

    /// Abandon the draft and return to lookup mode with an empty template.
    pub fn cancel(&mut self) {
        self.active = S::Record::default();
        self.mode = Mode::Lookup;
        self.message = Some(StatusMessage::LookupMode);
    }

    /// Bind a row from the collection to the form.
    pub fn select_from_list(&mut self, record: &S::Record) {
        let id = record.id().unwrap_or_else(|| "?".to_string());
        self.active = record.clone();
        self.mode = Mode::Lookup;
        self.message = Some(StatusMessage::RecordLoaded { id });
    }

    /// Fetch one record by id and bind it to the form.
    ///
    /// A service rejection leaves the active record untouched and reports
    /// "not found"; a transport failure likewise leaves it untouched and
    /// reports a connectivity problem.
    pub async fn fetch_by_id(&mut self, id: &str) {
        match self.service.fetch_by_id(id).await {
            Ok(record) => {
                self.active = record;
                self.mode = Mode::Lookup;
                self.message = Some(StatusMessage::RecordLoaded { id: id.to_string() });
            }
            Err(ServiceError::RecordNotFound { .. }) => {
                self.message = Some(StatusMessage::NotFound { id: id.to_string() });
            }
            Err(e) => {
                log::warn!("Fetch failed: {e}");
                self.message = Some(StatusMessage::ConnectionFailed);
            }
        }
    }

    /// Submit the active record to the service.
    ///
    /// On success the status line echoes the identifier the service assigned
    /// (a placeholder when it assigned none), the view returns to lookup
    /// mode, and the collection is refreshed. On failure the mode and the
    /// draft are kept so the operator can correct and resubmit.
    pub async fn create(&mut self) {
        match self.service.create_record(&self.active).await {
            Ok(id) => {
                self.message = Some(StatusMessage::Created { id });
                self.mode = Mode::Lookup;
                self.load_all().await;
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Create failed: {e}");
                } else {
                    log::error!("Create failed: {e}");
                }
                self.message = Some(StatusMessage::CreateFailed);
            }
        }
    }
}
