//! Browse screen task.
//!
//! A single task owns the [`FilterState`] and the catalog. Commands arrive
//! over a channel and the search debounce is one pinned `Sleep` that every
//! keystroke pushes back. Only a timer that survives the full debounce
//! window commits the search text.

use agromarket_core::taxonomy::{BreedGroup, Field};
use agromarket_core::{Catalog, CoreError, MarketItem};
use agromarket_flow::FilterState;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};
use tracing::{Instrument, debug, info_span, trace};

const COMMAND_BUFFER: usize = 64;

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("browse screen is closed")]
    Closed,
    #[error(transparent)]
    Rejected(#[from] CoreError),
}

#[derive(Debug)]
enum Command {
    Type(String),
    ClearSearch,
    FocusSearch,
    SelectType(String),
    SelectCategory(Option<String>),
    SelectLocation(Option<String>),
    SelectBreed(Option<String>),
    ToggleBreedGroup(BreedGroup),
    Reset,
    Snapshot(oneshot::Sender<BrowseView>),
}

impl Command {
    /// Commands that edit the search box.
    fn is_typing(&self) -> bool {
        matches!(self, Command::Type(_) | Command::ClearSearch)
    }
}

/// What the list renders at one instant.
#[derive(Debug, Clone)]
pub struct BrowseView {
    pub filter: FilterState,
    pub items: Vec<MarketItem>,
}

impl BrowseView {
    pub fn epoch(&self) -> u64 {
        self.filter.epoch()
    }

    /// Results header count.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// The list shows its empty state.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cloneable sender side of a running browse screen.
#[derive(Debug, Clone)]
pub struct BrowseHandle {
    tx: mpsc::Sender<Command>,
}

impl BrowseHandle {
    async fn send(&self, command: Command) -> Result<(), BrowseError> {
        self.tx.send(command).await.map_err(|_| BrowseError::Closed)
    }

    pub async fn type_text(&self, text: impl Into<String>) -> Result<(), BrowseError> {
        self.send(Command::Type(text.into())).await
    }

    pub async fn clear_search(&self) -> Result<(), BrowseError> {
        self.send(Command::ClearSearch).await
    }

    pub async fn focus_search(&self) -> Result<(), BrowseError> {
        self.send(Command::FocusSearch).await
    }

    pub async fn select_type(&self, value: &str) -> Result<(), BrowseError> {
        let value = Field::Type.resolve(value)?;
        self.send(Command::SelectType(value.to_string())).await
    }

    pub async fn select_category(&self, value: Option<&str>) -> Result<(), BrowseError> {
        let value = value.map(|v| Field::Category.resolve(v)).transpose()?;
        self.send(Command::SelectCategory(value.map(str::to_string)))
            .await
    }

    pub async fn select_location(&self, value: Option<&str>) -> Result<(), BrowseError> {
        let value = value.map(|v| Field::Location.resolve(v)).transpose()?;
        self.send(Command::SelectLocation(value.map(str::to_string)))
            .await
    }

    pub async fn select_breed(&self, value: Option<&str>) -> Result<(), BrowseError> {
        if let Some(breed) = value {
            if BreedGroup::of_breed(breed).is_none() {
                return Err(CoreError::UnknownValue {
                    kind: "breed",
                    value: breed.to_string(),
                }
                .into());
            }
        }
        self.send(Command::SelectBreed(value.map(str::to_string)))
            .await
    }

    pub async fn toggle_breed_group(&self, group: BreedGroup) -> Result<(), BrowseError> {
        self.send(Command::ToggleBreedGroup(group)).await
    }

    pub async fn reset(&self) -> Result<(), BrowseError> {
        self.send(Command::Reset).await
    }

    pub async fn snapshot(&self) -> Result<BrowseView, BrowseError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Snapshot(reply)).await?;
        rx.await.map_err(|_| BrowseError::Closed)
    }
}

pub struct BrowseScreen {
    state: FilterState,
    catalog: Catalog,
    debounce: Duration,
}

impl BrowseScreen {
    /// Starts the screen on the current Tokio runtime. The mount-time
    /// debounce is armed immediately. The task ends once every handle is
    /// dropped.
    pub fn spawn(catalog: Catalog, debounce: Duration) -> (BrowseHandle, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        let screen = Self {
            state: FilterState::new(),
            catalog,
            debounce,
        };
        let span = info_span!("browse", debounce_ms = debounce.as_millis() as u64);
        let task = tokio::spawn(screen.run(rx).instrument(span));
        (BrowseHandle { tx }, task)
    }

    async fn run(mut self, mut rx: mpsc::Receiver<Command>) {
        let timer = sleep(self.debounce);
        tokio::pin!(timer);
        let mut armed = true;

        loop {
            tokio::select! {
                command = rx.recv() => {
                    let Some(command) = command else { break };
                    let typing = command.is_typing();
                    if self.apply(command) {
                        timer.as_mut().reset(Instant::now() + self.debounce);
                        armed = true;
                    } else if !typing
                        && armed
                        && self.state.initial_commit_done()
                        && !self.state.has_pending_search()
                    {
                        trace!("pending search cancelled");
                        armed = false;
                    }
                }
                () = &mut timer, if armed => {
                    armed = false;
                    let text = self.state.search_text().to_string();
                    let bumped = self.state.commit_search(text);
                    debug!(
                        search = %self.state.debounced_search(),
                        epoch = self.state.epoch(),
                        bumped,
                        "search committed"
                    );
                }
            }
        }
        debug!("browse screen closed");
    }

    /// Applies one command. Returns whether the search box text changed.
    fn apply(&mut self, command: Command) -> bool {
        let state = &mut self.state;
        match command {
            Command::Type(text) => return state.set_search_text(text),
            Command::ClearSearch => return state.clear_search_text(),
            Command::FocusSearch => {
                state.focus_search();
            }
            Command::SelectType(value) => {
                state.select_type(&value);
            }
            Command::SelectCategory(value) => {
                state.select_category(value.as_deref());
            }
            Command::SelectLocation(value) => {
                state.select_location(value.as_deref());
            }
            Command::SelectBreed(value) => {
                state.select_breed(value.as_deref());
            }
            Command::ToggleBreedGroup(group) => state.toggle_breed_group(group),
            Command::Reset => {
                state.reset();
            }
            Command::Snapshot(reply) => {
                let view = BrowseView {
                    items: state.apply(&self.catalog).into_iter().cloned().collect(),
                    filter: state.clone(),
                };
                // Receiver gone means the caller stopped waiting.
                let _ = reply.send(view);
            }
        }
        false
    }
}
