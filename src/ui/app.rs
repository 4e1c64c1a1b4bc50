use crate::controller::UserListController;
use crate::ui::users::UsersState;
use tokio::sync::watch;

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Screen-level state around the controller: what is on screen, which card
/// is selected, spinner frame and the quit flag.
pub struct App {
    should_quit: bool,
    controller: UserListController,
    state_rx: watch::Receiver<UsersState>,
    /// Last state pulled from the controller; what gets rendered.
    view: UsersState,
    selected: usize,
    spinner_frame: usize,
    source_label: String,
}

impl App {
    pub fn new(controller: UserListController, source_label: impl Into<String>) -> Self {
        let state_rx = controller.subscribe();
        let view = state_rx.borrow().clone();
        Self {
            should_quit: false,
            controller,
            state_rx,
            view,
            selected: 0,
            spinner_frame: 0,
            source_label: source_label.into(),
        }
    }

    /// Kicks off the initial load.
    pub fn start(&mut self) {
        self.controller.start();
        self.sync_state();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &UsersState {
        &self.view
    }

    pub fn subscribe(&self) -> watch::Receiver<UsersState> {
        self.controller.subscribe()
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        self.sync_state();
    }

    pub fn on_state_changed(&mut self) {
        self.sync_state();
    }

    /// Restarts the load from whatever state the screen is in.
    pub fn reload(&mut self) {
        self.controller.load_users();
        self.sync_state();
    }

    /// Retry action of the error panel. Returns false outside `Error`.
    pub fn retry(&mut self) -> bool {
        if !matches!(self.view, UsersState::Error(_)) {
            return false;
        }
        self.reload();
        true
    }

    pub fn move_selection(&mut self, delta: isize) {
        let Some(len) = self.view.users().map(<[_]>::len) else {
            return;
        };
        if len == 0 {
            return;
        }
        let target = self.selected.saturating_add_signed(delta);
        self.selected = target.min(len - 1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        if let Some(users) = self.view.users() {
            self.selected = users.len().saturating_sub(1);
        }
    }

    fn sync_state(&mut self) {
        if !self.state_rx.has_changed().unwrap_or(false) {
            return;
        }
        self.view = self.state_rx.borrow_and_update().clone();
        if matches!(self.view, UsersState::Success(_)) {
            self.selected = 0;
        }
    }
}
