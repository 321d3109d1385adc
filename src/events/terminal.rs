use crate::error::{AppError, AppResult};
use crate::state::{Focus, State, View};
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => (),
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Block until the next terminal event arrives.
    ///
    pub fn next(&self) -> AppResult<Event<KeyEvent>> {
        self.rx
            .recv()
            .map_err(|e| AppError::Terminal(format!("terminal event channel closed: {}", e)))
    }

    /// Handle a terminal event. Returns true if should continue or false if
    /// exit was requested.
    ///
    pub fn handle(&self, state: &mut State, event: Event<KeyEvent>) -> bool {
        match event {
            Event::Input(key) => handle_key(state, key),
            Event::Tick => {
                state.advance_spinner_index();
                true
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, event: KeyEvent) -> bool {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }

    if state.is_search_mode() {
        handle_search_key(state, code, modifiers);
        return true;
    }

    if state.has_selected_recipe() {
        return handle_detail_key(state, code);
    }

    match code {
        KeyCode::Char('q') => {
            debug!("Received application exit request.");
            return false;
        }
        KeyCode::Char('1') => {
            state.set_view(View::Home);
        }
        KeyCode::Char('2') => {
            state.set_view(View::Explore);
        }
        KeyCode::Char('3') => {
            state.set_view(View::Favorites);
        }
        KeyCode::Char(']') => {
            state.next_view();
        }
        KeyCode::Char('[') => {
            state.previous_view();
        }
        KeyCode::Tab => {
            state.toggle_focus();
        }
        KeyCode::Char('d') => {
            state.toggle_log();
        }
        KeyCode::Char('/') if *state.current_view() != View::Favorites => {
            state.enter_search_mode();
        }
        KeyCode::Char('m') if *state.current_view() == View::Home => {
            state.load_more();
        }
        _ => match state.current_focus() {
            Focus::Categories => handle_category_key(state, code),
            Focus::Recipes => handle_recipe_key(state, code),
        },
    }
    true
}

fn handle_search_key(state: &mut State, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Esc => {
            state.exit_search_mode();
        }
        KeyCode::Enter => {
            state.submit_search_input();
        }
        KeyCode::Backspace => {
            state.remove_search_char();
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            state.clear_search_input();
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            state.add_search_char(c);
        }
        _ => (),
    }
}

fn handle_detail_key(state: &mut State, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => return false,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            state.select_recipe(None);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_detail_down();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_detail_up();
        }
        KeyCode::Char('f') => {
            state.toggle_current_favorite();
        }
        KeyCode::Char('y') => {
            if let Some(recipe) = state.get_selected_recipe() {
                copy_to_clipboard(recipe.shopping_list());
            }
        }
        KeyCode::Char('d') => {
            state.toggle_log();
        }
        _ => (),
    }
    true
}

fn handle_category_key(state: &mut State, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            state.previous_category_index();
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            state.next_category_index();
        }
        KeyCode::Enter => {
            state.select_current_category();
        }
        _ => (),
    }
}

fn handle_recipe_key(state: &mut State, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => {
            state.next_recipe_index();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous_recipe_index();
        }
        KeyCode::Enter => {
            state.open_current_recipe();
        }
        KeyCode::Char('f') => {
            state.toggle_current_favorite();
        }
        _ => (),
    }
}

fn copy_to_clipboard(text: String) {
    let copied = ClipboardContext::new().and_then(|mut ctx| ctx.set_contents(text));
    match copied {
        Ok(()) => info!("Copied shopping list to clipboard."),
        Err(e) => warn!("Failed to copy to clipboard: {}", e),
    }
}
