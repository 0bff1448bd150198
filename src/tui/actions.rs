use crossterm::event::{KeyCode, KeyEvent};

use crate::error::Result;

use super::app::{App, PopupState, Section, StatusKind};
use super::input_handler::{handle_text_input, InputResult};

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Handle popup-specific keys first
    if let Some(popup) = app.popup.clone() {
        return handle_popup_key(app, key, popup);
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => {
            // Leave the detail view or clear a search; quit from top level
            if !app.back() {
                app.quit();
            }
        }

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') => app.select_first(),
        KeyCode::Char('G') => app.select_last(),

        // Open the folder under the cursor
        KeyCode::Enter => app.activate(),
        KeyCode::Backspace => {
            app.back();
        }

        // Section switching
        KeyCode::Tab => {
            let next = app.section.next();
            app.set_section(next);
        }
        KeyCode::BackTab => {
            let previous = app.section.previous();
            app.set_section(previous);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(section) = Section::ALL.get(index) {
                app.set_section(*section);
            }
        }
        KeyCode::Char('0') => app.set_section(Section::ALL[9]),
        KeyCode::Char('s') => app.set_section(Section::Stats),

        // Pagination
        KeyCode::Char('h') | KeyCode::Left => app.previous_page(),
        KeyCode::Char('l') | KeyCode::Right => app.next_page(),

        // Search
        KeyCode::Char('/') => {
            if app.section.searchable() {
                app.popup = Some(PopupState::Search {
                    input: String::new(),
                    cursor: 0,
                });
            } else {
                app.set_status("This page has no search".to_string(), StatusKind::Info);
            }
        }

        // Copy the selected item's link
        KeyCode::Char('y') => app.copy_selected_link(),

        // Reload content from disk
        KeyCode::Char('r') => {
            app.refresh()?;
            app.set_status("Content reloaded".to_string(), StatusKind::Success);
        }

        // Help
        KeyCode::Char('?') => {
            app.popup = Some(PopupState::Help);
        }

        _ => {}
    }

    Ok(())
}

fn handle_popup_key(app: &mut App, key: KeyEvent, popup: PopupState) -> Result<()> {
    match popup {
        PopupState::Help => {
            // Any key dismisses help
            app.popup = None;
        }
        PopupState::Search { input, cursor } => match handle_text_input(key, &input, cursor) {
            InputResult::Changed { input, cursor } => {
                app.popup = Some(PopupState::Search { input, cursor });
            }
            InputResult::Submit => {
                app.popup = None;
                app.apply_search(&input);
            }
            InputResult::Cancel => {
                app.popup = None;
            }
            InputResult::Ignored => {}
        },
    }

    Ok(())
}
