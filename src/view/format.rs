//! Rich-text formatting commands and indicator state.
//!
//! Formatting is applied through the platform's active-selection editing
//! command and lands in the cell markup as a side effect; the indicator
//! booleans mirror the document selection. After issuing a command the
//! re-read is deferred one task so the command's effect is visible first.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use super::SharedState;
use crate::types::{FormatCommand, FormattingState};

/// Issue a formatting command against the active text selection.
///
/// The indicator state is refreshed immediately and again on the next
/// scheduling turn, once the command has taken effect.
pub(crate) fn handle_format(state: &Rc<RefCell<SharedState>>, command: FormatCommand) {
    let document = { state.borrow().dom.document.clone() };
    let _ = document.exec_command(command.command_id());
    refresh_formatting(state);
    schedule_refresh(state);
}

/// Read the platform's formatting state for the current selection.
pub(crate) fn read_formatting(document: &Document) -> FormattingState {
    FormattingState {
        bold: query_state(document, FormatCommand::Bold),
        italic: query_state(document, FormatCommand::Italic),
        underline: query_state(document, FormatCommand::Underline),
    }
}

fn query_state(document: &Document, command: FormatCommand) -> bool {
    document
        .query_command_state(command.command_id())
        .unwrap_or(false)
}

/// Recompute the indicator state and update the toolbar toggles.
pub(crate) fn refresh_formatting(state: &Rc<RefCell<SharedState>>) {
    let mut s = state.borrow_mut();
    let formatting = read_formatting(&s.dom.document);
    if formatting != s.formatting {
        s.formatting = formatting;
        s.dom.sync_formatting(formatting);
    }
}

/// Defer a formatting refresh to the next scheduling turn.
pub(crate) fn schedule_refresh(state: &Rc<RefCell<SharedState>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut s = state.borrow_mut();
    if s.format_refresh_closure.is_none() {
        let weak_state = Rc::downgrade(state);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(state) = weak_state.upgrade() {
                refresh_formatting(&state);
            }
        }) as Box<dyn FnMut()>);
        s.format_refresh_closure = Some(closure);
    }
    if let Some(callback) = s.format_refresh_closure.as_ref() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            0,
        );
    }
}

/// Subscribe to the document's selection-change notifications.
///
/// Returns the closure for the caller to own; the listener is removed again
/// when the widget is dropped.
pub(crate) fn subscribe_selection_change(
    state: &Rc<RefCell<SharedState>>,
) -> Closure<dyn FnMut(Event)> {
    let weak_state = Rc::downgrade(state);
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        if let Some(state) = weak_state.upgrade() {
            refresh_formatting(&state);
        }
    }) as Box<dyn FnMut(Event)>);

    let document = { state.borrow().dom.document.clone() };
    let _ = document
        .add_event_listener_with_callback("selectionchange", closure.as_ref().unchecked_ref());
    closure
}

/// A locale-aware ascending comparator backed by the platform collator.
///
/// Falls back to code-point ordering if the collator call fails.
pub(crate) fn locale_comparator() -> impl FnMut(&str, &str) -> Ordering {
    let collator = js_sys::Intl::Collator::new(&js_sys::Array::new(), &js_sys::Object::new());
    let compare = collator.compare();
    move |a: &str, b: &str| {
        let result = compare
            .call2(
                &JsValue::NULL,
                &JsValue::from_str(a),
                &JsValue::from_str(b),
            )
            .ok()
            .and_then(|v| v.as_f64());
        match result {
            Some(value) => value.partial_cmp(&0.0).unwrap_or(Ordering::Equal),
            None => a.cmp(b),
        }
    }
}
