//! Mouse, keyboard, and input event wiring for `GridEdit`.
//!
//! Listeners are registered once at construction and owned by the widget;
//! drag handlers live on the document (a drag may leave the widget) and are
//! gated by the shared drag state rather than added and removed per gesture.
//! Pointer moves are coalesced through `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, MouseEvent};

use super::{dom, format, SharedState};
use crate::gesture::{Drag, DragEffect, ResizeAxis};
use crate::grid::NavKey;

/// Every closure the widget registers, keyed by event name where the
/// listener must be explicitly removed on drop (document-level ones; the
/// widget-root listeners die with the root element).
pub(crate) struct Wiring {
    #[allow(dead_code)]
    root_mouse: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)>,
    #[allow(dead_code)]
    root_events: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
    #[allow(dead_code)]
    root_key: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    document_mouse: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)>,
    document_events: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
    #[allow(dead_code)]
    button_clicks: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

impl Wiring {
    /// Remove the document-level listeners. Called from the widget's `Drop`
    /// so a dropped widget cannot keep observing the page.
    pub(crate) fn detach(&self, document: &Document) {
        for (name, closure) in &self.document_mouse {
            let _ = document
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        for (name, closure) in &self.document_events {
            let _ = document
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}

/// Register all event handlers for the widget.
pub(crate) fn wire(state: &Rc<RefCell<SharedState>>) -> Wiring {
    let (root, document, format_buttons, add_row_button, add_col_button, sort_button) = {
        let s = state.borrow();
        (
            s.dom.root.clone(),
            s.dom.document.clone(),
            s.dom.format_buttons.clone(),
            s.dom.add_row_button.clone(),
            s.dom.add_col_button.clone(),
            s.dom.sort_button.clone(),
        )
    };

    let mut root_mouse = Vec::new();
    let mut root_events = Vec::new();
    let mut document_mouse = Vec::new();
    let mut document_events = Vec::new();
    let mut button_clicks = Vec::new();

    // Mouse down on the widget: resize handle or cell press.
    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            internal_mouse_down(&state, &event);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = root.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        root_mouse.push(("mousedown", closure));
    }

    // Drag tracking on the document: a gesture may leave the widget.
    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            internal_mouse_move(&state, &event);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ =
            document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        document_mouse.push(("mousemove", closure));
    }
    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            internal_mouse_up(&state);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ =
            document.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        document_mouse.push(("mouseup", closure));
    }

    // Keyboard navigation from within the cells.
    let root_key = {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            internal_key_down(&state, &event);
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let _ = root.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        Some(closure)
    };

    // Cell edits bubble up from the contenteditable elements.
    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            internal_input(&state, &event);
        }) as Box<dyn FnMut(Event)>);
        let _ = root.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        root_events.push(("input", closure));
    }

    // DOM focus drives the focus state (clicking a cell, programmatic focus).
    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            internal_focus_in(&state, &event);
        }) as Box<dyn FnMut(Event)>);
        let _ = root.add_event_listener_with_callback("focusin", closure.as_ref().unchecked_ref());
        root_events.push(("focusin", closure));
    }

    // Toolbar: formatting toggles.
    for (command, button) in format_buttons {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            format::handle_format(&state, command);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        button_clicks.push(closure);
    }

    // Toolbar: grid actions at the focused cell.
    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            let row = { state.borrow().grid.focus().0 };
            insert_row(&state, row);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = add_row_button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        button_clicks.push(closure);
    }
    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            let col = { state.borrow().grid.focus().1 };
            insert_col(&state, col);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = add_col_button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        button_clicks.push(closure);
    }
    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            sort_selection(&state);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ =
            sort_button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        button_clicks.push(closure);
    }

    // Formatting indicators track the document's text selection.
    document_events.push((
        "selectionchange",
        format::subscribe_selection_change(state),
    ));

    Wiring {
        root_mouse,
        root_events,
        root_key,
        document_mouse,
        document_events,
        button_clicks,
    }
}

/// Translate client coordinates into grid-surface coordinates.
fn surface_position(s: &SharedState, client_x: i32, client_y: i32) -> (f32, f32) {
    let rect = s.dom.table.get_bounding_client_rect();
    (
        client_x as f32 - rect.left() as f32 - dom::ROW_HEADER_WIDTH,
        client_y as f32 - rect.top() as f32 - dom::COL_HEADER_HEIGHT,
    )
}

fn attr_u32(element: &Element, name: &str) -> Option<u32> {
    element.get_attribute(name).and_then(|v| v.parse().ok())
}

fn internal_mouse_down(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let mut s = state.borrow_mut();
    let (x, y) = surface_position(&s, event.client_x(), event.client_y());

    // Resize handles take precedence over the cell underneath them.
    if let Ok(Some(handle)) = target.closest("[data-resize-axis]") {
        let axis = match handle.get_attribute("data-resize-axis").as_deref() {
            Some("col") => ResizeAxis::Col,
            Some("row") => ResizeAxis::Row,
            _ => return,
        };
        let Some(index) = attr_u32(&handle, "data-resize-index") else {
            return;
        };
        event.prevent_default();
        let start_pos = match axis {
            ResizeAxis::Col => x,
            ResizeAxis::Row => y,
        };
        let drag = Drag::begin_resize(axis, index, start_pos, &s.layout);
        s.drag = Some(drag);
        return;
    }

    // Cell press anchors a fresh 1x1 selection. Presses that resolve to no
    // cell (toolbar, headers, outside the grid) are ignored.
    let (Some(row), Some(col)) = (s.layout.row_at_y(y), s.layout.col_at_x(x)) else {
        return;
    };
    let (drag, selection) = Drag::begin_select(row, col);
    s.drag = Some(drag);
    s.grid.set_selection(selection);
    s.dom.sync_selection(&s.grid);
}

fn internal_mouse_move(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
    let schedule = {
        let mut s = state.borrow_mut();
        if s.drag.is_none() {
            return;
        }
        s.pending_pointer = Some((event.client_x(), event.client_y()));
        if s.raf_scheduled {
            false
        } else {
            s.raf_scheduled = true;
            true
        }
    };
    if schedule {
        schedule_pointer_frame(state);
    }
}

fn internal_mouse_up(state: &Rc<RefCell<SharedState>>) {
    let mut s = state.borrow_mut();
    s.drag = None;
    s.pending_pointer = None;
}

/// Apply the latest pointer position to the in-flight drag, at most once per
/// animation frame.
fn pointer_frame(state: &Rc<RefCell<SharedState>>) {
    let mut s = state.borrow_mut();
    s.raf_scheduled = false;
    let Some(drag) = s.drag else {
        return;
    };
    let Some((client_x, client_y)) = s.pending_pointer.take() else {
        return;
    };
    let (x, y) = surface_position(&s, client_x, client_y);
    match drag.apply_move(&mut s.layout, x, y) {
        DragEffect::Selection(selection) => {
            s.grid.set_selection(selection);
            s.dom.sync_selection(&s.grid);
        }
        DragEffect::Layout => s.dom.sync_layout(&s.layout),
        DragEffect::Ignored => {}
    }
}

fn schedule_pointer_frame(state: &Rc<RefCell<SharedState>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut s = state.borrow_mut();
    if s.pointer_frame_closure.is_none() {
        let weak_state = Rc::downgrade(state);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(state) = weak_state.upgrade() {
                pointer_frame(&state);
            }
        }) as Box<dyn FnMut()>);
        s.pointer_frame_closure = Some(closure);
    }
    if let Some(callback) = s.pointer_frame_closure.as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

fn internal_key_down(state: &Rc<RefCell<SharedState>>, event: &KeyboardEvent) {
    let Some(key) = NavKey::from_key(&event.key()) else {
        return;
    };
    if key == NavKey::Tab {
        // Suppress the browser's own tab traversal.
        event.prevent_default();
    }
    let input = {
        let mut s = state.borrow_mut();
        s.grid.navigate(key);
        s.dom.sync_focus_visuals(&s.grid);
        s.dom.cell_inputs.get(&s.grid.focus()).cloned()
    };
    // Focus after releasing the borrow: focus() re-enters via focusin.
    if let Some(input) = input {
        let _ = input.focus();
    }
}

fn internal_input(state: &Rc<RefCell<SharedState>>, event: &Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    let (Some(row), Some(col)) = (attr_u32(&target, "data-row"), attr_u32(&target, "data-col"))
    else {
        return;
    };
    let mut s = state.borrow_mut();
    let markup = target.inner_html();
    s.grid.set_cell(row, col, markup);
}

fn internal_focus_in(state: &Rc<RefCell<SharedState>>, event: &Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let Ok(Some(cell)) = target.closest("[data-row]") else {
        return;
    };
    let (Some(row), Some(col)) = (attr_u32(&cell, "data-row"), attr_u32(&cell, "data-col")) else {
        return;
    };
    let mut s = state.borrow_mut();
    s.grid.set_focus(row, col);
    s.dom.sync_focus_visuals(&s.grid);
}

/// Insert a row at `index` and rebuild the grid markup.
pub(crate) fn insert_row(state: &Rc<RefCell<SharedState>>, index: u32) {
    let input = {
        let mut s = state.borrow_mut();
        s.grid.insert_row_at(index);
        s.layout.insert_row_at(index);
        let SharedState {
            ref mut dom,
            ref grid,
            ref layout,
            ..
        } = *s;
        let _ = dom.rebuild_grid(grid, layout);
        dom.cell_inputs.get(&grid.focus()).cloned()
    };
    if let Some(input) = input {
        let _ = input.focus();
    }
}

/// Insert a column at `index` and rebuild the grid markup.
pub(crate) fn insert_col(state: &Rc<RefCell<SharedState>>, index: u32) {
    let input = {
        let mut s = state.borrow_mut();
        s.grid.insert_col_at(index);
        s.layout.insert_col_at(index);
        let SharedState {
            ref mut dom,
            ref grid,
            ref layout,
            ..
        } = *s;
        let _ = dom.rebuild_grid(grid, layout);
        dom.cell_inputs.get(&grid.focus()).cloned()
    };
    if let Some(input) = input {
        let _ = input.focus();
    }
}

/// Sort the selected range with the platform collator and refresh the cells.
pub(crate) fn sort_selection(state: &Rc<RefCell<SharedState>>) {
    let mut s = state.borrow_mut();
    let comparator = format::locale_comparator();
    if s.grid.sort_selection_with(comparator) {
        s.dom.refresh_cells(&s.grid);
    }
}
