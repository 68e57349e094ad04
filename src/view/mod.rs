//! The `GridEdit` widget — the DOM-facing entry point.
//!
//! Construction builds the grid markup (toolbar, status readout, header row
//! and column, editable cells) into a host container and registers all event
//! handlers; no manual JavaScript wiring is required. The model state lives
//! behind `Rc<RefCell<…>>` so the handler closures and the exported methods
//! share it.
//!
//! On non-wasm targets the widget compiles without any DOM and exposes the
//! same interaction surface for native tests.

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod format;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlElement;

#[cfg(target_arch = "wasm32")]
use crate::error::GridError;
use crate::gesture::Drag;
#[cfg(not(target_arch = "wasm32"))]
use crate::gesture::{DragEffect, ResizeAxis};
use crate::grid::GridState;
#[cfg(not(target_arch = "wasm32"))]
use crate::grid::NavKey;
use crate::layout::GridLayout;
use crate::types::{FormattingState, GridOptions};

/// Shared state accessed by the event handler closures (wasm only).
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) grid: GridState,
    pub(crate) layout: GridLayout,
    pub(crate) drag: Option<Drag>,
    pub(crate) formatting: FormattingState,
    /// Latest pointer position waiting for the next animation frame.
    pub(crate) pending_pointer: Option<(i32, i32)>,
    pub(crate) raf_scheduled: bool,
    pub(crate) pointer_frame_closure: Option<Closure<dyn FnMut()>>,
    pub(crate) format_refresh_closure: Option<Closure<dyn FnMut()>>,
    pub(crate) dom: dom::DomRefs,
}

/// The grid widget exported to JavaScript.
#[wasm_bindgen]
pub struct GridEdit {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    wiring: events::Wiring,

    // Non-wasm32 fields (for tests)
    #[cfg(not(target_arch = "wasm32"))]
    grid: GridState,
    #[cfg(not(target_arch = "wasm32"))]
    layout: GridLayout,
    #[cfg(not(target_arch = "wasm32"))]
    drag: Option<Drag>,
    #[cfg(not(target_arch = "wasm32"))]
    formatting: FormattingState,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridEdit {
    /// Mount a new grid widget into `container`.
    ///
    /// `options` is a plain object with recognized keys `rows`, `cols`, and
    /// `initialData` (cell references to markup); pass `undefined` for the
    /// defaults (15x18, empty).
    ///
    /// # Errors
    /// Returns an error if the options object is malformed or the markup
    /// cannot be built.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, options: JsValue) -> Result<GridEdit, JsValue> {
        console_error_panic_hook::set_once();

        let options: GridOptions = if options.is_undefined() || options.is_null() {
            GridOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| GridError::Config(e.to_string()))?
        };

        let grid = GridState::from_options(&options);
        let layout = GridLayout::new(grid.rows(), grid.cols());
        let dom = dom::DomRefs::build(&container, &grid, &layout)?;

        let state = Rc::new(RefCell::new(SharedState {
            grid,
            layout,
            drag: None,
            formatting: FormattingState::default(),
            pending_pointer: None,
            raf_scheduled: false,
            pointer_frame_closure: None,
            format_refresh_closure: None,
            dom,
        }));

        let wiring = events::wire(&state);

        {
            let s = state.borrow();
            s.dom.sync_layout(&s.layout);
            s.dom.sync_formatting(s.formatting);
        }
        let input = {
            let s = state.borrow();
            s.dom.cell_inputs.get(&s.grid.focus()).cloned()
        };
        if let Some(input) = input {
            let _ = input.focus();
        }

        Ok(GridEdit { state, wiring })
    }

    /// Current row count.
    pub fn rows(&self) -> u32 {
        self.state.borrow().grid.rows()
    }

    /// Current column count.
    pub fn cols(&self) -> u32 {
        self.state.borrow().grid.cols()
    }

    /// Read a cell's markup; unset cells yield the empty string.
    pub fn cell(&self, row: u32, col: u32) -> String {
        self.state.borrow().grid.cell(row, col).to_string()
    }

    /// Replace a cell's markup and update its element.
    #[wasm_bindgen(js_name = "setCell")]
    pub fn set_cell(&mut self, row: u32, col: u32, markup: &str) {
        let mut s = self.state.borrow_mut();
        s.grid.set_cell(row, col, markup);
        let markup = s.grid.cell(row, col).to_string();
        if let Some(input) = s.dom.cell_inputs.get(&(row, col)) {
            input.set_inner_html(&markup);
        }
    }

    /// The focused cell's label, e.g. "C4".
    #[wasm_bindgen(js_name = "focusedLabel")]
    pub fn focused_label(&self) -> String {
        let (row, col) = self.state.borrow().grid.focus();
        crate::cell_ref::cell_label(row, col)
    }

    /// The active selection as `[start_row, start_col, end_row, end_col]`.
    pub fn selection(&self) -> Option<Vec<u32>> {
        self.state
            .borrow()
            .grid
            .selection()
            .map(|sel| vec![sel.start_row, sel.start_col, sel.end_row, sel.end_col])
    }

    /// Inclusive membership test against the active selection.
    #[wasm_bindgen(js_name = "isSelected")]
    pub fn is_selected(&self, row: u32, col: u32) -> bool {
        self.state.borrow().grid.is_selected(row, col)
    }

    /// Insert an empty row at `index`, shifting rows at or below it down.
    #[wasm_bindgen(js_name = "insertRowAt")]
    pub fn insert_row_at(&mut self, index: u32) {
        events::insert_row(&self.state, index);
    }

    /// Insert an empty column at `index`, shifting columns at or right of it.
    #[wasm_bindgen(js_name = "insertColAt")]
    pub fn insert_col_at(&mut self, index: u32) {
        events::insert_col(&self.state, index);
    }

    /// Insert a row at the focused cell.
    #[wasm_bindgen(js_name = "addRow")]
    pub fn add_row(&mut self) {
        let row = { self.state.borrow().grid.focus().0 };
        events::insert_row(&self.state, row);
    }

    /// Insert a column at the focused cell.
    #[wasm_bindgen(js_name = "addColumn")]
    pub fn add_col(&mut self) {
        let col = { self.state.borrow().grid.focus().1 };
        events::insert_col(&self.state, col);
    }

    /// Sort the selected range; no-op without a selection.
    #[wasm_bindgen(js_name = "sortSelection")]
    pub fn sort_selection(&mut self) {
        events::sort_selection(&self.state);
    }

    /// Issue a formatting command ("bold", "italic", "underline").
    ///
    /// Unknown commands are ignored.
    pub fn format(&mut self, command: &str) {
        if let Some(command) = crate::types::FormatCommand::from_command_id(command) {
            format::handle_format(&self.state, command);
        }
    }

    /// Column width in logical pixels.
    #[wasm_bindgen(js_name = "colWidth")]
    pub fn col_width(&self, col: u32) -> f32 {
        self.state.borrow().layout.col_width(col)
    }

    /// Row height in logical pixels.
    #[wasm_bindgen(js_name = "rowHeight")]
    pub fn row_height(&self, row: u32) -> f32 {
        self.state.borrow().layout.row_height(row)
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for GridEdit {
    fn drop(&mut self) {
        let (document, root) = {
            let s = self.state.borrow();
            (s.dom.document.clone(), s.dom.root.clone())
        };
        self.wiring.detach(&document);
        root.remove();
    }
}

// ============================================================================
// Non-WASM32 Implementation (for tests)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl GridEdit {
    /// Create a widget without a DOM (native, for testing).
    #[must_use]
    pub fn new_test(options: &GridOptions) -> Self {
        let grid = GridState::from_options(options);
        let layout = GridLayout::new(grid.rows(), grid.cols());
        GridEdit {
            grid,
            layout,
            drag: None,
            formatting: FormattingState::default(),
        }
    }

    /// The model state.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// The layout state.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// The formatting indicator state.
    pub fn formatting(&self) -> FormattingState {
        self.formatting
    }

    /// Press at a surface position: anchors a selection on the cell under it.
    ///
    /// Positions outside every cell are ignored.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let (Some(row), Some(col)) = (self.layout.row_at_y(y), self.layout.col_at_x(x)) else {
            return;
        };
        let (drag, selection) = Drag::begin_select(row, col);
        self.drag = Some(drag);
        self.grid.set_selection(selection);
        self.grid.set_focus(row, col);
    }

    /// Press on a header resize handle.
    pub fn resize_down(&mut self, axis: ResizeAxis, index: u32, start_pos: f32) {
        self.drag = Some(Drag::begin_resize(axis, index, start_pos, &self.layout));
    }

    /// Pointer move during a drag.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let Some(drag) = self.drag else {
            return;
        };
        if let DragEffect::Selection(selection) = drag.apply_move(&mut self.layout, x, y) {
            self.grid.set_selection(selection);
        }
    }

    /// Release the in-flight drag.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Feed a keyboard key; returns whether the navigation handler consumed it.
    pub fn key_down(&mut self, key: &str) -> bool {
        let Some(nav) = NavKey::from_key(key) else {
            return false;
        };
        self.grid.navigate(nav);
        true
    }

    /// Capture a cell edit, as the input event handler would.
    pub fn input(&mut self, row: u32, col: u32, markup: &str) {
        self.grid.set_cell(row, col, markup);
    }

    /// Insert a row at `index`.
    pub fn insert_row_at(&mut self, index: u32) {
        self.grid.insert_row_at(index);
        self.layout.insert_row_at(index);
    }

    /// Insert a column at `index`.
    pub fn insert_col_at(&mut self, index: u32) {
        self.grid.insert_col_at(index);
        self.layout.insert_col_at(index);
    }

    /// Insert a row at the focused cell.
    pub fn add_row(&mut self) {
        self.insert_row_at(self.grid.focus().0);
    }

    /// Insert a column at the focused cell.
    pub fn add_col(&mut self) {
        self.insert_col_at(self.grid.focus().1);
    }

    /// Sort the selected range with code-point ordering.
    pub fn sort_selection(&mut self) -> bool {
        self.grid.sort_selection()
    }

    /// The focused cell's label, e.g. "C4".
    pub fn focused_label(&self) -> String {
        let (row, col) = self.grid.focus();
        crate::cell_ref::cell_label(row, col)
    }
}
