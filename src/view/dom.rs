//! Retained DOM for the grid widget.
//!
//! Builds the toolbar, status readout, and grid table into the host container
//! and applies targeted updates when the model changes. Row/column insertion
//! rebuilds the table wholesale; everything else is an attribute or class
//! update on existing elements.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlDivElement, HtmlElement, HtmlTableCellElement,
    HtmlTableElement, HtmlTableRowElement, HtmlTableSectionElement,
};

use crate::cell_ref::{cell_label, column_label};
use crate::error::{GridError, Result};
use crate::grid::GridState;
use crate::layout::GridLayout;
use crate::types::{FormatCommand, FormattingState};

/// Width of the row-number header column in pixels.
pub(crate) const ROW_HEADER_WIDTH: f32 = 48.0;

/// Height of the column-label header row in pixels.
pub(crate) const COL_HEADER_HEIGHT: f32 = 28.0;

/// Handles to every element the widget updates after construction.
pub(crate) struct DomRefs {
    pub(crate) document: Document,
    pub(crate) root: HtmlDivElement,
    pub(crate) status: HtmlDivElement,
    pub(crate) table: HtmlTableElement,
    pub(crate) thead_row: HtmlTableRowElement,
    pub(crate) tbody: HtmlTableSectionElement,
    pub(crate) format_buttons: Vec<(FormatCommand, HtmlButtonElement)>,
    pub(crate) add_row_button: HtmlButtonElement,
    pub(crate) add_col_button: HtmlButtonElement,
    pub(crate) sort_button: HtmlButtonElement,
    pub(crate) col_headers: Vec<HtmlTableCellElement>,
    pub(crate) row_headers: Vec<HtmlTableCellElement>,
    pub(crate) row_elements: Vec<HtmlTableRowElement>,
    pub(crate) cells: HashMap<(u32, u32), HtmlTableCellElement>,
    pub(crate) cell_inputs: HashMap<(u32, u32), HtmlElement>,
}

impl DomRefs {
    /// Build the widget subtree into `container`.
    pub(crate) fn build(
        container: &HtmlElement,
        grid: &GridState,
        layout: &GridLayout,
    ) -> Result<DomRefs> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GridError::Dom("no document available".into()))?;

        let root = create_div(&document, "gridedit")?;

        // Toolbar: formatting toggles, grid actions, focused-cell readout.
        let toolbar = create_div(&document, "gridedit-toolbar")?;
        let mut format_buttons = Vec::new();
        for command in FormatCommand::ALL {
            let button = create_button(&document, "gridedit-btn", command.caption())?;
            append(&toolbar, &button)?;
            format_buttons.push((command, button));
        }
        let add_row_button = create_button(&document, "gridedit-btn", "Add Row")?;
        let add_col_button = create_button(&document, "gridedit-btn", "Add Column")?;
        let sort_button = create_button(&document, "gridedit-btn gridedit-btn-sort", "Sort")?;
        append(&toolbar, &add_row_button)?;
        append(&toolbar, &add_col_button)?;
        append(&toolbar, &sort_button)?;
        let status = create_div(&document, "gridedit-status")?;
        append(&toolbar, &status)?;
        append(&root, &toolbar)?;

        // Scrollable body holding the table.
        let body = create_div(&document, "gridedit-body")?;
        set_style(&body, "overflow", "auto");
        set_style(&body, "position", "relative");

        let table: HtmlTableElement = create_element(&document, "table")?
            .dyn_into()
            .map_err(|_| GridError::Dom("table element cast".into()))?;
        table.set_class_name("gridedit-table");
        set_style(&table, "table-layout", "fixed");
        set_style(&table, "border-collapse", "collapse");

        let thead: HtmlTableSectionElement = create_element(&document, "thead")?
            .dyn_into()
            .map_err(|_| GridError::Dom("thead element cast".into()))?;
        let thead_row: HtmlTableRowElement = create_element(&document, "tr")?
            .dyn_into()
            .map_err(|_| GridError::Dom("tr element cast".into()))?;
        append(&thead, &thead_row)?;
        let tbody: HtmlTableSectionElement = create_element(&document, "tbody")?
            .dyn_into()
            .map_err(|_| GridError::Dom("tbody element cast".into()))?;
        append(&table, &thead)?;
        append(&table, &tbody)?;
        append(&body, &table)?;
        append(&root, &body)?;
        append(container, &root)?;

        let mut refs = DomRefs {
            document,
            root,
            status,
            table,
            thead_row,
            tbody,
            format_buttons,
            add_row_button,
            add_col_button,
            sort_button,
            col_headers: Vec::new(),
            row_headers: Vec::new(),
            row_elements: Vec::new(),
            cells: HashMap::new(),
            cell_inputs: HashMap::new(),
        };
        refs.rebuild_grid(grid, layout)?;
        Ok(refs)
    }

    /// Rebuild the header row and table body from the model.
    ///
    /// Used at construction and after row/column insertion; re-fills every
    /// element handle.
    pub(crate) fn rebuild_grid(&mut self, grid: &GridState, layout: &GridLayout) -> Result<()> {
        self.thead_row.set_inner_html("");
        self.tbody.set_inner_html("");
        self.col_headers.clear();
        self.row_headers.clear();
        self.row_elements.clear();
        self.cells.clear();
        self.cell_inputs.clear();

        // Corner header above the row numbers.
        let corner = self.create_header_cell("gridedit-corner")?;
        set_style(&corner, "width", &px(ROW_HEADER_WIDTH));
        set_style(&corner, "height", &px(COL_HEADER_HEIGHT));
        append(&self.thead_row, &corner)?;

        for col in 0..grid.cols() {
            let th = self.create_header_cell("gridedit-col-header")?;
            th.set_text_content(Some(&column_label(col)));
            set_style(&th, "width", &px(layout.col_width(col)));
            set_style(&th, "position", "relative");
            let handle = self.create_resize_handle("col", col)?;
            append(&th, &handle)?;
            append(&self.thead_row, &th)?;
            self.col_headers.push(th);
        }

        for row in 0..grid.rows() {
            let tr: HtmlTableRowElement = create_element(&self.document, "tr")?
                .dyn_into()
                .map_err(|_| GridError::Dom("tr element cast".into()))?;
            set_style(&tr, "height", &px(layout.row_height(row)));

            let th = self.create_header_cell("gridedit-row-header")?;
            th.set_text_content(Some(&(row + 1).to_string()));
            set_style(&th, "position", "relative");
            let handle = self.create_resize_handle("row", row)?;
            append(&th, &handle)?;
            append(&tr, &th)?;
            self.row_headers.push(th);

            for col in 0..grid.cols() {
                let td: HtmlTableCellElement = create_element(&self.document, "td")?
                    .dyn_into()
                    .map_err(|_| GridError::Dom("td element cast".into()))?;
                td.set_class_name("gridedit-cell");

                let input = create_div(&self.document, "gridedit-input")?;
                input.set_content_editable("true");
                let _ = input.set_attribute("data-row", &row.to_string());
                let _ = input.set_attribute("data-col", &col.to_string());
                input.set_inner_html(grid.cell(row, col));
                set_style(&input, "min-height", "100%");
                set_style(&input, "outline", "none");
                append(&td, &input)?;
                append(&tr, &td)?;

                self.cells.insert((row, col), td);
                self.cell_inputs.insert((row, col), input.unchecked_into());
            }

            append(&self.tbody, &tr)?;
            self.row_elements.push(tr);
        }

        self.sync_selection(grid);
        self.sync_focus_visuals(grid);
        Ok(())
    }

    /// Apply current column widths and row heights to the markup.
    pub(crate) fn sync_layout(&self, layout: &GridLayout) {
        for (col, th) in self.col_headers.iter().enumerate() {
            let width = layout.col_width(u32::try_from(col).unwrap_or(u32::MAX));
            set_style(th, "width", &px(width));
        }
        for (row, tr) in self.row_elements.iter().enumerate() {
            let height = layout.row_height(u32::try_from(row).unwrap_or(u32::MAX));
            set_style(tr, "height", &px(height));
        }
    }

    /// Toggle the selected class from the current selection rectangle.
    pub(crate) fn sync_selection(&self, grid: &GridState) {
        for (&(row, col), td) in &self.cells {
            let _ = td
                .class_list()
                .toggle_with_force("is-selected", grid.is_selected(row, col));
        }
    }

    /// Update the status readout and header highlights for the focused cell.
    pub(crate) fn sync_focus_visuals(&self, grid: &GridState) {
        let (row, col) = grid.focus();
        self.status
            .set_text_content(Some(&format!("Focused Cell: {}", cell_label(row, col))));
        for (i, th) in self.col_headers.iter().enumerate() {
            let focused = u32::try_from(i).map(|i| i == col).unwrap_or(false);
            let _ = th.class_list().toggle_with_force("is-focused", focused);
        }
        for (i, th) in self.row_headers.iter().enumerate() {
            let focused = u32::try_from(i).map(|i| i == row).unwrap_or(false);
            let _ = th.class_list().toggle_with_force("is-focused", focused);
        }
    }

    /// Reflect the formatting indicator state on the toolbar toggles.
    pub(crate) fn sync_formatting(&self, formatting: FormattingState) {
        for (command, button) in &self.format_buttons {
            let _ = button
                .class_list()
                .toggle_with_force("is-active", formatting.is_active(*command));
        }
    }

    /// Rewrite every cell's markup from the store.
    pub(crate) fn refresh_cells(&self, grid: &GridState) {
        for (&(row, col), input) in &self.cell_inputs {
            input.set_inner_html(grid.cell(row, col));
        }
    }

    fn create_header_cell(&self, class: &str) -> Result<HtmlTableCellElement> {
        let th: HtmlTableCellElement = create_element(&self.document, "th")?
            .dyn_into()
            .map_err(|_| GridError::Dom("th element cast".into()))?;
        th.set_class_name(class);
        Ok(th)
    }

    fn create_resize_handle(&self, axis: &str, index: u32) -> Result<HtmlDivElement> {
        let handle = create_div(&self.document, &format!("gridedit-resize gridedit-{axis}-resize"))?;
        let _ = handle.set_attribute("data-resize-axis", axis);
        let _ = handle.set_attribute("data-resize-index", &index.to_string());
        set_style(&handle, "position", "absolute");
        if axis == "col" {
            set_style(&handle, "top", "0");
            set_style(&handle, "right", "0");
            set_style(&handle, "width", "5px");
            set_style(&handle, "height", "100%");
            set_style(&handle, "cursor", "col-resize");
        } else {
            set_style(&handle, "left", "0");
            set_style(&handle, "bottom", "0");
            set_style(&handle, "width", "100%");
            set_style(&handle, "height", "5px");
            set_style(&handle, "cursor", "row-resize");
        }
        Ok(handle)
    }
}

fn create_element(document: &Document, tag: &str) -> Result<Element> {
    document
        .create_element(tag)
        .map_err(|e| GridError::Dom(format!("create <{tag}>: {e:?}")))
}

fn create_div(document: &Document, class: &str) -> Result<HtmlDivElement> {
    let el = create_element(document, "div")?;
    el.set_class_name(class);
    el.dyn_into()
        .map_err(|_| GridError::Dom("div element cast".into()))
}

fn create_button(document: &Document, class: &str, caption: &str) -> Result<HtmlButtonElement> {
    let button: HtmlButtonElement = create_element(document, "button")?
        .dyn_into()
        .map_err(|_| GridError::Dom("button element cast".into()))?;
    button.set_class_name(class);
    button.set_text_content(Some(caption));
    let _ = button.set_attribute("type", "button");
    Ok(button)
}

fn append(parent: &Element, child: &Element) -> Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| GridError::Dom(format!("append child: {e:?}")))
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

fn px(value: f32) -> String {
    format!("{value}px")
}
