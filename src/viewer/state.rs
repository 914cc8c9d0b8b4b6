//! Page navigation and zoom for an open issue.
//!
//! The state is a plain record; every transition consumes it and returns the
//! next one, so a client can round-trip it through the API between renders.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.25;
pub const MAX_VISIBLE_PAGE_BUTTONS: u32 = 5;
pub const MAX_PAGE_WIDTH: u32 = 800;
pub const PAGE_GUTTER: u32 = 40;

/// The renderer could not parse or display the document. The renderer's
/// message is kept verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to load PDF: {0}")]
pub struct RenderFailure(pub String);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct ViewerState {
    /// 1-based.
    pub current_page: u32,
    pub total_pages: u32,
    pub zoom: f64,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewerAction {
    Open,
    DocumentLoaded { num_pages: u32 },
    DocumentFailed { message: String },
    Retry,
    GoTo { page: u32 },
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageButton {
    Page { number: u32, current: bool },
    Ellipsis,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::open()
    }
}

impl ViewerState {
    /// A freshly opened document: first page, no zoom, waiting for the renderer.
    pub fn open() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            zoom: 1.0,
            loading: true,
            error: None,
        }
    }

    /// Pulls a client supplied state back inside the page and zoom bounds.
    pub fn sanitized(self) -> Self {
        let last_page = self.total_pages.max(1);
        let zoom = if self.zoom.is_finite() {
            self.zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            1.0
        };
        Self {
            current_page: self.current_page.clamp(1, last_page),
            zoom,
            ..self
        }
    }

    pub fn apply(self, action: ViewerAction) -> Self {
        match action {
            ViewerAction::Open | ViewerAction::Retry => Self::open(),
            ViewerAction::DocumentLoaded { num_pages } => self.document_loaded(num_pages),
            ViewerAction::DocumentFailed { message } => {
                self.document_failed(RenderFailure(message))
            }
            ViewerAction::GoTo { page } => self.go_to(page),
            ViewerAction::Next => self.next(),
            ViewerAction::Previous => self.previous(),
            ViewerAction::ZoomIn => self.zoom_in(),
            ViewerAction::ZoomOut => self.zoom_out(),
        }
    }

    pub fn document_loaded(self, num_pages: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: num_pages,
            loading: false,
            error: None,
            ..self
        }
    }

    pub fn document_failed(self, failure: RenderFailure) -> Self {
        Self {
            loading: false,
            error: Some(failure.to_string()),
            ..self
        }
    }

    /// Out-of-range pages leave the state untouched.
    pub fn go_to(self, page: u32) -> Self {
        if page >= 1 && page <= self.total_pages {
            Self {
                current_page: page,
                ..self
            }
        } else {
            self
        }
    }

    pub fn next(self) -> Self {
        let page = self.current_page.saturating_add(1);
        self.go_to(page)
    }

    pub fn previous(self) -> Self {
        let page = self.current_page.saturating_sub(1);
        self.go_to(page)
    }

    pub fn zoom_in(self) -> Self {
        Self {
            zoom: (self.zoom + ZOOM_STEP).min(MAX_ZOOM),
            ..self
        }
    }

    pub fn zoom_out(self) -> Self {
        Self {
            zoom: (self.zoom - ZOOM_STEP).max(MIN_ZOOM),
            ..self
        }
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Numbered buttons for the first pages, followed by an ellipsis when
    /// the document is longer than the button strip.
    pub fn page_buttons(&self) -> Vec<PageButton> {
        let visible = self.total_pages.min(MAX_VISIBLE_PAGE_BUTTONS);
        let mut buttons: Vec<PageButton> = (1..=visible)
            .map(|number| PageButton::Page {
                number,
                current: number == self.current_page,
            })
            .collect();
        if self.total_pages > MAX_VISIBLE_PAGE_BUTTONS {
            buttons.push(PageButton::Ellipsis);
        }
        buttons
    }
}

/// Rendered page width for a container of the given width.
pub fn page_width(container_width: u32) -> u32 {
    container_width.saturating_sub(PAGE_GUTTER).min(MAX_PAGE_WIDTH)
}
