//! Headless scroll state for a rendered list.
//!
//! The presentation layer reports layout (`set_viewport`,
//! `set_content_height`) and drains requests with `take_request`. Rows are
//! one unit tall, so an item index is also its offset.

use std::time::{Duration, Instant};

/// Actions that can be requested on scroll state.
///
/// These are consumed by the presentation layer after the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Scroll to make item at index visible.
    IntoView(usize),
    /// Scroll to top.
    Home,
    /// Scroll to bottom.
    End,
}

/// Scroll state of one list.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current scroll offset (rows from top).
    pub offset: usize,

    /// Viewport height in rows. Zero until the list has been laid out.
    pub viewport: usize,

    /// Total content height in rows.
    pub content_height: usize,

    /// Request to run on the next drain.
    request: Option<ScrollRequest>,

    /// Request that may only run once layout has had time to settle.
    deferred: Option<(ScrollRequest, Instant)>,
}

impl ScrollState {
    /// Create a new scroll state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum scroll offset (content_height - viewport).
    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport)
    }

    /// Whether the list has been laid out at least once.
    pub fn is_laid_out(&self) -> bool {
        self.viewport > 0
    }

    /// Request scroll to make item at index visible.
    pub fn scroll_into_view(&mut self, index: usize) {
        self.request = Some(ScrollRequest::IntoView(index));
    }

    /// Request scroll to top.
    pub fn home(&mut self) {
        self.request = Some(ScrollRequest::Home);
    }

    /// Request scroll to bottom once `delay` has passed since `now`.
    pub fn end_after(&mut self, now: Instant, delay: Duration) {
        self.deferred = Some((ScrollRequest::End, now + delay));
    }

    /// Take and clear the pending request that is ready at `now`.
    ///
    /// Immediate requests win over deferred ones. A deferred request stays
    /// queued until its due time.
    pub fn take_request(&mut self, now: Instant) -> Option<ScrollRequest> {
        if let Some(request) = self.request.take() {
            return Some(request);
        }
        match self.deferred {
            Some((request, due)) if due <= now => {
                self.deferred = None;
                Some(request)
            }
            _ => None,
        }
    }

    /// Check if there's a pending request, due or not.
    pub fn has_request(&self) -> bool {
        self.request.is_some() || self.deferred.is_some()
    }

    /// Set viewport size.
    pub fn set_viewport(&mut self, height: usize) {
        self.viewport = height;
        // Clamp offset if viewport grew larger than content
        self.offset = self.offset.min(self.max_offset());
    }

    /// Set content height.
    pub fn set_content_height(&mut self, height: usize) {
        self.content_height = height;
        // Clamp offset if content shrunk
        self.offset = self.offset.min(self.max_offset());
    }

    /// Apply a scroll request to the offset.
    pub fn apply_request(&mut self, request: ScrollRequest) {
        match request {
            ScrollRequest::IntoView(index) => {
                if index >= self.content_height || self.viewport == 0 {
                    return;
                }
                if index < self.offset {
                    self.offset = index;
                } else if index + 1 > self.offset + self.viewport {
                    self.offset = (index + 1 - self.viewport).min(self.max_offset());
                }
            }
            ScrollRequest::Home => self.offset = 0,
            ScrollRequest::End => self.offset = self.max_offset(),
        }
    }

    /// Apply whatever request is ready at `now`.
    ///
    /// Returns the request that was applied.
    pub fn process_request(&mut self, now: Instant) -> Option<ScrollRequest> {
        let request = self.take_request(now)?;
        self.apply_request(request);
        Some(request)
    }
}
