//! Pagination over channelz listings.

use crate::error::{Error, Result};
use crate::proto::channelz::{Channel, Server, SocketRef};
use crate::service::Page;
use std::collections::HashSet;
use std::future::Future;

/// Which part of a listing to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Exactly one request; the server is trusted to honor the cap.
    Bounded { start_id: i64, max_results: i64 },
    /// Keep requesting until the server signals the end of the list.
    Exhaustive,
}

impl Window {
    pub const DEFAULT_START_ID: i64 = 0;
    pub const DEFAULT_MAX_RESULTS: i64 = 100;

    /// Bounded if either bound is given, filling the other with its default.
    pub fn from_bounds(start_id: Option<i64>, max_results: Option<i64>) -> Self {
        if start_id.is_none() && max_results.is_none() {
            return Window::Exhaustive;
        }
        Window::Bounded {
            start_id: start_id.unwrap_or(Self::DEFAULT_START_ID),
            max_results: max_results.unwrap_or(Self::DEFAULT_MAX_RESULTS),
        }
    }
}

/// Items whose identifier drives the pagination cursor.
pub trait Identified {
    fn entity_id(&self) -> Option<i64>;
}

impl Identified for Channel {
    fn entity_id(&self) -> Option<i64> {
        self.r#ref.as_ref().map(|r| r.channel_id)
    }
}

impl Identified for Server {
    fn entity_id(&self) -> Option<i64> {
        self.r#ref.as_ref().map(|r| r.server_id)
    }
}

impl Identified for SocketRef {
    fn entity_id(&self) -> Option<i64> {
        Some(self.socket_id)
    }
}

/// Fetches the `window` of a listing through `fetch(start_id, max_results)`.
///
/// In exhaustive mode each request starts one past the highest id seen so
/// far, items already seen are dropped, and a page that neither ends the list
/// nor advances the cursor is an error rather than a reason to loop forever.
/// Items keep the order the server returned them in.
pub async fn collect<T, F, Fut>(window: Window, operation: &str, mut fetch: F) -> Result<Vec<T>>
where
    T: Identified,
    F: FnMut(i64, i64) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let (start_id, max_results) = match window {
        Window::Bounded {
            start_id,
            max_results,
        } => return Ok(fetch(start_id, max_results).await?.items),
        Window::Exhaustive => (Window::DEFAULT_START_ID, 0),
    };

    let mut items = Vec::new();
    let mut seen = HashSet::new();
    let mut cursor = start_id;
    loop {
        let page = fetch(cursor, max_results).await?;
        let mut next = cursor;
        for item in page.items {
            if let Some(id) = item.entity_id() {
                next = next.max(id.saturating_add(1));
                if !seen.insert(id) {
                    tracing::debug!(operation, id, "dropping duplicate item");
                    continue;
                }
            }
            items.push(item);
        }

        if page.end {
            return Ok(items);
        }
        if next <= cursor {
            return Err(Error::StalledPagination {
                operation: operation.to_string(),
                start_id: cursor,
            });
        }
        tracing::debug!(operation, start_id = next, "fetching next page");
        cursor = next;
    }
}
