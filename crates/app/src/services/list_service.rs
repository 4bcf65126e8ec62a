//! List service — use-cases for reading and replacing block lists.

use callblocker_domain::error::CallBlockerError;
use callblocker_domain::list::{BlockList, ListDir, ListPage, ListPayload, ListSummary};
use callblocker_domain::page::{ContentRange, PageRequest};

use crate::ports::ListRepository;

/// A page of a list together with the range it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct ListWindow {
    pub page: ListPage,
    pub range: ContentRange,
}

/// Application service for list reads and writes.
pub struct ListService<R> {
    repo: R,
}

impl<R: ListRepository> ListService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Load the list under `dir` and cut the requested window out of it.
    ///
    /// The page label is the stored list's name.
    ///
    /// # Errors
    ///
    /// Returns [`CallBlockerError::NotFound`] when the list does not exist,
    /// [`CallBlockerError::Decode`] when it is malformed, or a storage error
    /// from the repository.
    pub async fn read_page(
        &self,
        dir: ListDir,
        page: PageRequest,
    ) -> Result<ListWindow, CallBlockerError> {
        let list = self.repo.load(dir).await?;
        let total = list.entries.len();
        let items = page.window(&list.entries).to_vec();
        tracing::debug!(
            list = %dir,
            start = page.start,
            returned = items.len(),
            total,
            "read list page"
        );

        Ok(ListWindow {
            page: ListPage {
                num_rows: total,
                label: list.name,
                items,
            },
            range: page.content_range(total),
        })
    }

    /// Overwrite the list under `dir` with `payload`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn replace(
        &self,
        dir: ListDir,
        payload: ListPayload,
    ) -> Result<BlockList, CallBlockerError> {
        let list = BlockList::from(payload);
        self.repo.save(dir, list.clone()).await?;
        tracing::info!(
            list = %dir,
            name = %list.name,
            entries = list.entries.len(),
            "replaced list"
        );
        Ok(list)
    }

    /// Summarize every known list that is currently stored.
    ///
    /// Lists with no stored document are skipped.
    ///
    /// # Errors
    ///
    /// Returns the first error other than [`CallBlockerError::NotFound`].
    pub async fn summaries(&self) -> Result<Vec<ListSummary>, CallBlockerError> {
        let mut summaries = Vec::with_capacity(ListDir::ALL.len());
        for dir in ListDir::ALL {
            match self.repo.load(dir).await {
                Ok(list) => summaries.push(ListSummary::new(dir, &list)),
                Err(CallBlockerError::NotFound(_)) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callblocker_domain::error::{DecodeError, NotFoundError};
    use serde_json::json;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryListRepo {
        store: Mutex<HashMap<ListDir, BlockList>>,
        corrupt: Option<ListDir>,
    }

    impl ListRepository for InMemoryListRepo {
        fn load(
            &self,
            dir: ListDir,
        ) -> impl Future<Output = Result<BlockList, CallBlockerError>> + Send {
            let result = if self.corrupt == Some(dir) {
                let source = serde_json::from_str::<BlockList>("{").unwrap_err();
                Err(DecodeError::StoredList {
                    list: dir.to_string(),
                    source,
                }
                .into())
            } else {
                let store = self.store.lock().unwrap();
                store.get(&dir).cloned().ok_or_else(|| {
                    NotFoundError {
                        entity: "List",
                        id: dir.to_string(),
                    }
                    .into()
                })
            };
            async { result }
        }

        fn save(
            &self,
            dir: ListDir,
            list: BlockList,
        ) -> impl Future<Output = Result<(), CallBlockerError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(dir, list);
            async { Ok(()) }
        }
    }

    fn make_service() -> ListService<InMemoryListRepo> {
        ListService::new(InMemoryListRepo::default())
    }

    async fn seeded_service() -> ListService<InMemoryListRepo> {
        let svc = make_service();
        svc.replace(
            ListDir::Blacklists,
            ListPayload {
                label: "Blacklist".to_string(),
                items: vec![json!("555-0100"), json!("555-0200"), json!("555-0300")],
            },
        )
        .await
        .unwrap();
        svc
    }

    #[tokio::test]
    async fn should_return_requested_window_and_total() {
        let svc = seeded_service().await;

        let window = svc
            .read_page(ListDir::Blacklists, PageRequest::new(1, Some(1)))
            .await
            .unwrap();

        assert_eq!(window.page.num_rows, 3);
        assert_eq!(window.page.items, vec![json!("555-0200")]);
        assert_eq!(window.range.to_string(), "items 1-2/3");
    }

    #[tokio::test]
    async fn should_label_page_with_stored_name() {
        let svc = seeded_service().await;
        let window = svc
            .read_page(ListDir::Blacklists, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(window.page.label, "Blacklist");
        assert_eq!(window.page.items.len(), 3);
    }

    #[tokio::test]
    async fn should_keep_num_rows_when_start_past_end() {
        let svc = seeded_service().await;
        let window = svc
            .read_page(ListDir::Blacklists, PageRequest::new(7, Some(2)))
            .await
            .unwrap();
        assert_eq!(window.page.num_rows, 3);
        assert!(window.page.items.is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_list_missing() {
        let svc = make_service();
        let result = svc
            .read_page(ListDir::Whitelists, PageRequest::default())
            .await;
        assert!(matches!(result, Err(CallBlockerError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_roundtrip_replaced_list() {
        let svc = make_service();
        let saved = svc
            .replace(
                ListDir::Whitelists,
                ListPayload {
                    label: "L".to_string(),
                    items: vec![json!("a"), json!("b")],
                },
            )
            .await
            .unwrap();
        assert_eq!(saved.name, "L");

        let window = svc
            .read_page(ListDir::Whitelists, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(window.page.items, vec![json!("a"), json!("b")]);
        assert_eq!(window.page.num_rows, 2);
    }

    #[tokio::test]
    async fn should_replace_whole_list_on_each_write() {
        let svc = seeded_service().await;
        svc.replace(
            ListDir::Blacklists,
            ListPayload {
                label: "Shorter".to_string(),
                items: vec![json!("555-0999")],
            },
        )
        .await
        .unwrap();

        let window = svc
            .read_page(ListDir::Blacklists, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(window.page.label, "Shorter");
        assert_eq!(window.page.num_rows, 1);
        assert_eq!(window.page.items, vec![json!("555-0999")]);
    }

    #[tokio::test]
    async fn should_summarize_only_stored_lists() {
        let svc = seeded_service().await;
        let summaries = svc.summaries().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].dirname, ListDir::Blacklists);
        assert_eq!(summaries[0].num_rows, 3);
    }

    #[tokio::test]
    async fn should_fail_summaries_when_a_list_is_corrupt() {
        let svc = ListService::new(InMemoryListRepo {
            corrupt: Some(ListDir::Whitelists),
            ..InMemoryListRepo::default()
        });
        let result = svc.summaries().await;
        assert!(matches!(result, Err(CallBlockerError::Decode(_))));
    }
}
