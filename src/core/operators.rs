use crate::utils::error::{DirectoryError, Result};
use futures::{Stream, StreamExt};
use std::future::Future;
use std::pin::pin;

/// Single-value operators over finite streams, complementing `futures::StreamExt`.
pub trait ReactiveStreamExt: Stream + Sized {
    /// First element matching `predicate`, or `None` once the stream ends.
    fn first_where<P>(self, predicate: P) -> impl Future<Output = Option<Self::Item>>
    where
        P: FnMut(&Self::Item) -> bool;

    /// The only element of the stream. Fails when it is empty or emits a second element.
    fn single(self) -> impl Future<Output = Result<Self::Item>>;

    fn has_element(self) -> impl Future<Output = bool>;

    /// Collects every element into one batch, preserving order.
    fn collect_list(self) -> impl Future<Output = Vec<Self::Item>>;
}

impl<S: Stream + Sized> ReactiveStreamExt for S {
    async fn first_where<P>(self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut stream = pin!(self);
        while let Some(item) = stream.next().await {
            if predicate(&item) {
                return Some(item);
            }
        }
        None
    }

    async fn single(self) -> Result<Self::Item> {
        let mut stream = pin!(self);
        let item = stream.next().await.ok_or(DirectoryError::EmptySequence)?;
        if stream.next().await.is_some() {
            return Err(DirectoryError::MultipleElements);
        }
        Ok(item)
    }

    async fn has_element(self) -> bool {
        let mut stream = pin!(self);
        stream.next().await.is_some()
    }

    async fn collect_list(self) -> Vec<Self::Item> {
        self.collect().await
    }
}
